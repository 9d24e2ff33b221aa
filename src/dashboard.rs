//! Moderation Dashboard State
//!
//! Row actions and local list updates for the admin brand table.

use crate::models::{Brand, BrandPatch, BrandStatus};
use crate::query::TagSelection;

/// Options of the per-row actions select, as (value, label)
pub const ACTION_OPTIONS: [(&str, &str); 4] = [
    ("approved", "Approve"),
    ("rejected", "Reject"),
    ("pending", "Pending"),
    ("delete", "Delete"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    SetStatus(BrandStatus),
    Delete,
}

impl DashboardAction {
    /// Parse a select value; the empty placeholder yields `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "approved" => Some(DashboardAction::SetStatus(BrandStatus::Approved)),
            "rejected" => Some(DashboardAction::SetStatus(BrandStatus::Rejected)),
            "pending" => Some(DashboardAction::SetStatus(BrandStatus::Pending)),
            "delete" => Some(DashboardAction::Delete),
            _ => None,
        }
    }
}

/// Copy the server-confirmed status onto the matching row
pub fn apply_status(rows: &mut [Brand], id: &str, status: Option<BrandStatus>) {
    if let Some(row) = rows.iter_mut().find(|b| b.id == id) {
        row.status = status;
    }
}

pub fn remove_row(rows: &mut Vec<Brand>, id: &str) {
    rows.retain(|b| b.id != id);
}

/// Which row, if any, has a request in flight
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowBusy {
    pub saving: Option<String>,
    pub deleting: Option<String>,
}

impl RowBusy {
    pub fn is_saving(&self, id: &str) -> bool {
        self.saving.as_deref() == Some(id)
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.as_deref() == Some(id)
    }

    pub fn is_busy(&self, id: &str) -> bool {
        self.is_saving(id) || self.is_deleting(id)
    }
}

/// Full edit from the review page
pub fn review_patch(
    name: &str,
    description: &str,
    links: &[String],
    tags: &TagSelection,
) -> BrandPatch {
    BrandPatch {
        name: Some(name.to_string()),
        description: Some(description.to_string()),
        links: Some(links.to_vec()),
        tags: Some(tags.ids().to_vec()),
        status: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, status: BrandStatus) -> Brand {
        Brand {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            image: String::new(),
            tags: None,
            links: None,
            primary_color: None,
            status: Some(status),
        }
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(
            DashboardAction::parse("approved"),
            Some(DashboardAction::SetStatus(BrandStatus::Approved))
        );
        assert_eq!(DashboardAction::parse("delete"), Some(DashboardAction::Delete));
        assert_eq!(DashboardAction::parse(""), None);
        for (value, _) in ACTION_OPTIONS {
            assert!(DashboardAction::parse(value).is_some());
        }
    }

    #[test]
    fn test_apply_status_and_remove() {
        let mut rows = vec![row("a", BrandStatus::Pending), row("b", BrandStatus::Pending)];
        apply_status(&mut rows, "b", Some(BrandStatus::Approved));
        assert_eq!(rows[1].status, Some(BrandStatus::Approved));
        assert_eq!(rows[0].status, Some(BrandStatus::Pending));

        remove_row(&mut rows, "a");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "b");
    }

    #[test]
    fn test_row_busy() {
        let busy = RowBusy { saving: Some("a".into()), deleting: None };
        assert!(busy.is_busy("a"));
        assert!(!busy.is_busy("b"));
        assert!(!busy.is_deleting("a"));
    }

    #[test]
    fn test_review_patch_serializes_all_edit_fields() {
        let tags: TagSelection = vec!["t1".to_string()].into_iter().collect();
        let patch = review_patch("Nile", "Cotton", &["https://x.test".to_string()], &tags);
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["name"], "Nile");
        assert_eq!(json["tags"][0], "t1");
        assert!(json.get("status").is_none());
    }
}
