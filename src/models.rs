//! Frontend Models
//!
//! Data structures matching the catalog API payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Tag reference as the API sends it: `{ "_id": "...", "tags": "label" }`.
///
/// The same shape is used by `GET /tags` for the tag catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "tags")]
    pub name: String,
}

/// A brand's tag entry: either a populated reference or a bare id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagEntry {
    Ref(TagRef),
    Id(String),
}

impl TagEntry {
    pub fn id(&self) -> &str {
        match self {
            TagEntry::Ref(tag) => &tag.id,
            TagEntry::Id(id) => id,
        }
    }

    /// Display label, resolving bare ids through the tag catalog.
    /// Falls back to the id when the catalog doesn't know it.
    pub fn label<'a>(&'a self, catalog: &'a [TagRef]) -> &'a str {
        match self {
            TagEntry::Ref(tag) => &tag.name,
            TagEntry::Id(id) => catalog
                .iter()
                .find(|tag| &tag.id == id)
                .map(|tag| tag.name.as_str())
                .unwrap_or(id),
        }
    }
}

/// Moderation status (dashboard only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl BrandStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrandStatus::Pending => "pending",
            BrandStatus::Approved => "approved",
            BrandStatus::Rejected => "rejected",
            BrandStatus::Unknown => "unknown",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            BrandStatus::Pending => "status-badge pending",
            BrandStatus::Approved => "status-badge approved",
            _ => "status-badge rejected",
        }
    }
}

/// Brand data structure (matches API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default)]
    pub tags: Option<Vec<TagEntry>>,
    #[serde(default)]
    pub links: Option<Vec<String>>,
    #[serde(default, rename = "primaryColor")]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub status: Option<BrandStatus>,
}

impl Brand {
    pub fn tag_entries(&self) -> &[TagEntry] {
        self.tags.as_deref().unwrap_or(&[])
    }

    pub fn tag_ids(&self) -> Vec<String> {
        self.tag_entries().iter().map(|t| t.id().to_string()).collect()
    }

    pub fn links(&self) -> &[String] {
        self.links.as_deref().unwrap_or(&[])
    }
}

/// Raw `GET /brands` payload; both shapes occur in the wild
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BrandPayload {
    Bare(Vec<Brand>),
    Paged {
        #[serde(default)]
        brands: Option<Vec<Brand>>,
        #[serde(default, rename = "totalPages")]
        total_pages: Option<u32>,
    },
}

/// Partial update sent with `PATCH /dashboard/brands/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BrandPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BrandStatus>,
}

impl BrandPatch {
    pub fn status(status: BrandStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_with_populated_tags() {
        let json = r##"{
            "_id": "b1",
            "name": "Nile Threads",
            "description": "Cotton basics",
            "image": "https://cdn.example/nile.png",
            "tags": [{"_id": "t1", "tags": "Fashion"}],
            "links": ["https://instagram.com/nile"],
            "primaryColor": "#112233"
        }"##;
        let brand: Brand = serde_json::from_str(json).unwrap();
        assert_eq!(brand.id, "b1");
        assert_eq!(brand.tag_ids(), vec!["t1".to_string()]);
        assert_eq!(brand.primary_color.as_deref(), Some("#112233"));
        assert_eq!(brand.links().len(), 1);
        assert!(brand.status.is_none());
    }

    #[test]
    fn test_brand_with_bare_tag_ids_and_missing_optionals() {
        let json = r#"{"_id": "b2", "name": "Siwa Salt", "tags": ["t1", "t9"]}"#;
        let brand: Brand = serde_json::from_str(json).unwrap();
        assert_eq!(brand.description, "");
        assert_eq!(brand.tag_ids(), vec!["t1".to_string(), "t9".to_string()]);

        let catalog = vec![TagRef { id: "t1".into(), name: "Food".into() }];
        let labels: Vec<&str> = brand.tag_entries().iter().map(|t| t.label(&catalog)).collect();
        assert_eq!(labels, vec!["Food", "t9"]);
    }

    #[test]
    fn test_payload_shapes() {
        let bare: BrandPayload = serde_json::from_str(r#"[{"_id": "a", "name": "A"}]"#).unwrap();
        assert!(matches!(bare, BrandPayload::Bare(ref v) if v.len() == 1));

        let paged: BrandPayload =
            serde_json::from_str(r#"{"brands": [{"_id": "a", "name": "A"}], "totalPages": 4}"#).unwrap();
        match paged {
            BrandPayload::Paged { brands, total_pages } => {
                assert_eq!(brands.map(|b| b.len()), Some(1));
                assert_eq!(total_pages, Some(4));
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_null_text_fields_decode_as_empty() {
        let bare: BrandPayload = serde_json::from_str(
            r#"[{"_id": "a", "name": "A", "image": "x"}, {"_id": "b", "name": "B", "image": null, "description": null}]"#,
        )
        .unwrap();
        match bare {
            BrandPayload::Bare(brands) => {
                assert_eq!(brands.len(), 2);
                assert_eq!(brands[0].image, "x");
                assert_eq!(brands[1].image, "");
                assert_eq!(brands[1].description, "");
            }
            other => panic!("unexpected payload: {:?}", other),
        }

        let paged: BrandPayload = serde_json::from_str(
            r#"{"brands": [{"_id": "a", "name": "A", "description": null, "image": null}], "totalPages": 2}"#,
        )
        .unwrap();
        match paged {
            BrandPayload::Paged { brands, total_pages } => {
                let brands = brands.unwrap_or_default();
                assert_eq!(brands.len(), 1);
                assert_eq!(brands[0].description, "");
                assert_eq!(total_pages, Some(2));
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_status_decoding() {
        let statuses: Vec<BrandStatus> =
            serde_json::from_str(r#"["pending", "approved", "rejected", "archived"]"#).unwrap();
        assert_eq!(
            statuses,
            vec![BrandStatus::Pending, BrandStatus::Approved, BrandStatus::Rejected, BrandStatus::Unknown]
        );
    }

    #[test]
    fn test_patch_skips_unset_fields() {
        let body = serde_json::to_string(&BrandPatch::status(BrandStatus::Approved)).unwrap();
        assert_eq!(body, r#"{"status":"approved"}"#);
    }
}
