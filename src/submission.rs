//! Brand Submission Form State
//!
//! Four-step wizard: name, details, links, review. Also home to the link
//! list editing rules shared with the admin review page.

use crate::query::TagSelection;

pub const STEP_TITLES: [&str; 4] = [
    "Personal Information",
    "Brand Details",
    "Links",
    "Review & Submit",
];
pub const TOTAL_STEPS: usize = STEP_TITLES.len();

/// Replace the link at `index` (ignored when out of range)
pub fn set_link(links: &mut [String], index: usize, value: String) {
    if let Some(link) = links.get_mut(index) {
        *link = value;
    }
}

pub fn add_link(links: &mut Vec<String>) {
    links.push(String::new());
}

/// Remove a link row; the last remaining row is kept
pub fn remove_link(links: &mut Vec<String>, index: usize) {
    if links.len() > 1 && index < links.len() {
        links.remove(index);
    }
}

/// Link rows for an edit form: at least one, possibly empty, row
pub fn editable_links(links: &[String]) -> Vec<String> {
    if links.is_empty() {
        vec![String::new()]
    } else {
        links.to_vec()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionForm {
    /// 1-based wizard step
    pub step: usize,
    pub name: String,
    pub description: String,
    pub links: Vec<String>,
    pub tags: TagSelection,
}

impl Default for SubmissionForm {
    fn default() -> Self {
        Self {
            step: 1,
            name: String::new(),
            description: String::new(),
            links: vec![String::new()],
            tags: TagSelection::default(),
        }
    }
}

impl SubmissionForm {
    pub fn next_step(&mut self) {
        self.step = (self.step + 1).min(TOTAL_STEPS);
    }

    pub fn prev_step(&mut self) {
        self.step = self.step.saturating_sub(1).max(1);
    }

    pub fn is_last_step(&self) -> bool {
        self.step == TOTAL_STEPS
    }

    pub fn title(&self) -> &'static str {
        STEP_TITLES[self.step.clamp(1, TOTAL_STEPS) - 1]
    }

    /// Whether the current step has what it needs to move on
    pub fn step_is_valid(&self) -> bool {
        match self.step {
            1 => !self.name.is_empty(),
            2 => !self.description.is_empty(),
            3 => self.links.iter().all(|l| !l.is_empty()),
            _ => true,
        }
    }

    /// Enter key handling: advance when the step validates.
    ///
    /// Never fires from a textarea, while the tag dropdown is open on the
    /// links step, or on the last step (where Enter submits).
    pub fn advance_on_enter(&mut self, in_textarea: bool, dropdown_open: bool) -> bool {
        if in_textarea || (dropdown_open && self.step == 3) || self.is_last_step() {
            return false;
        }
        if !self.step_is_valid() {
            return false;
        }
        self.next_step();
        true
    }

    /// Clear the entered data after a successful submit, staying on the
    /// current step.
    pub fn clear_fields(&mut self) {
        *self = Self {
            step: self.step,
            ..Self::default()
        };
    }

    /// Multipart fields in wire order: `name`, `description`, `links[i]`, `tags[i]`
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("name".to_string(), self.name.clone()),
            ("description".to_string(), self.description.clone()),
        ];
        fields.extend(
            self.links
                .iter()
                .enumerate()
                .map(|(i, link)| (format!("links[{}]", i), link.clone())),
        );
        fields.extend(
            self.tags
                .ids()
                .iter()
                .enumerate()
                .map(|(i, id)| (format!("tags[{}]", i), id.clone())),
        );
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SubmissionForm {
        SubmissionForm {
            step: 1,
            name: "Nile Threads".into(),
            description: "Cotton basics".into(),
            links: vec!["https://instagram.com/nile".into()],
            tags: TagSelection::default(),
        }
    }

    #[test]
    fn test_steps_clamp() {
        let mut form = SubmissionForm::default();
        form.prev_step();
        assert_eq!(form.step, 1);
        for _ in 0..10 {
            form.next_step();
        }
        assert_eq!(form.step, TOTAL_STEPS);
        assert_eq!(form.title(), "Review & Submit");
    }

    #[test]
    fn test_enter_requires_valid_step() {
        let mut form = SubmissionForm::default();
        assert!(!form.advance_on_enter(false, false));
        form.name = "Nile".into();
        assert!(form.advance_on_enter(false, false));
        assert_eq!(form.step, 2);
        // description missing
        assert!(!form.advance_on_enter(false, false));
    }

    #[test]
    fn test_enter_ignored_in_textarea_dropdown_and_last_step() {
        let mut form = filled();
        assert!(!form.advance_on_enter(true, false));
        form.step = 3;
        assert!(!form.advance_on_enter(false, true));
        assert!(form.advance_on_enter(false, false));
        assert_eq!(form.step, 4);
        assert!(!form.advance_on_enter(false, false));
    }

    #[test]
    fn test_empty_link_blocks_links_step() {
        let mut form = filled();
        form.step = 3;
        add_link(&mut form.links);
        assert!(!form.step_is_valid());
        set_link(&mut form.links, 1, "https://nile.example".into());
        assert!(form.step_is_valid());
    }

    #[test]
    fn test_link_list_keeps_one_row() {
        let mut links = vec!["a".to_string()];
        remove_link(&mut links, 0);
        assert_eq!(links, vec!["a".to_string()]);
        add_link(&mut links);
        remove_link(&mut links, 0);
        assert_eq!(links, vec![String::new()]);
        remove_link(&mut links, 5);
        assert_eq!(links.len(), 1);
        assert_eq!(editable_links(&[]), vec![String::new()]);
    }

    #[test]
    fn test_form_fields_order() {
        let mut form = filled();
        add_link(&mut form.links);
        set_link(&mut form.links, 1, "https://nile.example".into());
        form.tags = form.tags.with("t2").with("t1").with("t2");
        let fields = form.form_fields();
        let names: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            names,
            vec!["name", "description", "links[0]", "links[1]", "tags[0]", "tags[1]"]
        );
        assert_eq!(fields[4].1, "t2");
    }

    #[test]
    fn test_clear_fields_keeps_step() {
        let mut form = filled();
        form.step = 4;
        form.tags = form.tags.with("t1");
        form.clear_fields();
        assert_eq!(form.step, 4);
        assert_eq!(form.links, vec![String::new()]);
        assert!(form.tags.is_empty());
        assert!(form.name.is_empty());
    }
}
