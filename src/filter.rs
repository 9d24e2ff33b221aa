//! Client-side Tag Filter
//!
//! AND semantics: a brand passes only if it carries every selected tag.

use crate::models::{Brand, TagRef};
use crate::query::TagSelection;

/// True when the brand's tag set is a superset of the selection.
/// Brands without a tag list only pass an empty selection.
pub fn matches_all_tags(brand: &Brand, selection: &TagSelection) -> bool {
    if selection.is_empty() {
        return true;
    }
    match &brand.tags {
        Some(entries) => selection
            .ids()
            .iter()
            .all(|id| entries.iter().any(|entry| entry.id() == id)),
        None => false,
    }
}

pub fn filter_by_tags(brands: &[Brand], selection: &TagSelection) -> Vec<Brand> {
    brands
        .iter()
        .filter(|brand| matches_all_tags(brand, selection))
        .cloned()
        .collect()
}

/// Catalog tags for the selected pills, in selection order.
/// Ids missing from the catalog are skipped.
pub fn selected_options(catalog: &[TagRef], selection: &TagSelection) -> Vec<TagRef> {
    selection
        .ids()
        .iter()
        .filter_map(|id| catalog.iter().find(|tag| &tag.id == id).cloned())
        .collect()
}

/// Catalog tags still available in the dropdown
pub fn unselected_options(catalog: &[TagRef], selection: &TagSelection) -> Vec<TagRef> {
    catalog
        .iter()
        .filter(|tag| !selection.contains(&tag.id))
        .cloned()
        .collect()
}

pub fn selection_label(selection: &TagSelection, placeholder: &str) -> String {
    if selection.is_empty() {
        placeholder.to_string()
    } else {
        format!("{} tag(s) selected", selection.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TagEntry;

    fn brand(id: &str, tags: Option<&[&str]>) -> Brand {
        Brand {
            id: id.to_string(),
            name: format!("Brand {}", id),
            description: String::new(),
            image: String::new(),
            tags: tags.map(|ids| ids.iter().map(|t| TagEntry::Id(t.to_string())).collect()),
            links: None,
            primary_color: None,
            status: None,
        }
    }

    fn selection(ids: &[&str]) -> TagSelection {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn catalog() -> Vec<TagRef> {
        ["A", "B", "C"]
            .iter()
            .map(|id| TagRef { id: id.to_string(), name: format!("Tag {}", id) })
            .collect()
    }

    #[test]
    fn test_and_semantics() {
        let brands = vec![brand("1", Some(&["A", "B"])), brand("2", Some(&["A"]))];
        let result = filter_by_tags(&brands, &selection(&["A", "B"]));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn test_empty_selection_is_identity() {
        let brands = vec![brand("1", Some(&["A"])), brand("2", None), brand("3", Some(&[]))];
        assert_eq!(filter_by_tags(&brands, &TagSelection::default()), brands);
    }

    #[test]
    fn test_untagged_brand_never_matches_selection() {
        let brands = vec![brand("1", None), brand("2", Some(&[]))];
        assert!(filter_by_tags(&brands, &selection(&["A"])).is_empty());
    }

    #[test]
    fn test_results_are_supersets_of_selection() {
        let brands = vec![
            brand("1", Some(&["A", "B", "C"])),
            brand("2", Some(&["B", "C"])),
            brand("3", Some(&["C"])),
            brand("4", Some(&["A", "C"])),
        ];
        let sel = selection(&["C", "A"]);
        let result = filter_by_tags(&brands, &sel);
        let ids: Vec<&str> = result.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
        for b in &result {
            let tags = b.tag_ids();
            assert!(sel.ids().iter().all(|id| tags.contains(id)));
        }
    }

    #[test]
    fn test_populated_refs_match_by_id() {
        let mut b = brand("1", None);
        b.tags = Some(vec![TagEntry::Ref(TagRef { id: "A".into(), name: "Tag A".into() })]);
        assert!(matches_all_tags(&b, &selection(&["A"])));
    }

    #[test]
    fn test_dropdown_options() {
        let sel = selection(&["C", "Z", "A"]);
        let picked: Vec<String> = selected_options(&catalog(), &sel).into_iter().map(|t| t.id).collect();
        assert_eq!(picked, vec!["C", "A"]);
        let rest: Vec<String> = unselected_options(&catalog(), &sel).into_iter().map(|t| t.id).collect();
        assert_eq!(rest, vec!["B"]);
    }

    #[test]
    fn test_selection_label() {
        assert_eq!(selection_label(&TagSelection::default(), "Filter by tags..."), "Filter by tags...");
        assert_eq!(selection_label(&selection(&["A", "B"]), "x"), "2 tag(s) selected");
    }
}
