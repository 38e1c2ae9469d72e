use std::collections::HashMap;

/// Open/closed state of independently collapsible sections, keyed by name.
///
/// A name that was never toggled counts as closed. Opening one section leaves
/// the others alone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpandedSections {
    sections: HashMap<String, bool>,
}

impl ExpandedSections {
    /// Every section starts closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the section called `name` is open.
    pub fn is_expanded(&self, name: &str) -> bool {
        self.sections.get(name).copied().unwrap_or(false)
    }

    /// Flips the section and returns its new state.
    pub fn toggle(&mut self, name: &str) -> bool {
        let entry = self.sections.entry(name.to_string()).or_insert(false);
        *entry = !*entry;
        *entry
    }
}

/// DOM id of the collapsible list belonging to a footer section.
pub fn section_dom_id(name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    format!("footer-section-{slug}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cannot_expand_absent_sections() {
        assert!(!ExpandedSections::new().is_expanded("Games"));
    }

    #[test]
    fn can_restore_state_by_toggling_twice() {
        let mut sections = ExpandedSections::new();

        assert!(sections.toggle("Games"));
        assert!(sections.is_expanded("Games"));
        assert!(!sections.toggle("Games"));
        assert!(!sections.is_expanded("Games"));
    }

    #[test]
    fn can_toggle_sections_independently() {
        let mut sections = ExpandedSections::new();
        sections.toggle("About");

        sections.toggle("Games");
        assert!(sections.is_expanded("About"));
        sections.toggle("Games");
        assert!(sections.is_expanded("About"));
    }

    #[test]
    fn can_slugify_dom_id() {
        assert_eq!(
            section_dom_id("Legal Information"),
            "footer-section-legal-information"
        );
        assert_eq!(section_dom_id("Games"), "footer-section-games");
    }
}
