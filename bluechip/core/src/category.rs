/// Selected entry of the category filter.
///
/// Clicking the selected category again clears the selection. A parent may
/// drive the value through `sync_external`, but only a concrete id overrides
/// the internal choice; an external `None` leaves it alone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategorySelection {
    selected: Option<String>,
}

impl CategorySelection {
    /// Selection starting from the caller's initial category, if any.
    pub fn new(initial: Option<String>) -> Self {
        CategorySelection { selected: initial }
    }

    /// Currently highlighted category id.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether `id` is the highlighted category.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Handles a click on `id` and returns the value to report to listeners.
    pub fn select(&mut self, id: &str) -> Option<String> {
        self.selected = if self.is_selected(id) {
            None
        } else {
            Some(id.to_string())
        };
        self.selected.clone()
    }

    /// Returns true when the external value replaced the internal one.
    pub fn sync_external(&mut self, active: Option<&str>) -> bool {
        match active {
            Some(id) if !self.is_selected(id) => {
                self.selected = Some(id.to_string());
                true
            }
            _ => false,
        }
    }
}
