use crate::errors::{FolioError, Result};
use crate::model::FilterLabel;

/// The currently selected filter chip of one projects-page mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSelection {
    current: FilterLabel,
}

impl FilterSelection {
    /// A selection starting at the "all" sentinel
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(label: FilterLabel) -> Self {
        Self { current: label }
    }

    /// Build a selection from a raw query value and correct it against `filters`
    ///
    /// A missing value starts at "all". An unparseable value counts as a
    /// stale selection and lands on the list's first entry.
    pub fn from_query(raw: Option<&str>, filters: &[FilterLabel]) -> Self {
        let mut selection = match raw.map(str::parse::<FilterLabel>) {
            None => Self::new(),
            Some(Ok(label)) => Self::with_label(label),
            Some(Err(_)) => Self::with_label(fallback(filters)),
        };
        selection.reconcile(filters);
        selection
    }

    pub fn current(&self) -> FilterLabel {
        self.current
    }

    /// Explicit user selection; only labels offered by `filters` are accepted
    ///
    /// # Errors
    ///
    /// Returns `LabelNotOffered` and leaves the selection unchanged when
    /// `label` is not in `filters`.
    pub fn select(&mut self, label: FilterLabel, filters: &[FilterLabel]) -> Result<()> {
        if !filters.contains(&label) {
            return Err(FolioError::LabelNotOffered {
                label: label.to_string(),
            });
        }
        self.current = label;
        Ok(())
    }

    /// Reset the selection when `filters` no longer offers it
    ///
    /// Falls back to the first filter, or "all" when the list is empty.
    /// Returns whether the selection changed; a valid selection is left alone.
    pub fn reconcile(&mut self, filters: &[FilterLabel]) -> bool {
        if filters.contains(&self.current) {
            return false;
        }
        let next = fallback(filters);
        let changed = next != self.current;
        self.current = next;
        changed
    }

    /// Whether `label` is the selected chip
    pub fn is_active(&self, label: FilterLabel) -> bool {
        self.current == label
    }
}

fn fallback(filters: &[FilterLabel]) -> FilterLabel {
    filters.first().copied().unwrap_or(FilterLabel::All)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectCategory;

    const FRONTEND: FilterLabel = FilterLabel::Category(ProjectCategory::Frontend);
    const BACKEND: FilterLabel = FilterLabel::Category(ProjectCategory::Backend);

    #[test]
    fn test_stale_selection_resets_to_first_filter() {
        let filters = [FilterLabel::All, FRONTEND];
        let mut selection = FilterSelection::with_label(BACKEND);

        assert!(selection.reconcile(&filters));
        assert_eq!(selection.current(), FilterLabel::All);
    }

    #[test]
    fn test_first_filter_need_not_be_all() {
        let filters = [FRONTEND, BACKEND];
        let mut selection = FilterSelection::new();

        selection.reconcile(&filters);
        assert_eq!(selection.current(), FRONTEND);
    }

    #[test]
    fn test_empty_filter_list_falls_back_to_all() {
        let mut selection = FilterSelection::with_label(BACKEND);

        selection.reconcile(&[]);
        assert_eq!(selection.current(), FilterLabel::All);
    }

    #[test]
    fn test_reconcile_is_noop_when_valid() {
        let filters = [FilterLabel::All, BACKEND];
        let mut selection = FilterSelection::with_label(BACKEND);

        assert!(!selection.reconcile(&filters));
        assert_eq!(selection.current(), BACKEND);
    }

    #[test]
    fn test_select_rejects_label_not_offered() {
        let filters = [FilterLabel::All, FRONTEND];
        let mut selection = FilterSelection::new();

        let err = selection.select(BACKEND, &filters).unwrap_err();
        assert!(matches!(err, FolioError::LabelNotOffered { .. }));
        assert_eq!(selection.current(), FilterLabel::All);

        selection.select(FRONTEND, &filters).unwrap();
        assert!(selection.is_active(FRONTEND));
    }

    #[test]
    fn test_from_query() {
        let filters = [FilterLabel::All, BACKEND];

        assert_eq!(FilterSelection::from_query(None, &filters).current(), FilterLabel::All);
        assert_eq!(
            FilterSelection::from_query(Some("Backend"), &filters).current(),
            BACKEND
        );
        assert_eq!(
            FilterSelection::from_query(Some("Frontend"), &filters).current(),
            FilterLabel::All
        );
        assert_eq!(
            FilterSelection::from_query(Some("nonsense"), &filters).current(),
            FilterLabel::All
        );
    }
}
