use super::selection::FilterSelection;
use crate::model::{FilterLabel, PortfolioSnapshot, Project};

/// Projects visible under `label`, in snapshot order
pub fn visible_projects(projects: &[Project], label: FilterLabel) -> Vec<&Project> {
    projects.iter().filter(|p| label.admits(p.category)).collect()
}

/// Derive the visible list for a mount
///
/// Reconciles `selection` against the snapshot's filter list first, so a
/// stale selection is corrected before it is used. An absent snapshot yields
/// an empty list and leaves the selection untouched.
pub fn derive_view<'a>(
    snapshot: Option<&'a PortfolioSnapshot>,
    selection: &mut FilterSelection,
) -> Vec<&'a Project> {
    let Some(snapshot) = snapshot else {
        return Vec::new();
    };
    if selection.reconcile(&snapshot.project_filters) {
        tracing::debug!(
            selection = %selection.current(),
            "filter selection reset to first offered label"
        );
    }
    visible_projects(&snapshot.projects, selection.current())
}
