use serde::Serialize;

use crate::filter::{derive_view, FilterSelection};
use crate::model::{PortfolioSnapshot, Project};

#[derive(Debug, Clone, Serialize)]
pub struct FilterChip {
    pub label: &'static str,
    pub active: bool,
}

/// Projects gallery after filter derivation
#[derive(Debug, Clone, Serialize)]
pub struct ProjectsView<'a> {
    pub selected: &'static str,
    pub chips: Vec<FilterChip>,
    pub projects: Vec<&'a Project>,
    pub github_url: &'a str,
}

impl<'a> ProjectsView<'a> {
    /// Build the gallery, correcting `selection` against the filter list
    pub fn build(snapshot: &'a PortfolioSnapshot, selection: &mut FilterSelection) -> Self {
        let projects = derive_view(Some(snapshot), selection);

        let chips = snapshot
            .project_filters
            .iter()
            .map(|label| FilterChip {
                label: label.as_str(),
                active: selection.is_active(*label),
            })
            .collect();

        Self {
            selected: selection.current().as_str(),
            chips,
            projects,
            github_url: &snapshot.personal_info.github_url,
        }
    }
}
