use serde::{Deserialize, Serialize};

use super::label::FilterLabel;
use super::personal::{Education, Experience, Language, PersonalInfo, Skill};
use super::project::Project;

/// PortfolioSnapshot - one fetched, immutable copy of the Data Store
///
/// Field order and key spelling follow the `portfolio.json` document. The
/// snapshot is never mutated after parsing; consumers share it behind an
/// `Arc` for the lifetime of one mount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub personal_info: PersonalInfo,

    /// Filter chips in display order
    pub project_filters: Vec<FilterLabel>,

    pub projects: Vec<Project>,

    pub experience: Vec<Experience>,

    pub education: Vec<Education>,

    pub skills: Vec<Skill>,

    pub languages: Vec<Language>,
}

impl PortfolioSnapshot {
    /// The project highlighted on the homepage
    ///
    /// First project flagged `featured`, else the first project, else `None`.
    pub fn featured_project(&self) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.featured)
            .or_else(|| self.projects.first())
    }

    /// Check whether the filter list offers `label`
    pub fn offers(&self, label: FilterLabel) -> bool {
        self.project_filters.contains(&label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectCategory;

    fn project(id: u32, featured: bool) -> Project {
        Project {
            id,
            title: format!("Project {}", id),
            category: ProjectCategory::Frontend,
            year: "2025".to_string(),
            desc: String::new(),
            tags: Vec::new(),
            featured,
            accent_color: "#000".to_string(),
            link: "#".to_string(),
            github: None,
        }
    }

    fn snapshot(projects: Vec<Project>) -> PortfolioSnapshot {
        PortfolioSnapshot {
            personal_info: PersonalInfo {
                name: "Ada".to_string(),
                role: "Developer".to_string(),
                location: String::new(),
                email: String::new(),
                phone: String::new(),
                website: String::new(),
                github_url: String::new(),
                linkedin_url: String::new(),
                cv_pdf_url: String::new(),
            },
            project_filters: vec![FilterLabel::All],
            projects,
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            languages: Vec::new(),
        }
    }

    #[test]
    fn test_featured_prefers_first_flagged() {
        let snap = snapshot(vec![project(1, false), project(2, true), project(3, true)]);
        assert_eq!(snap.featured_project().map(|p| p.id), Some(2));
    }

    #[test]
    fn test_featured_falls_back_to_first() {
        let snap = snapshot(vec![project(4, false), project(5, false)]);
        assert_eq!(snap.featured_project().map(|p| p.id), Some(4));
    }

    #[test]
    fn test_featured_absent_without_projects() {
        let snap = snapshot(Vec::new());
        assert!(snap.featured_project().is_none());
    }

    #[test]
    fn test_offers() {
        let snap = snapshot(vec![project(9, false)]);
        assert!(snap.offers(FilterLabel::All));
        assert!(!snap.offers(FilterLabel::Category(ProjectCategory::Backend)));
    }
}
