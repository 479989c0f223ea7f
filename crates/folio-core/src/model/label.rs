use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::project::ProjectCategory;
use crate::errors::FolioError;

/// Wire spelling of the "all projects" filter
pub const ALL_LABEL: &str = "Tümü";

/// A filter chip: the "all" sentinel or one project category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FilterLabel {
    #[default]
    All,
    Category(ProjectCategory),
}

impl FilterLabel {
    /// Wire and display name
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterLabel::All => ALL_LABEL,
            FilterLabel::Category(category) => category.as_str(),
        }
    }

    /// Check whether a project of `category` is visible under this label
    pub fn admits(&self, category: ProjectCategory) -> bool {
        match self {
            FilterLabel::All => true,
            FilterLabel::Category(selected) => *selected == category,
        }
    }
}

impl From<ProjectCategory> for FilterLabel {
    fn from(category: ProjectCategory) -> Self {
        FilterLabel::Category(category)
    }
}

impl FromStr for FilterLabel {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_LABEL {
            return Ok(FilterLabel::All);
        }
        ProjectCategory::from_name(s)
            .map(FilterLabel::Category)
            .ok_or_else(|| FolioError::UnknownLabel {
                label: s.to_string(),
            })
    }
}

impl TryFrom<String> for FilterLabel {
    type Error = FolioError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FilterLabel> for String {
    fn from(label: FilterLabel) -> Self {
        label.as_str().to_string()
    }
}

impl std::fmt::Display for FilterLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sentinel_and_categories() {
        assert_eq!("Tümü".parse::<FilterLabel>().unwrap(), FilterLabel::All);
        assert_eq!(
            "Backend".parse::<FilterLabel>().unwrap(),
            FilterLabel::Category(ProjectCategory::Backend)
        );
    }

    #[test]
    fn test_parse_unknown_label() {
        let err = "Mobile".parse::<FilterLabel>().unwrap_err();
        assert_eq!(
            err,
            FolioError::UnknownLabel {
                label: "Mobile".to_string()
            }
        );
    }

    #[test]
    fn test_admits() {
        assert!(FilterLabel::All.admits(ProjectCategory::Frontend));
        let backend = FilterLabel::from(ProjectCategory::Backend);
        assert!(backend.admits(ProjectCategory::Backend));
        assert!(!backend.admits(ProjectCategory::FullStack));
    }

    #[test]
    fn test_filter_list_wire_format() {
        let labels: Vec<FilterLabel> =
            serde_json::from_str(r#"["Tümü", "Full Stack", "Frontend"]"#).unwrap();
        assert_eq!(
            labels,
            vec![
                FilterLabel::All,
                FilterLabel::Category(ProjectCategory::FullStack),
                FilterLabel::Category(ProjectCategory::Frontend),
            ]
        );
        assert!(serde_json::from_str::<Vec<FilterLabel>>(r#"["All"]"#).is_err());
    }
}
