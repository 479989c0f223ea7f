use serde::{Deserialize, Serialize};

/// Closed set of project categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    #[serde(rename = "Full Stack")]
    FullStack,
    #[serde(rename = "Frontend")]
    Frontend,
    #[serde(rename = "Backend")]
    Backend,
}

impl ProjectCategory {
    /// Every category, in display order
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::FullStack,
        ProjectCategory::Frontend,
        ProjectCategory::Backend,
    ];

    /// Wire and display name
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::FullStack => "Full Stack",
            ProjectCategory::Frontend => "Frontend",
            ProjectCategory::Backend => "Backend",
        }
    }

    /// Look a category up by its wire name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A gallery entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable identity, unique within a snapshot
    pub id: u32,

    pub title: String,

    pub category: ProjectCategory,

    pub year: String,

    pub desc: String,

    /// Technology tags; order is kept for display only
    pub tags: Vec<String>,

    /// Candidate for the homepage highlight
    pub featured: bool,

    /// CSS color used for the card accent
    pub accent_color: String,

    /// Live demo link
    pub link: String,

    /// Source repository link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}
