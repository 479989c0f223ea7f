use serde::{Deserialize, Serialize};

/// Contact and identity block shown in the hero, CV header and nav
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub role: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub github_url: String,
    pub linkedin_url: String,
    /// Downloadable CV; `"#"` or empty means "use the bundled /cv.pdf"
    pub cv_pdf_url: String,
}

/// CV timeline entry for a position held
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub desc: String,
    pub tags: Vec<String>,
}

/// CV timeline entry for a degree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub period: String,
    pub desc: String,
}

/// Skill bar; `level` is a percentage and should stay within 0-100
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub label: String,
    pub level: u8,
}

impl Skill {
    pub const MAX_LEVEL: u8 = 100;

    /// Level clamped into the displayable range
    pub fn display_level(&self) -> u8 {
        self.level.min(Self::MAX_LEVEL)
    }
}

/// Spoken language with a free-form proficiency level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub lang: String,
    pub level: String,
}
