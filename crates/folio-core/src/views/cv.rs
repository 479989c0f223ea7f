use serde::Serialize;

use super::nav::non_empty;
use crate::model::{Education, Experience, Language, PortfolioSnapshot};

/// Bundled CV served from the public directory
pub const DEFAULT_CV_PATH: &str = "/cv.pdf";

#[derive(Debug, Clone, Serialize)]
pub struct SkillBar<'a> {
    pub label: &'a str,
    pub level: u8,
}

/// CV page: header, timelines, skills and languages
#[derive(Debug, Clone, Serialize)]
pub struct CvView<'a> {
    pub name: &'a str,
    pub role: &'a str,
    pub contact_lines: Vec<&'a str>,
    pub cv_download_url: &'a str,
    pub experience: &'a [Experience],
    pub education: &'a [Education],
    pub skills: Vec<SkillBar<'a>>,
    pub languages: &'a [Language],
}

impl<'a> CvView<'a> {
    pub fn build(snapshot: &'a PortfolioSnapshot) -> Self {
        let info = &snapshot.personal_info;

        let contact_lines = [&info.location, &info.email, &info.website]
            .into_iter()
            .filter_map(|line| non_empty(line))
            .collect();

        Self {
            name: &info.name,
            role: &info.role,
            contact_lines,
            cv_download_url: cv_download_url(&info.cv_pdf_url),
            experience: &snapshot.experience,
            education: &snapshot.education,
            skills: snapshot
                .skills
                .iter()
                .map(|s| SkillBar {
                    label: &s.label,
                    level: s.display_level(),
                })
                .collect(),
            languages: &snapshot.languages,
        }
    }
}

/// The configured CV link, or the bundled PDF when it is empty or `"#"`
pub fn cv_download_url(configured: &str) -> &str {
    non_empty(configured).unwrap_or(DEFAULT_CV_PATH)
}
