use folio_core::model::{
    Education, Experience, FilterLabel, Language, PersonalInfo, PortfolioSnapshot, Project,
    ProjectCategory, Skill,
};

/// Create a test project with the given id and category
#[allow(dead_code)]
pub fn project(id: u32, category: ProjectCategory) -> Project {
    Project {
        id,
        title: format!("Project {}", id),
        category,
        year: "2025".to_string(),
        desc: format!("Description of project {}", id),
        tags: vec!["Rust".to_string(), "Axum".to_string()],
        featured: false,
        accent_color: "#ff6b35".to_string(),
        link: format!("https://example.com/{}", id),
        github: None,
    }
}

/// Personal info with every contact field filled in
#[allow(dead_code)]
pub fn personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Deniz Yılmaz".to_string(),
        role: "Full Stack Developer".to_string(),
        location: "İstanbul".to_string(),
        email: "deniz@example.com".to_string(),
        phone: "+90 555 000 00 00".to_string(),
        website: "deniz.dev".to_string(),
        github_url: "https://github.com/deniz".to_string(),
        linkedin_url: "https://linkedin.com/in/deniz".to_string(),
        cv_pdf_url: "#".to_string(),
    }
}

/// Build a snapshot from a filter list and projects; CV sections are filled
#[allow(dead_code)]
pub fn snapshot(filters: Vec<FilterLabel>, projects: Vec<Project>) -> PortfolioSnapshot {
    PortfolioSnapshot {
        personal_info: personal_info(),
        project_filters: filters,
        projects,
        experience: vec![Experience {
            role: "Senior Developer".to_string(),
            company: "Acme".to_string(),
            period: "2022 - Present".to_string(),
            desc: "Platform work".to_string(),
            tags: vec!["Rust".to_string()],
        }],
        education: vec![Education {
            degree: "BSc Computer Engineering".to_string(),
            school: "ODTÜ".to_string(),
            period: "2014 - 2018".to_string(),
            desc: String::new(),
        }],
        skills: vec![
            Skill {
                label: "Rust".to_string(),
                level: 90,
            },
            Skill {
                label: "TypeScript".to_string(),
                level: 85,
            },
        ],
        languages: vec![Language {
            lang: "Türkçe".to_string(),
            level: "Anadil".to_string(),
        }],
    }
}

/// The full filter list: "all" plus every category
#[allow(dead_code)]
pub fn all_filters() -> Vec<FilterLabel> {
    std::iter::once(FilterLabel::All)
        .chain(ProjectCategory::ALL.into_iter().map(FilterLabel::Category))
        .collect()
}
