use serde::Serialize;

use super::nav::non_empty;
use crate::model::{PortfolioSnapshot, ProjectCategory};

const INTRO: &str = "Modern web uygulamaları tasarlıyor ve geliştiriyorum. Frontend'den backend'e, \
tasarımdan deploy'a kadar her adımda çözüm üretiyorum.";

static TECH_BADGES: [&str; 6] = ["Next.js", "TypeScript", "Node.js", "PostgreSQL", "Docker", "AWS"];

const STATS: [(&str, &str); 4] = [
    ("5+", "Yıl Deneyim"),
    ("40+", "Tamamlanan Proje"),
    ("20+", "Mutlu Müşteri"),
    ("∞", "Kahve Bardağı"),
];

const SERVICES: [(&str, &str, &str); 4] = [
    (
        "code",
        "Frontend Geliştirme",
        "React, Next.js ve TypeScript ile modern, hızlı ve erişilebilir kullanıcı arayüzleri.",
    ),
    (
        "server",
        "Backend ve API",
        "Node.js, Express, Fastify ve NestJS ile ölçeklenebilir REST ve GraphQL API'ları.",
    ),
    (
        "database",
        "Veritabanı Tasarımı",
        "PostgreSQL, MongoDB ve Redis ile sağlam veri modelleri ve optimizasyon.",
    ),
    (
        "layers",
        "DevOps ve Cloud",
        "Docker, CI/CD ve AWS/Vercel ile güvenilir deployment pipeline'ları.",
    ),
];

pub const FEATURED_FALLBACK_TITLE: &str = "Öne Çıkan Proje";
pub const FEATURED_FALLBACK_DESC: &str = "Proje bilgisi JSON dosyasından okunamadı.";

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeaturedView<'a> {
    pub id: Option<u32>,
    pub category: &'static str,
    pub title: &'a str,
    pub desc: &'a str,
    pub tags: &'a [String],
    pub accent_color: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink<'a> {
    pub label: &'static str,
    pub href: &'a str,
}

/// Homepage: hero, stats, services and the featured project
#[derive(Debug, Clone, Serialize)]
pub struct HomeView<'a> {
    pub name: &'a str,
    pub role: &'a str,
    pub intro: &'static str,
    pub tech_badges: &'static [&'static str],
    pub stats: Vec<StatCard>,
    pub services: Vec<ServiceCard>,
    pub featured: FeaturedView<'a>,
    pub socials: Vec<SocialLink<'a>>,
}

impl<'a> HomeView<'a> {
    pub fn build(snapshot: &'a PortfolioSnapshot) -> Self {
        let info = &snapshot.personal_info;

        let featured = match snapshot.featured_project() {
            Some(project) => FeaturedView {
                id: Some(project.id),
                category: project.category.as_str(),
                title: &project.title,
                desc: &project.desc,
                tags: &project.tags,
                accent_color: Some(&project.accent_color),
            },
            None => FeaturedView {
                id: None,
                category: ProjectCategory::FullStack.as_str(),
                title: FEATURED_FALLBACK_TITLE,
                desc: FEATURED_FALLBACK_DESC,
                tags: &[],
                accent_color: None,
            },
        };

        let socials = [("GitHub", &info.github_url), ("LinkedIn", &info.linkedin_url)]
            .into_iter()
            .filter_map(|(label, href)| non_empty(href).map(|href| SocialLink { label, href }))
            .collect();

        Self {
            name: &info.name,
            role: &info.role,
            intro: INTRO,
            tech_badges: &TECH_BADGES,
            stats: STATS
                .iter()
                .map(|&(number, label)| StatCard { number, label })
                .collect(),
            services: SERVICES
                .iter()
                .map(|&(icon, title, desc)| ServiceCard { icon, title, desc })
                .collect(),
            featured,
            socials,
        }
    }
}
