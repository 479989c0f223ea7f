use serde::Serialize;

use crate::model::PortfolioSnapshot;

/// The three routed pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Page {
    Home,
    Projects,
    Cv,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Projects, Page::Cv];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Projects => "/projects",
            Page::Cv => "/cv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Ana Sayfa",
            Page::Projects => "Projelerim",
            Page::Cv => "CV",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactView<'a> {
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    /// `tel:` target, the phone number without spaces
    pub phone_href: Option<String>,
}

/// Navigation chrome; contact details appear only once data is loaded
#[derive(Debug, Clone, Serialize)]
pub struct NavView<'a> {
    pub links: Vec<NavLink>,
    pub contact: Option<ContactView<'a>>,
}

impl<'a> NavView<'a> {
    pub fn build(active: Page, snapshot: Option<&'a PortfolioSnapshot>) -> Self {
        let links = Page::ALL
            .iter()
            .map(|page| NavLink {
                href: page.path(),
                label: page.label(),
                active: *page == active,
            })
            .collect();

        let contact = snapshot.map(|s| {
            let phone = non_empty(&s.personal_info.phone);
            ContactView {
                email: non_empty(&s.personal_info.email),
                phone,
                phone_href: phone.map(|p| p.split_whitespace().collect()),
            }
        });

        Self { links, contact }
    }
}

pub(crate) fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty() && trimmed != "#").then_some(trimmed)
}
