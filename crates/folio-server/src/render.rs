//! Handlebars page rendering
//!
//! Page bodies render from the core view models; the layout wraps every body
//! with the document head and the navigation bar.

use folio_core::filter::FilterSelection;
use folio_core::views::{CvView, HomeView, NavView, Page, ProjectsView, LOADING_MESSAGE};
use folio_core::PortfolioSnapshot;
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

use crate::errors::{render_error, Result};

const LAYOUT: &str = "layout";
const LOADING: &str = "loading";
const HOME: &str = "home";
const CV: &str = "cv";
const PROJECTS: &str = "projects";

const TEMPLATES: [(&str, &str); 5] = [
    (LAYOUT, include_str!("../templates/layout.hbs")),
    (LOADING, include_str!("../templates/loading.hbs")),
    (HOME, include_str!("../templates/home.hbs")),
    (CV, include_str!("../templates/cv.hbs")),
    (PROJECTS, include_str!("../templates/projects.hbs")),
];

const SITE_TITLE: &str = "Portfolyo";

pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry
            .register_partial("nav", include_str!("../templates/nav.hbs"))
            .map_err(|e| render_error("nav", e))?;
        for (name, source) in TEMPLATES {
            registry
                .register_template_string(name, source)
                .map_err(|e| render_error(name, e))?;
        }
        Ok(Self { registry })
    }

    pub fn home(&self, snapshot: &PortfolioSnapshot) -> Result<String> {
        self.page(Page::Home, Some(snapshot), HOME, &HomeView::build(snapshot))
    }

    pub fn cv(&self, snapshot: &PortfolioSnapshot) -> Result<String> {
        self.page(Page::Cv, Some(snapshot), CV, &CvView::build(snapshot))
    }

    pub fn projects(
        &self,
        snapshot: &PortfolioSnapshot,
        selection: &mut FilterSelection,
    ) -> Result<String> {
        let view = ProjectsView::build(snapshot, selection);
        self.page(Page::Projects, Some(snapshot), PROJECTS, &view)
    }

    /// Placeholder body shown while no snapshot is available
    pub fn loading(&self, page: Page) -> Result<String> {
        self.page(page, None, LOADING, &json!({ "message": LOADING_MESSAGE }))
    }

    fn page<T: Serialize>(
        &self,
        page: Page,
        snapshot: Option<&PortfolioSnapshot>,
        template: &str,
        view: &T,
    ) -> Result<String> {
        let body = self
            .registry
            .render(template, view)
            .map_err(|e| render_error(template, e))?;

        let title = match snapshot {
            Some(s) if !s.personal_info.name.trim().is_empty() => {
                format!("{} | {}", page.label(), s.personal_info.name)
            }
            _ => format!("{} | {}", page.label(), SITE_TITLE),
        };

        let document = json!({
            "title": title,
            "nav": NavView::build(page, snapshot),
            "body": body,
        });
        self.registry
            .render(LAYOUT, &document)
            .map_err(|e| render_error(LAYOUT, e))
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("templates", &self.registry.get_templates().len())
            .finish()
    }
}
