//! Page view models
//!
//! Each page is a pure function of the loaded snapshot. The models are
//! `Serialize` so the server can hand them straight to its templates.

pub mod cv;
pub mod home;
pub mod nav;
pub mod projects;

pub use cv::CvView;
pub use home::HomeView;
pub use nav::{NavView, Page};
pub use projects::ProjectsView;

/// Body shown by every page while the snapshot is absent
pub const LOADING_MESSAGE: &str = "Veriler yükleniyor...";
