pub mod label;
pub mod personal;
pub mod project;
pub mod snapshot;

pub use label::{FilterLabel, ALL_LABEL};
pub use personal::{Education, Experience, Language, PersonalInfo, Skill};
pub use project::{Project, ProjectCategory};
pub use snapshot::PortfolioSnapshot;
