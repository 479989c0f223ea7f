use std::collections::HashSet;

use crate::model::{FilterLabel, PortfolioSnapshot, ProjectCategory, Skill};

/// A broken snapshot invariant
///
/// Violations are reported, never enforced: a snapshot that parses is
/// loaded regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Two projects share an id
    DuplicateProjectId(u32),
    /// A project's category has no chip in the filter list
    CategoryNotOffered { project_id: u32, category: ProjectCategory },
    /// The filter list has no "all" chip
    MissingAllLabel,
    /// The same chip appears twice
    DuplicateFilterLabel(FilterLabel),
    /// A skill level above 100
    SkillLevelOutOfRange { label: String, level: u8 },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::DuplicateProjectId(id) => write!(f, "duplicate project id {}", id),
            Violation::CategoryNotOffered {
                project_id,
                category,
            } => write!(
                f,
                "project {} has category {} which no filter offers",
                project_id, category
            ),
            Violation::MissingAllLabel => write!(f, "filter list has no \"all\" label"),
            Violation::DuplicateFilterLabel(label) => {
                write!(f, "filter label {} listed more than once", label)
            }
            Violation::SkillLevelOutOfRange { label, level } => {
                write!(f, "skill {} has level {} above {}", label, level, Skill::MAX_LEVEL)
            }
        }
    }
}

/// Find project ids used more than once, in first-repeat order
pub fn find_duplicate_project_ids(snapshot: &PortfolioSnapshot) -> Vec<u32> {
    let mut seen = HashSet::new();
    let mut repeated = Vec::new();

    for project in &snapshot.projects {
        if !seen.insert(project.id) && !repeated.contains(&project.id) {
            repeated.push(project.id);
        }
    }

    repeated
}

/// Find projects whose category is not offered as a filter chip
///
/// Returns (project_id, category) tuples
pub fn find_unoffered_categories(snapshot: &PortfolioSnapshot) -> Vec<(u32, ProjectCategory)> {
    snapshot
        .projects
        .iter()
        .filter(|p| !snapshot.offers(FilterLabel::Category(p.category)))
        .map(|p| (p.id, p.category))
        .collect()
}

/// Find filter labels listed more than once
pub fn find_duplicate_filters(snapshot: &PortfolioSnapshot) -> Vec<FilterLabel> {
    let mut seen = HashSet::new();
    let mut repeated = Vec::new();

    for label in &snapshot.project_filters {
        if !seen.insert(*label) && !repeated.contains(label) {
            repeated.push(*label);
        }
    }

    repeated
}

/// Run every invariant check over a snapshot
pub fn check_snapshot(snapshot: &PortfolioSnapshot) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !snapshot.offers(FilterLabel::All) {
        violations.push(Violation::MissingAllLabel);
    }

    violations.extend(
        find_duplicate_filters(snapshot)
            .into_iter()
            .map(Violation::DuplicateFilterLabel),
    );

    violations.extend(
        find_duplicate_project_ids(snapshot)
            .into_iter()
            .map(Violation::DuplicateProjectId),
    );

    violations.extend(find_unoffered_categories(snapshot).into_iter().map(
        |(project_id, category)| Violation::CategoryNotOffered {
            project_id,
            category,
        },
    ));

    violations.extend(
        snapshot
            .skills
            .iter()
            .filter(|s| s.level > Skill::MAX_LEVEL)
            .map(|s| Violation::SkillLevelOutOfRange {
                label: s.label.clone(),
                level: s.level,
            }),
    );

    violations
}
