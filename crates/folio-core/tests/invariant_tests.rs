mod common;

use common::{all_filters, project, snapshot};
use folio_core::model::{FilterLabel, ProjectCategory, Skill};
use folio_core::rules::invariants::{
    find_duplicate_filters, find_duplicate_project_ids, find_unoffered_categories,
};
use folio_core::rules::{check_snapshot, Violation};

#[test]
fn test_well_formed_snapshot_has_no_violations() {
    let snap = snapshot(
        all_filters(),
        vec![
            project(1, ProjectCategory::Backend),
            project(2, ProjectCategory::Frontend),
        ],
    );

    assert!(check_snapshot(&snap).is_empty());
}

#[test]
fn test_missing_all_label_is_reported() {
    let snap = snapshot(
        vec![FilterLabel::Category(ProjectCategory::Backend)],
        vec![project(1, ProjectCategory::Backend)],
    );

    assert_eq!(check_snapshot(&snap), vec![Violation::MissingAllLabel]);
}

#[test]
fn test_duplicate_project_ids_reported_once() {
    let snap = snapshot(
        all_filters(),
        vec![
            project(1, ProjectCategory::Backend),
            project(1, ProjectCategory::Frontend),
            project(1, ProjectCategory::FullStack),
            project(2, ProjectCategory::Backend),
        ],
    );

    assert_eq!(find_duplicate_project_ids(&snap), vec![1]);
}

#[test]
fn test_unoffered_category_is_reported() {
    let snap = snapshot(
        vec![
            FilterLabel::All,
            FilterLabel::Category(ProjectCategory::Backend),
        ],
        vec![
            project(1, ProjectCategory::Backend),
            project(2, ProjectCategory::Frontend),
        ],
    );

    assert_eq!(
        find_unoffered_categories(&snap),
        vec![(2, ProjectCategory::Frontend)]
    );
    let violation = &check_snapshot(&snap)[0];
    assert!(violation.to_string().contains("project 2"));
}

#[test]
fn test_duplicate_filters_and_skill_range() {
    let mut snap = snapshot(
        vec![FilterLabel::All, FilterLabel::All],
        Vec::new(),
    );
    snap.skills.push(Skill {
        label: "Go".to_string(),
        level: 120,
    });

    assert_eq!(find_duplicate_filters(&snap), vec![FilterLabel::All]);
    let violations = check_snapshot(&snap);
    assert!(violations.contains(&Violation::DuplicateFilterLabel(FilterLabel::All)));
    assert!(violations.contains(&Violation::SkillLevelOutOfRange {
        label: "Go".to_string(),
        level: 120,
    }));
}
