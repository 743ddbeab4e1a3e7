use std::collections::HashSet;

use velofix::catalog::Catalog;
use velofix::diagnostic::{
    diagnose, generate_diagnosis, AnswerSheet, DiagnosticSession, SequentialIdGenerator, Stage,
    TimestampIdGenerator, UuidIdGenerator, IdGenerator,
};
use velofix::errors::VelofixError;
use velofix::models::{IssueType, Quote, Severity};

fn select(catalog: &Catalog, types: &[IssueType]) -> DiagnosticSession {
    types.iter().fold(DiagnosticSession::new(), |session, &t| {
        session.toggle_selection(catalog, t).unwrap()
    })
}

#[test]
fn test_running_quote_for_two_selected_issues() {
    let catalog = Catalog::reference();
    let session = select(&catalog, &[IssueType::FlatTire, IssueType::BrakeIssue]);
    assert_eq!(session.running_quote(&catalog).unwrap(), Quote::new(70, 45));
}

#[test]
fn test_severity_scenarios() {
    let catalog = Catalog::reference();
    let session = select(
        &catalog,
        &[IssueType::BrakeIssue, IssueType::ChainProblem, IssueType::GearIssue],
    )
    .begin_questions()
    .unwrap();

    let mut session = session;
    for i in 0..3 {
        session = session.record_answer(IssueType::BrakeIssue, i, true).unwrap();
        session = session.record_answer(IssueType::GearIssue, i, false).unwrap();
    }
    session = session.record_answer(IssueType::ChainProblem, 0, true).unwrap();

    assert_eq!(session.current_severity(IssueType::BrakeIssue), Severity::High);
    assert_eq!(session.current_severity(IssueType::ChainProblem), Severity::Medium);
    assert_eq!(session.current_severity(IssueType::GearIssue), Severity::Low);
}

#[test]
fn test_finalize_preserves_selection_order() {
    let catalog = Catalog::reference();
    let ids = SequentialIdGenerator::default();
    let session = select(&catalog, &[IssueType::FlatTire, IssueType::GearIssue])
        .begin_questions()
        .unwrap()
        .record_answer(IssueType::FlatTire, 1, true)
        .unwrap();

    let (done, diagnosis) = session.finalize(&catalog, &ids).unwrap();
    assert_eq!(done.stage(), Stage::Results);
    assert_eq!(diagnosis.issues.len(), 2);

    let first = &diagnosis.issues[0];
    assert_eq!(first.issue_type, IssueType::FlatTire);
    assert_eq!((first.estimated_cost, first.estimated_time), (25, 15));
    assert_eq!(first.severity, Severity::Medium);

    let second = &diagnosis.issues[1];
    assert_eq!(second.issue_type, IssueType::GearIssue);
    assert_eq!((second.estimated_cost, second.estimated_time), (55, 40));
    assert_eq!(second.severity, Severity::Low);

    assert_ne!(first.id, second.id);
    assert_eq!(diagnosis.quote, Quote::new(80, 55));
}

#[test]
fn test_finalize_with_empty_selection_fails() {
    let catalog = Catalog::reference();
    let ids = SequentialIdGenerator::default();
    let session = DiagnosticSession::new();

    let err = session.finalize(&catalog, &ids).unwrap_err();
    assert!(matches!(err, VelofixError::InvalidState(_)));
    assert_eq!(session.stage(), Stage::Selection);
}

#[test]
fn test_reset_clears_selection() {
    let catalog = Catalog::reference();
    let ids = SequentialIdGenerator::default();
    let session = select(&catalog, &[IssueType::ChainProblem]);
    let (done, _) = session.finalize(&catalog, &ids).unwrap();

    let fresh = done.reset();
    assert!(fresh.selected_types().is_empty());
    assert_eq!(fresh.stage(), Stage::Selection);
    assert!(matches!(
        fresh.finalize(&catalog, &ids),
        Err(VelofixError::InvalidState(_))
    ));
}

#[test]
fn test_failed_transition_leaves_session_unchanged() {
    let catalog = Catalog::reference();
    let session = select(&catalog, &[IssueType::FlatTire]).begin_questions().unwrap();

    let before = session.clone();
    assert!(session.record_answer(IssueType::FlatTire, 3, true).is_err());
    assert!(session.record_answer(IssueType::BrakeIssue, 0, true).is_err());
    assert!(session.toggle_selection(&catalog, IssueType::GearIssue).is_err());
    assert_eq!(session, before);
}

#[test]
fn test_quote_matches_across_stages() {
    let catalog = Catalog::reference();
    let ids = SequentialIdGenerator::default();
    let selection = [IssueType::ChainProblem, IssueType::GearIssue, IssueType::FlatTire];

    let session = select(&catalog, &selection);
    let at_selection = session.running_quote(&catalog).unwrap();
    let questions = session.begin_questions().unwrap();
    let at_questions = questions.running_quote(&catalog).unwrap();
    let (_, diagnosis) = questions.finalize(&catalog, &ids).unwrap();

    assert_eq!(at_selection, Quote::new(115, 75));
    assert_eq!(at_selection, at_questions);
    assert_eq!(at_selection, diagnosis.quote);
    assert_eq!(catalog.quote(&selection).unwrap(), catalog.quote(&selection).unwrap());
}

#[test]
fn test_severity_depends_only_on_positive_count() {
    let catalog = Catalog::reference();
    let ids = SequentialIdGenerator::default();
    let patterns: [[Option<bool>; 3]; 3] = [
        [Some(true), Some(true), None],
        [None, Some(true), Some(true)],
        [Some(true), Some(false), Some(true)],
    ];

    for pattern in patterns {
        let answers = AnswerSheet::new().with_answers(IssueType::BrakeIssue, pattern.to_vec());
        let issues =
            generate_diagnosis(&[IssueType::BrakeIssue], &answers, &catalog, &ids).unwrap();
        assert_eq!(issues[0].severity, Severity::High, "pattern {:?}", pattern);
    }
}

#[test]
fn test_repeated_diagnosis_is_structurally_equal() {
    let catalog = Catalog::reference();
    let ids = UuidIdGenerator;
    let selected = [IssueType::BrakeIssue, IssueType::FlatTire];
    let answers = AnswerSheet::new().with_answers(IssueType::BrakeIssue, vec![Some(true), None, None]);

    let a = diagnose(&selected, &answers, &catalog, &ids).unwrap();
    let b = diagnose(&selected, &answers, &catalog, &ids).unwrap();

    assert_eq!(a.quote, b.quote);
    for (x, y) in a.issues.iter().zip(&b.issues) {
        assert_eq!(x.issue_type, y.issue_type);
        assert_eq!(x.severity, y.severity);
        assert_eq!(x.description, y.description);
        assert_ne!(x.id, y.id);
    }
}

#[test]
fn test_generated_ids_are_unique() {
    let generators: Vec<Box<dyn IdGenerator>> = vec![
        Box::new(UuidIdGenerator),
        Box::new(TimestampIdGenerator::default()),
        Box::new(SequentialIdGenerator::default()),
    ];
    for ids in generators {
        let seen: HashSet<String> = (0..200).map(|_| ids.next_id(IssueType::FlatTire)).collect();
        assert_eq!(seen.len(), 200);
    }
}

#[test]
fn test_unpriced_type_is_configuration_error() {
    let catalog = Catalog::reference();
    let ids = SequentialIdGenerator::default();
    let err = generate_diagnosis(&[IssueType::Other], &AnswerSheet::new(), &catalog, &ids).unwrap_err();
    assert!(matches!(err, VelofixError::Configuration(_)));
}
