//! End-to-end scenarios: realistic complaints filed against a catalog
//! loaded from disk, as the submission workflow would.

use triage::{
    analyze_priority, analyze_priority_detailed, load_candidates, suggest_category,
    suggest_category_detailed, CategoryCandidate, ComplaintAnalyzer, PriorityLabel, PriorityRule,
    SentimentLabel, SuggestionFallback, TriageError,
};

fn write_catalog(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("categories.toml");
    std::fs::write(
        &path,
        r#"
[[categories]]
id = "9f1c"
name = "Infrastructure"
description = "Buildings, classrooms and facilities"

[[categories]]
id = "c1"
name = "IT & Technology"
description = "Computers, network and portals"

[[categories]]
id = "77aa"
name = "Hostel"

[[categories]]
id = "zz"
name = "Other"
"#,
    )
    .unwrap();
    path
}

#[test]
fn scenario_fire_in_classroom_is_urgent() {
    let a = analyze_priority_detailed(
        "Fire in classroom",
        "Electrical wiring sparking, evacuate immediately",
    );
    assert_eq!(a.label, PriorityLabel::Urgent);
    assert_eq!(a.rule, PriorityRule::UrgentKeywords);
    assert!(a.urgent_matches.contains(&"fire"));
    assert!(a.urgent_matches.contains(&"electrical"));
}

#[test]
fn scenario_wifi_goes_to_it() {
    let categories = vec![
        CategoryCandidate::new("c0", "Academics", ""),
        CategoryCandidate::new("c1", "IT & Technology", ""),
    ];
    assert_eq!(
        suggest_category(
            "WiFi not working in computer lab",
            "Cannot connect laptop to network",
            &categories,
        ),
        "c1"
    );
}

#[test]
fn scenario_minor_suggestion_is_low() {
    assert_eq!(
        analyze_priority(
            "Minor suggestion for improvement",
            "Cosmetic change would be nice"
        ),
        PriorityLabel::Low
    );
}

#[test]
fn scenario_analyzer_with_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let candidates = load_candidates(&write_catalog(&dir)).unwrap();
    let analyzer = ComplaintAnalyzer::new(candidates);

    let s = analyzer
        .analyze(
            "Ceiling fan broken in classroom",
            "The fan in room 204 is damaged and hanging loose. Terrible and unsafe.",
        )
        .unwrap();
    // infrastructure: ceiling, classroom, room; hostel: room
    assert_eq!(s.category_id, "9f1c");
    assert_eq!(s.category_name, "Infrastructure");
    // urgent tier: broken, damaged
    assert_eq!(s.priority, PriorityLabel::Urgent);
    assert_eq!(s.sentiment, SentimentLabel::Negative);
}

#[test]
fn scenario_renamed_category_silently_scores_zero() {
    let dir = tempfile::tempdir().unwrap();
    let mut candidates = load_candidates(&write_catalog(&dir)).unwrap();
    candidates[1].name = "Technology".to_string();

    let s = suggest_category_detailed("Portal login fails", "password reset email", &candidates);
    assert_eq!(s.id, "zz");
    assert_eq!(s.fallback, SuggestionFallback::Other);
}

#[test]
fn scenario_incomplete_complaint_is_rejected() {
    let analyzer = ComplaintAnalyzer::new(vec![]);
    let err = analyzer.analyze("Water cooler", "  ").unwrap_err();
    assert!(matches!(err, TriageError::ValidationError { .. }));
    assert!(err.with_suggestion().contains("Recovery:"));
}
