//! Classification property tests — validate heuristic invariants across
//! varied complaint text.
//!
//! Tests verify:
//! - Priority analysis is deterministic
//! - "urgent"/"emergency" always yield urgent
//! - Upper/lower case never changes a result
//! - Ties between categories resolve to the earliest candidate
//! - The fallback chain is other → first → empty

use triage::keywords::{CATEGORY_KEYWORDS, HIGH_KEYWORDS, LOW_KEYWORDS, URGENT_KEYWORDS};
use triage::{
    analyze_priority, analyze_sentiment, default_catalog, score_categories, suggest_category,
    CategoryCandidate, PriorityLabel, SentimentLabel,
};

const SAMPLES: &[(&str, &str)] = &[
    ("", ""),
    ("Fire in classroom", "Electrical wiring sparking, evacuate immediately"),
    ("WiFi not working in computer lab", "Cannot connect laptop to network"),
    ("Minor suggestion for improvement", "Cosmetic change would be nice"),
    ("Hostel shower leaking", "Water everywhere in the bathroom"),
    ("Cafeteria food quality", "Lunch menu is terrible"),
    ("Gym equipment", "Treadmill damaged"),
    ("Exam timetable clash", "Two exams scheduled at the same time"),
    ("Parking", "No spaces near the gate after 9am"),
    ("random unrelated gibberish", "qwerty zxcv"),
];

fn candidates(names: &[&str]) -> Vec<CategoryCandidate> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| CategoryCandidate::new(format!("c{}", i), *name, ""))
        .collect()
}

// ── Property: determinism ──────────────────────────────────────────

#[test]
fn prop_priority_is_deterministic() {
    for (title, description) in SAMPLES {
        let first = analyze_priority(title, description);
        for _ in 0..5 {
            assert_eq!(analyze_priority(title, description), first);
        }
    }
}

#[test]
fn prop_suggestion_is_deterministic() {
    let catalog = default_catalog();
    for (title, description) in SAMPLES {
        let first = suggest_category(title, description, &catalog);
        assert_eq!(suggest_category(title, description, &catalog), first);
    }
}

// ── Property: urgent dominance ─────────────────────────────────────

#[test]
fn prop_urgent_literals_dominate() {
    for (title, description) in SAMPLES {
        for literal in ["urgent", "EMERGENCY", "Urgent"] {
            let with_title = format!("{} {}", literal, title);
            assert_eq!(
                analyze_priority(&with_title, description),
                PriorityLabel::Urgent,
                "title={:?}",
                with_title
            );
            let with_desc = format!("{} {}", description, literal);
            assert_eq!(
                analyze_priority(title, &with_desc),
                PriorityLabel::Urgent,
                "description={:?}",
                with_desc
            );
        }
    }
}

#[test]
fn prop_any_two_urgent_keywords_are_urgent() {
    for a in URGENT_KEYWORDS {
        for b in URGENT_KEYWORDS {
            if a == b {
                continue;
            }
            assert_eq!(
                analyze_priority(a, b),
                PriorityLabel::Urgent,
                "{:?} + {:?}",
                a,
                b
            );
        }
    }
}

#[test]
fn prop_single_urgent_keyword_beats_high_keywords() {
    let high_text = "major widespread multiple serious";
    for kw in URGENT_KEYWORDS {
        let label = analyze_priority(kw, high_text);
        assert!(label >= PriorityLabel::High, "{:?} gave {}", kw, label);
    }
}

#[test]
fn prop_each_low_keyword_alone_is_low_or_higher() {
    for kw in LOW_KEYWORDS {
        let label = analyze_priority(kw, "");
        assert_ne!(label, PriorityLabel::Medium, "{:?}", kw);
    }
}

#[test]
fn prop_two_high_keywords_are_at_least_high() {
    for pair in HIGH_KEYWORDS.windows(2) {
        let label = analyze_priority(pair[0], pair[1]);
        assert!(label >= PriorityLabel::High, "{:?}", pair);
    }
}

// ── Property: case insensitivity ───────────────────────────────────

#[test]
fn prop_case_does_not_matter() {
    let catalog = default_catalog();
    for (title, description) in SAMPLES {
        let upper_t = title.to_uppercase();
        let upper_d = description.to_uppercase();
        assert_eq!(
            analyze_priority(title, description),
            analyze_priority(&upper_t, &upper_d)
        );
        assert_eq!(
            suggest_category(title, description, &catalog),
            suggest_category(&upper_t, &upper_d, &catalog)
        );
        let joined = format!("{} {}", title, description);
        assert_eq!(
            analyze_sentiment(&joined),
            analyze_sentiment(&joined.to_uppercase())
        );
    }
}

// ── Property: tie-break stability ──────────────────────────────────

#[test]
fn prop_equal_scores_pick_first_candidate() {
    // "room" scores 1 for both infrastructure and hostel
    let forward = candidates(&["Infrastructure", "Hostel"]);
    let backward = candidates(&["Hostel", "Infrastructure"]);

    let f = score_categories("room", "", &forward);
    assert_eq!(f[0].score, f[1].score);
    assert_eq!(suggest_category("room", "", &forward), "c0");
    assert_eq!(suggest_category("room", "", &backward), "c0");
}

#[test]
fn prop_winner_has_maximum_score() {
    let catalog = default_catalog();
    for (title, description) in SAMPLES {
        let scores = score_categories(title, description, &catalog);
        let max = scores.iter().map(|s| s.score).max().unwrap_or(0);
        if max == 0 {
            continue;
        }
        let winner = suggest_category(title, description, &catalog);
        let first_max = scores.iter().find(|s| s.score == max).unwrap();
        assert_eq!(winner, first_max.id);
    }
}

// ── Property: fallback chain ───────────────────────────────────────

#[test]
fn prop_fallback_chain() {
    let gibberish = ("random unrelated gibberish", "");

    let with_other = candidates(&["Academics", "Library", "other"]);
    assert_eq!(suggest_category(gibberish.0, gibberish.1, &with_other), "c2");

    let without_other = candidates(&["Academics", "Library"]);
    assert_eq!(
        suggest_category(gibberish.0, gibberish.1, &without_other),
        "c0"
    );

    assert_eq!(suggest_category(gibberish.0, gibberish.1, &[]), "");
}

#[test]
fn prop_every_table_category_can_win_alone() {
    for (name, keywords) in CATEGORY_KEYWORDS {
        let cands = vec![
            CategoryCandidate::new("other", "Other", ""),
            CategoryCandidate::new("target", *name, ""),
        ];
        // first lower-case keyword
        let kw = keywords
            .iter()
            .find(|k| k.chars().all(|c| !c.is_ascii_uppercase()))
            .unwrap();
        assert_eq!(suggest_category(kw, "", &cands), "target", "{}", name);
    }
}

// ── Defaults ───────────────────────────────────────────────────────

#[test]
fn prop_empty_input_defaults() {
    assert_eq!(analyze_priority("", ""), PriorityLabel::Medium);
    assert_eq!(analyze_sentiment(""), SentimentLabel::Neutral);
    assert_eq!(suggest_category("", "", &default_catalog()), "other");
}
