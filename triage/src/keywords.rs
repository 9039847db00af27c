//! Static keyword tables.
//!
//! Every list is ordered; the order is what detailed results report matches
//! in. Entries are compared against lower-cased text, so an entry holding an
//! upper-case letter can never match.

/// Priority tier: any two of these, or the literals "urgent"/"emergency",
/// make a complaint urgent. One alone makes it high.
pub const URGENT_KEYWORDS: &[&str] = &[
    "urgent",
    "emergency",
    "critical",
    "immediate",
    "danger",
    "hazard",
    "life threatening",
    "severe",
    "accident",
    "injury",
    "fire",
    "electrical",
    "broken",
    "damaged",
    "leaking",
    "flooding",
    "safety",
    "security breach",
];

/// Priority tier: two or more make a complaint high.
pub const HIGH_KEYWORDS: &[&str] = &[
    "serious",
    "major",
    "important",
    "significant",
    "broken",
    "not working",
    "completely",
    "totally",
    "entire",
    "all",
    "multiple",
    "widespread",
    "affecting many",
    "cant access",
    "locked out",
    "no water",
    "no power",
];

/// Priority tier: any one makes an otherwise unremarkable complaint low.
pub const LOW_KEYWORDS: &[&str] = &[
    "minor",
    "small",
    "slight",
    "cosmetic",
    "aesthetic",
    "suggestion",
    "would be nice",
    "could improve",
    "enhancement",
    "request",
];

/// Literals that force `urgent` on their own.
pub const URGENT_LITERALS: &[&str] = &["urgent", "emergency"];

/// Canonical (lower-case) category name to its keyword list.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "infrastructure",
        &[
            "building",
            "classroom",
            "room",
            "wall",
            "ceiling",
            "floor",
            "door",
            "window",
            "furniture",
            "desk",
            "chair",
            "board",
            "paint",
            "construction",
            "maintenance",
            "repair",
            "facility",
            // Upper-case entry; never matches lower-cased text.
            "AC",
            "air conditioning",
            "ventilation",
            "heating",
            "cooling",
            "lights",
            "lighting",
        ],
    ),
    (
        "it & technology",
        &[
            "computer",
            "laptop",
            "software",
            "hardware",
            "wifi",
            "internet",
            "network",
            "connection",
            "lab",
            "system",
            "server",
            "website",
            "portal",
            "app",
            "application",
            "projector",
            "printer",
            "scanner",
            "mouse",
            "keyboard",
            "screen",
            "monitor",
            "email",
            "login",
            "password",
        ],
    ),
    (
        "academics",
        &[
            "course",
            "class",
            "professor",
            "teacher",
            "exam",
            "test",
            "assignment",
            "grade",
            "marks",
            "schedule",
            "timetable",
            "syllabus",
            "curriculum",
            "lecture",
            "tutorial",
            "practical",
            "lab session",
            "semester",
            "registration",
        ],
    ),
    (
        "hostel",
        &[
            "hostel",
            "room",
            "bed",
            "mattress",
            "warden",
            "roommate",
            "accommodation",
            "dormitory",
            "mess",
            "laundry",
            "bathroom",
            "toilet",
            "shower",
            "cleaning",
        ],
    ),
    (
        "cafeteria",
        &[
            "food",
            "cafeteria",
            "canteen",
            "menu",
            "meal",
            "lunch",
            "dinner",
            "breakfast",
            "hygiene",
            "quality",
            "taste",
            "service",
            "dining",
        ],
    ),
    (
        "transportation",
        &[
            "bus",
            "transport",
            "parking",
            "vehicle",
            "shuttle",
            "route",
            "timing",
            "driver",
            "bike",
            "car",
            "commute",
        ],
    ),
    (
        "library",
        &[
            "library",
            "book",
            "reading",
            "study",
            "resources",
            "journal",
            "database",
            "reference",
            "librarian",
            "borrowing",
            "reservation",
        ],
    ),
    (
        "sports & recreation",
        &[
            "sports",
            "gym",
            "fitness",
            "playground",
            "court",
            "field",
            "equipment",
            "recreation",
            "activity",
            "club",
            "practice",
            "training",
        ],
    ),
    (
        "security",
        &[
            "security",
            "safety",
            "guard",
            "theft",
            "stolen",
            "lost",
            "missing",
            "unauthorized",
            "suspicious",
            "incident",
            "access",
            "entry",
            "gate",
        ],
    ),
];

/// Name of the catch-all category used when nothing scores.
pub const OTHER_CATEGORY: &str = "other";

pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "happy",
    "satisfied",
    "thank",
    "appreciate",
    "helpful",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "poor",
    "terrible",
    "horrible",
    "worst",
    "unhappy",
    "disappointed",
    "frustrated",
    "angry",
    "useless",
    "broken",
    "damaged",
];

/// Look up the keyword list for a category name.
///
/// The name is lower-cased first; anything not in [`CATEGORY_KEYWORDS`]
/// gets no keywords and therefore always scores zero.
pub fn category_keywords(name: &str) -> &'static [&'static str] {
    let key = name.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(canonical, _)| *canonical == key)
        .map(|(_, kws)| *kws)
        .unwrap_or(&[])
}
