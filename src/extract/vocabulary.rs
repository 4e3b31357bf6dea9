//! Fixed extraction vocabulary and rule additions.
//!
//! This is the entire "model" behind keyword extraction: a 31-term dictionary
//! matched by substring containment, plus three trigger rules that append
//! role-specific tags. A real extraction service would replace this module
//! wholesale.

/// Vocabulary scanned against the input tokens, in match-priority order.
pub const VOCABULARY: [&str; 31] = [
    "React",
    "TypeScript",
    "JavaScript",
    "Node.js",
    "Python",
    "Java",
    "AWS",
    "Docker",
    "Kubernetes",
    "MongoDB",
    "PostgreSQL",
    "GraphQL",
    "REST API",
    "Machine Learning",
    "Data Science",
    "Frontend",
    "Backend",
    "Full Stack",
    "DevOps",
    "CI/CD",
    "Agile",
    "Scrum",
    "Leadership",
    "Team Lead",
    "Senior",
    "Junior",
    "Mid-level",
    "Remote",
    "Hybrid",
    "Startup",
    "Enterprise",
];

/// A conditional rule: when any trigger appears in the lowercased input,
/// the additions are appended after the vocabulary matches.
pub struct KeywordRule {
    pub triggers: &'static [&'static str],
    pub additions: &'static [&'static str],
}

/// Rule additions, applied in order after the vocabulary scan.
pub const RULES: [KeywordRule; 3] = [
    KeywordRule {
        triggers: &["frontend", "react"],
        additions: &["UI/UX", "Responsive Design", "CSS", "HTML"],
    },
    KeywordRule {
        triggers: &["backend", "api"],
        additions: &["Database", "Server", "API Design", "Microservices"],
    },
    KeywordRule {
        triggers: &["senior", "lead"],
        additions: &["Mentoring", "Architecture", "Code Review", "Technical Leadership"],
    },
];
