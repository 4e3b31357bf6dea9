//! Built-in candidate roster.
//!
//! The roster is fixture data standing in for a real sourcing backend: the
//! simulated search always returns the whole list, and every profile field
//! (including the match score) is authored here, not computed.

use itertools::Itertools;

use crate::model::Candidate;

/// Seed record for a built-in candidate profile.
struct CandidateSeed {
    id: &'static str,
    name: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    experience: &'static str,
    skills: &'static [&'static str],
    summary: &'static str,
    profile_image: Option<&'static str>,
    linkedin_url: &'static str,
    match_score: u8,
}

const SEEDS: &[CandidateSeed] = &[
    CandidateSeed {
        id: "cand-001",
        name: "Sarah Chen",
        title: "Senior Frontend Engineer",
        company: "Brightline Health",
        location: "San Francisco, CA",
        experience: "8+ years",
        skills: &[
            "React",
            "TypeScript",
            "Next.js",
            "GraphQL",
            "CSS",
            "Accessibility",
            "Design Systems",
        ],
        summary: "Leads the design-system effort for a patient-facing health platform. \
                  Shipped three major frontend replatforms and mentors a team of five.",
        profile_image: Some("https://i.pravatar.cc/150?img=47"),
        linkedin_url: "https://linkedin.com/in/sarahchen-fe",
        match_score: 95,
    },
    CandidateSeed {
        id: "cand-002",
        name: "Marcus Johnson",
        title: "Full Stack Developer",
        company: "Lumen Analytics",
        location: "Austin, TX",
        experience: "5+ years",
        skills: &["React", "Node.js", "PostgreSQL", "AWS", "Docker", "REST API"],
        summary: "Builds data-heavy dashboards end to end, from schema design to \
                  interactive charts. Comfortable owning features without a spec.",
        profile_image: None,
        linkedin_url: "https://linkedin.com/in/marcusjohnsondev",
        match_score: 88,
    },
    CandidateSeed {
        id: "cand-003",
        name: "Priya Patel",
        title: "Backend Engineer",
        company: "Nimbus Cloud",
        location: "Seattle, WA",
        experience: "6+ years",
        skills: &[
            "Python",
            "Django",
            "PostgreSQL",
            "Kubernetes",
            "AWS",
            "Microservices",
        ],
        summary: "Runs the billing and metering services for a mid-size IaaS provider. \
                  Cut p99 invoice-generation latency by 40% last year.",
        profile_image: Some("https://i.pravatar.cc/150?img=32"),
        linkedin_url: "https://linkedin.com/in/priyapatel-be",
        match_score: 84,
    },
    CandidateSeed {
        id: "cand-004",
        name: "Diego Ramirez",
        title: "DevOps Engineer",
        company: "Forgeworks",
        location: "Denver, CO",
        experience: "7+ years",
        skills: &["Kubernetes", "Terraform", "AWS", "CI/CD", "Docker", "Go"],
        summary: "Owns the build-and-deploy pipeline for forty services. Strong \
                  opinions about boring infrastructure, weakly held.",
        profile_image: None,
        linkedin_url: "https://linkedin.com/in/dramirez-ops",
        match_score: 79,
    },
    CandidateSeed {
        id: "cand-005",
        name: "Emily Nakamura",
        title: "Engineering Manager",
        company: "Halcyon Labs",
        location: "San Francisco, CA",
        experience: "10+ years",
        skills: &["Leadership", "Architecture", "React", "Mentoring", "Agile"],
        summary: "Manages two product teams after eight years as an IC. Still reviews \
                  frontend PRs weekly and runs the internal architecture guild.",
        profile_image: Some("https://i.pravatar.cc/150?img=21"),
        linkedin_url: "https://linkedin.com/in/emilynakamura",
        match_score: 91,
    },
    CandidateSeed {
        id: "cand-006",
        name: "Tom Okafor",
        title: "Junior Web Developer",
        company: "Pixelsmith Studio",
        location: "Austin, TX",
        experience: "2+ years",
        skills: &["JavaScript", "HTML", "CSS", "React", "Git"],
        summary: "Agency developer shipping marketing sites and small web apps on \
                  tight deadlines. Looking for a first product-team role.",
        profile_image: None,
        linkedin_url: "https://linkedin.com/in/tomokafor",
        match_score: 72,
    },
    CandidateSeed {
        id: "cand-007",
        name: "Lena Fischer",
        title: "Data Engineer",
        company: "Clearwater AI",
        location: "Remote",
        experience: "6+ years",
        skills: &["Python", "Spark", "Airflow", "SQL", "Machine Learning"],
        summary: "Built the feature-store pipelines feeding Clearwater's ranking \
                  models. Previously on-call for a 30TB/day ingestion path.",
        profile_image: None,
        linkedin_url: "https://linkedin.com/in/lenafischer-data",
        match_score: 81,
    },
    CandidateSeed {
        id: "cand-008",
        name: "James Whitfield",
        title: "Staff Software Engineer",
        company: "Meridian Pay",
        location: "Seattle, WA",
        experience: "12+ years",
        skills: &[
            "Java",
            "Spring Boot",
            "Kafka",
            "Microservices",
            "System Design",
        ],
        summary: "Payments-infrastructure veteran; led the ledger rewrite that took \
                  settlement from nightly batch to near-real-time.",
        profile_image: Some("https://i.pravatar.cc/150?img=12"),
        linkedin_url: "https://linkedin.com/in/jwhitfield-payments",
        match_score: 86,
    },
];

/// The in-memory candidate list plus the filter options derived from it.
#[derive(Debug, Clone)]
pub struct Roster {
    candidates: Vec<Candidate>,
}

impl Roster {
    /// The built-in fixture roster.
    #[must_use]
    pub fn builtin() -> Self {
        let candidates = SEEDS
            .iter()
            .map(|seed| Candidate {
                id: seed.id.to_string(),
                name: seed.name.to_string(),
                title: seed.title.to_string(),
                company: seed.company.to_string(),
                location: seed.location.to_string(),
                experience: seed.experience.to_string(),
                skills: seed.skills.iter().map(ToString::to_string).collect(),
                summary: seed.summary.to_string(),
                profile_image: seed.profile_image.map(ToString::to_string),
                linkedin_url: seed.linkedin_url.to_string(),
                match_score: seed.match_score,
            })
            .collect();
        Self { candidates }
    }

    /// A roster over arbitrary candidates.
    #[must_use]
    pub fn from_candidates(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Sorted unique locations, for the dashboard location filter.
    #[must_use]
    pub fn locations(&self) -> Vec<String> {
        self.candidates
            .iter()
            .map(|c| c.location.clone())
            .unique()
            .sorted()
            .collect()
    }

    /// Sorted unique experience buckets, for the dashboard experience filter.
    /// Lexical order, so "10+ years" sorts before "2+ years".
    #[must_use]
    pub fn experience_levels(&self) -> Vec<String> {
        self.candidates
            .iter()
            .map(|c| c.experience.clone())
            .unique()
            .sorted()
            .collect()
    }
}
