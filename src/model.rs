//! Candidate data structures.
//!
//! A [`Candidate`] is static fixture data: every profile field, including
//! `match_score`, is assigned when the roster is authored and never
//! recomputed from a submitted job description.

use serde::{Deserialize, Serialize};

/// Number of skills shown on a candidate card before collapsing to "+N more".
pub const SKILL_PREVIEW_LIMIT: usize = 6;

/// A sourced candidate profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Opaque unique ID
    pub id: String,
    /// Full name
    pub name: String,
    /// Current role title
    pub title: String,
    /// Current employer
    pub company: String,
    /// Location label, e.g. "Seattle, WA"
    pub location: String,
    /// Free-text experience bucket, e.g. "5+ years"
    pub experience: String,
    /// Skill tags, ordered as authored
    pub skills: Vec<String>,
    /// Professional summary
    pub summary: String,
    /// Optional avatar image reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// External profile link
    pub linkedin_url: String,
    /// Fixture match score in [0, 100]; static, never recomputed
    pub match_score: u8,
}

impl Candidate {
    /// Avatar fallback: first letter of each name part, uppercased, max 2.
    #[must_use]
    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    /// Display band for the match score.
    #[must_use]
    pub fn match_band(&self) -> MatchBand {
        MatchBand::from_score(self.match_score)
    }

    /// Card view of the skill list: the first [`SKILL_PREVIEW_LIMIT`] tags
    /// plus how many were hidden.
    #[must_use]
    pub fn skill_preview(&self) -> (&[String], usize) {
        let shown = self.skills.len().min(SKILL_PREVIEW_LIMIT);
        (&self.skills[..shown], self.skills.len() - shown)
    }
}

/// Display band for a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    /// 90 and up
    Strong,
    /// 75 to 89
    Medium,
    /// Below 75
    Weak,
}

impl MatchBand {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            Self::Strong
        } else if score >= 75 {
            Self::Medium
        } else {
            Self::Weak
        }
    }
}

/// First letter of each whitespace-separated part, uppercased, truncated to 2.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
