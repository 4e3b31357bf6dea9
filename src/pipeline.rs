//! Candidate filtering, sorting, and aggregates.
//!
//! The pipeline is recompute-on-read: every call derives the result from
//! the full candidate list and the current query, so callers never hold a
//! stale view. Filtering ANDs three predicates (free-text, location,
//! experience) and sorting is stable, so ties keep their fixture order.

use std::cmp::Ordering;

use crate::model::Candidate;

/// Sort order applied after filtering.
///
/// Unknown keys map to [`SortKey::Unsorted`], which leaves the filtered
/// set in fixture order rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    MatchScore,
    Name,
    Experience,
    Unsorted,
}

impl SortKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MatchScore => "match_score",
            Self::Name => "name",
            Self::Experience => "experience",
            Self::Unsorted => "unsorted",
        }
    }

    /// Display label for interactive surfaces.
    pub const fn label(self) -> &'static str {
        match self {
            Self::MatchScore => "Match Score",
            Self::Name => "Name",
            Self::Experience => "Experience",
            Self::Unsorted => "Unsorted",
        }
    }

    /// Advances to the next user-selectable key, wrapping around.
    pub const fn cycle(self) -> Self {
        match self {
            Self::MatchScore => Self::Name,
            Self::Name => Self::Experience,
            Self::Experience | Self::Unsorted => Self::MatchScore,
        }
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        match value {
            "match_score" => Self::MatchScore,
            "name" => Self::Name,
            "experience" => Self::Experience,
            _ => Self::Unsorted,
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter and sort inputs for one derivation pass.
///
/// `None` for location or experience means the filter is off, matching
/// every candidate.
#[derive(Debug, Clone, Default)]
pub struct CandidateQuery {
    pub text: String,
    pub location: Option<String>,
    pub experience: Option<String>,
    pub sort: SortKey,
}

impl CandidateQuery {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Free-text predicate over name, title, company, and skills.
///
/// Skills match in both directions: a skill containing the query or the
/// query containing the skill both count, so "advanced react patterns"
/// still finds candidates tagged `React`.
fn matches_text(candidate: &Candidate, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    candidate.name.to_lowercase().contains(query)
        || candidate.title.to_lowercase().contains(query)
        || candidate.company.to_lowercase().contains(query)
        || candidate.skills.iter().any(|skill| {
            let skill = skill.to_lowercase();
            skill.contains(query) || query.contains(skill.as_str())
        })
}

fn passes(candidate: &Candidate, query: &CandidateQuery, text: &str) -> bool {
    let location_ok = match &query.location {
        Some(location) => candidate.location == *location,
        None => true,
    };
    let experience_ok = match &query.experience {
        Some(experience) => candidate.experience == *experience,
        None => true,
    };
    location_ok && experience_ok && matches_text(candidate, text)
}

fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn sort_indices(candidates: &[Candidate], indices: &mut [usize], sort: SortKey) {
    match sort {
        SortKey::MatchScore => indices.sort_by(|&a, &b| {
            candidates[b].match_score.cmp(&candidates[a].match_score)
        }),
        SortKey::Name => {
            indices.sort_by(|&a, &b| collate(&candidates[a].name, &candidates[b].name));
        }
        SortKey::Experience => indices.sort_by(|&a, &b| {
            collate(&candidates[a].experience, &candidates[b].experience)
        }),
        SortKey::Unsorted => {}
    }
}

/// Derives the filtered, sorted view as indices into `candidates`.
pub fn apply_indices(candidates: &[Candidate], query: &CandidateQuery) -> Vec<usize> {
    let text = query.text.to_lowercase();
    let mut indices: Vec<usize> = candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| passes(candidate, query, &text))
        .map(|(index, _)| index)
        .collect();
    sort_indices(candidates, &mut indices, query.sort);
    indices
}

/// Derives the filtered, sorted view as candidate references.
pub fn apply<'a>(candidates: &'a [Candidate], query: &CandidateQuery) -> Vec<&'a Candidate> {
    apply_indices(candidates, query)
        .into_iter()
        .map(|index| &candidates[index])
        .collect()
}

/// Mean match score over a candidate set, rounded to the nearest integer.
/// An empty set yields 0.
pub fn average_match_score<'a, I>(candidates: I) -> u8
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let mut sum: u32 = 0;
    let mut count: u32 = 0;
    for candidate in candidates {
        sum += u32::from(candidate.match_score);
        count += 1;
    }
    if count == 0 {
        0
    } else {
        ((sum + count / 2) / count) as u8
    }
}
