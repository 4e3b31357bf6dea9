//! Search session state and its reducer.
//!
//! All interactive surfaces drive the same state machine: `welcome` to
//! `form` on start, `form` to `results` once extraction and candidate
//! population both finish, and `results` back to `form` on start-over.
//! Transitions are pure: [`Session::reduce`] consumes the old state and
//! returns the new one, and events that do not apply to the current step
//! leave the state unchanged.

use crate::model::Candidate;

/// Which view of the flow is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Welcome,
    Form,
    Results,
}

impl Step {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Form => "form",
            Self::Results => "results",
        }
    }
}

/// Events the reducer understands.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Leave the welcome screen for the form.
    Start,
    /// Record a submitted job description while extraction runs.
    Submit { text: String },
    /// Extraction finished.
    KeywordsReady { keywords: Vec<String> },
    /// Candidate population finished; moves to results.
    CandidatesReady { candidates: Vec<Candidate> },
    /// Open the detail view for one candidate.
    Select { id: String },
    /// Close the detail view.
    CloseDetail,
    /// Clear everything and return to the form.
    StartOver,
}

/// One search session. Created fresh per run, never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub step: Step,
    pub job_description: String,
    pub keywords: Vec<String>,
    pub candidates: Vec<Candidate>,
    pub selected: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event, returning the next state. Events that do not
    /// apply to the current step return the state unchanged.
    #[must_use]
    pub fn reduce(mut self, event: SessionEvent) -> Self {
        match (self.step, event) {
            (Step::Welcome, SessionEvent::Start) => {
                self.step = Step::Form;
                self
            }
            (Step::Form, SessionEvent::Submit { text }) => {
                self.job_description = text;
                self
            }
            (Step::Form, SessionEvent::KeywordsReady { keywords }) => {
                self.keywords = keywords;
                self
            }
            (Step::Form, SessionEvent::CandidatesReady { candidates }) => {
                self.candidates = candidates;
                self.step = Step::Results;
                self
            }
            (Step::Results, SessionEvent::Select { id }) => {
                self.selected = Some(id);
                self
            }
            (Step::Results, SessionEvent::CloseDetail) => {
                self.selected = None;
                self
            }
            (Step::Results, SessionEvent::StartOver) => Self {
                step: Step::Form,
                ..Self::default()
            },
            (_, _) => self,
        }
    }

    /// Resolves the selected candidate id against the populated list.
    pub fn selected_candidate(&self) -> Option<&Candidate> {
        let id = self.selected.as_deref()?;
        self.candidates.iter().find(|candidate| candidate.id == id)
    }
}
