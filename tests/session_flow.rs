//! End-to-end session flow: background worker events driving the reducer,
//! the same wiring the interactive session uses.

use std::time::Duration;

use scout::config::Config;
use scout::pipeline::{CandidateQuery, apply, average_match_score};
use scout::roster::Roster;
use scout::session::{Session, SessionEvent, Step};
use scout::worker::{SearchWorker, WorkerEvent};

fn fast_config() -> Config {
    let mut config = Config::default();
    config.extraction.latency_ms = 5;
    config.search.populate_latency_ms = 5;
    config
}

#[test]
fn test_full_sourcing_flow() {
    let worker = SearchWorker::new(&fast_config(), Roster::builtin()).unwrap();

    let mut session = Session::new().reduce(SessionEvent::Start);
    assert_eq!(session.step, Step::Form);

    let text = "We need a Senior React Developer with AWS and Node.js experience";
    session = session.reduce(SessionEvent::Submit {
        text: text.to_string(),
    });
    let events = worker.submit(text);

    // Keywords land first; the session stays on the form until candidates
    // arrive.
    let event = events.recv_timeout(Duration::from_secs(5)).unwrap();
    let WorkerEvent::Keywords(keywords) = event else {
        panic!("expected keywords first, got {event:?}");
    };
    session = session.reduce(SessionEvent::KeywordsReady { keywords });
    assert_eq!(session.step, Step::Form);
    assert_eq!(session.keywords.len(), 12);
    assert_eq!(session.keywords[0], "React");

    let event = events.recv_timeout(Duration::from_secs(5)).unwrap();
    let WorkerEvent::Candidates(candidates) = event else {
        panic!("expected candidates second, got {event:?}");
    };
    session = session.reduce(SessionEvent::CandidatesReady { candidates });
    assert_eq!(session.step, Step::Results);
    assert_eq!(session.candidates.len(), 8);

    // Default view sorts by match score.
    let shown = apply(&session.candidates, &CandidateQuery::default());
    assert_eq!(shown[0].name, "Sarah Chen");
    assert_eq!(average_match_score(shown.iter().copied()), 85);

    // Filter, open a profile, close it.
    let query = CandidateQuery::with_text("react");
    let shown = apply(&session.candidates, &query);
    assert_eq!(shown.len(), 4);

    let id = shown[0].id.clone();
    session = session.reduce(SessionEvent::Select { id: id.clone() });
    assert_eq!(session.selected_candidate().unwrap().id, id);

    session = session.reduce(SessionEvent::CloseDetail);
    assert!(session.selected.is_none());

    session = session.reduce(SessionEvent::StartOver);
    assert_eq!(session.step, Step::Form);
    assert!(session.candidates.is_empty());
    assert!(session.keywords.is_empty());
    assert!(session.job_description.is_empty());
}

#[test]
fn test_rejected_submission_leaves_form_untouched() {
    let worker = SearchWorker::new(&fast_config(), Roster::builtin()).unwrap();
    let session = Session::new().reduce(SessionEvent::Start);

    let events = worker.submit("   ");
    let event = events.recv_timeout(Duration::from_secs(5)).unwrap();
    let WorkerEvent::Failed(message) = event else {
        panic!("expected failure, got {event:?}");
    };
    assert_eq!(message, "Please enter a job description");

    assert_eq!(session.step, Step::Form);
    assert!(session.keywords.is_empty());
}

#[test]
fn test_stale_run_is_discarded_by_dropping_its_channel() {
    let worker = SearchWorker::new(&fast_config(), Roster::builtin()).unwrap();

    drop(worker.submit("python data pipelines"));

    let events = worker.submit("react frontend");
    let event = events.recv_timeout(Duration::from_secs(5)).unwrap();
    let WorkerEvent::Keywords(keywords) = event else {
        panic!("expected keywords, got {event:?}");
    };
    assert!(keywords.contains(&"React".to_string()));
}

#[test]
fn test_worker_survives_consecutive_sessions() {
    let worker = SearchWorker::new(&fast_config(), Roster::builtin()).unwrap();

    let run = |text: &str| -> Session {
        let mut session = Session::new().reduce(SessionEvent::Start);
        session = session.reduce(SessionEvent::Submit {
            text: text.to_string(),
        });
        let events = worker.submit(text);
        loop {
            match events.recv_timeout(Duration::from_secs(5)).unwrap() {
                WorkerEvent::Keywords(keywords) => {
                    session = session.reduce(SessionEvent::KeywordsReady { keywords });
                }
                WorkerEvent::Candidates(candidates) => {
                    return session.reduce(SessionEvent::CandidatesReady { candidates });
                }
                WorkerEvent::Failed(message) => panic!("unexpected failure: {message}"),
            }
        }
    };

    let first = run("senior backend api");
    assert_eq!(first.step, Step::Results);
    assert!(first.keywords.contains(&"Backend".to_string()));

    let second = run("react frontend");
    assert_eq!(second.step, Step::Results);
    assert!(second.keywords.contains(&"React".to_string()));
}
