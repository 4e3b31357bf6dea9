//! Interactive candidate sourcing TUI using ratatui.
//!
//! Walks the welcome, job description, and results screens of a sourcing
//! session. Submissions run on the background worker; the event loop polls
//! for completion while keeping the interface responsive.

use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use itertools::Itertools;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::AppContext;
use crate::contact::{self, PLACEHOLDER_PHONE};
use crate::error::{Result, ScoutError};
use crate::extract::validate_job_description;
use crate::model::{Candidate, MatchBand};
use crate::pipeline::{CandidateQuery, SortKey, apply_indices, average_match_score};
use crate::session::{Session, SessionEvent, Step};
use crate::worker::{SearchWorker, WorkerEvent};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Action to take after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Exit the session
    Quit,
    /// Continue running the TUI
    Continue,
}

/// TUI application state.
pub struct SourcingTui {
    /// Session state machine
    session: Session,
    /// Background worker for submissions
    worker: SearchWorker,
    /// Events for the in-flight submission, if any
    pending: Option<Receiver<WorkerEvent>>,
    /// Whether the in-flight submission has delivered keywords yet
    keywords_received: bool,
    /// Job description editor buffer
    editor: String,
    /// Validation error shown under the editor
    error: Option<String>,
    /// Free-text filter over the results
    query: String,
    /// Whether the filter input is focused
    search_focused: bool,
    /// Location filter; `None` shows all
    location: Option<String>,
    /// Experience filter; `None` shows all
    experience: Option<String>,
    /// Active sort order
    sort: SortKey,
    /// Sort order restored on a new search
    default_sort: SortKey,
    /// Indices into the session candidates after filtering
    filtered: Vec<usize>,
    /// List selection state
    list_state: ListState,
    /// Profile scroll offset
    detail_scroll: u16,
    /// Whether to show help overlay
    show_help: bool,
    /// Status message to display
    status_message: Option<String>,
    /// Frame counter for the inline spinner
    tick: usize,
    /// Distinct locations for filter cycling
    locations: Vec<String>,
    /// Distinct experience levels for filter cycling
    experience_levels: Vec<String>,
}

impl SourcingTui {
    /// Create a new sourcing TUI over the configured roster.
    pub fn new(ctx: &AppContext, initial: Option<&str>) -> Result<Self> {
        let worker = SearchWorker::new(&ctx.config, ctx.roster.clone())?;
        let sort = ctx.config.ui.sort_key();

        Ok(Self {
            session: Session::new(),
            worker,
            pending: None,
            keywords_received: false,
            editor: initial.unwrap_or_default().to_string(),
            error: None,
            query: String::new(),
            search_focused: false,
            location: None,
            experience: None,
            sort,
            default_sort: sort,
            filtered: Vec::new(),
            list_state: ListState::default(),
            detail_scroll: 0,
            show_help: false,
            status_message: None,
            tick: 0,
            locations: ctx.roster.locations(),
            experience_levels: ctx.roster.experience_levels(),
        })
    }

    /// Create a SourcingTui already showing results (for testing).
    #[cfg(test)]
    pub fn with_test_candidates(candidates: Vec<Candidate>) -> Self {
        use crate::config::Config;
        use crate::roster::Roster;

        let roster = Roster::from_candidates(candidates.clone());
        let mut config = Config::default();
        config.extraction.latency_ms = 0;
        config.search.populate_latency_ms = 0;
        let worker = SearchWorker::new(&config, roster.clone()).expect("worker");

        let session = Session::new()
            .reduce(SessionEvent::Start)
            .reduce(SessionEvent::Submit {
                text: "test role".to_string(),
            })
            .reduce(SessionEvent::KeywordsReady {
                keywords: Vec::new(),
            })
            .reduce(SessionEvent::CandidatesReady { candidates });

        let mut tui = Self {
            session,
            worker,
            pending: None,
            keywords_received: false,
            editor: String::new(),
            error: None,
            query: String::new(),
            search_focused: false,
            location: None,
            experience: None,
            sort: SortKey::default(),
            default_sort: SortKey::default(),
            filtered: Vec::new(),
            list_state: ListState::default(),
            detail_scroll: 0,
            show_help: false,
            status_message: None,
            tick: 0,
            locations: roster.locations(),
            experience_levels: roster.experience_levels(),
        };
        tui.refresh_filtered();
        tui
    }

    /// Run the TUI main loop.
    pub fn run(
        mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        loop {
            self.pump_worker();
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    match self.handle_key(key.code, key.modifiers) {
                        Action::Quit => return Ok(()),
                        Action::Continue => {}
                    }
                }
            }
        }
    }

    /// Drain completion events from the in-flight submission.
    fn pump_worker(&mut self) {
        let Some(events) = self.pending.take() else {
            return;
        };

        let mut still_pending = true;
        loop {
            match events.try_recv() {
                Ok(WorkerEvent::Keywords(keywords)) => {
                    self.keywords_received = true;
                    self.dispatch(SessionEvent::KeywordsReady { keywords });
                }
                Ok(WorkerEvent::Candidates(candidates)) => {
                    self.dispatch(SessionEvent::CandidatesReady { candidates });
                    self.refresh_filtered();
                    still_pending = false;
                    break;
                }
                Ok(WorkerEvent::Failed(message)) => {
                    self.error = Some(message);
                    still_pending = false;
                    break;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // The task ended without delivering candidates
                    self.error = Some(
                        ScoutError::Worker("search task ended unexpectedly".to_string())
                            .to_string(),
                    );
                    still_pending = false;
                    break;
                }
            }
        }

        if still_pending {
            self.pending = Some(events);
        }
    }

    fn dispatch(&mut self, event: SessionEvent) {
        let session = std::mem::take(&mut self.session);
        self.session = session.reduce(event);
    }

    fn submit(&mut self) {
        if self.pending.is_some() {
            return;
        }

        let text = self.editor.clone();
        if let Err(err) = validate_job_description(&text) {
            self.error = Some(err.to_string());
            return;
        }

        self.error = None;
        self.keywords_received = false;
        self.dispatch(SessionEvent::Submit { text: text.clone() });
        self.pending = Some(self.worker.submit(&text));
    }

    fn start_over(&mut self) {
        self.dispatch(SessionEvent::StartOver);
        self.pending = None;
        self.keywords_received = false;
        self.editor.clear();
        self.error = None;
        self.query.clear();
        self.search_focused = false;
        self.location = None;
        self.experience = None;
        self.sort = self.default_sort;
        self.filtered.clear();
        self.list_state.select(None);
        self.detail_scroll = 0;
        self.status_message = None;
    }

    /// Re-derive the visible candidate list from the active filters.
    fn refresh_filtered(&mut self) {
        let query = CandidateQuery {
            text: self.query.clone(),
            location: self.location.clone(),
            experience: self.experience.clone(),
            sort: self.sort,
        };

        self.filtered = apply_indices(&self.session.candidates, &query);

        if self.filtered.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
        self.detail_scroll = 0;
    }

    fn cycle_location(&mut self) {
        self.location = next_facet(&self.locations, self.location.as_deref());
        self.refresh_filtered();
        self.status_message = Some(match &self.location {
            Some(location) => format!("Location: {location}"),
            None => "Location: all".to_string(),
        });
    }

    fn cycle_experience(&mut self) {
        self.experience = next_facet(&self.experience_levels, self.experience.as_deref());
        self.refresh_filtered();
        self.status_message = Some(match &self.experience {
            Some(level) => format!("Experience: {level}"),
            None => "Experience: all".to_string(),
        });
    }

    fn cycle_sort(&mut self) {
        self.sort = self.sort.cycle();
        self.refresh_filtered();
        self.status_message = Some(format!("Sort: {}", self.sort.label()));
    }

    fn has_active_filters(&self) -> bool {
        !self.query.is_empty() || self.location.is_some() || self.experience.is_some()
    }

    fn clear_filters(&mut self) {
        self.query.clear();
        self.location = None;
        self.experience = None;
        self.refresh_filtered();
        self.status_message = Some("Filters cleared".to_string());
    }

    fn selected_in_list(&self) -> Option<&Candidate> {
        let selected = self.list_state.selected()?;
        let &idx = self.filtered.get(selected)?;
        self.session.candidates.get(idx)
    }

    // ===== rendering =====

    fn draw(&mut self, f: &mut Frame) {
        self.tick = self.tick.wrapping_add(1);

        match self.session.step {
            Step::Welcome => self.draw_welcome(f),
            Step::Form => self.draw_form(f),
            Step::Results => self.draw_results(f),
        }

        if self.session.step == Step::Results && self.session.selected.is_some() {
            self.draw_profile_modal(f);
        }

        if self.show_help {
            self.draw_help_overlay(f);
        }
    }

    fn draw_welcome(&self, f: &mut Frame) {
        let area = f.area();

        let width = 62.min(area.width.saturating_sub(4));
        let height = 14.min(area.height.saturating_sub(4));
        let x = (area.width - width) / 2;
        let y = (area.height - height) / 2;
        let hero = Rect::new(x, y, width, height);

        let lines = vec![
            Line::from(Span::styled(
                "Find your next engineering hire",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Describe the role you are hiring for and scout surfaces"),
            Line::from("the candidates on the roster who fit."),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Keyword Extraction  ", Style::default().fg(Color::Cyan)),
                Span::raw("Pull the key skills out of any description"),
            ]),
            Line::from(vec![
                Span::styled("  Profile Discovery   ", Style::default().fg(Color::Cyan)),
                Span::raw("Browse a curated roster of candidates"),
            ]),
            Line::from(vec![
                Span::styled("  Smart Matching      ", Style::default().fg(Color::Cyan)),
                Span::raw("Ranked results with per-candidate scores"),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to get started",
                Style::default().fg(Color::Cyan),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" scout "),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, hero);

        self.draw_footer(f, "Enter: get started  ?: help  q: quit");
    }

    fn draw_form(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Min(8),    // Editor
                Constraint::Length(4), // Status area
                Constraint::Length(1), // Help bar
            ])
            .split(f.area());

        self.draw_title_bar(f, chunks[0], "describe the role");

        let searching = self.pending.is_some();
        let border_style = if searching {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let editor_text = if self.editor.is_empty() && !searching {
            Text::from(Span::styled(
                "Describe the role: tech stack, seniority, domain...",
                Style::default().fg(Color::DarkGray),
            ))
        } else if searching {
            Text::from(self.editor.clone())
        } else {
            Text::from(format!("{}_", self.editor))
        };

        let editor = Paragraph::new(editor_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(" Job Description "),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(editor, chunks[1]);

        let status = Paragraph::new(self.form_status_lines()).wrap(Wrap { trim: false });
        f.render_widget(status, chunks[2]);

        let help = if searching {
            "searching...  Ctrl+C: quit"
        } else {
            "Ctrl+S: find candidates  Ctrl+U: clear  Ctrl+C: quit"
        };
        f.render_widget(
            Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
            chunks[3],
        );
    }

    fn form_status_lines(&self) -> Vec<Line<'static>> {
        if let Some(ref error) = self.error {
            return vec![Line::from(Span::styled(
                format!("✗ {error}"),
                Style::default().fg(Color::Red),
            ))];
        }

        if self.pending.is_some() {
            let frame = SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()];
            let message = if self.keywords_received {
                "Matching candidates..."
            } else {
                "Analyzing job description..."
            };
            let mut lines = vec![Line::from(vec![
                Span::styled(format!("{frame} "), Style::default().fg(Color::Cyan)),
                Span::raw(message),
            ])];

            if self.keywords_received {
                lines.push(Line::from(format!(
                    "Keywords extracted! Found {} relevant keywords",
                    self.session.keywords.len()
                )));
                lines.push(Line::from(Span::styled(
                    chips(&self.session.keywords),
                    Style::default().fg(Color::Cyan),
                )));
            }
            return lines;
        }

        vec![Line::from(Span::styled(
            "Describe the ideal candidate, then press Ctrl+S.",
            Style::default().fg(Color::DarkGray),
        ))]
    }

    fn draw_results(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Length(1), // Keywords
                Constraint::Length(3), // Filter bar
                Constraint::Length(1), // Stats
                Constraint::Min(8),    // Main content
                Constraint::Length(1), // Help bar
            ])
            .split(f.area());

        self.draw_title_bar(f, chunks[0], "results");
        self.draw_keyword_line(f, chunks[1]);
        self.draw_filter_bar(f, chunks[2]);
        self.draw_stats_line(f, chunks[3]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[4]);

        self.draw_candidate_list(f, columns[0]);
        self.draw_preview_panel(f, columns[1]);

        let help = if self.search_focused {
            "type to filter  Enter/Esc: done  Backspace: delete"
        } else if self.session.selected.is_some() {
            "j/k: scroll  o: LinkedIn  m: email  p: phone  r: resume  Esc: close"
        } else {
            "j/k: navigate  Enter: profile  /: filter  l: location  e: experience  s: sort  n: new search  ?: help  q: quit"
        };
        f.render_widget(
            Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
            chunks[5],
        );
    }

    fn draw_title_bar(&self, f: &mut Frame, area: Rect, screen: &str) {
        let status = self
            .status_message
            .as_ref()
            .map(|m| format!(" | {m}"))
            .unwrap_or_default();

        let counts = if self.session.step == Step::Results {
            format!(
                " | {} candidates ({} shown)",
                self.session.candidates.len(),
                self.filtered.len()
            )
        } else {
            String::new()
        };

        let title = Line::from(vec![
            Span::styled("scout", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" {screen}{counts}{status}")),
        ]);

        let paragraph = Paragraph::new(title).style(Style::default().fg(Color::Cyan));
        f.render_widget(paragraph, area);
    }

    fn draw_keyword_line(&self, f: &mut Frame, area: Rect) {
        let line = if self.session.keywords.is_empty() {
            Line::from(Span::styled(
                "No keywords extracted",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(vec![
                Span::styled("Keywords: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    chips(&self.session.keywords),
                    Style::default().fg(Color::Cyan),
                ),
            ])
        };
        f.render_widget(Paragraph::new(line), area);
    }

    fn draw_filter_bar(&self, f: &mut Frame, area: Rect) {
        let border_style = if self.search_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let query_span = if self.search_focused {
            Span::styled(
                format!("/{}_", self.query),
                Style::default().fg(Color::Yellow),
            )
        } else if self.query.is_empty() {
            Span::styled("/ to filter", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(format!("/{}", self.query))
        };

        let line = Line::from(vec![
            query_span,
            Span::raw(format!(
                "  |  Location: {}",
                self.location.as_deref().unwrap_or("all")
            )),
            Span::raw(format!(
                "  |  Experience: {}",
                self.experience.as_deref().unwrap_or("all")
            )),
            Span::raw(format!("  |  Sort: {}", self.sort.label())),
        ]);

        let paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Filters "),
        );
        f.render_widget(paragraph, area);
    }

    fn draw_stats_line(&self, f: &mut Frame, area: Rect) {
        let shown = self
            .filtered
            .iter()
            .filter_map(|&idx| self.session.candidates.get(idx));
        let average = average_match_score(shown);

        let stats = format!(
            "{} of {} candidates  |  average match {}%  |  {} keywords",
            self.filtered.len(),
            self.session.candidates.len(),
            average,
            self.session.keywords.len()
        );
        f.render_widget(
            Paragraph::new(stats).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }

    fn draw_candidate_list(&mut self, f: &mut Frame, area: Rect) {
        let is_focused = !self.search_focused && self.session.selected.is_none();
        let border_style = if is_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let items: Vec<ListItem> = self
            .filtered
            .iter()
            .filter_map(|&idx| self.session.candidates.get(idx))
            .map(|c| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>3}% ", c.match_score),
                        Style::default().fg(match_color(c.match_band())),
                    ),
                    Span::styled(c.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(format!(" - {}", truncate(&c.title, 26))),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(" Candidates "),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn draw_preview_panel(&self, f: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.build_preview())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Preview "),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn build_preview(&self) -> Text<'static> {
        let Some(candidate) = self.selected_in_list() else {
            let mut lines = vec![Line::from("No results found")];
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Adjust your search criteria",
                Style::default().fg(Color::DarkGray),
            )));
            if self.has_active_filters() {
                lines.push(Line::from(Span::styled(
                    "Esc clears all filters",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            return Text::from(lines);
        };

        let (shown, hidden) = candidate.skill_preview();
        let mut skills = chips(shown);
        if hidden > 0 {
            skills.push_str(&format!(" +{hidden} more"));
        }

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("({}) ", candidate.initials()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    candidate.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("{} at {}", candidate.title, candidate.company)),
            Line::from(format!(
                "{} | {}",
                candidate.location, candidate.experience
            )),
            Line::from(Span::styled(
                format!("{}% match", candidate.match_score),
                Style::default().fg(match_color(candidate.match_band())),
            )),
            Line::from(""),
            Line::from(skills),
            Line::from(""),
        ];

        for text_line in candidate.summary.lines() {
            lines.push(Line::from(text_line.to_string()));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter opens the full profile",
            Style::default().fg(Color::DarkGray),
        )));

        Text::from(lines)
    }

    fn draw_profile_modal(&self, f: &mut Frame) {
        let Some(candidate) = self.session.selected_candidate() else {
            return;
        };

        let area = f.area();
        let width = 72.min(area.width.saturating_sub(4));
        let height = 26.min(area.height.saturating_sub(4));
        let x = (area.width - width) / 2;
        let y = (area.height - height) / 2;
        let modal = Rect::new(x, y, width, height);

        f.render_widget(Clear, modal);

        let mut lines = vec![
            Line::from(format!("{} at {}", candidate.title, candidate.company)),
            Line::from(format!(
                "{} | {}",
                candidate.location, candidate.experience
            )),
            Line::from(Span::styled(
                format!("{}% match", candidate.match_score),
                Style::default().fg(match_color(candidate.match_band())),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Skills".to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(chips(&candidate.skills)),
            Line::from(""),
            Line::from(Span::styled(
                "About".to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        for text_line in candidate.summary.lines() {
            lines.push(Line::from(text_line.to_string()));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Contact".to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!(
            "Email:    {}",
            contact::email_address(&candidate.name)
        )));
        lines.push(Line::from(format!("LinkedIn: {}", candidate.linkedin_url)));
        lines.push(Line::from(format!("Phone:    {PLACEHOLDER_PHONE}")));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Additional Information".to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!(
            "Availability:       {}",
            contact::PLACEHOLDER_AVAILABILITY
        )));
        lines.push(Line::from(format!(
            "Expected Salary:    {}",
            contact::PLACEHOLDER_SALARY
        )));
        lines.push(Line::from(format!(
            "Work Authorization: {}",
            contact::PLACEHOLDER_AUTHORIZATION
        )));
        lines.push(Line::from(format!(
            "Remote:             {}",
            contact::PLACEHOLDER_REMOTE
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "o: LinkedIn  m: email  p: phone  r: resume  Esc: close",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(format!(" {} ", candidate.name)),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.detail_scroll, 0));

        f.render_widget(paragraph, modal);
    }

    fn draw_help_overlay(&self, f: &mut Frame) {
        let area = f.area();

        let help_width = 58.min(area.width.saturating_sub(4));
        let help_height = 21.min(area.height.saturating_sub(4));
        let x = (area.width - help_width) / 2;
        let y = (area.height - help_height) / 2;
        let help_area = Rect::new(x, y, help_width, help_height);

        f.render_widget(Clear, help_area);

        let help_text = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Navigation:"),
            Line::from("  j / Down     Move down the candidate list"),
            Line::from("  k / Up       Move up the candidate list"),
            Line::from("  g / G        Jump to first / last"),
            Line::from("  Enter        Open the full profile"),
            Line::from("  Esc          Close profile, or clear filters"),
            Line::from(""),
            Line::from("Filters:"),
            Line::from("  /            Edit the text filter"),
            Line::from("  l            Cycle location filter"),
            Line::from("  e            Cycle experience filter"),
            Line::from("  s            Cycle sort order"),
            Line::from(""),
            Line::from("Session:"),
            Line::from("  n            Start a new search"),
            Line::from("  q / Ctrl+C   Quit"),
            Line::from(""),
            Line::from("Press ? or Esc to close this help"),
        ];

        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Help "),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, help_area);
    }

    fn draw_footer(&self, f: &mut Frame, text: &str) {
        let area = f.area();
        if area.height == 0 {
            return;
        }
        let footer = Rect::new(0, area.height - 1, area.width, 1);
        f.render_widget(
            Paragraph::new(text.to_string()).style(Style::default().fg(Color::DarkGray)),
            footer,
        );
    }

    // ===== input handling =====

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Action {
        if self.show_help {
            match key {
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter => {
                    self.show_help = false;
                }
                _ => {}
            }
            return Action::Continue;
        }

        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.session.step {
            Step::Welcome => self.handle_welcome_key(key),
            Step::Form => self.handle_form_key(key, modifiers),
            Step::Results => {
                if self.search_focused {
                    self.handle_search_key(key)
                } else if self.session.selected.is_some() {
                    self.handle_profile_key(key)
                } else {
                    self.handle_results_key(key)
                }
            }
        }
    }

    fn handle_welcome_key(&mut self, key: KeyCode) -> Action {
        match key {
            KeyCode::Enter | KeyCode::Char('s') => {
                self.dispatch(SessionEvent::Start);
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char('q') => return Action::Quit,
            _ => {}
        }
        Action::Continue
    }

    fn handle_form_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Action {
        // Input is frozen while a submission runs
        if self.pending.is_some() {
            return Action::Continue;
        }

        match key {
            KeyCode::Char('s') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
            }
            KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.editor.clear();
                self.error = None;
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.editor.push(c);
            }
            KeyCode::Enter => {
                self.editor.push('\n');
            }
            KeyCode::Backspace => {
                self.editor.pop();
            }
            KeyCode::Esc => {
                self.error = None;
            }
            _ => {}
        }
        Action::Continue
    }

    fn handle_search_key(&mut self, key: KeyCode) -> Action {
        match key {
            KeyCode::Enter | KeyCode::Esc => {
                self.search_focused = false;
                self.status_message = if self.query.is_empty() {
                    None
                } else {
                    Some(format!("Filtering: {}", self.query))
                };
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.refresh_filtered();
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.refresh_filtered();
            }
            _ => {}
        }
        Action::Continue
    }

    fn handle_results_key(&mut self, key: KeyCode) -> Action {
        match key {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Char('/') => {
                self.search_focused = true;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
            }
            KeyCode::Char('G') => {
                if !self.filtered.is_empty() {
                    self.list_state.select(Some(self.filtered.len() - 1));
                }
            }
            KeyCode::Char('g') => {
                if !self.filtered.is_empty() {
                    self.list_state.select(Some(0));
                }
            }
            KeyCode::Enter => {
                if let Some(candidate) = self.selected_in_list() {
                    let id = candidate.id.clone();
                    self.dispatch(SessionEvent::Select { id });
                    self.detail_scroll = 0;
                }
            }
            KeyCode::Char('l') => self.cycle_location(),
            KeyCode::Char('e') => self.cycle_experience(),
            KeyCode::Char('s') => self.cycle_sort(),
            KeyCode::Char('n') => self.start_over(),
            KeyCode::Esc => {
                if self.has_active_filters() {
                    self.clear_filters();
                }
            }
            _ => {}
        }
        Action::Continue
    }

    fn handle_profile_key(&mut self, key: KeyCode) -> Action {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.dispatch(SessionEvent::CloseDetail);
                self.detail_scroll = 0;
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::PageDown => {
                self.detail_scroll = self.detail_scroll.saturating_add(3);
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::PageUp => {
                self.detail_scroll = self.detail_scroll.saturating_sub(3);
            }
            KeyCode::Char('g') => {
                self.detail_scroll = 0;
            }
            KeyCode::Char('o') => {
                if let Some(candidate) = self.session.selected_candidate() {
                    let opened = contact::open_external(&candidate.linkedin_url);
                    self.status_message = Some(if opened {
                        "Opened LinkedIn profile".to_string()
                    } else {
                        format!("Profile: {}", candidate.linkedin_url)
                    });
                }
            }
            KeyCode::Char('m') => {
                if let Some(candidate) = self.session.selected_candidate() {
                    let mailto = contact::mailto_link(&candidate.name);
                    let opened = contact::open_external(&mailto);
                    self.status_message = Some(if opened {
                        "Opened email draft".to_string()
                    } else {
                        format!("Email: {}", contact::email_address(&candidate.name))
                    });
                }
            }
            KeyCode::Char('p') => {
                if let Some(candidate) = self.session.selected_candidate() {
                    let opened = contact::open_external(&contact::tel_link());
                    self.status_message = Some(if opened {
                        format!("Opened dialer for {}", candidate.name)
                    } else {
                        format!("Call {} at {PLACEHOLDER_PHONE}", candidate.name)
                    });
                }
            }
            KeyCode::Char('r') => {
                if let Some(candidate) = self.session.selected_candidate() {
                    self.status_message = Some(format!(
                        "Resume download would start here ({})",
                        contact::resume_filename(&candidate.name)
                    ));
                }
            }
            _ => {}
        }
        Action::Continue
    }

    fn select_next(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= self.filtered.len() - 1 {
                    0 // Wrap to beginning
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn select_prev(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.filtered.len() - 1 // Wrap to end
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Get selected item index for testing.
    #[cfg(test)]
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Get filtered count for testing.
    #[cfg(test)]
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Set the text filter for testing.
    #[cfg(test)]
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.refresh_filtered();
    }
}

/// RAII Guard to ensure terminal state is restored even on panic.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

/// Run the sourcing TUI.
pub fn run_sourcing_tui(ctx: &AppContext, initial: Option<&str>) -> Result<()> {
    // Check if stdout is a terminal
    if !io::stdout().is_terminal() {
        return Err(ScoutError::TerminalRequired(
            "session requires an interactive terminal".to_string(),
        ));
    }

    let _guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let app = SourcingTui::new(ctx, initial)?;
    app.run(&mut terminal)
}

/// Advance through `values`, with `None` (all) between the end and the start.
fn next_facet(values: &[String], current: Option<&str>) -> Option<String> {
    match current {
        None => values.first().cloned(),
        Some(current) => {
            let idx = values.iter().position(|v| v == current)?;
            values.get(idx + 1).cloned()
        }
    }
}

fn match_color(band: MatchBand) -> Color {
    match band {
        MatchBand::Strong => Color::Green,
        MatchBand::Medium => Color::Yellow,
        MatchBand::Weak => Color::Red,
    }
}

fn chips(keywords: &[String]) -> String {
    keywords.iter().map(|k| format!("[{k}]")).join(" ")
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        format!("{}...", s.chars().take(max_len - 3).collect::<String>())
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn make_candidate(
        id: &str,
        name: &str,
        title: &str,
        location: &str,
        experience: &str,
        score: u8,
        skills: Vec<&str>,
    ) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: name.to_string(),
            title: title.to_string(),
            company: format!("{name} Labs"),
            location: location.to_string(),
            experience: experience.to_string(),
            skills: skills.into_iter().map(String::from).collect(),
            summary: format!("{title} based in {location}."),
            profile_image: None,
            linkedin_url: format!("https://linkedin.com/in/{id}"),
            match_score: score,
        }
    }

    fn sample_candidates() -> Vec<Candidate> {
        vec![
            make_candidate(
                "c1",
                "Ada Park",
                "Frontend Engineer",
                "Austin, TX",
                "5+ years",
                92,
                vec!["React", "TypeScript"],
            ),
            make_candidate(
                "c2",
                "Ben Ortiz",
                "Backend Engineer",
                "Denver, CO",
                "8+ years",
                95,
                vec!["Go", "PostgreSQL"],
            ),
            make_candidate(
                "c3",
                "Cleo Vance",
                "Full Stack Developer",
                "Austin, TX",
                "3+ years",
                66,
                vec!["React", "Node.js"],
            ),
        ]
    }

    #[test]
    fn test_filter_by_query() {
        let mut app = SourcingTui::with_test_candidates(sample_candidates());

        app.set_query("react");

        assert_eq!(app.filtered_count(), 2);
    }

    #[test]
    fn test_query_matches_titles() {
        let mut app = SourcingTui::with_test_candidates(sample_candidates());

        app.set_query("backend");

        assert_eq!(app.filtered_count(), 1);
    }

    #[test]
    fn test_location_cycle_wraps_through_all() {
        let mut app = SourcingTui::with_test_candidates(sample_candidates());

        app.cycle_location();
        assert_eq!(app.location.as_deref(), Some("Austin, TX"));
        assert_eq!(app.filtered_count(), 2);

        app.cycle_location();
        assert_eq!(app.location.as_deref(), Some("Denver, CO"));
        assert_eq!(app.filtered_count(), 1);

        app.cycle_location();
        assert_eq!(app.location, None);
        assert_eq!(app.filtered_count(), 3);
    }

    #[test]
    fn test_experience_cycle_filters() {
        let mut app = SourcingTui::with_test_candidates(sample_candidates());

        app.cycle_experience();
        assert_eq!(app.experience.as_deref(), Some("3+ years"));
        assert_eq!(app.filtered_count(), 1);
    }

    #[test]
    fn test_sort_cycle_reorders() {
        let mut app = SourcingTui::with_test_candidates(sample_candidates());

        // Default order is match score descending
        assert_eq!(app.selected_in_list().map(|c| c.id.as_str()), Some("c2"));

        app.cycle_sort();
        assert_eq!(app.sort, SortKey::Name);
        assert_eq!(app.selected_in_list().map(|c| c.id.as_str()), Some("c1"));
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = SourcingTui::with_test_candidates(sample_candidates());

        assert_eq!(app.selected(), Some(0));

        app.select_prev();
        assert_eq!(app.selected(), Some(2));

        app.select_next();
        assert_eq!(app.selected(), Some(0));
    }

    #[test]
    fn test_enter_opens_profile_and_esc_closes() {
        let mut app = SourcingTui::with_test_candidates(sample_candidates());

        let action = app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(action, Action::Continue);
        assert_eq!(app.session.selected.as_deref(), Some("c2"));

        let action = app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(action, Action::Continue);
        assert_eq!(app.session.selected, None);
    }

    #[test]
    fn test_profile_resume_sets_status() {
        let mut app = SourcingTui::with_test_candidates(sample_candidates());

        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('r'), KeyModifiers::NONE);

        let status = app.status_message.as_deref().unwrap_or_default();
        assert!(status.contains("Ben_Ortiz_Resume.pdf"), "got {status:?}");
    }

    #[test]
    fn test_profile_scrolls() {
        let mut app = SourcingTui::with_test_candidates(sample_candidates());

        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('j'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(app.detail_scroll, 6);

        app.handle_key(KeyCode::Char('g'), KeyModifiers::NONE);
        assert_eq!(app.detail_scroll, 0);
    }

    #[test]
    fn test_welcome_enter_advances_to_form() {
        let mut app = SourcingTui::with_test_candidates(sample_candidates());
        app.session = Session::new();

        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.session.step, Step::Form);
    }

    #[test]
    fn test_empty_submission_sets_error() {
        let mut app = SourcingTui::with_test_candidates(sample_candidates());
        app.session = Session::new().reduce(SessionEvent::Start);

        app.handle_key(KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert_eq!(
            app.error.as_deref(),
            Some("Please enter a job description")
        );
        assert!(app.pending.is_none());
        assert_eq!(app.session.step, Step::Form);
    }

    #[test]
    fn test_start_over_resets_everything() {
        let mut app = SourcingTui::with_test_candidates(sample_candidates());
        app.set_query("react");
        app.cycle_location();
        app.cycle_sort();

        app.start_over();

        assert_eq!(app.session.step, Step::Form);
        assert!(app.session.candidates.is_empty());
        assert!(app.query.is_empty());
        assert_eq!(app.location, None);
        assert_eq!(app.sort, SortKey::MatchScore);
        assert_eq!(app.filtered_count(), 0);
    }

    #[test]
    fn test_esc_clears_active_filters() {
        let mut app = SourcingTui::with_test_candidates(sample_candidates());
        app.set_query("react");
        app.cycle_location();
        assert!(app.filtered_count() < 3);

        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);

        assert!(!app.has_active_filters());
        assert_eq!(app.filtered_count(), 3);
        assert_eq!(app.status_message.as_deref(), Some("Filters cleared"));
    }

    #[test]
    fn test_submission_reaches_results() {
        let mut app = SourcingTui::with_test_candidates(sample_candidates());
        app.start_over();
        app.editor.push_str("Senior React developer with AWS");

        app.handle_key(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(app.pending.is_some());

        let deadline = Instant::now() + Duration::from_secs(2);
        while app.session.step != Step::Results {
            assert!(Instant::now() < deadline, "timed out waiting for results");
            app.pump_worker();
            std::thread::sleep(Duration::from_millis(5));
        }

        assert!(app.session.keywords.contains(&"React".to_string()));
        assert_eq!(app.filtered_count(), 3);
        assert!(app.pending.is_none());
    }

    #[test]
    fn test_next_facet_handles_unknown_value() {
        let values = vec!["Austin, TX".to_string(), "Denver, CO".to_string()];

        assert_eq!(next_facet(&values, None).as_deref(), Some("Austin, TX"));
        assert_eq!(
            next_facet(&values, Some("Austin, TX")).as_deref(),
            Some("Denver, CO")
        );
        assert_eq!(next_facet(&values, Some("Denver, CO")), None);
        assert_eq!(next_facet(&values, Some("Remote")), None);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_match_color_bands() {
        assert_eq!(match_color(MatchBand::Strong), Color::Green);
        assert_eq!(match_color(MatchBand::Medium), Color::Yellow);
        assert_eq!(match_color(MatchBand::Weak), Color::Red);
    }
}
