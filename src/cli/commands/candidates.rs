//! scout candidates - Filter, sort, and display the candidate roster

use clap::{Args, ValueEnum};
use colored::{ColoredString, Colorize};

use crate::app::AppContext;
use crate::cli::output::{emit_robot, robot_error, robot_ok};
use crate::contact::{
    PLACEHOLDER_AUTHORIZATION, PLACEHOLDER_AVAILABILITY, PLACEHOLDER_PHONE, PLACEHOLDER_REMOTE,
    PLACEHOLDER_SALARY, email_address,
};
use crate::error::{Result, ScoutError};
use crate::model::{Candidate, MatchBand};
use crate::pipeline::{CandidateQuery, SortKey, apply, average_match_score};

#[derive(Args, Debug)]
pub struct CandidatesArgs {
    /// Free-text filter over names, titles, companies, and skills
    #[arg(long)]
    pub query: Option<String>,

    /// Filter by location (exact match, e.g. "Austin, TX")
    #[arg(long, short)]
    pub location: Option<String>,

    /// Filter by experience level (exact match, e.g. "5+ years")
    #[arg(long, short)]
    pub experience: Option<String>,

    /// Sort order for results
    #[arg(long, short, value_enum, default_value_t = SortOrder::MatchScore)]
    pub sort: SortOrder,

    /// Show full detail for a single candidate
    #[arg(long)]
    pub id: Option<String>,

    /// List the distinct filter values and exit
    #[arg(long)]
    pub facets: bool,
}

/// Sort order exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum SortOrder {
    /// Highest match score first
    #[default]
    MatchScore,
    /// Alphabetical by name
    Name,
    /// Experience level ascending
    Experience,
    /// Roster order
    Unsorted,
}

impl From<SortOrder> for SortKey {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::MatchScore => Self::MatchScore,
            SortOrder::Name => Self::Name,
            SortOrder::Experience => Self::Experience,
            SortOrder::Unsorted => Self::Unsorted,
        }
    }
}

pub fn run(ctx: &AppContext, args: &CandidatesArgs) -> Result<()> {
    if args.facets {
        return show_facets(ctx);
    }

    if let Some(ref id) = args.id {
        return show_detail(ctx, id);
    }

    let query = CandidateQuery {
        text: args.query.clone().unwrap_or_default(),
        location: args.location.clone(),
        experience: args.experience.clone(),
        sort: args.sort.into(),
    };

    let shown = apply(ctx.roster.candidates(), &query);
    let average = average_match_score(shown.iter().copied());

    if ctx.robot_mode {
        let payload = serde_json::json!({
            "count": shown.len(),
            "total": ctx.roster.len(),
            "average_match_score": average,
            "candidates": shown,
        });
        emit_robot(&robot_ok(payload))
    } else {
        list_human(ctx, &shown, average);
        Ok(())
    }
}

fn list_human(ctx: &AppContext, shown: &[&Candidate], average: u8) {
    if shown.is_empty() {
        println!("{} No candidates match the current filters", "!".yellow());
        println!();
        println!("Try:");
        println!("  - Broadening the search text (--query)");
        println!("  - Clearing --location or --experience");
        println!("  - Listing valid filter values: scout candidates --facets");
        return;
    }

    println!(
        "{:22} {:30} {:19} {:11} {:>5}",
        "NAME".bold(),
        "TITLE".bold(),
        "LOCATION".bold(),
        "EXPERIENCE".bold(),
        "MATCH".bold()
    );
    println!("{}", "─".repeat(91).dimmed());

    for candidate in shown {
        println!(
            "{:22} {:30} {:19} {:11} {}",
            truncate(&candidate.name, 20),
            truncate(&candidate.title, 28),
            truncate(&candidate.location, 17),
            candidate.experience,
            match_cell(candidate)
        );
    }

    println!();
    println!(
        "{} {} of {} candidates   {} {}%",
        "Total:".dimmed(),
        shown.len(),
        ctx.roster.len(),
        "Average match:".dimmed(),
        average
    );
}

fn show_detail(ctx: &AppContext, id: &str) -> Result<()> {
    let Some(candidate) = ctx.roster.get(id) else {
        let err = ScoutError::CandidateNotFound(id.to_string());
        if ctx.robot_mode {
            emit_robot(&robot_error(&err))?;
            return Ok(());
        }
        return Err(err);
    };

    if ctx.robot_mode {
        let payload = serde_json::json!({
            "candidate": candidate,
            "email": email_address(&candidate.name),
            "phone": PLACEHOLDER_PHONE,
        });
        return emit_robot(&robot_ok(payload));
    }

    println!("{}", candidate.name.bold());
    println!("{} at {}", candidate.title, candidate.company);
    println!();
    println!("{:14} {}", "Location:".dimmed(), candidate.location);
    println!("{:14} {}", "Experience:".dimmed(), candidate.experience);
    println!("{:14} {}", "Match:".dimmed(), match_cell(candidate));
    println!(
        "{:14} {}",
        "Skills:".dimmed(),
        candidate.skills.join(", ")
    );
    println!();
    println!("{}", candidate.summary);
    println!();
    println!(
        "{:14} {}",
        "Email:".dimmed(),
        email_address(&candidate.name)
    );
    println!("{:14} {}", "LinkedIn:".dimmed(), candidate.linkedin_url);
    println!("{:14} {}", "Phone:".dimmed(), PLACEHOLDER_PHONE);
    println!();
    println!("{:14} {}", "Availability:".dimmed(), PLACEHOLDER_AVAILABILITY);
    println!("{:14} {}", "Salary:".dimmed(), PLACEHOLDER_SALARY);
    println!("{:14} {}", "Authorization:".dimmed(), PLACEHOLDER_AUTHORIZATION);
    println!("{:14} {}", "Remote:".dimmed(), PLACEHOLDER_REMOTE);

    Ok(())
}

fn show_facets(ctx: &AppContext) -> Result<()> {
    let locations = ctx.roster.locations();
    let experience_levels = ctx.roster.experience_levels();

    if ctx.robot_mode {
        let payload = serde_json::json!({
            "locations": locations,
            "experience_levels": experience_levels,
        });
        return emit_robot(&robot_ok(payload));
    }

    println!("{}", "Locations".bold());
    for location in &locations {
        println!("  {location}");
    }
    println!();
    println!("{}", "Experience levels".bold());
    for level in &experience_levels {
        println!("  {level}");
    }

    Ok(())
}

fn match_cell(candidate: &Candidate) -> ColoredString {
    let cell = format!("{:>4}%", candidate.match_score);
    match candidate.match_band() {
        MatchBand::Strong => cell.green(),
        MatchBand::Medium => cell.yellow(),
        MatchBand::Weak => cell.red(),
    }
}

/// Truncate a string to a maximum number of characters (not bytes), safe for UTF-8
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{kept}…")
    } else {
        s.to_string()
    }
}
