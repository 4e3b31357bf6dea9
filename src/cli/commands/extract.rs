//! scout extract - Extract matching keywords from a job description

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use itertools::Itertools;

use crate::app::AppContext;
use crate::cli::output::{emit_robot, robot_ok};
use crate::cli::progress::ProgressReporter;
use crate::error::Result;
use crate::extract::KeywordExtractor;

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Job description text (reads stdin when omitted)
    pub text: Option<String>,

    /// Read the job description from a file
    #[arg(long, short, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Skip the simulated analysis delay
    #[arg(long)]
    pub no_delay: bool,
}

pub fn run(ctx: &AppContext, args: &ExtractArgs) -> Result<()> {
    let text = read_input(args)?;

    let latency = if args.no_delay {
        std::time::Duration::ZERO
    } else {
        ctx.config.extraction.latency()
    };
    let extractor = KeywordExtractor::new(latency, ctx.config.extraction.max_keywords);

    let progress = ProgressReporter::new(ctx.robot_mode, ctx.quiet);
    let spinner = progress.spinner("Analyzing job description");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let keywords = match runtime.block_on(extractor.extract(&text)) {
        Ok(keywords) => keywords,
        Err(err) => {
            spinner.abandon_with_message(&err.to_string());
            return Err(err);
        }
    };

    spinner.finish_with_message(&format!("{} keywords matched", keywords.len()));

    if ctx.robot_mode {
        let payload = serde_json::json!({
            "keywords": keywords,
            "count": keywords.len(),
        });
        emit_robot(&robot_ok(payload))
    } else {
        display_keywords(&keywords);
        Ok(())
    }
}

fn read_input(args: &ExtractArgs) -> Result<String> {
    if let Some(ref text) = args.text {
        return Ok(text.clone());
    }
    if let Some(ref path) = args.file {
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn display_keywords(keywords: &[String]) {
    if keywords.is_empty() {
        println!("{} No keywords matched this description", "!".yellow());
        println!();
        println!("Try:");
        println!("  - Naming concrete technologies (React, Python, AWS)");
        println!("  - Mentioning the role level (senior, lead)");
        return;
    }

    println!();
    println!(
        "{} keywords for this role:",
        keywords.len().to_string().bold()
    );
    println!();

    let chips = keywords.iter().map(|k| format!("[{k}]")).join(" ");
    println!("  {}", chips.cyan());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_args_positional_text() {
        use clap::Parser;

        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            args: ExtractArgs,
        }

        let parsed = TestCli::parse_from(["test", "Senior React Developer with AWS"]);
        assert_eq!(
            parsed.args.text.as_deref(),
            Some("Senior React Developer with AWS")
        );
        assert!(parsed.args.file.is_none());
        assert!(!parsed.args.no_delay);
    }

    #[test]
    fn test_extract_args_file_flag() {
        use clap::Parser;

        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            args: ExtractArgs,
        }

        let parsed = TestCli::parse_from(["test", "--file", "role.txt", "--no-delay"]);
        assert_eq!(parsed.args.file, Some(PathBuf::from("role.txt")));
        assert!(parsed.args.no_delay);
    }

    #[test]
    fn test_extract_args_text_conflicts_with_file() {
        use clap::Parser;

        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            args: ExtractArgs,
        }

        let result = TestCli::try_parse_from(["test", "some text", "--file", "role.txt"]);
        assert!(result.is_err());
    }
}
