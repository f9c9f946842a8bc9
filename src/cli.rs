//! Command-line surface.
//!
//! Each invocation runs one command against the task directory:
//! load `tasks.yaml` → apply the command → render status → save if changed.
//! Mutating commands hold the directory lock for the whole cycle.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::config::Config;
use crate::models::MatchResult;
use crate::render::{render_status, RenderStyle};
use crate::storage::TaskFile;
use crate::store::TaskStore;

#[derive(Debug, Parser)]
#[command(name = "nownext", version)]
#[command(about = "Track what to do now, next, soon and later")]
pub struct Cli {
    /// Status style, overriding `style` in config.yaml
    #[arg(long, global = true, value_enum)]
    pub style: Option<RenderStyle>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Start on a task; the current "now" moves to "next"
    Now {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Queue a task; the current "next" moves to the front of "soon"
    Next {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Add a task to the end of "soon"
    Soon {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Add a task to the end of "later"
    Later {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Show all tiers
    Status,
    /// Remove the one task containing every keyword
    Done {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        keywords: Vec<String>,
    },
    /// Move the one task containing every keyword to "now"
    Bump {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        keywords: Vec<String>,
    },
    /// List every task containing every keyword
    Find {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        keywords: Vec<String>,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Now { .. } => "now",
            Self::Next { .. } => "next",
            Self::Soon { .. } => "soon",
            Self::Later { .. } => "later",
            Self::Status => "status",
            Self::Done { .. } => "done",
            Self::Bump { .. } => "bump",
            Self::Find { .. } => "find",
        }
    }

    /// Whether the command can change the task file.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Self::Status | Self::Find { .. })
    }
}

/// What a command produced, split by destination stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub stdout: String,
    pub stderr: String,
    /// Whether the task file was rewritten.
    pub saved: bool,
}

/// Run `command` against the task directory `dir`.
pub fn run(command: Command, dir: &Path, style: Option<RenderStyle>) -> Result<Report> {
    let config = Config::load(dir)?;
    let style = style.unwrap_or(config.style);
    let file = TaskFile::in_dir(dir);

    let _lock = if command.is_mutating() {
        Some(file.lock()?)
    } else {
        None
    };

    let mut store = file.load()?;
    let mut report = Report::default();
    info!(command = command.name(), style = style.as_str(), "Running command");

    let changed = match command {
        Command::Now { text } => {
            store.set_now(text.join(" "))?;
            true
        }
        Command::Next { text } => {
            store.set_next(text.join(" "))?;
            true
        }
        Command::Soon { text } => {
            store.append_soon(text.join(" "))?;
            true
        }
        Command::Later { text } => {
            store.append_later(text.join(" "))?;
            true
        }
        Command::Status => false,
        Command::Done { keywords } => {
            let query = keywords.join(" ");
            let result = store.done(&query);
            describe_result(&mut report, "done", &query, &result);
            result.succeeded
        }
        Command::Bump { keywords } => {
            let query = keywords.join(" ");
            let result = store.bump(&query);
            describe_result(&mut report, "bumped", &query, &result);
            result.succeeded
        }
        Command::Find { keywords } => {
            let query = keywords.join(" ");
            describe_matches(&mut report, &store, &query);
            return Ok(report);
        }
    };

    if changed {
        file.save(&store)
            .with_context(|| format!("Failed to save {}", file.path().display()))?;
        report.saved = true;
    }

    report
        .stdout
        .push_str(&render_status(style, &store).context("Failed to render status")?);
    Ok(report)
}

fn describe_result(report: &mut Report, verb: &str, query: &str, result: &MatchResult) {
    if let Some(task) = result.task() {
        let _ = writeln!(report.stdout, "{verb}: {task}\n");
        return;
    }

    if result.is_ambiguous() {
        warn!(query, matched = result.matched.len(), "Ambiguous keyword query");
        let _ = writeln!(
            report.stderr,
            "\"{query}\" matches {} tasks; be more specific:",
            result.matched.len()
        );
        for task in &result.matched {
            let _ = writeln!(report.stderr, "  - {task}");
        }
    } else {
        let _ = writeln!(report.stderr, "No task matches \"{query}\"");
    }
}

fn describe_matches(report: &mut Report, store: &TaskStore, query: &str) {
    let matches = store.find(query);
    if matches.is_empty() {
        let _ = writeln!(report.stderr, "No task matches \"{query}\"");
        return;
    }
    for m in matches {
        let location = format!("{}[{}]:", m.tier, m.index);
        let _ = writeln!(report.stdout, "{:<10} {}", location, m.task);
    }
}
