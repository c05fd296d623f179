//! Interactive navigator session
//!
//! Reads `<mode> <params>` lines until mode 6, end of input or Ctrl-C. A
//! failing command is reported and the session carries on.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::render;
use travel_distance_core::error::Result;
use travel_distance_core::graph::RouteGraph;
use travel_distance_core::mode::{Mode, QueryOutcome};

const RULE: &str = "------------------------------------";
const PROMPT: &str = "Please enter your mode with corresponding and appropriate parameters: ";

/// How a session presents itself
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub format: OutputFormat,
    pub quiet: bool,
    pub banner: bool,
}

impl SessionOptions {
    /// Banner, prompts and rules are for people reading plain text only
    fn chatty(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Human
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub failed: usize,
    pub exited: bool,
    pub interrupted: bool,
}

fn run_line(graph: &mut RouteGraph, line: &str) -> Result<(Mode, QueryOutcome)> {
    let (mode, params) = Mode::parse_command(line)?;
    let outcome = mode.compute(graph, params)?;
    Ok((mode, outcome))
}

/// Drive a session over `input`, writing results to `out` and failures to `errors`.
pub fn run_session<R, W, E>(
    graph: &mut RouteGraph,
    input: R,
    out: &mut W,
    errors: &mut E,
    options: SessionOptions,
    interrupted: &AtomicBool,
) -> Result<SessionSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut summary = SessionSummary::default();

    if options.chatty() {
        writeln!(out, "{}", RULE)?;
        writeln!(out, "Starting Navigation...")?;
        if options.banner {
            writeln!(out, "{}", graph)?;
        }
        writeln!(out, "{}", RULE)?;
        writeln!(out, "{}", PROMPT)?;
    }
    out.flush()?;

    for line in input.lines() {
        if interrupted.load(Ordering::SeqCst) {
            summary.interrupted = true;
            break;
        }
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        summary.commands += 1;

        match run_line(graph, &line) {
            Ok((Mode::Exit, _)) => {
                summary.exited = true;
                break;
            }
            Ok((mode, outcome)) => render::write_outcome(out, options.format, mode, &outcome)?,
            Err(e) => {
                summary.failed += 1;
                debug!(error = %e, line = %line, "command failed");
                render::write_error(errors, options.format, options.quiet, &e)?;
                errors.flush()?;
            }
        }

        if options.chatty() {
            writeln!(out, "{}", RULE)?;
            writeln!(out, "{}", PROMPT)?;
        }
        out.flush()?;
    }

    if interrupted.load(Ordering::SeqCst) {
        summary.interrupted = true;
    }
    Ok(summary)
}

pub fn handle_interactive(ctx: &CommandContext) -> Result<()> {
    let mut graph = ctx.load_graph()?;

    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);

    // A second Ctrl-C while blocked on input ends the process
    if let Err(e) = ctrlc::set_handler(move || {
        if interrupted_clone.swap(true, Ordering::SeqCst) {
            std::process::exit(130);
        }
    }) {
        warn!(error = %e, "failed to install Ctrl-C handler");
    }

    let options = SessionOptions {
        format: ctx.format,
        quiet: ctx.cli.quiet,
        banner: ctx.config.banner,
    };

    let summary = run_session(
        &mut graph,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        options,
        &interrupted,
    )?;

    debug!(
        elapsed = ?ctx.start.elapsed(),
        commands = summary.commands,
        failed = summary.failed,
        exited = summary.exited,
        interrupted = summary.interrupted,
        "session finished"
    );
    Ok(())
}
