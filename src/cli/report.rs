//! Summary printing for CLI commands.
//!
//! Separate from core logic to allow msgcat to be used as a library.

use std::{
    env,
    io::{self, Write},
    time::Duration,
};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, GenerateSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Set to any value to print `-` instead of the elapsed seconds.
const DISABLE_TIMING_ENV: &str = "MSGCAT_DISABLE_TIMING";

pub fn print(result: &CommandResult) {
    let timing = env::var_os(DISABLE_TIMING_ENV).is_none();
    print_to(result, timing, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, timing: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(summary, timing, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_generate<W: Write>(summary: &GenerateSummary, timing: bool, writer: &mut W) {
    let catalog = &summary.catalog;
    let elapsed = format_elapsed(summary.elapsed, timing);
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Messages catalog {} secs, {} source {}, {} {}",
            elapsed,
            catalog.files_scanned,
            plural(catalog.files_scanned, "file", "files"),
            catalog.messages,
            plural(catalog.messages, "message", "messages")
        )
        .green()
    );

    let failed = catalog.parse_failures.len();
    if failed > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} could not be parsed and {} skipped",
            FAILURE_MARK.yellow(),
            failed,
            plural(failed, "file", "files"),
            plural(failed, "was", "were")
        );
        for failure in &catalog.parse_failures {
            let _ = writeln!(writer, "  {}", failure.file_path.dimmed());
        }
    }

    if catalog.skipped_paths > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} could not be read and {} skipped",
            FAILURE_MARK.yellow(),
            catalog.skipped_paths,
            plural(catalog.skipped_paths, "path", "paths"),
            plural(catalog.skipped_paths, "was", "were")
        );
    }

    if catalog.dropped > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} dropped, see warnings above",
            FAILURE_MARK.yellow(),
            catalog.dropped,
            plural(catalog.dropped, "message", "messages")
        );
    }

    let _ = writeln!(writer, "  {}", catalog.catalog_path.display());
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn format_elapsed(elapsed: Duration, timing: bool) -> String {
    if timing {
        format!("{:.2}", elapsed.as_secs_f64())
    } else {
        "-".to_string()
    }
}
