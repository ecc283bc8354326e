use std::time::Duration;

use crate::core::CatalogSummary;

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub catalog: CatalogSummary,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running msgcat commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Number of source files that failed to parse.
    pub parse_error_count: usize,
}
