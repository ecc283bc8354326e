use serde::Serialize;

/// The fixed severity levels, one per severity-named diagnostic function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Exception,
}

impl Severity {
    /// Level for a severity-named callee (`info`, `warning`, `error`, `exception`).
    pub fn from_callee(name: &str) -> Option<Self> {
        match name {
            "info" => Some(Severity::Info),
            "warning" => Some(Severity::Warning),
            "error" => Some(Severity::Error),
            "exception" => Some(Severity::Exception),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Exception => "exception",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the message catalog.
///
/// A call site yields one record per message code. `message_text` and
/// `keyword_argument_names` are stored entity-escaped, ready for the
/// catalog; `severity_level` is never escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub message_code: String,
    pub message_text: String,
    /// `info`, `warning`, ..., a level taken from a `log` call, or `(dynamic)`.
    pub severity_level: String,
    /// Space-joined keyword argument names.
    pub keyword_argument_names: String,
    /// Base name of the source file.
    pub source_file: String,
    /// 1-based line of the call.
    pub line_number: usize,
}
