//! The fixed table of recognized diagnostic callees.
//!
//! Four severity-named functions carry their level in their name; the
//! generic `log` function takes the level as its first positional argument,
//! which pushes the message code one slot to the right.

use enum_dispatch::enum_dispatch;

use crate::core::data::Severity;
use crate::core::extract::call_site::CallSite;
use crate::core::extract::value_source::resolve_severity_level;

/// Callee name of the generic logging function.
pub const GENERIC_LOG_CALLEE: &str = "log";

#[enum_dispatch]
pub trait LevelHandler {
    /// Severity level reported for the call.
    fn level(&self, site: &CallSite) -> String;

    /// Positional index of the message code argument; the message text
    /// follows at `arg_offset() + 1`.
    fn arg_offset(&self) -> usize;
}

/// `info(...)`, `warning(...)`, `error(...)`, `exception(...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLevel(pub Severity);

impl LevelHandler for FixedLevel {
    fn level(&self, _site: &CallSite) -> String {
        self.0.to_string()
    }

    fn arg_offset(&self) -> usize {
        0
    }
}

/// `log(level, code, text, ...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericLog;

impl LevelHandler for GenericLog {
    fn level(&self, site: &CallSite) -> String {
        site.args
            .first()
            .map(resolve_severity_level)
            .unwrap_or_default()
    }

    fn arg_offset(&self) -> usize {
        1
    }
}

#[enum_dispatch(LevelHandler)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallHandler {
    FixedLevel,
    GenericLog,
}

impl CallHandler {
    /// Handler for a callee name, or `None` when the callee is not a
    /// diagnostic function.
    pub fn for_callee(name: &str) -> Option<Self> {
        if name == GENERIC_LOG_CALLEE {
            return Some(GenericLog.into());
        }
        Severity::from_callee(name).map(|severity| FixedLevel(severity).into())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::data::Severity;
    use crate::core::extract::expr::Expr;
    use crate::core::extract::handler::*;

    fn site(args: Vec<Expr>) -> CallSite {
        CallSite {
            callee: "log".to_string(),
            args,
            keywords: Vec::new(),
            line: 1,
        }
    }

    #[test]
    fn test_for_callee() {
        assert_eq!(
            CallHandler::for_callee("error"),
            Some(CallHandler::FixedLevel(FixedLevel(Severity::Error)))
        );
        assert_eq!(
            CallHandler::for_callee("log"),
            Some(CallHandler::GenericLog(GenericLog))
        );
        assert_eq!(CallHandler::for_callee("debug"), None);
        assert_eq!(CallHandler::for_callee("_"), None);
    }

    #[test]
    fn test_fixed_level() {
        let handler = CallHandler::for_callee("exception").unwrap();
        assert_eq!(handler.arg_offset(), 0);
        assert_eq!(handler.level(&site(Vec::new())), "exception");
    }

    #[test]
    fn test_generic_log_level_from_first_argument() {
        let handler = CallHandler::for_callee("log").unwrap();
        assert_eq!(handler.arg_offset(), 1);
        assert_eq!(
            handler.level(&site(vec![Expr::Str("WARNING".to_string())])),
            "warning"
        );
        assert_eq!(
            handler.level(&site(vec![Expr::Name("level".to_string())])),
            "(dynamic)"
        );
    }
}
