//! Catalog record building.
//!
//! Turns one classified call site into zero or more [`MessageRecord`]s:
//! one per message code, all sharing the call's text, level, keyword names
//! and provenance.

use log::debug;

use crate::core::data::MessageRecord;
use crate::core::extract::call_site::ClassifiedCall;
use crate::core::extract::handler::LevelHandler;
use crate::core::extract::value_source::{
    ArgumentValue, resolve_message_codes, resolve_message_text,
};
use crate::utils::entity_encode;

/// Keyword holding the object under validation. Never reported.
pub const MODEL_OBJECT_KEYWORD: &str = "modelObject";

/// Keyword that overrides the positional message code(s).
pub const MESSAGE_CODES_KEYWORD: &str = "messageCodes";

/// Build the records of one call site. `module` is the base name of the
/// file the call lives in.
pub fn build_records(call: &ClassifiedCall, module: &str) -> Vec<MessageRecord> {
    let site = &call.site;
    let offset = call.handler.arg_offset();

    let (Some(code_arg), Some(text_arg)) = (site.args.get(offset), site.args.get(offset + 1))
    else {
        debug!(
            "{}:{}: {}() has {} positional arguments, skipped",
            module,
            site.line,
            site.callee,
            site.args.len()
        );
        return Vec::new();
    };

    let Some(text) = resolve_message_text(text_arg) else {
        debug!(
            "{}:{}: unrecognized message text shape, skipped",
            module, site.line
        );
        return Vec::new();
    };
    if text.is_empty() {
        debug!("{}:{}: empty message text, skipped", module, site.line);
        return Vec::new();
    }

    let level = call.handler.level(site);
    let mut codes = resolve_message_codes(code_arg);
    let mut keywords: Vec<&str> = Vec::new();

    for keyword in &site.keywords {
        match keyword.name.as_str() {
            MODEL_OBJECT_KEYWORD => {}
            MESSAGE_CODES_KEYWORD => {
                let value = ArgumentValue::classify(&keyword.value);
                if !value.is_dynamic() {
                    codes = value.into_message_codes();
                }
            }
            name => keywords.push(name),
        }
    }

    let message_text = entity_encode(&text);
    let keyword_argument_names = entity_encode(&keywords.join(" "));

    codes
        .into_iter()
        .map(|message_code| MessageRecord {
            message_code,
            message_text: message_text.clone(),
            severity_level: level.clone(),
            keyword_argument_names: keyword_argument_names.clone(),
            source_file: module.to_string(),
            line_number: site.line,
        })
        .collect()
}
