use anyhow::{Result, bail};

use crate::core::data::MessageRecord;

/// Render one record as a `<message>` element.
///
/// Text and keyword names arrive already escaped. Code, level and module are
/// written into attributes as they are, so a value that is not well-formed
/// attribute text is refused instead.
pub fn render_record(record: &MessageRecord) -> Result<String> {
    check_attribute("code", &record.message_code)?;
    check_attribute("level", &record.severity_level)?;
    check_attribute("module", &record.source_file)?;

    Ok(format!(
        "<message code=\"{}\"\n         level=\"{}\"\n         module=\"{}\" line=\"{}\"\n         args=\"{}\">\n{}\n</message>",
        record.message_code,
        record.severity_level,
        record.source_file,
        record.line_number,
        record.keyword_argument_names,
        record.message_text
    ))
}

fn check_attribute(attribute: &str, value: &str) -> Result<()> {
    if let Some(c) = value
        .chars()
        .find(|c| matches!(*c, '"' | '<' | '&') || c.is_control())
    {
        bail!(
            "cannot write {:?} into the {} attribute: contains {:?}",
            value,
            attribute,
            c
        );
    }
    Ok(())
}
