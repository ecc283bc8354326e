//! Decoding of Python string literal tokens.
//!
//! tree-sitter hands back the literal exactly as written (`r"..."`,
//! `'''...'''`, `b'\x00'`). The extractor needs the runtime value, so the
//! prefix is split off, the quotes stripped and escape sequences decoded the
//! way the interpreter would.

/// Flags carried by a string literal prefix (`r`, `b`, `f`, `u`, in any case
/// and combination).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringPrefix {
    pub raw: bool,
    pub bytes: bool,
    pub formatted: bool,
}

impl StringPrefix {
    fn parse(prefix: &str) -> Option<Self> {
        let mut flags = StringPrefix::default();
        for c in prefix.chars() {
            match c.to_ascii_lowercase() {
                'r' => flags.raw = true,
                'b' => flags.bytes = true,
                'f' => flags.formatted = true,
                'u' => {}
                _ => return None,
            }
        }
        Some(flags)
    }
}

/// A string literal token split into its prefix and the text between the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral<'a> {
    pub prefix: StringPrefix,
    pub body: &'a str,
}

impl<'a> StringLiteral<'a> {
    /// Split a literal token such as `rb'''x'''` into prefix flags and body.
    ///
    /// Returns `None` for text that is not a complete quoted literal.
    pub fn split(token: &'a str) -> Option<Self> {
        let quote_at = token.find(['\'', '"'])?;
        let (prefix, quoted) = token.split_at(quote_at);
        let prefix = StringPrefix::parse(prefix)?;

        let quote = &quoted[..1];
        let triple = quote.repeat(3);
        let width = if quoted.len() >= 6 && quoted.starts_with(&triple) && quoted.ends_with(&triple)
        {
            3
        } else {
            1
        };

        if quoted.len() < width * 2 || !quoted.ends_with(quote) {
            return None;
        }

        Some(StringLiteral {
            prefix,
            body: &quoted[width..quoted.len() - width],
        })
    }

    /// Runtime value of the literal body (escapes decoded unless raw).
    pub fn value(&self) -> String {
        if self.prefix.raw {
            self.body.to_string()
        } else {
            decode_escapes(self.body)
        }
    }
}

/// Decode a literal fragment of an f-string: escapes as for a plain string,
/// then `{{` and `}}` collapse to single braces.
pub fn decode_fstring_fragment(fragment: &str, raw: bool) -> String {
    let text = if raw {
        fragment.to_string()
    } else {
        decode_escapes(fragment)
    };
    text.replace("{{", "{").replace("}}", "}")
}

/// Decode Python backslash escapes.
///
/// Unknown escapes keep their backslash, as the interpreter does. `\N{...}`
/// is kept verbatim since resolving character names needs the Unicode name
/// table.
pub fn decode_escapes(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(next) = chars.next() else {
            out.push('\\');
            break;
        };
        match next {
            '\n' => {}
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0C}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{0B}'),
            '0'..='7' => {
                let mut value = next.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                push_code_point(&mut out, value, &format!("\\{:o}", value));
            }
            'x' => decode_hex(&mut chars, &mut out, 'x', 2),
            'u' => decode_hex(&mut chars, &mut out, 'u', 4),
            'U' => decode_hex(&mut chars, &mut out, 'U', 8),
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }

    out
}

fn decode_hex(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    out: &mut String,
    marker: char,
    width: usize,
) {
    let mut digits = String::with_capacity(width);
    while digits.len() < width {
        match chars.peek() {
            Some(d) if d.is_ascii_hexdigit() => {
                digits.push(*d);
                chars.next();
            }
            _ => break,
        }
    }

    let original = format!("\\{}{}", marker, digits);
    if digits.len() != width {
        out.push_str(&original);
        return;
    }
    match u32::from_str_radix(&digits, 16) {
        Ok(value) => push_code_point(out, value, &original),
        Err(_) => out.push_str(&original),
    }
}

fn push_code_point(out: &mut String, value: u32, original: &str) {
    match char::from_u32(value) {
        Some(c) => out.push(c),
        None => out.push_str(original),
    }
}
