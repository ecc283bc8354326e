//! Common utility functions shared across the codebase.

/// Escape `&`, `<` and `"` so the text can sit in XML content or a
/// double-quoted attribute.
///
/// `>` and `'` are left alone.
///
/// # Examples
///
/// ```
/// use msgcat::utils::entity_encode;
///
/// assert_eq!(entity_encode("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
/// assert_eq!(entity_encode("x > y"), "x > y");
/// ```
pub fn entity_encode(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
}
