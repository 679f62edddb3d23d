//! Sanitization of untrusted console text for display surfaces
//!
//! Anything a visitor types (the `echo` payload, the echoed prompt, an
//! unknown command) ends up in a display surface. HTML surfaces need markup
//! characters escaped; terminal surfaces need escape sequences removed so the
//! text cannot move the cursor, clear the screen or recolor the console.

/// Escape the five markup-significant characters for HTML text and attributes
///
/// ```
/// use redshift_site::utils::escape_html;
///
/// assert_eq!(escape_html("<b>\"hi\" & 'bye'</b>"), "&lt;b&gt;&quot;hi&quot; &amp; &#39;bye&#39;&lt;/b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Remove ANSI CSI sequences and control characters before terminal display
///
/// Tabs are kept; newlines and carriage returns are dropped because console
/// input is always a single line.
///
/// ```
/// use redshift_site::utils::strip_control_sequences;
///
/// assert_eq!(strip_control_sequences("\x1b[31mred\x1b[0m"), "red");
/// ```
pub fn strip_control_sequences(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // CSI: ESC [ params final-letter
            if chars.peek() == Some(&'[') {
                chars.next();
                for next in chars.by_ref() {
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }

        if ch.is_control() && ch != '\t' {
            continue;
        }

        result.push(ch);
    }

    result
}
