//! Text helpers shared by the dataset and the writers.

use unicode_width::UnicodeWidthStr;

/// Terminal display width of a string.
///
/// Wide characters count as two columns, so `"日本"` is 4 wide.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Right-pads `s` with spaces to `width` display columns.
///
/// Strings already at or past `width` are returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    format!("{s}{}", " ".repeat(width - current))
}

/// Escapes text for use in HTML element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Escapes LaTeX special characters in a single pass.
pub fn escape_latex(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' | '%' | '$' | '#' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '\\' => out.push_str("\\textbackslash{}"),
            other => out.push(other),
        }
    }
    out
}

/// Turns a header key or a configured row/parent element name into a
/// usable XML element name.
///
/// Keys come from user data and routinely hold spaces or start with a digit.
/// Each offending character becomes `_`. A leading digit is kept behind an
/// extra `_`, so `"1st place"` is written as `<_1st_place>`.
pub fn sanitize_xml_name(name: &str) -> String {
    if name.is_empty() {
        return "_".to_string();
    }
    let mut result = String::with_capacity(name.len() + 1);
    for (i, c) in name.chars().enumerate() {
        if i == 0 {
            if c.is_alphabetic() || c == '_' {
                result.push(c);
            } else {
                result.push('_');
                if c.is_alphanumeric() {
                    result.push(c);
                }
            }
        } else if c.is_alphanumeric() || c == '_' || c == '-' || c == '.' {
            result.push(c);
        } else {
            result.push('_');
        }
    }
    result
}
