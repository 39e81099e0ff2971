//! Text helpers used when turning resource values into doc comments.

/// Default length limit for doc comment summaries.
pub const SUMMARY_MAX_LENGTH: usize = 100;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

fn is_whitespace(c: char) -> bool {
    c == ' ' || ('\t'..='\r').contains(&c)
}

/// Replaces every run of ASCII whitespace with a single space.
///
/// Leading and trailing runs collapse too but are not removed.
pub fn collapse_whitespace(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_whitespace = false;
    for c in value.chars() {
        if is_whitespace(c) {
            if !previous_whitespace {
                out.push(' ');
            }
            previous_whitespace = true;
        } else {
            out.push(c);
            previous_whitespace = false;
        }
    }
    out
}

/// Trims `value` and hard-cuts it to `max_length` characters, appending
/// `end_symbol` when something was cut.
pub fn cut_short(value: &str, max_length: usize, end_symbol: &str) -> String {
    let trimmed = value.trim();
    if trimmed.chars().count() <= max_length {
        return trimmed.to_string();
    }
    let head: String = trimmed.chars().take(max_length).collect();
    let mut out = head.trim().to_string();
    out.push_str(end_symbol);
    out
}

/// Collapses whitespace and shortens the result to at most `max_length`
/// characters, breaking between words.
///
/// Words are kept while the text so far, a space and the next word still fit.
/// Values without any space fall back to [`cut_short`].
pub fn cut_short_by_words(value: &str, max_length: usize, end_symbol: &str) -> String {
    let collapsed = collapse_whitespace(value);
    let processed = collapsed.trim();

    if processed.chars().count() <= max_length {
        return processed.to_string();
    }
    if !processed.contains(' ') {
        return cut_short(processed, max_length, end_symbol);
    }

    let mut out = String::new();
    let mut length = 0;
    for word in processed.split(' ').filter(|w| !w.is_empty()) {
        let word_length = word.chars().count();
        // The probe always counts the separating space, even before the first word.
        if length + 1 + word_length > max_length {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
            length += 1;
        }
        out.push_str(word);
        length += word_length;
    }
    out.push_str(end_symbol);
    out
}

/// Escapes `"`, `&`, `<` and `>` with their named character references.
pub fn xml_encode(value: &str) -> String {
    if !value.contains(['"', '&', '<', '>']) {
        return value.to_string();
    }
    let mut out = String::with_capacity(value.len() + 16);
    for c in value.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

/// Builds the doc comment text for a resource value: collapsed, shortened to
/// [`SUMMARY_MAX_LENGTH`] and XML-escaped.
pub fn summarize(value: &str) -> String {
    xml_encode(&cut_short_by_words(value, SUMMARY_MAX_LENGTH, ELLIPSIS))
}
