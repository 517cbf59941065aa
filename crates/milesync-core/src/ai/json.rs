//! Recovering a JSON payload from free-form model output.
//!
//! Models asked for "only JSON" still wrap it in markdown fences or surround
//! it with prose. [`extract_json`] looks inside the first fence when present,
//! then falls back to the whole text, and returns the first balanced
//! top-level `{...}` or `[...]` span.

/// Return the first balanced JSON object or array in `text`, if any.
///
/// Brackets inside string literals (including escaped quotes) are ignored
/// while matching.
pub fn extract_json(text: &str) -> Option<&str> {
    let text = text.trim();
    code_fence_body(text)
        .and_then(first_span)
        .or_else(|| first_span(text))
}

fn first_span(text: &str) -> Option<&str> {
    let start = text.find(['{', '['])?;
    let end = matching_close(&text[start..])?;
    Some(&text[start..start + end])
}

/// Contents of the first markdown code fence, if `text` has one.
fn code_fence_body(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let after_open = &text[open + 3..];
    // Skip the info string ("json", "JSON", ...), which may share a line
    // with the payload.
    let tag_len = after_open
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(after_open.len());
    let content = after_open[tag_len..].trim_start();
    match content.find("```") {
        Some(close) => Some(&content[..close]),
        None => Some(content),
    }
}

/// Byte length of the balanced span that starts at `text[0]`.
fn matching_close(text: &str) -> Option<usize> {
    let mut stack: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => stack.push('}'),
            '[' => stack.push(']'),
            '}' | ']' => {
                if stack.pop() != Some(c) {
                    return None;
                }
                if stack.is_empty() {
                    return Some(i + c.len_utf8());
                }
            }
            _ => {}
        }
    }

    None
}
