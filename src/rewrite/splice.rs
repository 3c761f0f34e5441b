use std::ops::Range;

/// Replaces exactly one byte range of `text`
pub fn splice_range(text: &str, range: Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len() - range.len() + replacement.len());
    out.push_str(&text[..range.start]);
    out.push_str(replacement);
    out.push_str(&text[range.end..]);
    out
}

/// Replaces the first occurrence of `needle`, or returns `None` if there is none
pub fn replace_first_literal(text: &str, needle: &str, replacement: &str) -> Option<String> {
    if needle.is_empty() {
        return None;
    }
    let start = text.find(needle)?;
    Some(splice_range(text, start..start + needle.len(), replacement))
}
