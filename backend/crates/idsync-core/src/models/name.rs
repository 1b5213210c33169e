/// Join optional first/last name fragments into a display name.
///
/// Absent fragments count as empty strings, the two are joined with a single
/// space and the result is trimmed, so `(None, None)` yields `""` and never
/// anything nullable. Whitespace inside a fragment is kept as sent.
pub fn normalize_name(first: Option<&str>, last: Option<&str>) -> String {
    format!("{} {}", first.unwrap_or_default(), last.unwrap_or_default())
        .trim()
        .to_string()
}
