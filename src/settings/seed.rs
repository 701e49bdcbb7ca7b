/// Coerces raw seed input into an optional seed value.
///
/// The seed field is entered as free text in the UI, so this is the one
/// place where input is normalized instead of trusted: an empty string or
/// the sentinel `-1` means "let the service pick a seed", and anything that
/// fails to parse as an integer collapses to the same absent value rather
/// than producing an error.
pub fn coerce_seed(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();

    if trimmed.is_empty() || trimmed == "-1" {
        return None;
    }

    trimmed.parse::<i64>().ok()
}
