use std::env;

/// Environment variables consulted for the UI language, in precedence order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Returns the preferred UI language derived from the process environment.
///
/// Reads the POSIX locale variables in precedence order and normalizes the
/// first usable value to a BCP 47-style tag (`en_US.UTF-8` becomes `en-US`).
/// Returns `None` when no variable is set or the locale carries no language
/// information (`C`, `POSIX`).
pub fn system_locale() -> Option<String> {
    LOCALE_VARS
        .iter()
        .find_map(|var| env::var(var).ok().and_then(|raw| normalize(&raw)))
}

/// Strips the codeset/modifier suffix and swaps the territory separator.
pub(super) fn normalize(raw: &str) -> Option<String> {
    let base = raw.split(['.', '@']).next().unwrap_or_default().trim();

    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }

    Some(base.replace('_', "-"))
}
