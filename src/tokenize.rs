/// Split a raw domain search list into lower-cased names.
///
/// Any run of whitespace separates names, so both `a.com b.com` and one
/// name per line are accepted.
pub fn split_input(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split_whitespace()
        .map(|s| s.to_string())
        .collect()
}
