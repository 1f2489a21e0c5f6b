/// Split a comma-separated phone list into trimmed, non-empty numbers.
pub fn parse_phones(phones: &str) -> Vec<String> {
    phones
        .split(',')
        .map(str::trim)
        .filter(|phone| !phone.is_empty())
        .map(str::to_string)
        .collect()
}
