/// Split a comma-separated keyword string into an ordered list.
///
/// Entries are trimmed, empty entries dropped and the list capped at
/// `max` entries. Duplicates are kept.
pub fn process_keywords(csv: &str, max: usize) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .take(max)
        .map(str::to_string)
        .collect()
}
