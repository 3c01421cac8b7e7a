/// Custom URL fragment shown under the map preview: whitespace runs become a
/// single dash and everything is lowercased.
pub fn couple_slug(names: &str) -> String {
    names
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}
