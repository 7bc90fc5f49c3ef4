use similar::{ChangeTag, TextDiff};
use std::path::Path;

/// Render a unified diff of `before` against `after`, labelled with `path`.
/// Returns an empty string when the texts are equal.
pub fn unified_diff(path: &Path, before: &str, after: &str) -> String {
    if before == after {
        return String::new();
    }

    let old_header = format!("a/{}", path.display());
    let new_header = format!("b/{}", path.display());

    TextDiff::from_lines(before, after)
        .unified_diff()
        .context_radius(2)
        .header(&old_header, &new_header)
        .to_string()
}

/// Number of lines removed or inserted between the two texts
pub fn changed_lines(before: &str, after: &str) -> usize {
    TextDiff::from_lines(before, after)
        .iter_all_changes()
        .filter(|c| c.tag() != ChangeTag::Equal)
        .count()
}
