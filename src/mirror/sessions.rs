// Session enumeration over a resolved catalog.

use super::index::IndexLookup;

/// Session paths in catalog order, skipping sessions without a path.
pub fn enumerate_sessions(lookup: &IndexLookup) -> Vec<String> {
    let Some(catalog) = lookup.catalog() else {
        return Vec::new();
    };

    catalog
        .meetings
        .iter()
        .flat_map(|meeting| meeting.sessions.iter())
        .filter_map(|session| session.valid_path())
        .map(str::to_string)
        .collect()
}
