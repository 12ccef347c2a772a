use std::collections::HashSet;

use crate::model::Identified;

/// Merges `candidates` into `collection`, skipping anything already present.
///
/// Absent candidates and candidates without an identifier are ignored. The
/// first candidate carrying a given identifier wins. Accepted candidates come
/// first, in input order, followed by the untouched `collection`. When there
/// is nothing to add the original vector is handed back as is.
pub fn add_to_collection_if_missing<T, I>(collection: Vec<T>, candidates: I) -> Vec<T>
where
    T: Identified,
    I: IntoIterator<Item = Option<T>>,
{
    let candidates: Vec<T> = candidates.into_iter().flatten().collect();
    if candidates.is_empty() {
        return collection;
    }

    let mut seen: HashSet<String> = collection
        .iter()
        .filter_map(|item| item.id().map(str::to_owned))
        .collect();

    let mut merged: Vec<T> = candidates
        .into_iter()
        .filter(|candidate| match candidate.id() {
            Some(id) => seen.insert(id.to_owned()),
            None => false,
        })
        .collect();

    merged.extend(collection);
    merged
}
