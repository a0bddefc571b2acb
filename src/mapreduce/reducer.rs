use super::types::FrequencyTable;

/// Merges partial tables into the total by a left fold from the empty table.
pub fn reduce<I>(partials: I) -> FrequencyTable
where
    I: IntoIterator<Item = FrequencyTable>,
{
    partials
        .into_iter()
        .fold(FrequencyTable::new(), FrequencyTable::merge)
}

/// Merges partial tables pairwise, level by level.
///
/// Produces the same table as [`reduce`] since merging is associative and
/// commutative.
pub fn tree_reduce(mut partials: Vec<FrequencyTable>) -> FrequencyTable {
    while partials.len() > 1 {
        let mut level = Vec::with_capacity(partials.len().div_ceil(2));
        let mut tables = partials.into_iter();
        while let Some(left) = tables.next() {
            match tables.next() {
                Some(right) => level.push(left.merge(right)),
                None => level.push(left),
            }
        }
        partials = level;
    }
    partials.pop().unwrap_or_default()
}
