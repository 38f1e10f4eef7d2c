use super::model::{FilterCriteria, StadiumRecord, StadiumTable};

// ---------------------------------------------------------------------------
// Row predicate
// ---------------------------------------------------------------------------

/// Whether a single stadium passes the current selection.
///
/// A row passes when:
/// * its conference is selected (an empty selection passes nothing)
/// * `capacity > min_capacity`, strictly
/// * `built > min_year`, strictly
pub fn matches(row: &StadiumRecord, criteria: &FilterCriteria) -> bool {
    criteria.conferences.contains(&row.conference)
        && row.capacity > criteria.min_capacity
        && row.built > criteria.min_year
}

/// Return a new table holding the rows that pass, in their original order.
pub fn apply(table: &StadiumTable, criteria: &FilterCriteria) -> StadiumTable {
    let filtered: StadiumTable = table
        .iter()
        .filter(|row| matches(row, criteria))
        .cloned()
        .collect();
    log::debug!(
        "filter kept {} of {} stadiums ({} conferences, capacity > {}, built > {})",
        filtered.len(),
        table.len(),
        criteria.conferences.len(),
        criteria.min_capacity,
        criteria.min_year
    );
    filtered
}

/// Stable ascending sort by conference name.
pub fn sort_by_conference(table: &StadiumTable) -> StadiumTable {
    let mut rows = table.rows().to_vec();
    rows.sort_by(|a, b| a.conference.cmp(&b.conference));
    StadiumTable::new(rows)
}
