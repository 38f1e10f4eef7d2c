use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::{MAX_CAPACITY, MAX_YEAR, MIN_CAPACITY, MIN_YEAR};

// ---------------------------------------------------------------------------
// StadiumRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single stadium row. Extra columns in the source (city, state, team, …)
/// are ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StadiumRecord {
    pub stadium: String,
    pub conference: String,
    /// Seating capacity, always positive.
    pub capacity: u32,
    /// Year of construction.
    pub built: i32,
    pub latitude: f64,
    pub longitude: f64,
}

// ---------------------------------------------------------------------------
// StadiumTable – the loaded (or filtered) rows
// ---------------------------------------------------------------------------

/// Ordered rows. Filtering and sorting always produce a new table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StadiumTable {
    rows: Vec<StadiumRecord>,
}

impl StadiumTable {
    pub fn new(rows: Vec<StadiumRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[StadiumRecord] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StadiumRecord> {
        self.rows.iter()
    }

    /// Number of stadiums.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<StadiumRecord> for StadiumTable {
    fn from_iter<I: IntoIterator<Item = StadiumRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a StadiumTable {
    type Item = &'a StadiumRecord;
    type IntoIter = std::slice::Iter<'a, StadiumRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Distinct conference names, sorted ascending.
pub type ConferenceSet = BTreeSet<String>;

// ---------------------------------------------------------------------------
// FilterCriteria – the user's current selection
// ---------------------------------------------------------------------------

/// What the sidebar controls currently select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Conferences to keep. Empty means nothing is shown.
    pub conferences: BTreeSet<String>,
    /// Rows must have `capacity > min_capacity`.
    pub min_capacity: u32,
    /// Rows must have `built > min_year`.
    pub min_year: i32,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            conferences: BTreeSet::new(),
            min_capacity: MIN_CAPACITY,
            min_year: MIN_YEAR,
        }
    }
}

impl FilterCriteria {
    pub fn new<I, S>(conferences: I, min_capacity: u32, min_year: i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            conferences: conferences.into_iter().map(Into::into).collect(),
            min_capacity,
            min_year,
        }
    }

    /// Keep the numeric thresholds inside the slider bounds.
    pub fn clamp_to_bounds(&mut self) {
        self.min_capacity = self.min_capacity.clamp(MIN_CAPACITY, MAX_CAPACITY);
        self.min_year = self.min_year.clamp(MIN_YEAR, MAX_YEAR);
    }

    /// Selected conferences in display order.
    pub fn conference_list(&self) -> Vec<String> {
        self.conferences.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_criteria_sit_at_slider_minimums() {
        let criteria = FilterCriteria::default();
        assert!(criteria.conferences.is_empty());
        assert_eq!(criteria.min_capacity, 220);
        assert_eq!(criteria.min_year, 1895);
    }

    #[test]
    fn clamp_pulls_thresholds_into_range() {
        let mut criteria = FilterCriteria::new(["SEC"], 5, 3000);
        criteria.clamp_to_bounds();
        assert_eq!(criteria.min_capacity, 220);
        assert_eq!(criteria.min_year, 2014);

        let mut criteria = FilterCriteria::new(["SEC"], 200_000, 1000);
        criteria.clamp_to_bounds();
        assert_eq!(criteria.min_capacity, 107_601);
        assert_eq!(criteria.min_year, 1895);
    }

    #[test]
    fn conference_list_is_sorted() {
        let criteria = FilterCriteria::new(["SEC", "ACC", "Big Ten"], 220, 1895);
        assert_eq!(criteria.conference_list(), vec!["ACC", "Big Ten", "SEC"]);
    }
}
