use super::model::{ConferenceSet, StadiumTable};

/// Every conference that appears in `table`, deduplicated and sorted.
///
/// Pass the full table, not a filtered one: the result populates the
/// selectable options.
pub fn distinct_conferences(table: &StadiumTable) -> ConferenceSet {
    table.iter().map(|row| row.conference.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::StadiumRecord;

    fn row(conference: &str) -> StadiumRecord {
        StadiumRecord {
            stadium: format!("{conference} Field"),
            conference: conference.into(),
            capacity: 1000,
            built: 1950,
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    #[test]
    fn sorted_and_unique() {
        let table = StadiumTable::new(vec![row("SEC"), row("ACC"), row("SEC"), row("Big 12")]);
        let conferences: Vec<_> = distinct_conferences(&table).into_iter().collect();
        assert_eq!(conferences, vec!["ACC", "Big 12", "SEC"]);
    }

    #[test]
    fn idempotent() {
        let table = StadiumTable::new(vec![row("MAC"), row("Sun Belt"), row("MAC")]);
        assert_eq!(distinct_conferences(&table), distinct_conferences(&table));
    }

    #[test]
    fn empty_table_has_no_conferences() {
        assert!(distinct_conferences(&StadiumTable::default()).is_empty());
    }
}
