use std::collections::BTreeMap;

use super::model::StadiumTable;

/// Conference → capacities of its stadiums, in row order.
pub type CapacityGroups = BTreeMap<String, Vec<u32>>;

/// Conference → mean capacity.
pub type CapacityMeans = BTreeMap<String, f64>;

/// Row count per conference, positionally aligned with `conferences`.
/// Conferences absent from `table` count as 0.
pub fn count_by_conference(conferences: &[String], table: &StadiumTable) -> Vec<usize> {
    conferences
        .iter()
        .map(|conference| {
            table
                .iter()
                .filter(|row| &row.conference == conference)
                .count()
        })
        .collect()
}

/// Group capacities by conference. Only conferences present in `table`
/// become keys.
pub fn group_capacities(table: &StadiumTable) -> CapacityGroups {
    let mut groups = CapacityGroups::new();
    for row in table {
        groups
            .entry(row.conference.clone())
            .or_default()
            .push(row.capacity);
    }
    groups
}

/// Arithmetic mean of each group. Empty groups have no mean and are skipped.
pub fn mean_capacity(groups: &CapacityGroups) -> CapacityMeans {
    groups
        .iter()
        .filter(|(_, capacities)| !capacities.is_empty())
        .map(|(conference, capacities)| {
            let total: u64 = capacities.iter().map(|&c| c as u64).sum();
            (conference.clone(), total as f64 / capacities.len() as f64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::StadiumRecord;

    fn row(conference: &str, capacity: u32) -> StadiumRecord {
        StadiumRecord {
            stadium: format!("{conference} {capacity}"),
            conference: conference.into(),
            capacity,
            built: 2000,
            latitude: 35.0,
            longitude: -80.0,
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn counts_align_with_requested_order() {
        let table = StadiumTable::new(vec![row("A", 100), row("A", 200), row("C", 10)]);
        assert_eq!(
            count_by_conference(&names(&["C", "A", "B"]), &table),
            vec![1, 2, 0]
        );
    }

    #[test]
    fn count_sum_matches_rows_in_requested_conferences() {
        let table = StadiumTable::new(vec![
            row("A", 1),
            row("B", 2),
            row("C", 3),
            row("A", 4),
            row("D", 5),
        ]);
        let wanted = names(&["A", "D"]);
        let total: usize = count_by_conference(&wanted, &table).iter().sum();
        let expected = table
            .iter()
            .filter(|r| wanted.contains(&r.conference))
            .count();
        assert_eq!(total, expected);
    }

    #[test]
    fn groups_keep_row_order_and_only_present_keys() {
        let table = StadiumTable::new(vec![row("A", 300), row("B", 5), row("A", 100)]);
        let groups = group_capacities(&table);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["A"], vec![300, 100]);
        assert_eq!(groups["B"], vec![5]);
    }

    #[test]
    fn mean_lies_between_min_and_max() {
        let table = StadiumTable::new(vec![
            row("A", 25_000),
            row("A", 107_601),
            row("A", 61_200),
            row("B", 30_000),
        ]);
        let groups = group_capacities(&table);
        let means = mean_capacity(&groups);
        for (conference, capacities) in &groups {
            let mean = means[conference];
            let min = *capacities.iter().min().unwrap() as f64;
            let max = *capacities.iter().max().unwrap() as f64;
            assert!(min <= mean && mean <= max);
        }
        assert!((means["A"] - 193_801.0 / 3.0).abs() < 1e-9);
        assert_eq!(means["B"], 30_000.0);
    }

    #[test]
    fn empty_groups_are_excluded() {
        let mut groups = CapacityGroups::new();
        groups.insert("A".into(), vec![]);
        groups.insert("B".into(), vec![10, 20]);
        let means = mean_capacity(&groups);
        assert!(!means.contains_key("A"));
        assert_eq!(means["B"], 15.0);
    }
}
