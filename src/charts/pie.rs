use serde::Serialize;

use crate::color::{Rgb, conference_colors};
use crate::data::DashboardError;

/// How far the emphasised slice is pulled out, as a fraction of the radius.
pub const EXPLODE_OFFSET: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    /// Share of the whole, in `[0, 1]`.
    pub fraction: f64,
    /// Percentage with two decimals, e.g. `"33.33"`.
    pub percent_label: String,
    /// Set on exactly one slice: the first with the largest count.
    pub explode: bool,
    pub color: Rgb,
}

/// Share of filtered stadiums per selected conference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSpec {
    pub title: String,
    pub explode_offset: f64,
    pub slices: Vec<PieSlice>,
}

impl PieSpec {
    /// Index of the pulled-out slice.
    pub fn exploded_index(&self) -> Option<usize> {
        self.slices.iter().position(|s| s.explode)
    }
}

/// Build the pie from per-conference counts and their labels.
///
/// Fails with [`DashboardError::EmptyInput`] when the counts sum to zero, so
/// callers only ask for a pie once something passed the filter.
pub fn pie_spec(counts: &[usize], labels: &[String]) -> Result<PieSpec, DashboardError> {
    if counts.len() != labels.len() {
        return Err(DashboardError::MismatchedInput {
            chart: "pie chart",
            labels: labels.len(),
            values: counts.len(),
        });
    }
    let total: usize = counts.iter().sum();
    if total == 0 {
        return Err(DashboardError::EmptyInput("pie chart"));
    }

    // First maximum wins on ties.
    let mut emphasised = 0;
    for (i, &count) in counts.iter().enumerate() {
        if count > counts[emphasised] {
            emphasised = i;
        }
    }

    let colors = conference_colors(labels);
    let slices = counts
        .iter()
        .zip(labels)
        .enumerate()
        .map(|(i, (&count, label))| {
            let fraction = count as f64 / total as f64;
            PieSlice {
                label: label.clone(),
                count,
                fraction,
                percent_label: format!("{:.2}", fraction * 100.0),
                explode: i == emphasised,
                color: colors.get(label).copied().unwrap_or([128, 128, 128]),
            }
        })
        .collect();

    Ok(PieSpec {
        title: format!("Conference Quantity: {}", labels.join(", ")),
        explode_offset: EXPLODE_OFFSET,
        slices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn tie_splits_evenly_and_explodes_first() {
        let spec = pie_spec(&[3, 3], &labels(&["A", "B"])).unwrap();
        assert_eq!(spec.slices[0].fraction, 0.5);
        assert_eq!(spec.slices[1].fraction, 0.5);
        assert_eq!(spec.exploded_index(), Some(0));
        assert!(!spec.slices[1].explode);
    }

    #[test]
    fn largest_slice_is_exploded() {
        let spec = pie_spec(&[1, 5, 2, 5], &labels(&["A", "B", "C", "D"])).unwrap();
        assert_eq!(spec.exploded_index(), Some(1));
        assert_eq!(spec.slices.iter().filter(|s| s.explode).count(), 1);
    }

    #[test]
    fn fractions_sum_to_one_and_labels_use_two_decimals() {
        let spec = pie_spec(&[1, 2], &labels(&["ACC", "SEC"])).unwrap();
        let sum: f64 = spec.slices.iter().map(|s| s.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert_eq!(spec.slices[0].percent_label, "33.33");
        assert_eq!(spec.slices[1].percent_label, "66.67");
    }

    #[test]
    fn title_lists_selected_conferences() {
        let spec = pie_spec(&[2, 0], &labels(&["ACC", "SEC"])).unwrap();
        assert_eq!(spec.title, "Conference Quantity: ACC, SEC");
        assert_eq!(spec.slices[1].fraction, 0.0);
    }

    #[test]
    fn zero_total_is_empty_input() {
        assert_eq!(
            pie_spec(&[0, 0], &labels(&["A", "B"])),
            Err(DashboardError::EmptyInput("pie chart"))
        );
        assert_eq!(
            pie_spec(&[], &[]),
            Err(DashboardError::EmptyInput("pie chart"))
        );
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert!(matches!(
            pie_spec(&[1, 2, 3], &labels(&["A"])),
            Err(DashboardError::MismatchedInput { labels: 1, values: 3, .. })
        ));
    }
}
