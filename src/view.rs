use anyhow::Context;
use serde::Serialize;

use crate::charts::{BarSpec, MapSpec, PieSpec, bar_spec, map_spec, pie_spec};
use crate::data::DashboardError;
use crate::data::aggregate::{count_by_conference, group_capacities, mean_capacity};
use crate::data::filter;
use crate::data::model::{FilterCriteria, StadiumTable};

/// Fewer filtered rows than this and nothing is drawn.
pub const MIN_ROWS_TO_RENDER: usize = 2;

/// Everything the central panel draws for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    #[serde(skip)]
    pub filtered: StadiumTable,
    pub row_count: usize,
    pub map: MapSpec,
    pub pie: PieSpec,
    pub bar: BarSpec,
}

impl DashboardView {
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("serialising chart specs")
    }
}

/// Run one full recompute over the already-loaded table.
///
/// Returns `Ok(None)` when at most one stadium passes the filter, which is
/// also what keeps the pie away from an all-zero count.
pub fn build_view(
    table: &StadiumTable,
    criteria: &FilterCriteria,
) -> Result<Option<DashboardView>, DashboardError> {
    let filtered = filter::sort_by_conference(&filter::apply(table, criteria));
    if filtered.len() < MIN_ROWS_TO_RENDER {
        log::debug!("{} stadiums pass, nothing to draw", filtered.len());
        return Ok(None);
    }

    let labels = criteria.conference_list();
    let counts = count_by_conference(&labels, &filtered);
    let means = mean_capacity(&group_capacities(&filtered));

    let view = DashboardView {
        row_count: filtered.len(),
        map: map_spec(&filtered)?,
        pie: pie_spec(&counts, &labels)?,
        bar: bar_spec(&means),
        filtered,
    };
    Ok(Some(view))
}
