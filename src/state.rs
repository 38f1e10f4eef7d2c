use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use stadium_dashboard::config::DashboardConfig;
use stadium_dashboard::data::catalog::distinct_conferences;
use stadium_dashboard::data::loader::load_file;
use stadium_dashboard::data::model::{ConferenceSet, FilterCriteria, StadiumTable};
use stadium_dashboard::view::{DashboardView, build_view};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Where the current table came from.
    pub source_path: Option<PathBuf>,

    /// Loaded table (None until a file loads successfully).
    pub table: Option<StadiumTable>,

    /// Options for the conference multi-select, from the full table.
    pub conferences: ConferenceSet,

    /// Current sidebar selection.
    pub criteria: FilterCriteria,

    /// Charts for the current selection; None when fewer than two stadiums pass.
    pub view: Option<DashboardView>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            source_path: None,
            table: None,
            conferences: ConferenceSet::new(),
            criteria: FilterCriteria::default(),
            view: None,
            status_message: None,
        }
    }

    /// Load a stadium file and make it the current table.
    pub fn load(&mut self, path: &Path) {
        match load_file(path) {
            Ok(table) => self.set_table(table, path.to_path_buf()),
            Err(e) => {
                log::error!("Failed to load file: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Ingest a newly loaded table and reset the selection.
    pub fn set_table(&mut self, table: StadiumTable, path: PathBuf) {
        self.conferences = distinct_conferences(&table);
        log::info!(
            "{} stadiums across {} conferences",
            table.len(),
            self.conferences.len()
        );
        self.criteria = FilterCriteria::default();
        self.table = Some(table);
        self.source_path = Some(path);
        self.status_message = None;
        self.refresh();
    }

    /// Recompute the charts after a control change.
    pub fn refresh(&mut self) {
        let Some(table) = &self.table else {
            self.view = None;
            return;
        };
        self.criteria.clamp_to_bounds();
        match build_view(table, &self.criteria) {
            Ok(view) => self.view = view,
            Err(e) => {
                log::error!("Failed to build charts: {e}");
                self.status_message = Some(format!("Error: {e}"));
                self.view = None;
            }
        }
    }

    /// Toggle a single conference in the multi-select.
    pub fn toggle_conference(&mut self, conference: &str) {
        if !self.criteria.conferences.remove(conference) {
            self.criteria.conferences.insert(conference.to_string());
        }
        self.refresh();
    }

    /// Select every conference.
    pub fn select_all(&mut self) {
        self.criteria.conferences = self.conferences.clone();
        self.refresh();
    }

    /// Deselect every conference.
    pub fn select_none(&mut self) {
        self.criteria.conferences.clear();
        self.refresh();
    }

    /// Number of stadiums that pass the current selection.
    pub fn visible_count(&self) -> usize {
        self.view.as_ref().map_or(0, |v| v.row_count)
    }

    /// Write the current chart specs as JSON.
    pub fn export_view(&self, path: &Path) -> Result<()> {
        let view = self
            .view
            .as_ref()
            .context("nothing to export: fewer than two stadiums match")?;
        std::fs::write(path, view.to_json()?)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("Exported chart specs to {}", path.display());
        Ok(())
    }
}
