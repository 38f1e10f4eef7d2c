//! College football stadium dashboard: load a stadium table, filter it by
//! conference, capacity and construction year, and describe the result as a
//! map, a pie chart and a bar chart.

pub mod charts;
pub mod color;
pub mod config;
pub mod data;
pub mod view;
