use serde::Serialize;

use crate::color::Rgb;
use crate::data::aggregate::CapacityMeans;

pub const X_LABEL: &str = "Conference";
pub const Y_LABEL: &str = "Capacity";
/// Rotation of the conference tick labels, in degrees.
pub const TICK_ROTATION_DEG: f32 = 45.0;
const BAR_COLOR: Rgb = [31, 119, 180];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Mean capacity per conference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub tick_rotation_deg: f32,
    pub color: Rgb,
    pub bars: Vec<Bar>,
}

/// One bar per conference, in the mapping's (ascending) key order.
pub fn bar_spec(means: &CapacityMeans) -> BarSpec {
    let bars: Vec<Bar> = means
        .iter()
        .map(|(label, &value)| Bar {
            label: label.clone(),
            value,
        })
        .collect();
    let keys: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();

    BarSpec {
        title: format!("Average Capacity per Conference: {}", keys.join(", ")),
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
        tick_rotation_deg: TICK_ROTATION_DEG,
        color: BAR_COLOR,
        bars,
    }
}
