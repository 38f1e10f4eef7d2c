use serde::Serialize;

use crate::color::Rgb;
use crate::data::DashboardError;
use crate::data::model::StadiumTable;

pub const MAP_STYLE: &str = "mapbox://styles/mapbox/light-v9";
pub const ZOOM: f64 = 3.5;
/// Point radius in metres.
pub const POINT_RADIUS_M: f64 = 30_000.0;
pub const POINT_COLOR: Rgb = [100, 200, 255];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub stadium: String,
    pub conference: String,
    pub capacity: u32,
    pub longitude: f64,
    pub latitude: f64,
}

impl MapPoint {
    /// `[longitude, latitude]`, x before y.
    pub fn position(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    pub fn tooltip(&self) -> String {
        format!("Stadium: {}", self.stadium)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipStyle {
    pub background: String,
    pub text: String,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            background: "orange".into(),
            text: "white".into(),
        }
    }
}

/// One point per stadium, centred on the mean position of the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSpec {
    pub style: String,
    pub view: ViewState,
    pub radius_m: f64,
    pub color: Rgb,
    pub tooltip: TooltipStyle,
    pub points: Vec<MapPoint>,
}

pub fn map_spec(table: &StadiumTable) -> Result<MapSpec, DashboardError> {
    if table.is_empty() {
        return Err(DashboardError::EmptyInput("map"));
    }
    let n = table.len() as f64;
    let latitude = table.iter().map(|r| r.latitude).sum::<f64>() / n;
    let longitude = table.iter().map(|r| r.longitude).sum::<f64>() / n;

    let points = table
        .iter()
        .map(|r| MapPoint {
            stadium: r.stadium.clone(),
            conference: r.conference.clone(),
            capacity: r.capacity,
            longitude: r.longitude,
            latitude: r.latitude,
        })
        .collect();

    Ok(MapSpec {
        style: MAP_STYLE.to_string(),
        view: ViewState {
            latitude,
            longitude,
            zoom: ZOOM,
        },
        radius_m: POINT_RADIUS_M,
        color: POINT_COLOR,
        tooltip: TooltipStyle::default(),
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::StadiumRecord;

    fn row(stadium: &str, latitude: f64, longitude: f64) -> StadiumRecord {
        StadiumRecord {
            stadium: stadium.into(),
            conference: "Big Ten".into(),
            capacity: 100_000,
            built: 1927,
            latitude,
            longitude,
        }
    }

    #[test]
    fn centred_on_mean_position() {
        let table = StadiumTable::new(vec![row("a", 40.0, -80.0), row("b", 42.0, -90.0)]);
        let spec = map_spec(&table).unwrap();
        assert_eq!(spec.view.latitude, 41.0);
        assert_eq!(spec.view.longitude, -85.0);
        assert_eq!(spec.view.zoom, 3.5);
    }

    #[test]
    fn one_point_per_stadium_with_tooltip() {
        let table = StadiumTable::new(vec![row("Michigan Stadium", 42.2658, -83.7487)]);
        let spec = map_spec(&table).unwrap();
        assert_eq!(spec.points.len(), 1);
        assert_eq!(spec.points[0].position(), [-83.7487, 42.2658]);
        assert_eq!(spec.points[0].tooltip(), "Stadium: Michigan Stadium");
        assert_eq!(spec.radius_m, 30_000.0);
        assert_eq!(spec.color, [100, 200, 255]);
    }

    #[test]
    fn empty_table_is_empty_input() {
        assert_eq!(
            map_spec(&StadiumTable::default()),
            Err(DashboardError::EmptyInput("map"))
        );
    }
}
