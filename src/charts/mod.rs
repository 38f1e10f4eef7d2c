/// Chart specifications: plain data describing what to draw, built from
/// the filtered table and its aggregates. Rendering lives in the binary.
pub mod bar;
pub mod map;
pub mod pie;

pub use bar::{Bar, BarSpec, bar_spec};
pub use map::{MapPoint, MapSpec, map_spec};
pub use pie::{PieSlice, PieSpec, pie_spec};
