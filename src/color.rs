use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Plain sRGB triple, serialisable into chart specs.
pub type Rgb = [u8; 3];

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            [
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            ]
        })
        .collect()
}

/// One colour per conference label, in the order given.
pub fn conference_colors(labels: &[String]) -> BTreeMap<String, Rgb> {
    labels
        .iter()
        .cloned()
        .zip(generate_palette(labels.len()))
        .collect()
}

pub fn to_color32([r, g, b]: Rgb) -> Color32 {
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_length_and_distinct_colours() {
        let palette = generate_palette(6);
        assert_eq!(palette.len(), 6);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn conference_colors_cover_every_label() {
        let labels = vec!["ACC".to_string(), "SEC".to_string()];
        let colors = conference_colors(&labels);
        assert_eq!(colors.len(), 2);
        assert_ne!(colors["ACC"], colors["SEC"]);
    }
}
