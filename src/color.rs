use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Maps category labels (sites, booster categories, outcomes) to distinct
/// colours. Colours are assigned in first-appearance order, so the same label
/// keeps its colour while filters change.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl Default for ColorMap {
    fn default() -> Self {
        ColorMap {
            mapping: BTreeMap::new(),
            default_color: Color32::GRAY,
        }
    }
}

impl ColorMap {
    pub fn new(labels: impl IntoIterator<Item = String>) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for label in labels {
            if !unique.contains(&label) {
                unique.push(label);
            }
        }
        let palette = generate_palette(unique.len());
        ColorMap {
            mapping: unique.into_iter().zip(palette).collect(),
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a label; unknown labels are grey.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_size() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(4);
        assert_eq!(p.len(), 4);
        assert_ne!(p[0], p[1]);
    }

    #[test]
    fn duplicate_labels_share_a_colour() {
        let map = ColorMap::new(["B5", "B4", "B5", "FT"].map(String::from));
        assert_ne!(map.color_for("B5"), map.color_for("B4"));
        assert_ne!(map.color_for("B4"), map.color_for("FT"));
        assert_eq!(map.color_for("v1.0"), Color32::GRAY);
    }
}
