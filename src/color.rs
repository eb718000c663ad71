use std::str::FromStr;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Categorical cycle for curves and histogram bars (the familiar
/// blue / orange / green / red ... sequence).
const CATEGORY_HEX: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

fn hex_to_color32(hex: &str) -> Option<Color32> {
    let rgb = Srgb::<u8>::from_str(hex).ok()?;
    Some(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

/// Colour of the `index`-th series. The first ten come from the categorical
/// cycle; past that, hues are spread evenly with a golden-angle step.
pub fn series_color(index: usize) -> Color32 {
    CATEGORY_HEX
        .get(index)
        .and_then(|hex| hex_to_color32(hex))
        .unwrap_or_else(|| {
            let hue = (index as f32 * 137.508) % 360.0;
            let rgb: Srgb = Hsl::new(hue, 0.75, 0.55).into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_colours_follow_category_cycle() {
        assert_eq!(series_color(0), Color32::from_rgb(0x1f, 0x77, 0xb4));
        assert_eq!(series_color(1), Color32::from_rgb(0xff, 0x7f, 0x0e));
        assert_eq!(series_color(2), Color32::from_rgb(0x2c, 0xa0, 0x2c));
    }

    #[test]
    fn test_palette_is_distinct_and_stable() {
        let a: Vec<Color32> = (0..14).map(series_color).collect();
        let b: Vec<Color32> = (0..14).map(series_color).collect();
        assert_eq!(a, b);
        for i in 0..a.len() {
            for j in i + 1..a.len() {
                assert_ne!(a[i], a[j], "colours {i} and {j} collide");
            }
        }
    }

    #[test]
    fn test_bad_hex_is_rejected() {
        assert_eq!(hex_to_color32("#zzzzzz"), None);
    }
}
