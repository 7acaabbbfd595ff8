use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use inventory_insight::data::model::{RestockStatus, StockStatus};

// ---------------------------------------------------------------------------
// Fixed status colours
// ---------------------------------------------------------------------------

const RED: Color32 = Color32::from_rgb(0xFF, 0x4B, 0x4B);
const GREEN: Color32 = Color32::from_rgb(0x00, 0xCC, 0x96);
const ORANGE: Color32 = Color32::from_rgb(0xFF, 0xA1, 0x5A);

pub fn status_color(status: StockStatus) -> Color32 {
    match status {
        StockStatus::DeadStock => RED,
        StockStatus::HotItem => GREEN,
        StockStatus::SlowMoving => ORANGE,
        StockStatus::Normal => Color32::GRAY,
    }
}

pub fn restock_color(status: RestockStatus) -> Color32 {
    match status {
        RestockStatus::CriticalLow => RED,
        RestockStatus::Warning => ORANGE,
        RestockStatus::Healthy => GREEN,
    }
}

// ---------------------------------------------------------------------------
// Cell shading
// ---------------------------------------------------------------------------

/// Sequential colour scales for table cell backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gradient {
    /// Pale pink → deep red as the value grows.
    Reds,
    /// Deep red → pale orange as the value grows (short runway is hot).
    OrangeRedReversed,
}

/// Position of `value` inside `[min, max]`, clamped to `0..=1`.
pub fn normalize(value: f64, min: f64, max: f64) -> f32 {
    let range = max - min;
    if range.abs() < f64::EPSILON {
        return 0.0;
    }
    ((value - min) / range).clamp(0.0, 1.0) as f32
}

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

impl Gradient {
    /// Background and readable text colour for a normalised position `t`.
    pub fn shade(self, t: f32) -> (Color32, Color32) {
        let t = t.clamp(0.0, 1.0);
        let (hue, lightness) = match self {
            Gradient::Reds => (0.0, 0.95 - 0.55 * t),
            Gradient::OrangeRedReversed => (30.0 * t, 0.40 + 0.52 * t),
        };
        let text = if lightness < 0.6 {
            Color32::WHITE
        } else {
            Color32::BLACK
        };
        (hsl_to_color32(hue, 0.85, lightness), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps_and_handles_flat_range() {
        assert_eq!(normalize(5.0, 0.0, 10.0), 0.5);
        assert_eq!(normalize(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(normalize(30.0, 0.0, 10.0), 1.0);
        assert_eq!(normalize(4.0, 4.0, 4.0), 0.0);
    }

    #[test]
    fn reds_darken_with_value() {
        let (light, light_text) = Gradient::Reds.shade(0.0);
        let (dark, dark_text) = Gradient::Reds.shade(1.0);
        let brightness = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        assert!(brightness(light) > brightness(dark));
        assert_eq!(light_text, Color32::BLACK);
        assert_eq!(dark_text, Color32::WHITE);
    }

    #[test]
    fn short_runway_is_darkest() {
        let brightness = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        let (short, _) = Gradient::OrangeRedReversed.shade(0.0);
        let (long, _) = Gradient::OrangeRedReversed.shade(1.0);
        assert!(brightness(short) < brightness(long));
    }

    #[test]
    fn dead_stock_and_critical_share_alert_red() {
        assert_eq!(status_color(StockStatus::DeadStock), restock_color(RestockStatus::CriticalLow));
    }
}
