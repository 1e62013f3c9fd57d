//! Cover composition math for the studio preview and export.
//!
//! The preview frame is a fixed 9:16 layer stack; everything here derives the
//! style values for those layers as pure functions of the editor state, so
//! the DOM preview and the canvas export stay in agreement.

use serde::{Deserialize, Serialize};

/// Design size of the preview frame, in CSS pixels.
pub const FRAME_WIDTH: u32 = 540;
/// Design height of the preview frame, in CSS pixels.
pub const FRAME_HEIGHT: u32 = 960;
/// Fixed pixel density multiplier applied on export (1080×1920 output).
pub const EXPORT_SCALE: u32 = 2;

/// Contrast slider range, in percent.
pub const CONTRAST_MIN: u32 = 50;
pub const CONTRAST_MAX: u32 = 110;
/// Spark intensity slider maximum, in percent.
pub const SPARK_MAX: u32 = 100;

/// Background tone preset of the cover.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Warm,
    Cool,
    Neutral,
}

impl Tone {
    /// All presets, in control display order.
    pub fn all() -> [Tone; 3] {
        [Tone::Warm, Tone::Cool, Tone::Neutral]
    }

    /// Spanish control label.
    pub fn label(self) -> &'static str {
        match self {
            Tone::Warm => "Cálido",
            Tone::Cool => "Frío",
            Tone::Neutral => "Neutro",
        }
    }

    /// The preset's three gradient color stops, top-left to bottom-right.
    pub fn stops(self) -> [&'static str; 3] {
        match self {
            Tone::Warm => [
                "rgba(252, 211, 77, 0.20)",
                "rgba(251, 146, 60, 0.10)",
                "rgba(0, 0, 0, 0)",
            ],
            Tone::Cool => [
                "rgba(56, 189, 248, 0.15)",
                "rgba(59, 130, 246, 0.10)",
                "rgba(0, 0, 0, 0)",
            ],
            Tone::Neutral => [
                "rgba(255, 255, 255, 0.10)",
                "rgba(255, 255, 255, 0.00)",
                "rgba(0, 0, 0, 0)",
            ],
        }
    }

    /// CSS `background-image` value for the tone layer.
    pub fn gradient(self) -> String {
        let [from, via, to] = self.stops();
        format!("linear-gradient(to bottom right, {from}, {via}, {to})")
    }
}

impl Default for Tone {
    fn default() -> Self {
        Self::Warm
    }
}

/// The three radial-gradient alpha terms of the spark overlay, linear in the
/// 0–100 intensity input. `None` at zero intensity: the overlay is absent,
/// not merely transparent.
pub fn spark_alphas(intensity: u32) -> Option<(f64, f64, f64)> {
    if intensity == 0 {
        return None;
    }
    let i = f64::from(intensity);
    Some((i / 150.0, i / 200.0, i / 180.0))
}

/// CSS `background-image` value for the spark overlay, or `None` at zero
/// intensity.
pub fn spark_overlay(intensity: u32) -> Option<String> {
    let (a1, a2, a3) = spark_alphas(intensity)?;
    Some(format!(
        "radial-gradient(circle at 70% 70%, rgba(255, 180, 80, {a1}) 0, \
         rgba(255, 140, 0, {a2}) 20%, transparent 40%), \
         radial-gradient(circle at 80% 60%, rgba(255, 220, 120, {a3}) 0, transparent 50%)"
    ))
}

/// CSS `filter` value applying the global contrast percentage.
pub fn contrast_filter(percent: u32) -> String {
    format!("contrast({percent}%)")
}

/// Export file name: business name with whitespace runs collapsed to single
/// underscores, plus the fixed suffix.
pub fn export_filename(business_name: &str) -> String {
    let mut slug = String::with_capacity(business_name.len());
    let mut in_whitespace = false;
    for ch in business_name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('_');
            }
            in_whitespace = true;
        } else {
            slug.push(ch);
            in_whitespace = false;
        }
    }
    format!("{slug}_thumbnail.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_preset_per_tone() {
        let gradients: Vec<String> = Tone::all().iter().map(|t| t.gradient()).collect();

        assert_eq!(gradients.len(), 3);
        assert_ne!(gradients[0], gradients[1]);
        assert_ne!(gradients[1], gradients[2]);
        assert_ne!(gradients[0], gradients[2]);
    }

    #[test]
    fn test_cool_preset_uses_cool_stops() {
        let gradient = Tone::Cool.gradient();
        assert!(gradient.contains("rgba(56, 189, 248, 0.15)"));
        assert!(gradient.starts_with("linear-gradient(to bottom right"));
    }

    #[test]
    fn test_zero_intensity_has_no_overlay() {
        assert!(spark_alphas(0).is_none());
        assert!(spark_overlay(0).is_none());
    }

    #[test]
    fn test_full_intensity_reaches_maxima() {
        let (a1, a2, a3) = spark_alphas(100).expect("alphas");
        assert!((a1 - 100.0 / 150.0).abs() < 1e-12);
        assert!((a2 - 0.5).abs() < 1e-12);
        assert!((a3 - 100.0 / 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_overlay_interpolates_intensity() {
        let overlay = spark_overlay(80).expect("overlay");
        assert!(overlay.contains("rgba(255, 180, 80,"));
        assert!(overlay.contains("rgba(255, 140, 0, 0.4)"));
        assert!(overlay.contains("circle at 70% 70%"));
        assert!(overlay.contains("circle at 80% 60%"));
    }

    #[test]
    fn test_contrast_filter() {
        assert_eq!(contrast_filter(85), "contrast(85%)");
    }

    #[test]
    fn test_export_filename_collapses_whitespace() {
        assert_eq!(
            export_filename("Cerrajería Totti"),
            "Cerrajería_Totti_thumbnail.png"
        );
        assert_eq!(export_filename("A  B\tC"), "A_B_C_thumbnail.png");
        assert_eq!(export_filename("Solo"), "Solo_thumbnail.png");
    }

    #[test]
    fn test_export_dimensions() {
        assert_eq!(FRAME_WIDTH * EXPORT_SCALE, 1080);
        assert_eq!(FRAME_HEIGHT * EXPORT_SCALE, 1920);
    }

    #[test]
    fn test_tone_labels() {
        assert_eq!(Tone::Warm.label(), "Cálido");
        assert_eq!(Tone::Cool.label(), "Frío");
        assert_eq!(Tone::Neutral.label(), "Neutro");
    }
}
