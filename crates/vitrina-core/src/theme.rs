//! Theme projection from the brand palette onto document style variables.

use crate::config::Palette;

/// Fixed suffix appended to the business name in the document title.
pub const TITLE_SUFFIX: &str = "Soldadura Profesional";

/// Derive the document title from the business name.
pub fn page_title(business_name: &str) -> String {
    format!("{business_name} | {TITLE_SUFFIX}")
}

/// Resolve the palette into `(custom property, value)` pairs.
///
/// Only present colors are emitted, so absent entries leave the stylesheet
/// fallback untouched. `--c-primary-700` resolves to `primary700` when set
/// and to `primary` otherwise.
pub fn css_variables(palette: &Palette) -> Vec<(&'static str, String)> {
    let mut vars = Vec::with_capacity(6);

    if let Some(primary) = &palette.primary {
        vars.push(("--c-primary", primary.clone()));
    }
    if let Some(primary700) = palette.primary700.as_ref().or(palette.primary.as_ref()) {
        vars.push(("--c-primary-700", primary700.clone()));
    }
    if let Some(secondary) = &palette.secondary {
        vars.push(("--c-secondary", secondary.clone()));
    }
    if let Some(accent) = &palette.accent {
        vars.push(("--c-accent", accent.clone()));
    }
    if let Some(bg) = &palette.bg {
        vars.push(("--c-bg", bg.clone()));
    }
    if let Some(text) = &palette.text {
        vars.push(("--c-text", text.clone()));
    }

    vars
}
