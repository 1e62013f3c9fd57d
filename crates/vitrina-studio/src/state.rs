//! Editor state: the cover draft, its defaults, and session persistence.

use gloo_storage::{LocalStorage, Storage};

use vitrina_core::cover::Tone;
use vitrina_core::script::ScriptDuration;

/// localStorage key for the persisted face image data URI.
pub const FACE_STORAGE_KEY: &str = "vitrina.face";
/// localStorage key for the persisted logo image data URI.
pub const LOGO_STORAGE_KEY: &str = "vitrina.logo";

/// The complete editor state.
///
/// The `face` and `logo` image slots persist across sessions; the `owner`
/// slot intentionally does not (observed behavior preserved).
#[derive(Debug, Clone, PartialEq)]
pub struct CoverDraft {
    /// Foreground cutout image data URI (persisted).
    pub face: Option<String>,
    /// Full-bleed owner photo data URI (not persisted).
    pub owner: Option<String>,
    /// Logo image data URI (persisted).
    pub logo: Option<String>,

    pub headline: String,
    pub subhead: String,
    pub signature: String,
    pub business_name: String,
    pub city: String,

    pub tone: Tone,
    /// Global contrast percentage, 50–110.
    pub contrast: u32,
    /// Spark overlay intensity percentage, 0–100.
    pub spark_intensity: u32,
    pub duration: ScriptDuration,
}

impl Default for CoverDraft {
    fn default() -> Self {
        Self {
            face: None,
            owner: None,
            logo: None,
            headline: "LE REGALAMOS SU PROPIA WEB 💻".to_string(),
            subhead: "Y NO PUDO CREERLO…".to_string(),
            signature: "Criss Lombeida".to_string(),
            business_name: "Cerrajería Totti".to_string(),
            city: "Shushufindi".to_string(),
            tone: Tone::Warm,
            contrast: 85,
            spark_intensity: 80,
            duration: ScriptDuration::Short45,
        }
    }
}

impl CoverDraft {
    /// Defaults plus whatever the persistent slots hold from an earlier
    /// session.
    pub fn restore() -> Self {
        Self {
            face: read_slot(FACE_STORAGE_KEY),
            logo: read_slot(LOGO_STORAGE_KEY),
            ..Self::default()
        }
    }
}

/// Read a persisted data URI, `None` when absent or storage is unavailable.
fn read_slot(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}

/// Persist a data URI under `key`; storage failures are logged, not fatal.
pub fn persist_slot(key: &str, data_url: &str) {
    if LocalStorage::raw().set_item(key, data_url).is_err() {
        log::warn!("could not persist image under {key}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let draft = CoverDraft::default();

        assert!(draft.face.is_none());
        assert!(draft.owner.is_none());
        assert!(draft.logo.is_none());
        assert_eq!(draft.headline, "LE REGALAMOS SU PROPIA WEB 💻");
        assert_eq!(draft.subhead, "Y NO PUDO CREERLO…");
        assert_eq!(draft.signature, "Criss Lombeida");
        assert_eq!(draft.business_name, "Cerrajería Totti");
        assert_eq!(draft.city, "Shushufindi");
        assert_eq!(draft.tone, Tone::Warm);
        assert_eq!(draft.contrast, 85);
        assert_eq!(draft.spark_intensity, 80);
        assert_eq!(draft.duration, ScriptDuration::Short45);
    }

    #[test]
    fn test_storage_keys_are_distinct() {
        assert_ne!(FACE_STORAGE_KEY, LOGO_STORAGE_KEY);
    }
}
