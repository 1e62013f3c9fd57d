//! Image upload controls.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::state::{FACE_STORAGE_KEY, LOGO_STORAGE_KEY, persist_slot};

/// The three image slots of the cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    /// Foreground cutout; persists across sessions.
    Face,
    /// Full-bleed owner photo; does not persist.
    Owner,
    /// Footer logo; persists across sessions.
    Logo,
}

impl ImageSlot {
    /// The localStorage key for slots that persist.
    pub fn storage_key(self) -> Option<&'static str> {
        match self {
            Self::Face => Some(FACE_STORAGE_KEY),
            Self::Owner => None,
            Self::Logo => Some(LOGO_STORAGE_KEY),
        }
    }

    /// Spanish button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Face => "Cargar rostro base",
            Self::Owner => "Cargar foto del emprendedor",
            Self::Logo => "Cargar logo (PNG fondo transparente)",
        }
    }
}

/// File picker for one image slot. The chosen file is read to a data URI;
/// persistent slots additionally write localStorage under their fixed key.
#[component]
pub fn UploadControl(
    /// Which slot this control fills.
    slot: ImageSlot,
    /// Signal receiving the data URI.
    target: RwSignal<Option<String>>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_pick = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };

        wasm_bindgen_futures::spawn_local(async move {
            match gloo_file::futures::read_as_data_url(&file.into()).await {
                Ok(data_url) => {
                    if let Some(key) = slot.storage_key() {
                        persist_slot(key, &data_url);
                    }
                    target.set(Some(data_url));
                }
                Err(err) => log::warn!("image read failed: {err}"),
            }
        });
    };

    view! {
      <div class="upload-control">
        <button type="button" on:click=on_pick>
          {slot.label()}
        </button>
        <input
          node_ref=input_ref
          type="file"
          accept="image/*"
          class="hidden-input"
          on:change=on_change
        />
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_face_and_logo_persist() {
        assert_eq!(ImageSlot::Face.storage_key(), Some(FACE_STORAGE_KEY));
        assert_eq!(ImageSlot::Logo.storage_key(), Some(LOGO_STORAGE_KEY));
        assert_eq!(ImageSlot::Owner.storage_key(), None);
    }

    #[test]
    fn test_labels_are_distinct() {
        assert_ne!(ImageSlot::Face.label(), ImageSlot::Owner.label());
        assert_ne!(ImageSlot::Owner.label(), ImageSlot::Logo.label());
    }
}
