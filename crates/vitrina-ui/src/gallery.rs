//! Photo gallery with modal viewer.

use gloo_events::EventListener;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use vitrina_core::config::GalleryItem;

/// Alt text for a gallery image.
fn alt_text(item: &GalleryItem) -> String {
    item.caption
        .clone()
        .unwrap_or_else(|| "Trabajo".to_string())
}

/// Lazy-loaded photo grid. Clicking an image opens the shared modal viewer.
#[component]
pub fn GallerySection(
    /// Gallery entries from the configuration.
    items: Vec<GalleryItem>,
) -> impl IntoView {
    let active = RwSignal::new(None::<GalleryItem>);

    view! {
      <section class="gallery-section">
        <h2>"Galería de trabajos"</h2>
        <div class="gallery">
          {items
              .into_iter()
              .map(|item| {
                  let alt = alt_text(&item);
                  let src = item.src.clone();
                  view! {
                    <img
                      class="gallery-img"
                      loading="lazy"
                      src=src
                      alt=alt
                      on:click=move |_| active.set(Some(item.clone()))
                    />
                  }
              })
              .collect_view()}
        </div>
        <GalleryModal active=active />
      </section>
    }
}

/// Modal overlay showing one gallery image at larger size plus its caption.
///
/// A single instance serves the whole gallery; opening another image replaces
/// its content. Closes on the close control, a click outside the content, or
/// the Escape key.
#[component]
pub fn GalleryModal(
    /// The currently displayed item; `None` keeps the modal closed.
    active: RwSignal<Option<GalleryItem>>,
) -> impl IntoView {
    // Document-level Escape handler, detached when the gallery unmounts.
    let escape = RwSignal::new_local(None::<EventListener>);
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        escape.set(Some(EventListener::new(&document, "keydown", move |event| {
            if let Some(ev) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                if ev.key() == "Escape" {
                    active.set(None);
                }
            }
        })));
    }
    on_cleanup(move || escape.set(None));

    let on_overlay_click = move |_| {
        active.set(None);
    };

    // Prevent closing when clicking the image content
    let on_content_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
      <Show when=move || active.get().is_some()>
        <div class="modal-overlay" on:click=on_overlay_click>
          <div class="modal-content" on:click=on_content_click>
            <button
              class="modal-close"
              on:click=move |_| active.set(None)
              aria-label="Cerrar"
            >
              "×"
            </button>
            <img
              class="modal-img"
              src=move || active.get().map(|item| item.src).unwrap_or_default()
              alt=""
            />
            <p class="modal-caption">
              {move || {
                  active.get().and_then(|item| item.caption).unwrap_or_default()
              }}
            </p>
          </div>
        </div>
      </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alt_text_prefers_caption() {
        let item = GalleryItem {
            src: "/a.jpg".into(),
            caption: Some("Reja instalada".into()),
        };
        assert_eq!(alt_text(&item), "Reja instalada");
    }

    #[test]
    fn test_alt_text_fallback() {
        let item = GalleryItem {
            src: "/a.jpg".into(),
            caption: None,
        };
        assert_eq!(alt_text(&item), "Trabajo");
    }
}
