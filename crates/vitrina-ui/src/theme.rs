//! Theme projection component.

use leptos::prelude::*;
use leptos_meta::Title;
use wasm_bindgen::JsCast;

use vitrina_core::config::Palette;
use vitrina_core::theme;

/// Writes the palette onto the document root as CSS custom properties and
/// derives the document title from the business name.
///
/// Absent palette entries are skipped so the stylesheet fallback survives.
#[component]
pub fn BrandTheme(
    /// Brand palette to project.
    palette: Palette,
    /// Business display name for the title.
    business_name: String,
) -> impl IntoView {
    let vars = theme::css_variables(&palette);

    Effect::new(move |_| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(root) = document
            .document_element()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };

        let style = root.style();
        for (name, value) in &vars {
            if style.set_property(name, value).is_err() {
                log::warn!("failed to set theme variable {name}");
            }
        }
    });

    view! { <Title text=theme::page_title(&business_name) /> }
}
