//! Quote form to WhatsApp deep-link bridge.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use vitrina_core::quote::{self, QuoteRequest};

fn field(data: &web_sys::FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}

fn collect_request(data: &web_sys::FormData) -> QuoteRequest {
    QuoteRequest {
        nombre: field(data, "nombre"),
        servicio: field(data, "servicio"),
        ancho: field(data, "ancho"),
        alto: field(data, "alto"),
        material: field(data, "material"),
        ubicacion: field(data, "ubicacion"),
        descripcion: field(data, "descripcion"),
        telefono: field(data, "telefono"),
    }
}

/// Quote request form. Submission never leaves the client: the named fields
/// are interpolated into the fixed message template and opened as a `wa.me`
/// deep link in a new browsing context.
#[component]
pub fn QuoteForm(
    /// Destination phone in E.164 form without separators.
    phone_e164: Option<String>,
) -> impl IntoView {
    let phone = phone_e164.unwrap_or_default();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(form) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlFormElement>().ok())
        else {
            return;
        };
        let Ok(data) = web_sys::FormData::new_with_form(&form) else {
            log::warn!("quote form data unavailable");
            return;
        };

        let message = collect_request(&data).build_message();
        let url = quote::whatsapp_url(&phone, &message);

        if let Some(window) = web_sys::window() {
            if window
                .open_with_url_and_target_and_features(&url, "_blank", "noopener")
                .is_err()
            {
                log::warn!("failed to open WhatsApp deep link");
            }
        }
    };

    view! {
      <section class="quote">
        <h2>"Pide tu cotización"</h2>
        <form class="quote-form" on:submit=on_submit>
          <input name="nombre" placeholder="Nombre" required />
          <input name="telefono" placeholder="Teléfono" />
          <input name="servicio" placeholder="Servicio (reja, puerta, ventana…)" required />
          <div class="quote-measures">
            <input name="ancho" inputmode="numeric" placeholder="Ancho (cm)" />
            <input name="alto" inputmode="numeric" placeholder="Alto (cm)" />
          </div>
          <input name="material" placeholder="Material" />
          <input name="ubicacion" placeholder="Ubicación" />
          <textarea name="descripcion" rows="4" placeholder="Detalles del trabajo"></textarea>
          <button type="submit" class="cta">
            "Cotizar por WhatsApp"
          </button>
        </form>
      </section>
    }
}
