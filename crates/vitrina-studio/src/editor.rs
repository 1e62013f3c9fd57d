//! The cover studio page.

use leptos::prelude::*;

use vitrina_core::cover::{self, Tone};
use vitrina_core::script::{self, ScriptDuration};

use crate::export;
use crate::preview::CoverPreview;
use crate::state::CoverDraft;
use crate::upload::{ImageSlot, UploadControl};

/// The full editor: settings, image slots, script panel, live preview, and
/// PNG export. State is restored from localStorage at mount and re-derives
/// the preview and script purely on every change.
#[component]
pub fn CoverStudio() -> impl IntoView {
    let draft = CoverDraft::restore();

    let face = RwSignal::new(draft.face);
    let owner = RwSignal::new(draft.owner);
    let logo = RwSignal::new(draft.logo);
    let headline = RwSignal::new(draft.headline);
    let subhead = RwSignal::new(draft.subhead);
    let signature = RwSignal::new(draft.signature);
    let business_name = RwSignal::new(draft.business_name);
    let city = RwSignal::new(draft.city);
    let tone = RwSignal::new(draft.tone);
    let contrast = RwSignal::new(draft.contrast);
    let spark_intensity = RwSignal::new(draft.spark_intensity);
    let duration = RwSignal::new(draft.duration);

    let script_text = Memo::new(move |_| {
        script::generate(&business_name.get(), &city.get(), duration.get())
    });

    let on_export = move |_| {
        let snapshot = CoverDraft {
            face: face.get_untracked(),
            owner: owner.get_untracked(),
            logo: logo.get_untracked(),
            headline: headline.get_untracked(),
            subhead: subhead.get_untracked(),
            signature: signature.get_untracked(),
            business_name: business_name.get_untracked(),
            city: city.get_untracked(),
            tone: tone.get_untracked(),
            contrast: contrast.get_untracked(),
            spark_intensity: spark_intensity.get_untracked(),
            duration: duration.get_untracked(),
        };
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = export::download_png(&snapshot).await {
                log::error!("cover export failed: {err}");
            }
        });
    };

    view! {
      <div class="studio">
        <div class="studio-controls">
          <section class="panel">
            <h2>"Ajustes de Portada"</h2>
            <TextField label="Negocio" value=business_name />
            <TextField label="Ciudad" value=city />
            <TextField label="Título (arriba)" value=headline />
            <TextField label="Subtítulo (debajo)" value=subhead />
            <TextField label="Firma" value=signature />
            <div class="tone-buttons">
              {Tone::all()
                  .into_iter()
                  .map(|preset| {
                      view! {
                        <button
                          type="button"
                          class:active=move || tone.get() == preset
                          on:click=move |_| tone.set(preset)
                        >
                          {preset.label()}
                        </button>
                      }
                  })
                  .collect_view()}
            </div>
            <RangeField
              label="Contraste (%)"
              min=cover::CONTRAST_MIN
              max=cover::CONTRAST_MAX
              value=contrast
            />
            <RangeField
              label="Intensidad de chispas (%)"
              min=0
              max=cover::SPARK_MAX
              value=spark_intensity
            />
          </section>

          <section class="panel">
            <h2>"Imágenes"</h2>
            <UploadControl slot=ImageSlot::Face target=face />
            <UploadControl slot=ImageSlot::Owner target=owner />
            <UploadControl slot=ImageSlot::Logo target=logo />
            <p class="panel-hint">
              "Tu rostro y logo quedan guardados en este navegador (localStorage)."
            </p>
          </section>

          <section class="panel">
            <h2>"Guion psicológico"</h2>
            <div class="duration-buttons">
              <button
                type="button"
                class:active=move || duration.get() == ScriptDuration::Short45
                on:click=move |_| duration.set(ScriptDuration::Short45)
              >
                "Corto 45s"
              </button>
              <button
                type="button"
                class:active=move || duration.get() == ScriptDuration::Extended120
                on:click=move |_| duration.set(ScriptDuration::Extended120)
              >
                "Extendido 2 min"
              </button>
            </div>
            <textarea rows="10" readonly prop:value=move || script_text.get()></textarea>
            <p class="panel-hint">
              "Incluye: sesgo de recencia, cortes cada 3s, pico emocional, pausa empática y CTA."
            </p>
          </section>
        </div>

        <div class="studio-preview">
          <section class="panel">
            <div class="preview-header">
              <h2>"Vista previa de Portada (1080×1920)"</h2>
              <button type="button" class="cta" on:click=on_export>
                "Exportar PNG"
              </button>
            </div>
            <CoverPreview
              face=face
              owner=owner
              logo=logo
              headline=headline
              subhead=subhead
              signature=signature
              business_name=business_name
              city=city
              tone=tone
              contrast=contrast
              spark_intensity=spark_intensity
            />
          </section>
        </div>
      </div>
    }
}

/// Labeled single-line text input bound to a signal.
#[component]
fn TextField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
      <label class="field">
        <span>{label}</span>
        <input
          type="text"
          prop:value=move || value.get()
          on:input=move |ev| value.set(event_target_value(&ev))
        />
      </label>
    }
}

/// Labeled range slider bound to a numeric signal.
#[component]
fn RangeField(label: &'static str, min: u32, max: u32, value: RwSignal<u32>) -> impl IntoView {
    view! {
      <label class="field">
        <span>{label}</span>
        <input
          type="range"
          min=min
          max=max
          prop:value=move || value.get().to_string()
          on:input=move |ev| {
              if let Ok(parsed) = event_target_value(&ev).parse() {
                  value.set(parsed);
              }
          }
        />
      </label>
    }
}
