//! Live cover preview.
//!
//! A fixed 9:16 frame of absolutely positioned layers, each derived purely
//! from the editor signals. The canvas export in [`crate::export`] paints the
//! same stack, in the same z-order.

use leptos::prelude::*;

use vitrina_core::cover::{self, Tone};

/// The layered preview frame.
#[component]
pub fn CoverPreview(
    face: RwSignal<Option<String>>,
    owner: RwSignal<Option<String>>,
    logo: RwSignal<Option<String>>,
    headline: RwSignal<String>,
    subhead: RwSignal<String>,
    signature: RwSignal<String>,
    business_name: RwSignal<String>,
    city: RwSignal<String>,
    tone: RwSignal<Tone>,
    contrast: RwSignal<u32>,
    spark_intensity: RwSignal<u32>,
) -> impl IntoView {
    let frame_filter = move || cover::contrast_filter(contrast.get());
    let tone_gradient = move || tone.get().gradient();
    let spark_style = move || {
        cover::spark_overlay(spark_intensity.get()).unwrap_or_else(|| "none".to_string())
    };

    view! {
      <div class="cover-frame" style:filter=frame_filter>
        <div class="cover-tone" style:background-image=tone_gradient></div>
        {move || match owner.get() {
            Some(src) => {
                view! { <img class="cover-owner" src=src alt="emprendedor" /> }.into_any()
            }
            None => {
                view! {
                  <div class="cover-owner-placeholder">"Sube la foto del emprendedor"</div>
                }
                    .into_any()
            }
        }}
        <div class="cover-spark" style:background-image=spark_style></div>
        <div class="cover-heading">
          <div class="cover-headline">{move || headline.get()}</div>
          <div class="cover-subhead">{move || subhead.get()}</div>
        </div>
        {move || {
            face.get().map(|src| view! { <img class="cover-face" src=src alt="rostro" /> })
        }}
        <div class="cover-brandline">
          {move || {
              logo.get().map(|src| view! { <img class="cover-logo" src=src alt="logo" /> })
          }} <span class="cover-signature">{move || signature.get()}</span>
        </div>
        <div class="cover-chip">
          {move || format!("{} • {}", business_name.get(), city.get())}
        </div>
      </div>
    }
}
