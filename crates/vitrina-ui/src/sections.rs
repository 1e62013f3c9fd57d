//! Card-grid and FAQ region components.

use leptos::prelude::*;

use vitrina_core::config::{CardEntry, FaqEntry};

/// Service cards, one per entry in input order.
#[component]
pub fn ServiceGrid(
    /// Service entries from the configuration.
    services: Vec<CardEntry>,
) -> impl IntoView {
    view! {
      <section class="services">
        <h2>"Servicios"</h2>
        <div class="card-grid">
          {services
              .into_iter()
              .map(|entry| {
                  view! {
                    <article class="card service-card">
                      <h3>{entry.title}</h3>
                      <p>{entry.desc}</p>
                    </article>
                  }
              })
              .collect_view()}
        </div>
      </section>
    }
}

/// Feature cards, one per entry in input order.
#[component]
pub fn FeatureGrid(
    /// Feature entries from the configuration.
    features: Vec<CardEntry>,
) -> impl IntoView {
    view! {
      <section class="features">
        <h2>"Por qué elegirnos"</h2>
        <div class="card-grid">
          {features
              .into_iter()
              .map(|entry| {
                  view! {
                    <article class="card feature-card">
                      <h3>{entry.title}</h3>
                      <p>{entry.desc}</p>
                    </article>
                  }
              })
              .collect_view()}
        </div>
      </section>
    }
}

/// Collapsible FAQ list.
#[component]
pub fn FaqList(
    /// Question/answer entries from the configuration.
    entries: Vec<FaqEntry>,
) -> impl IntoView {
    view! {
      <section class="faq">
        <h2>"Preguntas frecuentes"</h2>
        <div class="faq-list">
          {entries
              .into_iter()
              .map(|entry| {
                  view! {
                    <details>
                      <summary>{entry.q}</summary>
                      <p>{entry.a}</p>
                    </details>
                  }
              })
              .collect_view()}
        </div>
      </section>
    }
}
