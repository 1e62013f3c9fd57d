//! Header and hero region components.

use leptos::prelude::*;

use vitrina_core::config::{Brand, Hero};

/// Default hero copy shown when the configuration omits the field.
const DEFAULT_HERO_TITLE: &str = "Soldadura y cerrajería profesional";
const DEFAULT_HERO_SUBTITLE: &str = "Trabajos a medida con entrega garantizada";

/// Site header: brand logo (when configured), business name, and the nav
/// call-to-action.
#[component]
pub fn SiteHeader(
    /// Brand identity.
    brand: Brand,
    /// WhatsApp click-to-chat URL shared by every call-to-action.
    cta_href: String,
) -> impl IntoView {
    view! {
      <header class="site-header">
        <div class="brand">
          {brand
              .logo_file
              .map(|src| view! { <img class="brand-logo" src=src alt="logo" /> })}
          <span class="brand-name">{brand.business_name}</span>
        </div>
        <a class="cta nav-cta" href=cta_href>
          "Cotizar por WhatsApp"
        </a>
      </header>
    }
}

/// Hero section: title, subtitle, bullet list, badges, and illustration.
#[component]
pub fn HeroSection(
    /// Hero content from the configuration.
    hero: Hero,
) -> impl IntoView {
    let title = hero
        .title
        .unwrap_or_else(|| DEFAULT_HERO_TITLE.to_string());
    let subtitle = hero
        .subtitle
        .unwrap_or_else(|| DEFAULT_HERO_SUBTITLE.to_string());

    view! {
      <section class="hero">
        <div class="hero-copy">
          <h1 class="hero-title">{title}</h1>
          <p class="hero-sub">{subtitle}</p>
          <ul class="hero-bullets">
            {hero
                .bullets
                .into_iter()
                .map(|bullet| view! { <li>{bullet}</li> })
                .collect_view()}
          </ul>
          <div class="hero-badges">
            {hero
                .badges
                .into_iter()
                .map(|badge| view! { <span class="badge">{badge}</span> })
                .collect_view()}
          </div>
        </div>
        {hero
            .image
            .map(|src| view! { <img class="hero-image" src=src alt="" /> })}
      </section>
    }
}
