//! Vitrina application shell.
//!
//! Mounts two independent pages on one router: the config-driven site at `/`
//! and the cover studio at `/studio`. The site render is gated on the
//! configuration document; obtaining or parsing it is all-or-nothing.

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use vitrina_core::SiteConfig;
use vitrina_studio::CoverStudio;
use vitrina_ui::{
    AmbientBackground, BrandTheme, ContactSection, FaqList, FeatureGrid, GallerySection,
    HeroSection, QuoteForm, ServiceGrid, SiteFooter, SiteHeader, VideoGrid, WhatsAppFab,
};

pub mod loader;

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
      <Router>
        <Routes fallback=|| "Página no encontrada.".into_view()>
          <Route path=StaticSegment("") view=SitePage />
          <Route path=StaticSegment("studio") view=StudioPage />
        </Routes>
      </Router>
    }
}

/// The marketing site: a one-shot configuration load followed by a single
/// deterministic render. Load or parse failure is fatal and shows the error
/// panel instead of a partial page.
#[component]
fn SitePage() -> impl IntoView {
    let config = RwSignal::new(None::<Result<SiteConfig, String>>);

    Effect::new(move |_| {
        if config.get_untracked().is_some() {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            let result = loader::load().await.map_err(|e| e.to_string());
            if let Err(message) = &result {
                log::error!("site configuration failed to load: {message}");
            }
            config.set(Some(result));
        });
    });

    view! {
      {move || match config.get() {
          None => view! { <main class="site-loading"></main> }.into_any(),
          Some(Err(message)) => view! { <ConfigErrorPanel message=message /> }.into_any(),
          Some(Ok(config)) => view! { <SiteView config=config /> }.into_any(),
      }}
    }
}

/// Visible error state for an unavailable or malformed configuration.
#[component]
fn ConfigErrorPanel(message: String) -> impl IntoView {
    view! {
      <main class="site-error">
        <h1>"No pudimos cargar el sitio"</h1>
        <p>{message}</p>
      </main>
    }
}

/// Every region of the site, rendered exactly once from the immutable
/// configuration.
#[component]
fn SiteView(config: SiteConfig) -> impl IntoView {
    let cta_href = config.whatsapp_href();
    let phone_e164 = config
        .contact
        .as_ref()
        .and_then(|c| c.phone_e164_wa.clone());
    let business_name = config.brand.business_name.clone();

    view! {
      <BrandTheme
        palette=config.brand.palette.clone()
        business_name=config.brand.business_name.clone()
      />
      <AmbientBackground />
      <SiteHeader brand=config.brand cta_href=cta_href.clone() />
      <main>
        <HeroSection hero=config.hero />
        <ServiceGrid services=config.services />
        <FeatureGrid features=config.features />
        <GallerySection items=config.gallery />
        <VideoGrid videos=config.videos />
        <FaqList entries=config.faq />
        <QuoteForm phone_e164=phone_e164 />
        <ContactSection contact=config.contact cta_href=cta_href.clone() />
      </main>
      <WhatsAppFab cta_href=cta_href />
      <SiteFooter business_name=business_name />
    }
}

/// The standalone cover studio.
#[component]
fn StudioPage() -> impl IntoView {
    view! {
      <main class="studio-page">
        <CoverStudio />
      </main>
    }
}
