//! Contact, footer, and floating call-to-action components.

use leptos::prelude::*;

use vitrina_core::config::Contact;

/// Contact block: labeled detail lines (rendered only for present fields)
/// plus the contact call-to-action.
#[component]
pub fn ContactSection(
    /// Contact details from the configuration.
    contact: Option<Contact>,
    /// WhatsApp click-to-chat URL shared by every call-to-action.
    cta_href: String,
) -> impl IntoView {
    let contact = contact.unwrap_or_default();

    view! {
      <section class="contact">
        <h2>"Contacto"</h2>
        <ul class="contact-lines">
          {contact
              .phone_human
              .map(|phone| view! { <li class="contact-phone">{format!("Tel/WhatsApp: {phone}")}</li> })}
          {contact
              .email
              .map(|email| view! { <li class="contact-email">{format!("Email: {email}")}</li> })}
          {contact
              .address
              .map(|address| {
                  view! { <li class="contact-address">{format!("Dirección: {address}")}</li> }
              })}
          {contact
              .social_label
              .map(|label| view! { <li class="contact-social">{format!("Redes: {label}")}</li> })}
        </ul>
        <a class="cta contact-cta" href=cta_href>
          "Escríbenos por WhatsApp"
        </a>
      </section>
    }
}

/// Floating WhatsApp action button.
#[component]
pub fn WhatsAppFab(
    /// WhatsApp click-to-chat URL.
    cta_href: String,
) -> impl IntoView {
    view! {
      <a class="whatsapp-fab" href=cta_href aria-label="WhatsApp">
        "💬"
      </a>
    }
}

/// Footer with the business name and the year computed at render time.
#[component]
pub fn SiteFooter(
    /// Business display name.
    business_name: String,
) -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
      <footer class="site-footer">
        <span class="footer-name">{business_name}</span>
        <span class="footer-year">{format!(" © {year}")}</span>
      </footer>
    }
}
