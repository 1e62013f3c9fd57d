//! Site configuration model.
//!
//! The configuration document is a JSON object describing all site content
//! and branding. Every list defaults to empty and every scalar is optional:
//! a partially populated document always deserializes, and the renderer
//! skips regions whose fields are absent.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::video::Platform;

/// Root configuration document for one site.
///
/// Immutable for the lifetime of a page load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Brand identity and palette.
    #[serde(default)]
    pub brand: Brand,

    /// Hero section content.
    #[serde(default)]
    pub hero: Hero,

    /// Contact details and outbound links.
    #[serde(default)]
    pub contact: Option<Contact>,

    /// Service cards, in display order.
    #[serde(default)]
    pub services: Vec<CardEntry>,

    /// Feature cards, in display order.
    #[serde(default)]
    pub features: Vec<CardEntry>,

    /// Frequently asked questions.
    #[serde(default)]
    pub faq: Vec<FaqEntry>,

    /// Photo gallery entries.
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,

    /// Embedded video entries.
    #[serde(default)]
    pub videos: Vec<VideoEntry>,
}

/// Brand identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    /// Business display name.
    #[serde(default)]
    pub business_name: String,

    /// Path or URL of the brand logo.
    #[serde(default)]
    pub logo_file: Option<String>,

    /// Color palette projected onto the document theme.
    #[serde(default)]
    pub palette: Palette,
}

/// Brand color palette.
///
/// Absent entries leave the stylesheet's fallback value in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Palette {
    #[serde(default)]
    pub primary: Option<String>,

    /// Darker primary shade; falls back to `primary` when absent.
    #[serde(default)]
    pub primary700: Option<String>,

    #[serde(default)]
    pub secondary: Option<String>,

    #[serde(default)]
    pub accent: Option<String>,

    #[serde(default)]
    pub bg: Option<String>,

    #[serde(default)]
    pub text: Option<String>,
}

/// Hero section content.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Hero {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub subtitle: Option<String>,

    /// Hero illustration image.
    #[serde(default)]
    pub image: Option<String>,

    /// Selling-point bullet lines.
    #[serde(default)]
    pub bullets: Vec<String>,

    /// Short badge labels.
    #[serde(default)]
    pub badges: Vec<String>,
}

/// Contact details.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// WhatsApp click-to-chat URL used by every call-to-action.
    #[serde(default)]
    pub whatsapp_click_to_chat: Option<String>,

    /// Human-readable phone number.
    #[serde(default)]
    pub phone_human: Option<String>,

    /// E.164 phone number without separators, for wa.me links.
    #[serde(default)]
    pub phone_e164_wa: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    /// Social media handle or label.
    #[serde(default)]
    pub social_label: Option<String>,
}

/// A titled card (service or feature).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CardEntry {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub desc: String,
}

/// One FAQ entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FaqEntry {
    #[serde(default)]
    pub q: String,

    #[serde(default)]
    pub a: String,
}

/// One gallery photo.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GalleryItem {
    #[serde(default)]
    pub src: String,

    #[serde(default)]
    pub caption: Option<String>,
}

/// One embedded video.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoEntry {
    /// Hosting platform; unrecognized values deserialize to a catch-all
    /// variant and render nothing.
    #[serde(default)]
    pub platform: Platform,

    #[serde(default)]
    pub url: Option<String>,
}

impl SiteConfig {
    /// Parse a configuration document from JSON source.
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| {
            CoreError::config_with_source("failed to parse site configuration", e)
        })
    }

    /// WhatsApp click-to-chat URL for every call-to-action, or the safe
    /// fallback anchor `#` when unconfigured.
    pub fn whatsapp_href(&self) -> String {
        self.contact
            .as_ref()
            .and_then(|c| c.whatsapp_click_to_chat.clone())
            .unwrap_or_else(|| "#".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_document() -> &'static str {
        r##"{
          "brand": {
            "business_name": "Cerrajería Totti",
            "logo_file": "/assets/logo.png",
            "palette": {
              "primary": "#ff6a00",
              "primary700": "#c25200",
              "secondary": "#2491d9",
              "accent": "#ffd166",
              "bg": "#0b1220",
              "text": "#e8eef7"
            }
          },
          "hero": {
            "title": "Soldadura y cerrajería a medida",
            "subtitle": "Rejas, puertas y estructuras",
            "image": "/assets/hero.jpg",
            "bullets": ["Garantía por escrito", "Atención inmediata"],
            "badges": ["24/7", "A domicilio"]
          },
          "contact": {
            "whatsapp_click_to_chat": "https://wa.me/593999999999",
            "phone_human": "099 999 9999",
            "phone_e164_wa": "593999999999",
            "email": "totti@example.com",
            "address": "Av. Principal y 10 de Agosto",
            "social_label": "@cerrajeriatotti"
          },
          "services": [
            { "title": "Rejas", "desc": "Rejas de seguridad a medida" },
            { "title": "Puertas", "desc": "Puertas metálicas" }
          ],
          "features": [ { "title": "Rápido", "desc": "Entrega en días" } ],
          "faq": [ { "q": "¿Hacen visitas?", "a": "Sí, sin costo." } ],
          "gallery": [
            { "src": "/assets/work1.jpg", "caption": "Reja instalada" },
            { "src": "/assets/work2.jpg" }
          ],
          "videos": [
            { "platform": "youtube", "url": "https://www.youtube.com/watch?v=abc123" },
            { "platform": "tiktok", "url": "https://www.tiktok.com/embed/v2/123" }
          ]
        }"##
    }

    #[test]
    fn test_full_document_parses() {
        let config = SiteConfig::from_json(full_document()).expect("parse");

        assert_eq!(config.brand.business_name, "Cerrajería Totti");
        assert_eq!(config.brand.palette.primary.as_deref(), Some("#ff6a00"));
        assert_eq!(config.hero.bullets.len(), 2);
        assert_eq!(config.hero.badges.len(), 2);
        assert_eq!(config.services.len(), 2);
        assert_eq!(config.features.len(), 1);
        assert_eq!(config.faq.len(), 1);
        assert_eq!(config.gallery.len(), 2);
        assert!(config.gallery[1].caption.is_none());
        assert_eq!(config.videos.len(), 2);
        assert_eq!(config.videos[0].platform, Platform::Youtube);
    }

    #[test]
    fn test_empty_document_parses_to_defaults() {
        let config = SiteConfig::from_json("{}").expect("parse");

        assert!(config.brand.business_name.is_empty());
        assert!(config.brand.logo_file.is_none());
        assert!(config.hero.title.is_none());
        assert!(config.hero.bullets.is_empty());
        assert!(config.contact.is_none());
        assert!(config.services.is_empty());
        assert!(config.features.is_empty());
        assert!(config.faq.is_empty());
        assert!(config.gallery.is_empty());
        assert!(config.videos.is_empty());
    }

    #[test]
    fn test_unknown_platform_is_tolerated() {
        let config = SiteConfig::from_json(
            r#"{ "videos": [ { "platform": "vimeo", "url": "https://vimeo.com/1" } ] }"#,
        )
        .expect("parse");

        assert_eq!(config.videos.len(), 1);
        assert_eq!(config.videos[0].platform, Platform::Other);
    }

    #[test]
    fn test_malformed_document_fails() {
        let result = SiteConfig::from_json("{ not json");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("failed to parse site configuration")
        );
    }

    #[test]
    fn test_whatsapp_href_fallback() {
        let config = SiteConfig::from_json("{}").expect("parse");
        assert_eq!(config.whatsapp_href(), "#");

        let config = SiteConfig::from_json(
            r#"{ "contact": { "whatsapp_click_to_chat": "https://wa.me/593999999999" } }"#,
        )
        .expect("parse");
        assert_eq!(config.whatsapp_href(), "https://wa.me/593999999999");
    }

    #[test]
    fn test_partial_contact_parses() {
        let config =
            SiteConfig::from_json(r#"{ "contact": { "email": "a@b.c" } }"#).expect("parse");
        let contact = config.contact.expect("contact present");
        assert_eq!(contact.email.as_deref(), Some("a@b.c"));
        assert!(contact.phone_human.is_none());
        assert!(contact.whatsapp_click_to_chat.is_none());
    }
}
