//! Vitrina Core Library
//!
//! Pure, DOM-free domain logic shared by the site renderer and the cover
//! studio: the site configuration model, error types, theme projection,
//! video-embed derivation, quote-message construction, the ambient particle
//! simulation, cover composition math, and the video script generator.
//!
//! Everything in this crate is testable on the host target; the browser-facing
//! crates (`vitrina-ui`, `vitrina-studio`) consume it from WASM.

pub mod config;
pub mod cover;
pub mod error;
pub mod particles;
pub mod quote;
pub mod script;
pub mod theme;
pub mod video;

pub use config::{Brand, CardEntry, Contact, FaqEntry, GalleryItem, Hero, Palette, SiteConfig, VideoEntry};
pub use cover::Tone;
pub use error::{CoreError, Result};
pub use script::ScriptDuration;
pub use video::{Platform, VideoEmbed};
