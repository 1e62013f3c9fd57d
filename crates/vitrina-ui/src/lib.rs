//! Vitrina UI Components
//!
//! Leptos components for the config-driven site renderer. Each region is a
//! pure render function of the immutable [`vitrina_core::SiteConfig`]; a
//! present field renders, an absent field leaves the component's built-in
//! default content in place, and list fields render one element per entry.
//!
//! # Components
//!
//! ## Theme
//! - [`BrandTheme`] - Palette projection onto document style variables
//!
//! ## Regions
//! - [`SiteHeader`] - Logo, business name, and nav call-to-action
//! - [`HeroSection`] - Hero copy, bullets, badges, and illustration
//! - [`ServiceGrid`] / [`FeatureGrid`] - Card grids
//! - [`FaqList`] - Collapsible question list
//! - [`GallerySection`] - Lazy photo grid with modal viewer
//! - [`VideoGrid`] - Platform-specific iframe embeds
//! - [`ContactSection`] / [`SiteFooter`] / [`WhatsAppFab`]
//!
//! ## Side processes
//! - [`QuoteForm`] - Form submission to WhatsApp deep link
//! - [`AmbientBackground`] - Decorative particle canvas

pub mod ambient;
pub mod contact;
pub mod gallery;
pub mod hero;
pub mod quote_form;
pub mod sections;
pub mod theme;
pub mod videos;

pub use ambient::AmbientBackground;
pub use contact::{ContactSection, SiteFooter, WhatsAppFab};
pub use gallery::{GalleryModal, GallerySection};
pub use hero::{HeroSection, SiteHeader};
pub use quote_form::QuoteForm;
pub use sections::{FaqList, FeatureGrid, ServiceGrid};
pub use theme::BrandTheme;
pub use videos::VideoGrid;
