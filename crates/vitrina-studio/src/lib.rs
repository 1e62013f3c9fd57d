//! Vitrina Cover Studio
//!
//! A standalone visual editor for producing a 9:16 social cover image plus an
//! accompanying video script. Editor state is a set of reactive signals; the
//! preview and the script re-derive purely from them. Two of the three image
//! slots persist across sessions through localStorage.
//!
//! # Components
//!
//! - [`CoverStudio`] - The full editor page
//! - [`CoverPreview`] - Live layered preview frame
//! - [`UploadControl`] - One image slot's file picker
//!
//! # Modules
//!
//! - [`state`] - Editor draft, defaults, and localStorage restore
//! - [`export`] - Canvas rasterization and PNG download

pub mod editor;
pub mod export;
pub mod preview;
pub mod state;
pub mod upload;

pub use editor::CoverStudio;
pub use preview::CoverPreview;
pub use state::CoverDraft;
pub use upload::{ImageSlot, UploadControl};
