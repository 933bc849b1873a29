//! Terminal color model.
//!
//! Holds the 16-color palette, the per-conversion style record and the SGR
//! handler that mutates it. Nothing here keeps state between calls.

pub mod handlers;
pub mod types;

pub use handlers::{apply_codes, SgrCode};
pub use types::{palette, Brightness, Channel, Rgb, StyleState};
