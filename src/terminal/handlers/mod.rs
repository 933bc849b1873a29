//! Terminal escape sequence handlers.
//!
//! Only SGR (Select Graphic Rendition) is handled; cursor movement,
//! scrolling and erase sequences are outside what the HTML renderer models.

pub mod style;

pub use style::{apply_code, apply_codes, parse_params, SgrCode};
