//! ansihtml - render ANSI-colored log output as HTML.
//!
//! The core is [`convert`], which turns a line containing SGR color codes into
//! markup with inline-styled `<span>`s. [`html::escape`] and
//! [`html::linkify`] are separate steps; [`render::Pipeline`] composes the
//! three for batches of lines.

pub mod cli;
pub mod config;
pub mod convert;
pub mod html;
pub mod logging;
pub mod render;
pub mod terminal;

pub use config::{Config, ConfigError, PageConfig, RenderConfig};
pub use convert::{convert, convert_from, convert_with, LineConverter};
pub use html::{escape, linkify};
pub use render::{render_page, Pipeline};
pub use terminal::{apply_codes, Rgb, StyleState};
