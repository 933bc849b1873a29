//! SGR (Select Graphic Rendition) handler.
//!
//! Handles the parameters of a CSI m sequence for the 16-color subset:
//! - Reset (0)
//! - Bright (1)
//! - Standard foreground colors (30-37)
//! - Standard background colors (40-47)
//!
//! Every other code is ignored.

use tracing::trace;

use crate::terminal::types::{palette, Brightness, Channel, StyleState};

/// A decoded SGR parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bright,
    Foreground(Channel),
    Background(Channel),
    Unsupported(u32),
}

impl From<u32> for SgrCode {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Reset,
            1 => Self::Bright,
            30..=37 => Channel::new((code - 30) as u8)
                .map_or(Self::Unsupported(code), Self::Foreground),
            40..=47 => Channel::new((code - 40) as u8)
                .map_or(Self::Unsupported(code), Self::Background),
            other => Self::Unsupported(other),
        }
    }
}

/// Parse a `;`-separated parameter run into codes.
///
/// Empty or unparsable parameters are skipped. An empty run yields no codes.
pub fn parse_params(params: &str) -> Vec<u32> {
    if params.is_empty() {
        return Vec::new();
    }
    params
        .split(';')
        .filter_map(|param| match param.parse::<u32>() {
            Ok(code) => Some(code),
            Err(_) => {
                trace!(param, "skipping unparsable SGR parameter");
                None
            }
        })
        .collect()
}

/// Apply a single SGR code to the state.
pub fn apply_code(state: &mut StyleState, code: SgrCode) {
    match code {
        SgrCode::Reset => state.reset(),
        SgrCode::Bright => state.bright = true,
        SgrCode::Foreground(channel) => {
            state.fg = Some(palette(Brightness::from_flag(state.bright), channel));
        }
        // Backgrounds always come from the normal row.
        SgrCode::Background(channel) => {
            state.bg = Some(palette(Brightness::Normal, channel));
        }
        SgrCode::Unsupported(code) => trace!(code, "ignoring unsupported SGR code"),
    }
}

/// Apply codes strictly left to right.
pub fn apply_codes<I>(state: &mut StyleState, codes: I)
where
    I: IntoIterator<Item = u32>,
{
    for code in codes {
        apply_code(state, SgrCode::from(code));
    }
}
