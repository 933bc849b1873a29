//! Terminal color and style types.
//!
//! Contains the data structures the SGR decoder works on:
//! - Rgb: a concrete color as rendered in CSS
//! - Brightness: which half of the 16-color palette to index
//! - StyleState: the running foreground/background/bright record

use std::fmt;

use serde::{Deserialize, Serialize};

/// A concrete RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Formats as a CSS color value, e.g. `rgb(187, 0, 0)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Palette half selected by the bright flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brightness {
    Normal,
    Bright,
}

impl Brightness {
    pub fn from_flag(bright: bool) -> Self {
        if bright {
            Self::Bright
        } else {
            Self::Normal
        }
    }
}

/// The 16-color palette: normal row, then bright row.
const PALETTE: [[Rgb; 8]; 2] = [
    [
        Rgb::new(0, 0, 0),
        Rgb::new(187, 0, 0),
        Rgb::new(0, 187, 0),
        Rgb::new(187, 187, 0),
        Rgb::new(0, 0, 187),
        Rgb::new(187, 0, 187),
        Rgb::new(0, 187, 187),
        Rgb::new(255, 255, 255),
    ],
    [
        Rgb::new(85, 85, 85),
        Rgb::new(255, 85, 85),
        Rgb::new(0, 255, 0),
        Rgb::new(255, 255, 85),
        Rgb::new(85, 85, 255),
        Rgb::new(255, 85, 255),
        Rgb::new(85, 255, 255),
        Rgb::new(255, 255, 255),
    ],
];

/// A channel index into one palette row (always 0-7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel(u8);

impl Channel {
    /// Build a channel index, rejecting anything outside 0-7.
    pub fn new(index: u8) -> Option<Self> {
        (index < 8).then_some(Self(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }
}

/// Look up a palette entry.
pub fn palette(brightness: Brightness, channel: Channel) -> Rgb {
    let row = match brightness {
        Brightness::Normal => 0,
        Brightness::Bright => 1,
    };
    PALETTE[row][channel.0 as usize]
}

/// Running style record for one conversion.
///
/// `None` means the color is unset and no CSS is emitted for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<Rgb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<Rgb>,
    #[serde(default)]
    pub bright: bool,
}

impl StyleState {
    /// Return to the default state: no colors, not bright.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether any color is set, i.e. text needs a styled wrapper.
    pub fn is_active(&self) -> bool {
        self.fg.is_some() || self.bg.is_some()
    }

    /// Inline CSS declaration for the current colors.
    ///
    /// Returns `None` when neither color is set.
    pub fn css(&self) -> Option<String> {
        match (self.fg, self.bg) {
            (None, None) => None,
            (Some(fg), None) => Some(format!("color:{}", fg)),
            (None, Some(bg)) => Some(format!("background-color:{}", bg)),
            (Some(fg), Some(bg)) => Some(format!("color:{};background-color:{}", fg, bg)),
        }
    }
}
