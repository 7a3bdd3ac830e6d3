//! `COLORREF` compatible color values and their `#RRGGBB` text form.

pub mod table;

use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

use arbitrary::Arbitrary;
use hex::FromHex;
use hex::FromHexError;

/// A packed `0xAABBGGRR` color, red in the lowest byte.
///
/// The layout matches the Win32 `COLORREF`, with the otherwise unused top
/// byte available as an alpha channel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Arbitrary)]
#[repr(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(u32::from_le_bytes([r, g, b, a]))
    }

    pub const fn r(self) -> u8 {
        self.0.to_le_bytes()[0]
    }

    pub const fn g(self) -> u8 {
        self.0.to_le_bytes()[1]
    }

    pub const fn b(self) -> u8 {
        self.0.to_le_bytes()[2]
    }

    pub const fn a(self) -> u8 {
        self.0.to_le_bytes()[3]
    }

    /// Replaces the alpha byte, keeping the color channels.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Color((self.0 & 0x00FF_FFFF) | (alpha as u32) << 24)
    }

    /// Formats the color as `#RRGGBB`. Alpha is not part of the text form.
    pub fn to_hex_string(self) -> String {
        let mut out = String::with_capacity(7);
        out.push('#');
        out.push_str(&hex::encode_upper([self.r(), self.g(), self.b()]));
        out
    }

    /// Parses `#RRGGBB` or the short `#RGB` form, where every digit is
    /// repeated (`#F0A` is `#FF00AA`).
    pub fn from_hex_string(text: &str) -> Result<Self, ColorParseError> {
        parse_color(text).inspect_err(|err| {
            tracing::debug!(input = text, error = %err, "rejected color string");
        })
    }
}

fn parse_color(text: &str) -> Result<Color, ColorParseError> {
    let bytes = text.as_bytes();
    if bytes.len() != 4 && bytes.len() != 7 {
        return Err(ColorParseError::BadLength(bytes.len()));
    }
    if bytes[0] != b'#' {
        return Err(ColorParseError::MissingHash);
    }

    let [r, g, b] = if let [_, r, g, b] = *bytes {
        <[u8; 3]>::from_hex([r, r, g, g, b, b])?
    } else {
        <[u8; 3]>::from_hex(&bytes[1..])?
    };
    Ok(Color::rgb(r, g, b))
}

/// Error that can occur when parsing a [Color] from text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorParseError {
    /// The input is neither 4 (`#RGB`) nor 7 (`#RRGGBB`) bytes long.
    BadLength(usize),
    MissingHash,
    BadHex(FromHexError),
}

impl From<FromHexError> for ColorParseError {
    fn from(value: FromHexError) -> Self {
        ColorParseError::BadHex(value)
    }
}

impl Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::BadLength(len) => {
                write!(f, "color string has length {len}, expected 4 or 7")
            }
            ColorParseError::MissingHash => write!(f, "color string must start with '#'"),
            ColorParseError::BadHex(err) => write!(f, "invalid hex in color string: {err}"),
        }
    }
}

impl std::error::Error for ColorParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ColorParseError::BadHex(err) => Some(err),
            _ => None,
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex_string(s)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color(value)
    }
}
