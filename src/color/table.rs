//! Default palettes for console color tables.
//!
//! Tables are caller owned slices. Functions that fill a fixed number of
//! entries check the length up front and leave the table untouched when it
//! is too short.

use std::fmt;

use super::Color;

/// The Campbell scheme in ANSI/VT order (black, red, green, yellow, blue,
/// magenta, cyan, white, then the bright variants).
pub const CAMPBELL: [Color; 16] = [
    Color::rgb(12, 12, 12),
    Color::rgb(197, 15, 31),
    Color::rgb(19, 161, 14),
    Color::rgb(193, 156, 0),
    Color::rgb(0, 55, 218),
    Color::rgb(136, 23, 152),
    Color::rgb(58, 150, 221),
    Color::rgb(204, 204, 204),
    Color::rgb(118, 118, 118),
    Color::rgb(231, 72, 86),
    Color::rgb(22, 198, 12),
    Color::rgb(249, 241, 165),
    Color::rgb(59, 120, 255),
    Color::rgb(180, 0, 158),
    Color::rgb(97, 214, 214),
    Color::rgb(242, 242, 242),
];

pub const ANSI_TABLE_LEN: usize = 16;
pub const XTERM_TABLE_LEN: usize = 256;

// Channel intensities of the 6x6x6 xterm color cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Error raised when a color table has fewer entries than an operation fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableTooSmall {
    pub required: usize,
    pub actual: usize,
}

impl fmt::Display for TableTooSmall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "color table has {} entries, at least {} are required",
            self.actual, self.required
        )
    }
}

impl std::error::Error for TableTooSmall {}

fn require<T>(table: &[T], required: usize) -> Result<(), TableTooSmall> {
    if table.len() < required {
        return Err(TableTooSmall {
            required,
            actual: table.len(),
        });
    }
    Ok(())
}

/// Fills the first 16 entries with the Campbell scheme in ANSI/VT order.
pub fn initialize_campbell_color_table<T: From<Color>>(
    table: &mut [T],
) -> Result<(), TableTooSmall> {
    require(table, ANSI_TABLE_LEN)?;
    for (entry, color) in table.iter_mut().zip(CAMPBELL) {
        *entry = color.into();
    }
    Ok(())
}

/// Fills the first 16 entries with the Campbell scheme in the order the
/// Windows console uses.
pub fn initialize_campbell_color_table_for_conhost(
    table: &mut [Color],
) -> Result<(), TableTooSmall> {
    initialize_campbell_color_table(table)?;
    swap_ansi_color_order_for_conhost(table)
}

/// Converts the first 16 entries between ANSI/VT order and the Windows
/// console order. The two orders differ by exchanging the red and blue bit
/// of the index, so applying this twice restores the table.
pub fn swap_ansi_color_order_for_conhost<T>(table: &mut [T]) -> Result<(), TableTooSmall> {
    require(table, ANSI_TABLE_LEN)?;
    table.swap(1, 4);
    table.swap(3, 6);
    table.swap(9, 12);
    table.swap(11, 14);
    Ok(())
}

/// Fills the first 256 entries with the xterm 256 color palette: Campbell,
/// then the 6x6x6 color cube, then a 24 step grey ramp.
pub fn initialize_256_color_table<T: From<Color>>(table: &mut [T]) -> Result<(), TableTooSmall> {
    require(table, XTERM_TABLE_LEN)?;
    initialize_campbell_color_table(table)?;

    let cube = CUBE_LEVELS.into_iter().flat_map(|r| {
        CUBE_LEVELS
            .into_iter()
            .flat_map(move |g| CUBE_LEVELS.into_iter().map(move |b| Color::rgb(r, g, b)))
    });
    let greys = (0..24u8).map(|i| {
        let level = 8 + 10 * i;
        Color::rgb(level, level, level)
    });

    for (entry, color) in table[ANSI_TABLE_LEN..XTERM_TABLE_LEN]
        .iter_mut()
        .zip(cube.chain(greys))
    {
        *entry = color.into();
    }
    Ok(())
}

/// Sets the alpha byte of every entry to `alpha`, keeping the color channels.
pub fn set_color_table_alpha(table: &mut [Color], alpha: u8) {
    for color in table {
        *color = color.with_alpha(alpha);
    }
}
