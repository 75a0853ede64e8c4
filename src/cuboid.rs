//! 8-bit palette cuboid rendering.
//!
//! Each 8-bit palette block is treated as a cuboid of points. A point's
//! palette code is its base-N positional encoding (`x + side*y + side^2*z`)
//! plus the block's starting code; the RGB cube is shown from three faces by
//! permuting which axis feeds which digit. The standard colors and the
//! grayscale ramp are 1x1xN strips of the same machinery.

use std::io::Write;

use crate::attr::{AttrTables, Depth, Hue, CUBE_OFFSET, HUES};
use crate::cell::{cell_text, colored_cell};
use crate::error::{AttrError, RenderError};

/// Side length of the 6x6x6 RGB cube.
pub const CUBE_SIDE: u16 = 6;

/// First code and length of the standard/bright strip.
pub const STANDARD_OFFSET: u16 = 0;
pub const STANDARD_LEN: u16 = 16;

/// First code and length of the grayscale ramp.
pub const GRAYSCALE_OFFSET: u16 = 232;
pub const GRAYSCALE_LEN: u16 = 24;

/// A coordinate inside a palette block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: u16,
    pub y: u16,
    pub z: u16,
}

/// Compose base-`base` digits into a linear value: `x + base*y + base^2*z`.
pub fn base_n(base: u16, x: u16, y: u16, z: u16) -> u16 {
    x + base * y + base * base * z
}

/// Split a linear value back into base-`base` digits. Inverse of [`base_n`]
/// for values below `base^3`.
pub fn decode_base_n(base: u16, value: u16) -> (u16, u16, u16) {
    (value % base, (value / base) % base, value / (base * base))
}

/// Which face of the RGB cube is toward the viewer, i.e. which axes feed
/// the positional encoding in which order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Front,
    Top,
    Side,
}

impl Face {
    /// Palette code at a cube point viewed from this face.
    pub fn encode(self, p: Point) -> u16 {
        let linear = match self {
            Face::Front => base_n(CUBE_SIDE, p.x, p.y, p.z),
            Face::Top => base_n(CUBE_SIDE, p.x, p.z, p.y),
            Face::Side => base_n(CUBE_SIDE, p.z, p.y, p.x),
        };
        linear + CUBE_OFFSET
    }
}

/// One renderable palette block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// The 16 standard and bright colors, as a strip.
    Standard,
    /// The 6x6x6 RGB cube, viewed from one face.
    Cube(Face),
    /// The 24-step grayscale ramp, as a strip.
    Grayscale,
}

impl Block {
    /// Extent of the block's point lattice.
    pub fn extent(self) -> Point {
        match self {
            Block::Standard => Point {
                x: STANDARD_LEN,
                y: 1,
                z: 1,
            },
            Block::Cube(_) => Point {
                x: CUBE_SIDE,
                y: CUBE_SIDE,
                z: CUBE_SIDE,
            },
            Block::Grayscale => Point {
                x: GRAYSCALE_LEN,
                y: 1,
                z: 1,
            },
        }
    }

    /// First palette code of the block.
    pub fn offset(self) -> u16 {
        match self {
            Block::Standard => STANDARD_OFFSET,
            Block::Cube(_) => CUBE_OFFSET,
            Block::Grayscale => GRAYSCALE_OFFSET,
        }
    }

    /// Palette code at a point of this block.
    pub fn code(self, p: Point) -> u16 {
        match self {
            Block::Standard | Block::Grayscale => self.offset() + p.x,
            Block::Cube(face) => face.encode(p),
        }
    }

    /// Half the discriminant period: the legible foreground flips every
    /// `half` codes past the block's offset.
    fn half(self) -> u16 {
        match self {
            Block::Standard => STANDARD_LEN / 2,
            Block::Cube(_) => CUBE_SIDE * CUBE_SIDE / 2,
            Block::Grayscale => GRAYSCALE_LEN / 2,
        }
    }

    /// True when the point sits in a light band of the block, calling for
    /// black text instead of bright white.
    pub fn light(self, p: Point) -> bool {
        ((self.code(p) - self.offset()) / self.half()) % 2 == 1
    }
}

/// Foreground attribute keeping the code text legible: black over light
/// bands, bright white over dark ones.
fn legible_fg(
    tables: &AttrTables,
    block: Block,
    p: Point,
    depth: Depth,
) -> Result<&str, AttrError> {
    let repr = if block.light(p) {
        Hue::Black.repr()
    } else {
        Hue::White.bright_repr()
    };
    tables.fg(repr, depth)
}

/// Background attribute for a palette code. Codes 0-15 resolve through the
/// named-color reprs (hue = code mod 8, bright = code div 8), which also
/// lets the standard strip render at 4-bit depth; everything above resolves
/// through the numeric 8-bit keys.
fn palette_bg(tables: &AttrTables, code: u16, depth: Depth) -> Result<&str, AttrError> {
    if code < STANDARD_LEN {
        let hue = HUES[(code % 8) as usize];
        let repr = if code >= 8 {
            hue.bright_repr()
        } else {
            hue.repr()
        };
        tables.bg(repr, depth)
    } else {
        tables.bg(&code.to_string(), depth)
    }
}

/// Render one block: x runs innermost along a row, a row break follows each
/// fixed-z run, and a blank separator line follows each fixed-y slab.
pub fn render_block<W: Write>(
    out: &mut W,
    tables: &AttrTables,
    block: Block,
    depth: Depth,
    width: usize,
    decimal: bool,
) -> Result<(), RenderError> {
    let extent = block.extent();
    for y in 0..extent.y {
        for z in 0..extent.z {
            for x in 0..extent.x {
                let p = Point { x, y, z };
                let code = block.code(p);
                let text = if decimal {
                    format!("{code}")
                } else {
                    format!("{code:X}")
                };
                let attrs = format!(
                    "{};{}",
                    legible_fg(tables, block, p, depth)?,
                    palette_bg(tables, code, depth)?
                );
                write!(out, "{}", colored_cell(&attrs, &cell_text(&text, width)))?;
            }
            writeln!(out)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
