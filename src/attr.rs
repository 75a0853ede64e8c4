//! Static SGR attribute tables.
//!
//! Maps symbolic color reprs (`"bk"`, `"RE"`, `"df"`, ...) and raw 8-bit
//! palette codes to the numeric SGR parameters that select them, for both
//! the 4-bit and the 8-bit color space. The tables are built once at startup
//! by [`AttrTables::build`] and passed around read-only.

use std::collections::HashMap;

use crate::error::AttrError;

/// SGR parameter bases for the 4-bit color space.
const FG_4_BIT_OFFSET: u16 = 30;
const BG_4_BIT_OFFSET: u16 = 40;
const DEFAULT_FG_4_BIT: u16 = 39;
const DEFAULT_BG_4_BIT: u16 = 49;
const BRIGHT_FG_4_BIT_OFFSET: u16 = 90;
const BRIGHT_BG_4_BIT_OFFSET: u16 = 100;

/// 8-bit palette indices of the named colors.
const NORMAL_8_BIT_OFFSET: u16 = 0;
const BRIGHT_8_BIT_OFFSET: u16 = 8;

/// SGR prefixes selecting an 8-bit palette entry.
pub const FG_8_BIT_PREFIX: &str = "38;5;";
pub const BG_8_BIT_PREFIX: &str = "48;5;";

/// Total number of 8-bit palette entries.
pub const PALETTE_SIZE: u16 = 256;

/// First palette code past the 16 standard colors (start of the RGB cube).
pub const CUBE_OFFSET: u16 = 16;

/// Repr of the `default` pseudo-color. Never bright, never a hue: it always
/// selects the dedicated SGR 39/49 codes.
pub const DEFAULT_REPR: &str = "df";

/// The eight base hues, in standard ANSI order.
pub const HUES: [Hue; 8] = [
    Hue::Black,
    Hue::Red,
    Hue::Green,
    Hue::Yellow,
    Hue::Blue,
    Hue::Magenta,
    Hue::Cyan,
    Hue::White,
];

/// One of the eight named ANSI hues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hue {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Hue {
    /// Two-letter lowercase repr, the key for the normal-intensity color.
    pub fn repr(self) -> &'static str {
        match self {
            Hue::Black => "bk",
            Hue::Red => "re",
            Hue::Green => "gr",
            Hue::Yellow => "ye",
            Hue::Blue => "bl",
            Hue::Magenta => "ma",
            Hue::Cyan => "cy",
            Hue::White => "wh",
        }
    }

    /// Uppercase repr, the key for the bright variant of the hue.
    pub fn bright_repr(self) -> &'static str {
        match self {
            Hue::Black => "BK",
            Hue::Red => "RE",
            Hue::Green => "GR",
            Hue::Yellow => "YE",
            Hue::Blue => "BL",
            Hue::Magenta => "MA",
            Hue::Cyan => "CY",
            Hue::White => "WH",
        }
    }
}

/// Font weight attribute, distinct from color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Dim,
    Default,
    Medium,
    Bold,
}

impl Weight {
    /// The weights shown when none are requested.
    pub const STANDARD: [Weight; 2] = [Weight::Default, Weight::Bold];

    /// Every weight, in display order.
    pub const ALL: [Weight; 4] = [Weight::Dim, Weight::Default, Weight::Medium, Weight::Bold];

    /// SGR code selecting this weight.
    pub fn attr(self) -> &'static str {
        match self {
            Weight::Dim => "2",
            Weight::Default => "0",
            Weight::Medium => "22",
            Weight::Bold => "1",
        }
    }

    /// Three-letter label used in the grid header column.
    pub fn abbrev(self) -> &'static str {
        match self {
            Weight::Dim => "Dim",
            Weight::Default => "Def",
            Weight::Medium => "Med",
            Weight::Bold => "Bld",
        }
    }
}

/// Which color space an attribute lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    FourBit,
    EightBit,
}

/// The read-only lookup tables every display draws from.
///
/// 4-bit tables are keyed by repr only. 8-bit tables carry the reprs for
/// palette entries 0-15 plus the raw codes `"16"` through `"255"` for the
/// RGB cube and the grayscale ramp.
#[derive(Debug)]
pub struct AttrTables {
    fg4: HashMap<String, String>,
    bg4: HashMap<String, String>,
    fg8: HashMap<String, String>,
    bg8: HashMap<String, String>,
}

impl AttrTables {
    /// Build every table. Called once at startup; the result is never
    /// mutated afterwards.
    pub fn build() -> Self {
        let mut fg4 = HashMap::new();
        let mut bg4 = HashMap::new();
        let mut fg8 = HashMap::new();
        let mut bg8 = HashMap::new();

        fg4.insert(DEFAULT_REPR.to_string(), DEFAULT_FG_4_BIT.to_string());
        bg4.insert(DEFAULT_REPR.to_string(), DEFAULT_BG_4_BIT.to_string());

        for (i, hue) in HUES.iter().enumerate() {
            let i = i as u16;
            fg4.insert(hue.repr().to_string(), (FG_4_BIT_OFFSET + i).to_string());
            bg4.insert(hue.repr().to_string(), (BG_4_BIT_OFFSET + i).to_string());
            fg4.insert(
                hue.bright_repr().to_string(),
                (BRIGHT_FG_4_BIT_OFFSET + i).to_string(),
            );
            bg4.insert(
                hue.bright_repr().to_string(),
                (BRIGHT_BG_4_BIT_OFFSET + i).to_string(),
            );

            fg8.insert(
                hue.repr().to_string(),
                format!("{FG_8_BIT_PREFIX}{}", NORMAL_8_BIT_OFFSET + i),
            );
            bg8.insert(
                hue.repr().to_string(),
                format!("{BG_8_BIT_PREFIX}{}", NORMAL_8_BIT_OFFSET + i),
            );
            fg8.insert(
                hue.bright_repr().to_string(),
                format!("{FG_8_BIT_PREFIX}{}", BRIGHT_8_BIT_OFFSET + i),
            );
            bg8.insert(
                hue.bright_repr().to_string(),
                format!("{BG_8_BIT_PREFIX}{}", BRIGHT_8_BIT_OFFSET + i),
            );
        }

        // RGB cube and grayscale ramp entries are keyed by their own code.
        for code in CUBE_OFFSET..PALETTE_SIZE {
            fg8.insert(code.to_string(), format!("{FG_8_BIT_PREFIX}{code}"));
            bg8.insert(code.to_string(), format!("{BG_8_BIT_PREFIX}{code}"));
        }

        Self { fg4, bg4, fg8, bg8 }
    }

    /// SGR parameter selecting `repr` as the foreground at `depth`.
    pub fn fg(&self, repr: &str, depth: Depth) -> Result<&str, AttrError> {
        let table = match depth {
            Depth::FourBit => &self.fg4,
            Depth::EightBit => &self.fg8,
        };
        table
            .get(repr)
            .map(String::as_str)
            .ok_or_else(|| AttrError::UnknownForeground {
                repr: repr.to_string(),
            })
    }

    /// SGR parameter selecting `repr` as the background at `depth`.
    pub fn bg(&self, repr: &str, depth: Depth) -> Result<&str, AttrError> {
        let table = match depth {
            Depth::FourBit => &self.bg4,
            Depth::EightBit => &self.bg8,
        };
        table
            .get(repr)
            .map(String::as_str)
            .ok_or_else(|| AttrError::UnknownBackground {
                repr: repr.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fg_bg_offset_difference_is_constant() {
        let tables = AttrTables::build();
        for hue in HUES {
            for repr in [hue.repr(), hue.bright_repr()] {
                let fg: i32 = tables.fg(repr, Depth::FourBit).unwrap().parse().unwrap();
                let bg: i32 = tables.bg(repr, Depth::FourBit).unwrap().parse().unwrap();
                assert_eq!(fg - bg, -10, "offset mismatch for {repr}");
            }
        }
    }

    #[test]
    fn default_maps_to_dedicated_codes() {
        let tables = AttrTables::build();
        assert_eq!(tables.fg("df", Depth::FourBit).unwrap(), "39");
        assert_eq!(tables.bg("df", Depth::FourBit).unwrap(), "49");
    }

    #[test]
    fn four_bit_codes_follow_ansi_order() {
        let tables = AttrTables::build();
        assert_eq!(tables.fg("bk", Depth::FourBit).unwrap(), "30");
        assert_eq!(tables.fg("wh", Depth::FourBit).unwrap(), "37");
        assert_eq!(tables.fg("BK", Depth::FourBit).unwrap(), "90");
        assert_eq!(tables.bg("WH", Depth::FourBit).unwrap(), "107");
    }

    #[test]
    fn eight_bit_reprs_cover_the_first_sixteen_entries() {
        let tables = AttrTables::build();
        assert_eq!(tables.fg("bk", Depth::EightBit).unwrap(), "38;5;0");
        assert_eq!(tables.bg("wh", Depth::EightBit).unwrap(), "48;5;7");
        assert_eq!(tables.fg("BK", Depth::EightBit).unwrap(), "38;5;8");
        assert_eq!(tables.bg("WH", Depth::EightBit).unwrap(), "48;5;15");
    }

    #[test]
    fn eight_bit_palette_codes_map_to_themselves() {
        let tables = AttrTables::build();
        assert_eq!(tables.fg("16", Depth::EightBit).unwrap(), "38;5;16");
        assert_eq!(tables.bg("231", Depth::EightBit).unwrap(), "48;5;231");
        assert_eq!(tables.bg("255", Depth::EightBit).unwrap(), "48;5;255");
    }

    #[test]
    fn unknown_repr_fails_lookup() {
        let tables = AttrTables::build();
        assert!(tables.fg("zz", Depth::FourBit).is_err());
        // The default pseudo-color has no bright variant.
        assert!(tables.fg("DF", Depth::FourBit).is_err());
        // Numeric keys below the cube offset do not exist; those entries
        // are reachable through their reprs only.
        assert!(tables.bg("3", Depth::EightBit).is_err());
        assert!(tables.bg("256", Depth::EightBit).is_err());
    }
}
