//! Cell rendering primitives.
//!
//! A cell is the unit everything else composes: sample text centered in a
//! fixed-width field, wrapped in an SGR escape prefix and a trailing reset.
//! Cells are built as plain strings and printed immediately, never stored.

use unicode_width::UnicodeWidthStr;

use crate::attr::{AttrTables, Depth, Weight, DEFAULT_REPR};
use crate::error::AttrError;

/// Escape sequence delimiters for SGR parameters.
pub const SGR_BEG: &str = "\x1b[";
pub const SGR_END: &str = "m";

/// SGR code resetting all attributes.
pub const RESET: &str = "0";

/// SGR code enabling reverse video.
pub const REV_VIDEO: &str = "7";

/// Wrap `text` with the SGR prefix for `attrs` and a trailing reset.
pub fn colored_cell(attrs: &str, text: &str) -> String {
    format!("{SGR_BEG}{attrs}{SGR_END}{text}{SGR_BEG}{RESET}{SGR_END}")
}

/// Center `text` in a field of `width` columns.
///
/// Widths are display widths, not byte counts. When the padding is odd the
/// extra space goes to the right. Text wider than the field is returned
/// unchanged.
pub fn cell_text(text: &str, width: usize) -> String {
    let visible = text.width();
    if visible >= width {
        return text.to_string();
    }
    let pad = width - visible;
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

/// Attribute string for one cell: weight, foreground, background.
///
/// Under reverse video the two grounds swap and SGR 7 is appended, so the
/// terminal shows the same pairing while reporting the swapped attributes.
pub fn create_attrs(
    tables: &AttrTables,
    weight: Weight,
    fg_repr: &str,
    bg_repr: &str,
    reverse: bool,
    depth: Depth,
) -> Result<String, AttrError> {
    let (fg, bg) = if reverse {
        (bg_repr, fg_repr)
    } else {
        (fg_repr, bg_repr)
    };
    let mut attrs = format!(
        "{};{};{}",
        weight.attr(),
        tables.fg(fg, depth)?,
        tables.bg(bg, depth)?
    );
    if reverse {
        attrs.push(';');
        attrs.push_str(REV_VIDEO);
    }
    Ok(attrs)
}

/// Neutral attribute string: default weight on default grounds, optionally
/// reverse-video. Header cells render under this.
pub fn neutral_attrs(tables: &AttrTables, reverse: bool) -> Result<String, AttrError> {
    create_attrs(
        tables,
        Weight::Default,
        DEFAULT_REPR,
        DEFAULT_REPR,
        reverse,
        Depth::FourBit,
    )
}

/// A whitespace placeholder cell of `width` columns under the neutral
/// attribute, used to keep skipped header rows aligned.
pub fn blank_cell(tables: &AttrTables, width: usize) -> Result<String, AttrError> {
    Ok(colored_cell(&neutral_attrs(tables, false)?, &" ".repeat(width)))
}
