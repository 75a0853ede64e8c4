//! Grid composition for the 4-bit theme displays.
//!
//! Every column is precomputed as an equal-length vector of rendered cells;
//! [`compose`] then advances all of them in lockstep, one cell per column
//! per output row. Header columns are separated by single spaces, data
//! columns by the configurable gutter.

use std::io::{self, Write};

use crate::attr::{AttrTables, Depth, Weight};
use crate::cell::{blank_cell, cell_text, colored_cell, create_attrs, neutral_attrs, REV_VIDEO};
use crate::combo::{combinations, palette_reprs, Combo};
use crate::error::{AttrError, RenderError};

/// Width of the hue-label header column (`"df"`, `"BK"`, ...).
pub const HUE_COL_WIDTH: usize = 2;

/// Width of the weight-abbreviation header column (`"Def"`, `"Bld"`, ...).
pub const WEIGHT_COL_WIDTH: usize = 3;

/// Width of the raw-attribute header column; the widest code is `22;97;7m`.
pub const CODE_COL_WIDTH: usize = 8;

/// Visible label template of a transpose-mode cell (`fg/bg` with two-letter
/// reprs on both sides).
pub const TRANSPOSE_LABEL_WIDTH: usize = "XX/XX".len();

/// Options shared by both theme layouts.
#[derive(Debug, Clone)]
pub struct GridOptions {
    /// Weights iterated beneath every color, in display order.
    pub weights: Vec<Weight>,
    /// Add a reverse-video twin beneath every row.
    pub reverse_video: bool,
    /// Break the hue-label column between foreground stanzas.
    pub stanzas: bool,
    /// Cell width in the row-major layout.
    pub cell_width: usize,
    /// Padding added to the `fg/bg` label in the transpose layout.
    pub padding: usize,
    /// String printed after each data cell.
    pub gutter: String,
    /// Sample text rendered in each row-major cell.
    pub text: String,
}

/// Row-major theme grid: foreground varies down the rows, background across
/// the 17 data columns. Three header columns label each row with its hue,
/// weight, and raw attribute code; the top header row shows each
/// background's code.
pub fn render_theme<W: Write>(
    out: &mut W,
    tables: &AttrTables,
    opts: &GridOptions,
) -> Result<(), RenderError> {
    let combos = combinations(&opts.weights, opts.reverse_video);

    let mut hue_col = vec![blank_cell(tables, HUE_COL_WIDTH)?];
    hue_col.extend(hue_cells(tables, &combos, opts.stanzas)?);
    let mut weight_col = vec![blank_cell(tables, WEIGHT_COL_WIDTH)?];
    weight_col.extend(weight_cells(tables, &combos)?);
    let mut code_col = vec![blank_cell(tables, CODE_COL_WIDTH)?];
    code_col.extend(code_cells(tables, &combos)?);

    let mut columns = Vec::new();
    for bg_repr in palette_reprs() {
        let mut column = vec![top_header_cell(tables, bg_repr, opts.cell_width)?];
        column.extend(data_cells(
            tables,
            bg_repr,
            &combos,
            &opts.text,
            opts.cell_width,
        )?);
        columns.push(column);
    }

    compose(out, &[hue_col, weight_col, code_col], &columns, &opts.gutter)?;
    Ok(())
}

/// Transpose theme grid: foreground varies across the 17 columns instead,
/// and each cell carries its own `fg/bg` label, so only the
/// weight-abbreviation header column remains.
pub fn render_transpose<W: Write>(
    out: &mut W,
    tables: &AttrTables,
    opts: &GridOptions,
) -> Result<(), RenderError> {
    // Here the combo repr plays the background role.
    let combos = combinations(&opts.weights, opts.reverse_video);
    let width = TRANSPOSE_LABEL_WIDTH + opts.padding;

    let weight_col = weight_cells(tables, &combos)?;
    let mut columns = Vec::new();
    for fg_repr in palette_reprs() {
        columns.push(label_cells(tables, fg_repr, &combos, width)?);
    }

    compose(out, &[weight_col], &columns, &opts.gutter)?;
    Ok(())
}

/// Write one output row per index until the columns are exhausted. All
/// columns are built to the same length; the minimum guards against a
/// mismatched producer.
pub fn compose<W: Write>(
    out: &mut W,
    headers: &[Vec<String>],
    columns: &[Vec<String>],
    gutter: &str,
) -> io::Result<()> {
    let rows = headers
        .iter()
        .chain(columns)
        .map(Vec::len)
        .min()
        .unwrap_or(0);
    for row in 0..rows {
        for header in headers {
            write!(out, "{} ", header[row])?;
        }
        for column in columns {
            write!(out, "{}{}", column[row], gutter)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Hue-label cells: the repr on the first row of each stanza, blanks on the
/// rest. With stanzas enabled, a newline is spliced in front of every repr
/// after the first, visually separating the hues.
fn hue_cells(
    tables: &AttrTables,
    combos: &[Combo],
    stanzas: bool,
) -> Result<Vec<String>, AttrError> {
    let neutral = neutral_attrs(tables, false)?;
    let mut cells = Vec::with_capacity(combos.len());
    let mut prev: Option<&str> = None;
    for combo in combos {
        if prev == Some(combo.repr) {
            cells.push(blank_cell(tables, HUE_COL_WIDTH)?);
        } else {
            let prefix = if stanzas && prev.is_some() { "\n" } else { "" };
            cells.push(colored_cell(&neutral, &format!("{prefix}{}", combo.repr)));
            prev = Some(combo.repr);
        }
    }
    Ok(cells)
}

/// Weight-abbreviation cells. The label itself renders in reverse video on
/// reverse rows, making the toggle visible in the header.
fn weight_cells(tables: &AttrTables, combos: &[Combo]) -> Result<Vec<String>, AttrError> {
    combos
        .iter()
        .map(|combo| {
            let attrs = neutral_attrs(tables, combo.reverse)?;
            Ok(colored_cell(&attrs, combo.weight.abbrev()))
        })
        .collect()
}

/// Raw-attribute cells: the literal `{weight};{fg}[;7]m` parameter text of
/// the row, right-justified.
fn code_cells(tables: &AttrTables, combos: &[Combo]) -> Result<Vec<String>, AttrError> {
    let neutral = neutral_attrs(tables, false)?;
    combos
        .iter()
        .map(|combo| {
            let reverse = if combo.reverse {
                format!(";{REV_VIDEO}")
            } else {
                String::new()
            };
            let code = format!(
                "{};{}{reverse}m",
                combo.weight.attr(),
                tables.fg(combo.repr, Depth::FourBit)?
            );
            Ok(colored_cell(
                &neutral,
                &format!("{code:>width$}", width = CODE_COL_WIDTH),
            ))
        })
        .collect()
}

/// Top header cell of a data column: the background's own SGR code.
fn top_header_cell(
    tables: &AttrTables,
    bg_repr: &str,
    width: usize,
) -> Result<String, AttrError> {
    let neutral = neutral_attrs(tables, false)?;
    let text = format!("{}m", tables.bg(bg_repr, Depth::FourBit)?);
    Ok(colored_cell(&neutral, &cell_text(&text, width)))
}

/// Data cells of one background column in the row-major layout.
fn data_cells(
    tables: &AttrTables,
    bg_repr: &str,
    combos: &[Combo],
    text: &str,
    width: usize,
) -> Result<Vec<String>, AttrError> {
    combos
        .iter()
        .map(|combo| {
            let attrs = create_attrs(
                tables,
                combo.weight,
                combo.repr,
                bg_repr,
                combo.reverse,
                Depth::FourBit,
            )?;
            Ok(colored_cell(&attrs, &cell_text(text, width)))
        })
        .collect()
}

/// Data cells of one foreground column in the transpose layout: the cell
/// text is the `fg/bg` pairing itself, in logical (unswapped) order even on
/// reverse rows.
fn label_cells(
    tables: &AttrTables,
    fg_repr: &str,
    combos: &[Combo],
    width: usize,
) -> Result<Vec<String>, AttrError> {
    combos
        .iter()
        .map(|combo| {
            let attrs = create_attrs(
                tables,
                combo.weight,
                fg_repr,
                combo.repr,
                combo.reverse,
                Depth::FourBit,
            )?;
            let label = format!("{fg_repr}/{}", combo.repr);
            Ok(colored_cell(&attrs, &cell_text(&label, width)))
        })
        .collect()
}
