//! Theme grid command handler.

use std::io;

use anyhow::Result;

use crate::attr::AttrTables;
use crate::cli::{ThemeArgs, WeightArg};
use crate::combo::palette_reprs;
use crate::config::Config;
use crate::grid::{
    self, GridOptions, CODE_COL_WIDTH, HUE_COL_WIDTH, TRANSPOSE_LABEL_WIDTH, WEIGHT_COL_WIDTH,
};

/// Render the 4-bit theme grid to stdout, row-major or transposed.
pub fn run(args: &ThemeArgs) -> Result<()> {
    let config = Config::load()?;
    let opts = GridOptions {
        weights: WeightArg::resolve(&args.weight),
        reverse_video: args.reverse_video,
        stanzas: !args.no_stanzas,
        cell_width: args.width.unwrap_or(config.cell_width),
        padding: args.padding.unwrap_or(config.padding),
        gutter: args.gutter.clone().unwrap_or(config.gutter),
        text: args.text.clone().unwrap_or(config.text),
    };
    super::check_output_medium(row_width(&opts, args.transpose));

    let tables = AttrTables::build();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.transpose {
        grid::render_transpose(&mut out, &tables, &opts)?;
    } else {
        grid::render_theme(&mut out, &tables, &opts)?;
    }
    Ok(())
}

/// Printable width of one grid row, for the terminal-width check.
fn row_width(opts: &GridOptions, transpose: bool) -> usize {
    let cols = palette_reprs().len();
    if transpose {
        let cell = TRANSPOSE_LABEL_WIDTH + opts.padding;
        WEIGHT_COL_WIDTH + 1 + cols * (cell + opts.gutter.len())
    } else {
        let headers = HUE_COL_WIDTH + 1 + WEIGHT_COL_WIDTH + 1 + CODE_COL_WIDTH + 1;
        headers + cols * (opts.cell_width + opts.gutter.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::Weight;

    fn options() -> GridOptions {
        GridOptions {
            weights: Weight::STANDARD.to_vec(),
            reverse_video: false,
            stanzas: true,
            cell_width: 7,
            padding: 2,
            gutter: String::new(),
            text: "gYw".to_string(),
        }
    }

    #[test]
    fn row_major_width_counts_headers_and_17_columns() {
        assert_eq!(row_width(&options(), false), 2 + 1 + 3 + 1 + 8 + 1 + 17 * 7);
    }

    #[test]
    fn transpose_width_counts_the_weight_header_and_labels() {
        assert_eq!(row_width(&options(), true), 3 + 1 + 17 * 7);
    }

    #[test]
    fn gutter_widens_every_column() {
        let mut opts = options();
        opts.gutter = "  ".to_string();
        assert_eq!(
            row_width(&opts, false),
            2 + 1 + 3 + 1 + 8 + 1 + 17 * (7 + 2)
        );
    }
}
