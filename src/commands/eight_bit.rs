//! 8-bit palette command handler.
//!
//! Prints the 16 standard colors (through both the 8-bit and the 4-bit
//! attribute tables), the 6x6x6 RGB cube from three faces, and the
//! grayscale ramp, each as background colors under their own code labels.

use std::io::{self, Write};

use anyhow::Result;

use crate::attr::{AttrTables, Depth};
use crate::cli::EightBitArgs;
use crate::cuboid::{render_block, Block, Face, CUBE_SIDE, GRAYSCALE_LEN, STANDARD_LEN};

/// Row labels in front of the two standard strips.
const STANDARD_LABELS: [&str; 2] = ["8-bit", "4-bit"];

pub fn run(args: &EightBitArgs) -> Result<()> {
    super::check_output_medium(widest_row(args));

    let tables = AttrTables::build();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Standard and bright colors:")?;
    for (label, depth) in STANDARD_LABELS.iter().zip([Depth::EightBit, Depth::FourBit]) {
        write!(out, "{label} ")?;
        render_block(
            &mut out,
            &tables,
            Block::Standard,
            depth,
            args.std_width,
            args.decimal,
        )?;
    }

    for (title, face) in [
        ("RGB palette cube, front:", Face::Front),
        ("Top:", Face::Top),
        ("Left side:", Face::Side),
    ] {
        writeln!(out, "{title}")?;
        render_block(
            &mut out,
            &tables,
            Block::Cube(face),
            Depth::EightBit,
            args.rgb_width,
            args.decimal,
        )?;
    }

    writeln!(out, "Grayscale:")?;
    render_block(
        &mut out,
        &tables,
        Block::Grayscale,
        Depth::EightBit,
        args.gray_width,
        args.decimal,
    )?;
    Ok(())
}

/// Width of the widest row any block will print.
fn widest_row(args: &EightBitArgs) -> usize {
    let standard = "8-bit ".len() + STANDARD_LEN as usize * args.std_width;
    let cube = CUBE_SIDE as usize * args.rgb_width;
    let grayscale = GRAYSCALE_LEN as usize * args.gray_width;
    standard.max(cube).max(grayscale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widest_row_is_the_grayscale_strip_at_defaults() {
        let args = EightBitArgs {
            std_width: 7,
            rgb_width: 3,
            gray_width: 5,
            decimal: false,
        };
        // 16*7+6 = 118 for the standard strip, 24*5 = 120 for grayscale.
        assert_eq!(widest_row(&args), 120);
    }
}
