//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::attr::Weight;

/// Render the terminal's ANSI color theme as grids of labeled, colored
/// cells.
#[derive(Debug, Parser)]
#[command(name = "display-colors", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Display the 4-bit theme grid (the default)
    Theme(ThemeArgs),
    /// Display the 8-bit palette: standard colors, RGB cube, grayscale
    EightBit(EightBitArgs),
    /// Inspect the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Args, Default)]
pub struct ThemeArgs {
    /// Weight(s) to display; repeat for several, `all` expands to every one
    #[arg(short, long = "weight", value_enum)]
    pub weight: Vec<WeightArg>,

    /// Also render each combination in reverse video
    #[arg(long)]
    pub reverse_video: bool,

    /// Foreground across columns, with `fg/bg` labels inside the cells
    #[arg(long)]
    pub transpose: bool,

    /// Do not break the hue-label column between foreground stanzas
    #[arg(long)]
    pub no_stanzas: bool,

    /// Cell width in the row-major grid [config: cell_width]
    #[arg(long)]
    pub width: Option<usize>,

    /// Padding around cell labels in the transpose grid [config: padding]
    #[arg(long)]
    pub padding: Option<usize>,

    /// String delimiting output columns [config: gutter]
    #[arg(long)]
    pub gutter: Option<String>,

    /// Sample text in each cell [config: text]
    #[arg(long)]
    pub text: Option<String>,
}

#[derive(Debug, Args)]
pub struct EightBitArgs {
    /// Standard color cell width
    #[arg(long, default_value_t = 7)]
    pub std_width: usize,

    /// RGB cube cell width
    #[arg(long, default_value_t = 3)]
    pub rgb_width: usize,

    /// Grayscale cell width
    #[arg(long, default_value_t = 5)]
    pub gray_width: usize,

    /// Display palette codes in decimal [default: hex]
    #[arg(long)]
    pub decimal: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
}

/// Weight selection on the command line; `all` expands to the full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WeightArg {
    Dim,
    Default,
    Medium,
    Bold,
    All,
}

impl WeightArg {
    /// Resolve the repeated `--weight` flags into an ordered, deduplicated
    /// weight list. No flags means the standard pair (default, bold).
    pub fn resolve(args: &[WeightArg]) -> Vec<Weight> {
        if args.is_empty() {
            return Weight::STANDARD.to_vec();
        }
        fn push(weight: Weight, weights: &mut Vec<Weight>) {
            if !weights.contains(&weight) {
                weights.push(weight);
            }
        }

        let mut weights = Vec::new();
        for arg in args {
            match arg {
                WeightArg::Dim => push(Weight::Dim, &mut weights),
                WeightArg::Default => push(Weight::Default, &mut weights),
                WeightArg::Medium => push(Weight::Medium, &mut weights),
                WeightArg::Bold => push(Weight::Bold, &mut weights),
                WeightArg::All => {
                    for weight in Weight::ALL {
                        push(weight, &mut weights);
                    }
                }
            }
        }
        weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_weight_flags_means_the_standard_pair() {
        assert_eq!(
            WeightArg::resolve(&[]),
            vec![Weight::Default, Weight::Bold]
        );
    }

    #[test]
    fn all_expands_to_every_weight_in_order() {
        assert_eq!(WeightArg::resolve(&[WeightArg::All]), Weight::ALL.to_vec());
    }

    #[test]
    fn repeated_weights_are_deduplicated_in_request_order() {
        let resolved = WeightArg::resolve(&[
            WeightArg::Bold,
            WeightArg::Dim,
            WeightArg::Bold,
            WeightArg::All,
        ]);
        assert_eq!(
            resolved,
            vec![Weight::Bold, Weight::Dim, Weight::Default, Weight::Medium]
        );
    }

    #[test]
    fn theme_args_parse_repeatable_weights() {
        let cli = Cli::try_parse_from(["display-colors", "theme", "-w", "dim", "-w", "bold"])
            .unwrap();
        match cli.command {
            Some(Command::Theme(args)) => {
                assert_eq!(args.weight, vec![WeightArg::Dim, WeightArg::Bold]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn invalid_weight_value_is_rejected() {
        assert!(Cli::try_parse_from(["display-colors", "theme", "-w", "heavy"]).is_err());
    }
}
