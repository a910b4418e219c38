use std::path::PathBuf;

use clap::Parser;

/// Column that drives sorting, plotting and reporting.
pub const PROPORTION_COLUMN: &str = "proportion";

/// Sort a CSV file by its `proportion` column, plot it and print the smallest values.
#[derive(Debug, Clone, Parser)]
#[command(name = "proportion-plot", version, about)]
pub struct Config {
    /// Input CSV with a header row.
    #[arg(default_value = "output.csv")]
    pub input: PathBuf,

    /// Do not open the plot window.
    #[arg(long)]
    pub headless: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("output.csv"),
            headless: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_reads_output_csv() {
        let config = Config::try_parse_from(["proportion-plot"]).unwrap();
        assert_eq!(config.input, PathBuf::from("output.csv"));
        assert!(!config.headless);
    }

    #[test]
    fn path_and_headless_flag() {
        let config =
            Config::try_parse_from(["proportion-plot", "--headless", "data/rings.csv"]).unwrap();
        assert_eq!(config.input, PathBuf::from("data/rings.csv"));
        assert!(config.headless);
    }
}
