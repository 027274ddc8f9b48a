use crate::canvas::{Limits, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

/// Upper bound for `--max-width` and `--max-height`.
pub const MAX_LIMIT: i64 = 1000;

/// Draw lines, rectangles and bucket fills on a text canvas.
///
/// Commands: `C w h`, `L x1 y1 x2 y2`, `R x1 y1 x2 y2`, `B x y c`, `Q`.
#[derive(Debug, Parser)]
#[command(name = "textcanvas", version)]
pub struct Config {
    /// Read commands from this file instead of standard input
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Widest canvas that may be created
    #[arg(long, default_value_t = DEFAULT_MAX_WIDTH as u16, value_parser = clap::value_parser!(u16).range(1..=MAX_LIMIT))]
    pub max_width: u16,

    /// Tallest canvas that may be created
    #[arg(long, default_value_t = DEFAULT_MAX_HEIGHT as u16, value_parser = clap::value_parser!(u16).range(1..=MAX_LIMIT))]
    pub max_height: u16,

    /// Never colour error messages
    #[arg(long)]
    pub no_color: bool,

    /// Clear the screen before each canvas is printed
    #[arg(long)]
    pub clear: bool,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn limits(&self) -> Limits {
        Limits {
            max_width: usize::from(self.max_width),
            max_height: usize::from(self.max_height),
        }
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Config::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["textcanvas"]).expect("should parse");
        assert_eq!(config.limits(), Limits::default());
        assert_eq!(config.log_level(), Level::WARN);
        assert!(config.script.is_none());
        assert!(!config.no_color);
        assert!(!config.clear);
    }

    #[test]
    fn test_overrides() {
        let config = Config::try_parse_from([
            "textcanvas",
            "--script",
            "drawing.txt",
            "--max-width",
            "80",
            "--max-height",
            "24",
            "--no-color",
            "-vv",
        ])
        .expect("should parse");
        assert_eq!(config.script, Some(PathBuf::from("drawing.txt")));
        assert_eq!(
            config.limits(),
            Limits {
                max_width: 80,
                max_height: 24
            }
        );
        assert!(config.no_color);
        assert_eq!(config.log_level(), Level::DEBUG);
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        assert!(Config::try_parse_from(["textcanvas", "--max-width", "0"]).is_err());
        assert!(Config::try_parse_from(["textcanvas", "--max-height", "-3"]).is_err());
    }

    #[test]
    fn test_limits_are_capped() {
        assert!(Config::try_parse_from(["textcanvas", "--max-width", "1000"]).is_ok());
        assert!(Config::try_parse_from(["textcanvas", "--max-width", "1001"]).is_err());
        assert!(Config::try_parse_from(["textcanvas", "--max-height", "65535"]).is_err());
    }
}
