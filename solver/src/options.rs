use std::env;
use std::iter::Peekable;
use std::num::NonZero;
use std::str::FromStr;

use log::LevelFilter;
use tourtree::{Dimension, Location, TourMode};

/// Runtime options for a demo run of both solvers.
#[derive(Clone, Debug)]
pub struct SolverOptions {
    /// Side length of the tour board.
    pub size: Dimension,
    /// Start square of the tour.
    pub start: Location,
    /// Whether the tour must be closed.
    pub mode: TourMode,
    /// Comma-separated integers for the subsequence tree.
    pub sequence: String,
    /// Print the whole subsequence tree, not just its longest path.
    pub print_tree: bool,
    /// Logging level for the library and this binary.
    pub log_level: LevelFilter,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            size: NonZero::new(8).unwrap(),
            start: Location(0, 0),
            mode: TourMode::Open,
            sequence: "4, 1, 13, 7, 0, 2, 8, 11, 3".to_string(),
            print_tree: true,
            log_level: LevelFilter::Info,
        }
    }
}

impl SolverOptions {
    pub fn from_args() -> Result<Self, String> {
        Self::parse_from_iter(env::args().skip(1))
    }

    pub fn parse_from_iter(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut options = Self::default();
        let mut args = args.into_iter().peekable();

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Self::usage().to_string());
            }

            let Some(raw_name) = arg.strip_prefix("--") else {
                return Err(format!("Unexpected argument: {arg}\n\n{}", Self::usage()));
            };

            let (name, value) = split_arg(raw_name, &mut args);

            match name.as_str() {
                "size" => {
                    options.size = parse_value::<NonZero<usize>>(&name, value)?;
                }
                "start" => {
                    options.start = parse_location(&name, value)?;
                }
                "mode" => {
                    options.mode = parse_value::<TourMode>(&name, value)?;
                }
                "sequence" => {
                    options.sequence = value.ok_or_else(|| format!("Missing value for --{name}"))?;
                }
                "no-tree" => {
                    if value.is_some() {
                        return Err(format!("Flag --{name} does not take a value"));
                    }
                    options.print_tree = false;
                }
                "log-level" => {
                    options.log_level = parse_value::<LevelFilter>(&name, value)?;
                }
                _ => {
                    return Err(format!("Unknown option: --{name}\n\n{}", Self::usage()));
                }
            }
        }

        Ok(options)
    }

    pub fn usage() -> &'static str {
        concat!(
            "Usage:\n",
            "  solver [options]\n\n",
            "Options:\n",
            "  --size <usize>              board side length (default 8)\n",
            "  --start <x,y>               tour start square (default 0,0)\n",
            "  --mode <open|closed>        tour mode (default open)\n",
            "  --sequence <\"a, b, ...\">    integers for the subsequence tree\n",
            "  --no-tree                   print only the longest subsequence\n",
            "  --log-level <level>         off, error, warn, info, debug or trace\n",
        )
    }
}

fn split_arg(raw_name: &str, args: &mut Peekable<impl Iterator<Item = String>>) -> (String, Option<String>) {
    if let Some((name, value)) = raw_name.split_once('=') {
        return (name.to_string(), Some(value.to_string()));
    }

    let value = args.next_if(|next| !next.starts_with("--"));
    (raw_name.to_string(), value)
}

fn parse_value<T: FromStr>(name: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("Missing value for --{name}"))?;
    value.parse::<T>().map_err(|_| format!("Invalid value for --{name}: {value}"))
}

fn parse_location(name: &str, value: Option<String>) -> Result<Location, String> {
    let value = value.ok_or_else(|| format!("Missing value for --{name}"))?;
    let (x, y) = value.split_once(',').ok_or_else(|| format!("Invalid value for --{name}: {value}, expected x,y"))?;

    let coord = |raw: &str| raw.trim().parse::<usize>().map_err(|_| format!("Invalid value for --{name}: {value}"));
    Ok(Location(coord(x)?, coord(y)?))
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;
    use tourtree::{Location, TourMode};

    use super::SolverOptions;

    fn parse(args: &[&str]) -> Result<SolverOptions, String> {
        SolverOptions::parse_from_iter(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn defaults() {
        let options = parse(&[]).unwrap();
        assert_eq!(options.size.get(), 8);
        assert_eq!(options.start, Location(0, 0));
        assert_eq!(options.mode, TourMode::Open);
        assert!(options.print_tree);
    }

    #[test]
    fn parses_every_option() {
        let options = parse(&["--size", "6", "--start=1,2", "--mode", "closed", "--sequence", "3, 1, 2", "--no-tree", "--log-level", "debug"]).unwrap();
        assert_eq!(options.size.get(), 6);
        assert_eq!(options.start, Location(1, 2));
        assert_eq!(options.mode, TourMode::Closed);
        assert_eq!(options.sequence, "3, 1, 2");
        assert!(!options.print_tree);
        assert_eq!(options.log_level, LevelFilter::Debug);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse(&["--size", "0"]).is_err());
        assert!(parse(&["--start", "1"]).is_err());
        assert!(parse(&["--mode", "sideways"]).is_err());
        assert!(parse(&["--sequence"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["stray"]).is_err());
    }
}
