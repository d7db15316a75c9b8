use std::path::PathBuf;

use anyhow::{bail, Context, Result};

pub const USAGE: &str = "usage: i2csim [--config <path>] [--trace] [--verbose] [--help]";

#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub trace: bool,
    pub verbose: bool,
    pub help: bool,
}

impl Args {
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-c" | "--config" => {
                    let path = args.next().context("--config needs a path")?;
                    parsed.config = Some(PathBuf::from(path));
                }
                "-t" | "--trace" => parsed.trace = true,
                "-v" | "--verbose" => parsed.verbose = true,
                "-h" | "--help" => parsed.help = true,
                other => bail!("unknown argument `{other}`\n{USAGE}"),
            }
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args() {
        assert_eq!(parse(&[]).unwrap(), Args::default());
    }

    #[test]
    fn test_all_flags() {
        let args = parse(&["--config", "s.json", "-t", "-v"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("s.json")));
        assert!(args.trace);
        assert!(args.verbose);
        assert!(!args.help);
    }

    #[test]
    fn test_config_without_path() {
        assert!(parse(&["--config"]).is_err());
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse(&["--bogus"]).unwrap_err();
        assert!(err.to_string().contains("--bogus"));
    }
}
