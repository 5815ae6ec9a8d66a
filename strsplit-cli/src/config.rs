use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

pub const DEFAULT_DELIMITER: &str = ",";
pub const STDIN: &str = "-";

/// Split files (or standard input) on a delimiter and print the segments.
#[derive(Debug, Parser)]
#[command(name = "strsplit", version)]
pub struct Args {
    /// Delimiter to split on. Overrides the config file.
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// TOML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only print how many segments each input has.
    #[arg(long)]
    pub count: bool,

    /// Prefix each segment with its index.
    #[arg(short, long)]
    pub number: bool,

    /// Strip one trailing newline from each input before splitting.
    #[arg(long, overrides_with = "keep_newline")]
    pub trim_newline: bool,

    /// Keep a trailing newline as part of the last segment.
    #[arg(long, overrides_with = "trim_newline")]
    pub keep_newline: bool,

    /// Inputs to split. `-` or nothing reads standard input.
    pub files: Vec<PathBuf>,
}

/// Settings read from a config file. Missing keys fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub delimiter: String,
    pub trim_newline: bool,
    pub number: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        FileConfig {
            delimiter: DEFAULT_DELIMITER.to_string(),
            trim_newline: true,
            number: false,
        }
    }
}

impl FileConfig {
    pub fn from_toml(raw: &str) -> Result<Self, anyhow::Error> {
        let config = toml::from_str(raw)?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("parsing config {}", path.display()))
    }
}

/// Final settings after layering defaults, config file and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub delimiter: String,
    pub trim_newline: bool,
    pub number: bool,
    pub count: bool,
}

impl Settings {
    pub fn resolve(args: &Args, file: FileConfig) -> Self {
        Settings {
            delimiter: args.delimiter.clone().unwrap_or(file.delimiter),
            trim_newline: if args.trim_newline {
                true
            } else if args.keep_newline {
                false
            } else {
                file.trim_newline
            },
            number: file.number || args.number,
            count: args.count,
        }
    }

    pub fn from_args(args: &Args) -> Result<Self, anyhow::Error> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        tracing::debug!(?file, "loaded config");
        Ok(Self::resolve(args, file))
    }
}

impl Args {
    /// The inputs to split, in order. Standard input may appear only once.
    pub fn inputs(&self) -> Result<Vec<&Path>, anyhow::Error> {
        if self.files.is_empty() {
            return Ok(vec![Path::new(STDIN)]);
        }

        let stdin_count = self
            .files
            .iter()
            .filter(|path| path.as_path() == Path::new(STDIN))
            .count();
        if stdin_count > 1 {
            anyhow::bail!("standard input (`{STDIN}`) given {stdin_count} times");
        }
        Ok(self.files.iter().map(PathBuf::as_path).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("strsplit").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(&parse(&[]), FileConfig::default());
        assert_eq!(
            settings,
            Settings {
                delimiter: ",".to_string(),
                trim_newline: true,
                number: false,
                count: false,
            }
        );
    }

    #[test]
    fn test_partial_config() {
        let config = FileConfig::from_toml("delimiter = \"|\"").unwrap();
        assert_eq!(config.delimiter, "|");
        assert!(config.trim_newline);
        assert!(!config.number);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(FileConfig::from_toml("delimeter = \"|\"").is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let file = FileConfig {
            delimiter: "|".to_string(),
            trim_newline: true,
            number: false,
        };
        let args = parse(&["-d", ";", "--number", "--keep-newline", "--count", "a.txt"]);
        let settings = Settings::resolve(&args, file);

        assert_eq!(settings.delimiter, ";");
        assert!(settings.number);
        assert!(!settings.trim_newline);
        assert!(settings.count);
        assert_eq!(args.files, vec![PathBuf::from("a.txt")]);
    }

    #[test]
    fn test_trim_newline_flag_overrides_config() {
        let file = FileConfig {
            trim_newline: false,
            ..FileConfig::default()
        };
        let settings = Settings::resolve(&parse(&["--trim-newline"]), file.clone());
        assert!(settings.trim_newline);

        let settings = Settings::resolve(&parse(&[]), file);
        assert!(!settings.trim_newline);
    }

    #[test]
    fn test_last_newline_flag_wins() {
        let args = parse(&["--keep-newline", "--trim-newline"]);
        assert!(Settings::resolve(&args, FileConfig::default()).trim_newline);

        let args = parse(&["--trim-newline", "--keep-newline"]);
        assert!(!Settings::resolve(&args, FileConfig::default()).trim_newline);
    }

    #[test]
    fn test_inputs_default_to_stdin() {
        let args = parse(&[]);
        assert_eq!(args.inputs().unwrap(), vec![Path::new("-")]);

        let args = parse(&["a.txt", "-", "b.txt"]);
        assert_eq!(
            args.inputs().unwrap(),
            vec![Path::new("a.txt"), Path::new("-"), Path::new("b.txt")]
        );
    }

    #[test]
    fn test_stdin_given_twice_rejected() {
        let args = parse(&["-", "a.txt", "-"]);
        let err = args.inputs().unwrap_err();
        assert!(err.to_string().contains("standard input"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "delimiter = \"::\"\nnumber = true").unwrap();

        let args = parse(&["--config", file.path().to_str().unwrap()]);
        let settings = Settings::from_args(&args).unwrap();
        assert_eq!(settings.delimiter, "::");
        assert!(settings.number);
    }

    #[test]
    fn test_missing_config_file() {
        let args = parse(&["--config", "/definitely/not/here.toml"]);
        let err = Settings::from_args(&args).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}
