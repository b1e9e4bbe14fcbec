//! Command-line flags, the optional TOML config file, and how they combine.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

/// Database file used when neither a flag nor the config file names one.
pub const DEFAULT_DB: &str = "UserContacts.db";

const LOG_FILE_NAME: &str = "addrbook.log";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug, Default)]
#[command(name = "addrbook", version, about = "Terminal address book backed by SQLite")]
pub struct Args {
  /// Path to a TOML config file (db_path, log_file).
  #[arg(short, long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// SQLite database file (default: UserContacts.db).
  #[arg(long, env = "ADDRBOOK_DB", value_name = "FILE")]
  pub db: Option<PathBuf>,

  /// Where to write log output (default: addrbook.log next to the database).
  #[arg(long, env = "ADDRBOOK_LOG", value_name = "FILE")]
  pub log_file: Option<PathBuf>,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default, Debug)]
struct ConfigFile {
  #[serde(default)]
  db_path:  Option<PathBuf>,
  #[serde(default)]
  log_file: Option<PathBuf>,
}

// ─── Resolved settings ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
  pub db_path:  PathBuf,
  pub log_file: PathBuf,
}

impl Settings {
  /// CLI flags override the config file, which overrides defaults.
  pub fn resolve(args: Args) -> Result<Self> {
    let file_cfg: ConfigFile = match &args.config {
      Some(path) => {
        let raw = std::fs::read_to_string(path)
          .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&raw)
          .with_context(|| format!("parsing config file {}", path.display()))?
      }
      None => ConfigFile::default(),
    };

    let db_path = args
      .db
      .or(file_cfg.db_path)
      .unwrap_or_else(|| PathBuf::from(DEFAULT_DB));
    let db_path = expand_tilde(&db_path);

    let log_file = match args.log_file.or(file_cfg.log_file) {
      Some(path) => expand_tilde(&path),
      None => db_path
        .parent()
        .map(|dir| dir.join(LOG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME)),
    };

    Ok(Self { db_path, log_file })
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use super::*;

  #[test]
  fn defaults_without_flags_or_file() {
    let settings = Settings::resolve(Args::default()).unwrap();
    assert_eq!(settings.db_path, PathBuf::from(DEFAULT_DB));
    assert_eq!(settings.log_file, PathBuf::from(LOG_FILE_NAME));
  }

  #[test]
  fn log_file_defaults_next_to_database() {
    let args = Args {
      db: Some(PathBuf::from("/var/lib/addrbook/contacts.db")),
      ..Args::default()
    };
    let settings = Settings::resolve(args).unwrap();
    assert_eq!(settings.log_file, PathBuf::from("/var/lib/addrbook/addrbook.log"));
  }

  #[test]
  fn flags_override_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "db_path = \"/srv/from-file.db\"\nlog_file = \"/tmp/file.log\"").unwrap();

    let from_file = Settings::resolve(Args {
      config: Some(file.path().to_path_buf()),
      ..Args::default()
    })
    .unwrap();
    assert_eq!(from_file.db_path, PathBuf::from("/srv/from-file.db"));
    assert_eq!(from_file.log_file, PathBuf::from("/tmp/file.log"));

    let overridden = Settings::resolve(Args {
      config: Some(file.path().to_path_buf()),
      db:     Some(PathBuf::from("/srv/flag.db")),
      ..Args::default()
    })
    .unwrap();
    assert_eq!(overridden.db_path, PathBuf::from("/srv/flag.db"));
    assert_eq!(overridden.log_file, PathBuf::from("/tmp/file.log"));
  }

  #[test]
  fn malformed_config_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "db_path = [").unwrap();

    let err = Settings::resolve(Args {
      config: Some(file.path().to_path_buf()),
      ..Args::default()
    })
    .unwrap_err();
    assert!(err.to_string().starts_with("parsing config file"));
  }
}
