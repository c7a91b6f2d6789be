// SPDX-License-Identifier: MPL-2.0
//! Command-line entry point wiring.
//!
//! [`parse_args`] turns the process arguments into a [`Command`]. [`run`]
//! resolves the configuration, analyses the image and returns the rendered
//! report; [`save_settings`] writes the effective settings back to disk.
//! Printing and exit codes are left to `main`.

use crate::application::analysis::analyze_file;
use crate::config::{self, Config};
use crate::domain::metadata::MatchPolicy;
use crate::error::{Error, Result};
use crate::infrastructure::FileImageLoader;
use crate::report::render_report;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

pub const USAGE: &str = "\
Usage: exif_lens [OPTIONS] <IMAGE>
       exif_lens --save-config [OPTIONS]

Prints image properties, EXIF tags, a camera profile classification and the
GPS location of IMAGE.

Options:
  --config <PATH>     Read settings from PATH instead of the default location
  --policy <all|any>  How make/model criteria combine (overrides settings)
  --save-config       Write the effective settings (including --policy) to
                      the settings file and exit
  -h, --help          Print this help
";

/// Runtime flags for a single analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Flags {
    /// Explicit settings file, bypassing the platform config directory.
    pub config_path: Option<PathBuf>,
    /// Overrides the configured match policy.
    pub policy: Option<MatchPolicy>,
    /// Image to analyse.
    pub image: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Analyze(Flags),
    SaveConfig {
        config_path: Option<PathBuf>,
        policy: Option<MatchPolicy>,
    },
}

/// Invalid command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError(pub String);

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Usage Error: {}", self.0)
    }
}

impl std::error::Error for UsageError {}

impl From<pico_args::Error> for UsageError {
    fn from(err: pico_args::Error) -> Self {
        UsageError(err.to_string())
    }
}

/// Parses arguments (without the program name).
///
/// # Errors
///
/// Returns a [`UsageError`] for an unknown policy, a missing image or
/// extra arguments (an image is one too many with `--save-config`).
pub fn parse_args(args: Vec<OsString>) -> std::result::Result<Command, UsageError> {
    let mut args = pico_args::Arguments::from_vec(args);

    if args.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }

    let save_config = args.contains("--save-config");
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let policy = args.opt_value_from_fn("--policy", parse_policy)?;
    let image: Option<PathBuf> = args.opt_free_from_str()?;

    let mut rest = args.finish();
    if save_config {
        if let Some(image) = &image {
            rest.insert(0, image.clone().into_os_string());
        }
    }
    if !rest.is_empty() {
        let extra: Vec<String> = rest
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        return Err(UsageError(format!(
            "unexpected arguments: {}",
            extra.join(" ")
        )));
    }

    if save_config {
        return Ok(Command::SaveConfig {
            config_path,
            policy,
        });
    }

    let image = image.ok_or_else(|| UsageError("missing <IMAGE> argument".to_string()))?;

    Ok(Command::Analyze(Flags {
        config_path,
        policy,
        image,
    }))
}

fn parse_policy(value: &str) -> std::result::Result<MatchPolicy, String> {
    MatchPolicy::parse(value).ok_or_else(|| format!("expected 'all' or 'any', got '{value}'"))
}

/// Analyses the image named by `flags` and returns the text report.
///
/// # Errors
///
/// Returns an error if the image cannot be read or decoded. Configuration
/// problems only produce warnings.
pub fn run(flags: &Flags) -> Result<String> {
    let config = resolve_config(flags.config_path.as_deref());

    let mut profile = config.secure_profile();
    if let Some(policy) = flags.policy {
        profile = profile.with_policy(policy);
    }

    let report = analyze_file(&FileImageLoader, &flags.image, &profile)?;
    Ok(render_report(&report))
}

/// Writes the effective settings, with `policy` applied, to `config_path` or
/// the default settings file. Returns a confirmation line.
///
/// # Errors
///
/// Returns an error if no config directory is available or the file cannot
/// be written.
pub fn save_settings(config_path: Option<&Path>, policy: Option<MatchPolicy>) -> Result<String> {
    let mut config = match config_path {
        Some(path) if !path.exists() => Config::default(),
        _ => resolve_config(config_path),
    };
    if let Some(policy) = policy {
        config.classification.match_policy = Some(policy);
    }

    let target = match config_path {
        Some(path) => {
            config::save_to_path(&config, path)?;
            path.to_path_buf()
        }
        None => {
            let path = config::config_file_path()
                .ok_or_else(|| Error::Config("No config directory available".to_string()))?;
            config::save(&config)?;
            path
        }
    };
    Ok(format!("Settings saved to {}\n", target.display()))
}

fn resolve_config(path: Option<&Path>) -> Config {
    match path {
        Some(path) => config::load_from_path(path).unwrap_or_else(|err| {
            eprintln!(
                "[WARN] Ignoring {}: {err}. Using default settings.",
                path.display()
            );
            Config::default()
        }),
        None => {
            let (config, warning) = config::load();
            if let Some(warning) = warning {
                eprintln!("[WARN] {warning}");
            }
            config
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{paths, ClassificationConfig};
    use image_rs::RgbImage;
    use tempfile::tempdir;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn parses_image_only() {
        let command = parse_args(args(&["photo.jpg"])).expect("parse");
        assert_eq!(
            command,
            Command::Analyze(Flags {
                config_path: None,
                policy: None,
                image: PathBuf::from("photo.jpg"),
            })
        );
    }

    #[test]
    fn parses_options() {
        let command = parse_args(args(&[
            "--config",
            "/tmp/settings.toml",
            "--policy",
            "ANY",
            "photo.jpg",
        ]))
        .expect("parse");
        let Command::Analyze(flags) = command else {
            panic!("expected analyze command");
        };
        assert_eq!(flags.config_path, Some(PathBuf::from("/tmp/settings.toml")));
        assert_eq!(flags.policy, Some(MatchPolicy::Any));
    }

    #[test]
    fn help_wins() {
        assert_eq!(parse_args(args(&["--help"])), Ok(Command::Help));
        assert_eq!(parse_args(args(&["photo.jpg", "-h"])), Ok(Command::Help));
    }

    #[test]
    fn missing_image_is_usage_error() {
        let err = parse_args(args(&[])).expect_err("should fail");
        assert!(err.0.contains("IMAGE"));
    }

    #[test]
    fn unknown_policy_is_usage_error() {
        assert!(parse_args(args(&["--policy", "most", "photo.jpg"])).is_err());
    }

    #[test]
    fn extra_arguments_are_rejected() {
        let err = parse_args(args(&["a.jpg", "b.jpg"])).expect_err("should fail");
        assert!(err.0.contains("b.jpg"));
    }

    #[test]
    fn parses_save_config() {
        let command = parse_args(args(&["--save-config", "--policy", "any"])).expect("parse");
        assert_eq!(
            command,
            Command::SaveConfig {
                config_path: None,
                policy: Some(MatchPolicy::Any),
            }
        );
    }

    #[test]
    fn save_config_rejects_image() {
        let err = parse_args(args(&["--save-config", "photo.jpg"])).expect_err("should fail");
        assert!(err.0.contains("photo.jpg"));
    }

    #[test]
    fn save_settings_creates_explicit_file() {
        let dir = tempdir().expect("temp dir");
        let settings = dir.path().join("new").join("settings.toml");

        let message = save_settings(Some(&settings), Some(MatchPolicy::Any)).expect("save");
        assert!(message.starts_with("Settings saved to "));

        let saved = config::load_from_path(&settings).expect("load");
        assert_eq!(saved.classification.match_policy, Some(MatchPolicy::Any));
        assert_eq!(saved.secure_profile().criteria().len(), 2);
    }

    #[test]
    fn save_settings_keeps_existing_values() {
        let dir = tempdir().expect("temp dir");
        let settings = dir.path().join("settings.toml");
        std::fs::write(&settings, "[classification]\nsecure_make = \"Leica\"\n").expect("write");

        save_settings(Some(&settings), None).expect("save");

        let saved = config::load_from_path(&settings).expect("load");
        assert_eq!(saved.classification.secure_make.as_deref(), Some("Leica"));
        assert_eq!(saved.classification.match_policy, Some(MatchPolicy::All));
    }

    #[test]
    fn save_settings_uses_default_location() {
        let _lock = paths::ENV_MUTEX.lock().unwrap();
        let dir = tempdir().expect("temp dir");
        std::env::set_var(paths::ENV_CONFIG_DIR, dir.path());

        let result = save_settings(None, Some(MatchPolicy::Any));
        std::env::remove_var(paths::ENV_CONFIG_DIR);

        let message = result.expect("save");
        let expected = dir.path().join("settings.toml");
        assert!(message.contains(&expected.display().to_string()));
        let saved = config::load_from_path(&expected).expect("load");
        assert_eq!(saved.classification.match_policy, Some(MatchPolicy::Any));
    }

    #[test]
    fn run_renders_png_without_metadata() {
        let dir = tempdir().expect("temp dir");
        let image = dir.path().join("plain.png");
        RgbImage::new(3, 2).save(&image).expect("save png");
        let settings = dir.path().join("settings.toml");
        config::save_to_path(&Config::default(), &settings).expect("save settings");

        let text = run(&Flags {
            config_path: Some(settings),
            policy: None,
            image,
        })
        .expect("run");

        assert!(text.contains("Filename                 : plain.png\n"));
        assert!(text.contains("Image Size               : 3x2\n"));
        assert!(text.ends_with(
            "This image does not have metadata or does not match secure criteria.\n"
        ));
    }

    #[test]
    fn run_reports_missing_file() {
        let result = run(&Flags {
            config_path: None,
            policy: None,
            image: PathBuf::from("/nonexistent/photo.jpg"),
        });
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        let dir = tempdir().expect("temp dir");
        let settings = dir.path().join("settings.toml");
        std::fs::write(&settings, "[classification\n").expect("write");

        assert_eq!(resolve_config(Some(&settings)), Config::default());
    }

    #[test]
    fn explicit_config_is_used() {
        let dir = tempdir().expect("temp dir");
        let settings = dir.path().join("settings.toml");
        let config = Config {
            classification: ClassificationConfig {
                match_policy: Some(MatchPolicy::Any),
                secure_make: Some("Leica".to_string()),
                secure_model: Some("M11".to_string()),
            },
        };
        config::save_to_path(&config, &settings).expect("save");

        assert_eq!(resolve_config(Some(&settings)), config);
    }
}
