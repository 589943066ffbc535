//! Environment variable overrides for Settings.
//!
//! Kept in its own test binary: environment variables are process-wide and
//! would leak into the file-based config tests.

use std::env;
use std::fs;

use tempfile::TempDir;

use rszipper::config::{RenderStyle, Settings};

#[test]
fn given_env_vars_when_load_then_env_wins_over_file_and_bad_values_fail() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rszipper.toml");
    fs::write(&path, "[demo]\niterations = 12\nroot_value = 3\n").unwrap();

    env::set_var("RSZIPPER_DEMO__ITERATIONS", "7");
    env::set_var("RSZIPPER_DEMO__ROOT_VALUE", "-42");
    env::set_var("RSZIPPER_STYLE", "tree");

    let settings = Settings::load(Some(path.as_path())).expect("load settings");
    assert_eq!(settings.demo.iterations, 7);
    assert_eq!(settings.demo.root_value, -42);
    assert_eq!(settings.demo.reset_every, 6);
    assert_eq!(settings.style, RenderStyle::Tree);

    env::set_var("RSZIPPER_STYLE", "sideways");
    let err = Settings::load(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("unknown style 'sideways'"));

    env::remove_var("RSZIPPER_DEMO__ITERATIONS");
    env::remove_var("RSZIPPER_DEMO__ROOT_VALUE");
    env::remove_var("RSZIPPER_STYLE");

    let settings = Settings::load(Some(path.as_path())).unwrap();
    assert_eq!(settings.demo.iterations, 12);
    assert_eq!(settings.demo.root_value, 3);
    assert_eq!(settings.style, RenderStyle::Indent);
}
