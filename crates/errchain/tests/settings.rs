mod common;

use std::fs;

use common::chain_of;
use errchain::settings::{self, Settings};
use errchain::{ChainExt, Exception, ExceptionGroup};
use pretty_assertions::assert_eq;
use serial_test::serial;
use tempfile::tempdir;

#[test]
#[serial]
fn test_settings_load_from_file_and_apply_globally() {
    common::init_tracing();

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("errchain.toml");
    fs::write(&path, "max_chain_depth = 3\ngroup_message = \"Validation failed\"\n")
        .expect("write settings");

    let loaded = Settings::from_path(&path).expect("load settings");
    assert_eq!(
        loaded,
        Settings {
            max_chain_depth: Some(3),
            group_message: "Validation failed".to_string(),
        }
    );

    settings::install(loaded);

    let err = chain_of(6);
    assert_eq!(err.chain_depth(), 3);
    assert_eq!(err.root_cause().message(), "n2");

    let none: [errchain::Thrown; 0] = [];
    assert!(ExceptionGroup::raise(none, None).is_ok());
    let group = ExceptionGroup::from([chain_of(1)], None);
    assert_eq!(group.message(), "Validation failed");

    settings::reset();
    assert_eq!(chain_of(6).chain_depth(), 6);
    assert_eq!(settings::current(), Settings::default());
}

#[test]
#[serial]
fn test_partial_settings_fall_back_to_defaults() {
    let parsed = Settings::from_toml_str("group_message = \"Import failed\"").expect("parse");
    assert_eq!(parsed.max_chain_depth, None);
    assert_eq!(parsed.group_message, "Import failed");

    let empty = Settings::from_toml_str("").expect("parse");
    assert_eq!(empty, Settings::default());
}

#[test]
fn test_unknown_or_missing_settings_are_reported() {
    let err = Settings::from_toml_str("max_depth = 4").unwrap_err();
    assert!(format!("{err:#}").contains("invalid errchain settings"));

    let err = Settings::from_path("/no/such/errchain.toml").unwrap_err();
    assert!(err.to_string().contains("failed to read settings"));
}
