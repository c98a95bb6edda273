//! Config file discovery through DATE_SORTER_CONFIG. Serialized: env vars are process-wide.

use date_sorter::config::{CONFIG_ENV, LogLevel, load_config_from_xml};
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
#[serial]
fn env_config_is_loaded() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    fs::write(
        &cfg_path,
        "<config>\n  <log_level>quiet</log_level>\n  <log_file>/tmp/date_sorter_test.log</log_file>\n  <jobs>2</jobs>\n</config>\n",
    )
    .unwrap();

    unsafe { std::env::set_var(CONFIG_ENV, &cfg_path) };
    let loaded = load_config_from_xml();
    unsafe { std::env::remove_var(CONFIG_ENV) };

    let settings = loaded.expect("load").expect("settings present");
    assert_eq!(settings.log_level, Some(LogLevel::Quiet));
    assert_eq!(settings.log_file, Some(PathBuf::from("/tmp/date_sorter_test.log")));
    assert_eq!(settings.jobs, Some(2));
}

#[test]
#[serial]
fn env_config_pointing_nowhere_is_an_error() {
    let td = tempdir().unwrap();
    let missing = td.path().join("nope.xml");

    unsafe { std::env::set_var(CONFIG_ENV, &missing) };
    let loaded = load_config_from_xml();
    unsafe { std::env::remove_var(CONFIG_ENV) };

    let err = loaded.expect_err("explicit config must exist");
    assert!(format!("{err}").contains("not found"), "{err}");
}
