#![cfg(target_os = "linux")]

use date_sorter::{Config, Sorter, SorterError};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::tempdir;

fn running_as_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}

fn set_mode(path: &Path, mode: u32) {
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
}

/// A non-writable output root surfaces as a directory creation error with a hint.
#[test]
fn nonwritable_output_root_yields_create_dir_error() {
    // Root may bypass permission checks and the test won't behave as expected.
    if running_as_root() {
        eprintln!("skipping: running as root");
        return;
    }

    let td = tempdir().expect("tempdir");
    let input = td.path().join("in");
    let output = td.path().join("out");
    fs::create_dir_all(&input).unwrap();
    fs::create_dir_all(&output).unwrap();
    let src = input.join("2020-04-10 00.07.15.jpg");
    fs::write(&src, "hello").unwrap();
    set_mode(&output, 0o555);

    let err = Sorter::new(Config::new(&input, &output))
        .run()
        .expect_err("expected permission denied");

    set_mode(&output, 0o755);
    let msg = err.to_string().to_ascii_lowercase();
    assert!(matches!(err, SorterError::CreateDir { .. }), "{err:?}");
    assert!(
        msg.contains("permission denied") || msg.contains("[os code: 13]"),
        "unexpected error: {msg}"
    );
    assert!(src.exists());
}

/// An existing but read-only date directory makes the rename itself fail.
#[test]
fn nonwritable_date_directory_yields_move_error() {
    if running_as_root() {
        eprintln!("skipping: running as root");
        return;
    }

    let td = tempdir().expect("tempdir");
    let input = td.path().join("in");
    let date_dir = td.path().join("out").join("2020-04-10");
    fs::create_dir_all(&input).unwrap();
    fs::create_dir_all(&date_dir).unwrap();
    let src = input.join("2020-04-10 00.07.15.jpg");
    fs::write(&src, "hello").unwrap();
    set_mode(&date_dir, 0o555);

    let err = Sorter::new(Config::new(&input, td.path().join("out")))
        .run()
        .expect_err("expected permission denied");

    set_mode(&date_dir, 0o755);
    match err {
        SorterError::Move { src: failed, .. } => assert_eq!(failed, src),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(src.exists());
}
