use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use boomslang::error::{EXIT_BAD_FILE, EXIT_BAD_OPTS, EXIT_RUNTIME_FAILURE};

fn boomslang(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_boomslang")).args(args)
                                                  .env_remove("RUST_LOG")
                                                  .output()
                                                  .expect("the binary runs")
}

/// Writes `contents` to a fresh script in the temporary directory.
fn script(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("boomslang-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("temporary directory is writable");

    let path = dir.join(name);
    fs::write(&path, contents).expect("temporary directory is writable");
    path
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temporary paths are UTF-8")
}

#[test]
fn runs_a_script() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/scripts");
    let out = boomslang(&[path_arg(&dir.join("counting.bs"))]);

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8_lossy(&out.stdout),
               fs::read_to_string(dir.join("counting.bs.stdout")).unwrap());
}

#[test]
fn pipe_mode_prints_the_last_value() {
    let path = script("pipe.bs", "the x is 20\nthe x plus 22\n");

    let out = boomslang(&["--pipe-mode", path_arg(&path)]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "42\n");

    let out = boomslang(&[path_arg(&path)]);
    assert!(out.stdout.is_empty());
}

#[test]
fn scripts_must_end_in_bs() {
    let path = script("script.txt", "show 1\n");
    let out = boomslang(&[path_arg(&path)]);

    assert_eq!(out.status.code(), Some(EXIT_BAD_FILE));
    assert!(String::from_utf8_lossy(&out.stderr).contains("'.bs'"));
    assert!(out.stdout.is_empty());
}

#[test]
fn directories_are_not_scripts() {
    let path = script("marker.bs", "");
    let dir = path.with_file_name("folder.bs");
    fs::create_dir_all(&dir).unwrap();

    let out = boomslang(&[path_arg(&dir)]);
    assert_eq!(out.status.code(), Some(EXIT_BAD_FILE));
    assert!(String::from_utf8_lossy(&out.stderr).contains("directory"));
}

#[test]
fn missing_scripts_are_reported() {
    let path = script("marker.bs", "").with_file_name("nowhere.bs");
    let out = boomslang(&[path_arg(&path)]);

    assert_eq!(out.status.code(), Some(EXIT_BAD_FILE));
    assert!(String::from_utf8_lossy(&out.stderr).contains("nowhere.bs"));
}

#[test]
fn unknown_options_are_rejected() {
    let out = boomslang(&["--frobnicate"]);
    assert_eq!(out.status.code(), Some(EXIT_BAD_OPTS));

    let out = boomslang(&["--debug=colours", "x.bs"]);
    assert_eq!(out.status.code(), Some(EXIT_BAD_OPTS));
}

#[test]
fn failures_set_the_exit_status() {
    let path = script("failing.bs", "show 1\nshow the missing\n");
    let out = boomslang(&[path_arg(&path)]);

    assert_eq!(out.status.code(), Some(EXIT_RUNTIME_FAILURE));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "1\n");
    assert!(String::from_utf8_lossy(&out.stderr).contains("'missing'"));
}
