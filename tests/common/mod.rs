//! Common test utilities for bindx integration tests

use assert_cmd::Command;
use tempfile::TempDir;

/// The real bindx binary
#[allow(deprecated)]
pub fn bindx_cmd() -> Command {
    Command::cargo_bin("bindx").unwrap()
}

/// bindx with the per-user XDG directories pointed at an empty temp dir
#[allow(dead_code)]
pub fn isolated_cmd(home: &TempDir) -> Command {
    let mut cmd = bindx_cmd();
    cmd.env("XDG_DATA_HOME", home.path().join("data"))
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env_remove("RUST_LOG");
    cmd
}

/// bindx with every XDG base directory variable pointed inside temp dirs:
/// user dirs under `home`, `$XDG_DATA_DIRS` set to `share`.
#[allow(dead_code)]
pub fn xdg_cmd(home: &TempDir, share: &TempDir) -> Command {
    let mut cmd = isolated_cmd(home);
    cmd.env("XDG_DATA_DIRS", share.path())
        .env("XDG_CONFIG_DIRS", home.path().join("etc"));
    cmd
}

/// Write `files` (relative path, contents) below `dir`
#[allow(dead_code)]
pub fn write_files(dir: &TempDir, files: &[(&str, &str)]) {
    for (rel, contents) in files {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write file");
    }
}
