use std::fs;
use std::path::{Path, PathBuf};

const VERSION_ENV: &str = "SCAMWISE_VERSION";

fn workspace_root(manifest_dir: &Path) -> &Path {
    // crates/scamwise-app -> crates -> workspace root
    manifest_dir
        .ancestors()
        .nth(2)
        .expect("scamwise-app should live two levels below the workspace root")
}

fn main() {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let version_path = workspace_root(&manifest_dir).join("VERSION");
    println!("cargo:rerun-if-changed={}", version_path.display());

    let raw = fs::read_to_string(&version_path).expect("read VERSION file");
    let version = raw.trim();
    assert!(
        !version.is_empty() && !version.contains(char::is_whitespace),
        "VERSION file must contain a single non-empty version token"
    );

    println!("cargo:rustc-env={VERSION_ENV}={version}");
}
