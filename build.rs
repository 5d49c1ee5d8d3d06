// Shared build script used by the server and API crates.
// - Captures Git commit hash, branch, and build timestamp
// - Falls back to "unknown" when git is not available (e.g. Docker builds)

use std::path::PathBuf;
use std::process::Command;

fn main() {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap_or_default());

    let commit_hash = git_output(&["rev-parse", "--short", "HEAD"], &manifest_dir)
        .unwrap_or_else(|| "unknown".to_string());

    let branch = git_output(&["rev-parse", "--abbrev-ref", "HEAD"], &manifest_dir)
        .unwrap_or_else(|| "unknown".to_string());

    // Build date/time in ISO 8601 format
    let build_date = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

    println!("cargo:rustc-env=GIT_COMMIT_HASH={}", commit_hash);
    println!("cargo:rustc-env=GIT_BRANCH={}", branch);
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);

    // Re-run if .git/HEAD changes (new commits)
    for ancestor in manifest_dir.ancestors() {
        let git_head = ancestor.join(".git").join("HEAD");
        if git_head.exists() {
            println!("cargo:rerun-if-changed={}", git_head.display());
            break;
        }
    }
}

fn git_output(args: &[&str], cwd: &PathBuf) -> Option<String> {
    Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
