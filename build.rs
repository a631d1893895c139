use std::process::Command;
use vergen::EmitBuilder;

fn main() {
    // The commit SHA is only available when building from a git checkout
    // (release tarballs and container builds may not have one).
    let in_git_checkout = Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);

    let result = if in_git_checkout {
        EmitBuilder::builder()
            .build_timestamp()
            .git_sha(false) // short SHA
            .emit()
    } else {
        EmitBuilder::builder().build_timestamp().emit()
    };

    result.expect("Unable to generate build metadata");
}
