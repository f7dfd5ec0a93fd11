use std::process::Command;

// Stamps the release tag into the footer version label and rebuilds when the
// embedded stylesheet or artwork change.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=assets");

    let Some(tag) = latest_tag() else {
        return;
    };
    println!("cargo:rustc-env=GIT_TAG={tag}");
}

fn latest_tag() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let tag = String::from_utf8(output.stdout).ok()?;
    let tag = tag.trim();
    (!tag.is_empty()).then(|| tag.to_string())
}
