use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=CARGO_PKG_VERSION");

    let package_version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());

    // Release builds always show the plain crate version; dev builds get a
    // -dev suffix unless the checkout sits exactly on the matching tag.
    let profile = env::var("PROFILE").unwrap_or_default();
    let display_version = if profile == "release" {
        package_version
    } else {
        println!("cargo:rerun-if-changed=.git/HEAD");
        println!("cargo:rerun-if-changed=.git/refs/tags");

        let expected_tag = format!("v{package_version}");
        let git_tag = Command::new("git")
            .args(["describe", "--tags", "--exact-match"])
            .output()
            .ok()
            .and_then(|output| {
                if output.status.success() {
                    String::from_utf8(output.stdout)
                        .ok()
                        .map(|s| s.trim().to_string())
                } else {
                    None
                }
            });

        if matches!(git_tag.as_deref(), Some(tag) if tag == expected_tag) {
            package_version
        } else {
            format!("{package_version}-dev")
        }
    };

    println!("cargo:rustc-env=APP_VERSION_DISPLAY={display_version}");
}
