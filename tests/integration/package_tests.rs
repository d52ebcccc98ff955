//! Installed-package and build runner detection tests.

use npm_release_scripts::package::{
    detect_build_runner, is_package_installed, list_packages, Runner, Scope,
};

use crate::integration::fixtures::{ScriptedRunner, GLOBAL_PACKAGES, GLOBAL_PACKAGES_WITH_PNPM};

const LOCAL_PACKAGES: &str = r#"{
  "name": "package-name",
  "version": "0.0.0",
  "dependencies": {
    "package-dep": {
      "version": "0.0.0",
      "overridden": false,
      "resolved": "file:../path/to/package/folder"
    }
  }
}"#;

#[test]
fn test_local_package_installed() {
    let runner = ScriptedRunner::new().reply("npm list --json", &[LOCAL_PACKAGES]);

    assert!(is_package_installed(&runner, "package-dep", Scope::Local).unwrap());
    assert!(!is_package_installed(&runner, "pnpm", Scope::Local).unwrap());
    assert_eq!(runner.commands()[0], "npm list --json");
}

#[test]
fn test_global_package_installed() {
    let runner = ScriptedRunner::new().reply("npm list --json -g", &[GLOBAL_PACKAGES]);

    assert!(is_package_installed(&runner, "typescript", Scope::Global).unwrap());
    assert!(!is_package_installed(&runner, "package-dep", Scope::Global).unwrap());
}

#[test]
fn test_tree_without_dependencies() {
    let runner = ScriptedRunner::new().reply("npm list --json -g", &[r#"{"name": "lib"}"#]);

    let tree = list_packages(&runner, Scope::Global).unwrap();
    assert_eq!(tree.name.as_deref(), Some("lib"));
    assert!(!is_package_installed(&runner, "pnpm", Scope::Global).unwrap());
}

#[test]
fn test_invalid_json_is_an_error() {
    let runner = ScriptedRunner::new().reply("npm list --json", &["not json"]);
    assert!(list_packages(&runner, Scope::Local).is_err());
}

#[test]
fn test_detect_build_runner() {
    let runner = ScriptedRunner::new().reply("npm list --json -g", &[GLOBAL_PACKAGES_WITH_PNPM]);
    assert_eq!(detect_build_runner(&runner), Runner::Pnpm);

    let runner = ScriptedRunner::new().reply("npm list --json -g", &[GLOBAL_PACKAGES]);
    assert_eq!(detect_build_runner(&runner), Runner::Npm);

    let runner = ScriptedRunner::new().fail("npm list --json -g");
    assert_eq!(detect_build_runner(&runner), Runner::Npm);
}
