//! Package module for nrel.
//!
//! Reads package.json, asks npm which packages are installed and picks the
//! build runner.

mod installed;
mod manager;
mod manifest;
mod types;

pub use installed::{is_package_installed, list_command, list_packages};
pub use manager::{detect_build_runner, Runner};
pub use manifest::{parse_package_json, pre_release_tag, read_package_json};
pub use types::{Dependency, DependencyTree, PackageJson, Scope};
