//! Utility module for nrel.

mod paths;

pub use paths::{config_dir, global_config_file, local_config_file, resolve_project_root};
