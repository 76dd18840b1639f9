pub mod config_loader;
pub mod patch_config;

pub use config_loader::ConfigLoader;
pub use patch_config::{
    PatchConfig, DEFAULT_MESSAGE, DEFAULT_TARGET, DRIVE_MOVE_PATTERN, DRIVE_MOVE_REPLACEMENT,
};
