pub mod patcher;
pub mod types;

pub use patcher::*;
pub use types::*;
