// Text transformation and diff rendering
pub mod preview;
pub mod replace;

pub use preview::{diff_stats, unified_diff, DiffStats};
pub use replace::{replace_literal, Replaced};
