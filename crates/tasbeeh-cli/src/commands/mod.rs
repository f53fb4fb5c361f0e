//! CLI subcommand implementations.

pub mod add;
pub mod count;
pub mod presets;
pub mod status;
pub mod target;
