//! CLI command handlers, one per file. Each returns the text to print.

mod build;
mod normalize;
mod parse;
mod set_snapshot;
mod strip_sas;

pub use build::{run_build, BuildArgs};
pub use normalize::run_normalize;
pub use parse::run_parse;
pub use set_snapshot::run_set_snapshot;
pub use strip_sas::run_strip_sas;
