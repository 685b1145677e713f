//! Command-line interface for the `mirage` binary.

mod check_media;
mod commands;
mod serve;
mod shuffle;

pub use check_media::{check_media, render_report};
pub use commands::{Cli, Commands};
pub use serve::serve_gallery;
pub use shuffle::render_permutation;
