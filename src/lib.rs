use std::{num::NonZeroUsize, path::PathBuf};

use clap::Parser;

mod input;
mod window;

pub use input::{read_ints, read_ints_from, Error};
pub use window::{count_increases, count_increases_naive};

#[derive(Debug, Parser)]
#[command(version, about = "Count how often a sliding-window sum increases")]
pub struct CliArgs {
    pub input_path: PathBuf,
    pub window_size: NonZeroUsize,
}
