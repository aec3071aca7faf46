use anyhow::{Context, Result};
use clap::Parser;
use sonar_sweep::CliArgs;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let args = CliArgs::parse();
    let nrs = sonar_sweep::read_ints(&args.input_path).with_context(|| {
        format!(
            "Failed to read integers from given input file({}).",
            args.input_path.display()
        )
    })?;

    let increase_count = sonar_sweep::count_increases(&nrs, args.window_size);
    println!("{}", increase_count);

    Ok(())
}
