use clap::Parser;
use tracing_subscriber::EnvFilter;

use simlib_core::{Config, LibraryCopier};

/// Copy the simulation libraries listed in ./lib_list.txt from
/// $QUARTUS_ROOTDIR/eda/sim_lib into the current directory.
#[derive(Parser, Debug)]
#[command(name = "copy-lib", version)]
struct Args {}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();

    // stdout is reserved for the filenames being copied
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let mut stdout = std::io::stdout().lock();
    let report = LibraryCopier::new(config).run(&mut stdout)?;

    tracing::debug!("Done: {} libraries", report.files.len());
    Ok(())
}
