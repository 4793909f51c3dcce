use clap::Parser;
use tracing_subscriber::EnvFilter;

use depot::cli::Cli;
use depot::vcs::GitCli;

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Project root is read once here and threaded explicitly; nothing below
    // this point touches or mutates the process working directory.
    let project_root = std::env::current_dir()?;

    depot::setup::run(&project_root, &GitCli)
}
