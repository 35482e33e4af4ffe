mod args;
mod command;
mod file_io;
mod script;

use anyhow::Context;
use args::Args;
use clap::Parser;
use env_logger::Env;
use std::io;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str())).init();

    let stdout = io::stdout().lock();
    let summary = match &args.script {
        Some(path) => {
            log::info!("Running commands from '{}'", path.display());
            let reader = file_io::open_file_buf_read(path)
                .with_context(|| format!("could not open script '{}'", path.display()))?;
            script::run(reader, stdout)?
        }
        None => script::run(io::stdin().lock(), stdout)?,
    };

    log::info!(
        "{} commands executed, {} rejected, {} entries left",
        summary.executed,
        summary.rejected,
        summary.remaining
    );
    Ok(())
}
