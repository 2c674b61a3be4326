mod app;
mod logging;
mod oracle;
mod scenario;
mod sink;

use clap::Parser;

use crate::app::Args;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init(&args.log_level)?;

    app::run(args)
}
