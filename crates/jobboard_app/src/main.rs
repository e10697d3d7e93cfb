mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = platform::config::Args::parse();
    platform::logging::initialize(args.log);
    let config = platform::config::DashboardConfig::load(&args)?;
    platform::app::run_app(config)
}
