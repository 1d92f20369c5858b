use clap::Parser;
use ecosort::{App, GameConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for item generation (same seed, same batches)
    #[arg(long)]
    seed: Option<u64>,

    /// Countdown at the start of a session, in seconds
    #[arg(long)]
    initial_time: Option<u32>,

    /// Print the effective configuration as RON and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut config = GameConfig::load()?;

    // Command-line flags override file and environment settings
    if let Some(seed) = args.seed {
        log::info!("--seed flag detected, using fixed seed {}", seed);
        config.debug.seed = Some(seed);
    }
    if let Some(secs) = args.initial_time {
        config.rules.initial_time_secs = secs;
        config.rules.validate()?;
    }

    if args.dump_config {
        println!("{}", config.to_ron()?);
        return Ok(());
    }

    if config.debug.verbose_logging {
        log::set_max_level(log::LevelFilter::Debug);
    }

    log::info!("Starting EcoSort");
    pollster::block_on(run(config))
}

async fn run(config: GameConfig) -> anyhow::Result<()> {
    let (app, event_loop) = App::new(config).await?;
    App::run(event_loop, app)
}
