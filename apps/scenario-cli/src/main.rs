//! Scenario CLI - records and inspects guided scenario progress in a JSON file.

use clap::Parser;
use scenario_cli::{run, Args, CliConfig, CliError, JsonFileStore};
use scenario_state::ScenarioStateHelper;
use tracing::info;

fn main() {
    let args = Args::parse();

    let config = match CliConfig::resolve(args.file.clone(), args.verbose) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_env_filter(config.log_filter.as_str())
        .init();

    if let Err(e) = execute(&args, &config) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn execute(args: &Args, config: &CliConfig) -> Result<(), CliError> {
    info!(
        file = %config.state_file.display(),
        scenario_id = %args.scenario,
        players = args.players,
        "Opening scenario state"
    );
    let store = JsonFileStore::open(&config.state_file)?;
    let helper = ScenarioStateHelper::new(args.scenario.as_str(), &store, &store, args.players);

    let output = run(&args.command, &helper)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
