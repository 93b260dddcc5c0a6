use clap::Parser;

use content_guard::cli::{Cli, Commands};
use content_guard::commands::{run_check, run_config, run_init, run_presets};
use content_guard::logging::init_tracing;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
        Commands::Presets => run_presets(),
    };

    std::process::exit(exit_code);
}
