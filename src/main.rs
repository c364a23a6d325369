use makegen::cli::commands::{CliArgs, Commands};
use makegen::cli::handlers::{handle_generate, handle_scan};
use makegen::util::logging;
use makegen::VERSION;

use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("makegen v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match args.effective_command() {
        Commands::Generate(generate_args) => handle_generate(&generate_args),
        Commands::Scan(scan_args) => handle_scan(&scan_args),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let mut config = logging::config_from_env();

    if let Some(level_str) = &args.log_level {
        config.level = logging::parse_level(level_str);
    } else if args.verbose {
        config.level = Level::DEBUG;
    } else if args.quiet {
        config.level = Level::ERROR;
    }

    logging::init_logging(config);
}
