use clap::Parser;
use ezargs_cli::cli_args::Args;
use ezargs_cli::report;
use ezargs_core::error::Result;
use ezargs_core::{config, file_handling, ParseOutcome};
use log::{debug, info, warn};
use std::process::ExitCode;

fn execute() -> Result<()> {
    let args = Args::parse();

    let declaration_path = config::get_declaration_path(args.config_path.as_deref());
    debug!("Declaration path: `{declaration_path}`");

    let declaration = file_handling::get_declaration(&declaration_path)?;
    let mut registry = declaration.build_registry()?;

    if args.usage {
        return registry.print_help();
    }

    let argv = args.full_argv(registry.app_name());
    let outcome = registry.parse(&argv, args.start_index)?;
    if outcome != ParseOutcome::Completed {
        info!("Parse of {} ended early: {outcome:?}", registry.app_name());
        return Ok(());
    }

    print!("{}", report::render(&registry, outcome));

    if args.strict {
        registry.ensure_required()?;
    } else {
        for alias in registry.missing_required() {
            warn!("Required argument `{alias}` has no value");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
