//! Entry point for the packwright task runner: argument parsing, logger
//! setup, and task dispatch.

use clap::Parser;
use miette::Result;
use packwright_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors();

    let result = match args.task {
        None => {
            commands::default_task();
            Ok(())
        }
        Some(cli::Task::Build(build_args)) => commands::build_execute(build_args),
        Some(cli::Task::Serve(serve_args)) => commands::serve_execute(serve_args),
        Some(cli::Task::Test(test_args)) => commands::test_execute(test_args),
    };

    result.map_err(error::task_error_to_miette)
}
