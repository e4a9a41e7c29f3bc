use clap::Parser;
use libpack_cli::{
    cli::{Cli, Command},
    commands, error, logger, ui,
};

fn main() -> miette::Result<()> {
    let args = Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        Command::Compose(compose_args) => commands::compose_execute(compose_args),
        Command::Outputs(matrix_args) => commands::outputs_execute(matrix_args),
        Command::Check(check_args) => commands::check_execute(check_args),
    };

    result.map_err(error::cli_error_to_miette)
}
