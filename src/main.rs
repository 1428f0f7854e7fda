// verbump - post-commit hook that bumps the patch version in VERSION

use clap::Parser;
use std::process;
use verbump::cli::{Cli, CliDispatcher};
use verbump::utils::error::UserError;
use verbump::utils::logging;

fn main() {
    logging::init();

    let cli = Cli::parse();

    let result = CliDispatcher::execute(cli);

    if let Err(err) = result {
        tracing::debug!("bump failed: {err:?}");
        let user_error = UserError::from_bump_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
