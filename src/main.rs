mod cli;
mod commands;
mod installers;
mod libs;
mod logger;
mod schemas;

use clap::Parser;
use cli::Cli;
use commands::install;

// Usage errors share the configuration-error exit code.
const USAGE_EXIT_CODE: i32 = 3;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // `--help` and `--version` also arrive here, on stdout.
            let code = if e.use_stderr() { USAGE_EXIT_CODE } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    logger::init(cli.debug);

    match install::run(cli) {
        Ok(summary) => {
            log_debug!(
                "Run finished: {} installed, {} planned",
                summary.installed.len(),
                summary.planned
            );
        }
        Err(e) => {
            log_error!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}
