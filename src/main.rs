use clap::Parser;

use sitedesk_access::cli::{execute_command, Cli};
use sitedesk_access::config::init_logging;

fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let cli = Cli::parse();

    if let Err(e) = execute_command(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
