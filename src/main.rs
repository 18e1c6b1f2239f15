use clap::Parser;

use ablog::api::BlogApi;
use ablog::error::Result;

mod cli;

use cli::args::Cli;
use cli::shell::Shell;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let api = BlogApi::new(cli.session_options());
    Shell::new(api, cli.plain).run()
}
