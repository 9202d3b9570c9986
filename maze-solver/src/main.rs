//! Command-line front end: find shortest paths through grid mazes from a text menu.

use std::io;

use clap::Parser;
use maze_solver::{Args, Config, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from(args);
    log::debug!("starting with {config:?}");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&config, stdin.lock(), stdout.lock());
    session.run()?;
    Ok(())
}
