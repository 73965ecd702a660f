//! CLI entry point for the room layout generator

use clap::Parser;
use roomwave::io::cli::{Cli, LayoutRunner};

fn main() -> roomwave::Result<()> {
    let cli = Cli::parse();
    LayoutRunner::new(cli).run()
}
