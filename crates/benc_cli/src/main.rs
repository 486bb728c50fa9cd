#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;
mod logging;

#[derive(Parser)]
#[command(name = "benc", about = "Bencode inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print decoded value trees.
	Show(cmd::show::Args),
	/// Resolve a key path and print the value found there.
	Get(cmd::get::Args),
	/// Print node statistics.
	Info(cmd::info::Args),
	/// Validate that the input is well formed.
	Check(cmd::check::Args),
}

fn main() {
	logging::init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> benc::bencode::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Show(args) => cmd::show::run(args),
		Commands::Get(args) => cmd::get::run(args),
		Commands::Info(args) => cmd::info::run(args),
		Commands::Check(args) => cmd::check::run(args),
	}
}
