mod app;
mod commands;
mod keys;

use log::error;
use std::env;

fn main() {
	if env::var("RUST_LOG").is_err() {
		// log level not explicitly set by the user
		env::set_var("RUST_LOG", "info");
	}
	pretty_env_logger::init();

	let keys = keys::build_keys();
	let app = app::build_app(keys);
	let commands = commands::build_commands();

	let matches = app.get_matches();

	let (name, args) = match matches.subcommand() {
		Some(subcommand) => subcommand,
		None => {
			error!("No subcommand specified! Run `coffer help` for usage");
			std::process::exit(1);
		},
	};

	match commands.get(name) {
		Some(command) => {
			if let Err(err) = command.evaluate(args) {
				error!("An error occurred while executing the command: {}", err);
				std::process::exit(1);
			}
		},
		None => {
			error!("Unknown subcommand: {}", name);
			std::process::exit(1);
		},
	};
}
