use std::collections::HashMap;
use clap::{Arg, Command};

use crate::commands;
use crate::keys::key_names;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn build_app<'a>(key_map: HashMap<&'static str, Arg<'a>>) -> Command<'a> {
	Command::new("coffer-cli")
		.about("A command-line interface for packing directory trees into seekable containers")
		.version(VERSION)
		.subcommand(
			Command::new("pack")
				.version(commands::pack::VERSION)
				.about("Packs a source directory tree into a container")
				.arg(key_map.get(key_names::OUTPUT).unwrap())
				.arg(key_map.get(key_names::SOURCE).unwrap())
				.arg(key_map.get(key_names::NAME).unwrap()),
		)
		.subcommand(
			Command::new("unpack")
				.version(commands::unpack::VERSION)
				.about("Unpacks a whole container, reconstructing the packed tree")
				.arg(key_map.get(key_names::INPUT).unwrap())
				.arg(key_map.get(key_names::OUTPUT).unwrap()),
		)
		.subcommand(
			Command::new("list")
				.version(commands::list::VERSION)
				.about("Lists all the entries in a container and their metadata")
				.arg(key_map.get(key_names::INPUT).unwrap())
				.arg(key_map.get(key_names::SORT).unwrap()),
		)
		.subcommand(
			Command::new("get")
				.version(commands::get::VERSION)
				.about("Retrieves a single entry by index, without touching the rest of the container")
				.arg(key_map.get(key_names::INPUT).unwrap())
				.arg(key_map.get(key_names::ENTRY).unwrap())
				.arg(key_map.get(key_names::OUTPUT).unwrap()),
		)
		.subcommand(
			Command::new("verify")
				.version(commands::verify::VERSION)
				.about("Verifies the validity and integrity of a container")
				.arg(key_map.get(key_names::INPUT).unwrap()),
		)
}
