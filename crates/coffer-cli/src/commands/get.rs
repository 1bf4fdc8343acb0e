use std::fs::File;
use std::io::BufReader;

use coffer::prelude::*;

use super::CommandTrait;
use crate::keys::key_names;

pub const VERSION: &str = "0.1.0";

/// This command retrieves a single entry by index and saves it under its stored
/// path, or under an overridden output name
pub struct Evaluator;

impl CommandTrait for Evaluator {
	fn evaluate(&self, args: &clap::ArgMatches) -> anyhow::Result<()> {
		let input_path = match args.value_of(key_names::INPUT) {
			Some(path) => path,
			None => anyhow::bail!("Please provide an input path using the -i or --input key"),
		};

		let index: usize = match args.value_of(key_names::ENTRY) {
			Some(entry) => entry.parse()?,
			None => anyhow::bail!("Please provide an entry index using the -e or --entry key"),
		};

		// An optional file name override for the extracted entry
		let rename = args.value_of(key_names::OUTPUT);

		let input_file = match File::open(input_path) {
			Ok(it) => BufReader::new(it),
			Err(err) => anyhow::bail!("IOError: {} @ {}", err, input_path),
		};

		let mut archive = Archive::new(input_file)?;

		let written = match archive.unpack_entry(index, None, rename, None) {
			Ok(path) => path,
			Err(InternalError::IndexOutOfBounds { index, len }) => {
				anyhow::bail!("The index {} is out of bounds, {} only holds {} entries", index, input_path, len)
			},
			Err(err) => return Err(err.into()),
		};

		log::info!("Extracted entry {} to {}", index, written.to_string_lossy());

		Ok(())
	}
}
