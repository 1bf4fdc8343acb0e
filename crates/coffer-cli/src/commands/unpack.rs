use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

use coffer::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};

use super::CommandTrait;
use crate::keys::key_names;

pub const VERSION: &str = "0.1.0";

/// This command extracts a whole container into the specified output folder
pub struct Evaluator;

impl CommandTrait for Evaluator {
	fn evaluate(&self, args: &clap::ArgMatches) -> anyhow::Result<()> {
		let input_path = match args.value_of(key_names::INPUT) {
			Some(path) => path,
			None => anyhow::bail!("Please provide an input path using the -i or --input key"),
		};

		// Defaults to a directory named for the archive itself
		let output_path = args.value_of(key_names::OUTPUT).map(PathBuf::from);

		if let Some(path) = output_path.as_deref() {
			if path.is_file() {
				anyhow::bail!("Please provide a directory|folder path as the value of -o | --output")
			};
		};

		let input_file = match File::open(input_path) {
			Ok(it) => BufReader::new(it),
			Err(err) => anyhow::bail!("IOError: {} @ {}", err, input_path),
		};

		// Parse then extract the container
		let mut archive = match Archive::new(input_file) {
			Ok(archive) => archive,
			Err(InternalError::UnfinalizedSource) => {
				anyhow::bail!("{} was never finalized, its contents cannot be trusted. Re-pack it", input_path)
			},
			Err(InternalError::MalformedSource(magic)) => {
				anyhow::bail!("{} is not a coffer container, found magic: {:#010x}", input_path, magic)
			},
			Err(err) => anyhow::bail!("Encountered an error: {}", err),
		};

		// For measuring the time difference
		let time = Instant::now();

		let progress = ProgressBar::new(archive.len() as u64);
		progress.set_style(
			ProgressStyle::default_bar()
				.template(super::PROGRESS_BAR_STYLE)?
				.progress_chars("█░-"),
		);

		let mut callback = |directory: &str, name: &str| {
			progress.inc(1);
			progress.set_message(if directory.is_empty() {
				name.to_string()
			} else {
				format!("{}/{}", directory, name)
			});
		};

		archive.unpack(output_path.as_deref(), Some(&mut callback))?;

		progress.finish_and_clear();
		log::info!("Extracted {} files in {}s", archive.len(), time.elapsed().as_secs_f64());

		Ok(())
	}
}
