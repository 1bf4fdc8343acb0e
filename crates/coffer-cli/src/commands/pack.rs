use std::path::{Path, PathBuf};

use coffer::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use super::CommandTrait;
use crate::keys::key_names;

pub const VERSION: &str = "0.1.0";

/// This command packs a directory tree into a container
pub struct Evaluator;

impl CommandTrait for Evaluator {
	fn evaluate(&self, args: &clap::ArgMatches) -> anyhow::Result<()> {
		let output_path = match args.value_of(key_names::OUTPUT) {
			Some(path) => path,
			None => anyhow::bail!("Please provide an output path using the -o or --output key"),
		};

		let source = match args.value_of(key_names::SOURCE) {
			Some(path) => PathBuf::from(path),
			None => anyhow::bail!("Please provide a source directory using the -s or --source key"),
		};

		if !source.is_dir() {
			anyhow::bail!("The source must be a directory: {}", source.to_string_lossy());
		};

		// The archive name defaults to the output file's stem
		let name = match args.value_of(key_names::NAME) {
			Some(name) => name.to_string(),
			None => Path::new(output_path)
				.file_stem()
				.map(|stem| stem.to_string_lossy().into_owned())
				.unwrap_or_default(),
		};

		// Walk the source tree into (relative directory, file name) pairs, in a
		// stable order so repeated packs of the same tree produce the same index
		let mut pairs = vec![];

		for step in WalkDir::new(&source).min_depth(1).sort_by_file_name() {
			let step = step?;

			if !step.file_type().is_file() {
				continue;
			};

			let relative = step.path().strip_prefix(&source)?;
			let directory = match relative.parent() {
				Some(parent) => parent.to_string_lossy().into_owned(),
				None => String::new(),
			};
			let file_name = step.file_name().to_string_lossy().into_owned();

			pairs.push((directory, file_name));
		}

		// Pack into a temporary file, only persisted to the output path on success
		let temporary = NamedTempFile::new()?;
		let mut container = Container::create(temporary, &name)?;

		for (directory, file_name) in &pairs {
			container.add(directory, file_name)?;
		}

		let progress = ProgressBar::new(container.len() as u64);
		progress.set_style(
			ProgressStyle::default_bar()
				.template(super::PROGRESS_BAR_STYLE)?
				.progress_chars("█░-"),
		);

		let mut callback = |directory: &str, file_name: &str| {
			progress.inc(1);
			progress.set_message(if directory.is_empty() {
				file_name.to_string()
			} else {
				format!("{}/{}", directory, file_name)
			});
		};

		let bytes_written = container.pack(&source, Some(&mut callback))?;
		let temporary = container.finalize()?;
		temporary.persist(output_path)?;

		progress.finish_and_clear();
		log::info!(
			"Packed {} files ({} payload bytes) into {}",
			pairs.len(),
			bytes_written,
			output_path
		);

		Ok(())
	}
}
