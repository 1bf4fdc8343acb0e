use std::fs::File;
use std::io::BufReader;

use coffer::archive::*;

use super::CommandTrait;
use crate::keys::key_names;

pub const VERSION: &str = "0.1.0";

/// This command verifies the validity and integrity of a container
pub struct Evaluator;

impl CommandTrait for Evaluator {
	fn evaluate(&self, args: &clap::ArgMatches) -> anyhow::Result<()> {
		let input_path = match args.value_of(key_names::INPUT) {
			Some(path) => path,
			None => anyhow::bail!("Please provide an input path using the -i or --input key"),
		};

		let input_file = File::open(input_path)?;
		let expected_length = input_file.metadata()?.len();

		let archive = match Archive::new(BufReader::new(input_file)) {
			Ok(archive) => archive,
			Err(InternalError::MalformedSource(magic)) => anyhow::bail!("Invalid magic sequence: {:#010x}", magic),
			Err(InternalError::UnfinalizedSource) => {
				anyhow::bail!("The container was never finalized, its index and payload cannot be trusted")
			},
			Err(err) => anyhow::bail!("Unable to verify the container source, error: {}", err),
		};

		// The payload region is contiguous: the first entry sits at the start,
		// every later entry directly after its predecessor
		let mut expected_offset = 0u64;

		for (position, entry) in archive.index().iter().enumerate() {
			if entry.offset != expected_offset {
				anyhow::bail!(
					"Entry {} ({}) sits at payload offset {}, expected {}. The index is corrupt",
					position,
					entry.path(),
					entry.offset,
					expected_offset
				);
			};

			expected_offset += entry.length;
		}

		// And the payload region runs exactly to the end of the file
		let computed_length = archive.end_of_index() + expected_offset;
		if computed_length != expected_length {
			anyhow::bail!(
				"The container is {} bytes, but header + index + payload compute to {}. It was truncated or padded",
				expected_length,
				computed_length
			);
		};

		log::info!(
			"Ok: {} entries, {} payload bytes, header and index are consistent",
			archive.len(),
			expected_offset
		);

		Ok(())
	}
}
