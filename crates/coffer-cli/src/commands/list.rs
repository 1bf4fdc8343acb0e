use std::fs::File;
use std::io::BufReader;

use coffer::prelude::*;
use indicatif::HumanBytes;
use tabled::{
	Table, Tabled,
	settings::{*, object::Columns},
};

use super::CommandTrait;
use crate::keys::key_names;

pub const VERSION: &str = "0.1.0";

/// This command lists the entries in a container in tabulated form
pub struct Evaluator;

impl CommandTrait for Evaluator {
	fn evaluate(&self, args: &clap::ArgMatches) -> anyhow::Result<()> {
		let archive_path = match args.value_of(key_names::INPUT) {
			Some(path) => path,
			None => {
				anyhow::bail!("Please provide an input container file using the -i or --input keys!")
			},
		};

		let file = BufReader::new(File::open(archive_path)?);
		let archive = Archive::new(file)?;

		// log basic metadata
		println!("{}", archive);

		let mut entries: Vec<_> = archive.index().iter().enumerate().collect();

		// Sort the entries accordingly
		match args.value_of(key_names::SORT) {
			Some("alphabetical") => entries.sort_by(|(_, a), (_, b)| a.path().cmp(&b.path())),
			Some("alphabetical-reversed") => entries.sort_by(|(_, a), (_, b)| b.path().cmp(&a.path())),
			Some("size-ascending") => entries.sort_by(|(_, a), (_, b)| a.length.cmp(&b.length)),
			Some("size-descending") => entries.sort_by(|(_, a), (_, b)| b.length.cmp(&a.length)),
			Some(sort) => anyhow::bail!("Unknown sort option provided: {}. Valid sort types are: 'alphabetical' 'alphabetical-reversed' 'size-ascending' 'size-descending'", sort),
			_ => (),
		};

		let end_of_index = archive.end_of_index();
		let table_entries: Vec<FileTableEntry> = entries
			.into_iter()
			.map(|(position, entry)| FileTableEntry {
				index: position,
				path: entry.path(),
				size: HumanBytes(entry.length).to_string(),
				offset: format!("{:#x}", end_of_index + entry.offset),
			})
			.collect();

		let mut table = Table::new(table_entries);
		table
			.with(Style::rounded())
			.with(Modify::list(Columns::new(..1), Alignment::left()));

		println!("{}", table);

		Ok(())
	}
}

#[derive(Tabled)]
struct FileTableEntry {
	index: usize,
	path: String,
	size: String,
	offset: String,
}
