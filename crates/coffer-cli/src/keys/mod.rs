use clap::Arg;
use std::collections::HashMap;

pub mod key_names {
	pub(crate) const INPUT: &str = "INPUT";
	pub(crate) const OUTPUT: &str = "OUTPUT";

	pub(crate) const SOURCE: &str = "SOURCE";
	pub(crate) const NAME: &str = "NAME";

	pub(crate) const ENTRY: &str = "ENTRY";
	pub(crate) const SORT: &str = "SORT";
}

pub fn build_keys<'a>() -> HashMap<&'static str, Arg<'a>> {
	/* please only use this function once during the lifecycle of the program */
	let mut map = HashMap::with_capacity(6);

	/* The various keys usable in the CLI */
	// A general input source, usually a container file
	map.insert(
		key_names::INPUT,
		Arg::new(key_names::INPUT)
			.long("input")
			.short('i')
			.value_name(key_names::INPUT)
			.help("A general input source, for example a container file to read")
			.required(false)
			.takes_value(true)
			.number_of_values(1),
	);

	// A general output target
	map.insert(
		key_names::OUTPUT,
		Arg::new(key_names::OUTPUT)
			.short('o')
			.long("output")
			.value_name(key_names::OUTPUT)
			.help("A general output target, for example a file or directory to write to")
			.required(false)
			.takes_value(true)
			.number_of_values(1),
	);

	// The directory to pack
	map.insert(
		key_names::SOURCE,
		Arg::new(key_names::SOURCE)
			.short('s')
			.long("source")
			.value_name(key_names::SOURCE)
			.help("The source directory whose tree gets packed into the container")
			.required(false)
			.takes_value(true)
			.number_of_values(1),
	);

	// The name stored in the container header
	map.insert(
		key_names::NAME,
		Arg::new(key_names::NAME)
			.short('n')
			.long("name")
			.value_name(key_names::NAME)
			.help(
				"The archive name stored in the container header, at most 32 bytes. Defaults to the output file's stem",
			)
			.required(false)
			.takes_value(true)
			.number_of_values(1),
	);

	// The insertion position of an entry within the index
	map.insert(
		key_names::ENTRY,
		Arg::new(key_names::ENTRY)
			.short('e')
			.long("entry")
			.value_name(key_names::ENTRY)
			.help("The index of an entry within the container, as shown by the list subcommand")
			.required(false)
			.takes_value(true)
			.number_of_values(1)
			.validator(|entry| match entry.parse::<usize>() {
				Ok(_) => Ok(()),
				Err(err) => Err(format!("Please provide a numeric entry index, not: {}. ({})", entry, err)),
			}),
	);

	// How to sort the rows of the list subcommand
	map.insert(
		key_names::SORT,
		Arg::new(key_names::SORT)
			.long("sort")
			.value_name(key_names::SORT)
			.help("How to sort entries within the table, either based on size or alphabetically")
			.required(false)
			.takes_value(true)
			.number_of_values(1),
	);

	map
}
