use std::{io::Read, slice};
use super::{entry::IndexEntry, error::*};

/// Insertion-ordered collection of [`IndexEntry`] records, one per packed file.
///
/// The write path appends entries one at a time as files are queued; the read
/// path loads the whole index region eagerly at open time. Either way entries
/// keep their insertion order, which is also their payload order: the payload
/// region is contiguous, so `entries[0].offset == 0` and every later offset is
/// the previous offset plus the previous length.
#[derive(Debug, Default)]
pub struct Index {
	pub(crate) entries: Vec<IndexEntry>,
}

impl Index {
	// Starting capacity of the backing storage, growth past it is geometric
	pub(crate) const INITIAL_CAPACITY: usize = 8;

	pub(crate) fn new() -> Index {
		Index {
			entries: Vec::with_capacity(Index::INITIAL_CAPACITY),
		}
	}

	/// Validates the given fields and appends a fresh entry, with length and
	/// offset left for the packer to assign.
	pub(crate) fn push_new(&mut self, directory: &str, name: &str) -> InternalResult {
		let entry = IndexEntry::new(directory, name)?;

		// Vec doubles when full, keeping appends amortized O(1)
		self.entries.push(entry);
		Ok(())
	}

	/// Bulk-loads `count` records from the handle, in on-disk order.
	pub(crate) fn from_handle<T: Read>(mut handle: T, count: u64) -> InternalResult<Index> {
		// Capacity grows as records actually parse, a corrupt count cannot
		// trigger a huge up-front allocation
		let mut entries = Vec::new();

		for _ in 0..count {
			entries.push(IndexEntry::from_handle(&mut handle)?);
		}

		Ok(Index { entries })
	}

	/// Number of entries in the index
	#[inline(always)]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the index holds no entries
	#[inline(always)]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Fetch an entry's metadata by insertion position
	pub fn get(&self, index: usize) -> Option<&IndexEntry> {
		self.entries.get(index)
	}

	/// Iterate over the entries in insertion order
	pub fn iter(&self) -> slice::Iter<'_, IndexEntry> {
		self.entries.iter()
	}
}

impl<'a> IntoIterator for &'a Index {
	type Item = &'a IndexEntry;
	type IntoIter = slice::Iter<'a, IndexEntry>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
