use std::{
	fs::File,
	io::{Seek, SeekFrom, Write},
	path::Path,
};

use crate::global::{copy_chunked, entry::IndexEntry, error::*, header::Header, index::Index, optimal_block_size};

/// Write-mode handle over a container target.
///
/// Sequences the write lifecycle: [`create`](Container::create) reserves the
/// header's position with a draft, [`add`](Container::add) queues entries,
/// [`pack`](Container::pack) streams the payload in and fills the index region,
/// and [`finalize`](Container::finalize) patches the real header in place. A
/// target that is dropped before `finalize` holds a draft header, which the
/// loader refuses to open.
pub struct Container<W: Write + Seek> {
	target: W,
	name: String,
	index: Index,
	payload_cursor: u64,
	block_size: usize,
}

impl<W: Write + Seek> Container<W> {
	/// Opens a new write-mode container over the given target.
	///
	/// Writes the draft header: a header-sized run of zero bytes. The real header
	/// can only be written once the entry count is known, but its position on disk
	/// must be reserved before the index and payload regions are laid out after it.
	pub fn create(mut target: W, name: &str) -> InternalResult<Container<W>> {
		if name.len() > crate::ARCHIVE_NAME_LENGTH {
			return Err(InternalError::FieldOverflow {
				field: "archive name",
				length: name.len(),
				max: crate::ARCHIVE_NAME_LENGTH,
			});
		};

		target.seek(SeekFrom::Start(0))?;
		target.write_all(&[0u8; Header::BASE_SIZE])?;

		Ok(Container {
			target,
			name: name.to_string(),
			index: Index::new(),
			payload_cursor: 0,
			block_size: optimal_block_size(),
		})
	}

	/// Queues one file for packing. `directory` is the file's location relative
	/// to the source root that [`pack`](Container::pack) will read from, empty
	/// for files at the root itself.
	///
	/// Fails with [`FieldOverflow`](InternalError::FieldOverflow) if either field
	/// exceeds its fixed on-disk width, oversize values are never truncated.
	pub fn add(&mut self, directory: &str, name: &str) -> InternalResult {
		self.index.push_new(directory, name)
	}

	/// Number of queued entries
	#[inline(always)]
	pub fn len(&self) -> usize {
		self.index.len()
	}

	/// Whether any entries have been queued
	#[inline(always)]
	pub fn is_empty(&self) -> bool {
		self.index.is_empty()
	}

	/// Byte offset at which the payload region begins. (Every record is the same size!)
	fn end_of_index(&self) -> u64 {
		(Header::BASE_SIZE + IndexEntry::SIZE * self.index.len()) as u64
	}

	/// Streams every queued file from under `source` into the payload region, in
	/// insertion order, assigning each entry's length and offset and writing its
	/// record into its fixed slot in the index region.
	///
	/// The optional callback observes `(directory, name)` once per packed file.
	/// If any source file fails to open or read the whole operation aborts, no
	/// entry is skipped over. Returns the number of payload bytes written.
	pub fn pack(
		&mut self, source: impl AsRef<Path>, mut callback: Option<&mut dyn FnMut(&str, &str)>,
	) -> InternalResult<u64> {
		let source = source.as_ref();
		let end_of_index = self.end_of_index();
		let mut buffer = vec![0u8; self.block_size];

		// Zero-fill the whole index region up front, so the record writes into
		// fixed slots below never have to grow the file out of order
		self.target.seek(SeekFrom::Start(Header::BASE_SIZE as u64))?;

		let mut remaining = IndexEntry::SIZE * self.index.len();
		while remaining > 0 {
			let chunk = remaining.min(buffer.len());
			self.target.write_all(&buffer[..chunk])?;
			remaining -= chunk;
		}

		self.payload_cursor = 0;

		for (position, entry) in self.index.entries.iter_mut().enumerate() {
			// Resolve the path to read this entry from, where `source` is the directory being packed
			let mut path = source.to_path_buf();
			if !entry.directory.is_empty() {
				path.push(&entry.directory);
			};
			path.push(&entry.name);

			let mut file = File::open(&path)?;

			entry.length = file.metadata()?.len();
			entry.offset = self.payload_cursor;

			// Each record lands in its fixed slot within the index region
			let record = entry.to_bytes()?;
			self.target
				.seek(SeekFrom::Start((Header::BASE_SIZE + IndexEntry::SIZE * position) as u64))?;
			self.target.write_all(&record)?;

			// The payload region begins immediately after the index region
			self.target.seek(SeekFrom::Start(end_of_index + entry.offset))?;
			copy_chunked(&mut file, &mut self.target, &mut buffer, entry.length)?;

			self.payload_cursor += entry.length;

			if let Some(callback) = callback.as_mut() {
				callback(&entry.directory, &entry.name);
			};
		}

		Ok(self.payload_cursor)
	}

	/// Patches the final header over the draft written at creation. Only once
	/// this completes is the container valid to open.
	///
	/// Consuming the handle makes a second finalize unrepresentable. Returns the
	/// underlying target.
	pub fn finalize(mut self) -> InternalResult<W> {
		let header = Header {
			magic: crate::MAGIC,
			name: self.name,
			files: self.index.len() as u64,
		};

		self.target.seek(SeekFrom::Start(0))?;
		self.target.write_all(&header.to_bytes())?;
		self.target.flush()?;

		Ok(self.target)
	}
}
