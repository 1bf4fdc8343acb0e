use std::{
	fmt,
	fs::{self, File},
	io::{Read, Seek, SeekFrom, Write},
	path::{Path, PathBuf},
};

use crate::global::{
	copy_chunked, entry::IndexEntry, error::*, header::Header, index::Index, optimal_block_size,
};

/// Read-mode handle over a container source.
///
/// Opening validates the header and eagerly loads the whole index, after which
/// any entry can be retrieved by insertion position without scanning the rest
/// of the archive. Every retrieval seeks to an absolute payload position before
/// reading, so no call depends on the cursor state a previous call left behind.
#[derive(Debug)]
pub struct Archive<T> {
	handle: T,
	header: Header,
	index: Index,
	end_of_index: u64,
	block_size: usize,
}

impl<T> Archive<T> {
	/// Name the container was created under
	#[inline(always)]
	pub fn name(&self) -> &str {
		&self.header.name
	}

	/// Number of entries in the container
	#[inline(always)]
	pub fn len(&self) -> usize {
		self.index.len()
	}

	/// Whether the container holds no entries
	#[inline(always)]
	pub fn is_empty(&self) -> bool {
		self.index.is_empty()
	}

	/// The loaded [`Index`]
	#[inline(always)]
	pub fn index(&self) -> &Index {
		&self.index
	}

	/// Byte offset at which the payload region begins. All entry offsets are
	/// relative to this position.
	#[inline(always)]
	pub fn end_of_index(&self) -> u64 {
		self.end_of_index
	}

	/// Fetch an entry's metadata by insertion position.
	///
	/// Fails with [`IndexOutOfBounds`](InternalError::IndexOutOfBounds) if
	/// `index` lies at or beyond the entry count.
	pub fn entry(&self, index: usize) -> InternalResult<&IndexEntry> {
		self.index.get(index).ok_or(InternalError::IndexOutOfBounds {
			index,
			len: self.index.len(),
		})
	}

	/// Consume the [`Archive`] and return the underlying handle
	pub fn into_inner(self) -> T {
		self.handle
	}
}

impl<T> Archive<T>
where
	T: Read + Seek,
{
	/// Parses an [`Archive`] from the given source.
	///
	/// The header is validated first, then all index records are loaded eagerly,
	/// so a source that fails here leaves no index behind. A draft header fails
	/// with [`UnfinalizedSource`](InternalError::UnfinalizedSource): the writer
	/// never finalized the container and its contents cannot be trusted.
	pub fn new(mut handle: T) -> InternalResult<Archive<T>> {
		// Start reading from the start of the input
		handle.seek(SeekFrom::Start(0))?;

		let header = Header::from_handle(&mut handle)?;
		header.validate()?;

		// The records follow the header directly, in insertion order
		let index = Index::from_handle(&mut handle, header.files)?;
		let end_of_index = (Header::BASE_SIZE + IndexEntry::SIZE * index.len()) as u64;

		Ok(Archive {
			handle,
			header,
			index,
			end_of_index,
			block_size: optimal_block_size(),
		})
	}

	/// Streams one entry's payload into the given writer, in block-sized chunks.
	///
	/// Seeks to the absolute payload position first, so calls are idempotent and
	/// independent of any prior read. Returns the number of bytes written.
	pub fn fetch_write<W: Write>(&mut self, index: usize, mut target: W) -> InternalResult<u64> {
		let (offset, length) = {
			let entry = self.entry(index)?;
			(entry.offset, entry.length)
		};

		self.handle.seek(SeekFrom::Start(self.end_of_index + offset))?;

		let mut buffer = vec![0u8; self.block_size];
		copy_chunked(&mut self.handle, &mut target, &mut buffer, length)
	}

	/// Retrieves one entry by insertion position and writes it out as a file,
	/// recreating its directory chain as needed.
	///
	/// The destination is `root/directory/name`, where `root` defaults to the
	/// current directory and `rename` overrides the stored file name. Directories
	/// that already exist are not an error. The optional callback observes
	/// `(directory, name)` once the entry is written. Returns the path written to.
	pub fn unpack_entry(
		&mut self, index: usize, root: Option<&Path>, rename: Option<&str>,
		mut callback: Option<&mut (dyn FnMut(&str, &str) + '_)>,
	) -> InternalResult<PathBuf> {
		let (directory, name) = {
			let entry = self.entry(index)?;
			(entry.directory.clone(), entry.name.clone())
		};

		let mut path = root.map(Path::to_path_buf).unwrap_or_default();

		// Create each missing component of the entry's directory chain
		if !directory.is_empty() {
			path.push(&directory);
			fs::create_dir_all(&path)?;
		};

		path.push(rename.unwrap_or(&name));

		let mut file = File::create(&path)?;
		self.fetch_write(index, &mut file)?;

		if let Some(callback) = callback.as_mut() {
			callback(&directory, &name);
		};

		Ok(path)
	}

	/// Extracts every entry in order, reconstructing the packed tree under
	/// `root`, which defaults to a directory named for the archive itself.
	pub fn unpack(
		&mut self, root: Option<&Path>, mut callback: Option<&mut (dyn FnMut(&str, &str) + '_)>,
	) -> InternalResult {
		let root = match root {
			Some(root) => root.to_path_buf(),
			None => PathBuf::from(&self.header.name),
		};

		fs::create_dir_all(&root)?;

		for index in 0..self.len() {
			self.unpack_entry(index, Some(&root), None, callback.as_deref_mut())?;
		}

		Ok(())
	}
}

impl<T> fmt::Display for Archive<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let bytes: u64 = self.index.iter().map(|entry| entry.length).sum();

		write!(
			f,
			"[Archive] name: {}, entries: {}, payload size: {}B",
			self.header.name,
			self.index.len(),
			bytes
		)
	}
}
