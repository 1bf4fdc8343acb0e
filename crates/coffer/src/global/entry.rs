use std::{fmt, io::Read};
use super::{decode_fixed_str, encode_fixed_str, error::*};

/// Stand-alone metadata for one packed file, the in-memory form of one
/// fixed-size index record.
///
/// `offset` is relative to the end of the index region, so the absolute payload
/// position of an entry is `end_of_index + offset`. Records are the same width
/// on both the read and write paths, which is what makes the end of the index
/// computable without scanning any payload.
#[derive(Debug, Clone, Default)]
pub struct IndexEntry {
	/// File name of the entry
	pub name: String,
	/// Directory the entry lives in, relative to the packed root. Empty means the root itself
	pub directory: String,
	/// Byte count of the entry's payload
	pub length: u64,
	/// Byte offset of the entry's payload, relative to the end of the index region
	pub offset: u64,
	/// Reserved, always zero on disk
	pub mode: u64,
}

impl IndexEntry {
	// 64(name) + 32(directory) + 8(length) + 8(offset) + 8(mode)
	pub(crate) const SIZE: usize = crate::ENTRY_NAME_LENGTH + crate::ENTRY_DIRECTORY_LENGTH + 24;

	/// Validates field widths and builds a fresh entry, length and offset are
	/// assigned later by the packer.
	pub(crate) fn new(directory: &str, name: &str) -> InternalResult<IndexEntry> {
		if name.len() > crate::ENTRY_NAME_LENGTH {
			return Err(InternalError::FieldOverflow {
				field: "name",
				length: name.len(),
				max: crate::ENTRY_NAME_LENGTH,
			});
		};

		if directory.len() > crate::ENTRY_DIRECTORY_LENGTH {
			return Err(InternalError::FieldOverflow {
				field: "directory",
				length: directory.len(),
				max: crate::ENTRY_DIRECTORY_LENGTH,
			});
		};

		Ok(IndexEntry {
			name: name.to_string(),
			directory: directory.to_string(),
			length: 0,
			offset: 0,
			mode: 0,
		})
	}

	/// Given a read handle, will proceed to read and parse bytes into an [`IndexEntry`] struct. (de-serialization)
	pub(crate) fn from_handle<T: Read>(mut handle: T) -> InternalResult<IndexEntry> {
		let mut buffer: [u8; IndexEntry::SIZE] = [0u8; IndexEntry::SIZE];
		handle.read_exact(&mut buffer)?;

		// Construct entry
		Ok(IndexEntry {
			name: decode_fixed_str(&buffer[0..64], "name")?,
			directory: decode_fixed_str(&buffer[64..96], "directory")?,
			length: u64::from_le_bytes(buffer[96..104].try_into().unwrap()),
			offset: u64::from_le_bytes(buffer[104..112].try_into().unwrap()),
			mode: u64::from_le_bytes(buffer[112..120].try_into().unwrap()),
		})
	}

	/// Serializes an [`IndexEntry`] into its fixed-size on-disk record
	pub(crate) fn to_bytes(&self) -> InternalResult<[u8; IndexEntry::SIZE]> {
		// The fields are public, so the widths validated on construction are
		// re-checked before any bytes are laid out
		if self.name.len() > crate::ENTRY_NAME_LENGTH {
			return Err(InternalError::FieldOverflow {
				field: "name",
				length: self.name.len(),
				max: crate::ENTRY_NAME_LENGTH,
			});
		};

		if self.directory.len() > crate::ENTRY_DIRECTORY_LENGTH {
			return Err(InternalError::FieldOverflow {
				field: "directory",
				length: self.directory.len(),
				max: crate::ENTRY_DIRECTORY_LENGTH,
			});
		};

		let mut buffer: [u8; IndexEntry::SIZE] = [0u8; IndexEntry::SIZE];
		encode_fixed_str(&mut buffer[0..64], &self.name);
		encode_fixed_str(&mut buffer[64..96], &self.directory);
		buffer[96..104].copy_from_slice(&self.length.to_le_bytes());
		buffer[104..112].copy_from_slice(&self.offset.to_le_bytes());
		buffer[112..120].copy_from_slice(&self.mode.to_le_bytes());

		Ok(buffer)
	}

	/// Relative path of this entry within the packed tree
	pub fn path(&self) -> String {
		if self.directory.is_empty() {
			self.name.clone()
		} else {
			format!("{}/{}", self.directory, self.name)
		}
	}
}

impl fmt::Display for IndexEntry {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(
			f,
			"[IndexEntry] path: {}, length: {}, offset: {}",
			self.path(),
			self.length,
			self.offset
		)
	}
}
