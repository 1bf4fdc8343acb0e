use std::io::Read;
use super::{decode_fixed_str, encode_fixed_str, error::*};

/// The fixed-size header at the very start of a container.
///
/// Written twice over a container's life: once as an all-zero draft when the
/// target is created (the entry count is not yet known), and once in final form
/// when the writer finalizes. Only the final form carries the magic.
#[derive(Debug)]
pub(crate) struct Header {
	pub(crate) magic: u32,
	pub name: String,
	pub files: u64,
}

impl Header {
	pub const BASE_SIZE: usize = crate::MAGIC_LENGTH + crate::ARCHIVE_NAME_LENGTH + Self::FILES_SIZE;

	// Data appears in this order
	pub const FILES_SIZE: usize = 8;

	/// Validates this Header's MAGIC. A draft header (all zeroes) means the
	/// finalize step never ran, so the regions after it cannot be trusted.
	pub(crate) fn validate(&self) -> InternalResult {
		if self.magic == 0 {
			return Err(InternalError::UnfinalizedSource);
		};

		if self.magic != crate::MAGIC {
			return Err(InternalError::MalformedSource(self.magic));
		};

		Ok(())
	}

	pub(crate) fn from_handle<T: Read>(mut handle: T) -> InternalResult<Header> {
		let mut buffer: [u8; Header::BASE_SIZE] = [0u8; Header::BASE_SIZE];
		handle.read_exact(&mut buffer)?;

		// Construct header
		Ok(Header {
			// Read magic, u32 from [u8;4]
			magic: u32::from_le_bytes(buffer[0..4].try_into().unwrap()),
			// Read the archive name, 32 bytes of zero-padded text
			name: decode_fixed_str(&buffer[4..36], "archive name")?,
			// Read the entry count, u64 from [u8;8]
			files: u64::from_le_bytes(buffer[36..44].try_into().unwrap()),
		})
	}

	pub(crate) fn to_bytes(&self) -> [u8; Header::BASE_SIZE] {
		let mut buffer: [u8; Header::BASE_SIZE] = [0u8; Header::BASE_SIZE];
		buffer[0..4].copy_from_slice(&self.magic.to_le_bytes());
		encode_fixed_str(&mut buffer[4..36], &self.name);
		buffer[36..44].copy_from_slice(&self.files.to_le_bytes());
		buffer
	}
}
