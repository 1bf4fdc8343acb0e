pub mod entry;
pub mod error;
pub(crate) mod header;
pub mod index;

use std::io::{Read, Write};
use self::error::*;

// Fallback I/O chunk size for hosts where the filesystem block size cannot be queried.
pub(crate) const DEFAULT_BLOCK_SIZE: usize = 8192;

/// Preferred I/O block size of the host filesystem. Queried once per handle and
/// used to size every payload copy buffer, payload is never moved byte-at-a-time.
pub(crate) fn optimal_block_size() -> usize {
	#[cfg(unix)]
	{
		use std::os::unix::fs::MetadataExt;

		if let Ok(metadata) = std::fs::metadata("/") {
			let block_size = metadata.blksize() as usize;
			if block_size > 0 {
				return block_size;
			}
		}
	}

	DEFAULT_BLOCK_SIZE
}

/// Copies exactly `length` bytes from `reader` into `writer` through the given
/// block-sized scratch buffer.
pub(crate) fn copy_chunked<R: Read, W: Write>(
	reader: &mut R, writer: &mut W, buffer: &mut [u8], length: u64,
) -> InternalResult<u64> {
	let mut remaining = length;

	while remaining > 0 {
		let chunk = (buffer.len() as u64).min(remaining) as usize;

		reader.read_exact(&mut buffer[..chunk])?;
		writer.write_all(&buffer[..chunk])?;

		remaining -= chunk as u64;
	}

	Ok(length)
}

// Fixed-width text fields are zero-padded. A full-width value carries no
// terminator, so decoding stops at the first zero byte or the end of the field.
pub(crate) fn encode_fixed_str(field: &mut [u8], value: &str) {
	field[..value.len()].copy_from_slice(value.as_bytes());
}

pub(crate) fn decode_fixed_str(field: &[u8], field_name: &'static str) -> InternalResult<String> {
	let end = field.iter().position(|byte| *byte == 0).unwrap_or(field.len());

	match std::str::from_utf8(&field[..end]) {
		Ok(value) => Ok(value.to_string()),
		Err(err) => Err(InternalError::MalformedEntry(format!(
			"invalid UTF-8 in the {} field: {}",
			field_name, err
		))),
	}
}
