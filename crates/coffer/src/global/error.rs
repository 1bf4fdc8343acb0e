use std::io;
use thiserror::Error;

/// Internal `Result` type alias used by `coffer`. Basically equal to: `Result<T, InternalError>`
pub type InternalResult<T = ()> = Result<T, InternalError>;

/// All errors manifestable within `coffer` collected into a neat enum
#[derive(Debug, Error)]
pub enum InternalError {
	/// thin wrapper over [io::Error](std::io::Error), captures all IO errors
	#[error("[CofferError::IOError] {0}")]
	IOError(#[from] io::Error),
	/// invalid MAGIC sequence in the given source, hinting at corruption or possible incompatibility with the given source
	#[error("[CofferError::MalformedSource] Invalid magic found in header, possible incompatibility with the given source. Magic found: {0:#010x}")]
	MalformedSource(u32),
	/// the header is still a draft: packing never completed and the index and payload regions cannot be trusted
	#[error("[CofferError::UnfinalizedSource] The header is still a draft, the container was never finalized")]
	UnfinalizedSource,
	/// a fixed-width text field did not decode into valid UTF-8
	#[error("[CofferError::MalformedEntry] {0}")]
	MalformedEntry(String),
	/// the requested entry index lies beyond the loaded index
	#[error("[CofferError::IndexOutOfBounds] The index: {index} is out of bounds, the container only holds: {len} entries")]
	IndexOutOfBounds {
		/// the requested entry index
		index: usize,
		/// the number of entries in the container
		len: usize,
	},
	/// a supplied name or directory does not fit its fixed-width field
	#[error("[CofferError::FieldOverflow] The {field} field holds at most {max} bytes, got: {length}")]
	FieldOverflow {
		/// which fixed-width field overflowed
		field: &'static str,
		/// byte length of the supplied value
		length: usize,
		/// capacity of the field in bytes
		max: usize,
	},
}
