#![deny(missing_docs)]

/*!
A seekable container format, in pure Rust.

`coffer` packs a directory tree into a single container file with a fixed-layout
index, so any packed file can be retrieved by its insertion position without
scanning the rest of the archive. The layout is three contiguous regions: a
fixed-size header, `file count` fixed-size index records, and the raw payload
bytes in entry order.

### 🧰 Cargo Features
- `archive`: Enables the [`Archive`](crate::archive::Archive) loader.
- `builder`: Enables the [`Container`](crate::builder::Container) writer.
- `default`: Enables both of the above features.

### 🀄 Show me some code

```no_run
use std::fs::File;
use coffer::prelude::*;

// queue entries, then stream them in from under "assets/"
let target = File::options().read(true).write(true).create(true).open("assets.cfr")?;
let mut container = Container::create(target, "assets")?;

container.add("", "readme.txt")?;
container.add("sounds", "footstep.wav")?;

container.pack("assets", None)?;
container.finalize()?;

// random-access retrieval by index, no full scan
let mut archive = Archive::new(File::open("assets.cfr")?)?;
archive.unpack_entry(1, None, None, None)?;
# Ok::<(), coffer::prelude::InternalError>(())
```
*/

/// All tests are included in this module.
mod tests;

pub(crate) mod global;

#[cfg(feature = "archive")]
pub(crate) mod loader;

#[cfg(feature = "builder")]
pub(crate) mod writer;

/// Magic sequence identifying a `coffer` container, serialized little-endian
pub const MAGIC: u32 = 0xC04E_55ED;
pub(crate) const MAGIC_LENGTH: usize = 4;

/// Width in bytes of the archive name field in the container header
pub const ARCHIVE_NAME_LENGTH: usize = 32;

/// Width in bytes of the file name field in an index record
pub const ENTRY_NAME_LENGTH: usize = 64;

/// Width in bytes of the directory field in an index record
pub const ENTRY_DIRECTORY_LENGTH: usize = 32;

/// Consolidated crate imports.
pub mod prelude {
	pub use crate::global::{entry::IndexEntry, error::*, index::Index};

	#[cfg(feature = "archive")]
	pub use crate::archive::*;

	#[cfg(feature = "builder")]
	pub use crate::builder::*;
}

/// Container creation logic and data structures, [`Container`](crate::builder::Container)
#[cfg(feature = "builder")]
pub mod builder {
	pub use crate::writer::Container;
	pub use crate::global::{entry::IndexEntry, error::*};
}

/// Container reading logic and data structures, [`Archive`](crate::archive::Archive)
#[cfg(feature = "archive")]
pub mod archive {
	pub use crate::loader::archive::Archive;
	pub use crate::global::{entry::IndexEntry, error::*, index::Index};
}
