#![cfg(test)]
// This is meant to mirror as closely as possible, how users should use the crate

use std::{fs, io::Cursor};
use crate::prelude::*;

// (directory, file name, contents) triples describing a source tree
type SourceTree<'a> = &'a [(&'a str, &'a str, &'a [u8])];

#[cfg(feature = "builder")]
fn scratch_tree(files: SourceTree) -> tempfile::TempDir {
	let root = tempfile::tempdir().unwrap();

	for (directory, name, contents) in files {
		let mut path = root.path().to_path_buf();

		if !directory.is_empty() {
			path.push(directory);
			fs::create_dir_all(&path).unwrap();
		};

		path.push(name);
		fs::write(&path, contents).unwrap();
	}

	root
}

#[cfg(feature = "builder")]
fn pack_tree(files: SourceTree, name: &str) -> InternalResult<Cursor<Vec<u8>>> {
	let source = scratch_tree(files);

	let mut container = Container::create(Cursor::new(Vec::new()), name)?;
	for (directory, file_name, _) in files {
		container.add(directory, file_name)?;
	}

	container.pack(source.path(), None)?;
	container.finalize()
}

const SIMPLE_TREE: SourceTree<'static> = &[
	("", "a.txt", b"hello"),
	("sub", "b.txt", b""),
];

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn round_trip_simple_tree() -> InternalResult {
	// Scenario: a.txt (5 bytes) at the root, an empty b.txt one directory down
	let target = pack_tree(SIMPLE_TREE, "simple")?;

	let mut archive = Archive::new(target)?;
	assert_eq!(archive.len(), 2);
	assert_eq!(archive.name(), "simple");

	let restored = tempfile::tempdir().unwrap();
	archive.unpack(Some(restored.path()), None)?;

	assert_eq!(fs::read(restored.path().join("a.txt"))?, b"hello");
	assert_eq!(fs::read(restored.path().join("sub").join("b.txt"))?, b"");

	Ok(())
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn round_trip_nested_tree() -> InternalResult {
	// A payload larger than any plausible filesystem block size, so the chunked
	// copy path runs more than one iteration
	let big: Vec<u8> = (0..70_000u32).map(|n| (n % 251) as u8).collect();

	let files: Vec<(&str, &str, &[u8])> = vec![
		("", "root.bin", b"root level".as_slice()),
		("one", "big.bin", big.as_slice()),
		("one/two", "deep.txt", b"nested".as_slice()),
		("one/two", "empty", b"".as_slice()),
	];

	let target = pack_tree(&files, "nested")?;
	let mut archive = Archive::new(target)?;
	assert_eq!(archive.len(), files.len());

	let restored = tempfile::tempdir().unwrap();
	archive.unpack(Some(restored.path()), None)?;

	for (directory, name, contents) in &files {
		let mut path = restored.path().to_path_buf();
		if !directory.is_empty() {
			path.push(directory);
		};
		path.push(name);

		assert_eq!(&fs::read(&path)?, contents, "mismatch for {}/{}", directory, name);
	}

	Ok(())
}

#[test]
#[cfg(feature = "archive")]
fn bad_magic_is_rejected() {
	// A header-sized run of nonsense that is neither a draft nor a container
	let mut bytes = vec![0x42u8; 256];
	bytes[0] = 0xEF;

	let result = Archive::new(Cursor::new(bytes));
	assert!(matches!(result, Err(InternalError::MalformedSource(_))));
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn unfinalized_container_is_refused() -> InternalResult {
	let target = pack_tree(SIMPLE_TREE, "draft")?;

	// Regress the header to its draft state, as if finalize never ran
	let mut bytes = target.into_inner();
	bytes[..44].fill(0);

	let result = Archive::new(Cursor::new(bytes));
	assert!(matches!(result, Err(InternalError::UnfinalizedSource)));

	Ok(())
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn offsets_are_contiguous() -> InternalResult {
	let files: Vec<(&str, &str, &[u8])> = vec![
		("", "first", b"12345".as_slice()),
		("", "second", b"".as_slice()),
		("d", "third", b"123".as_slice()),
		("d", "fourth", b"1".as_slice()),
	];

	let target = pack_tree(&files, "contiguous")?;
	let archive = Archive::new(target)?;

	assert_eq!(archive.len(), files.len());
	assert_eq!(archive.entry(0)?.offset, 0);

	for index in 1..archive.len() {
		let previous = archive.entry(index - 1)?;
		let current = archive.entry(index)?;

		assert_eq!(current.offset, previous.offset + previous.length);
	}

	Ok(())
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn out_of_bounds_indices_fail() -> InternalResult {
	let target = pack_tree(SIMPLE_TREE, "bounds")?;
	let mut archive = Archive::new(target)?;

	// Both the first invalid index and one far past it
	for index in [archive.len(), archive.len() + 7] {
		assert!(matches!(
			archive.entry(index),
			Err(InternalError::IndexOutOfBounds { .. })
		));

		let mut sink = Vec::new();
		assert!(matches!(
			archive.fetch_write(index, &mut sink),
			Err(InternalError::IndexOutOfBounds { .. })
		));
	}

	Ok(())
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn rename_override_is_honored() -> InternalResult {
	// Scenario: extract entry 0 of a 3-entry archive under an overridden name
	let files: Vec<(&str, &str, &[u8])> = vec![
		("", "original.txt", b"payload zero".as_slice()),
		("", "second.txt", b"payload one".as_slice()),
		("", "third.txt", b"payload two".as_slice()),
	];

	let target = pack_tree(&files, "rename")?;
	let mut archive = Archive::new(target)?;
	assert_eq!(archive.len(), 3);

	let restored = tempfile::tempdir().unwrap();
	let written = archive.unpack_entry(0, Some(restored.path()), Some("override.bin"), None)?;

	assert_eq!(written, restored.path().join("override.bin"));
	assert_eq!(fs::read(&written)?, b"payload zero");
	assert!(!restored.path().join("original.txt").exists());

	Ok(())
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn retrieval_is_idempotent() -> InternalResult {
	let target = pack_tree(SIMPLE_TREE, "idempotent")?;
	let mut archive = Archive::new(target)?;

	let mut first = Vec::new();
	let mut second = Vec::new();

	archive.fetch_write(0, &mut first)?;
	archive.fetch_write(0, &mut second)?;
	assert_eq!(first, second);
	assert_eq!(first, b"hello");

	// An unrelated read afterwards is unaffected by the cursor the previous
	// reads left behind
	let mut other = Vec::new();
	archive.fetch_write(1, &mut other)?;
	assert_eq!(other, b"");

	Ok(())
}

#[test]
#[cfg(feature = "builder")]
fn oversize_fields_are_rejected() {
	let mut container = Container::create(Cursor::new(Vec::new()), "overflow").unwrap();

	let long_name = "n".repeat(crate::ENTRY_NAME_LENGTH + 1);
	assert!(matches!(
		container.add("", &long_name),
		Err(InternalError::FieldOverflow { field: "name", .. })
	));

	let long_directory = "d".repeat(crate::ENTRY_DIRECTORY_LENGTH + 1);
	assert!(matches!(
		container.add(&long_directory, "file"),
		Err(InternalError::FieldOverflow { field: "directory", .. })
	));

	// Rejected entries are not queued
	assert!(container.is_empty());

	let long_archive_name = "a".repeat(crate::ARCHIVE_NAME_LENGTH + 1);
	assert!(matches!(
		Container::create(Cursor::new(Vec::new()), &long_archive_name),
		Err(InternalError::FieldOverflow { field: "archive name", .. })
	));
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn full_width_archive_name_round_trips() -> InternalResult {
	// Exactly 32 bytes: fills the field completely, with no terminator on disk
	let name = "a".repeat(crate::ARCHIVE_NAME_LENGTH);

	let target = pack_tree(SIMPLE_TREE, &name)?;
	let archive = Archive::new(target)?;

	assert_eq!(archive.name(), name);
	Ok(())
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn empty_container_round_trips() -> InternalResult {
	let source = tempfile::tempdir().unwrap();

	let mut container = Container::create(Cursor::new(Vec::new()), "empty")?;
	let written = container.pack(source.path(), None)?;
	assert_eq!(written, 0);

	let target = container.finalize()?;
	let mut archive = Archive::new(target)?;
	assert!(archive.is_empty());

	let restored = tempfile::tempdir().unwrap();
	archive.unpack(Some(&restored.path().join("out")), None)?;

	Ok(())
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn callbacks_observe_every_file() -> InternalResult {
	let source = scratch_tree(SIMPLE_TREE);

	let mut container = Container::create(Cursor::new(Vec::new()), "observed")?;
	for (directory, file_name, _) in SIMPLE_TREE {
		container.add(directory, file_name)?;
	}

	let mut packed = Vec::new();
	let mut on_pack = |directory: &str, name: &str| packed.push(format!("{}/{}", directory, name));
	container.pack(source.path(), Some(&mut on_pack))?;

	assert_eq!(packed, vec!["/a.txt".to_string(), "sub/b.txt".to_string()]);

	let mut archive = Archive::new(container.finalize()?)?;
	let restored = tempfile::tempdir().unwrap();

	let mut extracted = Vec::new();
	let mut on_unpack = |directory: &str, name: &str| extracted.push(format!("{}/{}", directory, name));
	archive.unpack(Some(restored.path()), Some(&mut on_unpack))?;

	assert_eq!(packed, extracted);
	Ok(())
}
