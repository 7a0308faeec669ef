//! Filesystem access for manifest generation.
//!
//! The generator never touches the disk directly. It enumerates, hashes, and
//! writes files through the [`Filesystem`] trait, which has two
//! implementations here: [`LocalFilesystem`] over a deployed build directory,
//! and [`MemoryFilesystem`] over an in-memory snapshot.

#![warn(missing_docs)]

pub mod error;
pub mod filesystem;
pub mod local;
pub mod memory;

pub use error::FsError;
pub use filesystem::Filesystem;
pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
