//! Archiver implementations

pub mod seven_zip;

pub use seven_zip::SevenZipArchiver;
