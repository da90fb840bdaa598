#![deny(clippy::all, clippy::perf, clippy::correctness, rust_2018_idioms)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::needless_collect)]

pub mod demo;
pub mod reader;
pub mod report;
pub mod settings;

pub use reader::{hash_path, hash_paths, hash_reader};
pub use report::{write_reports, FileReport, OutputFormat};
pub use settings::{Settings, SETTINGS};
