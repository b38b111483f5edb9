//! `camprama` - Packing lists and trail reference for Canadian campsites
//!
//! This library persists user packing lists, syncs template selections into
//! them, and carries the built-in reference data: templates, campsites,
//! wildlife profiles and the trail quiz.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod packlist;
pub mod settings;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use packlist::{MyList, PackItem, PacklistStore, StoreEvent, TemplateEditor};
pub use settings::Settings;
pub use storage::{KeyValueStore, MemoryStore, SqliteStore, StorageStats};
