//! Conversion engine.
//!
//! Runs in a single linear pass:
//! 1. **Load**: source text becomes a [`SourceTree`] (`tree`)
//! 2. **Parse**: each key becomes zero or more [`LocaleItem`]s (`parser`, `alias`)
//! 3. **Accumulate**: items are suffixed (`additions`) and folded into a [`CatalogBuilder`]
//! 4. **Backfill**: every key is copied into every language that lacks it (`catalog`)
//!
//! The engine does no I/O past the loader and keeps no state between conversions.

pub mod additions;
pub mod alias;
pub mod catalog;
pub mod convert;
pub mod error;
pub mod languages;
pub mod parser;
pub mod settings;
pub mod tree;

pub use additions::MessageAddition;
pub use catalog::{
    BackfilledEntry, CatalogBuilder, Conversion, LocaleCatalog, LocaleEntry, LocaleMessages,
};
pub use convert::{convert, convert_catalog};
pub use error::ConvertError;
pub use languages::{SUPPORTED_LANGUAGES, is_supported_language};
pub use parser::{KeyParser, LocaleItem};
pub use settings::Settings;
pub use tree::{SourceTree, SourceValue, ValueNode, load_source, parse_source};
