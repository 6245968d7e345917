//! yaml-locales - YAML translations to browser-extension `_locales`
//!
//! Converts one hierarchical translation source (message keys mapped to plain
//! strings or per-language variants) into a complete per-language catalog of
//! `{ message, description }` entries, ready to be written as
//! `_locales/<lang>/messages.json`.
//!
//! ```
//! use yaml_locales::core::{Settings, convert_catalog, parse_source};
//!
//! let tree = parse_source("k1: A\nk2:\n  en: B-en\n  fr: B-fr\n").unwrap();
//! let catalog = convert_catalog(&tree, &Settings::default()).unwrap();
//!
//! // k1 only exists in English, so French gets a copy.
//! assert_eq!(catalog.get("fr", "k1").unwrap().message, "A");
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Conversion engine (parse, accumulate, backfill)
//! - `emit`: Rendering and writing `messages.json` files

pub mod cli;
pub mod config;
pub mod core;
pub mod emit;
