//! Writes a finished catalog as `_locales/<language>/messages.json` files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::core::{LocaleCatalog, LocaleMessages};

pub const DEFAULT_OUTPUT_ROOT: &str = "_locales";
pub const MESSAGES_FILE_NAME: &str = "messages.json";

/// One rendered `messages.json`, with its path relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleAsset {
    pub language: String,
    pub path: PathBuf,
    pub content: String,
}

/// Relative path of a language's messages file: `<language>/messages.json`.
///
/// The language must name a single directory directly under the output root.
pub fn asset_path(language: &str) -> Result<PathBuf> {
    if language.is_empty()
        || language == "."
        || language.contains("..")
        || language.contains(['/', '\\'])
    {
        bail!("Language '{}' cannot be used as a locale directory name", language);
    }
    Ok(Path::new(language).join(MESSAGES_FILE_NAME))
}

/// Serialize one language's messages with 2-space indentation.
pub fn render_messages(messages: &LocaleMessages) -> Result<String> {
    serde_json::to_string_pretty(messages).context("Failed to serialize locale messages")
}

/// Render every language in the catalog, in discovery order.
pub fn render_assets(catalog: &LocaleCatalog) -> Result<Vec<LocaleAsset>> {
    catalog
        .iter()
        .map(|(language, messages)| {
            Ok(LocaleAsset {
                language: language.to_string(),
                path: asset_path(language)?,
                content: render_messages(messages)
                    .with_context(|| format!("Failed to render locale '{}'", language))?,
            })
        })
        .collect()
}

/// Write assets under `root`, creating directories as needed. Returns the written paths.
pub fn write_assets(root: &Path, assets: &[LocaleAsset]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(assets.len());

    for asset in assets {
        let file_path = root.join(&asset.path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&file_path, format!("{}\n", asset.content))
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;
        debug!(path = %file_path.display(), "wrote locale messages");
        written.push(file_path);
    }

    Ok(written)
}
