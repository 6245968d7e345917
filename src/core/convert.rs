use tracing::debug;

use super::{
    additions::augment,
    catalog::{CatalogBuilder, Conversion, LocaleCatalog},
    error::ConvertError,
    parser::KeyParser,
    settings::Settings,
    tree::SourceTree,
};

/// Convert a source tree into a complete per-language catalog.
///
/// Items are parsed key by key, suffixed with any configured message additions and
/// folded into a fresh [`CatalogBuilder`], which is then backfilled. The first
/// unsupported language (with enforcement on) aborts the whole conversion.
pub fn convert(tree: &SourceTree, settings: &Settings) -> Result<Conversion, ConvertError> {
    let parser = KeyParser::new(settings);

    let builder = tree
        .iter()
        .flat_map(|(key, value)| {
            let items = parser.parse(key, value);
            if items.is_empty() {
                debug!(key = %key, "no message resolved, skipping key");
            }
            items
        })
        .try_fold(CatalogBuilder::new(settings), |builder, item| {
            let language = item
                .language
                .as_deref()
                .unwrap_or(&settings.default_language);
            let message = augment(
                &settings.message_additions,
                &settings.default_language,
                &item.key,
                language,
                &item.message,
            );
            builder.insert(
                &item.key,
                &message,
                item.description.as_deref(),
                item.language.as_deref(),
            )
        })?;

    let conversion = builder.finish();
    debug!(
        languages = conversion.catalog.len(),
        backfilled = conversion.backfilled.len(),
        "conversion finished"
    );
    Ok(conversion)
}

/// Same as [`convert`], keeping only the catalog.
pub fn convert_catalog(
    tree: &SourceTree,
    settings: &Settings,
) -> Result<LocaleCatalog, ConvertError> {
    convert(tree, settings).map(|conversion| conversion.catalog)
}
