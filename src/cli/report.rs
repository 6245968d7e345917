//! Report formatting and printing utilities.
//!
//! Kept separate from the conversion engine so the engine can be used as a library.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::core::{ConvertError, Conversion};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a per-language summary of a conversion to stdout.
pub fn print_summary(conversion: &Conversion) {
    print_summary_to(conversion, &mut io::stdout().lock());
}

/// Print a per-language summary to a custom writer.
///
/// ```text
///   en     7 messages
///   uk     7 messages (3 backfilled)
/// ```
pub fn print_summary_to<W: Write>(conversion: &Conversion, writer: &mut W) {
    let width = conversion
        .catalog
        .languages()
        .map(str::len)
        .max()
        .unwrap_or(0);

    for (language, messages) in conversion.catalog.iter() {
        let backfilled = conversion
            .backfilled
            .iter()
            .filter(|b| b.language == language)
            .count();
        let count = format!(
            "{} {}",
            messages.len(),
            if messages.len() == 1 { "message" } else { "messages" }
        );
        let _ = if backfilled > 0 {
            writeln!(
                writer,
                "  {:width$}  {} {}",
                language.cyan(),
                count,
                format!("({} backfilled)", backfilled).dimmed(),
                width = width
            )
        } else {
            writeln!(writer, "  {:width$}  {}", language.cyan(), count, width = width)
        };
    }
}

/// Print the closing line of a `check` run.
pub fn print_checked_to<W: Write>(source: &Path, conversion: &Conversion, writer: &mut W) {
    let languages = conversion.catalog.len();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Converted {} into {} {}",
            source.display(),
            languages,
            if languages == 1 { "language" } else { "languages" }
        )
        .green()
    );
}

/// Print the files written (or that would be written) by `build`.
pub fn print_written_to<W: Write>(paths: &[PathBuf], dry_run: bool, writer: &mut W) {
    for path in paths {
        let _ = writeln!(writer, "  {}", path.display());
    }

    let files = if paths.len() == 1 { "file" } else { "files" };
    let msg = if dry_run {
        format!(
            "{} {} {}",
            "dry-run:".bold().yellow(),
            format!("would write {} locale {}", paths.len(), files),
            format!("(use without {} to write)", "--dry-run".cyan())
        )
    } else {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Wrote {} locale {}", paths.len(), files).green()
        )
    };
    let _ = writeln!(writer, "{}", msg);
}

/// Print a refused conversion to stderr.
pub fn print_conversion_error(source: &Path, err: &ConvertError) {
    print_conversion_error_to(source, err, &mut io::stderr().lock());
}

/// Print a refused conversion to a custom writer.
pub fn print_conversion_error_to<W: Write>(source: &Path, err: &ConvertError, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!("{}: {}", source.display(), err).red()
    );
    if matches!(err, ConvertError::UnsupportedLanguage { .. }) {
        let _ = writeln!(
            writer,
            "  {} run {} to list accepted codes",
            "help:".bold(),
            "yaml-locales languages".cyan()
        );
    }
}

/// Print the supported-language table, one code per line.
pub fn print_languages_to<W: Write>(languages: &[&str], writer: &mut W) {
    for language in languages {
        let _ = writeln!(writer, "{}", language);
    }
}
