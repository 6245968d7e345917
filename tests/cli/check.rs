use anyhow::Result;

use crate::{CliTest, SAMPLE_SOURCE, stderr, stdout};

#[test]
fn test_check_reports_languages_and_backfill() -> Result<()> {
    let test = CliTest::with_source(SAMPLE_SOURCE)?;

    let output = test.check_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let stdout = stdout(&output);
    assert!(stdout.contains("  en  3 messages\n"), "{stdout}");
    assert!(stdout.contains("  uk  3 messages (2 backfilled)\n"), "{stdout}");
    assert!(stdout.contains("into 2 languages"), "{stdout}");
    assert!(!test.root().join("_locales").exists());

    Ok(())
}

#[test]
fn test_check_with_default_language_override() -> Result<()> {
    let test = CliTest::with_source("greeting: Привіт\nfarewell:\n  en: Bye\n")?;

    let output = test
        .check_command()
        .args(["--default-language", "uk"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let stdout = stdout(&output);
    assert!(stdout.contains("  uk  2 messages (1 backfilled)\n"), "{stdout}");
    assert!(stdout.contains("  en  2 messages (1 backfilled)\n"), "{stdout}");

    Ok(())
}

#[test]
fn test_check_unsupported_language() -> Result<()> {
    let test = CliTest::with_source("greeting:\n  en: Hello\n  en-US: Howdy\n")?;

    let output = test
        .check_command()
        .arg("--enforce-supported-languages")
        .output()?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = stderr(&output);
    assert!(stderr.contains("language 'en-US' is not supported"), "{stderr}");
    assert!(stderr.contains("yaml-locales languages"), "{stderr}");

    Ok(())
}

#[test]
fn test_check_invalid_yaml() -> Result<()> {
    let test = CliTest::with_source("greeting: [unclosed\n")?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid translation source"));

    Ok(())
}

#[test]
fn test_check_description_only_key_is_skipped() -> Result<()> {
    let test = CliTest::with_source("greeting: Hello\nnote:\n  description: Only a description\n")?;

    let output = test.check_command().output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("  en  1 message\n"));

    Ok(())
}
