use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .yamllocalesrc.json"));

    let content = test.read_file(".yamllocalesrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["sourceFile"], "./src/i18n-messages.yaml");
    assert_eq!(parsed["outputRoot"], "_locales");
    assert_eq!(parsed["defaultLanguage"], "en");
    assert_eq!(parsed["enforceSupportedLanguages"], false);
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".yamllocalesrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(test.read_file(".yamllocalesrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("src/i18n-messages.yaml", "greeting: Hello\n")?;

    let output = test.build_command().output()?;
    assert!(
        output.status.success(),
        "Build should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("_locales/en/messages.json").exists());

    Ok(())
}
