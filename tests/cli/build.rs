use anyhow::Result;
use serde_json::json;

use crate::{CliTest, SAMPLE_SOURCE, stderr, stdout};

#[test]
fn test_build_writes_every_language() -> Result<()> {
    let test = CliTest::with_source(SAMPLE_SOURCE)?;

    let output = test.build_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Wrote 2 locale files"));

    assert_eq!(
        test.read_json("_locales/en/messages.json")?,
        json!({
            "extName": { "message": "Sample Extension", "description": "Extension name" },
            "extDescription": { "message": "Converts things" },
            "greeting": { "message": "Hello" }
        })
    );
    assert_eq!(
        test.read_json("_locales/uk/messages.json")?,
        json!({
            "extName": { "message": "Sample Extension", "description": "Extension name" },
            "extDescription": { "message": "Перетворює речі" },
            "greeting": { "message": "Hello" }
        })
    );

    Ok(())
}

#[test]
fn test_build_output_is_pretty_printed() -> Result<()> {
    let test = CliTest::with_source("greeting: Hello\n")?;
    test.build_command().output()?;

    assert_eq!(
        test.read_file("_locales/en/messages.json")?,
        "{\n  \"greeting\": {\n    \"message\": \"Hello\"\n  }\n}\n"
    );

    Ok(())
}

#[test]
fn test_build_keeps_source_key_order() -> Result<()> {
    let test = CliTest::with_source("zeta: Z\nalpha:\n  uk: А\nmid: M\n")?;
    test.build_command().output()?;

    for language in ["en", "uk"] {
        let messages = test.read_json(&format!("_locales/{language}/messages.json"))?;
        let keys: Vec<&str> = messages
            .as_object()
            .map(|object| object.keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"], "{language}");
    }

    Ok(())
}

#[test]
fn test_build_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_source(SAMPLE_SOURCE)?;

    let output = test.build_command().arg("--dry-run").output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("would write 2 locale files"));
    assert!(!test.root().join("_locales").exists());

    Ok(())
}

#[test]
fn test_build_with_out_dir() -> Result<()> {
    let test = CliTest::with_source(SAMPLE_SOURCE)?;

    let output = test
        .build_command()
        .args(["--out-dir", "dist/_locales"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("dist/_locales/uk/messages.json").exists());
    assert!(!test.root().join("_locales").exists());

    Ok(())
}

#[test]
fn test_build_rejects_unsupported_language_when_enforced() -> Result<()> {
    let test = CliTest::with_source("greeting:\n  en: Hello\n  xx: Huh\n")?;

    let output = test
        .build_command()
        .arg("--enforce-supported-languages")
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("language 'xx' is not supported by the Chrome Web Store"));
    assert!(!test.root().join("_locales").exists());

    Ok(())
}

#[test]
fn test_build_keeps_unknown_language_without_enforcement() -> Result<()> {
    let test = CliTest::with_source("greeting:\n  en: Hello\n  xx: Huh\n")?;

    let output = test.build_command().output()?;
    assert!(output.status.success());
    assert_eq!(
        test.read_json("_locales/xx/messages.json")?,
        json!({ "greeting": { "message": "Huh" } })
    );

    Ok(())
}

#[test]
fn test_build_uses_config_file() -> Result<()> {
    let test = CliTest::with_file(
        ".yamllocalesrc.json",
        r#"{
            "sourceFile": "i18n/strings.yml",
            "outputRoot": "public/_locales",
            "defaultLanguage": "uk",
            "messageAdditions": { "extName": { "en": " (beta)", "uk": " (бета)" } }
        }"#,
    )?;
    test.write_file("i18n/strings.yml", "extName:\n  uk: Розширення\n  en: Extension\n")?;

    let output = test.build_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_json("public/_locales/uk/messages.json")?["extName"]["message"],
        "Розширення (бета)"
    );
    assert_eq!(
        test.read_json("public/_locales/en/messages.json")?["extName"]["message"],
        "Extension (beta)"
    );

    Ok(())
}

#[test]
fn test_build_missing_source_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read translation source"));

    Ok(())
}

#[test]
fn test_build_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".yamllocalesrc.json", r#"{ "messageKeys": [] }"#)?;
    test.write_file("src/i18n-messages.yaml", "greeting: Hello\n")?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("messageKeys"));

    Ok(())
}

#[test]
fn test_build_rejects_language_outside_output_root() -> Result<()> {
    let test = CliTest::with_source("greeting:\n  en: Hi\n  ../escaped: Pwn\n")?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("../escaped"));
    assert!(!test.root().join("_locales").exists());
    assert!(!test.root().join("escaped").exists());

    Ok(())
}
