use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["translationsRoot"], "./translations");
    assert_eq!(parsed["primaryLocale"], "en");
    assert!(parsed.get("ignores").is_some());
    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command().arg("init"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Created .tsglotrc.json"));
    assert!(test.root().join(".tsglotrc.json").exists());
    assert_config_content(&test.read_file(".tsglotrc.json")?)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".tsglotrc.json", "{}")?;

    let (code, _, stderr) = run(test.command().arg("init"))?;

    assert_eq!(code, 1);
    assert!(stderr.contains(".tsglotrc.json already exists"));
    assert_eq!(test.read_file(".tsglotrc.json")?, "{}");

    Ok(())
}
