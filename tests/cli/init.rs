use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in [
        "packageRoot",
        "nonLibraryPluginsDir",
        "pluginsManifest",
        "pluginSearchPaths",
        "outputDir",
    ] {
        assert!(parsed.get(field).is_some(), "Config should have '{field}'");
    }
    assert_eq!(parsed["packageRoot"], "src");

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;
    let _filters = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .msgcatrc.json

    ----- stderr -----
    ");
    assert!(test.root().join(".msgcatrc.json").exists());

    let content = test.read_file(".msgcatrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".msgcatrc.json", "{}")?;
    let _filters = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: .msgcatrc.json already exists
    ");
    assert_eq!(test.read_file(".msgcatrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("src/app.py", "info('app:1', 'Started')\n")?;
    let _filters = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Messages catalog - secs, 1 source file, 1 message
      ./src/doc/messagesCatalog.xml

    ----- stderr -----
    ");
    assert!(test.read_file("src/doc/messagesCatalog.xml")?.contains("app:1"));

    Ok(())
}
