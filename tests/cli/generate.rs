use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const CATALOG: &str = "src/doc/messagesCatalog.xml";
const SCHEMA: &str = "src/doc/messagesCatalog.xsd";

#[test]
fn test_generate_writes_catalog_and_schema() -> Result<()> {
    let test = CliTest::with_file(
        "src/validate/ValidateXbrl.py",
        r#"
class ValidateXbrl:
    def validate(self, fact):
        self.modelXbrl.error("xbrl.4.6:factValue",
            _("Fact %(fact)s has invalid value %(value)s"),
            modelObject=fact, fact=fact.qname, value=fact.value)
"#,
    )?;
    let _filters = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Messages catalog - secs, 1 source file, 1 message
      ./src/doc/messagesCatalog.xml

    ----- stderr -----
    ");

    let catalog = test.read_file(CATALOG)?;
    assert!(catalog.contains(
        "<message code=\"xbrl.4.6:factValue\"\n         level=\"error\"\n         module=\"ValidateXbrl.py\" line=\"4\"\n         args=\"fact value\">\nFact %(fact)s has invalid value %(value)s\n</message>"
    ));
    assert!(catalog.contains("noNamespaceSchemaLocation=\"messagesCatalog.xsd\""));
    assert!(catalog.ends_with("</messages>"));
    assert!(test.read_file(SCHEMA)?.contains("xs:schema"));

    Ok(())
}

#[test]
fn test_generate_covers_all_roots() -> Result<()> {
    let test = CliTest::with_file("src/core.py", "info('core:1', 'From core')\n")?;
    test.write_file(
        "non_library_plugins/inline.py",
        "log('WARNING', 'inline:1', 'From inline plugin')\n",
    )?;
    test.write_file("site/extplugin/__init__.py", "")?;
    test.write_file(
        "site/extplugin/rules.py",
        "exception(('ext:1', 'ext:2'), 'From external plugin')\n",
    )?;
    test.write_file("requirements_plugins.txt", "# plugins\nextplugin==1.0\n")?;
    let _filters = test.snapshot_settings().bind_to_scope();

    let mut cmd = test.generate_command();
    cmd.args(["--plugin-path", "site"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Messages catalog - secs, 4 source files, 4 messages
      ./src/doc/messagesCatalog.xml

    ----- stderr -----
    ");

    let catalog = test.read_file(CATALOG)?;
    assert!(catalog.contains("code=\"core:1\"\n         level=\"info\""));
    assert!(catalog.contains("code=\"inline:1\"\n         level=\"warning\""));
    assert!(catalog.contains("code=\"ext:1\"\n         level=\"exception\""));
    assert!(catalog.contains("code=\"ext:2\"\n         level=\"exception\""));

    Ok(())
}

#[test]
fn test_plugin_path_from_env() -> Result<()> {
    let test = CliTest::with_file("src/core.py", "")?;
    test.write_file("vendor/extplugin.py", "error('ext:1', 'External')\n")?;
    test.write_file("requirements_plugins.txt", "extplugin\n")?;
    let _filters = test.snapshot_settings().bind_to_scope();

    let mut cmd = test.generate_command();
    cmd.env("MSGCAT_PLUGIN_PATH", "missing:vendor");
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Messages catalog - secs, 2 source files, 1 message
      ./src/doc/messagesCatalog.xml

    ----- stderr -----
    ");

    assert!(test.read_file(CATALOG)?.contains("code=\"ext:1\""));

    Ok(())
}

#[test]
fn test_unresolvable_plugin_is_fatal() -> Result<()> {
    let test = CliTest::with_file("src/core.py", "error('c:1', 'text')\n")?;
    test.write_file("requirements_plugins.txt", "not_installed==2\n")?;
    let _filters = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Plugin listed in ./requirements_plugins.txt: Cannot locate plugin 'not_installed' (searched: no plugin search paths configured)
    ");

    assert!(!test.root().join(CATALOG).exists());

    Ok(())
}

#[test]
fn test_missing_package_root_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    let _filters = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Package root is not a directory: ./src
    ");

    Ok(())
}

#[test]
fn test_missing_non_library_dir_is_fatal() -> Result<()> {
    let test = CliTest::with_file("src/core.py", "error('c:1', 'text')\n")?;
    test.remove("non_library_plugins")?;
    let _filters = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Non-library plugins directory is not a directory: ./non_library_plugins
    ");

    assert!(!test.root().join(CATALOG).exists());

    Ok(())
}

#[test]
fn test_missing_manifest_is_fatal() -> Result<()> {
    let test = CliTest::with_file("src/core.py", "error('c:1', 'text')\n")?;
    test.remove("requirements_plugins.txt")?;
    let _filters = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Plugins manifest not found: ./requirements_plugins.txt
    ");

    assert!(!test.root().join(CATALOG).exists());

    Ok(())
}

#[test]
fn test_parse_failure_exits_one_and_still_writes() -> Result<()> {
    let test = CliTest::with_file("src/good.py", "warning('w:1', 'Fine')\n")?;
    test.write_file("src/broken.py", "def broken(:\n    error('x', 'y')\n")?;
    let _filters = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✓ Messages catalog - secs, 2 source files, 1 message
    ✘ 1 file could not be parsed and was skipped
      ./src/broken.py
      ./src/doc/messagesCatalog.xml

    ----- stderr -----
    [TIMESTAMP WARN msgcat::core::pipeline] skipping ./src/broken.py: Syntax error in broken.py near line [LINE]
    ");

    assert!(test.read_file(CATALOG)?.contains("code=\"w:1\""));

    Ok(())
}

#[test]
fn test_generate_is_deterministic() -> Result<()> {
    let test = CliTest::new()?;
    for i in 0..12 {
        test.write_file(
            &format!("src/pkg{}/m{}.py", i % 3, i),
            &format!(
                "error('e:{i}', _('Error %(n)s'), n={i})\nlog('INFO', ('l{i}', 'k{i}'), 'Logged')\n"
            ),
        )?;
    }
    let _filters = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Messages catalog - secs, 12 source files, 36 messages
      ./src/doc/messagesCatalog.xml

    ----- stderr -----
    ");
    let first_catalog = test.read_file(CATALOG)?;

    let second = test.generate_command().output()?;
    let second_catalog = test.read_file(CATALOG)?;

    assert_eq!(second.status.code(), Some(0));
    assert_eq!(first_catalog, second_catalog);
    assert_eq!(first_catalog.matches("<message ").count(), 36);

    Ok(())
}

#[test]
fn test_config_file_and_cli_override() -> Result<()> {
    let test = CliTest::with_file(
        ".msgcatrc.json",
        r#"{
    "packageRoot": "lib",
    "outputDir": "generated"
}"#,
    )?;
    test.write_file("lib/a.py", "error('lib:1', 'From lib')\n")?;
    test.write_file("other/b.py", "error('other:1', 'From other')\n")?;
    let _filters = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Messages catalog - secs, 1 source file, 1 message
      ./lib/generated/messagesCatalog.xml

    ----- stderr -----
    ");
    assert!(
        test.read_file("lib/generated/messagesCatalog.xml")?
            .contains("code=\"lib:1\"")
    );

    let mut cmd = test.generate_command();
    cmd.args(["--package-root", "other", "--output-dir", "out"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Messages catalog - secs, 1 source file, 1 message
      other/out/messagesCatalog.xml

    ----- stderr -----
    ");
    let catalog = test.read_file("other/out/messagesCatalog.xml")?;
    assert!(catalog.contains("code=\"other:1\""));
    assert!(!catalog.contains("code=\"lib:1\""));

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::with_file(".msgcatrc.json", "{ broken")?;
    let _filters = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.generate_command(), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to load config from .: Failed to parse config file: "./.msgcatrc.json": key must be a string at [POSITION]
    "#);

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: msgcat"), "{}", stdout);
    assert!(stdout.contains("generate"), "{}", stdout);

    Ok(())
}
