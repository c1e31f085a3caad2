use anyhow::Result;

use crate::{CliTest, DE_TS, EN_TS, run};

#[test]
fn test_consistent_catalogs() -> Result<()> {
    let test = CliTest::with_catalogs()?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 0, "stdout:\n{}", stdout);
    assert!(stdout.contains("Checked 3 catalog files (9 messages) - no issues found"));

    Ok(())
}

#[test]
fn test_orphan_id_is_an_error() -> Result<()> {
    let test = CliTest::with_catalogs()?;
    test.write_file(
        "translations/libfuoten_de.ts",
        &DE_TS.replace(
            "</context>",
            r#"    <message id="err-removed-in-code">
        <source>This message was removed</source>
        <translation>Diese Meldung wurde entfernt</translation>
    </message>
</context>"#,
        ),
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"err-removed-in-code\"  orphan-id"));
    assert!(stdout.contains("translations/libfuoten_de.ts:"));
    assert!(stdout.contains("in de (\"Diese Meldung wurde entfernt\")"));
    assert!(stdout.contains("1 problems (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_numerus_form_count() -> Result<()> {
    let test = CliTest::with_catalogs()?;
    test.write_file(
        "translations/libfuoten_de.ts",
        &DE_TS.replace(
            "            <numerusform>Die Verbindung zum Server hat die Zeitbegrenzung von %n Sekunden überschritten.</numerusform>\n",
            "",
        ),
    )?;

    let (code, stdout, _) = run(test.check_command().arg("numerus-forms"))?;

    assert_eq!(code, 1);
    assert!(stdout.contains("\"err-conn-timeout\"  numerus-forms"));
    assert!(stdout.contains("de expects 2 plural forms, found 1"));

    Ok(())
}

#[test]
fn test_duplicate_id() -> Result<()> {
    let test = CliTest::with_catalogs()?;
    test.write_file(
        "translations/libfuoten_de.ts",
        &DE_TS.replace(
            "</context>",
            r#"    <message id="err-no-host">
        <source>No host specified</source>
        <translation>Kein Server angegeben</translation>
    </message>
</context>"#,
        ),
    )?;

    let (code, stdout, _) = run(test.check_command().arg("duplicate-id"))?;

    assert_eq!(code, 1);
    assert!(stdout.contains("\"err-no-host\"  duplicate-id"));
    assert!(stdout.contains("first defined at line"));

    Ok(())
}

#[test]
fn test_placeholder_mismatch() -> Result<()> {
    let test = CliTest::with_catalogs()?;
    test.write_file(
        "translations/libfuoten_de.ts",
        &DE_TS.replace(
            "Der Ordner %1 existiert bereits auf %2.",
            "Der Ordner %1 existiert bereits.",
        ),
    )?;

    let (code, stdout, _) = run(test.check_command().arg("placeholder"))?;

    assert_eq!(code, 1);
    assert!(stdout.contains("\"err-folder-exists\"  placeholder"));
    assert!(stdout.contains("missing %2 in de"));

    Ok(())
}

#[test]
fn test_missing_and_unfinished_are_warnings() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("translations/libfuoten.ts", EN_TS)?;
    test.write_file(
        "translations/libfuoten_de.ts",
        &DE_TS.replace(
            "<translation>Kein Host angegeben</translation>",
            r#"<translation type="unfinished"></translation>"#,
        ),
    )?;
    test.write_file(
        "translations/libfuoten_sv.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="sv" sourcelanguage="en">
<context>
    <name></name>
    <message id="err-no-host">
        <source>No host specified</source>
        <translation>Ingen värd angiven</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 0, "warnings must not fail the check:\n{}", stdout);
    assert!(stdout.contains("warning: \"err-no-host\"  unfinished"));
    assert!(stdout.contains("warning: \"err-conn-timeout\"  missing-id"));
    assert!(stdout.contains("missing in: sv"));

    Ok(())
}

#[test]
fn test_parse_error_is_reported() -> Result<()> {
    let test = CliTest::with_catalogs()?;
    test.write_file("translations/libfuoten_sv.ts", "<TS language=\"sv\"><context>")?;

    let (code, stdout, stderr) = run(&mut test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("translations/libfuoten_sv.ts"));
    assert!(stderr.contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_ignore_ids_from_config() -> Result<()> {
    let test = CliTest::with_catalogs()?;
    test.write_file(".tsglotrc.json", r#"{ "ignoreIds": ["err-removed-*"] }"#)?;
    test.write_file(
        "translations/libfuoten_de.ts",
        &DE_TS.replace(
            "</context>",
            r#"    <message id="err-removed-in-code">
        <source>This message was removed</source>
        <translation>Diese Meldung wurde entfernt</translation>
    </message>
</context>"#,
        ),
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 0, "stdout:\n{}", stdout);
    assert!(stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_missing_primary_catalog() -> Result<()> {
    let test = CliTest::with_file("translations/libfuoten_de.ts", DE_TS)?;

    let (code, _, stderr) = run(&mut test.check_command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Primary locale 'en' catalog not found"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command().arg("--help"))?;

    assert_eq!(code, 0);
    for command in ["check", "clean", "fmt", "stats", "tr", "init", "serve"] {
        assert!(stdout.contains(command), "missing {} in:\n{}", command, stdout);
    }

    Ok(())
}
