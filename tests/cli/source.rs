use anyhow::Result;

use crate::{CliTest, run};

const COMPONENT_CPP: &str = r#"void Component::sendRequest()
{
    if (m_serverUrl.isEmpty()) {
        //% "No host specified"
        setError(qtTrId("err-no-host"));
        return;
    }

    //% "The entered version number is not valid."
    setError(qtTrId("err-version-invalid"));
}

void Component::timeout(int seconds)
{
    setError(qtTrId("err-conn-timeout", seconds));
}
"#;

/// Project whose code uses two catalog ids, skips `err-folder-exists` and
/// calls the undefined `err-version-invalid`.
fn project_with_sources() -> Result<CliTest> {
    let test = CliTest::with_catalogs()?;
    test.write_file("src/API/component.cpp", COMPONENT_CPP)?;
    Ok(test)
}

#[test]
fn test_undefined_id_is_an_error() -> Result<()> {
    let test = project_with_sources()?;

    let (code, stdout, _) = run(test.check_command().arg("undefined-id"))?;

    assert_eq!(code, 1, "stdout:\n{}", stdout);
    assert!(stdout.contains("error: \"err-version-invalid\"  undefined-id"));
    assert!(stdout.contains("--> ./src/API/component.cpp:10:14"));
    assert!(stdout.contains("(\"The entered version number is not valid.\") not defined in en"));
    assert!(!stdout.contains("\"err-no-host\""));

    Ok(())
}

#[test]
fn test_unused_id_is_a_warning() -> Result<()> {
    let test = project_with_sources()?;

    let (code, stdout, _) = run(test.check_command().arg("unused-id"))?;

    assert_eq!(code, 0, "warnings must not fail the check:\n{}", stdout);
    assert!(stdout.contains("warning: \"err-folder-exists\"  unused-id"));
    assert!(stdout.contains("--> ./translations/libfuoten.ts:"));
    assert!(stdout.contains("never used in code"));
    assert!(!stdout.contains("\"err-no-host\""));

    Ok(())
}

#[test]
fn test_source_root_override() -> Result<()> {
    let test = CliTest::with_catalogs()?;
    test.write_file("lib/component.cpp", r#"setError(qtTrId("err-unknown"));"#)?;

    let (code, stdout, _) = run(test.check_command().arg("undefined-id"))?;
    assert_eq!(code, 0, "no ./src directory, nothing to compare:\n{}", stdout);

    let (code, stdout, _) = run(test
        .check_command()
        .args(["undefined-id", "--source-root", "lib"]))?;
    assert_eq!(code, 1, "stdout:\n{}", stdout);
    assert!(stdout.contains("error: \"err-unknown\"  undefined-id"));

    Ok(())
}

#[test]
fn test_ignore_ids_apply_to_source_rules() -> Result<()> {
    let test = project_with_sources()?;
    test.write_file(
        ".tsglotrc.json",
        r#"{ "ignoreIds": ["err-version-*", "err-folder-exists"] }"#,
    )?;

    let (code, stdout, _) = run(test
        .check_command()
        .args(["undefined-id", "unused-id"]))?;

    assert_eq!(code, 0, "stdout:\n{}", stdout);
    assert!(!stdout.contains("undefined-id"));
    assert!(!stdout.contains("unused-id"));

    Ok(())
}
