use anyhow::Result;

use crate::{CliTest, run};

const COMPACT_DE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de" sourcelanguage="en"><context><name></name>
<message id="err-no-host"><source>No host specified</source><translation>Kein Host angegeben</translation></message>
</context></TS>
"#;

#[test]
fn test_fmt_dry_run_reports_files() -> Result<()> {
    let test = CliTest::with_catalogs()?;
    test.write_file("translations/libfuoten_de.ts", COMPACT_DE)?;

    let (code, stdout, _) = run(&mut test.fmt_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("Would reformat"));
    assert!(stdout.contains("libfuoten_de.ts"));
    assert_eq!(test.read_file("translations/libfuoten_de.ts")?, COMPACT_DE);

    Ok(())
}

#[test]
fn test_fmt_apply_is_stable() -> Result<()> {
    let test = CliTest::with_catalogs()?;
    test.write_file("translations/libfuoten_de.ts", COMPACT_DE)?;

    let (code, stdout, _) = run(test.fmt_command().arg("--apply"))?;
    assert_eq!(code, 0, "stdout:\n{}", stdout);
    assert!(stdout.contains("Formatted"));

    let content = test.read_file("translations/libfuoten_de.ts")?;
    assert!(content.contains("<message id=\"err-no-host\">"));
    assert!(content.contains("Kein Host angegeben"));

    let (code, stdout, _) = run(&mut test.fmt_command())?;
    assert_eq!(code, 0, "stdout:\n{}", stdout);
    assert!(stdout.contains("already formatted"));

    Ok(())
}
