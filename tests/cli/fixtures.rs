//! Runs against trimmed copies of the libfuoten catalogs.

use std::{fs, path::Path};

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

fn libfuoten_project() -> Result<CliTest> {
    let test = CliTest::new()?;
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/translations");
    for name in ["libfuoten.ts", "libfuoten_de.ts", "libfuoten_zh_CN.ts"] {
        let content = fs::read_to_string(fixtures.join(name))?;
        test.write_file(&format!("translations/{}", name), &content)?;
    }
    Ok(test)
}

fn summary_line(stdout: &str) -> Option<&str> {
    stdout.lines().find(|l| l.contains("problems ("))
}

#[test]
fn test_libfuoten_findings() -> Result<()> {
    let test = libfuoten_project()?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 1);
    // Translated upstream but gone from the source catalog
    assert!(stdout.contains("error: \"libfuoten-err-http-400\"  orphan-id"));
    // "% n" is not a count marker
    assert!(stdout.contains("missing %n in zh_CN"));
    assert!(stdout.contains("warning: \"err-no-host\"  missing-id"));
    assert!(stdout.contains("missing in: de, zh_CN"));

    Ok(())
}

#[test]
fn test_libfuoten_fmt_keeps_findings() -> Result<()> {
    let test = libfuoten_project()?;

    let (_, before, _) = run(&mut test.check_command())?;
    let (code, _, _) = run(test.fmt_command().arg("--apply"))?;
    assert_eq!(code, 0);
    let (_, after, _) = run(&mut test.check_command())?;

    assert_eq!(summary_line(&before), summary_line(&after));
    assert!(summary_line(&after).is_some());

    let de = test.read_file("translations/libfuoten_de.ts")?;
    assert!(de.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n"));
    assert!(de.contains("<numerusform>Die Verbindung zum Server hat die Zeitbegrenzung von %n Sekunde überschritten.</numerusform>"));

    Ok(())
}
