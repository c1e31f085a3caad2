use anyhow::Result;

use crate::{CliTest, ZH_CN_TS, run};

#[test]
fn test_stats_table() -> Result<()> {
    let test = CliTest::with_catalogs()?;
    test.write_file(
        "translations/libfuoten_zh_CN.ts",
        &ZH_CN_TS.replace(
            "<translation>文件夹 %1 已存在于 %2。</translation>",
            r#"<translation type="unfinished"></translation>"#,
        ),
    )?;

    let (code, stdout, _) = run(test.command().arg("stats"))?;

    assert_eq!(code, 0, "stdout:\n{}", stdout);
    assert!(stdout.contains("Primary locale: en (3 messages)"));

    let de = stdout.lines().find(|l| l.starts_with("de ")).unwrap();
    assert!(de.ends_with("100.0%"), "{}", de);

    let zh = stdout.lines().find(|l| l.starts_with("zh_CN")).unwrap();
    let columns: Vec<&str> = zh.split_whitespace().collect();
    assert_eq!(columns, vec!["zh_CN", "2", "1", "0", "66.7%"]);

    Ok(())
}
