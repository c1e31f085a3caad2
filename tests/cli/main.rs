use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod fixtures;
mod fmt;
mod init;
mod source;
mod stats;

const BIN_NAME: &str = "tsglot";

pub const EN_TS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="en" sourcelanguage="en">
<context>
    <name></name>
    <message id="err-conn-timeout" numerus="yes">
        <location filename="../Fuoten/API/component.cpp" line="+116"/>
        <source>The connection to the server timed out after %n second(s).</source>
        <translation type="unfinished">
            <numerusform></numerusform>
            <numerusform></numerusform>
        </translation>
    </message>
    <message id="err-no-host">
        <location line="+31"/>
        <source>No host specified</source>
        <translation type="unfinished"></translation>
    </message>
    <message id="err-folder-exists">
        <location filename="../Fuoten/API/createfolder.cpp" line="+52"/>
        <source>The folder %1 already exists on %2.</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#;

pub const DE_TS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de" sourcelanguage="en">
<context>
    <name></name>
    <message id="err-conn-timeout" numerus="yes">
        <source>The connection to the server timed out after %n second(s).</source>
        <translation>
            <numerusform>Die Verbindung zum Server hat die Zeitbegrenzung von %n Sekunde überschritten.</numerusform>
            <numerusform>Die Verbindung zum Server hat die Zeitbegrenzung von %n Sekunden überschritten.</numerusform>
        </translation>
    </message>
    <message id="err-no-host">
        <source>No host specified</source>
        <translation>Kein Host angegeben</translation>
    </message>
    <message id="err-folder-exists">
        <source>The folder %1 already exists on %2.</source>
        <translation>Der Ordner %1 existiert bereits auf %2.</translation>
    </message>
</context>
</TS>
"#;

pub const ZH_CN_TS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="zh_CN" sourcelanguage="en">
<context>
    <name></name>
    <message id="err-conn-timeout" numerus="yes">
        <source>The connection to the server timed out after %n second(s).</source>
        <translation>
            <numerusform>与服务器的连接在 %n 秒后超时。</numerusform>
        </translation>
    </message>
    <message id="err-no-host">
        <source>No host specified</source>
        <translation>未指定主机</translation>
    </message>
    <message id="err-folder-exists">
        <source>The folder %1 already exists on %2.</source>
        <translation>文件夹 %1 已存在于 %2。</translation>
    </message>
</context>
</TS>
"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    /// Project with consistent en/de/zh_CN catalogs under `translations/`.
    pub fn with_catalogs() -> Result<Self> {
        let test = Self::new()?;
        test.write_file("translations/libfuoten.ts", EN_TS)?;
        test.write_file("translations/libfuoten_de.ts", DE_TS)?;
        test.write_file("translations/libfuoten_zh_CN.ts", ZH_CN_TS)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn clean_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("clean");
        cmd
    }

    pub fn fmt_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("fmt");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// Run `cmd` and return (exit code, stdout, stderr).
pub fn run(cmd: &mut Command) -> Result<(i32, String, String)> {
    let Output {
        status,
        stdout,
        stderr,
    } = cmd.output().context("Failed to run tsglot")?;
    Ok((
        status.code().unwrap_or(-1),
        String::from_utf8_lossy(&stdout).into_owned(),
        String::from_utf8_lossy(&stderr).into_owned(),
    ))
}
