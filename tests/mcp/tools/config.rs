use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tsglot::mcp::{
    TsglotMcpServer,
    types::{GetConfigParams, GetLocalesParams},
};

use crate::{DE_TS, EN_TS, McpTestFixture, extract_tool_result_json, fixture_en_de};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = fixture_en_de().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["translationsRoot"], "./translations");
    assert_eq!(json_result["config"]["primaryLocale"], "en");
    assert_eq!(json_result["config"]["sourceRoot"], "./src");
    assert!(json_result["config"]["ignoreIds"].is_array());
    assert_eq!(json_result["fromFile"], false);
}

#[tokio::test]
async fn test_get_config_from_tsglotrc() {
    let fixture = McpTestFixture::new().unwrap();

    fixture
        .write_config(&json!({
            "translationsRoot": "i18n",
            "primaryLocale": "de",
            "pluralForms": {"sv": 2}
        }))
        .unwrap();

    let server = TsglotMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["translationsRoot"], "i18n");
    assert_eq!(json_result["config"]["primaryLocale"], "de");
    assert_eq!(json_result["config"]["pluralForms"]["sv"], 2);
}

// ============================================================================
// get_locales tests
// ============================================================================

#[tokio::test]
async fn test_get_locales() {
    let fixture = fixture_en_de().unwrap();
    fixture
        .write_catalog(
            "libfuoten_zh_CN.ts",
            r#"<TS version="2.1" language="zh_CN"><context><name></name>
<message id="err-no-host"><source>No host specified</source><translation>未指定主机</translation></message>
<message id="err-gone"><source>Gone</source><translation type="obsolete">没了</translation></message>
</context></TS>"#,
        )
        .unwrap();

    let server = TsglotMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["primaryLocale"], "en");
    assert!(
        json_result["translationsDir"]
            .as_str()
            .unwrap()
            .starts_with(fixture.root_path().to_str().unwrap())
    );

    let locales = json_result["locales"].as_array().unwrap();
    let names: Vec<&str> = locales.iter().map(|l| l["locale"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["de", "en", "zh_CN"]);

    let de = &locales[0];
    assert!(de["filePath"].as_str().unwrap().ends_with("libfuoten_de.ts"));
    assert_eq!(de["messageCount"], 3);
    assert_eq!(de["pluralForms"], 2);

    // Obsolete entries are not counted
    let zh = &locales[2];
    assert_eq!(zh["messageCount"], 1);
    assert_eq!(zh["pluralForms"], 1);
}

#[tokio::test]
async fn test_get_locales_reports_parse_errors() {
    let fixture =
        McpTestFixture::with_catalogs(vec![("libfuoten.ts", EN_TS), ("libfuoten_de.ts", DE_TS)])
            .unwrap();
    fixture
        .write_catalog("libfuoten_sv.ts", "<TS language=\"sv\"><context>")
        .unwrap();

    let server = TsglotMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["locales"].as_array().unwrap().len(), 2);
    let errors = json_result["parseErrors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(
        errors[0]["filePath"]
            .as_str()
            .unwrap()
            .ends_with("libfuoten_sv.ts")
    );
}

#[tokio::test]
async fn test_get_locales_without_primary_fails() {
    let fixture = McpTestFixture::with_catalogs(vec![("libfuoten_de.ts", DE_TS)]).unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let err = server.get_locales(params).await.unwrap_err();
    assert!(err.message.contains("Primary locale 'en' catalog not found"));
}
