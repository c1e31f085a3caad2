use rmcp::handler::server::wrapper::Parameters;
use tsglot::mcp::{TsglotMcpServer, types::TranslateParams};

use crate::{extract_tool_result_json, fixture_en_de};

fn params(root: String, id: &str, locale: &str, count: Option<i64>) -> Parameters<TranslateParams> {
    Parameters(TranslateParams {
        project_root_path: root,
        id: id.to_string(),
        locale: locale.to_string(),
        count,
        args: None,
    })
}

#[tokio::test]
async fn test_translate_plural() {
    let fixture = fixture_en_de().unwrap();
    let server = TsglotMcpServer::new();

    let result = server
        .translate(params(fixture.root(), "err-conn-timeout", "de", Some(5)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["text"], "Die Verbindung wurde nach 5 Sekunden beendet.");
    assert_eq!(json_result["found"], true);
    assert_eq!(json_result["fallbackToSource"], false);
}

#[tokio::test]
async fn test_translate_unfinished_with_args() {
    let fixture = fixture_en_de().unwrap();
    let server = TsglotMcpServer::new();

    let mut p = params(fixture.root(), "err-folder-exists", "de", None);
    p.0.args = Some(vec!["Feeds".to_string(), "cloud.example.org".to_string()]);

    let result = server.translate(p).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(
        json_result["text"],
        "The folder Feeds already exists on cloud.example.org."
    );
    assert_eq!(json_result["fallbackToSource"], true);
}

#[tokio::test]
async fn test_translate_unknown_id() {
    let fixture = fixture_en_de().unwrap();
    let server = TsglotMcpServer::new();

    let result = server
        .translate(params(fixture.root(), "err-unknown", "de", None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["text"], "err-unknown");
    assert_eq!(json_result["found"], false);
}

#[tokio::test]
async fn test_translate_invalid_locale() {
    let fixture = fixture_en_de().unwrap();
    let server = TsglotMcpServer::new();

    let err = server
        .translate(params(fixture.root(), "err-no-host", "../de", None))
        .await
        .unwrap_err();
    assert!(err.message.contains("Locale name can only contain"));

    let err = server
        .translate(params(fixture.root(), "err-no-host", "fr", None))
        .await
        .unwrap_err();
    assert!(err.message.contains("Locale 'fr' not found"));
}
