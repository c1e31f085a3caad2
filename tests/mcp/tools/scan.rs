use rmcp::handler::server::wrapper::Parameters;
use tsglot::mcp::{
    TsglotMcpServer,
    types::{ScanIssuesParams, ScanOverviewParams},
};

use crate::{assert_pagination, extract_tool_result_json, fixture_en_de, fixture_with_errors};

fn scan_params(
    root: String,
    rules: Option<Vec<&str>>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> Parameters<ScanIssuesParams> {
    Parameters(ScanIssuesParams {
        project_root_path: root,
        rules: rules.map(|r| r.into_iter().map(String::from).collect()),
        limit,
        offset,
    })
}

// ============================================================================
// scan_overview tests
// ============================================================================

#[tokio::test]
async fn test_scan_overview() {
    let fixture = fixture_with_errors().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["primaryLocale"], "en");
    assert_eq!(json_result["catalogFileCount"], 2);
    assert_eq!(json_result["messageCount"], 3);
    assert_eq!(json_result["errorCount"], 4);
    assert_eq!(json_result["warningCount"], 1);

    let rules = json_result["rules"].as_array().unwrap();
    let orphan = rules.iter().find(|r| r["rule"] == "orphan-id").unwrap();
    assert_eq!(orphan["totalCount"], 3);
    assert_eq!(orphan["severity"], "error");
    let numerus = rules.iter().find(|r| r["rule"] == "numerus-forms").unwrap();
    assert_eq!(numerus["totalCount"], 1);
    assert!(rules.iter().all(|r| r["rule"] != "placeholder"));

    let coverage = json_result["coverage"].as_array().unwrap();
    assert_eq!(coverage.len(), 1);
    assert_eq!(coverage[0]["locale"], "de");
    assert_eq!(coverage[0]["finished"], 2);
    assert_eq!(coverage[0]["unfinished"], 1);
    assert_eq!(coverage[0]["coverage"], 66.7);
}

// ============================================================================
// scan_issues tests
// ============================================================================

#[tokio::test]
async fn test_scan_issues_all() {
    let fixture = fixture_with_errors().unwrap();
    let server = TsglotMcpServer::new();

    let result = server
        .scan_issues(scan_params(fixture.root(), None, None, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 5);
    assert_pagination(&json_result, 0, 50, false);

    let items = json_result["items"].as_array().unwrap();
    let orphan = items.iter().find(|i| i["key"] == "err-removed-a").unwrap();
    assert_eq!(orphan["rule"], "orphan-id");
    assert_eq!(orphan["severity"], "error");
    assert!(orphan["filePath"].as_str().unwrap().ends_with("libfuoten_de.ts"));
    assert!(orphan["line"].as_u64().unwrap() > 0);
    assert!(orphan["hint"].as_str().unwrap().contains("tsglot clean"));
}

#[tokio::test]
async fn test_scan_issues_rule_filter() {
    let fixture = fixture_with_errors().unwrap();
    let server = TsglotMcpServer::new();

    let result = server
        .scan_issues(scan_params(
            fixture.root(),
            Some(vec!["numerus-forms", "unfinished"]),
            None,
            None,
        ))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 2);
    let items = json_result["items"].as_array().unwrap();
    let numerus = items.iter().find(|i| i["rule"] == "numerus-forms").unwrap();
    assert_eq!(numerus["key"], "err-conn-timeout");
    assert_eq!(numerus["details"], "de expects 2 plural forms, found 1");
    let unfinished = items.iter().find(|i| i["rule"] == "unfinished").unwrap();
    assert_eq!(unfinished["key"], "err-folder-exists");
    assert_eq!(unfinished["severity"], "warning");
}

#[tokio::test]
async fn test_scan_issues_pagination() {
    let fixture = fixture_with_errors().unwrap();
    let server = TsglotMcpServer::new();

    let result = server
        .scan_issues(scan_params(fixture.root(), Some(vec!["orphan-id"]), Some(2), None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["totalCount"], 3);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 2);
    assert_pagination(&json_result, 0, 2, true);

    let result = server
        .scan_issues(scan_params(fixture.root(), Some(vec!["orphan-id"]), Some(2), Some(2)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 1);
    assert_eq!(json_result["items"][0]["key"], "err-removed-c");
    assert_pagination(&json_result, 2, 2, false);
}

#[tokio::test]
async fn test_scan_issues_limit_is_capped() {
    let fixture = fixture_en_de().unwrap();
    let server = TsglotMcpServer::new();

    let result = server
        .scan_issues(scan_params(fixture.root(), None, Some(500), None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_pagination(&json_result, 0, 100, false);
}

#[tokio::test]
async fn test_scan_issues_unknown_rule() {
    let fixture = fixture_en_de().unwrap();
    let server = TsglotMcpServer::new();

    let err = server
        .scan_issues(scan_params(fixture.root(), Some(vec!["spelling"]), None, None))
        .await
        .unwrap_err();

    assert!(err.message.contains("Unknown rule: 'spelling'"));
}

#[tokio::test]
async fn test_scan_issues_source_rules() {
    let fixture = fixture_en_de().unwrap();
    let src = fixture.root_path().join("src");
    std::fs::create_dir_all(&src).unwrap();
    std::fs::write(
        src.join("component.cpp"),
        "setError(qtTrId(\"err-no-host\"));\nsetError(qtTrId(\"err-conn-timeout\", n));\n\
         //% \"The entered version number is not valid.\"\nsetError(qtTrId(\"err-version-invalid\"));\n",
    )
    .unwrap();
    let server = TsglotMcpServer::new();

    let result = server
        .scan_issues(scan_params(
            fixture.root(),
            Some(vec!["undefined-id", "unused-id"]),
            None,
            None,
        ))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 2);
    let items = json_result["items"].as_array().unwrap();
    let undefined = items.iter().find(|i| i["rule"] == "undefined-id").unwrap();
    assert_eq!(undefined["key"], "err-version-invalid");
    assert_eq!(undefined["severity"], "error");
    assert_eq!(undefined["line"], 4);
    assert!(undefined["filePath"].as_str().unwrap().ends_with("src/component.cpp"));
    let unused = items.iter().find(|i| i["rule"] == "unused-id").unwrap();
    assert_eq!(unused["key"], "err-folder-exists");
    assert_eq!(unused["severity"], "warning");
}
