//! End-to-end share flow against a mock gist API.

use drawdb_share::model::{EnumDefinition, Table};
use drawdb_share::{
    Activation, Credential, DatabaseEngine, DiagramSession, MemorySettings, ShareConfig,
    ShareState, gist_synchronizer,
};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> ShareConfig {
    ShareConfig {
        api_url: server.uri(),
        base_location: "https://host/edit".to_string(),
        ..Default::default()
    }
}

fn session() -> DiagramSession {
    DiagramSession {
        tables: vec![Table {
            name: "customers".to_string(),
            ..Default::default()
        }],
        database: DatabaseEngine::MariaDb,
        enums: vec![EnumDefinition::new("tier", ["gold", "silver"])],
        ..Default::default()
    }
}

fn credential() -> Option<Credential> {
    let settings = MemorySettings::new().with("github_token", "ghp_user");
    Credential::resolve(&settings, None)
}

#[tokio::test]
async fn first_share_creates_then_updates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/gists"))
        .and(header("authorization", "Bearer ghp_user"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({ "id": "abc123" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/gists/abc123"))
        .and(body_partial_json(serde_json::json!({ "description": "drawDB diagram" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "abc123" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let sync = gist_synchronizer(&config(&server), credential(), "").unwrap();

    let first = sync.activate(&session(), "crm").await;
    assert_eq!(
        first,
        Activation::Completed(ShareState::Ready(
            "https://host/edit?shareId=abc123".to_string()
        ))
    );
    assert_eq!(sync.identifier(), "abc123");

    let second = sync.activate(&session(), "crm v2").await;
    assert_eq!(
        second.state().and_then(ShareState::url),
        Some("https://host/edit?shareId=abc123")
    );

    let requests = server.received_requests().await.unwrap();
    let created: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let content = created["files"]["share.json"]["content"].as_str().unwrap();
    let snapshot: serde_json::Value = serde_json::from_str(content).unwrap();
    assert_eq!(snapshot["database"], "mariadb");
    assert!(snapshot.get("enums").is_none());
    assert!(snapshot.get("types").is_none());
}

#[tokio::test]
async fn rejected_credential_fails_without_identifier() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/gists"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "message": "Bad credentials" })),
        )
        .mount(&server)
        .await;

    let sync = gist_synchronizer(&config(&server), credential(), "").unwrap();
    let activation = sync.activate(&session(), "crm").await;

    assert_eq!(activation, Activation::Completed(ShareState::Failed));
    assert_eq!(sync.identifier(), "");
}

#[tokio::test]
async fn shared_diagram_can_be_loaded() {
    let server = MockServer::start().await;
    let content = serde_json::json!({
        "tables": [{ "name": "customers" }],
        "relationships": [],
        "notes": [],
        "subjectAreas": [],
        "database": "postgresql",
        "types": [],
        "enums": [{ "name": "tier", "values": ["gold"] }],
        "title": "crm"
    })
    .to_string();
    Mock::given(method("GET"))
        .and(path("/gists/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "abc123",
            "files": { "share.json": { "content": content, "truncated": false } }
        })))
        .mount(&server)
        .await;

    let sync = gist_synchronizer(&config(&server), None, "").unwrap();
    let snapshot = sync.load_shared("abc123").await.unwrap();

    assert_eq!(snapshot.title, "crm");
    assert_eq!(snapshot.database, DatabaseEngine::PostgreSql);
    assert_eq!(snapshot.enums.unwrap()[0].values, vec!["gold".to_string()]);
}
