//! Integration tests for the DirectoryClient using mockito for HTTP mocking.

use directory_reports::{DirectoryApiError, DirectoryClient};
use mockito::{Matcher, Server};

#[test]
fn test_get_contacts() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/contacts")
        .match_query(Matcher::UrlEncoded("tenant_id".into(), "tenant-1".into()))
        .match_header("x-directory-api-key", "test-api-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
            "success": true,
            "data": [{
                "id": "c-1",
                "name": "Ana Souza",
                "phone": "+55 11 91234-5678",
                "email": "ana@example.com",
                "status": "active",
                "tags": ["vip"],
                "createdAt": "2024-01-15T08:00:00Z"
            }]
        }"#,
        )
        .create();

    let client = DirectoryClient::with_base_url(server.url(), "test-api-key".to_string());
    let records = client.get_contacts("tenant-1").unwrap();

    mock.assert();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "c-1");
    assert_eq!(records[0].name, "Ana Souza");
    assert_eq!(records[0].tags, vec!["vip".to_string()]);
}

#[test]
fn test_get_contacts_tenant_id_is_url_encoded() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/contacts")
        .match_query(Matcher::UrlEncoded(
            "tenant_id".into(),
            "acme corp/br".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "data": []}"#)
        .create();

    let client = DirectoryClient::with_base_url(server.url(), "test-api-key".to_string());
    let records = client.get_contacts("acme corp/br").unwrap();

    mock.assert();
    assert!(records.is_empty());
}

#[test]
fn test_get_contacts_service_failure_envelope() {
    let mut server = Server::new();

    let _mock = server
        .mock("GET", "/contacts")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": false, "message": "directory offline"}"#)
        .create();

    let client = DirectoryClient::with_base_url(server.url(), "test-api-key".to_string());
    let err = client.get_contacts("tenant-1").unwrap_err();

    match err {
        DirectoryApiError::ServiceFailure(message) => {
            assert_eq!(message, "directory offline");
        }
        other => panic!("Expected ServiceFailure, got: {:?}", other),
    }
}

#[test]
fn test_get_contacts_skips_malformed_records() {
    let mut server = Server::new();

    // Second payload has no createdAt, third carries a status outside the
    // enumeration; both are skipped without failing the load.
    let _mock = server
        .mock("GET", "/contacts")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
            "success": true,
            "data": [
                {
                    "id": "c-1",
                    "name": "Ana Souza",
                    "phone": "+55 11 91234-5678",
                    "status": "active",
                    "createdAt": "2024-01-15T08:00:00Z"
                },
                {
                    "id": "c-2",
                    "name": "Bento Lima",
                    "phone": "+55 21 99876-1234",
                    "status": "blocked"
                },
                {
                    "id": "c-3",
                    "name": "Carla Dias",
                    "phone": "+55 31 98765-4321",
                    "status": "archived",
                    "createdAt": "2024-02-01T08:00:00Z"
                }
            ]
        }"#,
        )
        .create();

    let client = DirectoryClient::with_base_url(server.url(), "test-api-key".to_string());
    let records = client.get_contacts("tenant-1").unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "c-1");
}

#[test]
fn test_get_contacts_unauthorized() {
    let mut server = Server::new();

    let _mock = server
        .mock("GET", "/contacts")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body("unauthorized")
        .create();

    let client = DirectoryClient::with_base_url(server.url(), "bad-key".to_string());
    let err = client.get_contacts("tenant-1").unwrap_err();

    assert!(matches!(err, DirectoryApiError::Unauthorized));
}

#[test]
fn test_get_contacts_server_error() {
    let mut server = Server::new();

    let _mock = server
        .mock("GET", "/contacts")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("try later")
        .create();

    let client = DirectoryClient::with_base_url(server.url(), "test-api-key".to_string());
    let err = client.get_contacts("tenant-1").unwrap_err();

    match err {
        DirectoryApiError::ApiError { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "try later");
        }
        other => panic!("Expected ApiError, got: {:?}", other),
    }
}

#[test]
fn test_get_contacts_invalid_json() {
    let mut server = Server::new();

    let _mock = server
        .mock("GET", "/contacts")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json at all")
        .create();

    let client = DirectoryClient::with_base_url(server.url(), "test-api-key".to_string());
    let err = client.get_contacts("tenant-1").unwrap_err();

    assert!(matches!(err, DirectoryApiError::JsonError(_)));
}
