//! Common test utilities shared across test modules.
//!
//! The mock server stands in for the network: clients are pointed at the
//! fictional `http://host.com` base URL and routed to the server through an
//! HTTP proxy, so the client's own URL handling is exercised unchanged.

use vinyldns::{Client, HttpClientConfig};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Body of the fallback response for unmatched requests.
pub const NOT_FOUND_BODY: &str = "not found";

/// Sets up a new mock server for testing.
///
/// Requests that match no mounted route get a 404 with [`NOT_FOUND_BODY`],
/// the way VinylDNS answers unknown paths.
pub async fn setup_mock_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(404).set_body_string(NOT_FOUND_BODY))
        .with_priority(u8::MAX)
        .mount(&server)
        .await;
    server
}

/// Test constants used across multiple test modules.
#[allow(dead_code)]
pub mod constants {
    /// Base URL every mock client is configured with.
    pub const HOST: &str = "http://host.com";

    /// Standard test access key used in mock tests.
    pub const ACCESS_KEY: &str = "accessToken";

    /// Standard test secret key used in mock tests.
    pub const SECRET_KEY: &str = "secretToken";
}

/// Creates a client whose traffic is proxied to `server`.
pub fn proxied_client(server: &MockServer) -> Client {
    let config = HttpClientConfig::new().proxy(server.uri());
    Client::with_config(
        constants::ACCESS_KEY,
        constants::SECRET_KEY,
        constants::HOST,
        config,
    )
    .expect("Failed to create client")
}

/// Serves `body` verbatim with `status` for `verb` requests to `route`.
///
/// Requests that match no mounted route fall through to the 404 from
/// [`setup_mock_server`].
pub async fn mount(server: &MockServer, verb: &str, route: &str, status: u16, body: &str) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(status)
                .insert_header("Content-Type", "application/json")
                .set_body_string(body),
        )
        .mount(server)
        .await;
}

/// Canned response bodies in the shapes VinylDNS returns.
#[allow(dead_code)]
pub mod fixtures {
    pub const BATCH_RECORD_CHANGES: &str = r#"{
        "batchChanges": [
            {
                "userId": "vinyl",
                "userName": "vinyl201",
                "comments": "this is optional",
                "createdTimestamp": "2018-05-11T18:12:13Z",
                "totalChanges": 5,
                "status": "Complete",
                "id": "bd03175c-6fd7-4d43-a6c1-d3e5a3e59f1a"
            },
            {
                "userId": "vinyl",
                "userName": "vinyl202",
                "createdTimestamp": "2018-05-11T18:12:12Z",
                "totalChanges": 1,
                "status": "Pending",
                "id": "c2b8c0a2-a1e2-44b7-9d09-a2a57a1d0c71"
            }
        ],
        "maxItems": 100
    }"#;

    pub const BATCH_RECORD_CHANGE: &str = r#"{
        "userId": "vinyl",
        "userName": "vinyl201",
        "comments": "this is optional",
        "createdTimestamp": "2018-05-09T14:19:34Z",
        "changes": [
            {
                "changeType": "Add",
                "inputName": "parent.com.",
                "type": "A",
                "ttl": 200,
                "record": {"address": "4.5.6.7"},
                "status": "Complete",
                "recordName": "parent.com.",
                "zoneName": "parent.com.",
                "zoneId": "74e93bfc-7296-4b86-83d3-1ffcb0eb3d13",
                "recordChangeId": "a07299ce-5f81-4ab4-b2b1-3a0a0a7ae8a6",
                "recordSetId": "a5bc7d2a-9e15-4e59-b5f6-2c6b7b1d2f11",
                "id": "7573ca11-3e30-45a8-9ba5-791f7d6ae7a7"
            },
            {
                "changeType": "DeleteRecordSet",
                "inputName": "old.parent.com.",
                "type": "CNAME",
                "status": "Pending",
                "recordName": "old",
                "zoneName": "parent.com.",
                "id": "2d3f4b1c-6a0e-4a4d-8f0e-7b9d1c2e3f40"
            }
        ],
        "status": "Complete",
        "id": "123"
    }"#;

    pub const BATCH_RECORD_CHANGE_CREATE: &str = r#"{
        "userId": "vinyl",
        "userName": "vinyl201",
        "comments": "this is optional",
        "createdTimestamp": "2018-05-09T14:19:34Z",
        "changes": [
            {
                "changeType": "Add",
                "inputName": "parent.com.",
                "type": "A",
                "ttl": 200,
                "record": {"address": "4.5.6.7"},
                "status": "Pending",
                "recordName": "parent.com.",
                "zoneName": "parent.com.",
                "zoneId": "74e93bfc-7296-4b86-83d3-1ffcb0eb3d13",
                "id": "7573ca11-3e30-45a8-9ba5-791f7d6ae7a7"
            }
        ],
        "status": "Pending",
        "id": "937191c4-b1fd-4ab5-abb4-9553a65b44ab"
    }"#;

    pub const ZONE: &str = r#"{
        "id": "zone-1",
        "name": "ok.",
        "email": "test@test.com",
        "adminGroupId": "group-1",
        "status": "Active",
        "created": "2018-05-08T18:46:34Z",
        "shared": false,
        "account": "system"
    }"#;

    pub const RECORD_SET: &str = r#"{
        "id": "rs-1",
        "zoneId": "zone-1",
        "name": "www",
        "type": "A",
        "ttl": 300,
        "status": "Active",
        "created": "2018-05-08T18:46:34Z",
        "records": [{"address": "10.1.1.1"}, {"address": "10.1.1.2"}],
        "account": "system"
    }"#;

    pub const GROUP: &str = r#"{
        "id": "group-1",
        "name": "ok-group",
        "email": "test@test.com",
        "description": "an ok group",
        "status": "Active",
        "created": "2018-05-08T18:46:34Z",
        "members": [{"id": "ok"}, {"id": "dummy"}],
        "admins": [{"id": "ok"}]
    }"#;

    /// Wraps a zone in a change envelope.
    pub fn zone_change(change_type: &str) -> String {
        format!(
            r#"{{"zone": {}, "userId": "ok", "changeType": "{}", "status": "Pending", "created": "2018-05-08T18:46:34Z", "id": "change-1"}}"#,
            ZONE, change_type
        )
    }

    /// Wraps a record set in a change envelope.
    pub fn record_set_change(change_type: &str) -> String {
        format!(
            r#"{{"zone": {}, "recordSet": {}, "userId": "ok", "changeType": "{}", "status": "Pending", "created": "2018-05-08T18:46:34Z", "id": "change-2"}}"#,
            ZONE, RECORD_SET, change_type
        )
    }
}
