//! Mock-based tests for record set operations.

use crate::common::fixtures::*;
use crate::common::{mount, proxied_client, setup_mock_server};

use serde_json::json;
use vinyldns::{Error, ListFilter, RecordData, RecordSet, RecordType};
use wiremock::matchers::{any, body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_record_sets() {
    let server = setup_mock_server().await;
    let body = format!(r#"{{"recordSets": [{}], "maxItems": 100}}"#, RECORD_SET);
    mount(&server, "GET", "/zones/zone-1/recordsets", 200, &body).await;

    let client = proxied_client(&server);
    let sets = client
        .record_sets("zone-1")
        .await
        .expect("Failed to list record sets");

    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].record_type, RecordType::A);
    let addresses: Vec<_> = sets[0]
        .records
        .iter()
        .map(|r| r.address.as_deref().unwrap())
        .collect();
    assert_eq!(addresses, ["10.1.1.1", "10.1.1.2"]);
}

#[tokio::test]
async fn test_record_sets_page_filters_by_record_name() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/zones/zone-1/recordsets"))
        .and(query_param("recordNameFilter", "www"))
        .and(query_param("startFrom", "rs-0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recordSets": [],
            "recordNameFilter": "www",
            "startFrom": "rs-0"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = proxied_client(&server);
    let page = client
        .record_sets_page(
            "zone-1",
            &ListFilter::new().name_filter("www").start_from("rs-0"),
        )
        .await
        .unwrap();

    assert_eq!(page.record_name_filter.as_deref(), Some("www"));
    assert_eq!(page.start_from.as_deref(), Some("rs-0"));
}

#[tokio::test]
async fn test_record_set() {
    let server = setup_mock_server().await;
    let body = format!(r#"{{"recordSet": {}}}"#, RECORD_SET);
    mount(&server, "GET", "/zones/zone-1/recordsets/rs-1", 200, &body).await;

    let client = proxied_client(&server);
    let rs = client.record_set("zone-1", "rs-1").await.unwrap();

    assert_eq!(rs.id.as_deref(), Some("rs-1"));
    assert_eq!(rs.name, "www");
    assert_eq!(rs.ttl.as_secs(), 300);
}

#[tokio::test]
async fn test_record_set_create() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/zones/zone-1/recordsets"))
        .and(body_json(json!({
            "zoneId": "zone-1",
            "name": "www",
            "type": "A",
            "ttl": 300,
            "records": [{"address": "10.1.1.1"}, {"address": "10.1.1.2"}]
        })))
        .respond_with(ResponseTemplate::new(202).set_body_string(record_set_change("Create")))
        .expect(1)
        .mount(&server)
        .await;

    let rs = RecordSet::new(
        "zone-1",
        "www",
        RecordType::A,
        300,
        vec![
            RecordData::a("10.1.1.1".parse().unwrap()),
            RecordData::a("10.1.1.2".parse().unwrap()),
        ],
    );

    let client = proxied_client(&server);
    let change = client
        .record_set_create(&rs)
        .await
        .expect("Failed to create record set");

    assert_eq!(change.change_type, "Create");
    assert_eq!(change.record_set.id.as_deref(), Some("rs-1"));
    assert_eq!(change.zone.name, "ok.");
}

#[tokio::test]
async fn test_record_set_create_requires_zone() {
    let server = setup_mock_server().await;

    let rs = RecordSet::new("", "www", RecordType::A, 300, vec![]);
    let client = proxied_client(&server);
    let err = client.record_set_create(&rs).await.unwrap_err();

    assert!(matches!(err, Error::MissingId(_)));
}

#[tokio::test]
async fn test_record_set_update() {
    let server = setup_mock_server().await;
    mount(
        &server,
        "PUT",
        "/zones/zone-1/recordsets/rs-1",
        202,
        &record_set_change("Update"),
    )
    .await;

    let mut rs = RecordSet::new(
        "zone-1",
        "www",
        RecordType::TXT,
        300,
        vec![RecordData::txt("hello")],
    );

    let client = proxied_client(&server);
    let err = client.record_set_update(&rs).await.unwrap_err();
    assert!(matches!(err, Error::MissingId("record set")));

    rs.id = Some("rs-1".to_string());
    let change = client.record_set_update(&rs).await.unwrap();
    assert_eq!(change.change_type, "Update");
}

#[tokio::test]
async fn test_record_set_update_rejects_empty_ids() {
    let server = setup_mock_server().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(202).set_body_string(record_set_change("Update")))
        .expect(0)
        .mount(&server)
        .await;

    let client = proxied_client(&server);

    let mut rs = RecordSet::new("", "www", RecordType::A, 300, vec![]);
    rs.id = Some("rs-1".to_string());
    let err = client.record_set_update(&rs).await.unwrap_err();
    assert!(matches!(err, Error::MissingId("record set zone")));

    rs.zone_id = "zone-1".to_string();
    rs.id = Some(String::new());
    let err = client.record_set_update(&rs).await.unwrap_err();
    assert!(matches!(err, Error::MissingId("record set")));
}

#[tokio::test]
async fn test_record_set_delete() {
    let server = setup_mock_server().await;
    mount(
        &server,
        "DELETE",
        "/zones/zone-1/recordsets/rs-1",
        202,
        &record_set_change("Delete"),
    )
    .await;

    let client = proxied_client(&server);
    let change = client.record_set_delete("zone-1", "rs-1").await.unwrap();

    assert_eq!(change.change_type, "Delete");
    assert_eq!(change.status, "Pending");
}

#[tokio::test]
async fn test_record_set_malformed() {
    let server = setup_mock_server().await;
    mount(
        &server,
        "GET",
        "/zones/zone-1/recordsets/rs-1",
        200,
        r#"{"recordSet": {"name": "www"}}"#,
    )
    .await;

    let client = proxied_client(&server);
    let err = client.record_set("zone-1", "rs-1").await.unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_record_set_ttl_out_of_range_is_decode_error() {
    let server = setup_mock_server().await;
    mount(
        &server,
        "GET",
        "/zones/zone-1/recordsets/rs-1",
        200,
        r#"{"recordSet": {"zoneId": "zone-1", "name": "www", "type": "A", "ttl": 3000000000, "records": []}}"#,
    )
    .await;

    let client = proxied_client(&server);
    let err = client.record_set("zone-1", "rs-1").await.unwrap_err();

    match err {
        Error::Decode { body, .. } => assert!(body.contains("3000000000")),
        other => panic!("expected decode error, got {:?}", other),
    }
}
