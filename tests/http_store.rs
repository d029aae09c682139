//! HTTP stores against a local mock of the labeling service.

use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;

use labelr::api::{ApiError, CategoryStore, HttpCategoryStore, HttpInputStore, InputStore, build_client};
use labelr::types::CategoryDraft;

fn categories(server: &MockServer) -> HttpCategoryStore {
    let client = build_client(Duration::from_secs(5)).unwrap();
    HttpCategoryStore::new(client, server.url("/categories"))
}

fn inputs(server: &MockServer) -> HttpInputStore {
    let client = build_client(Duration::from_secs(5)).unwrap();
    HttpInputStore::new(client, server.url("/user-inputs"))
}

#[test]
fn category_list_keeps_service_order() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/categories");
        then.status(200).json_body(json!([
            {"id": 2, "name": "Zeta", "code": "B04", "color": "hsl(10, 80%, 40%)"},
            {"id": 1, "name": "Alpha", "code": "A09", "color": "#336699"}
        ]));
    });

    let list = categories(&server).list().unwrap();

    mock.assert();
    let codes = list.iter().map(|c| c.code.as_str()).collect::<Vec<_>>();
    assert_eq!(codes, vec!["B04", "A09"]);
    assert_eq!(list[0].id, Some(2));
}

#[test]
fn create_posts_name_code_and_color_without_id() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/categories")
            .json_body(json!({"name": "Refunds", "code": "A02", "color": "hsl(10, 80%, 40%)"}));
        then.status(201).json_body(
            json!({"id": 9, "name": "Refunds", "code": "A02", "color": "hsl(10, 80%, 40%)"}),
        );
    });
    let draft = CategoryDraft::new("Refunds", "A02".parse().unwrap(), "hsl(10, 80%, 40%)");

    let created = categories(&server).create(&draft).unwrap();

    mock.assert();
    assert_eq!(created.id, Some(9));
    assert_eq!(created.code, "A02");
}

#[test]
fn rename_puts_only_the_name_to_the_item_url() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/categories/4")
            .json_body(json!({"name": "Junk"}));
        then.status(200)
            .json_body(json!({"id": 4, "name": "Junk", "code": "A01", "color": "#112233"}));
    });

    let renamed = categories(&server).update(4, "Junk").unwrap();

    mock.assert();
    assert_eq!(renamed.name, "Junk");
    assert_eq!(renamed.code, "A01");
}

#[test]
fn delete_hits_the_item_url() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/categories/4");
        then.status(204);
    });

    categories(&server).delete(4).unwrap();

    mock.assert();
}

#[test]
fn conflict_keeps_status_and_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/categories");
        then.status(409).body("duplicate code A02");
    });
    let draft = CategoryDraft::new("Refunds", "A02".parse().unwrap(), "hsl(10, 80%, 40%)");

    let err = categories(&server).create(&draft).unwrap_err();

    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 409);
            assert_eq!(body, "duplicate code A02");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[test]
fn failed_delete_is_a_status_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/categories/4");
        then.status(404).body("not found");
    });

    let err = categories(&server).delete(4).unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 404, ref body } if body == "not found"));
}

#[test]
fn input_list_reads_capitalised_categories() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/user-inputs");
        then.status(200).json_body(json!([
            {
                "id": 7,
                "input_data": "refund please",
                "Categories": [{"id": 1, "name": "Billing", "code": "A00", "color": "#336699"}]
            },
            {"id": 8, "input_data": "no labels yet"}
        ]));
    });

    let list = inputs(&server).list().unwrap();

    mock.assert();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].categories[0].code, "A00");
    assert!(list[1].categories.is_empty());
}

#[test]
fn submit_posts_input_data() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/user-inputs")
            .json_body(json!({"input_data": "where is my order"}));
        then.status(201)
            .json_body(json!({"id": 12, "input_data": "where is my order", "Categories": []}));
    });

    let input = inputs(&server).submit("where is my order").unwrap();

    mock.assert();
    assert_eq!(input.id, 12);
    assert_eq!(input.input_data, "where is my order");
}

#[test]
fn delete_input_hits_the_item_url() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/user-inputs/12");
        then.status(200);
    });

    inputs(&server).delete(12).unwrap();

    mock.assert();
}

#[test]
fn unavailable_service_keeps_status_and_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/user-inputs");
        then.status(503).body("maintenance");
    });

    let err = inputs(&server).list().unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 503, ref body } if body == "maintenance"));
    assert_eq!(err.to_string(), "service returned 503: maintenance");
}

#[test]
fn malformed_json_is_a_request_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/categories");
        then.status(200).body("not json");
    });

    let err = categories(&server).list().unwrap_err();

    assert!(matches!(err, ApiError::Request(_)));
}
