#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! `HttpHeroesApi` against an in-process fake of the heroes service.

mod common;

use common::FakeHeroesServer;
use heroes_client::{ApiError, ClientConfig, HeroId, HeroPayload, HeroesApi, HttpHeroesApi};
use serde_json::json;

const TWO_HEROES: &str = r#"[
    {"_id":"1","nombre":"Batman","poder":"Dinero","estado":true},
    {"_id":"2","nombre":"Robin","poder":"Acrobacia","estado":false}
]"#;

fn flash() -> HeroPayload {
    HeroPayload {
        name: "Flash".to_string(),
        power: "Velocidad".to_string(),
        alive: true,
    }
}

// ============ List ============

#[tokio::test]
async fn list_shapes_normalize_to_the_same_rows() {
    let server = FakeHeroesServer::start().await;
    server.respond("GET", "/heroes", 200, TWO_HEROES);
    let bare = require_ok!(server.api().list_heroes().await);

    server.respond("GET", "/heroes", 200, &format!(r#"{{"heroes":{TWO_HEROES}}}"#));
    let wrapped = require_ok!(server.api().list_heroes().await);

    assert_eq!(bare, wrapped);
    assert_eq!(bare.len(), 2);
    assert_eq!(bare[1].id, HeroId::from("2"));
    assert!(!bare[1].is_alive());
}

#[tokio::test]
async fn list_unknown_shape_is_empty() {
    let server = FakeHeroesServer::start().await;
    server.respond("GET", "/heroes", 200, r#"{"ok":true}"#);
    let heroes = require_ok!(server.api().list_heroes().await);
    assert!(heroes.is_empty());
}

#[tokio::test]
async fn list_server_error_is_http_status() {
    let server = FakeHeroesServer::start().await;
    server.respond("GET", "/heroes", 500, r#"{"message":"db down"}"#);
    let result = server.api().list_heroes().await;
    assert!(
        matches!(&result, Err(ApiError::HttpStatus { status: 500, .. })),
        "unexpected result: {result:?}"
    );
}

// ============ Get one ============

#[tokio::test]
async fn get_reads_heroe_envelope() {
    let server = FakeHeroesServer::start().await;
    server.respond(
        "GET",
        "/heroes/42",
        200,
        r#"{"heroe":{"_id":"42","nombre":"X","poder":"Y"}}"#,
    );

    let hero = require_ok!(server.api().get_hero(&HeroId::from("42")).await);
    assert_eq!(hero.name, "X");
    assert_eq!(hero.power, "Y");
    assert_eq!(hero.alive, None);
}

#[tokio::test]
async fn get_record_without_id_uses_requested_id() {
    let server = FakeHeroesServer::start().await;
    server.respond("GET", "/heroes/42", 200, r#"{"heroe":{"nombre":"X","poder":"Y"}}"#);

    let hero = require_ok!(server.api().get_hero(&HeroId::from("42")).await);
    assert_eq!(hero.id, HeroId::from("42"));
    assert_eq!(hero.name, "X");
    assert_eq!(hero.power, "Y");
    assert_eq!(hero.alive, None);
}

#[tokio::test]
async fn get_without_heroe_is_not_found() {
    let server = FakeHeroesServer::start().await;
    server.respond("GET", "/heroes/42", 200, r#"{"message":"ok"}"#);

    let result = server.api().get_hero(&HeroId::from("42")).await;
    assert_eq!(result, Err(ApiError::HeroNotFound { id: "42".into() }));
}

#[tokio::test]
async fn get_unknown_id_is_404() {
    let server = FakeHeroesServer::start().await;
    let result = server.api().get_hero(&HeroId::from("nope")).await;
    assert!(matches!(result, Err(ApiError::HttpStatus { status: 404, .. })));
}

// ============ Create ============

#[tokio::test]
async fn create_posts_wire_body_exactly_once() {
    let server = FakeHeroesServer::start().await;
    server.respond("POST", "/heroes", 201, r#"{"message":"Héroe creado"}"#);

    let receipt = require_ok!(server.api().create_hero(&flash()).await);
    assert_eq!(receipt.message.as_deref(), Some("Héroe creado"));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/heroes");
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(
        requests[0].json(),
        json!({"nombre": "Flash", "poder": "Velocidad", "estado": true})
    );
}

#[tokio::test]
async fn create_without_message_has_empty_receipt() {
    let server = FakeHeroesServer::start().await;
    server.respond("POST", "/heroes", 201, r#"{"heroe":{}}"#);
    let receipt = require_ok!(server.api().create_hero(&flash()).await);
    assert_eq!(receipt.message, None);
}

#[tokio::test]
async fn create_with_ok_status_is_unexpected() {
    let server = FakeHeroesServer::start().await;
    server.respond("POST", "/heroes", 200, r#"{"message":"hmm"}"#);
    let result = server.api().create_hero(&flash()).await;
    assert_eq!(result, Err(ApiError::UnexpectedStatus { status: 200 }));
}

#[tokio::test]
async fn create_validation_errors_are_joined() {
    let server = FakeHeroesServer::start().await;
    server.respond("POST", "/heroes", 400, r#"{"errors":["a","b"]}"#);

    let err = server.api().create_hero(&flash()).await.unwrap_err();
    assert_eq!(err.display_message("fallback"), "a, b");
}

// ============ Update ============

#[tokio::test]
async fn update_puts_to_id_path() {
    let server = FakeHeroesServer::start().await;
    server.respond("PUT", "/heroes/42", 200, r#"{"message":"Héroe actualizado"}"#);

    let receipt = require_ok!(server.api().update_hero(&HeroId::from("42"), &flash()).await);
    assert_eq!(receipt.message.as_deref(), Some("Héroe actualizado"));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/api/heroes/42");
    assert_eq!(requests[0].json()["estado"], json!(true));
}

#[tokio::test]
async fn update_failure_message_wins() {
    let server = FakeHeroesServer::start().await;
    server.respond(
        "PUT",
        "/heroes/42",
        409,
        r#"{"message":"Nombre duplicado","errors":["x"]}"#,
    );

    let err = server
        .api()
        .update_hero(&HeroId::from("42"), &flash())
        .await
        .unwrap_err();
    assert_eq!(err.display_message("fallback"), "Nombre duplicado");
    assert!(err.is_expected());
}

// ============ Delete ============

#[tokio::test]
async fn delete_accepts_ok_and_no_content() {
    let server = FakeHeroesServer::start().await;
    server.respond("DELETE", "/heroes/1", 200, r#"{"message":"Eliminado"}"#);
    server.respond("DELETE", "/heroes/2", 204, "");

    let api = server.api();
    require_ok!(api.delete_hero(&HeroId::from("1")).await);
    require_ok!(api.delete_hero(&HeroId::from("2")).await);
    assert_eq!(server.requests().len(), 2);
}

#[tokio::test]
async fn delete_failure_is_error() {
    let server = FakeHeroesServer::start().await;
    server.respond("DELETE", "/heroes/1", 500, "");
    let result = server.api().delete_hero(&HeroId::from("1")).await;
    assert!(matches!(result, Err(ApiError::HttpStatus { status: 500, .. })));
}

// ============ Transport ============

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpHeroesApi::new(&ClientConfig::with_base_url(format!("http://{addr}/api"))).unwrap();
    let result = api.list_heroes().await;
    assert!(
        matches!(&result, Err(ApiError::NetworkError { .. })),
        "unexpected result: {result:?}"
    );
    assert!(!result.unwrap_err().is_expected());
}
