mod common;

use axum::http::{Method, StatusCode};
use mk_framework::Environment;
use serde_json::json;

use common::{app, app_in, call};
use todo_app::models::Todo;
use todo_app::Stores;

fn seeded() -> Stores {
    let stores = Stores::default();
    stores
        .todos
        .create(Todo::new("First Todo", "This is the first test todo", false))
        .unwrap();
    stores
        .todos
        .create(Todo::new("Second Todo", "This is the second test todo", true))
        .unwrap();
    stores
}

#[tokio::test]
async fn lists_todos_in_insertion_order() {
    let app = app(&seeded());
    let (status, body) = call(&app, Method::GET, "/todos", None).await;
    assert_eq!(status, StatusCode::OK);
    let todos = body.as_array().unwrap();
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0]["id"], 1);
    assert_eq!(todos[0]["title"], "First Todo");
    assert_eq!(todos[0]["completed"], false);
    assert_eq!(todos[1]["id"], 2);
    assert_eq!(todos[1]["title"], "Second Todo");
    assert_eq!(todos[1]["completed"], true);
}

#[tokio::test]
async fn shows_one_todo() {
    let app = app(&seeded());
    let (status, body) = call(&app, Method::GET, "/todos/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Second Todo");
    assert_eq!(body["description"], "This is the second test todo");

    let (status, body) = call(&app, Method::GET, "/todos/999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Todo not found" }));
}

#[tokio::test]
async fn creates_a_todo() {
    let stores = seeded();
    let app = app(&stores);
    let (status, body) = call(
        &app,
        Method::POST,
        "/todos",
        Some(json!({ "title": "Test Todo", "description": "This is a test todo" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Todo created");
    assert_eq!(body["todo"]["title"], "Test Todo");
    assert_eq!(body["todo"]["description"], "This is a test todo");
    assert_eq!(body["todo"]["completed"], false);
    assert_eq!(stores.todos.len().unwrap(), 3);
}

#[tokio::test]
async fn rejects_invalid_todos() {
    let stores = seeded();
    let app = app(&stores);
    for payload in [
        json!({ "description": "This todo has no title" }),
        json!({ "title": "X".repeat(101) }),
    ] {
        let (status, body) = call(&app, Method::POST, "/todos", Some(payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Validation failed");
        assert!(body["details"]["title"].is_array());
    }
    assert_eq!(stores.todos.len().unwrap(), 2);
}

#[tokio::test]
async fn mistyped_fields_are_validation_failures() {
    let stores = seeded();
    let app = app_in(Environment::Production, &stores);
    let (status, body) = call(&app, Method::POST, "/todos", Some(json!({ "title": 5 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"]["title"][0], "is invalid");

    let (status, body) = call(&app, Method::POST, "/todos", Some(json!({ "title": "ok", "completed": "yes" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"], json!({ "completed": ["is invalid"] }));
    assert_eq!(stores.todos.len().unwrap(), 2);

    let (status, body) = call(&app, Method::POST, "/todos/1", Some(json!({ "completed": "yes" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"], json!({ "completed": ["is invalid"] }));
    assert!(!stores.todos.fetch(1).unwrap().attrs().completed);
}

#[tokio::test]
async fn updates_only_the_given_fields() {
    let app = app(&seeded());
    let (status, body) = call(&app, Method::POST, "/todos/1", Some(json!({ "title": "Updated" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Todo updated");
    assert_eq!(body["todo"]["id"], 1);
    assert_eq!(body["todo"]["title"], "Updated");
    assert_eq!(body["todo"]["description"], "This is the first test todo");

    let (status, body) = call(&app, Method::POST, "/todos/1", Some(json!({ "completed": true }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["todo"]["title"], "Updated");
    assert_eq!(body["todo"]["completed"], true);

    let (status, body) = call(&app, Method::POST, "/todos/999999", Some(json!({ "title": "Updated" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Todo not found" }));
}

#[tokio::test]
async fn invalid_update_keeps_the_stored_todo() {
    let stores = seeded();
    let app = app(&stores);
    let (status, body) = call(&app, Method::POST, "/todos/1", Some(json!({ "title": "" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"]["title"], json!(["is not present"]));

    let (_, body) = call(&app, Method::GET, "/todos/1", None).await;
    assert_eq!(body["title"], "First Todo");
}

#[tokio::test]
async fn deletes_a_todo() {
    let stores = seeded();
    let app = app(&stores);
    let (status, body) = call(&app, Method::POST, "/todos/1/delete", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Todo deleted successfully");
    assert_eq!(body["todo"]["id"], 1);
    assert_eq!(body["todo"]["title"], "First Todo");
    assert!(stores.todos.find(1).unwrap().is_none());

    let (status, body) = call(&app, Method::POST, "/todos/999999/delete", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Todo not found" }));
}

#[tokio::test]
async fn completes_a_todo() {
    let stores = seeded();
    let app = app(&stores);
    let (status, body) = call(&app, Method::POST, "/todos/1/complete", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Todo completed");
    assert_eq!(body["todo"]["completed"], true);
    assert!(stores.todos.fetch(1).unwrap().attrs().completed);

    let (status, _) = call(&app, Method::POST, "/todos/999999/complete", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, Method::POST, "/todos/1/archive", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn other_methods_do_not_route() {
    let app = app(&seeded());
    let (status, body) = call(&app, Method::DELETE, "/todos/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Todo not found" }));
}
