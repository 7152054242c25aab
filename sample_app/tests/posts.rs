mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{app, call};
use todo_app::models::Post;
use todo_app::Stores;

fn seeded() -> Stores {
    let stores = Stores::default();
    stores.posts.create(Post::new("First Post", "This is the first test blog post")).unwrap();
    stores.posts.create(Post::new("Second Post", "This is the second test blog post")).unwrap();
    stores
}

#[tokio::test]
async fn creates_and_lists_posts() {
    let app = app(&seeded());
    let (status, body) = call(&app, Method::POST, "/posts", Some(json!({ "title": "Test Post" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Post created");
    assert_eq!(body["post"]["id"], 3);

    let (status, body) = call(&app, Method::GET, "/posts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn show_includes_comments() {
    let app = app(&seeded());
    let (status, _) = call(&app, Method::POST, "/posts/1/comments", Some(json!({ "content": "Nice", "author": "Ana" }))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(&app, Method::GET, "/posts/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "First Post");
    assert_eq!(body["comments"][0]["content"], "Nice");

    let (status, body) = call(&app, Method::GET, "/posts/999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Post not found" }));
}

#[tokio::test]
async fn comments_are_scoped_to_their_post() {
    let app = app(&seeded());
    let (status, body) = call(&app, Method::POST, "/posts/2/comments", Some(json!({ "content": "Second!" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Comment created");
    assert_eq!(body["comment"]["post_id"], 2);

    let (status, body) = call(&app, Method::GET, "/posts/2/comments", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = call(&app, Method::GET, "/posts/1/comments", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn comments_need_an_existing_post() {
    let app = app(&seeded());
    let (status, body) = call(&app, Method::POST, "/posts/999999/comments", Some(json!({ "content": "x" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Post not found" }));

    let (status, body) = call(&app, Method::POST, "/posts/1/comments", Some(json!({ "author": "Ana" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"]["content"], json!(["is not present"]));
}

#[tokio::test]
async fn comments_outside_a_post_are_not_listed() {
    let app = app(&seeded());
    let (status, body) = call(&app, Method::GET, "/comments", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Comment not found" }));

    let (status, _) = call(&app, Method::GET, "/todos/1/comments", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deletes_a_comment_directly() {
    let stores = seeded();
    let app = app(&stores);
    call(&app, Method::POST, "/posts/1/comments", Some(json!({ "content": "bye" }))).await;
    let (status, body) = call(&app, Method::POST, "/comments/1/delete", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Comment deleted successfully");
    assert!(stores.comments.is_empty().unwrap());
}

#[tokio::test]
async fn updates_and_deletes_posts() {
    let stores = seeded();
    let app = app(&stores);
    let (status, body) = call(&app, Method::POST, "/posts/1", Some(json!({ "description": "Edited" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Post updated");
    assert_eq!(body["post"]["title"], "First Post");
    assert_eq!(body["post"]["description"], "Edited");

    let (status, body) = call(&app, Method::POST, "/posts/2/delete", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["post"]["title"], "Second Post");
    assert_eq!(stores.posts.len().unwrap(), 1);
}
