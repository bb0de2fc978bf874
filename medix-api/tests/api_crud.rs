/// Store-backed integration tests
///
/// These exercise the full request → database → response path and
/// therefore need `DATABASE_URL` pointing at a postgres with the
/// application tables (users, tasks, categories) in place. They are
/// ignored by default so plain `cargo test` stays green without external
/// services:
///
/// ```bash
/// DATABASE_URL=postgresql://localhost/medix_test cargo test -p medix-api -- --ignored
/// ```

mod common;

use axum::http::StatusCode;
use common::TestContext;
use serde_json::json;
use std::time::{SystemTime, UNIX_EPOCH};
use tower::Service as _;

/// Produces an email no prior run has used
fn unique_email(tag: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}-{}@example.com", tag, nanos)
}

async fn count_users_with_email(ctx: &TestContext, email: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(&ctx.db)
        .await
        .unwrap();
    count
}

async fn cleanup_user(ctx: &TestContext, user_id: i64) {
    sqlx::query("DELETE FROM tasks WHERE user_id = $1")
        .bind(user_id as i32)
        .execute(&ctx.db)
        .await
        .unwrap();
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id as i32)
        .execute(&ctx.db)
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a migrated postgres"]
async fn user_and_task_lifecycle() {
    let ctx = TestContext::connected().await.unwrap();
    let email = unique_email("ana");

    // Create the user
    let response = ctx
        .app
        .clone()
        .call(common::json_request(
            "POST",
            "/api/users",
            json!({ "name": "Ana", "email": email }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let user = common::body_json(response).await;
    assert_eq!(user["name"], "Ana");
    assert_eq!(user["email"], email.as_str());
    let user_id = user["id"].as_i64().unwrap();

    // The same email again is a store failure, not a second row
    let response = ctx
        .app
        .clone()
        .call(common::json_request(
            "POST",
            "/api/users",
            json!({ "name": "Ana Clone", "email": email }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        common::body_json(response).await,
        json!({ "error": "could not create user" })
    );
    assert_eq!(count_users_with_email(&ctx, &email).await, 1);

    // Create a task; completed defaults to false and the default category
    // is attached when the lazy upsert succeeded
    let response = ctx
        .app
        .clone()
        .call(common::json_request(
            "POST",
            &format!("/api/users/{}/tasks", user_id),
            json!({ "title": "Buy milk" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let task = common::body_json(response).await;
    assert_eq!(task["title"], "Buy milk");
    assert_eq!(task["completed"], false);
    assert_eq!(task["description"], serde_json::Value::Null);
    assert_eq!(task["userId"].as_i64().unwrap(), user_id);
    let first_task_id = task["id"].as_i64().unwrap();
    let initial_category = task["categoryId"].clone();

    let response = ctx
        .app
        .clone()
        .call(common::json_request(
            "POST",
            &format!("/api/users/{}/tasks", user_id),
            json!({ "title": "Walk the dog", "description": "around the block" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Listing is newest first
    let response = ctx
        .app
        .clone()
        .call(common::empty_request(
            "GET",
            &format!("/api/users/{}/tasks", user_id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let tasks = common::body_json(response).await;
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["title"], "Walk the dog");
    assert_eq!(tasks[1]["title"], "Buy milk");
    assert!(tasks[0]["id"].as_i64().unwrap() > tasks[1]["id"].as_i64().unwrap());

    // Partial update: only `completed` changes
    let response = ctx
        .app
        .clone()
        .call(common::json_request(
            "PUT",
            &format!("/api/tasks/{}", first_task_id),
            json!({ "completed": true }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let task = common::body_json(response).await;
    assert_eq!(task["completed"], true);
    assert_eq!(task["title"], "Buy milk");
    assert_eq!(task["description"], serde_json::Value::Null);
    assert_eq!(task["categoryId"], initial_category);

    // Explicit null clears the description; the empty subset changes nothing
    let response = ctx
        .app
        .clone()
        .call(common::json_request(
            "PUT",
            &format!("/api/tasks/{}", first_task_id),
            json!({ "description": "2 liters" }),
        ))
        .await
        .unwrap();
    assert_eq!(common::body_json(response).await["description"], "2 liters");

    let response = ctx
        .app
        .clone()
        .call(common::json_request(
            "PUT",
            &format!("/api/tasks/{}", first_task_id),
            json!({ "description": null }),
        ))
        .await
        .unwrap();
    let task = common::body_json(response).await;
    assert_eq!(task["description"], serde_json::Value::Null);
    assert_eq!(task["completed"], true);

    let response = ctx
        .app
        .clone()
        .call(common::json_request(
            "PUT",
            &format!("/api/tasks/{}", first_task_id),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await["title"], "Buy milk");

    // Delete answers 204 with an empty body
    let response = ctx
        .app
        .clone()
        .call(common::empty_request(
            "DELETE",
            &format!("/api/tasks/{}", first_task_id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(common::body_text(response).await.is_empty());

    let response = ctx
        .app
        .clone()
        .call(common::empty_request(
            "GET",
            &format!("/api/users/{}/tasks", user_id),
        ))
        .await
        .unwrap();
    let tasks = common::body_json(response).await;
    assert_eq!(tasks.as_array().unwrap().len(), 1);

    cleanup_user(&ctx, user_id).await;
}

/// Missing ids follow the data-access policy: a generic 500, not a 404.
#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a migrated postgres"]
async fn deleting_missing_task_returns_500() {
    let ctx = TestContext::connected().await.unwrap();

    // Serial ids start at 1, so 0 never exists
    let response = ctx
        .app
        .clone()
        .call(common::empty_request("DELETE", "/api/tasks/0"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        common::body_json(response).await,
        json!({ "error": "could not delete task" })
    );
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a migrated postgres"]
async fn updating_missing_task_returns_500() {
    let ctx = TestContext::connected().await.unwrap();

    let response = ctx
        .app
        .clone()
        .call(common::json_request(
            "PUT",
            "/api/tasks/0",
            json!({ "title": "ghost" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        common::body_json(response).await,
        json!({ "error": "could not update task" })
    );
}
