//! HTTP-level integration tests for the job endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_application, create_job, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

fn full_job(title: &str, status: &str) -> serde_json::Value {
    json!({
        "title": title,
        "type": "full-time",
        "salary_min": "90000",
        "salary_max": "120000",
        "location": "Remote",
        "color": "#10B981",
        "description": "Build and operate the platform.",
        "requirements": ["Rust", "PostgreSQL"],
        "responsibilities": ["Ship features"],
        "benefits": ["Health insurance"],
        "status": status,
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_job_returns_201_with_slug_and_zero_count(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/jobs", full_job("Senior Rust Engineer", "published")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Senior Rust Engineer");
    assert_eq!(json["slug"], "senior-rust-engineer");
    assert_eq!(json["type"], "full-time");
    assert_eq!(json["status"], "published");
    assert_eq!(json["applications_count"], 0);
    assert_eq!(json["requirements"], json!(["Rust", "PostgreSQL"]));
    assert!(json["id"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_job_with_only_title_uses_defaults(pool: PgPool) {
    let json = create_job(&pool, json!({ "title": "Office Manager" })).await;

    assert_eq!(json["status"], "draft");
    assert_eq!(json["color"], "#3B82F6");
    assert_eq!(json["currency"], "USD");
    assert_eq!(json["meta_title"], "Office Manager");
    assert!(json["meta_description"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_job_with_duplicate_title_gets_suffixed_slug(pool: PgPool) {
    let first = create_job(&pool, full_job("DevOps Engineer", "draft")).await;
    let second = create_job(&pool, full_job("DevOps Engineer", "draft")).await;

    assert_eq!(first["slug"], "devops-engineer");
    assert_eq!(second["slug"], "devops-engineer-2");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_job_without_title_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/jobs", json!({ "location": "Remote" })).await;
    assert!(response.status().is_client_error());

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/jobs", json!({ "title": "   " })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_job_with_bad_color_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/jobs",
        json!({ "title": "Painter", "color": "blue" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_job_by_id_and_by_slug(pool: PgPool) {
    let created = create_job(&pool, full_job("Data Engineer", "published")).await;
    let id = created["id"].as_str().unwrap();

    let by_id = body_json(get(common::build_test_app(pool.clone()), &format!("/api/jobs/{id}")).await).await;
    let by_slug = body_json(get(common::build_test_app(pool), "/api/jobs/data-engineer").await).await;

    assert_eq!(by_id["id"], created["id"]);
    assert_eq!(by_id, by_slug);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_unknown_job_returns_404(pool: PgPool) {
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/jobs/{}", uuid::Uuid::new_v4()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(common::build_test_app(pool), "/api/jobs/no-such-slug").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_jobs_filters_by_each_status(pool: PgPool) {
    for status in ["published", "draft", "paused", "closed"] {
        create_job(&pool, full_job(&format!("{status} role"), status)).await;
    }

    for status in ["published", "draft", "paused", "closed"] {
        let response = get(
            common::build_test_app(pool.clone()),
            &format!("/api/jobs?status={status}"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let jobs = body_json(response).await;
        let jobs = jobs.as_array().unwrap();
        assert_eq!(jobs.len(), 1, "exactly one {status} job");
        assert!(jobs.iter().all(|j| j["status"] == status));
    }

    let all = body_json(get(common::build_test_app(pool.clone()), "/api/jobs").await).await;
    assert_eq!(all.as_array().unwrap().len(), 4);

    let all = body_json(get(common::build_test_app(pool), "/api/jobs?status=all").await).await;
    assert_eq!(all.as_array().unwrap().len(), 4);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_jobs_hides_archived_unless_requested(pool: PgPool) {
    create_job(&pool, full_job("Live", "published")).await;
    create_job(&pool, full_job("Retired", "archived")).await;

    let visible = body_json(get(common::build_test_app(pool.clone()), "/api/jobs").await).await;
    assert_eq!(visible.as_array().unwrap().len(), 1);

    let everything = body_json(
        get(common::build_test_app(pool), "/api/jobs?includeArchived=true").await,
    )
    .await;
    assert_eq!(everything.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_jobs_with_unknown_status_returns_400(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/jobs?status=open").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_jobs_reports_live_applications_count(pool: PgPool) {
    let job = create_job(&pool, full_job("Support Engineer", "published")).await;
    let job_id = job["id"].as_str().unwrap();
    create_application(&pool, job_id, "Ada").await;
    create_application(&pool, job_id, "Grace").await;

    let jobs = body_json(get(common::build_test_app(pool.clone()), "/api/jobs").await).await;
    assert_eq!(jobs[0]["applications_count"], 2);

    let one = body_json(get(common::build_test_app(pool), &format!("/api/jobs/{job_id}")).await).await;
    assert_eq!(one["applications_count"], 2);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_job_is_partial_and_allows_any_transition(pool: PgPool) {
    let job = create_job(&pool, full_job("Recruiter", "published")).await;
    let id = job["id"].as_str().unwrap();

    for status in ["closed", "draft", "paused", "published"] {
        let response = put_json(
            common::build_test_app(pool.clone()),
            &format!("/api/jobs/{id}"),
            json!({ "status": status }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], status);
        assert_eq!(json["title"], "Recruiter");
        assert_eq!(json["location"], "Remote");
        assert_eq!(json["slug"], "recruiter");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_job_with_explicit_null_clears_closure_reason(pool: PgPool) {
    let job = create_job(
        &pool,
        json!({ "title": "Archivist", "status": "closed", "closure_reason": "filled" }),
    )
    .await;
    let id = job["id"].as_str().unwrap();
    assert_eq!(job["closure_reason"], "filled");

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/jobs/{id}"),
        json!({ "location": "Porto" }),
    )
    .await;
    assert_eq!(body_json(response).await["closure_reason"], "filled");

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/jobs/{id}"),
        json!({ "status": "published", "closure_reason": null }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "published");
    assert!(json["closure_reason"].is_null());
    assert_eq!(json["location"], "Porto");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_unknown_job_returns_404(pool: PgPool) {
    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/jobs/{}", uuid::Uuid::new_v4()),
        json!({ "title": "Ghost" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_json(
        common::build_test_app(pool),
        "/api/jobs/not-a-uuid",
        json!({ "title": "Ghost" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_job_removes_it_and_its_applications(pool: PgPool) {
    let job = create_job(&pool, full_job("Analyst", "published")).await;
    let id = job["id"].as_str().unwrap();
    let application = create_application(&pool, id, "Linus").await;

    let response = delete(common::build_test_app(pool.clone()), &format!("/api/jobs/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "success": true }));

    let response = get(common::build_test_app(pool.clone()), &format!("/api/jobs/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app_id = application["id"].as_str().unwrap();
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/applications/{app_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(common::build_test_app(pool), &format!("/api/jobs/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_then_delete_leaves_collection_unchanged(pool: PgPool) {
    create_job(&pool, full_job("Existing", "published")).await;

    let before = body_json(get(common::build_test_app(pool.clone()), "/api/jobs").await).await;

    let job = create_job(&pool, full_job("Temporary", "draft")).await;
    let id = job["id"].as_str().unwrap();
    let response = delete(common::build_test_app(pool.clone()), &format!("/api/jobs/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let after = body_json(get(common::build_test_app(pool), "/api/jobs").await).await;
    assert_eq!(
        after.as_array().unwrap().len(),
        before.as_array().unwrap().len()
    );
    assert_eq!(after, before);
}
