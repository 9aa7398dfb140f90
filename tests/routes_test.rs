// ABOUTME: HTTP-level tests for the meal-plan API routes
// ABOUTME: Authentication, status codes, JSON shapes, and an end-to-end planning flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use axum::Router;
use common::TestContext;
use helpers::axum_test::AxumTestRequest;
use mealplan_server::server::MealPlanServer;
use serde_json::{json, Value};

fn app(ctx: &TestContext) -> Router {
    MealPlanServer::new(ctx.resources.clone()).router()
}

fn reference_body() -> Value {
    json!({
        "profile": {"gender": "Male", "weight_kg": 83, "height_cm": 173, "age": 22},
        "goal": {"goal": "Bulk", "activity_level": 1.55}
    })
}

// ================================
// Public endpoints
// ================================

#[tokio::test]
async fn test_health_and_ready() {
    let ctx = TestContext::new();

    let health: Value = AxumTestRequest::get("/health")
        .send(app(&ctx))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(health["status"], "healthy");

    let response = AxumTestRequest::get("/ready").send(app(&ctx)).await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_weekly_budget_endpoint() {
    let ctx = TestContext::new();

    let budget: Value = AxumTestRequest::post("/api/nutrition/weekly-budget")
        .json(&reference_body())
        .send(app(&ctx))
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(budget["calories"].as_f64(), Some(22540.0));
    assert_eq!(budget["protein"].as_f64(), Some(1043.0));
    assert_eq!(budget["fat"].as_f64(), Some(626.0));
}

#[tokio::test]
async fn test_remaining_budget_endpoint_accepts_legacy_fields() {
    let ctx = TestContext::new();
    let mut body = reference_body();
    body["existingRecipes"] = json!([
        {"name": "Lunch 1 - Shakshuka", "calories": 600, "protein": 40, "fat": 20}
    ]);

    let budget: Value = AxumTestRequest::post("/api/nutrition/remaining-budget")
        .json(&body)
        .send(app(&ctx))
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(budget["calories"].as_f64(), Some(20740.0));
}

#[tokio::test]
async fn test_invalid_profile_is_bad_request() {
    let ctx = TestContext::new();
    let mut body = reference_body();
    body["profile"]["age"] = json!(0);

    let error: Value = AxumTestRequest::post("/api/nutrition/daily-breakdown")
        .json(&body)
        .send(app(&ctx))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();

    assert_eq!(error["error"]["code"], "INVALID_PROFILE");
}

// ================================
// Authentication
// ================================

#[tokio::test]
async fn test_missing_and_unknown_tokens_are_unauthorized() {
    let ctx = TestContext::new();

    let response = AxumTestRequest::get("/api/wallet").send(app(&ctx)).await;
    assert_eq!(response.status(), 401);

    let response = AxumTestRequest::get("/api/wallet")
        .bearer("mp_not_a_token")
        .send(app(&ctx))
        .await;
    assert_eq!(response.status(), 401);

    let response = AxumTestRequest::get("/api/wallet")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .send(app(&ctx))
        .await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_error_body_echoes_request_id() {
    let ctx = TestContext::new();

    let response = AxumTestRequest::get("/api/wallet")
        .header("x-request-id", "req_client_supplied")
        .send(app(&ctx))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.header("x-request-id").as_deref(),
        Some("req_client_supplied")
    );
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "AUTH_REQUIRED");
    assert_eq!(body["error"]["request_id"], "req_client_supplied");
}

#[tokio::test]
async fn test_request_id_generated_when_missing() {
    let ctx = TestContext::new();

    let response = AxumTestRequest::get("/api/wallet")
        .bearer("mp_not_a_token")
        .send(app(&ctx))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    let header = response.header("x-request-id").unwrap();
    assert!(header.starts_with("req_"));

    let body: Value = response.json();
    assert_eq!(body["error"]["request_id"], header.as_str());
}

// ================================
// Planning flow
// ================================

#[tokio::test]
async fn test_plan_generate_and_list_flow() {
    let ctx = TestContext::new();
    let (_, token) = ctx.register("cook@example.com").await;

    AxumTestRequest::put("/api/me/profile")
        .bearer(&token)
        .json(&reference_body()["profile"])
        .send(app(&ctx))
        .await
        .assert_status(StatusCode::OK);
    AxumTestRequest::put("/api/me/goal")
        .bearer(&token)
        .json(&reference_body()["goal"])
        .send(app(&ctx))
        .await
        .assert_status(StatusCode::OK);

    let daily: Value = AxumTestRequest::get("/api/me/daily-breakdown")
        .bearer(&token)
        .send(app(&ctx))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(daily["tdee"].as_f64(), Some(2800.0));

    let plan: Value = AxumTestRequest::post("/api/meal-plans")
        .bearer(&token)
        .json(&json!({"name": "Week 1", "week_start": "2025-06-02"}))
        .send(app(&ctx))
        .await
        .assert_status(StatusCode::CREATED)
        .json();
    let plan_id = plan["id"].as_str().unwrap().to_owned();

    // Empty wallet
    let error: Value = AxumTestRequest::post(&format!("/api/meal-plans/{plan_id}/recipes"))
        .bearer(&token)
        .json(&json!({"slot": "dinner_1"}))
        .send(app(&ctx))
        .await
        .assert_status(StatusCode::PAYMENT_REQUIRED)
        .json();
    assert_eq!(error["error"]["code"], "INSUFFICIENT_BALANCE");

    let session: Value = AxumTestRequest::post("/api/wallet/checkout")
        .bearer(&token)
        .json(&json!({"amount_cents": 500}))
        .send(app(&ctx))
        .await
        .assert_status(StatusCode::CREATED)
        .json();
    let session_id = session["session_id"].as_str().unwrap().to_owned();
    ctx.payments.mark_paid(&session_id).unwrap();

    let confirmation: Value = AxumTestRequest::post("/api/wallet/confirm")
        .bearer(&token)
        .json(&json!({"session_id": session_id}))
        .send(app(&ctx))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(confirmation["wallet"]["balance_cents"], 500);

    let generated: Value = AxumTestRequest::post(&format!("/api/meal-plans/{plan_id}/recipes"))
        .bearer(&token)
        .json(&json!({"slot": "dinner_1"}))
        .send(app(&ctx))
        .await
        .assert_status(StatusCode::CREATED)
        .json();
    assert_eq!(generated["recipe"]["name"], "Dinner 1 - Chickpea and Spinach Stew");
    assert_eq!(generated["balance_cents"], 450);
    let recipe_id = generated["recipe"]["id"].as_str().unwrap().to_owned();

    let recipes: Vec<Value> = AxumTestRequest::get(&format!("/api/meal-plans/{plan_id}/recipes"))
        .bearer(&token)
        .send(app(&ctx))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(recipes.len(), 1);

    let remaining: Value =
        AxumTestRequest::get(&format!("/api/meal-plans/{plan_id}/remaining-budget"))
            .bearer(&token)
            .send(app(&ctx))
            .await
            .assert_status(StatusCode::OK)
            .json();
    assert_eq!(remaining["calories"].as_f64(), Some(20060.0));

    let shopping: Vec<Value> =
        AxumTestRequest::get(&format!("/api/meal-plans/{plan_id}/shopping-list"))
            .bearer(&token)
            .send(app(&ctx))
            .await
            .assert_status(StatusCode::OK)
            .json();
    assert_eq!(shopping.len(), 5);

    let prep: Vec<Value> = AxumTestRequest::get(&format!("/api/meal-plans/{plan_id}/prep-list"))
        .bearer(&token)
        .send(app(&ctx))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(prep[0]["instruction"], "Soak chickpeas overnight");

    let patched: Value = AxumTestRequest::patch(&format!("/api/recipes/{recipe_id}"))
        .bearer(&token)
        .json(&json!({"name": "Dinner 1 - Chickpea Stew", "fat": 12}))
        .send(app(&ctx))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(patched["name"], "Dinner 1 - Chickpea Stew");
    assert_eq!(patched["fat"].as_f64(), Some(12.0));

    AxumTestRequest::delete(&format!("/api/recipes/{recipe_id}"))
        .bearer(&token)
        .send(app(&ctx))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    AxumTestRequest::get(&format!("/api/recipes/{recipe_id}"))
        .bearer(&token)
        .send(app(&ctx))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_other_users_plan_is_forbidden_over_http() {
    let ctx = TestContext::new();
    let (owner, _) = ctx.onboarded_user("owner@example.com", 100).await;
    let (_, intruder_token) = ctx.onboarded_user("intruder@example.com", 100).await;
    let plan = ctx
        .resources
        .meal_plans
        .create_meal_plan(&owner, "Week 1", None)
        .await
        .unwrap();

    let error: Value = AxumTestRequest::get(&format!("/api/meal-plans/{}/shopping-list", plan.id))
        .bearer(&intruder_token)
        .send(app(&ctx))
        .await
        .assert_status(StatusCode::FORBIDDEN)
        .json();
    assert_eq!(error["error"]["code"], "PERMISSION_DENIED");
}
