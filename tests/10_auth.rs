mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn register_login_whoami_round_trip() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let (username, token) = common::register_user(&server.base_url, "auth").await?;

    // the registered token works on the protected surface
    let res = client
        .get(format!("{}/api/auth/whoami", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["username"], json!(username));

    // logging in again issues a fresh token for the same profile
    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "username": username }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert!(body["data"]["token"].is_string());
    assert_eq!(body["data"]["profile"]["username"], json!(username));

    Ok(())
}

#[tokio::test]
async fn protected_routes_reject_anonymous_callers() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/projects", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = res.json::<Value>().await?;
    assert_eq!(body["code"], json!("UNAUTHORIZED"));

    Ok(())
}

#[tokio::test]
async fn login_with_unknown_username_fails_closed() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "username": common::unique_username("ghost") }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn duplicate_username_registration_conflicts() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let (username, _) = common::register_user(&server.base_url, "dup").await?;

    let res = client
        .post(format!("{}/auth/register", server.base_url))
        .json(&json!({ "username": username }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::CONFLICT);
    Ok(())
}
