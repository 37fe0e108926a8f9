mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn tracking_always_accepts() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // no project id, minimal payload
    let res = client
        .post(format!("{}/track", server.base_url))
        .json(&json!({ "pagePath": "/" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::ACCEPTED);

    // nonexistent project id must not surface an error either
    let res = client
        .post(format!("{}/track", server.base_url))
        .header("user-agent", "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0)")
        .json(&json!({
            "projectId": "00000000-0000-0000-0000-000000000000",
            "pagePath": "/projects/00000000-0000-0000-0000-000000000000"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::ACCEPTED);

    Ok(())
}

#[tokio::test]
async fn analytics_summary_reports_per_project_counts() -> Result<()> {
    let server = common::ensure_server().await?;
    let (_, token) = common::register_user(&server.base_url, "stats").await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/projects", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "title": "Tracked", "isPublic": true }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let id = res.json::<Value>().await?["data"]["id"].as_str().unwrap().to_string();

    // visiting the public detail page records a view (fire-and-forget, so
    // give the spawned write a moment to land)
    let res = client
        .get(format!("{}/projects/{}", server.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;

    let body = client
        .get(format!("{}/api/analytics/summary", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?
        .json::<Value>()
        .await?;

    let summary = &body["data"];
    assert!(summary["totalViews"].as_i64().unwrap() >= 1);

    let tracked = summary["projects"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["projectId"].as_str() == Some(id.as_str()))
        .expect("created project appears in the summary");
    assert!(tracked["views"].as_i64().unwrap() >= 1);

    Ok(())
}
