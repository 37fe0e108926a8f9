mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn visitor_profile_lists_only_public_projects() -> Result<()> {
    let server = common::ensure_server().await?;
    let (username, token) = common::register_user(&server.base_url, "alice").await?;
    let client = reqwest::Client::new();

    // one public project, one private; the private one is even published
    for payload in [
        json!({ "title": "Public Work", "status": "published", "isPublic": true }),
        json!({ "title": "Private Work", "status": "published", "isPublic": false }),
    ] {
        let res = client
            .post(format!("{}/api/projects", server.base_url))
            .bearer_auth(&token)
            .json(&payload)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = client
        .get(format!("{}/{}", server.base_url, username))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["profile"]["username"], json!(username));

    let projects = body["data"]["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["title"], json!("Public Work"));
    assert_eq!(projects[0]["isPublic"], json!(true));

    Ok(())
}

#[tokio::test]
async fn unknown_username_yields_a_plain_not_found() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/{}", server.base_url, common::unique_username("nobody")))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], json!("no such user"));

    Ok(())
}

#[tokio::test]
async fn case_study_detail_renders_through_the_selected_theme() -> Result<()> {
    let server = common::ensure_server().await?;
    let (_, token) = common::register_user(&server.base_url, "viewer").await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/projects", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "title": "Showcase",
            "theme": "bold",
            "overview": "What this was about",
            "isPublic": true
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let id = res.json::<Value>().await?["data"]["id"].as_str().unwrap().to_string();

    // anonymous visitor fetch, no auth header
    let body = client
        .get(format!("{}/projects/{}", server.base_url, id))
        .send()
        .await?
        .json::<Value>()
        .await?;

    assert_eq!(body["data"]["presentation"]["theme"], json!("bold"));
    let kinds: Vec<&str> = body["data"]["presentation"]["sections"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["kind"].as_str())
        .collect();
    assert_eq!(kinds, ["header", "overview"]);

    // theme switch is a pure re-render via query override
    let body = client
        .get(format!("{}/projects/{}?theme=elegant", server.base_url, id))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(body["data"]["presentation"]["theme"], json!("elegant"));

    Ok(())
}

#[tokio::test]
async fn preview_renders_an_unsaved_draft() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/projects/preview", server.base_url))
        .json(&json!({
            "project": { "title": "Unsaved Draft", "outcome": "it worked" },
            "theme": "gradient"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["theme"], json!("gradient"));
    let kinds: Vec<&str> = body["data"]["sections"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["kind"].as_str())
        .collect();
    assert_eq!(kinds, ["header", "outcome"]);

    Ok(())
}
