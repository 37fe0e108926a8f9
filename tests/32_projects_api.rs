mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

fn redesign_payload() -> Value {
    json!({
        "title": "Redesign",
        "status": "draft",
        "theme": "minimalist",
        "timeline": [
            { "date": "Jan", "title": "Kickoff" },
            { "date": "Feb", "title": "Research" }
        ],
        "media": [
            { "type": "image", "url": "https://example.com/1.png" },
            { "type": "video", "url": "https://example.com/2.mp4", "caption": "demo" }
        ],
        "tools": [ { "name": "Figma" } ]
    })
}

async fn create_project(base_url: &str, token: &str, payload: &Value) -> Result<Value> {
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/projects", base_url))
        .bearer_auth(token)
        .json(payload)
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::CREATED, "create failed: {}", res.status());
    Ok(res.json::<Value>().await?["data"].clone())
}

async fn fetch_project(base_url: &str, token: &str, id: &str) -> Result<reqwest::Response> {
    let client = reqwest::Client::new();
    Ok(client
        .get(format!("{}/api/projects/{}", base_url, id))
        .bearer_auth(token)
        .send()
        .await?)
}

#[tokio::test]
async fn created_children_come_back_in_submitted_order() -> Result<()> {
    let server = common::ensure_server().await?;
    let (_, token) = common::register_user(&server.base_url, "proj").await?;

    let created = create_project(&server.base_url, &token, &redesign_payload()).await?;
    let id = created["id"].as_str().expect("created project has an id").to_string();
    assert_eq!(created["title"], json!("Redesign"));
    // slug is derived from the title at creation
    assert_eq!(created["slug"], json!("redesign"));

    let body = fetch_project(&server.base_url, &token, &id).await?.json::<Value>().await?;
    let project = &body["data"];

    assert_eq!(project["title"], json!("Redesign"));
    let timeline = project["timeline"].as_array().unwrap();
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline[0]["title"], json!("Kickoff"));
    assert_eq!(timeline[0]["displayOrder"], json!(0));
    assert_eq!(timeline[1]["title"], json!("Research"));
    assert_eq!(timeline[1]["displayOrder"], json!(1));

    let media = project["media"].as_array().unwrap();
    assert_eq!(media.len(), 2);
    assert_eq!(media[0]["url"], json!("https://example.com/1.png"));
    assert_eq!(media[1]["type"], json!("video"));

    assert_eq!(project["tools"].as_array().unwrap().len(), 1);

    Ok(())
}

#[tokio::test]
async fn updating_a_collection_replaces_it_completely() -> Result<()> {
    let server = common::ensure_server().await?;
    let (_, token) = common::register_user(&server.base_url, "proj").await?;
    let client = reqwest::Client::new();

    let created = create_project(&server.base_url, &token, &redesign_payload()).await?;
    let id = created["id"].as_str().unwrap().to_string();

    // clear the timeline; media/tools are absent so they stay untouched
    let update = json!({ "title": "Redesign", "timeline": [] });
    let res = client
        .put(format!("{}/api/projects/{}", server.base_url, id))
        .bearer_auth(&token)
        .json(&update)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = fetch_project(&server.base_url, &token, &id).await?.json::<Value>().await?;
    assert_eq!(body["data"]["timeline"].as_array().unwrap().len(), 0);
    assert_eq!(body["data"]["media"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["tools"].as_array().unwrap().len(), 1);

    // idempotence: submitting the same collection twice yields the same read
    let replacement = json!({
        "title": "Redesign",
        "timeline": [ { "date": "Mar", "title": "Ship" } ]
    });
    for _ in 0..2 {
        let res = client
            .put(format!("{}/api/projects/{}", server.base_url, id))
            .bearer_auth(&token)
            .json(&replacement)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::OK);
    }
    let body = fetch_project(&server.base_url, &token, &id).await?.json::<Value>().await?;
    let timeline = body["data"]["timeline"].as_array().unwrap();
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline[0]["title"], json!("Ship"));
    assert_eq!(timeline[0]["displayOrder"], json!(0));

    Ok(())
}

#[tokio::test]
async fn empty_title_is_rejected_with_a_validation_error() -> Result<()> {
    let server = common::ensure_server().await?;
    let (_, token) = common::register_user(&server.base_url, "proj").await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/projects", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "title": "   " }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["code"], json!("VALIDATION_ERROR"));

    Ok(())
}

#[tokio::test]
async fn deleted_projects_disappear_from_list_and_detail() -> Result<()> {
    let server = common::ensure_server().await?;
    let (_, token) = common::register_user(&server.base_url, "proj").await?;
    let client = reqwest::Client::new();

    let created = create_project(&server.base_url, &token, &redesign_payload()).await?;
    let id = created["id"].as_str().unwrap().to_string();

    let res = client
        .delete(format!("{}/api/projects/{}", server.base_url, id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = fetch_project(&server.base_url, &token, &id).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = client
        .get(format!("{}/api/projects", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?
        .json::<Value>()
        .await?;
    let listed_ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["id"].as_str())
        .collect();
    assert!(!listed_ids.contains(&id.as_str()));

    // deleting again is an idempotent success
    let res = client
        .delete(format!("{}/api/projects/{}", server.base_url, id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn list_view_carries_no_child_detail() -> Result<()> {
    let server = common::ensure_server().await?;
    let (_, token) = common::register_user(&server.base_url, "proj").await?;
    let client = reqwest::Client::new();

    create_project(&server.base_url, &token, &redesign_payload()).await?;

    let body = client
        .get(format!("{}/api/projects", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?
        .json::<Value>()
        .await?;

    let projects = body["data"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["timeline"].as_array().unwrap().len(), 0);
    assert_eq!(projects[0]["media"].as_array().unwrap().len(), 0);

    Ok(())
}
