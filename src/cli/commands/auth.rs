use clap::Subcommand;
use serde_json::{json, Value};

use crate::cli::config;
use crate::cli::utils::{current_base_url, output_success, require_token, unwrap_envelope};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Log in and store the session token")]
    Login {
        #[arg(help = "Username to log in as")]
        username: String,
    },

    #[command(about = "Register a new profile and store the session token")]
    Register {
        #[arg(help = "Username to register")]
        username: String,
        #[arg(long, help = "Display name for the public profile")]
        display_name: Option<String>,
    },

    #[command(about = "Show the profile behind the stored token")]
    Whoami,

    #[command(about = "Discard the stored session token")]
    Logout,
}

pub async fn handle(cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Login { username } => {
            let base_url = current_base_url()?;
            let client = reqwest::Client::new();

            let body = client
                .post(format!("{}/auth/login", base_url))
                .json(&json!({ "username": username }))
                .send()
                .await?
                .json::<Value>()
                .await?;
            let data = unwrap_envelope(body)?;

            store_session(&data, &username)?;
            output_success(
                &output_format,
                &format!("Logged in as '{}'", username),
                Some(json!({ "username": username })),
            )
        }

        AuthCommands::Register { username, display_name } => {
            let base_url = current_base_url()?;
            let client = reqwest::Client::new();

            let mut payload = json!({ "username": username });
            if let Some(display_name) = display_name {
                payload["displayName"] = json!(display_name);
            }

            let body = client
                .post(format!("{}/auth/register", base_url))
                .json(&payload)
                .send()
                .await?
                .json::<Value>()
                .await?;
            let data = unwrap_envelope(body)?;

            store_session(&data, &username)?;
            output_success(
                &output_format,
                &format!("Registered '{}'", username),
                Some(json!({ "username": username })),
            )
        }

        AuthCommands::Whoami => {
            let base_url = current_base_url()?;
            let token = require_token()?;
            let client = reqwest::Client::new();

            let body = client
                .get(format!("{}/api/auth/whoami", base_url))
                .bearer_auth(token)
                .send()
                .await?
                .json::<Value>()
                .await?;
            let data = unwrap_envelope(body)?;

            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(())
        }

        AuthCommands::Logout => {
            let mut env = config::load_environment_config()?;
            env.token = None;
            env.username = None;
            config::save_environment_config(&env)?;

            output_success(&output_format, "Logged out", None)
        }
    }
}

fn store_session(data: &Value, username: &str) -> anyhow::Result<()> {
    let token = data
        .get("token")
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow::anyhow!("Response carried no token"))?;

    let mut env = config::load_environment_config()?;
    env.token = Some(token.to_string());
    env.username = Some(username.to_string());
    config::save_environment_config(&env)?;
    Ok(())
}
