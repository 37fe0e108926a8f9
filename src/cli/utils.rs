use serde_json::{json, Value};

use crate::cli::config::{self, ServerInfo};
use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(Value::Object(map)) = data {
                response.as_object_mut().unwrap().extend(map);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(
    output_format: &OutputFormat,
    message: &str,
    error_code: Option<&str>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": false,
                "error": message
            });

            if let Some(code) = error_code {
                response["error_code"] = json!(code);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
    }
    Ok(())
}

/// Resolve the target server: an explicit name, or the current selection.
pub fn resolve_server(name: Option<String>) -> anyhow::Result<(String, ServerInfo)> {
    let servers = config::load_server_config()?;

    let name = match name {
        Some(name) => name,
        None => config::load_environment_config()?
            .current_server
            .ok_or_else(|| anyhow::anyhow!("No current server set; run 'shelf server use <name>'"))?,
    };

    let info = servers
        .servers
        .get(&name)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Server '{}' not found", name))?;

    Ok((name, info))
}

/// The current server's base URL.
pub fn current_base_url() -> anyhow::Result<String> {
    let (_, info) = resolve_server(None)?;
    Ok(info.url())
}

/// The stored session token, required for protected API calls.
pub fn require_token() -> anyhow::Result<String> {
    config::load_environment_config()?
        .token
        .ok_or_else(|| anyhow::anyhow!("Not logged in; run 'shelf auth login <username>'"))
}

/// Unwrap the API's `{"success": true, "data": …}` envelope.
pub fn unwrap_envelope(body: Value) -> anyhow::Result<Value> {
    if body.get("success").and_then(Value::as_bool).unwrap_or(false) {
        Ok(body.get("data").cloned().unwrap_or(Value::Null))
    } else {
        let message = body
            .get("message")
            .or_else(|| body.get("error"))
            .and_then(Value::as_str)
            .unwrap_or("request failed");
        Err(anyhow::anyhow!("{}", message))
    }
}
