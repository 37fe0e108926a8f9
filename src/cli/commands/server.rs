use clap::Subcommand;
use serde_json::json;

use crate::cli::config::{self, ServerInfo, ServerStatus};
use crate::cli::utils::{output_success, resolve_server, unwrap_envelope};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum ServerCommands {
    #[command(about = "Register remote server")]
    Add {
        #[arg(help = "Server URL, e.g. http://localhost:3000")]
        url: String,
        #[arg(help = "Server name (defaults to the hostname)")]
        name: Option<String>,
    },

    #[command(about = "List all servers with their last known status")]
    List,

    #[command(about = "Show currently selected server")]
    Current,

    #[command(about = "Switch to server (persistent selection)")]
    Use {
        #[arg(help = "Server name to switch to")]
        name: String,
    },

    #[command(about = "Remove server from registry")]
    Delete {
        #[arg(help = "Server name to delete")]
        name: String,
    },

    #[command(about = "Health check a server (defaults to current server)")]
    Ping {
        #[arg(help = "Server name to ping")]
        name: Option<String>,
    },

    #[command(about = "Show server information from the API root endpoint")]
    Info {
        #[arg(help = "Server name")]
        name: Option<String>,
    },
}

pub async fn handle(cmd: ServerCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ServerCommands::Add { url, name } => {
            let parsed = url::Url::parse(&url)
                .map_err(|_| anyhow::anyhow!("Invalid server URL: {}", url))?;
            let hostname = parsed
                .host_str()
                .ok_or_else(|| anyhow::anyhow!("Server URL has no hostname: {}", url))?
                .to_string();
            let port = parsed
                .port_or_known_default()
                .ok_or_else(|| anyhow::anyhow!("Cannot determine port for: {}", url))?;
            let name = name.unwrap_or_else(|| hostname.clone());

            let mut servers = config::load_server_config()?;
            if servers.servers.contains_key(&name) {
                return Err(anyhow::anyhow!("Server '{}' already registered", name));
            }
            let info = ServerInfo::new(hostname, port, parsed.scheme().to_string(), String::new());
            servers.servers.insert(name.clone(), info.clone());
            config::save_server_config(&servers)?;

            // First registered server becomes the current one
            let mut env = config::load_environment_config()?;
            if env.current_server.is_none() {
                env.current_server = Some(name.clone());
                config::save_environment_config(&env)?;
            }

            output_success(
                &output_format,
                &format!("Registered server '{}' at {}", name, info.url()),
                Some(json!({ "server": name, "url": info.url() })),
            )
        }

        ServerCommands::List => {
            let servers = config::load_server_config()?;
            let current = config::load_environment_config()?.current_server;

            match output_format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&servers)?);
                }
                OutputFormat::Text => {
                    if servers.servers.is_empty() {
                        println!("No servers registered");
                    }
                    for (name, info) in &servers.servers {
                        let marker = if current.as_deref() == Some(name) { "*" } else { " " };
                        println!("{} {} {} ({:?})", marker, name, info.url(), info.status);
                    }
                }
            }
            Ok(())
        }

        ServerCommands::Current => {
            let (name, info) = resolve_server(None)?;
            output_success(
                &output_format,
                &format!("Current server: {} ({})", name, info.url()),
                Some(json!({ "server": name, "url": info.url() })),
            )
        }

        ServerCommands::Use { name } => {
            let servers = config::load_server_config()?;
            if !servers.servers.contains_key(&name) {
                return Err(anyhow::anyhow!("Server '{}' not found", name));
            }

            let mut env = config::load_environment_config()?;
            env.current_server = Some(name.clone());
            config::save_environment_config(&env)?;

            output_success(
                &output_format,
                &format!("Switched to server '{}'", name),
                Some(json!({ "current_server": name })),
            )
        }

        ServerCommands::Delete { name } => {
            let mut servers = config::load_server_config()?;
            if servers.servers.remove(&name).is_none() {
                return Err(anyhow::anyhow!("Server '{}' not found", name));
            }
            config::save_server_config(&servers)?;

            let mut env = config::load_environment_config()?;
            if env.current_server.as_deref() == Some(&name) {
                env.current_server = None;
                config::save_environment_config(&env)?;
            }

            output_success(&output_format, &format!("Server '{}' deleted", name), None)
        }

        ServerCommands::Ping { name } => {
            let (name, mut info) = resolve_server(name)?;
            let status = config::ping_server(&info).await;
            info.update_ping(status.clone());

            let mut servers = config::load_server_config()?;
            servers.servers.insert(name.clone(), info.clone());
            config::save_server_config(&servers)?;

            match status {
                ServerStatus::Up => output_success(
                    &output_format,
                    &format!("{} is up ({})", name, info.url()),
                    Some(json!({ "server": name, "status": "up" })),
                ),
                _ => Err(anyhow::anyhow!("{} is down ({})", name, info.url())),
            }
        }

        ServerCommands::Info { name } => {
            let (_, info) = resolve_server(name)?;
            let body = reqwest::get(info.url()).await?.json::<serde_json::Value>().await?;
            let data = unwrap_envelope(body)?;
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(())
        }
    }
}
