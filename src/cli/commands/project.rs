use clap::{Subcommand, ValueEnum};
use serde_json::Value;

use crate::cli::utils::{current_base_url, output_success, require_token, unwrap_envelope};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum ProjectCommands {
    #[command(about = "List your projects")]
    List,

    #[command(about = "Show one project with its full child collections")]
    Show {
        #[arg(help = "Project ID")]
        id: String,
    },

    #[command(about = "Export one project to a file or stdout")]
    Export {
        #[arg(help = "Project ID")]
        id: String,
        #[arg(help = "Output file path (stdout if omitted)")]
        output: Option<String>,
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },

    #[command(about = "Delete a project and its child collections")]
    Delete {
        #[arg(help = "Project ID")]
        id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

pub async fn handle(cmd: ProjectCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let base_url = current_base_url()?;
    let token = require_token()?;
    let client = reqwest::Client::new();

    match cmd {
        ProjectCommands::List => {
            let body = client
                .get(format!("{}/api/projects", base_url))
                .bearer_auth(&token)
                .send()
                .await?
                .json::<Value>()
                .await?;
            let data = unwrap_envelope(body)?;

            match output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&data)?),
                OutputFormat::Text => {
                    let projects = data.as_array().cloned().unwrap_or_default();
                    if projects.is_empty() {
                        println!("No projects yet");
                    }
                    for project in projects {
                        println!(
                            "{}  {}  [{}]{}",
                            project.get("id").and_then(Value::as_str).unwrap_or("-"),
                            project.get("title").and_then(Value::as_str).unwrap_or("(untitled)"),
                            project.get("status").and_then(Value::as_str).unwrap_or("draft"),
                            if project.get("isPublic").and_then(Value::as_bool).unwrap_or(false) {
                                " public"
                            } else {
                                ""
                            },
                        );
                    }
                }
            }
            Ok(())
        }

        ProjectCommands::Show { id } => {
            let body = client
                .get(format!("{}/api/projects/{}", base_url, id))
                .bearer_auth(&token)
                .send()
                .await?
                .json::<Value>()
                .await?;
            let data = unwrap_envelope(body)?;

            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(())
        }

        ProjectCommands::Export { id, output, format } => {
            let body = client
                .get(format!("{}/api/projects/{}", base_url, id))
                .bearer_auth(&token)
                .send()
                .await?
                .json::<Value>()
                .await?;
            let data = unwrap_envelope(body)?;

            let rendered = match format {
                ExportFormat::Json => serde_json::to_string_pretty(&data)?,
                ExportFormat::Yaml => serde_yaml::to_string(&data)?,
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    output_success(
                        &output_format,
                        &format!("Exported project {} to {}", id, path),
                        None,
                    )
                }
                None => {
                    println!("{}", rendered);
                    Ok(())
                }
            }
        }

        ProjectCommands::Delete { id } => {
            let body = client
                .delete(format!("{}/api/projects/{}", base_url, id))
                .bearer_auth(&token)
                .send()
                .await?
                .json::<Value>()
                .await?;
            unwrap_envelope(body)?;

            output_success(&output_format, &format!("Deleted project {}", id), None)
        }
    }
}
