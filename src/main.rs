//! mcp-forge CLI entrypoint
//! Parses command-line arguments and dispatches to the generator.
#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use mcp_forge::infrastructure::export_templates;
use mcp_forge::model::ServerConfig;
use mcp_forge::{GeneratorService, Settings, api};

#[derive(Parser)]
#[command(name = "mcp-forge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (TOML)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Directory of *.tera files replacing the embedded templates
    #[arg(long, global = true)]
    template_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to bind to
        #[arg(long)]
        bind: Option<String>,
        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
    },
    /// Generate a server project into the storage directory
    Generate {
        /// Server configuration (JSON, or YAML for .yaml/.yml)
        config: PathBuf,
        /// Storage directory for generated projects
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Print the generated entry point
    Preview {
        /// Server configuration (JSON, or YAML for .yaml/.yml)
        config: PathBuf,
    },
    /// Write the generated project as a zip archive
    Package {
        /// Server configuration (JSON, or YAML for .yaml/.yml)
        config: PathBuf,
        /// Archive path [default: <serverName>.zip]
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Manage scaffold templates
    Templates {
        #[command(subcommand)]
        action: TemplateCommands,
    },
}

#[derive(clap::Subcommand, Debug)]
enum TemplateCommands {
    /// Write the embedded templates to a directory for customisation
    Export {
        /// Target directory
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = Settings::load(cli.settings.as_deref())?;
    if let Some(dir) = cli.template_dir {
        settings.template_dir = Some(dir);
    }
    debug!(?settings, "Resolved settings");

    match cli.command {
        Commands::Serve { bind, port } => {
            if let Some(bind) = bind {
                settings.server.bind = bind;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }
            let generator = GeneratorService::from_settings(&settings)?;
            info!(storage = %settings.storage_dir.display(), "Starting mcp-forge HTTP API");
            api::serve(generator, &settings.server).await?;
        }
        Commands::Generate { config, output_dir } => {
            if let Some(dir) = output_dir {
                settings.storage_dir = dir;
            }
            let config = load_server_config(&config)?;
            let generator = GeneratorService::from_settings(&settings)?;
            let response = generator.generate(&config).await?;
            println!("{}", response.location.display());
        }
        Commands::Preview { config } => {
            let config = load_server_config(&config)?;
            let generator = GeneratorService::from_settings(&settings)?;
            let response = generator.preview(&config).await?;
            print!("{}", response.text);
        }
        Commands::Package { config, output } => {
            let config = load_server_config(&config)?;
            let generator = GeneratorService::from_settings(&settings)?;
            let archive = generator.download_archive(&config).await?;
            let output = output.unwrap_or_else(|| PathBuf::from(&archive.filename));
            tokio::fs::write(&output, &archive.bytes)
                .await
                .with_context(|| format!("Failed to write archive {}", output.display()))?;
            println!("{}", output.display());
        }
        Commands::Templates {
            action: TemplateCommands::Export { dir },
        } => {
            let written = export_templates(&dir)
                .with_context(|| format!("Failed to export templates to {}", dir.display()))?;
            for path in written {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}

/// Read a server configuration, choosing the format by extension
fn load_server_config(path: &Path) -> anyhow::Result<ServerConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read server configuration {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let config = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML server configuration {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON server configuration {}", path.display()))?
    };
    Ok(config)
}
