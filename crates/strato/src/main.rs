// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Strato - plugin-driven cloud resource manager.
//!
//! This binary bootstraps the plugin registry and exposes inspection
//! commands. The HTTP layer and the real cloud API transport live outside
//! this workspace.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use strato_bus::EventBus;
use strato_plugin::{bootstrap, PluginRegistry};

/// Strato - plugin-driven cloud resource manager.
#[derive(Parser, Debug)]
#[command(name = "strato", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List registered plugins as JSON summaries.
    Plugins,
    /// Print the full UI descriptor for one resource type.
    Describe {
        /// Resource type key, e.g. "worker-script".
        resource_type: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match strato_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            strato_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log.level.clone())),
        )
        .init();

    let bus = EventBus::new();
    let mut registry = PluginRegistry::new();
    if let Err(error) = bootstrap(&mut registry, &bus) {
        eprintln!("strato: bootstrap failed: {error}");
        std::process::exit(1);
    }
    info!(subdomain = config.account.subdomain, "registry ready");

    match cli.command {
        Some(Commands::Plugins) => {
            let summaries = registry.plugin_list();
            match serde_json::to_string_pretty(&summaries) {
                Ok(json) => println!("{json}"),
                Err(error) => {
                    eprintln!("strato: failed to render plugin list: {error}");
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Describe { resource_type }) => {
            match registry.describe(&resource_type) {
                Some(descriptor) => match serde_json::to_string_pretty(&descriptor) {
                    Ok(json) => println!("{json}"),
                    Err(error) => {
                        eprintln!("strato: failed to render descriptor: {error}");
                        std::process::exit(1);
                    }
                },
                None => {
                    eprintln!("strato: unknown resource type: {resource_type}");
                    std::process::exit(1);
                }
            }
        }
        None => {
            println!("strato: use --help for available commands");
        }
    }
}
