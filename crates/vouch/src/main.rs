// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vouch - a plugin toolkit for client testimonials.
//!
//! This is the host-shell binary: it loads configuration, registers the
//! testimonials plugin, and previews rendered output from sample data.

mod preview;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vouch_config::VouchConfig;
use vouch_core::hooks::PluginRegistry;
use vouch_testimonials::TestimonialsPlugin;

/// Vouch - a plugin toolkit for client testimonials.
#[derive(Parser, Debug)]
#[command(name = "vouch", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the testimonials carousel from sample data.
    Preview {
        /// Maximum testimonials to show; -1 for all.
        #[arg(long)]
        count: Option<i64>,
        /// Sort key: date, title, rand, menu_order, modified.
        #[arg(long)]
        orderby: Option<String>,
        /// Sort direction: asc or desc.
        #[arg(long)]
        order: Option<String>,
    },
    /// Print the effective configuration.
    Config,
    /// List registered plugins with their status and description.
    Plugins,
}

fn main() {
    let cli = Cli::parse();

    let config = match vouch_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            vouch_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log.level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(level = %config.log.level, "configuration loaded");

    match cli.command {
        Some(Commands::Preview {
            count,
            orderby,
            order,
        }) => {
            let shortcode = shortcode_text(count, orderby.as_deref(), order.as_deref());
            println!("{}", preview::render(&config, &shortcode));
        }
        Some(Commands::Config) => match toml::to_string_pretty(&config) {
            Ok(rendered) => print!("{rendered}"),
            Err(err) => {
                eprintln!("vouch: failed to serialize config: {err}");
                std::process::exit(1);
            }
        },
        Some(Commands::Plugins) => {
            for line in plugin_lines(&build_registry(&config)) {
                println!("{line}");
            }
        }
        None => {
            println!("vouch: use --help for available commands");
        }
    }
}

/// Assemble the plugin registry this host shell ships with.
fn build_registry(config: &VouchConfig) -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    registry.register(Box::new(TestimonialsPlugin::new(config.display.clone())));
    registry
}

/// One listing line per plugin: name, status, description.
fn plugin_lines(registry: &PluginRegistry) -> Vec<String> {
    registry
        .list_all()
        .iter()
        .map(|entry| {
            format!(
                "{} [{}] {}",
                entry.plugin.name(),
                entry.status,
                entry.plugin.description()
            )
        })
        .collect()
}

/// Assemble the shortcode occurrence the preview expands.
fn shortcode_text(count: Option<i64>, orderby: Option<&str>, order: Option<&str>) -> String {
    let mut text = String::from("[testimonials");
    if let Some(count) = count {
        text.push_str(&format!(" count=\"{count}\""));
    }
    if let Some(orderby) = orderby {
        text.push_str(&format!(" orderby=\"{orderby}\""));
    }
    if let Some(order) = order {
        text.push_str(&format!(" order=\"{order}\""));
    }
    text.push(']');
    text
}
