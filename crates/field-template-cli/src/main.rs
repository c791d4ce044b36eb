/*
 * main.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! field-template CLI - Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "field-template")]
#[command(version)]
#[command(about = "Render content fields through layered wrapper templates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Field kind as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Plain,
    Group,
    Multigroup,
}

/// Output format of the render command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a field to HTML or a JSON render tree
    Render {
        /// Field key, e.g. `body`
        key: String,

        /// Human-readable field name, used as the default label
        #[arg(long)]
        name: Option<String>,

        /// Field kind
        #[arg(long, value_enum, default_value = "plain")]
        kind: KindArg,

        /// YAML file with the field type's default settings
        #[arg(long, value_name = "FILE")]
        type_defaults: Option<PathBuf>,

        /// YAML file with the field instance's settings
        #[arg(short = 's', long, value_name = "FILE")]
        settings: Option<PathBuf>,

        /// Field content (already rendered markup)
        #[arg(short = 'c', long, conflicts_with = "content_file")]
        content: Option<String>,

        /// Read field content from FILE
        #[arg(long, value_name = "FILE")]
        content_file: Option<PathBuf>,

        /// YAML file with per-slot default classes and attributes
        #[arg(long, value_name = "FILE")]
        slot_defaults: Option<PathBuf>,

        /// Prefix for label position classes
        #[arg(long, default_value = "")]
        label_class_prefix: String,

        /// Output format
        #[arg(short = 't', long, value_enum, default_value = "html")]
        to: OutputFormat,
    },

    /// Print the merged and resolved settings of a field
    Resolve {
        /// Field kind
        #[arg(long, value_enum, default_value = "plain")]
        kind: KindArg,

        /// YAML file with the field type's default settings
        #[arg(long, value_name = "FILE")]
        type_defaults: Option<PathBuf>,

        /// YAML file with the field instance's settings
        #[arg(short = 's', long, value_name = "FILE")]
        settings: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "field_template=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            key,
            name,
            kind,
            type_defaults,
            settings,
            content,
            content_file,
            slot_defaults,
            label_class_prefix,
            to,
        } => commands::render::execute(commands::render::RenderArgs {
            key,
            name,
            kind,
            type_defaults,
            settings,
            content,
            content_file,
            slot_defaults,
            label_class_prefix,
            to,
        }),
        Commands::Resolve {
            kind,
            type_defaults,
            settings,
        } => commands::resolve::execute(commands::resolve::ResolveArgs {
            kind,
            type_defaults,
            settings,
        }),
    }
}
