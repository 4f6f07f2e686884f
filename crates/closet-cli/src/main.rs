//! `closet`: command-line client for the Closet server.
//!
//! # Usage
//!
//! ```text
//! closet --owner 6f1c… ask "jantar no restaurante, está frio"
//! closet --config ~/.config/closet/config.toml items
//! closet add --name "Camisa branca" --category shirt --color white --formality casual smart_casual
//! ```

mod client;
mod render;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use client::{ApiClient, ApiConfig};
use closet_core::item::{Cleanliness, Formality, FormalityFit, GarmentCategory, NewItem};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "closet", about = "Command-line client for the Closet wardrobe assistant")]
struct Args {
  /// Path to a TOML config file (url, owner).
  #[arg(short, long, value_name = "FILE")]
  config: Option<std::path::PathBuf>,

  /// Base URL of the closet server (default: http://localhost:5240).
  #[arg(long, env = "CLOSET_URL")]
  url: Option<String>,

  /// Owner whose wardrobe and conversation to use.
  #[arg(long, env = "CLOSET_OWNER")]
  owner: Option<Uuid>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Describe an occasion and get an outfit.
  Ask {
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,
  },
  /// Show the conversation history.
  History,
  /// List wardrobe items.
  Items,
  /// Add an item to the wardrobe.
  Add {
    #[arg(long)]
    name:      String,
    #[arg(long)]
    category:  GarmentCategory,
    #[arg(long)]
    color:     String,
    /// One or more formality levels the item suits.
    #[arg(long, required = true, num_args = 1..)]
    formality: Vec<Formality>,
    /// Reference to an image stored elsewhere.
    #[arg(long)]
    image:     Option<String>,
  },
  /// Mark an item clean.
  Wash { id: Uuid },
  /// Mark an item dirty.
  Wear { id: Uuid },
  /// Remove an item from the wardrobe.
  Remove { id: Uuid },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url:   String,
  #[serde(default)]
  owner: Option<Uuid>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let api_config = ApiConfig {
    base_url: args
      .url
      .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
      .unwrap_or_else(|| "http://localhost:5240".to_string()),
    owner_id: args
      .owner
      .or(file_cfg.owner)
      .ok_or_else(|| anyhow!("no owner given; pass --owner or set CLOSET_OWNER"))?,
  };
  tracing::debug!(?api_config, "resolved configuration");

  let client = ApiClient::new(api_config)?;
  run(&client, args.command).await
}

async fn run(client: &ApiClient, command: Command) -> Result<()> {
  match command {
    Command::Ask { text } => {
      let exchange = client.ask(&text.join(" ")).await?;
      print!("{}", render::message(&exchange.reply));
    }
    Command::History => {
      for msg in client.history().await? {
        print!("{}", render::message(&msg));
      }
    }
    Command::Items => {
      for item in client.items().await? {
        println!("{}", render::item_line(&item));
      }
    }
    Command::Add { name, category, color, formality, image } => {
      let item = NewItem {
        name,
        category,
        color,
        formality: FormalityFit::many(formality)?,
        image_ref: image,
      };
      let added = client.add_item(&item).await?;
      println!("{}", render::item_line(&added));
    }
    Command::Wash { id } => {
      let item = client.set_status(id, Cleanliness::Clean).await?;
      println!("{}", render::item_line(&item));
    }
    Command::Wear { id } => {
      let item = client.set_status(id, Cleanliness::Dirty).await?;
      println!("{}", render::item_line(&item));
    }
    Command::Remove { id } => {
      client.remove_item(id).await?;
      println!("removed {id}");
    }
  }
  Ok(())
}
