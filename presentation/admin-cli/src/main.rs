use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;

use business::domain::admin::gate::AdminSession;

mod commands {
    pub mod admin;
    pub mod contact;
    pub mod gallery;
    pub mod order;
    pub mod shell;
}
mod config {
    pub mod admin_config;
    pub mod app_config;
    pub mod backend_config;
    pub mod contact_config;
    pub mod database_config;
    pub mod local_config;
    pub mod store_config;
    pub mod supabase_config;
}
mod setup {
    pub mod dependency_injection;
}
mod ui {
    pub mod contact_link;
    pub mod delete_confirmation;
    pub mod gallery;
    pub mod mime;
}

use commands::admin::ProductEdit;
use config::{admin_config::admin_gate_from_env, app_config::AppConfig};
use setup::dependency_injection::DependencyContainer;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Browse and manage the handmade goods catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products, newest first
    Gallery {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a WhatsApp link to order a product
    Order {
        id: String,
    },
    /// Print the shop's WhatsApp contact link
    Contact {
        /// Ask about a custom order instead of a general enquiry
        #[arg(long)]
        custom_order: bool,
    },
    /// Manage the catalog
    Admin {
        #[arg(long)]
        password: String,
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Args)]
struct ImageArgs {
    /// Absolute URL of an already hosted image
    #[arg(long, conflicts_with = "image")]
    image_url: Option<String>,
    /// Local image file to upload first
    #[arg(long)]
    image: Option<PathBuf>,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Add a product
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        price: String,
        #[command(flatten)]
        image: ImageArgs,
    },
    /// Change some fields of a product
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[command(flatten)]
        image: ImageArgs,
    },
    /// Delete a product
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Upload an image and print its public URL
    Upload {
        path: PathBuf,
    },
    /// Interactive admin session
    Shell,
}

/// Storefront entry point.
///
/// - config/: per-concern settings read from the environment
/// - setup/: adapter and use case wiring
/// - commands/: one module per subcommand
/// - ui/: text rendering and presentation state
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only command output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    dotenv().ok();

    let config = AppConfig::from_env()?;

    if let Commands::Contact { custom_order } = cli.command {
        return commands::contact::run(&config.contact, custom_order);
    }

    // Unlock before touching the catalog
    let session = match &cli.command {
        Commands::Admin { password, .. } => {
            let mut session = AdminSession::new(admin_gate_from_env()?);
            session
                .unlock(password)
                .map_err(|_| anyhow::anyhow!("Incorrect password!"))?;
            Some(session)
        }
        _ => None,
    };

    let container = DependencyContainer::new(&config).await?;
    let store = container.store.as_ref();

    match cli.command {
        Commands::Gallery { json } => commands::gallery::run(store, json)?,
        Commands::Order { id } => commands::order::run(store, &config.contact, &id)?,
        Commands::Contact { .. } => {}
        Commands::Admin { action, .. } => match action {
            AdminAction::Add {
                title,
                description,
                price,
                image,
            } => {
                commands::admin::add(store, title, description, price, image.image_url, image.image)
                    .await?
            }
            AdminAction::Update {
                id,
                title,
                description,
                price,
                image,
            } => {
                let edit = ProductEdit {
                    title,
                    description,
                    price,
                    image_url: image.image_url,
                    image: image.image,
                };
                commands::admin::update(store, id, edit).await?
            }
            AdminAction::Delete { id, yes } => commands::admin::delete(store, id, yes).await?,
            AdminAction::Upload { path } => commands::admin::upload(store, path).await?,
            AdminAction::Shell => {
                let session = session.ok_or_else(|| anyhow::anyhow!("admin session missing"))?;
                commands::shell::run(store, session).await?
            }
        },
    }

    Ok(())
}
