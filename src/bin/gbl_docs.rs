use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};

use gbl_core::config::CompanyProfile;
use gbl_core::documents::{generate_client_roster, generate_order_slip};
use gbl_core::model::{ClientRecord, OrderRecord};
use gbl_core::webhook;

/// Generates backoffice PDF documents from exported JSON records.
#[derive(Parser)]
#[command(author, version, about = "Gera documentos PDF do backoffice GBL")]
struct Cli {
    /// Directory where generated files are written.
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Company profile JSON overriding the built-in contact block.
    #[arg(long)]
    company: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an order slip from a single order record.
    Pedido {
        /// JSON file with one order record.
        input: PathBuf,

        /// Also notify the automation webhook, as done on order creation.
        #[arg(long)]
        notify: bool,

        /// Webhook endpoint used with --notify.
        #[arg(long, default_value = webhook::DEFAULT_ORDER_WEBHOOK_URL)]
        webhook_url: String,
    },

    /// Render the client roster report from a JSON array of client records.
    Clientes {
        /// JSON file with an array of client records.
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let company = load_company(cli.company.as_deref())?;

    match cli.command {
        Commands::Pedido {
            input,
            notify,
            webhook_url,
        } => {
            let order: OrderRecord = read_json(&input)?;
            let document = generate_order_slip(&order, &company)
                .with_context(|| format!("generating slip for order {}", order.number))?;
            let path = document.write_to_dir(&cli.output)?;
            println!("Gerado: {}", path.display());

            if notify {
                webhook::notify_order_created(&webhook_url, &order);
            }
        }
        Commands::Clientes { input } => {
            let clients: Vec<ClientRecord> = read_json(&input)?;
            let generated_on = Local::now().date_naive();
            let document = generate_client_roster(&clients, &company, generated_on)
                .context("generating client roster")?;
            let path = document.write_to_dir(&cli.output)?;
            println!("Gerado: {} ({} clientes)", path.display(), clients.len());
        }
    }

    Ok(())
}

fn load_company(path: Option<&std::path::Path>) -> Result<CompanyProfile> {
    match path {
        Some(path) => read_json(path),
        None => Ok(CompanyProfile::default()),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}
