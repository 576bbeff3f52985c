//! Kardex backoffice CLI - companies, products, multi-currency inventory.
//!
//! ## Example Usage
//!
//! ```bash
//! # Register a company and a product
//! backoffice companies add --nit 900123456-7 --name "Acme Ltda" \
//!     --address "Calle 1 # 2-3" --phone "+57 300 000 0000"
//! backoffice products register --code SKU-001 --name "Producto X" \
//!     --features "Detalle y especificaciones" --base-price 100 \
//!     --base-currency USD --company 900123456-7
//!
//! # Inventory report, dispatch, and proof challenge
//! backoffice inventory report --company 900123456-7
//! backoffice inventory send --to destinatario@correo.com \
//!     --method rest --attachment inventario.pdf
//! backoffice inventory proof
//!
//! # Show the active exchange-rate table
//! backoffice rates
//! ```

mod config;
mod error;
mod ops;
mod state;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::{AppError, ErrorCode};
use crate::ops::company::{refresh_companies, register_company, RegisterCompanyInput};
use crate::ops::inventory::{build_report, dispatch_report, InventoryReport};
use crate::ops::product::{refresh_products, register_product, RegisterProductInput};
use crate::ops::proof::challenge_for;
use crate::state::{CompanyStore, ProductStore};
use kardex_client::{ApiClient, RatesProvider, SendMethod};
use kardex_core::{CompanyScope, Currency};

/// Kardex backoffice: companies, products, multi-currency inventory.
#[derive(Parser)]
#[command(name = "backoffice")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Kardex backoffice CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Company management
    Companies {
        #[command(subcommand)]
        action: CompanyAction,
    },

    /// Product management
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },

    /// Inventory reports, dispatch, and proof of existence
    Inventory {
        #[command(subcommand)]
        action: InventoryAction,
    },

    /// Show the active exchange-rate table
    Rates,
}

#[derive(Subcommand)]
enum CompanyAction {
    /// List registered companies
    List,

    /// Register a new company
    Add {
        /// Tax registration number
        #[arg(long)]
        nit: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Street address
        #[arg(long)]
        address: String,

        /// Contact phone
        #[arg(long)]
        phone: String,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List registered products
    List,

    /// Register a product with a multi-currency price quote
    Register {
        /// Product code (SKU-like)
        #[arg(long)]
        code: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Features / specification text
        #[arg(long)]
        features: String,

        /// Base price in the base currency
        #[arg(long)]
        base_price: f64,

        /// Base currency code
        #[arg(long, default_value = "USD")]
        base_currency: String,

        /// NIT of the owning company
        #[arg(long)]
        company: String,
    },
}

#[derive(Subcommand)]
enum InventoryAction {
    /// Print the scoped inventory report with its fingerprint
    Report {
        /// Scope to one company NIT (defaults to all companies)
        #[arg(long)]
        company: Option<String>,

        /// Emit the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Dispatch an externally rendered report PDF by email
    Send {
        /// Recipient email address
        #[arg(long)]
        to: String,

        /// Downstream transport for the send endpoint
        #[arg(long, value_enum, default_value = "rest")]
        method: MethodArg,

        /// Path to the rendered PDF
        #[arg(long)]
        attachment: PathBuf,
    },

    /// Print the wallet signing challenge for the scoped inventory
    Proof {
        /// Scope to one company NIT (defaults to all companies)
        #[arg(long)]
        company: Option<String>,
    },
}

/// CLI spelling of the dispatch method selector.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodArg {
    Rest,
    Soap,
}

impl From<MethodArg> for SendMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Rest => SendMethod::Rest,
            MethodArg::Soap => SendMethod::Soap,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real deployments set the environment directly
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load()?;
    info!(api_url = %config.api_url, "configuration loaded");

    let client = config.api_client()?;
    let rates = RatesProvider::new(client.clone(), config.rates_ttl_secs);
    let companies = CompanyStore::new();
    let products = ProductStore::new();

    if let Err(e) = run(cli.command, &client, &rates, &companies, &products).await {
        eprintln!("{e}");
        process::exit(1);
    }

    Ok(())
}

async fn run(
    command: Commands,
    client: &ApiClient,
    rates: &RatesProvider,
    companies: &CompanyStore,
    products: &ProductStore,
) -> Result<(), AppError> {
    match command {
        Commands::Companies { action } => match action {
            CompanyAction::List => {
                refresh_companies(client, companies).await?;
                if companies.is_empty() {
                    println!("No companies registered yet.");
                    return Ok(());
                }
                companies.with_companies(|cs| {
                    println!("{:<22} {:<30} {:<30} PHONE", "NIT", "NAME", "ADDRESS");
                    for c in cs {
                        println!("{:<22} {:<30} {:<30} {}", c.nit, c.name, c.address, c.phone);
                    }
                });
            }
            CompanyAction::Add {
                nit,
                name,
                address,
                phone,
            } => {
                let created = register_company(
                    client,
                    companies,
                    RegisterCompanyInput {
                        nit,
                        name,
                        address,
                        phone,
                    },
                )
                .await?;
                println!("Registered company {} ({})", created.name, created.nit);
            }
        },

        Commands::Products { action } => match action {
            ProductAction::List => {
                refresh_products(client, products).await?;
                if products.is_empty() {
                    println!("No products registered yet.");
                    return Ok(());
                }
                products.with_products(|ps| {
                    println!(
                        "{:<12} {:<30} {:>14} {:>12} {:>12}  COMPANY",
                        "CODE", "NAME", "COP", "USD", "EUR"
                    );
                    for p in ps {
                        println!(
                            "{:<12} {:<30} {:>14.2} {:>12.2} {:>12.2}  {}",
                            p.code, p.name, p.price_cop, p.price_usd, p.price_eur, p.company_nit
                        );
                    }
                });
            }
            ProductAction::Register {
                code,
                name,
                features,
                base_price,
                base_currency,
                company,
            } => {
                let registered = register_product(
                    client,
                    rates,
                    products,
                    RegisterProductInput {
                        code,
                        name,
                        features,
                        base_price,
                        base_currency,
                        company_nit: company,
                    },
                )
                .await?;

                println!("Registered product {}", registered.product.code);
                println!("Price quote:");
                for (currency, amount) in &registered.quote {
                    println!("  {:<4} {:>16.2}", currency.code(), amount);
                }
            }
        },

        Commands::Inventory { action } => match action {
            InventoryAction::Report { company, json } => {
                refresh_companies(client, companies).await?;
                let scope = scope_from(company);
                let report = build_report(client, companies, scope).await?;
                if json {
                    let rendered = serde_json::to_string_pretty(&report)
                        .map_err(|e| AppError::new(ErrorCode::Internal, e.to_string()))?;
                    println!("{rendered}");
                } else {
                    print_report(&report);
                }
            }
            InventoryAction::Send {
                to,
                method,
                attachment,
            } => {
                let pdf_bytes = std::fs::read(&attachment).map_err(|e| {
                    AppError::validation(format!(
                        "could not read attachment {}: {e}",
                        attachment.display()
                    ))
                })?;
                dispatch_report(client, &to, method.into(), &pdf_bytes).await?;
                println!("Report dispatched to {to}");
            }
            InventoryAction::Proof { company } => {
                refresh_companies(client, companies).await?;
                let scope = scope_from(company);
                let report = build_report(client, companies, scope).await?;
                let challenge = challenge_for(&report);

                println!("Fingerprint: {}", challenge.fingerprint);
                println!("Message to sign: {}", challenge.message);
                println!("Sign this message with your wallet (EIP-191 personal_sign).");
            }
        },

        Commands::Rates => {
            let table = rates.current().await;
            println!("Reference currency: {}", table.reference);
            println!("Fetched at:         {}", table.fetched_at);
            for currency in Currency::ALL {
                match table.usable_rate(currency.code()) {
                    Some(rate) => println!("  {:<4} {rate}", currency.code()),
                    None => println!("  {:<4} (no rate)", currency.code()),
                }
            }
        }
    }

    Ok(())
}

fn scope_from(company: Option<String>) -> CompanyScope {
    match company {
        Some(raw) => CompanyScope::parse(&raw),
        None => CompanyScope::All,
    }
}

fn print_report(report: &InventoryReport) {
    println!("{}", report.title);
    println!("Empresa: {}", report.company_label);
    println!("{}", report.hash_line);
    println!("QR payload: {}", report.qr_payload);
    println!();

    if report.rows.is_empty() {
        println!("No hay productos en este inventario.");
        return;
    }

    println!(
        "{:<12} {:<26} {:>14} {:>12} {:>12} {:<22} {:>6}",
        "CODE", "NAME", "COP", "USD", "EUR", "COMPANY", "QTY"
    );
    for row in &report.rows {
        println!(
            "{:<12} {:<26} {:>14.2} {:>12.2} {:>12.2} {:<22} {:>6}",
            row.product_code,
            row.product_name,
            row.price_cop,
            row.price_usd,
            row.price_eur,
            row.company_name,
            row.quantity
        );
    }
}
