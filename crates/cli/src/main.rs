//! Orderdesk CLI - operator console for the back office.
//!
//! # Usage
//!
//! ```bash
//! # Catalog
//! orderdesk products list
//! orderdesk products receive <product-id> --quantity 15
//! orderdesk products set-counters <product-id> --actual 100 --reserved 20 --shipping 10
//! orderdesk products delete <product-id> --yes
//!
//! # Orders
//! orderdesk orders list
//! orderdesk orders list --archived
//! orderdesk orders set-status --customer <id> --order <id> --status 6 --paid
//! orderdesk orders edit --customer <id> --order <id> --add <product>=2 --remove <product>=1
//! orderdesk orders create --customer <id> --line <product>=3 --address "Pickup point #7"
//!
//! # Customers
//! orderdesk customers list
//! orderdesk customers create --first Anna --family Orlova --phone "+7 900 000-00-00"
//! ```
//!
//! # Environment Variables
//!
//! - `ORDERDESK_API_URL` - Base URL of the system of record
//! - `ORDERDESK_API_TOKEN` - Bearer token for the session

#![cfg_attr(not(test), forbid(unsafe_code))]
// Operator console; stdout is the interface.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use orderdesk_client::{AuthSession, GatewayClient, GatewayConfig};
use orderdesk_core::types::{CustomerId, OrderId, ProductId};

mod commands;

#[derive(Parser)]
#[command(name = "orderdesk")]
#[command(author, version, about = "Orderdesk back-office console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and edit the product catalog
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Inspect and edit orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Inspect and edit customers
    Customers {
        #[command(subcommand)]
        action: CustomerAction,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List the catalog with stock counters and available-for-sale
    List,
    /// Book a stock receipt: add units to the on-hand counter
    Receive {
        /// Product ID
        product_id: ProductId,

        /// Units received (may be negative for a correction)
        #[arg(short, long)]
        quantity: i64,
    },
    /// Replace all three stock counters
    SetCounters {
        /// Product ID
        product_id: ProductId,

        /// On-hand units
        #[arg(long)]
        actual: i64,

        /// Reserved units
        #[arg(long)]
        reserved: i64,

        /// Units allocated for shipping
        #[arg(long)]
        shipping: i64,
    },
    /// Hard-delete a product (irreversible)
    Delete {
        /// Product ID
        product_id: ProductId,

        /// Confirm the irreversible delete
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// List orders, newest first
    List {
        /// Show the archived (shipped) orders instead of the active ones
        #[arg(long)]
        archived: bool,
    },
    /// Set an order's status and paid flag
    SetStatus {
        /// Customer ID
        #[arg(long)]
        customer: CustomerId,

        /// Order ID
        #[arg(long)]
        order: OrderId,

        /// Numeric status code (1=New .. 6=Shipped)
        #[arg(long)]
        status: u8,

        /// Mark the order as paid
        #[arg(long)]
        paid: bool,
    },
    /// Stage and submit cart-line deltas for an order
    Edit {
        /// Customer ID
        #[arg(long)]
        customer: CustomerId,

        /// Order ID
        #[arg(long)]
        order: OrderId,

        /// Stage an addition, as `<product-id>=<quantity>` (repeatable)
        #[arg(long = "add")]
        adds: Vec<String>,

        /// Stage a removal, as `<product-id>=<quantity>` (repeatable)
        #[arg(long = "remove")]
        removes: Vec<String>,

        /// Stage removal of a product's full confirmed quantity (repeatable)
        #[arg(long = "remove-all")]
        remove_all: Vec<ProductId>,
    },
    /// Create an order for a customer
    Create {
        /// Customer ID
        #[arg(long)]
        customer: CustomerId,

        /// Cart line, as `<product-id>=<quantity>` (repeatable)
        #[arg(long = "line")]
        lines: Vec<String>,

        /// Free-form delivery address
        #[arg(long, default_value = "")]
        address: String,

        /// Order comment
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Hard-delete an order (irreversible)
    Delete {
        /// Customer ID
        #[arg(long)]
        customer: CustomerId,

        /// Order ID
        #[arg(long)]
        order: OrderId,

        /// Confirm the irreversible delete
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum CustomerAction {
    /// List customers
    List,
    /// Create a customer
    Create {
        /// Given name
        #[arg(long)]
        first: String,

        /// Patronymic
        #[arg(long, default_value = "")]
        patronymic: String,

        /// Family name
        #[arg(long)]
        family: String,

        /// Phone number
        #[arg(long)]
        phone: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        if let Some(commands::CommandError::Gateway(err)) =
            e.downcast_ref::<commands::CommandError>()
            && err.is_auth_failure()
        {
            tracing::error!("Session rejected - obtain a fresh ORDERDESK_API_TOKEN and retry");
        } else {
            tracing::error!("Command failed: {e}");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = GatewayConfig::from_env()?;
    let session = AuthSession::from_env()?;
    let client = GatewayClient::new(&config, session);

    match cli.command {
        Commands::Products { action } => match action {
            ProductAction::List => commands::catalog::list(&client).await?,
            ProductAction::Receive {
                product_id,
                quantity,
            } => commands::catalog::receive(&client, product_id, quantity).await?,
            ProductAction::SetCounters {
                product_id,
                actual,
                reserved,
                shipping,
            } => {
                commands::catalog::set_counters(&client, product_id, actual, reserved, shipping)
                    .await?;
            }
            ProductAction::Delete { product_id, yes } => {
                commands::catalog::delete(&client, product_id, yes).await?;
            }
        },
        Commands::Orders { action } => match action {
            OrderAction::List { archived } => commands::orders::list(&client, archived).await?,
            OrderAction::SetStatus {
                customer,
                order,
                status,
                paid,
            } => commands::orders::set_status(&client, customer, order, status, paid).await?,
            OrderAction::Edit {
                customer,
                order,
                adds,
                removes,
                remove_all,
            } => {
                commands::orders::edit(&client, customer, order, &adds, &removes, &remove_all)
                    .await?;
            }
            OrderAction::Create {
                customer,
                lines,
                address,
                comment,
            } => commands::orders::create(&client, customer, &lines, address, comment).await?,
            OrderAction::Delete {
                customer,
                order,
                yes,
            } => commands::orders::delete(&client, customer, order, yes).await?,
        },
        Commands::Customers { action } => match action {
            CustomerAction::List => commands::customers::list(&client).await?,
            CustomerAction::Create {
                first,
                patronymic,
                family,
                phone,
            } => commands::customers::create(&client, first, patronymic, family, phone).await?,
        },
    }
    Ok(())
}
