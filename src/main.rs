use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use gatewaybos::{BackOffice, Gateway, Resource, load_all};

const PAGE_SIZE: u32 = 50;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Entity {
    Currencies,
    Customers,
    SmartTrades,
    Wallets,
}

#[derive(Parser, Debug)]
#[command(name = "gatewaybos", version, about = "Back-office records from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List records, every entity type when none is given
    List {
        #[arg(value_enum)]
        entity: Option<Entity>,
    },
    /// Print one record
    Show {
        #[arg(value_enum)]
        entity: Entity,
        id: String,
    },
    /// Delete one record
    Delete {
        #[arg(value_enum)]
        entity: Entity,
        id: String,
    },
}

macro_rules! with_gateway {
    ($back_office:expr, $entity:expr, $gateway:ident => $body:expr) => {
        match $entity {
            Entity::Currencies => {
                let $gateway = &$back_office.currencies;
                $body
            }
            Entity::Customers => {
                let $gateway = &$back_office.customers;
                $body
            }
            Entity::SmartTrades => {
                let $gateway = &$back_office.smart_trades;
                $body
            }
            Entity::Wallets => {
                let $gateway = &$back_office.wallets;
                $body
            }
        }
    };
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let back_office = BackOffice::from_env()?;

    match cli.command.unwrap_or(Command::List { entity: None }) {
        Command::List { entity: None } => {
            for &entity in Entity::value_variants() {
                with_gateway!(back_office, entity, gateway => list(gateway).await?);
            }
        }
        Command::List {
            entity: Some(entity),
        } => {
            with_gateway!(back_office, entity, gateway => list(gateway).await?);
        }
        Command::Show { entity, id } => {
            with_gateway!(back_office, entity, gateway => show(gateway, &id).await?);
        }
        Command::Delete { entity, id } => {
            with_gateway!(back_office, entity, gateway => delete(gateway, &id).await?);
        }
    }

    Ok(())
}

async fn list<T: Resource>(gateway: &Gateway<T>) -> Result<()> {
    let records = load_all(gateway, PAGE_SIZE).await?;
    println!("{} ({}):", T::ENTITY_NAME, records.len());
    for record in &records {
        println!("  {:?}", record);
    }

    Ok(())
}

async fn show<T: Resource>(gateway: &Gateway<T>, id: &str) -> Result<()> {
    match gateway.find(id).await? {
        Some(record) => println!("{:?}", record),
        None => bail!("{} {} not found", T::ENTITY_NAME, id),
    }

    Ok(())
}

async fn delete<T: Resource>(gateway: &Gateway<T>, id: &str) -> Result<()> {
    if gateway.delete(id).await? {
        println!("Deleted {} {}", T::ENTITY_NAME, id);
    } else {
        println!("{} {} did not exist", T::ENTITY_NAME, id);
    }

    Ok(())
}
