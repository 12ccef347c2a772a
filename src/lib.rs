//! Client core for the gatewaybos back office: typed records, remote CRUD
//! gateways and the helpers list screens use to keep collections tidy.

pub mod back_office;
pub mod client;
pub mod config;
pub mod date_codec;
pub mod error;
pub mod gateway;
pub mod model;
pub mod paging;
pub mod query;
pub mod reconcile;

pub use back_office::BackOffice;
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{GatewayError, Result};
pub use gateway::{Gateway, Resource};
pub use paging::load_all;
pub use query::QueryOptions;
pub use reconcile::add_to_collection_if_missing;
