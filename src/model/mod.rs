mod currencies;
mod customer;
mod smart_trade;
mod wallet;

pub use currencies::Currencies;
pub use customer::{Customer, User};
pub use smart_trade::{SmartTrade, SmartTradeWire};
pub use wallet::Wallet;

/// Anything that may carry a server-assigned identifier.
pub trait Identified {
    fn id(&self) -> Option<&str>;
}
