use soroban_sdk::{contractclient, contracttype, Env};

/// The latest answer reported by a price feed
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PriceData {
    pub price: i128,    // the USD price of one whole unit of the base asset
    pub decimals: u32,  // the fixed-point decimals `price` is expressed in
    pub timestamp: u64, // the ledger timestamp the answer was last updated at
}

/// ### Price Feed
///
/// Interface of an external oracle reporting the USD price of a single base asset.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    /// The number of decimals reported prices are expressed in
    fn decimals(e: Env) -> u32;

    /// Fetch the latest answer of the feed
    ///
    /// ### Panics
    /// If the feed is unable to supply a price
    fn latest_answer(e: Env) -> PriceData;

    /// The version of the feed implementation
    fn version(e: Env) -> u32;
}
