use soroban_sdk::{contract, contracterror, contractimpl, contracttype, panic_with_error, Env};

use price_feed::{PriceData, PriceFeed};

pub(crate) const LEDGER_THRESHOLD_SHARED: u32 = 172800; // ~ 10 days
pub(crate) const LEDGER_BUMP_SHARED: u32 = 241920; // ~ 14 days

const VERSION: u32 = 4;

#[derive(Clone)]
#[contracttype]
pub enum MockPriceFeedDataKey {
    // The number of decimals reported
    Decimals,
    // MOCK: The answer to return
    Answer,
    // MOCK: If the feed should fail
    ToError,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockPriceFeedError {
    Unavailable = 1,
    AlreadyInitialized = 3,
}

/// ### Mock Price Feed
///
/// Contract that reports a fixed, settable USD price.
///
/// ### Dev
/// For testing purposes only!
#[contract]
pub struct MockPriceFeed;

trait MockPriceFeedAnswer {
    /// Setup the feed with the decimals it reports in and its first answer
    ///
    /// ### Arguments
    /// * `decimals` - The decimals of reported prices
    /// * `initial_answer` - The first price to report
    fn initialize(e: Env, decimals: u32, initial_answer: i128);

    /// Sets the mocked price. The answer is stamped with the current ledger timestamp.
    fn update_answer(e: Env, price: i128);

    /// Sets the feed error status
    fn set_error(e: Env, to_error: bool);
}

#[contractimpl]
impl MockPriceFeedAnswer for MockPriceFeed {
    fn initialize(e: Env, decimals: u32, initial_answer: i128) {
        if e.storage().instance().has(&MockPriceFeedDataKey::Decimals) {
            panic_with_error!(&e, MockPriceFeedError::AlreadyInitialized);
        }
        e.storage()
            .instance()
            .set::<MockPriceFeedDataKey, u32>(&MockPriceFeedDataKey::Decimals, &decimals);
        Self::update_answer(e, initial_answer);
    }

    fn update_answer(e: Env, price: i128) {
        let decimals = Self::decimals(e.clone());
        e.storage().instance().set::<MockPriceFeedDataKey, PriceData>(
            &MockPriceFeedDataKey::Answer,
            &PriceData {
                price,
                decimals,
                timestamp: e.ledger().timestamp(),
            },
        );
        e.storage()
            .instance()
            .extend_ttl(LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
    }

    fn set_error(e: Env, to_error: bool) {
        e.storage()
            .instance()
            .set::<MockPriceFeedDataKey, bool>(&MockPriceFeedDataKey::ToError, &to_error);
    }
}

#[contractimpl]
impl PriceFeed for MockPriceFeed {
    fn decimals(e: Env) -> u32 {
        e.storage()
            .instance()
            .get::<MockPriceFeedDataKey, u32>(&MockPriceFeedDataKey::Decimals)
            .unwrap_or(8)
    }

    fn latest_answer(e: Env) -> PriceData {
        let to_error = e
            .storage()
            .instance()
            .get::<MockPriceFeedDataKey, bool>(&MockPriceFeedDataKey::ToError)
            .unwrap_or(false);
        if to_error {
            panic_with_error!(&e, MockPriceFeedError::Unavailable);
        }
        match e
            .storage()
            .instance()
            .get::<MockPriceFeedDataKey, PriceData>(&MockPriceFeedDataKey::Answer)
        {
            Some(answer) => answer,
            None => panic_with_error!(&e, MockPriceFeedError::Unavailable),
        }
    }

    fn version(_e: Env) -> u32 {
        VERSION
    }
}
