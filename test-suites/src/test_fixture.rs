use crate::ledger::create_funding_ledger;
use crate::price_feed::create_mock_price_feed;
use crate::token::create_stellar_token;
use funding_ledger::FundingLedgerClient;
use mock_price_feed::MockPriceFeedClient;
use soroban_sdk::testutils::{Address as _, Ledger, LedgerInfo};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

pub const SCALAR_7: i128 = 1_000_0000;

/// Decimals of the price feed deployed by the fixture
pub const FEED_DECIMALS: u32 = 8;
/// Price reported by the fixture's feed, $2000 per whole native token
pub const FEED_PRICE: i128 = 2000_00000000;

pub struct TestFixture<'a> {
    pub env: Env,
    pub bombadil: Address,
    pub ledger: FundingLedgerClient<'a>,
    pub price_feed: MockPriceFeedClient<'a>,
    pub token: TokenClient<'a>,
    pub token_admin: StellarAssetClient<'a>,
}

impl TestFixture<'_> {
    /// Create a new TestFixture for the funding ledger
    ///
    /// Deploys a Stellar asset as the native token, a price feed reporting $2000 per token,
    /// and a funding ledger owned by `bombadil`. `bombadil` administers the asset.
    pub fn create<'a>() -> TestFixture<'a> {
        let e = Env::default();
        e.mock_all_auths();
        e.budget().reset_unlimited();

        let bombadil = Address::generate(&e);

        e.ledger().set(LedgerInfo {
            timestamp: 1441065600,
            protocol_version: 20,
            sequence_number: 100,
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 10,
            min_persistent_entry_ttl: 10,
            max_entry_ttl: 2000000,
        });

        let (token_id, token_client, token_admin_client) = create_stellar_token(&e, &bombadil);
        let (price_feed_id, price_feed_client) =
            create_mock_price_feed(&e, FEED_DECIMALS, FEED_PRICE);
        let (_, ledger_client) = create_funding_ledger(&e);
        ledger_client.initialize(&bombadil, &price_feed_id, &token_id);

        TestFixture {
            env: e,
            bombadil,
            ledger: ledger_client,
            price_feed: price_feed_client,
            token: token_client,
            token_admin: token_admin_client,
        }
    }

    /// Create a new address holding `balance` native tokens
    pub fn create_funder(&self, balance: i128) -> Address {
        let funder = Address::generate(&self.env);
        self.token_admin.mint(&funder, &balance);
        funder
    }

    /********** Chain Helpers ***********/

    pub fn jump(&self, time: u64) {
        let blocks = time / 5;
        self.env.ledger().set(LedgerInfo {
            timestamp: self.env.ledger().timestamp().saturating_add(time),
            protocol_version: 20,
            sequence_number: self.env.ledger().sequence().saturating_add(blocks as u32),
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 10,
            min_persistent_entry_ttl: 10,
            max_entry_ttl: 2000000,
        });
    }
}
