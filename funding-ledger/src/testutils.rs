#![cfg(test)]

use crate::{storage, FundingLedgerContract};
use mock_price_feed::{MockPriceFeed, MockPriceFeedClient};
use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};

pub(crate) fn create_funding_ledger(e: &Env) -> Address {
    e.register_contract(None, FundingLedgerContract {})
}

//************************************************
//           External Contract Helpers
//************************************************

// ***** Token *****

pub(crate) fn create_token_contract<'a>(
    e: &Env,
    admin: &Address,
) -> (Address, TokenClient<'a>, StellarAssetClient<'a>) {
    let contract_address = e.register_stellar_asset_contract(admin.clone());
    (
        contract_address.clone(),
        TokenClient::new(e, &contract_address),
        StellarAssetClient::new(e, &contract_address),
    )
}

//***** Price Feed ******

pub(crate) fn create_price_feed<'a>(
    e: &Env,
    decimals: u32,
    initial_answer: i128,
) -> (Address, MockPriceFeedClient<'a>) {
    let contract_address = e.register_contract(None, MockPriceFeed {});
    let client = MockPriceFeedClient::new(e, &contract_address);
    client.initialize(&decimals, &initial_answer);
    (contract_address, client)
}

//************************************************
//            Object Creation Helpers
//************************************************

/// Create a funding ledger owned by `owner` whose price feed reports $2000 per whole unit of a
/// 7 decimal Stellar asset.
///
/// Returns (ledger address, price feed client, native token client, native token admin client)
pub(crate) fn create_default_ledger<'a>(
    e: &Env,
    owner: &Address,
) -> (
    Address,
    MockPriceFeedClient<'a>,
    TokenClient<'a>,
    StellarAssetClient<'a>,
) {
    let ledger = create_funding_ledger(e);
    let (token, token_client, token_admin_client) =
        create_token_contract(e, &Address::generate(e));
    let (price_feed, price_feed_client) = create_price_feed(e, 8, 2000_00000000);

    e.as_contract(&ledger, || {
        storage::set_owner(e, owner);
        storage::set_price_feed(e, &price_feed);
        storage::set_token(e, &token);
        storage::set_token_decimals(e, &7);
    });
    (ledger, price_feed_client, token_client, token_admin_client)
}
