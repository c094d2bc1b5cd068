use mock_price_feed::{MockPriceFeed, MockPriceFeedClient};
use soroban_sdk::{Address, Env};

pub fn create_mock_price_feed<'a>(
    e: &Env,
    decimals: u32,
    initial_answer: i128,
) -> (Address, MockPriceFeedClient<'a>) {
    let contract_id = e.register_contract(None, MockPriceFeed {});
    let client = MockPriceFeedClient::new(e, &contract_id);
    client.initialize(&decimals, &initial_answer);
    (contract_id, client)
}
