use funding_ledger::{FundingLedgerClient, FundingLedgerContract};
use soroban_sdk::{Address, Env};

pub fn create_funding_ledger<'a>(e: &Env) -> (Address, FundingLedgerClient<'a>) {
    let contract_id = e.register_contract(None, FundingLedgerContract {});
    (contract_id.clone(), FundingLedgerClient::new(e, &contract_id))
}
