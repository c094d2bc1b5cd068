mod fund;
pub use fund::execute_fund;

mod price;
pub use price::to_usd;

mod withdraw;
pub use withdraw::{execute_cheaper_withdraw, execute_withdraw};

use sep_41_token::TokenClient;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::{errors::FundingLedgerError, storage};

/// Require that an incoming amount is not negative
///
/// ### Arguments
/// * `amount` - The amount
///
/// ### Panics
/// If the number is negative
pub fn require_nonnegative(e: &Env, amount: i128) {
    if amount.is_negative() {
        panic_with_error!(e, FundingLedgerError::NegativeAmount);
    }
}

/// Require that `caller` is the owner of the ledger
///
/// Returns the owner
///
/// ### Panics
/// If `caller` is not the owner
pub fn require_owner(e: &Env, caller: &Address) -> Address {
    let owner = storage::get_owner(e);
    if *caller != owner {
        panic_with_error!(e, FundingLedgerError::NotOwner);
    }
    owner
}

/// Fetch the amount of native tokens held by the ledger
pub fn load_balance(e: &Env) -> i128 {
    TokenClient::new(e, &storage::get_token(e)).balance(&e.current_contract_address())
}

/// Transfer native tokens between `from` and `to`
///
/// ### Panics
/// If the transfer does not complete
pub(crate) fn transfer_native(e: &Env, from: &Address, to: &Address, amount: i128) {
    let token_client = TokenClient::new(e, &storage::get_token(e));
    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(_)) => (),
        _ => panic_with_error!(e, FundingLedgerError::TransferFailed),
    }
}
