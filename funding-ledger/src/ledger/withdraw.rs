use soroban_sdk::{panic_with_error, Address, Env};

use crate::{errors::FundingLedgerError, storage};

use super::{load_balance, require_owner, transfer_native};

/// Sweep the ledger's balance to the owner and clear every recorded contribution.
/// The stored funder list is read on every iteration.
///
/// Returns the amount withdrawn
///
/// ### Panics
/// If `caller` is not the owner or the transfer to the owner fails
pub fn execute_withdraw(e: &Env, caller: &Address) -> i128 {
    let owner = require_owner(e, caller);
    let balance = load_balance(e);

    let mut index = 0;
    while index < storage::get_funder_count(e) {
        match storage::get_funder(e, index) {
            Some(funder) => storage::del_amount_funded(e, &funder),
            None => panic_with_error!(e, FundingLedgerError::InternalError),
        }
        index += 1;
    }
    storage::del_funders(e);

    transfer_native(e, &e.current_contract_address(), &owner, balance);
    balance
}

/// Sweep the ledger's balance to the owner and clear every recorded contribution.
/// The funder list is loaded once and its length cached.
///
/// Returns the amount withdrawn
///
/// ### Panics
/// If `caller` is not the owner or the transfer to the owner fails
pub fn execute_cheaper_withdraw(e: &Env, caller: &Address) -> i128 {
    let owner = require_owner(e, caller);
    let balance = load_balance(e);

    let funders = storage::get_funders(e);
    let funder_count = funders.len();
    for index in 0..funder_count {
        storage::del_amount_funded(e, &funders.get_unchecked(index));
    }
    storage::del_funders(e);

    transfer_native(e, &e.current_contract_address(), &owner, balance);
    balance
}
