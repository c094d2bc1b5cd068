use soroban_sdk::{panic_with_error, Address, Env};

use crate::{constants::MIN_USD, errors::FundingLedgerError, storage};

use super::{require_nonnegative, to_usd, transfer_native};

/// Perform a contribution of `amount` native tokens from `from` to the ledger
///
/// Returns the cumulative amount funded by `from` since the last withdrawal
///
/// ### Panics
/// If the contribution is worth less than `MIN_USD` or the transfer fails
pub fn execute_fund(e: &Env, from: &Address, amount: i128) -> i128 {
    require_nonnegative(e, amount);
    if to_usd(e, amount) < MIN_USD {
        panic_with_error!(e, FundingLedgerError::InsufficientContribution);
    }

    transfer_native(e, from, &e.current_contract_address(), amount);

    let is_new_funder = !storage::has_amount_funded(e, from);
    let funded = match storage::get_amount_funded(e, from).checked_add(amount) {
        Some(funded) => funded,
        None => panic_with_error!(e, FundingLedgerError::Overflow),
    };
    storage::set_amount_funded(e, from, &funded);
    if is_new_funder {
        storage::push_funder(e, from);
    }

    funded
}

#[cfg(test)]
mod tests {
    use soroban_sdk::{testutils::Address as _, vec, Address};

    use crate::testutils;

    use super::*;

    #[test]
    fn test_execute_fund() {
        let e = Env::default();
        e.mock_all_auths_allowing_non_root_auth();

        let bombadil = Address::generate(&e);
        let (ledger, _, token_client, token_admin_client) =
            testutils::create_default_ledger(&e, &bombadil);
        let samwise = Address::generate(&e);
        let frodo = Address::generate(&e);
        token_admin_client.mint(&samwise, &10_0000000);
        token_admin_client.mint(&frodo, &10_0000000);

        e.as_contract(&ledger, || {
            let funded = execute_fund(&e, &samwise, 0_0300000);
            assert_eq!(funded, 0_0300000);

            let funded = execute_fund(&e, &frodo, 1_0000000);
            assert_eq!(funded, 1_0000000);

            assert_eq!(storage::get_amount_funded(&e, &samwise), 0_0300000);
            assert_eq!(storage::get_amount_funded(&e, &frodo), 1_0000000);
            assert_eq!(
                storage::get_funders(&e),
                vec![&e, samwise.clone(), frodo.clone()]
            );
        });
        assert_eq!(token_client.balance(&ledger), 1_0300000);
        assert_eq!(token_client.balance(&samwise), 9_9700000);
        assert_eq!(token_client.balance(&frodo), 9_0000000);
    }

    #[test]
    fn test_execute_fund_repeat_funder_listed_once() {
        let e = Env::default();
        e.mock_all_auths_allowing_non_root_auth();

        let bombadil = Address::generate(&e);
        let (ledger, _, token_client, token_admin_client) =
            testutils::create_default_ledger(&e, &bombadil);
        let samwise = Address::generate(&e);
        token_admin_client.mint(&samwise, &10_0000000);

        e.as_contract(&ledger, || {
            execute_fund(&e, &samwise, 0_0300000);
            let funded = execute_fund(&e, &samwise, 0_0500000);
            assert_eq!(funded, 0_0800000);

            assert_eq!(storage::get_amount_funded(&e, &samwise), 0_0800000);
            assert_eq!(storage::get_funders(&e), vec![&e, samwise.clone()]);
        });
        assert_eq!(token_client.balance(&ledger), 0_0800000);
    }

    #[test]
    fn test_execute_fund_exactly_minimum() {
        let e = Env::default();
        e.mock_all_auths_allowing_non_root_auth();

        let bombadil = Address::generate(&e);
        let (ledger, _, _, token_admin_client) = testutils::create_default_ledger(&e, &bombadil);
        let samwise = Address::generate(&e);
        token_admin_client.mint(&samwise, &10_0000000);

        // $50 at $2000 per unit
        e.as_contract(&ledger, || {
            let funded = execute_fund(&e, &samwise, 0_0250000);
            assert_eq!(funded, 0_0250000);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #1300)")]
    fn test_execute_fund_below_minimum() {
        let e = Env::default();
        e.mock_all_auths_allowing_non_root_auth();

        let bombadil = Address::generate(&e);
        let (ledger, _, _, token_admin_client) = testutils::create_default_ledger(&e, &bombadil);
        let samwise = Address::generate(&e);
        token_admin_client.mint(&samwise, &10_0000000);

        e.as_contract(&ledger, || {
            execute_fund(&e, &samwise, 0_0249999);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #1300)")]
    fn test_execute_fund_zero() {
        let e = Env::default();
        e.mock_all_auths_allowing_non_root_auth();

        let bombadil = Address::generate(&e);
        let (ledger, _, _, _) = testutils::create_default_ledger(&e, &bombadil);
        let samwise = Address::generate(&e);

        e.as_contract(&ledger, || {
            execute_fund(&e, &samwise, 0);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #8)")]
    fn test_execute_fund_negative() {
        let e = Env::default();
        e.mock_all_auths_allowing_non_root_auth();

        let bombadil = Address::generate(&e);
        let (ledger, _, _, _) = testutils::create_default_ledger(&e, &bombadil);
        let samwise = Address::generate(&e);

        e.as_contract(&ledger, || {
            execute_fund(&e, &samwise, -1_0000000);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #1303)")]
    fn test_execute_fund_insufficient_balance() {
        let e = Env::default();
        e.mock_all_auths_allowing_non_root_auth();

        let bombadil = Address::generate(&e);
        let (ledger, _, _, token_admin_client) = testutils::create_default_ledger(&e, &bombadil);
        let samwise = Address::generate(&e);
        token_admin_client.mint(&samwise, &0_0200000);

        e.as_contract(&ledger, || {
            execute_fund(&e, &samwise, 0_0300000);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #1301)")]
    fn test_execute_fund_price_feed_unavailable() {
        let e = Env::default();
        e.mock_all_auths_allowing_non_root_auth();

        let bombadil = Address::generate(&e);
        let (ledger, price_feed_client, _, token_admin_client) =
            testutils::create_default_ledger(&e, &bombadil);
        let samwise = Address::generate(&e);
        token_admin_client.mint(&samwise, &10_0000000);
        price_feed_client.set_error(&true);

        e.as_contract(&ledger, || {
            execute_fund(&e, &samwise, 0_0300000);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #12)")]
    fn test_execute_fund_cumulative_overflow() {
        let e = Env::default();
        e.mock_all_auths_allowing_non_root_auth();

        let bombadil = Address::generate(&e);
        let (ledger, _, _, token_admin_client) = testutils::create_default_ledger(&e, &bombadil);
        let samwise = Address::generate(&e);
        token_admin_client.mint(&samwise, &10_0000000);

        e.as_contract(&ledger, || {
            storage::set_amount_funded(&e, &samwise, &(i128::MAX - 1));
            execute_fund(&e, &samwise, 0_0300000);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #12)")]
    fn test_execute_fund_value_overflow() {
        let e = Env::default();
        e.mock_all_auths_allowing_non_root_auth();

        let bombadil = Address::generate(&e);
        let (ledger, _, _, _) = testutils::create_default_ledger(&e, &bombadil);
        let samwise = Address::generate(&e);

        e.as_contract(&ledger, || {
            execute_fund(&e, &samwise, i128::MAX);
        });
    }
}
