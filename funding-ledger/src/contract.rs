use crate::{constants::MIN_USD, errors::FundingLedgerError, ledger, storage};
use price_feed::PriceFeedClient;
use sep_41_token::TokenClient;
use soroban_sdk::{
    contract, contractclient, contractimpl, panic_with_error, Address, Env, Symbol, Vec,
};

/// ### Funding Ledger
///
/// Records contributions worth at least `MIN_USD` and lets a single owner sweep them.
#[contract]
pub struct FundingLedgerContract;

#[contractclient(name = "FundingLedgerClient")]
pub trait FundingLedger {
    /// Initialize the funding ledger
    ///
    /// ### Arguments
    /// * `owner` - The Address allowed to withdraw funds
    /// * `price_feed` - The contract address of the native token's USD price feed
    /// * `token` - The contract address of the native token
    ///
    /// ### Panics
    /// If initialize has already been called
    fn initialize(e: Env, owner: Address, price_feed: Address, token: Address);

    /********** Core **********/

    /// Contribute native tokens from "from" to the ledger
    ///
    /// Returns the cumulative amount funded by "from" since the last withdrawal
    ///
    /// ### Arguments
    /// * `from` - The address contributing
    /// * `amount` - The amount of native tokens to contribute
    ///
    /// ### Panics
    /// If the contribution is worth less than the minimum USD value, the price feed is
    /// unavailable, or the transfer fails
    fn fund(e: Env, from: Address, amount: i128) -> i128;

    /// (Owner only) Transfer the entire balance to the owner and clear all contributions
    ///
    /// Returns the amount withdrawn
    ///
    /// ### Arguments
    /// * `caller` - The address requesting the withdrawal
    ///
    /// ### Panics
    /// If the caller is not the owner or the transfer fails
    fn withdraw(e: Env, caller: Address) -> i128;

    /// (Owner only) Transfer the entire balance to the owner and clear all contributions,
    /// iterating a single cached copy of the funder list
    ///
    /// Returns the amount withdrawn
    ///
    /// ### Arguments
    /// * `caller` - The address requesting the withdrawal
    ///
    /// ### Panics
    /// If the caller is not the owner or the transfer fails
    fn cheaper_withdraw(e: Env, caller: Address) -> i128;

    /********** Getters **********/

    /// Fetch the USD value of an amount of native tokens, expressed with 7 decimals
    ///
    /// ### Arguments
    /// * `amount` - The amount of native tokens
    ///
    /// ### Panics
    /// If the price feed is unavailable
    fn usd_value(e: Env, amount: i128) -> i128;

    /// Fetch the minimum USD value of a contribution, expressed with 7 decimals
    fn min_usd(e: Env) -> i128;

    /// Fetch the owner
    fn owner(e: Env) -> Address;

    /// Fetch the price feed
    fn price_feed(e: Env) -> Address;

    /// Fetch the version of the price feed
    fn price_feed_version(e: Env) -> u32;

    /// Fetch the native token
    fn token(e: Env) -> Address;

    /// Fetch the amount funded by an address since the last withdrawal
    ///
    /// ### Arguments
    /// * `funder` - The address of the funder
    fn amount_funded(e: Env, funder: Address) -> i128;

    /// Fetch the funder at a position in the funder list
    ///
    /// ### Arguments
    /// * `index` - The position of the funder
    ///
    /// ### Panics
    /// If no funder exists at `index`
    fn funder(e: Env, index: u32) -> Address;

    /// Fetch every funder since the last withdrawal, in order of first contribution
    fn funders(e: Env) -> Vec<Address>;

    /// Fetch the amount of native tokens held by the ledger
    fn balance(e: Env) -> i128;
}

/// @dev
/// Entry points check auth and publish events. Accounting lives in `ledger`.
#[contractimpl]
impl FundingLedger for FundingLedgerContract {
    fn initialize(e: Env, owner: Address, price_feed: Address, token: Address) {
        storage::extend_instance(&e);
        if storage::has_owner(&e) {
            panic_with_error!(e, FundingLedgerError::AlreadyInitialized);
        }
        owner.require_auth();

        let decimals = TokenClient::new(&e, &token).decimals();
        storage::set_owner(&e, &owner);
        storage::set_price_feed(&e, &price_feed);
        storage::set_token(&e, &token);
        storage::set_token_decimals(&e, &decimals);

        e.events()
            .publish((Symbol::new(&e, "initialize"), owner), (price_feed, token));
    }

    /********** Core **********/

    fn fund(e: Env, from: Address, amount: i128) -> i128 {
        storage::extend_instance(&e);
        from.require_auth();

        let funded = ledger::execute_fund(&e, &from, amount);

        e.events().publish((Symbol::new(&e, "fund"), from), amount);
        funded
    }

    fn withdraw(e: Env, caller: Address) -> i128 {
        storage::extend_instance(&e);
        caller.require_auth();

        let amount = ledger::execute_withdraw(&e, &caller);

        e.events()
            .publish((Symbol::new(&e, "withdraw"), caller), amount);
        amount
    }

    fn cheaper_withdraw(e: Env, caller: Address) -> i128 {
        storage::extend_instance(&e);
        caller.require_auth();

        let amount = ledger::execute_cheaper_withdraw(&e, &caller);

        e.events()
            .publish((Symbol::new(&e, "withdraw"), caller), amount);
        amount
    }

    /********** Getters **********/

    fn usd_value(e: Env, amount: i128) -> i128 {
        ledger::require_nonnegative(&e, amount);
        ledger::to_usd(&e, amount)
    }

    fn min_usd(_e: Env) -> i128 {
        MIN_USD
    }

    fn owner(e: Env) -> Address {
        storage::get_owner(&e)
    }

    fn price_feed(e: Env) -> Address {
        storage::get_price_feed(&e)
    }

    fn price_feed_version(e: Env) -> u32 {
        match PriceFeedClient::new(&e, &storage::get_price_feed(&e)).try_version() {
            Ok(Ok(version)) => version,
            _ => panic_with_error!(e, FundingLedgerError::PriceFeedUnavailable),
        }
    }

    fn token(e: Env) -> Address {
        storage::get_token(&e)
    }

    fn amount_funded(e: Env, funder: Address) -> i128 {
        storage::get_amount_funded(&e, &funder)
    }

    fn funder(e: Env, index: u32) -> Address {
        match storage::get_funder(&e, index) {
            Some(funder) => funder,
            None => panic_with_error!(e, FundingLedgerError::FunderNotFound),
        }
    }

    fn funders(e: Env) -> Vec<Address> {
        storage::get_funders(&e)
    }

    fn balance(e: Env) -> i128 {
        ledger::load_balance(&e)
    }
}
