use soroban_sdk::{
    contracttype, unwrap::UnwrapOptimized, vec, Address, Env, IntoVal, Symbol, TryFromVal, Val,
    Vec,
};

pub(crate) const LEDGER_THRESHOLD_SHARED: u32 = 172800; // ~ 10 days
pub(crate) const LEDGER_BUMP_SHARED: u32 = 241920; // ~ 14 days

pub(crate) const LEDGER_THRESHOLD_USER: u32 = 518400; // ~ 30 days
pub(crate) const LEDGER_BUMP_USER: u32 = 535670; // ~ 31 days

/********** Storage Key Types **********/

const OWNER_KEY: &str = "Owner";
const PRICE_FEED_KEY: &str = "PriceFeed";
const TOKEN_KEY: &str = "Token";
const TOKEN_DECIMALS_KEY: &str = "TknDec";
const FUNDERS_KEY: &str = "Funders";

#[derive(Clone)]
#[contracttype]
pub enum LedgerDataKey {
    // The cumulative amount a funder has contributed since the last withdrawal
    Funded(Address),
}

/****************************
**         Storage         **
****************************/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/// Fetch an entry in persistent storage that has a default value if it doesn't exist
fn get_persistent_default<K: IntoVal<Env, Val>, V: TryFromVal<Env, Val>>(
    e: &Env,
    key: &K,
    default: V,
    bump_threshold: u32,
    bump_amount: u32,
) -> V {
    if let Some(result) = e.storage().persistent().get::<K, V>(key) {
        e.storage()
            .persistent()
            .extend_ttl(key, bump_threshold, bump_amount);
        result
    } else {
        default
    }
}

/********** Owner **********/

/// Fetch the owner Address
///
/// ### Panics
/// If the owner does not exist
pub fn get_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, OWNER_KEY))
        .unwrap_optimized()
}

/// Set the owner
///
/// ### Arguments
/// * `owner` - The Address of the owner
pub fn set_owner(e: &Env, owner: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, OWNER_KEY), owner);
}

/// Checks if an owner is set
pub fn has_owner(e: &Env) -> bool {
    e.storage().instance().has(&Symbol::new(e, OWNER_KEY))
}

/********** External Contracts **********/

/// Fetch the price feed id
pub fn get_price_feed(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, PRICE_FEED_KEY))
        .unwrap_optimized()
}

/// Set the price feed
///
/// ### Arguments
/// * `price_feed` - The contract address of the price feed
pub fn set_price_feed(e: &Env, price_feed: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, PRICE_FEED_KEY), price_feed);
}

/// Fetch the native token id
pub fn get_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, TOKEN_KEY))
        .unwrap_optimized()
}

/// Set the native token id
///
/// ### Arguments
/// * `token` - The contract address of the native token
pub fn set_token(e: &Env, token: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, TOKEN_KEY), token);
}

/// Fetch the decimals of the native token
pub fn get_token_decimals(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get::<Symbol, u32>(&Symbol::new(e, TOKEN_DECIMALS_KEY))
        .unwrap_optimized()
}

/// Set the decimals of the native token
///
/// ### Arguments
/// * `decimals` - The decimals of the native token
pub fn set_token_decimals(e: &Env, decimals: &u32) {
    e.storage()
        .instance()
        .set::<Symbol, u32>(&Symbol::new(e, TOKEN_DECIMALS_KEY), decimals);
}

/********** Contributor Record **********/

/// Fetch the amount funded by `funder` since the last withdrawal, or 0
///
/// ### Arguments
/// * `funder` - The address of the funder
pub fn get_amount_funded(e: &Env, funder: &Address) -> i128 {
    let key = LedgerDataKey::Funded(funder.clone());
    get_persistent_default(e, &key, 0i128, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER)
}

/// Checks if `funder` has a contribution recorded since the last withdrawal
///
/// ### Arguments
/// * `funder` - The address of the funder
pub fn has_amount_funded(e: &Env, funder: &Address) -> bool {
    e.storage()
        .persistent()
        .has(&LedgerDataKey::Funded(funder.clone()))
}

/// Set the amount funded by `funder`
///
/// ### Arguments
/// * `funder` - The address of the funder
/// * `amount` - The cumulative amount funded
pub fn set_amount_funded(e: &Env, funder: &Address, amount: &i128) {
    let key = LedgerDataKey::Funded(funder.clone());
    e.storage()
        .persistent()
        .set::<LedgerDataKey, i128>(&key, amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

/// Remove the recorded contribution of `funder`
///
/// ### Arguments
/// * `funder` - The address of the funder
pub fn del_amount_funded(e: &Env, funder: &Address) {
    e.storage()
        .persistent()
        .remove(&LedgerDataKey::Funded(funder.clone()));
}

/********** Funder List **********/

/// Fetch the funders in first-contribution order
pub fn get_funders(e: &Env) -> Vec<Address> {
    get_persistent_default(
        e,
        &Symbol::new(e, FUNDERS_KEY),
        vec![e],
        LEDGER_THRESHOLD_SHARED,
        LEDGER_BUMP_SHARED,
    )
}

/// Fetch the number of funders
pub fn get_funder_count(e: &Env) -> u32 {
    get_funders(e).len()
}

/// Fetch the funder at `index`, or None if the index is out of range
///
/// ### Arguments
/// * `index` - The position of the funder in the list
pub fn get_funder(e: &Env, index: u32) -> Option<Address> {
    get_funders(e).get(index)
}

/// Add a funder to the end of the list
///
/// Returns the index of the funder
///
/// ### Arguments
/// * `funder` - The address of the funder
pub fn push_funder(e: &Env, funder: &Address) -> u32 {
    let mut funders = get_funders(e);
    funders.push_back(funder.clone());
    let new_index = funders.len() - 1;
    e.storage()
        .persistent()
        .set::<Symbol, Vec<Address>>(&Symbol::new(e, FUNDERS_KEY), &funders);
    e.storage().persistent().extend_ttl(
        &Symbol::new(e, FUNDERS_KEY),
        LEDGER_THRESHOLD_SHARED,
        LEDGER_BUMP_SHARED,
    );
    new_index
}

/// Remove every funder from the list
pub fn del_funders(e: &Env) {
    e.storage().persistent().remove(&Symbol::new(e, FUNDERS_KEY));
}
