/// Fixed-point scalar for 7 decimal numbers
pub const SCALAR_7: i128 = 1_0000000;

/// The decimals USD values are expressed in
pub const USD_DECIMALS: u32 = 7;

/// The minimum USD value a single contribution must be worth ($50)
pub const MIN_USD: i128 = 50 * SCALAR_7;
