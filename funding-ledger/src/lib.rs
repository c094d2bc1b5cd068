#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod constants;
mod contract;
mod errors;
mod ledger;
mod storage;
mod testutils;

pub use constants::{MIN_USD, SCALAR_7, USD_DECIMALS};
pub use contract::*;
pub use errors::FundingLedgerError;
pub use storage::LedgerDataKey;
