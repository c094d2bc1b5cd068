use core::fmt::Debug;

use funding_ledger::FundingLedgerError;
use soroban_sdk::{Address, Error};

use crate::test_fixture::TestFixture;

/// Assert a `try_` invocation against the funding ledger failed with `expected`
pub fn assert_ledger_error<T: Debug, C: Debug, I: Debug>(
    result: Result<Result<T, C>, Result<Error, I>>,
    expected: FundingLedgerError,
) {
    match result {
        Err(Ok(error)) => assert_eq!(error, Error::from_contract_error(expected as u32)),
        other => panic!(
            "assertion failed: expected contract error `{:?}`, got `{:?}`",
            expected, other
        ),
    }
}

/// Assert the ledger holds nothing and remembers none of `funders`
pub fn assert_ledger_cleared(fixture: &TestFixture, funders: &[Address]) {
    assert_eq!(fixture.ledger.balance(), 0);
    assert_eq!(fixture.ledger.funders().len(), 0);
    for funder in funders {
        assert_eq!(fixture.ledger.amount_funded(funder), 0);
    }
}
