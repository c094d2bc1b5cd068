use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
/// Error codes for the funding ledger contract. Common errors are codes that match up with the built-in
/// contracts error reporting. Funding ledger specific errors start at 1300.
pub enum FundingLedgerError {
    // Common Errors
    InternalError = 1,
    AlreadyInitialized = 3,

    NegativeAmount = 8,
    Overflow = 12,

    // Funding Ledger
    InsufficientContribution = 1300,
    PriceFeedUnavailable = 1301,
    NotOwner = 1302,
    TransferFailed = 1303,
    FunderNotFound = 1304,
}
