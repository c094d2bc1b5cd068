pub mod assertions;
mod ledger;
mod price_feed;
pub mod test_fixture;
mod token;

pub use test_fixture::TestFixture;
