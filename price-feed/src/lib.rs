#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod price_feed;

pub use crate::price_feed::{PriceData, PriceFeed, PriceFeedClient};
