//! Integration tests against a mock HTTP server

mod mock_server;

mod checkout;
mod collection;
mod payout;
mod refund;
mod wallet;
