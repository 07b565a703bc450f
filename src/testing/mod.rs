//! Testing utilities for the `AwardWallet` client.
//!
//! Provides mock clients for testing applications built on this crate.

mod mock;

pub use mock::{
    MockAccountsClient, MockAwardWalletClient, MockCall, MockConnectedUsersClient,
    MockConnectionsClient, MockMembersClient, MockProvidersClient, MockResponse,
};
