//! Async, mockable client for the Amazon Chime REST-JSON API.
//!
//! [`ChimeApi`] is the seam: application code depends on `&dyn ChimeApi`,
//! [`ChimeClient`] implements it over signed HTTP, and `MockChimeApi`
//! (enabled in tests and by the `mock` feature) stands in for it in unit
//! tests. The `*_pages` functions walk the paginated list operations through
//! any implementation of the trait.
//!
//! ```no_run
//! use awsbind_chime::{ChimeClient, input::ListAccountsInput, list_accounts_pages};
//! use awsbind_core::ClientConfig;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ChimeClient::new(&ClientConfig::from_env()?)?;
//! list_accounts_pages(&client, ListAccountsInput::default(), |page, _last| {
//!     for account in &page.accounts {
//!         println!("{:?}", account.name);
//!     }
//!     true
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

mod api;
mod bindings;
mod client;
mod paginator;

#[cfg(any(test, feature = "mock"))]
pub use api::MockChimeApi;
pub use api::ChimeApi;
pub use awsbind_chime_model::{ChimeErrorCode, ChimeOperation, input, output, types};
pub use awsbind_http::{SdkError, ServiceError};
pub use bindings::HttpBinding;
pub use client::{ChimeClient, SERVICE_NAME};
pub use paginator::{
    list_accounts_pages, list_phone_number_orders_pages, list_phone_numbers_pages,
    list_users_pages, list_voice_connectors_pages,
};
