//! Recurly v2 API client.
//!
//! This crate builds authenticated XML requests, executes them, and wraps each
//! reply in a [`Response`] that classifies the status and exposes validation
//! errors and pagination cursors.
//!
//! # Example
//!
//! ```no_run
//! use recurly_client::{Client, Params};
//! use recurly_core::{Account, NullBool};
//!
//! # async fn example() -> Result<(), recurly_client::Error> {
//! let client = Client::new("your-subdomain", "your-api-key")?;
//!
//! // Partial update: only `tax_exempt` is sent.
//! let change = Account {
//!     tax_exempt: NullBool::new(false),
//!     ..Account::default()
//! };
//! let (response, account) = client.accounts().update("1", &change).await?;
//! if response.is_error() {
//!     for error in response.errors() {
//!         println!("{}: {}", error.field, error.message);
//!     }
//! } else if let Some(account) = account {
//!     println!("updated {}", account.code);
//! }
//!
//! // Walk every active account, one page at a time.
//! let mut pager = client.accounts().list(Params::new().with("state", "active"));
//! while pager.has_more() {
//!     for account in pager.fetch().await? {
//!         println!("{}", account.email);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
mod error;
mod pager;
mod request;
mod response;
pub mod services;

pub use client::{Client, ClientOptions, NO_BODY};
pub use config::Config;
pub use error::Error;
pub use pager::Pager;
pub use request::Params;
pub use response::{Response, ValidationError};
