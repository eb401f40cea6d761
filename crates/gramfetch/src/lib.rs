//! Read-only client for Instagram's public JSON endpoints
//!
//! This crate is the imperative shell around [`gramfetch_core`]: it performs
//! the HTTP requests, drives the pagination loop, and turns shape mismatches
//! into errors for single-record lookups.
//!
//! ```rust,no_run
//! # async fn demo() -> gramfetch::Result<()> {
//! let client = gramfetch::Client::new()?;
//! let account = client.account_by_username("natgeo").await?;
//! let recent = client.account_media(&account.username, 24).await?;
//! println!("{} has {} recent posts", account.username, recent.len());
//! # Ok(())
//! # }
//! ```

mod account;
mod client;
mod config;
mod error;
mod location;
mod media;
mod search;
mod tag;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};

pub use gramfetch_core::{
    Account, Dimensions, Feed, Location, Media, MediaType, Owner, TOP_POSTS_LEN,
};
