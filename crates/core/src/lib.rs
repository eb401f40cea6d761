//! Core library for gramfetch
//!
//! This crate implements the **Functional Core** of gramfetch, following the
//! Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`gramfetch_core`** (this crate): Pure transformation functions with zero I/O
//! - **`gramfetch`**: HTTP fetching, the pagination loop, and the CLI (the Imperative Shell)
//!
//! All functions in this crate take already-decoded JSON and return typed
//! records. They never perform I/O, so they can be tested with fixture
//! documents and no mocking.
//!
//! # Module Organization
//!
//! - [`endpoints`]: URL templates for every endpoint
//! - [`account`]: Profile page and search result mappers
//! - [`media`]: Post page, account listing and listing node mappers
//! - [`location`]: Location page mapper
//! - [`feed`]: Paged feeds, their page envelopes and the top posts view
//! - [`pagination`]: Quantity-capped collection state machine
//!
//! Mappers return `Option`. `None` means the document did not have the shape
//! the mapper expects; it never means an I/O failure.
//!
//! # Example Usage
//!
//! ```rust
//! use gramfetch_core::media::media_from_listing_node;
//! use serde_json::json;
//!
//! let node = json!({"id": "1481937421651712000", "code": "BSRJHkUgWW1", "likes": {"count": 64}});
//! let media = media_from_listing_node(&node).unwrap();
//!
//! assert_eq!(media.code, "BSRJHkUgWW1");
//! assert_eq!(media.likes, Some(64));
//! ```

mod de;

pub mod account;
pub mod endpoints;
pub mod feed;
pub mod location;
pub mod media;
pub mod pagination;

pub use account::Account;
pub use feed::{Feed, TOP_POSTS_LEN};
pub use location::Location;
pub use media::{Dimensions, Media, MediaType, Owner};
