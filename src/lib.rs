//! Attribute projection for identity store users.
//!
//! Converts between a declarative configuration engine's generic attribute records and
//! the typed records of an identity-directory API, and builds a user lookup data source
//! on top of that conversion layer.
//!
//! # Core Components
//!
//! - [`flex`] - flatten/expand functions for addresses, external ids, unique attributes
//!   and alternate identifiers
//! - [`types`] - the identity store API records
//! - [`Document`] - opaque values carried through to the API
//! - [`IdentityStoreClient`] - the client seam, with an in-memory implementation
//! - [`UserDataSource`] - user lookup by id, filter or alternate identifier
//!
//! # Quick Start
//!
//! ```rust
//! use identitystore_flex::flex::{expand_addresses, flatten_addresses};
//! use serde_json::json;
//!
//! let generic = vec![
//!     json!({"country": "US", "primary": true}),
//!     json!("not a record"),
//! ];
//! let addresses = expand_addresses(&generic);
//! assert_eq!(addresses.len(), 1);
//!
//! let flattened = flatten_addresses(&addresses).unwrap();
//! assert_eq!(flattened[0], json!({"country": "US", "primary": true}));
//! assert!(flatten_addresses(&[]).is_none());
//! ```

pub mod attributes;
pub mod client;
pub mod data_source;
pub mod document;
pub mod error;
pub mod flex;
pub mod types;

// Re-export commonly used types for convenience
pub use attributes::AttributeMap;
pub use client::{ClientError, IdentityStoreClient, InMemoryIdentityStore};
pub use data_source::{UserDataSource, UserDataSourceConfig, UserQuery};
pub use document::Document;
pub use error::{FlexError, FlexResult};
pub use flex::{ExpandOptions, ListExpansion, MalformedElementPolicy};
pub use types::{Address, AlternateIdentifier, ExternalId, UniqueAttribute, User};
