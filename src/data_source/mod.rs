//! User lookup data source.
//!
//! Reads a single user from an identity store, selected in one of three ways:
//!
//! - `user_id` alone;
//! - a `filter` on an attribute path, optionally narrowed by `user_id`;
//! - an `alternate_identifier`, either an `external_id` or a `unique_attribute`.
//!
//! ```rust
//! use identitystore_flex::client::InMemoryIdentityStore;
//! use identitystore_flex::data_source::UserDataSource;
//! use identitystore_flex::types::User;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryIdentityStore::new();
//! store.create_user("d-1234567890", User::new("jdoe", "John Doe")).await?;
//!
//! let data_source = UserDataSource::new(store);
//! let args = json!({
//!     "identity_store_id": "d-1234567890",
//!     "alternate_identifier": [{
//!         "unique_attribute": [{"attribute_path": "UserName", "attribute_value": "jdoe"}]
//!     }]
//! });
//! let state = data_source.read(args.as_object().unwrap()).await?;
//! assert_eq!(state["display_name"], "John Doe");
//! # Ok(())
//! # }
//! ```

mod config;
mod query;
mod user;

pub use config::{DEFAULT_RESOURCE_LABEL, UserDataSourceBuilder, UserDataSourceConfig};
pub use query::{UserQuery, UserSelector};
pub use user::UserDataSource;
