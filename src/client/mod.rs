//! Identity store client abstraction.
//!
//! The `IdentityStoreClient` trait is the seam between the user data source and the
//! remote identity-directory API. It covers exactly the three calls a user lookup needs;
//! transport, authentication and retries belong to the implementation.
//!
//! # Example Usage
//!
//! ```rust
//! use identitystore_flex::client::{IdentityStoreClient, InMemoryIdentityStore};
//! use identitystore_flex::types::{AlternateIdentifier, UniqueAttribute, User};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryIdentityStore::new();
//! let created = store.create_user("d-1234567890", User::new("jdoe", "John Doe")).await?;
//!
//! let identifier = AlternateIdentifier::UniqueAttribute(UniqueAttribute::new("UserName", "jdoe"));
//! let user_id = store.get_user_id("d-1234567890", &identifier).await?;
//! assert_eq!(user_id, created.user_id);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod in_memory;

pub use errors::ClientError;
pub use in_memory::{InMemoryIdentityStore, InMemoryIdentityStoreStats};

use crate::types::{AlternateIdentifier, Filter, User};
use std::future::Future;

/// Read access to users in an identity store.
pub trait IdentityStoreClient: Send + Sync {
    /// Resolve an alternate identifier to a user id.
    ///
    /// # Returns
    /// The id of the single user selected by `identifier`,
    /// [`ClientError::ResourceNotFound`] when no user matches, or
    /// [`ClientError::Conflict`] when several do.
    fn get_user_id(
        &self,
        identity_store_id: &str,
        identifier: &AlternateIdentifier,
    ) -> impl Future<Output = Result<String, ClientError>> + Send;

    /// Fetch a user by id.
    fn describe_user(
        &self,
        identity_store_id: &str,
        user_id: &str,
    ) -> impl Future<Output = Result<User, ClientError>> + Send;

    /// List the users matching every filter.
    ///
    /// # Behavior
    /// - An empty filter slice lists every user in the store
    /// - Results are ordered by user id
    /// - No match is an empty vector, not an error
    fn list_users(
        &self,
        identity_store_id: &str,
        filters: &[Filter],
    ) -> impl Future<Output = Result<Vec<User>, ClientError>> + Send;
}
