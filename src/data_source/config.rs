//! Configuration and builder for the user data source.

use crate::client::IdentityStoreClient;
use crate::data_source::UserDataSource;
use serde::{Deserialize, Serialize};

/// Label used in "not found" diagnostics unless configured otherwise.
pub const DEFAULT_RESOURCE_LABEL: &str = "Identity Store User";

/// Settings shared by every read of a user data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDataSourceConfig {
    /// Identity store used when the arguments do not name one.
    pub default_identity_store_id: Option<String>,

    /// How the looked-up resource is named in error messages.
    pub resource_label: String,
}

impl Default for UserDataSourceConfig {
    fn default() -> Self {
        Self {
            default_identity_store_id: None,
            resource_label: DEFAULT_RESOURCE_LABEL.to_string(),
        }
    }
}

/// Fluent builder for [`UserDataSource`].
///
/// ```rust
/// use identitystore_flex::client::InMemoryIdentityStore;
/// use identitystore_flex::data_source::UserDataSource;
///
/// let data_source = UserDataSource::builder(InMemoryIdentityStore::new())
///     .with_default_identity_store_id("d-1234567890")
///     .build();
/// assert_eq!(
///     data_source.config().default_identity_store_id.as_deref(),
///     Some("d-1234567890")
/// );
/// ```
pub struct UserDataSourceBuilder<C> {
    client: C,
    config: UserDataSourceConfig,
}

impl<C: IdentityStoreClient> UserDataSourceBuilder<C> {
    pub(crate) fn new(client: C) -> Self {
        Self {
            client,
            config: UserDataSourceConfig::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: UserDataSourceConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the identity store used when the arguments do not name one.
    pub fn with_default_identity_store_id(mut self, identity_store_id: impl Into<String>) -> Self {
        self.config.default_identity_store_id = Some(identity_store_id.into());
        self
    }

    /// Set the resource label used in diagnostics.
    pub fn with_resource_label(mut self, label: impl Into<String>) -> Self {
        self.config.resource_label = label.into();
        self
    }

    pub fn build(self) -> UserDataSource<C> {
        UserDataSource::with_config(self.client, self.config)
    }
}
