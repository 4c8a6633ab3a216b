use crate::attributes::AttributeMap;
use crate::client::{ClientError, IdentityStoreClient};
use crate::data_source::{UserDataSourceBuilder, UserDataSourceConfig, UserQuery, UserSelector};
use crate::error::{FlexError, FlexResult};
use crate::flex::{USER_ATTRIBUTE_KEYS, flatten_user};
use crate::types::User;
use log::{debug, trace};

/// Looks up a single user in an identity store.
///
/// Arguments and results are generic attribute records: `read` takes the configured
/// arguments and returns them merged with the attributes of the user that was found.
pub struct UserDataSource<C> {
    client: C,
    config: UserDataSourceConfig,
}

impl<C: IdentityStoreClient> UserDataSource<C> {
    /// Create a data source with default configuration.
    pub fn new(client: C) -> Self {
        Self::with_config(client, UserDataSourceConfig::default())
    }

    pub fn with_config(client: C, config: UserDataSourceConfig) -> Self {
        Self { client, config }
    }

    pub fn builder(client: C) -> UserDataSourceBuilder<C> {
        UserDataSourceBuilder::new(client)
    }

    pub fn config(&self) -> &UserDataSourceConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Read the user selected by `args`.
    ///
    /// # Errors
    ///
    /// * argument validation errors from [`UserQuery::from_attributes`]
    /// * [`FlexError::NotFound`] when no user matches
    /// * [`FlexError::MultipleResults`] when a filter matches more than one user
    /// * [`FlexError::Client`] for any other client failure
    pub async fn read(&self, args: &AttributeMap) -> FlexResult<AttributeMap> {
        let query = UserQuery::from_attributes(args, &self.config)?;
        let user = self.find_user(&query).await?;

        let flattened = flatten_user(&user);
        let mut state = args.clone();
        // Attributes the user does not have must not linger from the arguments
        for key in USER_ATTRIBUTE_KEYS {
            if !flattened.contains_key(*key) {
                state.remove(*key);
            }
        }
        state.extend(flattened);

        debug!(
            "Read {} {} from identity store {}",
            self.config.resource_label, user.user_id, query.identity_store_id
        );
        Ok(state)
    }

    /// Resolve a validated query to a user.
    pub async fn find_user(&self, query: &UserQuery) -> FlexResult<User> {
        let identity_store_id = query.identity_store_id.as_str();

        match &query.selector {
            UserSelector::AlternateIdentifier(identifier) => {
                trace!("Looking up user by alternate identifier");
                let user_id = self
                    .client
                    .get_user_id(identity_store_id, identifier)
                    .await
                    .map_err(|e| self.client_error(e))?;
                self.describe(identity_store_id, &user_id).await
            }
            UserSelector::Filter { filter, user_id } => {
                trace!(
                    "Looking up user by filter {} = {}",
                    filter.attribute_path, filter.attribute_value
                );
                let users = self
                    .client
                    .list_users(identity_store_id, std::slice::from_ref(filter))
                    .await
                    .map_err(|e| self.client_error(e))?;

                let mut matched: Vec<User> = users
                    .into_iter()
                    .filter(|u| user_id.as_deref().is_none_or(|id| u.user_id == id))
                    .collect();

                match matched.len() {
                    0 => Err(FlexError::not_found(&self.config.resource_label)),
                    1 => Ok(matched.remove(0)),
                    count => Err(FlexError::MultipleResults {
                        resource: self.config.resource_label.clone(),
                        count,
                    }),
                }
            }
            UserSelector::UserId(user_id) => {
                trace!("Looking up user by id {}", user_id);
                self.describe(identity_store_id, user_id).await
            }
        }
    }

    async fn describe(&self, identity_store_id: &str, user_id: &str) -> FlexResult<User> {
        self.client
            .describe_user(identity_store_id, user_id)
            .await
            .map_err(|e| self.client_error(e))
    }

    fn client_error(&self, error: ClientError) -> FlexError {
        if error.is_not_found() {
            FlexError::not_found(&self.config.resource_label)
        } else {
            error.into()
        }
    }
}
