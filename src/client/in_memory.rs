//! In-memory identity store.
//!
//! A thread-safe implementation of [`IdentityStoreClient`] backed by nested HashMaps
//! behind a tokio `RwLock`: `identity_store_id` → `user_id` → `User`. Intended for
//! tests and local development.
//!
//! Supported attribute paths for unique attribute lookups and filters (matched
//! case-insensitively):
//!
//! * `UserName`
//! * `DisplayName`
//! * `Emails.Value`
//! * `ExternalIds.Id`
//!
//! Only `UserName` is kept unique on create. An alternate identifier that matches more
//! than one user resolves to [`ClientError::Conflict`].

use crate::client::{ClientError, IdentityStoreClient};
use crate::types::{AlternateIdentifier, Filter, User};
use log::{debug, trace};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Thread-safe in-memory identity store.
#[derive(Clone)]
pub struct InMemoryIdentityStore {
    // Structure: identity_store_id -> user_id -> user
    data: Arc<RwLock<HashMap<String, HashMap<String, User>>>>,
}

/// Store statistics for debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryIdentityStoreStats {
    pub identity_store_count: usize,
    pub user_count: usize,
}

impl InMemoryIdentityStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store a new user and return it with its ids assigned.
    ///
    /// The user id is a fresh UUID. User names are unique within an identity store.
    pub async fn create_user(
        &self,
        identity_store_id: &str,
        mut user: User,
    ) -> Result<User, ClientError> {
        let Some(user_name) = user.user_name().map(str::to_string) else {
            return Err(ClientError::validation("UserName is required"));
        };

        let mut data_guard = self.data.write().await;
        let users = data_guard
            .entry(identity_store_id.to_string())
            .or_insert_with(HashMap::new);

        if users.values().any(|u| u.user_name() == Some(user_name.as_str())) {
            return Err(ClientError::conflict(format!(
                "Duplicate UserName '{}' in identity store {}",
                user_name, identity_store_id
            )));
        }

        user.identity_store_id = identity_store_id.to_string();
        user.user_id = Uuid::new_v4().to_string();
        users.insert(user.user_id.clone(), user.clone());

        debug!(
            "Created user {} ({}) in identity store {}",
            user.user_id, user_name, identity_store_id
        );
        Ok(user)
    }

    /// Delete a user. Returns whether it existed.
    pub async fn delete_user(&self, identity_store_id: &str, user_id: &str) -> bool {
        let mut data_guard = self.data.write().await;
        data_guard
            .get_mut(identity_store_id)
            .and_then(|users| users.remove(user_id))
            .is_some()
    }

    /// Get store statistics.
    pub async fn stats(&self) -> InMemoryIdentityStoreStats {
        let data_guard = self.data.read().await;
        InMemoryIdentityStoreStats {
            identity_store_count: data_guard.len(),
            user_count: data_guard.values().map(HashMap::len).sum(),
        }
    }

    /// Clear all data (useful for testing).
    pub async fn clear(&self) {
        let mut data_guard = self.data.write().await;
        data_guard.clear();
    }

    /// Collect the values a user holds at `attribute_path`.
    fn attribute_values<'a>(
        user: &'a User,
        attribute_path: &str,
    ) -> Result<Vec<&'a str>, ClientError> {
        let values: Vec<&str> = match attribute_path.to_ascii_lowercase().as_str() {
            "username" => user.user_name().into_iter().collect(),
            "displayname" => user.display_name().into_iter().collect(),
            "emails.value" => user.emails.iter().filter_map(|e| e.value()).collect(),
            "externalids.id" => user.external_ids.iter().filter_map(|e| e.id()).collect(),
            _ => {
                return Err(ClientError::validation(format!(
                    "Unsupported attribute path '{}'",
                    attribute_path
                )));
            }
        };
        Ok(values)
    }

    fn matches(user: &User, attribute_path: &str, value: &str) -> Result<bool, ClientError> {
        Ok(Self::attribute_values(user, attribute_path)?.contains(&value))
    }
}

impl Default for InMemoryIdentityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityStoreClient for InMemoryIdentityStore {
    async fn get_user_id(
        &self,
        identity_store_id: &str,
        identifier: &AlternateIdentifier,
    ) -> Result<String, ClientError> {
        let data_guard = self.data.read().await;
        let users: Vec<&User> = data_guard
            .get(identity_store_id)
            .map(|users| users.values().collect())
            .unwrap_or_default();

        let matched: Vec<&User> = match identifier {
            AlternateIdentifier::ExternalId(external_id) => {
                if external_id.id().is_none() || external_id.issuer().is_none() {
                    return Err(ClientError::validation(
                        "ExternalId requires both Id and Issuer",
                    ));
                }
                trace!("Resolving user by external id {}", external_id);
                users
                    .into_iter()
                    .filter(|u| u.external_ids.iter().any(|e| e.matches(external_id)))
                    .collect()
            }
            AlternateIdentifier::UniqueAttribute(attribute) => {
                let path = attribute
                    .attribute_path()
                    .ok_or_else(|| ClientError::validation("AttributePath is required"))?;
                let document = attribute
                    .attribute_value()
                    .ok_or_else(|| ClientError::validation("AttributeValue is required"))?;
                let value = match document.decode() {
                    Ok(Value::String(s)) => s,
                    Ok(other) => {
                        return Err(ClientError::validation(format!(
                            "AttributeValue for '{}' must be a string, got {}",
                            path, other
                        )));
                    }
                    Err(e) => return Err(ClientError::validation(e.to_string())),
                };
                trace!("Resolving user by {} = {}", path, value);

                let mut matched = Vec::new();
                for user in users {
                    if Self::matches(user, path, &value)? {
                        matched.push(user);
                    }
                }
                matched
            }
        };

        match matched.as_slice() {
            [] => Err(ClientError::not_found("User", format!("{:?}", identifier))),
            [user] => Ok(user.user_id.clone()),
            _ => Err(ClientError::conflict(format!(
                "{} users match the alternate identifier in identity store {}",
                matched.len(),
                identity_store_id
            ))),
        }
    }

    async fn describe_user(
        &self,
        identity_store_id: &str,
        user_id: &str,
    ) -> Result<User, ClientError> {
        let data_guard = self.data.read().await;

        data_guard
            .get(identity_store_id)
            .and_then(|users| users.get(user_id))
            .cloned()
            .ok_or_else(|| ClientError::not_found("User", user_id))
    }

    async fn list_users(
        &self,
        identity_store_id: &str,
        filters: &[Filter],
    ) -> Result<Vec<User>, ClientError> {
        let data_guard = self.data.read().await;
        let Some(users) = data_guard.get(identity_store_id) else {
            return Ok(Vec::new());
        };

        let mut matched = Vec::new();
        for user in users.values() {
            let mut keep = true;
            for filter in filters {
                if !Self::matches(user, &filter.attribute_path, &filter.attribute_value)? {
                    keep = false;
                    break;
                }
            }
            if keep {
                matched.push(user.clone());
            }
        }

        matched.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        debug!(
            "Listed {} users in identity store {} with {} filters",
            matched.len(),
            identity_store_id,
            filters.len()
        );
        Ok(matched)
    }
}
