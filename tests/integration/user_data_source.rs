//! User lookup scenarios against the in-memory identity store.

use crate::common::fixtures::{self, IDENTITY_STORE_ID};
use crate::common::{args, init_logging};
use identitystore_flex::client::IdentityStoreClient;
use identitystore_flex::types::{AlternateIdentifier, Email, UniqueAttribute};
use identitystore_flex::{
    ClientError, FlexError, InMemoryIdentityStore, UserDataSource, UserDataSourceConfig,
};
use serde_json::{Value, json};

#[tokio::test]
async fn test_basic_lookup_by_user_id() {
    init_logging();
    let (store, user) = fixtures::seeded_store("basic-user").await;
    let data_source = UserDataSource::new(store);

    let state = data_source
        .read(&args(json!({
            "identity_store_id": IDENTITY_STORE_ID,
            "user_id": user.user_id,
        })))
        .await
        .unwrap();

    assert_eq!(state["id"], user.user_id.as_str());
    assert_eq!(state["user_id"], user.user_id.as_str());
    assert_eq!(state["user_name"], "basic-user");
    assert_eq!(state["display_name"], "Acceptance Test");
    assert_eq!(
        state["addresses"][0],
        Value::Object(fixtures::basic_address_record())
    );
    assert_eq!(state["emails"][0]["value"], "basic-user@example.com");
    assert_eq!(state["emails"][0]["primary"], true);
    assert_eq!(state["name"][0]["given_name"], "Acceptance");
    assert!(!state.contains_key("external_ids"));
}

#[tokio::test]
async fn test_filter_by_user_name() {
    init_logging();
    let (store, user) = fixtures::seeded_store("filter-user").await;
    let data_source = UserDataSource::new(store);

    let state = data_source
        .read(&args(json!({
            "identity_store_id": IDENTITY_STORE_ID,
            "filter": [{"attribute_path": "UserName", "attribute_value": "filter-user"}],
        })))
        .await
        .unwrap();

    assert_eq!(state["user_id"], user.user_id.as_str());
    // Arguments survive into the result
    assert_eq!(state["filter"][0]["attribute_path"], "UserName");
}

#[tokio::test]
async fn test_unique_attribute_by_user_name() {
    init_logging();
    let (store, user) = fixtures::seeded_store("unique-user").await;
    let data_source = UserDataSource::new(store);

    let state = data_source
        .read(&args(json!({
            "identity_store_id": IDENTITY_STORE_ID,
            "alternate_identifier": [{
                "unique_attribute": [{
                    "attribute_path": "UserName",
                    "attribute_value": "unique-user"
                }]
            }],
        })))
        .await
        .unwrap();

    assert_eq!(state["user_id"], user.user_id.as_str());
    assert_eq!(state["display_name"], "Acceptance Test");
}

#[tokio::test]
async fn test_unique_attribute_by_email() {
    init_logging();
    let (store, user) = fixtures::seeded_store("email-user").await;
    let data_source = UserDataSource::new(store);

    let state = data_source
        .read(&args(json!({
            "identity_store_id": IDENTITY_STORE_ID,
            "alternate_identifier": [{
                "unique_attribute": [{
                    "attribute_path": "Emails.Value",
                    "attribute_value": "email-user@example.com"
                }]
            }],
        })))
        .await
        .unwrap();

    assert_eq!(state["user_id"], user.user_id.as_str());
}

#[tokio::test]
async fn test_external_id_lookup() {
    init_logging();
    let store = InMemoryIdentityStore::new();
    let user = store
        .create_user(
            IDENTITY_STORE_ID,
            fixtures::base_user("external-user")
                .with_external_id(fixtures::hr_external_id("701984")),
        )
        .await
        .unwrap();
    let data_source = UserDataSource::new(store);

    let state = data_source
        .read(&args(json!({
            "identity_store_id": IDENTITY_STORE_ID,
            "alternate_identifier": [{
                "external_id": [{"id": "701984", "issuer": "hr-system"}]
            }],
        })))
        .await
        .unwrap();

    assert_eq!(state["user_id"], user.user_id.as_str());
    assert_eq!(
        state["external_ids"],
        json!([{"id": "701984", "issuer": "hr-system"}])
    );
}

#[tokio::test]
async fn test_filter_narrowed_by_user_id() {
    init_logging();
    let (store, user) = fixtures::seeded_store("user-id-user").await;
    let data_source = UserDataSource::new(store);

    let state = data_source
        .read(&args(json!({
            "identity_store_id": IDENTITY_STORE_ID,
            "filter": [{"attribute_path": "UserName", "attribute_value": "user-id-user"}],
            "user_id": user.user_id,
        })))
        .await
        .unwrap();

    assert_eq!(state["user_id"], user.user_id.as_str());
}

#[tokio::test]
async fn test_non_existent_user() {
    init_logging();
    let (store, _) = fixtures::seeded_store("present-user").await;
    let data_source = UserDataSource::new(store);

    let result = data_source
        .read(&args(json!({
            "identity_store_id": IDENTITY_STORE_ID,
            "filter": [{"attribute_path": "UserName", "attribute_value": "does-not-exist"}],
        })))
        .await;

    crate::assert_error_message_contains!(result, "no Identity Store User found matching criteria");
}

#[tokio::test]
async fn test_user_id_filter_mismatch() {
    init_logging();
    let (store, first) = fixtures::seeded_store("first-user").await;
    store
        .create_user(IDENTITY_STORE_ID, fixtures::basic_user("second-user"))
        .await
        .unwrap();
    let data_source = UserDataSource::new(store);

    let result = data_source
        .read(&args(json!({
            "identity_store_id": IDENTITY_STORE_ID,
            "filter": [{"attribute_path": "UserName", "attribute_value": "second-user"}],
            "user_id": first.user_id,
        })))
        .await;

    crate::assert_error_matches!(result, FlexError::NotFound { .. });
}

#[tokio::test]
async fn test_external_id_conflicts_with_unique_attribute() {
    init_logging();
    let data_source = UserDataSource::new(InMemoryIdentityStore::new());

    let result = data_source
        .read(&args(json!({
            "identity_store_id": IDENTITY_STORE_ID,
            "alternate_identifier": [{
                "external_id": [{"id": "701984", "issuer": "hr-system"}],
                "unique_attribute": [{"attribute_path": "UserName", "attribute_value": "x"}]
            }],
        })))
        .await;

    crate::assert_error_message_contains!(result, "Invalid combination of arguments");
}

#[tokio::test]
async fn test_alternate_identifier_conflicts_with_filter() {
    init_logging();
    let data_source = UserDataSource::new(InMemoryIdentityStore::new());

    let result = data_source
        .read(&args(json!({
            "identity_store_id": IDENTITY_STORE_ID,
            "alternate_identifier": [{
                "unique_attribute": [{"attribute_path": "UserName", "attribute_value": "x"}]
            }],
            "filter": [{"attribute_path": "UserName", "attribute_value": "x"}],
        })))
        .await;

    crate::assert_error_message_contains!(result, "Conflicting configuration arguments");
}

#[tokio::test]
async fn test_alternate_identifier_conflicts_with_user_id() {
    init_logging();
    let data_source = UserDataSource::new(InMemoryIdentityStore::new());

    let result = data_source
        .read(&args(json!({
            "identity_store_id": IDENTITY_STORE_ID,
            "alternate_identifier": [{
                "external_id": [{"id": "701984", "issuer": "hr-system"}]
            }],
            "user_id": "some-user-id",
        })))
        .await;

    crate::assert_error_message_contains!(result, "Conflicting configuration arguments");
}

#[tokio::test]
async fn test_missing_selector() {
    init_logging();
    let data_source = UserDataSource::new(InMemoryIdentityStore::new());

    let result = data_source
        .read(&args(json!({"identity_store_id": IDENTITY_STORE_ID})))
        .await;

    crate::assert_error_matches!(result, FlexError::InvalidCombination { .. });
}

#[tokio::test]
async fn test_default_identity_store_from_config() {
    init_logging();
    let (store, user) = fixtures::seeded_store("config-user").await;
    let config: UserDataSourceConfig = serde_json::from_value(json!({
        "default_identity_store_id": IDENTITY_STORE_ID
    }))
    .unwrap();
    let data_source = UserDataSource::with_config(store, config);

    let state = data_source
        .read(&args(json!({"user_id": user.user_id})))
        .await
        .unwrap();

    assert_eq!(state["identity_store_id"], IDENTITY_STORE_ID);
}

#[tokio::test]
async fn test_deleted_user_is_not_found() {
    init_logging();
    let (store, user) = fixtures::seeded_store("deleted-user").await;
    assert!(store.delete_user(IDENTITY_STORE_ID, &user.user_id).await);

    let identifier =
        AlternateIdentifier::UniqueAttribute(UniqueAttribute::new("UserName", "deleted-user"));
    assert!(
        store
            .get_user_id(IDENTITY_STORE_ID, &identifier)
            .await
            .unwrap_err()
            .is_not_found()
    );

    let data_source = UserDataSource::new(store);
    let result = data_source
        .read(&args(json!({
            "identity_store_id": IDENTITY_STORE_ID,
            "user_id": user.user_id,
        })))
        .await;
    crate::assert_error_matches!(result, FlexError::NotFound { .. });
}

#[tokio::test]
async fn test_shared_email_is_ambiguous() {
    init_logging();
    let store = InMemoryIdentityStore::new();
    for user_name in ["shared-a", "shared-b"] {
        let mut user = fixtures::basic_user(user_name);
        user.emails = vec![Email::new("team@example.com")];
        store.create_user(IDENTITY_STORE_ID, user).await.unwrap();
    }
    let data_source = UserDataSource::new(store);

    let result = data_source
        .read(&args(json!({
            "identity_store_id": IDENTITY_STORE_ID,
            "alternate_identifier": [{
                "unique_attribute": [{
                    "attribute_path": "Emails.Value",
                    "attribute_value": "team@example.com"
                }]
            }],
        })))
        .await;

    crate::assert_error_matches!(result, FlexError::Client(ClientError::Conflict { .. }));
}
