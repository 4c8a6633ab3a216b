//! Property-Based Testing for the flatten/expand functions
//!
//! Generated records are restricted to non-empty strings for optional components, since
//! an empty string reads back as unset.

use identitystore_flex::flex::{
    expand_address, expand_addresses, expand_addresses_with, expand_alternate_identifier,
    expand_external_ids, expand_external_ids_with, flatten_address, flatten_addresses,
    flatten_alternate_identifier, flatten_external_ids,
};
use identitystore_flex::types::{Address, AlternateIdentifier, ExternalId, UniqueAttribute};
use identitystore_flex::{ExpandOptions, FlexError};
use proptest::prelude::*;
use serde_json::{Value, json};

fn component_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-zA-Z0-9 ]{1,20}")
}

/// Strategy for list elements that are not records
fn junk_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<String>().prop_map(Value::String),
        any::<i32>().prop_map(|n| json!(n)),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Null),
        Just(json!(["nested"])),
    ]
}

/// Strategy for unique attribute values. Null is excluded, it reads as unset.
fn document_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-z0-9@.]{1,30}".prop_map(Value::String),
        any::<i64>().prop_map(|n| json!(n)),
        any::<bool>().prop_map(Value::Bool),
        Just(json!({"key": "value"})),
        Just(json!(["item1", "item2"])),
    ]
}

prop_compose! {
    fn address_strategy()
        (country in component_strategy(),
         formatted in component_strategy(),
         locality in component_strategy(),
         postal_code in component_strategy(),
         primary in any::<bool>(),
         region in component_strategy(),
         street_address in component_strategy(),
         address_type in component_strategy())
        -> Address {
        Address {
            country,
            formatted,
            locality,
            postal_code,
            primary,
            region,
            street_address,
            address_type,
        }
    }
}

prop_compose! {
    fn external_id_strategy()
        (id in component_strategy(), issuer in component_strategy())
        -> ExternalId {
        ExternalId { id, issuer }
    }
}

proptest! {
    #[test]
    fn test_address_round_trip(address in address_strategy()) {
        let flattened = flatten_address(Some(&address)).unwrap();
        prop_assert_eq!(flattened.get("primary"), Some(&Value::Bool(address.primary)));

        let expanded = expand_address(Some(&flattened)).unwrap();
        prop_assert_eq!(expanded, Some(address));
    }

    #[test]
    fn test_address_list_round_trip(addresses in prop::collection::vec(address_strategy(), 0..5)) {
        match flatten_addresses(&addresses) {
            None => prop_assert!(addresses.is_empty()),
            Some(list) => {
                prop_assert_eq!(list.len(), addresses.len());
                prop_assert_eq!(expand_addresses(&list), addresses);
            }
        }
    }

    #[test]
    fn test_external_id_list_round_trip(
        external_ids in prop::collection::vec(external_id_strategy(), 1..5)
    ) {
        let list = flatten_external_ids(&external_ids).unwrap();
        prop_assert_eq!(expand_external_ids(&list), external_ids);
    }

    #[test]
    fn test_malformed_elements_are_skipped(
        addresses in prop::collection::vec(address_strategy(), 1..4),
        junk in prop::collection::vec(junk_strategy(), 1..4)
    ) {
        let mut list = flatten_addresses(&addresses).unwrap();
        list.extend(junk.iter().cloned());

        let expansion = expand_addresses_with(&list, &ExpandOptions::default()).unwrap();
        prop_assert_eq!(expansion.skipped, junk.len());
        prop_assert_eq!(expansion.items, addresses.clone());

        let strict = expand_addresses_with(&list, &ExpandOptions::strict());
        let is_malformed = matches!(
            strict,
            Err(FlexError::MalformedElement { index, .. }) if index == addresses.len()
        );
        prop_assert!(is_malformed);
    }

    #[test]
    fn test_unique_attribute_round_trip(
        path in "[A-Za-z.]{1,20}",
        value in document_value_strategy()
    ) {
        let identifier = AlternateIdentifier::UniqueAttribute(UniqueAttribute::new(path, value));

        let flattened = flatten_alternate_identifier(Some(&identifier)).unwrap().unwrap();
        prop_assert!(!flattened.contains_key("external_id"));

        let expanded = expand_alternate_identifier(Some(&flattened)).unwrap();
        prop_assert_eq!(expanded, Some(identifier));
    }
}

#[test]
fn test_missing_primary_is_an_error() {
    let record = json!({"country": "US"});
    assert!(matches!(
        expand_address(record.as_object()),
        Err(FlexError::MissingRequiredAttribute { .. })
    ));

    let record = json!({"country": "US", "primary": "yes"});
    assert!(matches!(
        expand_address(record.as_object()),
        Err(FlexError::InvalidAttributeType { .. })
    ));
}

#[test]
fn test_external_id_precedes_unique_attribute() {
    let block = json!({
        "external_id": [{"id": "701984", "issuer": "hr-system"}],
        "unique_attribute": [{"attribute_path": "UserName", "attribute_value": "jdoe"}]
    });

    let identifier = expand_alternate_identifier(block.as_object()).unwrap().unwrap();
    assert_eq!(
        identifier.as_external_id(),
        Some(&ExternalId::new("701984", "hr-system"))
    );
}

#[test]
fn test_strict_external_ids_report_index() {
    let list = vec![json!({"id": "1", "issuer": "a"}), json!("bare")];

    assert_eq!(expand_external_ids(&list).len(), 1);
    match expand_external_ids_with(&list, &ExpandOptions::strict()) {
        Err(FlexError::MalformedElement { attribute, index, .. }) => {
            assert_eq!(attribute, "external_ids");
            assert_eq!(index, 1);
        }
        other => panic!("expected malformed element error, got {other:?}"),
    }
}
