use crate::attributes::{AttributeMap, insert_optional, optional_string, required_bool};
use crate::error::FlexResult;
use crate::flex::{ExpandOptions, ListExpansion, expand_list, flatten_list};
use crate::types::Address;
use serde_json::Value;

/// Flatten an address into a generic record.
///
/// Optional components appear only when set. `primary` is always present.
pub fn flatten_address(address: Option<&Address>) -> Option<AttributeMap> {
    let address = address?;
    let mut m = AttributeMap::new();

    insert_optional(&mut m, "country", address.country());
    insert_optional(&mut m, "formatted", address.formatted());
    insert_optional(&mut m, "locality", address.locality());
    insert_optional(&mut m, "postal_code", address.postal_code());
    m.insert("primary".to_string(), Value::Bool(address.primary));
    insert_optional(&mut m, "region", address.region());
    insert_optional(&mut m, "street_address", address.street_address());
    insert_optional(&mut m, "type", address.address_type());

    Some(m)
}

/// Expand a generic record into an address.
///
/// Empty strings read as unset components. A missing or non-boolean `primary` is an
/// error: the configuration schema requires it, so its absence means the record did not
/// come from a validated configuration.
pub fn expand_address(map: Option<&AttributeMap>) -> FlexResult<Option<Address>> {
    map.map(address_from_map).transpose()
}

fn address_from_map(m: &AttributeMap) -> FlexResult<Address> {
    Ok(Address {
        country: optional_string(m, "country"),
        formatted: optional_string(m, "formatted"),
        locality: optional_string(m, "locality"),
        postal_code: optional_string(m, "postal_code"),
        primary: required_bool(m, "primary")?,
        region: optional_string(m, "region"),
        street_address: optional_string(m, "street_address"),
        address_type: optional_string(m, "type"),
    })
}

/// Flatten a list of addresses. An empty list flattens to `None`.
pub fn flatten_addresses(addresses: &[Address]) -> Option<Vec<Value>> {
    flatten_list(addresses, |a| flatten_address(Some(a)))
}

/// Expand a list of generic records into addresses, dropping malformed elements.
pub fn expand_addresses(list: &[Value]) -> Vec<Address> {
    expand_addresses_with(list, &ExpandOptions::default())
        .map(ListExpansion::into_items)
        .unwrap_or_default()
}

/// Expand a list of generic records into addresses under the given options.
pub fn expand_addresses_with(
    list: &[Value],
    options: &ExpandOptions,
) -> FlexResult<ListExpansion<Address>> {
    expand_list("addresses", list, options, address_from_map)
}
