use crate::attributes::{AttributeMap, insert_optional, optional_string};
use crate::error::FlexResult;
use crate::flex::{ExpandOptions, ListExpansion, expand_list, flatten_list};
use crate::types::ExternalId;
use serde_json::Value;

/// Flatten an external identifier into a generic record with keys `id` and `issuer`.
pub fn flatten_external_id(external_id: Option<&ExternalId>) -> Option<AttributeMap> {
    let external_id = external_id?;
    let mut m = AttributeMap::new();

    insert_optional(&mut m, "id", external_id.id());
    insert_optional(&mut m, "issuer", external_id.issuer());

    Some(m)
}

/// Expand a generic record into an external identifier.
pub fn expand_external_id(map: Option<&AttributeMap>) -> Option<ExternalId> {
    map.map(external_id_from_map)
}

fn external_id_from_map(m: &AttributeMap) -> ExternalId {
    ExternalId {
        id: optional_string(m, "id"),
        issuer: optional_string(m, "issuer"),
    }
}

/// Flatten a list of external identifiers. An empty list flattens to `None`.
pub fn flatten_external_ids(external_ids: &[ExternalId]) -> Option<Vec<Value>> {
    flatten_list(external_ids, |e| flatten_external_id(Some(e)))
}

/// Expand a list of generic records into external identifiers, dropping malformed elements.
pub fn expand_external_ids(list: &[Value]) -> Vec<ExternalId> {
    expand_external_ids_with(list, &ExpandOptions::default())
        .map(ListExpansion::into_items)
        .unwrap_or_default()
}

/// Expand a list of generic records into external identifiers under the given options.
pub fn expand_external_ids_with(
    list: &[Value],
    options: &ExpandOptions,
) -> FlexResult<ListExpansion<ExternalId>> {
    expand_list("external_ids", list, options, |m| {
        Ok(external_id_from_map(m))
    })
}
