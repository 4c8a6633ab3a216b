use crate::attributes::{AttributeMap, insert_optional, optional_string, single_block};
use crate::document::Document;
use crate::error::FlexResult;
use crate::flex::{expand_external_id, flatten_external_id};
use crate::types::{AlternateIdentifier, UniqueAttribute};
use log::trace;
use serde_json::Value;

/// Expand a generic record into a unique attribute selector.
///
/// `attribute_value` is carried through untouched as a lazily encoded [`Document`], so
/// numbers, lists and nested records survive as well as strings. A null value reads as
/// unset.
pub fn expand_unique_attribute(map: Option<&AttributeMap>) -> Option<UniqueAttribute> {
    let m = map?;

    let attribute_value = match m.get("attribute_value") {
        None | Some(Value::Null) => None,
        Some(value) => Some(Document::Lazy(value.clone())),
    };

    Some(UniqueAttribute {
        attribute_path: optional_string(m, "attribute_path"),
        attribute_value,
    })
}

/// Flatten a unique attribute selector, decoding its value document.
pub fn flatten_unique_attribute(
    attribute: Option<&UniqueAttribute>,
) -> FlexResult<Option<AttributeMap>> {
    let Some(attribute) = attribute else {
        return Ok(None);
    };
    let mut m = AttributeMap::new();

    insert_optional(&mut m, "attribute_path", attribute.attribute_path());
    if let Some(document) = attribute.attribute_value() {
        m.insert("attribute_value".to_string(), document.decode()?);
    }

    Ok(Some(m))
}

/// Expand a generic `alternate_identifier` block.
///
/// `external_id` is examined before `unique_attribute` and the first non-empty block
/// wins. Exclusivity between the two is enforced where arguments are validated, not
/// here. Neither block set yields `None`.
pub fn expand_alternate_identifier(
    map: Option<&AttributeMap>,
) -> FlexResult<Option<AlternateIdentifier>> {
    let Some(m) = map else {
        return Ok(None);
    };

    if let Some(block) = single_block(m, "external_id")? {
        trace!("Alternate identifier selected by external id");
        return Ok(expand_external_id(Some(block)).map(AlternateIdentifier::ExternalId));
    }

    if let Some(block) = single_block(m, "unique_attribute")? {
        trace!("Alternate identifier selected by unique attribute");
        return Ok(expand_unique_attribute(Some(block)).map(AlternateIdentifier::UniqueAttribute));
    }

    Ok(None)
}

/// Flatten an alternate identifier into a block holding exactly one of `external_id` or
/// `unique_attribute`, each as a single-element list.
pub fn flatten_alternate_identifier(
    identifier: Option<&AlternateIdentifier>,
) -> FlexResult<Option<AttributeMap>> {
    let Some(identifier) = identifier else {
        return Ok(None);
    };
    let mut m = AttributeMap::new();

    match identifier {
        AlternateIdentifier::ExternalId(external_id) => {
            if let Some(block) = flatten_external_id(Some(external_id)) {
                m.insert("external_id".to_string(), Value::Array(vec![Value::Object(block)]));
            }
        }
        AlternateIdentifier::UniqueAttribute(attribute) => {
            if let Some(block) = flatten_unique_attribute(Some(attribute))? {
                m.insert(
                    "unique_attribute".to_string(),
                    Value::Array(vec![Value::Object(block)]),
                );
            }
        }
    }

    Ok(Some(m))
}
