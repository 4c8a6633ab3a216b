use crate::attributes::{AttributeMap, insert_optional};
use crate::flex::{flatten_addresses, flatten_external_ids, flatten_list};
use crate::types::{Email, Name, User};
use serde_json::Value;

/// Every key [`flatten_user`] can emit.
pub const USER_ATTRIBUTE_KEYS: &[&str] = &[
    "id",
    "user_id",
    "identity_store_id",
    "user_name",
    "display_name",
    "nickname",
    "profile_url",
    "title",
    "user_type",
    "locale",
    "preferred_language",
    "timezone",
    "addresses",
    "emails",
    "external_ids",
    "name",
];

/// Flatten a user into the attributes a user lookup reports.
///
/// Scalar attributes appear only when set; list and block attributes only when
/// non-empty. `id` duplicates `user_id`.
pub fn flatten_user(user: &User) -> AttributeMap {
    let mut m = AttributeMap::new();

    m.insert("id".to_string(), Value::String(user.user_id.clone()));
    m.insert("user_id".to_string(), Value::String(user.user_id.clone()));
    m.insert(
        "identity_store_id".to_string(),
        Value::String(user.identity_store_id.clone()),
    );
    insert_optional(&mut m, "user_name", user.user_name());
    insert_optional(&mut m, "display_name", user.display_name());
    insert_optional(&mut m, "nickname", user.nick_name.as_deref());
    insert_optional(&mut m, "profile_url", user.profile_url.as_deref());
    insert_optional(&mut m, "title", user.title.as_deref());
    insert_optional(&mut m, "user_type", user.user_type.as_deref());
    insert_optional(&mut m, "locale", user.locale.as_deref());
    insert_optional(&mut m, "preferred_language", user.preferred_language.as_deref());
    insert_optional(&mut m, "timezone", user.timezone.as_deref());

    let blocks = [
        ("addresses", flatten_addresses(&user.addresses)),
        ("emails", flatten_emails(&user.emails)),
        ("external_ids", flatten_external_ids(&user.external_ids)),
        ("name", flatten_name(user.name.as_ref())),
    ];
    for (key, block) in blocks {
        if let Some(list) = block {
            m.insert(key.to_string(), Value::Array(list));
        }
    }

    m
}

/// Flatten an email into a generic record. `primary` is always present.
pub fn flatten_email(email: Option<&Email>) -> Option<AttributeMap> {
    let email = email?;
    let mut m = AttributeMap::new();

    m.insert("primary".to_string(), Value::Bool(email.primary));
    insert_optional(&mut m, "type", email.email_type.as_deref());
    insert_optional(&mut m, "value", email.value());

    Some(m)
}

/// Flatten a list of emails. An empty list flattens to `None`.
pub fn flatten_emails(emails: &[Email]) -> Option<Vec<Value>> {
    flatten_list(emails, |e| flatten_email(Some(e)))
}

/// Flatten a name into a single-element block list.
pub fn flatten_name(name: Option<&Name>) -> Option<Vec<Value>> {
    let name = name?;
    let mut m = AttributeMap::new();

    insert_optional(&mut m, "family_name", name.family_name.as_deref());
    insert_optional(&mut m, "formatted", name.formatted.as_deref());
    insert_optional(&mut m, "given_name", name.given_name.as_deref());
    insert_optional(&mut m, "honorific_prefix", name.honorific_prefix.as_deref());
    insert_optional(&mut m, "honorific_suffix", name.honorific_suffix.as_deref());
    insert_optional(&mut m, "middle_name", name.middle_name.as_deref());

    Some(vec![Value::Object(m)])
}
