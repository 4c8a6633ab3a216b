//! Records of the identity store API.
//!
//! These mirror the service's own schema, including its optional-versus-required field
//! semantics and its PascalCase JSON member names. They carry no validation beyond what
//! the types themselves express; the service is the authority on what it accepts.

mod address;
mod external_id;
mod unique_attribute;
mod user;

pub use address::Address;
pub use external_id::ExternalId;
pub use unique_attribute::{AlternateIdentifier, UniqueAttribute};
pub use user::{Email, Filter, Name, User};
