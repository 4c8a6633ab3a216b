//! Address record of the identity store API.
//!
//! Addresses are attached to users as a list. Every component is optional except the
//! `primary` flag, which the service always reports.

use serde::{Deserialize, Serialize};

/// A user's physical mailing address.
///
/// ## Examples
///
/// ```rust
/// use identitystore_flex::types::Address;
///
/// let address = Address::new(true)
///     .with_street_address("1200 Fourth Ave")
///     .with_locality("Seattle")
///     .with_region("WA")
///     .with_postal_code("98101")
///     .with_country("US");
///
/// assert!(address.is_primary());
/// assert_eq!(address.locality(), Some("Seattle"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub primary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub address_type: Option<String>,
}

impl Address {
    /// Create an Address with no components set.
    pub fn new(primary: bool) -> Self {
        Self {
            primary,
            ..Self::default()
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_formatted(mut self, formatted: impl Into<String>) -> Self {
        self.formatted = Some(formatted.into());
        self
    }

    pub fn with_locality(mut self, locality: impl Into<String>) -> Self {
        self.locality = Some(locality.into());
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_street_address(mut self, street_address: impl Into<String>) -> Self {
        self.street_address = Some(street_address.into());
        self
    }

    pub fn with_type(mut self, address_type: impl Into<String>) -> Self {
        self.address_type = Some(address_type.into());
        self
    }

    /// Get the country.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Get the formatted address.
    pub fn formatted(&self) -> Option<&str> {
        self.formatted.as_deref()
    }

    /// Get the locality.
    pub fn locality(&self) -> Option<&str> {
        self.locality.as_deref()
    }

    /// Get the postal code.
    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    /// Get the region.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Get the street address.
    pub fn street_address(&self) -> Option<&str> {
        self.street_address.as_deref()
    }

    /// Get the address type.
    pub fn address_type(&self) -> Option<&str> {
        self.address_type.as_deref()
    }

    /// Whether the identity store marks this address as primary.
    pub fn is_primary(&self) -> bool {
        self.primary
    }
}
