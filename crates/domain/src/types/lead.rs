//! CRM lead record types
//!
//! `LeadRecord` serializes with Salesforce field names and is the only shape
//! ever sent to the CRM's Lead collection endpoint. A record is constructed
//! exclusively by the field mapper after full required-field validation, so
//! a value of this type is always complete for its form variant.

use serde::{Deserialize, Serialize};

/// Fixed `LeadSource` value stamped onto every outbound record.
pub const WEBSITE_LEAD_SOURCE: &str = "Website";

/// Fixed `RecordType.Name` value stamped onto every outbound record,
/// regardless of form variant.
pub const DEALER_QUALIFICATION_RECORD_TYPE: &str = "Dealer Qualification";

/// Reference to a Salesforce record type by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTypeRef {
    #[serde(rename = "Name")]
    pub name: String,
}

impl RecordTypeRef {
    /// The record type used for every website lead.
    #[must_use]
    pub fn dealer_qualification() -> Self {
        Self { name: DEALER_QUALIFICATION_RECORD_TYPE.to_string() }
    }
}

/// Outbound CRM lead record.
///
/// The three list-derived fields are optional so that each form variant only
/// serializes the fields it owns: the general lead form carries
/// `Interested_Products__c`, the become-a-dealer form carries
/// `Products_Interested_in_Carrying__c` and `Current_Brands_Carried__c`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Street")]
    pub street: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "PostalCode")]
    pub postal_code: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "LeadSource")]
    pub lead_source: String,
    #[serde(rename = "RecordType")]
    pub record_type: RecordTypeRef,
    #[serde(rename = "Interested_Products__c", skip_serializing_if = "Option::is_none")]
    pub interested_products: Option<String>,
    #[serde(
        rename = "Products_Interested_in_Carrying__c",
        skip_serializing_if = "Option::is_none"
    )]
    pub products_carrying: Option<String>,
    #[serde(rename = "Current_Brands_Carried__c", skip_serializing_if = "Option::is_none")]
    pub brands_carried: Option<String>,
}

impl LeadRecord {
    /// Create a record with the five identity fields set and everything else
    /// at its default: empty address fields, fixed source and record type,
    /// no list-derived fields.
    #[must_use]
    pub fn new(
        email: String,
        phone: String,
        first_name: String,
        last_name: String,
        company: String,
    ) -> Self {
        Self {
            email,
            phone,
            first_name,
            last_name,
            company,
            street: String::new(),
            city: String::new(),
            country: String::new(),
            postal_code: String::new(),
            state: String::new(),
            lead_source: WEBSITE_LEAD_SOURCE.to_string(),
            record_type: RecordTypeRef::dealer_qualification(),
            interested_products: None,
            products_carrying: None,
            brands_carried: None,
        }
    }
}
