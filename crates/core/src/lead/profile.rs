//! Form-variant validation profiles
//!
//! Each public form maps to one profile: an ordered required-field list and
//! the list fields that feed the variant's semicolon-joined CRM fields. The
//! mapping logic is shared; only the profile differs between endpoints.

use leadbridge_domain::LeadRecord;

/// How a source list field lands on the outbound record.
#[derive(Clone, Copy)]
pub(crate) struct ListField {
    /// Key on the inbound request body.
    pub source: &'static str,
    /// Writes the joined value onto the record.
    pub assign: fn(&mut LeadRecord, String),
}

const GENERAL_REQUIRED: &[&str] = &["email", "phone", "firstname", "lastname", "business_name"];

// The dealer form requires the identity fields plus the address and list
// fields, checked in this order.
const DEALER_REQUIRED: &[&str] = &[
    "email",
    "phone",
    "firstname",
    "lastname",
    "business_name",
    "zip_code",
    "products_of_carrying",
    "current_brands_carried",
    "state",
    "city",
    "address1",
];

const GENERAL_LISTS: &[ListField] = &[ListField {
    source: "products_of_interest",
    assign: |record, joined| record.interested_products = Some(joined),
}];

const DEALER_LISTS: &[ListField] = &[
    ListField {
        source: "products_of_carrying",
        assign: |record, joined| record.products_carrying = Some(joined),
    },
    ListField {
        source: "current_brands_carried",
        assign: |record, joined| record.brands_carried = Some(joined),
    },
];

/// The distinct input-to-record mapping profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormProfile {
    /// `/sf_api/lead`: the five identity fields are required;
    /// `products_of_interest` feeds `Interested_Products__c`.
    GeneralLead,
    /// `/sf_api/lead/become-a-dealer`: identity fields plus address and the
    /// two list fields are required.
    BecomeADealer,
}

impl FormProfile {
    /// Required request fields, in validation order. The first missing field
    /// in this order is the one named in the validation error.
    #[must_use]
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::GeneralLead => GENERAL_REQUIRED,
            Self::BecomeADealer => DEALER_REQUIRED,
        }
    }

    pub(crate) fn list_fields(self) -> &'static [ListField] {
        match self {
            Self::GeneralLead => GENERAL_LISTS,
            Self::BecomeADealer => DEALER_LISTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_profile_requires_identity_fields_only() {
        assert_eq!(
            FormProfile::GeneralLead.required_fields(),
            ["email", "phone", "firstname", "lastname", "business_name"]
        );
    }

    #[test]
    fn dealer_profile_extends_the_general_requirements() {
        let dealer = FormProfile::BecomeADealer.required_fields();
        for field in FormProfile::GeneralLead.required_fields() {
            assert!(dealer.contains(field));
        }
        assert!(dealer.contains(&"zip_code"));
        assert!(dealer.contains(&"address1"));
        assert_eq!(dealer.len(), 11);
    }

    #[test]
    fn dealer_profile_has_two_list_fields() {
        let sources: Vec<_> =
            FormProfile::BecomeADealer.list_fields().iter().map(|f| f.source).collect();
        assert_eq!(sources, ["products_of_carrying", "current_brands_carried"]);
    }
}
