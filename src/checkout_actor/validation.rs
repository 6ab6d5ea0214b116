//! Checkout form validation.
//!
//! A [`FormConfig`] says which fields are required, which are email-typed, and which
//! extra fields each [`PaymentMethod`] requires. Validating a [`FormSnapshot`] against it
//! either yields the parsed [`CheckoutSubmission`] or a [`ValidationError`] naming every
//! missing and malformed field at once.

use crate::model::{Customer, PaymentInfo, PaymentMethod};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Field names of the checkout form.
pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const ADDRESS: &str = "address";
    pub const CITY: &str = "city";
    pub const ZIP: &str = "zip";
    pub const COUNTRY: &str = "country";
    pub const PAYMENT_METHOD: &str = "payment-method";
    pub const CARD_NUMBER: &str = "card-number";
    pub const CARD_NAME: &str = "card-name";
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));

/// `local@domain.tld`: no whitespace, one `@`, a dot somewhere after it.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Raw field values as submitted, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSnapshot {
    values: BTreeMap<String, String>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// The raw value, untrimmed. `None` if the field was never set.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    fn filled(&self, field: &str) -> Option<&str> {
        self.get(field).map(str::trim).filter(|v| !v.is_empty())
    }

    fn text(&self, field: &str) -> String {
        self.filled(field).unwrap_or_default().to_string()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Every field that failed, in form order. Never empty when returned as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("invalid checkout form (missing: [{}], invalid email: [{}])", .missing.join(", "), .invalid_emails.join(", "))]
pub struct ValidationError {
    pub missing: Vec<String>,
    pub invalid_emails: Vec<String>,
}

impl ValidationError {
    pub fn has_invalid_email(&self) -> bool {
        !self.invalid_emails.is_empty()
    }

    fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.invalid_emails.is_empty()
    }
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSubmission {
    pub customer: Customer,
    pub payment: PaymentInfo,
}

/// Which fields the form requires.
#[derive(Debug, Clone)]
pub struct FormConfig {
    pub required: Vec<&'static str>,
    pub email: Vec<&'static str>,
    /// Extra required fields per payment method.
    pub payment_fields: BTreeMap<PaymentMethod, Vec<&'static str>>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::checkout()
    }
}

impl FormConfig {
    /// The storefront's checkout form.
    pub fn checkout() -> Self {
        use fields::*;
        Self {
            required: vec![NAME, EMAIL, ADDRESS, CITY, ZIP, COUNTRY, PAYMENT_METHOD],
            email: vec![EMAIL],
            payment_fields: BTreeMap::from([
                (PaymentMethod::Card, vec![CARD_NUMBER, CARD_NAME]),
                (PaymentMethod::Paypal, vec![]),
            ]),
        }
    }

    pub fn required_for(&self, method: PaymentMethod) -> &[&'static str] {
        self.payment_fields
            .get(&method)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn validate(&self, form: &FormSnapshot) -> Result<CheckoutSubmission, ValidationError> {
        let mut error = ValidationError::default();

        for field in &self.required {
            if form.filled(field).is_none() {
                error.missing.push(field.to_string());
            }
        }

        // An unrecognised method cannot satisfy the required method field.
        let method = form
            .filled(fields::PAYMENT_METHOD)
            .and_then(|raw| raw.parse::<PaymentMethod>().ok());
        match method {
            Some(method) => {
                for field in self.required_for(method) {
                    if form.filled(field).is_none() {
                        error.missing.push(field.to_string());
                    }
                }
            }
            None if form.filled(fields::PAYMENT_METHOD).is_some() => {
                error.missing.push(fields::PAYMENT_METHOD.to_string());
            }
            None => {}
        }

        for field in &self.email {
            match form.get(field) {
                Some(value) if !value.is_empty() && !is_valid_email(value) => {
                    error.invalid_emails.push(field.to_string());
                }
                _ => {}
            }
        }

        let method = match method {
            Some(method) if error.is_empty() => method,
            _ => return Err(error),
        };

        let payment = match method {
            PaymentMethod::Card => PaymentInfo {
                method,
                card_number: form.filled(fields::CARD_NUMBER).map(str::to_string),
                card_name: form.filled(fields::CARD_NAME).map(str::to_string),
            },
            PaymentMethod::Paypal => PaymentInfo::paypal(),
        };

        Ok(CheckoutSubmission {
            customer: Customer {
                name: form.text(fields::NAME),
                email: form.text(fields::EMAIL),
                address: form.text(fields::ADDRESS),
                city: form.text(fields::CITY),
                zip: form.text(fields::ZIP),
                country: form.text(fields::COUNTRY),
            },
            payment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fields::*;

    fn complete_form() -> FormSnapshot {
        FormSnapshot::new()
            .with(NAME, " Ada Lovelace ")
            .with(EMAIL, "ada@example.com")
            .with(ADDRESS, "12 Analytical St")
            .with(CITY, "London")
            .with(ZIP, "N1 9GU")
            .with(COUNTRY, "UK")
            .with(PAYMENT_METHOD, "card")
            .with(CARD_NUMBER, "4242 4242 4242 4242")
            .with(CARD_NAME, "A LOVELACE")
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
    }

    #[test]
    fn test_complete_card_form_is_parsed() {
        let submission = FormConfig::checkout().validate(&complete_form()).unwrap();
        assert_eq!(submission.customer.name, "Ada Lovelace");
        assert_eq!(
            submission.payment,
            PaymentInfo::card("4242 4242 4242 4242", "A LOVELACE")
        );
    }

    #[test]
    fn test_paypal_needs_no_card_fields() {
        let form = complete_form()
            .with(PAYMENT_METHOD, "paypal")
            .with(CARD_NUMBER, "")
            .with(CARD_NAME, "");
        let submission = FormConfig::checkout().validate(&form).unwrap();
        assert_eq!(submission.payment, PaymentInfo::paypal());
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let form = complete_form().with(CITY, "   ").with(CARD_NAME, "");
        let error = FormConfig::checkout().validate(&form).unwrap_err();
        assert_eq!(error.missing, vec![CITY, CARD_NAME]);
        assert!(!error.has_invalid_email());
    }

    #[test]
    fn test_invalid_email_is_reported_separately() {
        let form = complete_form().with(EMAIL, "ada@example");
        let error = FormConfig::checkout().validate(&form).unwrap_err();
        assert!(error.missing.is_empty());
        assert_eq!(error.invalid_emails, vec![EMAIL]);
    }

    #[test]
    fn test_unknown_payment_method_counts_as_missing() {
        let form = complete_form().with(PAYMENT_METHOD, "bitcoin");
        let error = FormConfig::checkout().validate(&form).unwrap_err();
        assert_eq!(error.missing, vec![PAYMENT_METHOD]);
    }

    #[test]
    fn test_empty_form() {
        let error = FormConfig::checkout().validate(&FormSnapshot::new()).unwrap_err();
        assert_eq!(
            error.missing,
            vec![NAME, EMAIL, ADDRESS, CITY, ZIP, COUNTRY, PAYMENT_METHOD]
        );
        assert!(error.to_string().contains("missing: [name, email"));
    }
}
