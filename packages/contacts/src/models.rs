//! # Stored records
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | An account: the email it was registered with, its password and its ordered contact list. |
//! | [`Contact`] | One entry in a user's list. `id` is unique within the owning user only. |
//!
//! Both serialise to the JSON shape kept under the `users` key, e.g.
//!
//! ```json
//! [{"email":"a@x.com","password":"pw1","contacts":[{"id":"1712000000000","name":"Bob"}]}]
//! ```
//!
//! Records may come from older builds or other clients, so decoding is lenient.
//! A named contact field holding a number or boolean is read as its text; any
//! other non-string value is kept untouched in [`Contact::extra`] and written back
//! as-is while the named field stays empty. Contact entries that are not JSON
//! objects are dropped with a warning rather than failing the whole account.
//!
//! Passwords are stored as given. That matches the data already sitting in
//! users' browsers and is a known weakness of the format.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A registered account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Case-sensitive unique key, fixed at sign-up.
    pub email: String,
    pub password: String,
    #[serde(default, deserialize_with = "lenient_contacts")]
    pub contacts: Vec<Contact>,
}

impl User {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            contacts: Vec::new(),
        }
    }
}

/// A contact card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Contact {
    /// Empty until the contact is first saved.
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Picture as a `data:` URL.
    pub image: Option<String>,
    /// Any other fields the form or an older build stored.
    pub extra: BTreeMap<String, Value>,
}

impl Contact {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_saved(&self) -> bool {
        !self.id.is_empty()
    }
}

impl From<Map<String, Value>> for Contact {
    fn from(mut fields: Map<String, Value>) -> Self {
        let mut text = |key: &str| match fields.remove(key) {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            Some(Value::Null) | None => None,
            Some(other) => {
                // Structured value under a named key: keep it for the round trip
                fields.insert(key.to_string(), other);
                None
            }
        };
        let id = text("id").unwrap_or_default();
        let name = text("name").unwrap_or_default();
        let phone = text("phone").unwrap_or_default();
        let email = text("email").unwrap_or_default();
        let image = text("image");

        Self {
            id,
            name,
            phone,
            email,
            image,
            extra: fields.into_iter().collect(),
        }
    }
}

impl From<Contact> for Map<String, Value> {
    fn from(contact: Contact) -> Self {
        let mut fields: Map<String, Value> = contact.extra.into_iter().collect();
        let named = [
            ("id", Some(contact.id)),
            ("name", Some(contact.name)),
            ("phone", Some(contact.phone)),
            ("email", Some(contact.email)),
            ("image", contact.image),
        ];
        for (key, value) in named {
            match value {
                // An empty named field never shadows a preserved value
                Some(v) if v.is_empty() && fields.contains_key(key) => {}
                Some(v) => {
                    fields.insert(key.to_string(), Value::String(v));
                }
                None => {}
            }
        }
        fields
    }
}

fn lenient_contacts<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Contact>, D::Error> {
    let raw = Vec::<Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|value| match value {
            Value::Object(fields) => Some(Contact::from(fields)),
            other => {
                tracing::warn!(value = %other, "dropping contact that is not an object");
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_keeps_unknown_fields() {
        let raw = r#"{"id":"1","name":"Bob","company":"Acme","tags":["x"]}"#;
        let contact: Contact = serde_json::from_str(raw).unwrap();
        assert_eq!(contact.name, "Bob");
        assert_eq!(contact.phone, "");
        assert!(contact.image.is_none());
        assert_eq!(contact.extra["company"], "Acme");

        let back: serde_json::Value = serde_json::to_value(&contact).unwrap();
        assert_eq!(back["company"], "Acme");
        assert_eq!(back["tags"][0], "x");
        assert!(back.get("image").is_none());
    }

    #[test]
    fn test_scalar_fields_read_as_text() {
        let raw = r#"{"id":1712000000000,"name":"Bob","phone":5551234,"email":null}"#;
        let contact: Contact = serde_json::from_str(raw).unwrap();
        assert_eq!(contact.id, "1712000000000");
        assert_eq!(contact.phone, "5551234");
        assert_eq!(contact.email, "");
        assert!(contact.extra.is_empty());
        assert!(contact.is_saved());
    }

    #[test]
    fn test_structured_named_field_is_preserved() {
        let raw = r#"{"id":"1","name":"Bob","phone":{"home":"555","work":"556"}}"#;
        let contact: Contact = serde_json::from_str(raw).unwrap();
        assert_eq!(contact.phone, "");
        assert_eq!(contact.extra["phone"]["work"], "556");

        let back: serde_json::Value = serde_json::to_value(&contact).unwrap();
        assert_eq!(back["phone"]["home"], "555");

        // Editing the field replaces the preserved value
        let mut edited = contact.clone();
        edited.phone = "777".to_string();
        let back: serde_json::Value = serde_json::to_value(&edited).unwrap();
        assert_eq!(back["phone"], "777");
    }

    #[test]
    fn test_user_without_contacts_field() {
        let user: User = serde_json::from_str(r#"{"email":"a@x.com","password":"pw"}"#).unwrap();
        assert!(user.contacts.is_empty());
    }

    #[test]
    fn test_user_skips_malformed_contacts() {
        let raw = r#"{"email":"a@x.com","password":"pw","contacts":[{"id":"1","name":"Bob"},"junk",7]}"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.contacts.len(), 1);
        assert_eq!(user.contacts[0].name, "Bob");
        assert!(!Contact::named("new").is_saved());
    }
}
