//! # Record Types
//!
//! The registry keeps two collections, residents and apartments, inside one
//! [`Document`]. Both record types are identified by a natural key rather than
//! a synthetic id:
//!
//! - [`Resident`] by `tax_id`
//! - [`Apartment`] by `number`
//!
//! `PartialEq` on both types compares the natural key only, so two residents
//! with the same tax id are "the same resident" even if other fields differ.
//!
//! ## Snapshots
//!
//! An apartment embeds copies of the residents assigned to it. The copy is
//! taken at assignment time and is never refreshed. The embedded list is
//! private: it can be read through [`Apartment::residents`] but only the
//! repository changes it, keeping both sides of the link in step.
//!
//! ## Serialization Boundary
//!
//! All numeric-looking fields are strings. Files written by hand (or by older
//! tools) sometimes carry JSON numbers instead; those are accepted on read
//! and normalised to strings. Output always writes strings.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resident {
    #[serde(default)]
    pub name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub tax_id: String,
    #[serde(default)]
    pub birthdate: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub additional_info: String,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub apartment: Option<String>,
}

impl Resident {
    /// Builds an unassigned resident.
    pub fn new(
        name: impl Into<String>,
        tax_id: impl Into<String>,
        birthdate: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        additional_info: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tax_id: tax_id.into(),
            birthdate: birthdate.into(),
            phone: phone.into(),
            email: email.into(),
            additional_info: additional_info.into(),
            apartment: None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.apartment.as_deref().is_some_and(|n| !n.is_empty())
    }

    pub fn is_assigned_to(&self, number: &str) -> bool {
        self.apartment.as_deref() == Some(number)
    }
}

impl PartialEq for Resident {
    fn eq(&self, other: &Self) -> bool {
        self.tax_id == other.tax_id
    }
}

impl Eq for Resident {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Apartment {
    #[serde(deserialize_with = "string_or_number")]
    pub number: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub entrance: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub floors: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub floor: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub rooms: String,
    #[serde(default)]
    residents: Vec<Resident>,
}

impl Apartment {
    /// Builds an apartment with no residents.
    pub fn new(
        number: impl Into<String>,
        entrance: impl Into<String>,
        floors: impl Into<String>,
        floor: impl Into<String>,
        rooms: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            entrance: entrance.into(),
            floors: floors.into(),
            floor: floor.into(),
            rooms: rooms.into(),
            residents: Vec::new(),
        }
    }

    /// Resident snapshots embedded in this apartment.
    pub fn residents(&self) -> &[Resident] {
        &self.residents
    }

    pub fn has_snapshot(&self, tax_id: &str) -> bool {
        self.residents.iter().any(|r| r.tax_id == tax_id)
    }

    /// Embeds a copy of `resident`. Returns false when a snapshot with the
    /// same tax id is already present.
    pub(crate) fn add_snapshot(&mut self, resident: &Resident) -> bool {
        if self.has_snapshot(&resident.tax_id) {
            return false;
        }
        self.residents.push(resident.clone());
        true
    }

    /// Drops every snapshot with `tax_id`. Returns true if any was removed.
    pub(crate) fn remove_snapshot(&mut self, tax_id: &str) -> bool {
        let before = self.residents.len();
        self.residents.retain(|r| r.tax_id != tax_id);
        self.residents.len() != before
    }
}

impl PartialEq for Apartment {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Apartment {}

/// The persisted root: both collections, in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub residents: Vec<Resident>,
    #[serde(default)]
    pub apartments: Vec<Apartment>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.residents.is_empty() && self.apartments.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer).map(|v| v.map(String::from))
}
