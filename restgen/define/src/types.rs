//! Type tags and relationship directions.
//!
//! Both enums are parsed from free-form strings in the schema document and
//! parsing never fails: unknown field tags become [`FieldType::Reference`],
//! unknown directions become [`Direction::From`].

use std::fmt;

use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};

/// The declared type of a model field.
///
/// Ten tags form a closed vocabulary of primitives and arrays of primitives.
/// Any other tag is carried verbatim in [`FieldType::Reference`] and is
/// assumed to name another generated model type.
///
/// ## Examples
///
/// ```
/// use restgen_define::FieldType;
///
/// assert_eq!("[]int".parse::<FieldType>().unwrap(), FieldType::IntArray);
/// assert_eq!("time.Time".parse::<FieldType>().unwrap(), FieldType::Time);
/// assert_eq!("Team".parse::<FieldType>().unwrap(), FieldType::reference("Team"));
/// assert_eq!(FieldType::reference("Team").to_string(), "Team");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, Deserialize)]
#[serde(from = "String")]
pub enum FieldType {
    #[strum(serialize = "int")]
    Int,
    #[strum(serialize = "[]int")]
    IntArray,
    #[strum(serialize = "string")]
    String,
    #[strum(serialize = "[]string")]
    StringArray,
    #[strum(serialize = "bool")]
    Bool,
    #[strum(serialize = "[]bool")]
    BoolArray,
    #[strum(serialize = "float")]
    Float,
    #[strum(serialize = "[]float")]
    FloatArray,
    #[strum(serialize = "time.Time")]
    Time,
    #[strum(serialize = "[]time.Time")]
    TimeArray,
    /// Any tag outside the closed vocabulary, kept verbatim.
    #[strum(default)]
    Reference(String),
}

impl FieldType {
    /// A field typed as another model (or any tag outside the vocabulary).
    pub fn reference(name: impl Into<String>) -> Self {
        FieldType::Reference(name.into())
    }

    /// Returns the tag as it appears in the schema document.
    pub fn tag(&self) -> &str {
        match self {
            FieldType::Int => "int",
            FieldType::IntArray => "[]int",
            FieldType::String => "string",
            FieldType::StringArray => "[]string",
            FieldType::Bool => "bool",
            FieldType::BoolArray => "[]bool",
            FieldType::Float => "float",
            FieldType::FloatArray => "[]float",
            FieldType::Time => "time.Time",
            FieldType::TimeArray => "[]time.Time",
            FieldType::Reference(name) => name,
        }
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        // `#[strum(default)]` makes parsing total; the fallback is unreachable.
        match tag.parse() {
            Ok(field_type) => field_type,
            Err(_) => FieldType::Reference(tag),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Navigation direction of an edge.
///
/// ```
/// use restgen_define::Direction;
///
/// assert_eq!(Direction::from("to".to_string()), Direction::To);
/// assert_eq!(Direction::from("sideways".to_string()), Direction::From);
/// assert_eq!(Direction::To.to_string(), "to");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Deserialize)]
#[serde(from = "String")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// This model owns the relationship and can connect/disconnect it.
    To,
    /// This model is the target of a relationship owned elsewhere (read-only).
    From,
}

impl From<String> for Direction {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(Direction::From)
    }
}
