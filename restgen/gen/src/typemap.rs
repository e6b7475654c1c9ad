//! Schema type tag → TypeScript type mapping.
//!
//! The mapping is a finite table over the closed [`FieldType`] vocabulary.
//! [`FieldType::Reference`] maps to [`TsType::Named`] with the tag unchanged:
//! unknown tags are assumed to name another generated model. A typo in a
//! schema tag therefore only surfaces when the generated TypeScript is
//! compiled.
//!
//! | Tag | TypeScript |
//! |---|---|
//! | `int`, `float` | `number` |
//! | `[]int`, `[]float` | `number[]` |
//! | `string` / `[]string` | `string` / `string[]` |
//! | `bool` / `[]bool` | `boolean` / `boolean[]` |
//! | `time.Time` / `[]time.Time` | `Date` / `Date[]` |
//! | anything else | unchanged |

use std::fmt;

use restgen_define::FieldType;

/// A target-language type produced by [`map_type`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TsType {
    Number,
    NumberArray,
    String,
    StringArray,
    Boolean,
    BooleanArray,
    Date,
    DateArray,
    /// A type name passed through from an unrecognized tag.
    Named(String),
}

impl TsType {
    /// Returns the TypeScript spelling of this type.
    pub fn as_ts(&self) -> &str {
        match self {
            TsType::Number => "number",
            TsType::NumberArray => "number[]",
            TsType::String => "string",
            TsType::StringArray => "string[]",
            TsType::Boolean => "boolean",
            TsType::BooleanArray => "boolean[]",
            TsType::Date => "Date",
            TsType::DateArray => "Date[]",
            TsType::Named(name) => name,
        }
    }

    /// Returns the wire decoding rule this type needs in `mapResponse`.
    ///
    /// Decided on the TypeScript spelling, so a reference tag literally
    /// named `Date` decodes like `time.Time`.
    pub fn decode_rule(&self) -> DecodeRule {
        match self.as_ts() {
            "Date" => DecodeRule::Date,
            "Date[]" => DecodeRule::DateArray,
            _ => DecodeRule::Direct,
        }
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ts())
    }
}

/// How a wire value is turned into a domain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeRule {
    /// The wire value is used as-is.
    Direct,
    /// Parsed into a `Date`; the zero-epoch sentinel means "absent".
    Date,
    /// Like [`DecodeRule::Date`], applied to every element.
    DateArray,
}

/// Maps a schema field type to its TypeScript type.
///
/// ```
/// use restgen_define::FieldType;
/// use restgen_gen::typemap::{TsType, map_type};
///
/// assert_eq!(map_type(&FieldType::Float), TsType::Number);
/// assert_eq!(map_type(&FieldType::TimeArray).as_ts(), "Date[]");
/// assert_eq!(map_type(&FieldType::reference("Team")).as_ts(), "Team");
/// ```
pub fn map_type(field_type: &FieldType) -> TsType {
    match field_type {
        FieldType::Int | FieldType::Float => TsType::Number,
        FieldType::IntArray | FieldType::FloatArray => TsType::NumberArray,
        FieldType::String => TsType::String,
        FieldType::StringArray => TsType::StringArray,
        FieldType::Bool => TsType::Boolean,
        FieldType::BoolArray => TsType::BooleanArray,
        FieldType::Time => TsType::Date,
        FieldType::TimeArray => TsType::DateArray,
        FieldType::Reference(name) => TsType::Named(name.clone()),
    }
}
