//! Search input generation (`<Model>SearchInput`).
//!
//! Each field contributes a set of optional filter properties determined by
//! its declared type. Properties are named `<camelField><Suffix>` and are
//! forwarded verbatim as query parameters to the search endpoint.

use restgen_define::{Field, FieldType, Model};

use super::fragment::{TsInterface, TsProperty};
use crate::naming::to_camel_case_with_first_lower;

/// A filter kind offered for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchClause {
    /// Exact match.
    Exact,
    /// Substring, numeric membership, or element containment.
    Contains,
    /// Any element contains.
    OneContains,
    /// All elements contain.
    AllContains,
    /// No element contains.
    NoneContains,
    /// Lower bound of a time range.
    Start,
    /// Upper bound of a time range.
    End,
}

impl SearchClause {
    /// Suffix appended to the camelCase field name.
    pub fn suffix(self) -> &'static str {
        match self {
            SearchClause::Exact => "",
            SearchClause::Contains => "Contains",
            SearchClause::OneContains => "OneContains",
            SearchClause::AllContains => "AllContains",
            SearchClause::NoneContains => "NoneContains",
            SearchClause::Start => "Start",
            SearchClause::End => "End",
        }
    }
}

/// Returns the clauses and their value type for a field type.
///
/// `[]float`, `[]bool`, `[]time.Time`, and reference types are not
/// searchable.
pub fn clauses_for(field_type: &FieldType) -> (&'static [SearchClause], &'static str) {
    use SearchClause::*;

    match field_type {
        FieldType::String => (&[Exact, Contains], "string"),
        FieldType::StringArray => (
            &[Exact, OneContains, AllContains, NoneContains],
            "string[]",
        ),
        FieldType::Int | FieldType::Float => (&[Exact, Contains], "number"),
        FieldType::IntArray => (&[Exact, Contains], "number[]"),
        FieldType::Bool => (&[Exact], "boolean"),
        FieldType::Time => (&[Exact, Contains, Start, End], "Date"),
        FieldType::FloatArray
        | FieldType::BoolArray
        | FieldType::TimeArray
        | FieldType::Reference(_) => (&[], ""),
    }
}

/// Generates the optional filter properties for one field.
pub fn field_filters(field: &Field) -> Vec<TsProperty> {
    let base = to_camel_case_with_first_lower(&field.name);
    let (clauses, ty) = clauses_for(&field.field_type);

    clauses
        .iter()
        .map(|clause| TsProperty::new(format!("{base}{}", clause.suffix()), ty, true))
        .collect()
}

/// `<Model>SearchInput`
pub fn search_input_name(model_name: &str) -> String {
    format!("{model_name}SearchInput")
}

/// Generates the search input interface for a model.
pub fn generate_search_input(model: &Model) -> TsInterface {
    TsInterface::new(
        search_input_name(&model.name),
        model.fields.iter().flat_map(field_filters).collect(),
    )
}
