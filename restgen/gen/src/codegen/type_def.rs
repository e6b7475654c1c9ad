//! Type definition generation (`types/<Model>.ts`).

use restgen_define::{Field, FieldType, Model, Schema};

use super::fragment::{TsImport, TsInterface, TsItem, TsModule, TsProperty};
use crate::naming::{to_camel_case_with_first_lower, to_snake_case};
use crate::typemap::map_type;

/// Generates the interface member for one field.
///
/// The trailing comment records the snake_case wire name.
pub fn field_property(field: &Field) -> TsProperty {
    TsProperty::new(
        to_camel_case_with_first_lower(&field.name),
        map_type(&field.field_type).as_ts(),
        field.optional,
    )
    .with_comment(to_snake_case(&field.name))
}

/// Generates the domain record interface for a model.
pub fn generate_interface(model: &Model) -> TsInterface {
    TsInterface::new(
        model.name.clone(),
        model.fields.iter().map(field_property).collect(),
    )
}

/// Returns the other schema models referenced by field types, in first-seen
/// order.
///
/// A reference tag that names no model in `schema` (`Date`, `any`, a
/// spelled-out generic) is left to resolve as a TypeScript global.
fn referenced_models<'a>(model: &'a Model, schema: &Schema) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for field in &model.fields {
        if let FieldType::Reference(name) = &field.field_type
            && *name != model.name
            && !seen.contains(&name.as_str())
            && schema.model(name).is_some()
        {
            seen.push(name);
        }
    }
    seen
}

/// Generates the complete `types/<Model>.ts` module.
///
/// `schema` decides which reference-typed fields need a sibling import.
pub fn generate_type_module(model: &Model, schema: &Schema) -> TsModule {
    referenced_models(model, schema)
        .into_iter()
        .fold(TsModule::new(), |module, name| {
            module.import(TsImport::single(name, format!("./{name}")))
        })
        .item(TsItem::Interface(generate_interface(model)))
}
