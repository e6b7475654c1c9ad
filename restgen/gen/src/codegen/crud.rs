//! CRUD service generation (`services/<Model>.ts`).
//!
//! Each model gets an exported `<Model>CRUD` object with two codec methods
//! (`mapResponse`, `mapRequest`) followed by exactly one method per
//! [`CrudOperation`]. Every operation is a single network call against the
//! `/crud/<model>` collection; none retry, and transport or decoding failures
//! reject the returned promise.

use restgen_define::{Field, Model};
use strum::{EnumIter, IntoEnumIterator};

use super::axios::{HttpVerb, PathExpr, axios_call};
use super::fragment::{INDENT, TsImport, TsItem, TsMethod, TsModule, TsObject, TsParam};
use crate::naming::{to_camel_case_with_first_lower, to_snake_case};
use crate::typemap::{DecodeRule, map_type};

/// The fixed set of CRUD operations generated for every model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum CrudOperation {
    List,
    GetById,
    Create,
    CreateMany,
    Update,
    Delete,
    Count,
}

impl CrudOperation {
    /// Name of the generated method.
    pub fn method_name(self) -> &'static str {
        match self {
            CrudOperation::List => "get",
            CrudOperation::GetById => "getById",
            CrudOperation::Create => "create",
            CrudOperation::CreateMany => "createMany",
            CrudOperation::Update => "update",
            CrudOperation::Delete => "delete",
            CrudOperation::Count => "count",
        }
    }

    pub fn verb(self) -> HttpVerb {
        match self {
            CrudOperation::List | CrudOperation::GetById | CrudOperation::Count => HttpVerb::Get,
            CrudOperation::Create | CrudOperation::CreateMany => HttpVerb::Post,
            CrudOperation::Update => HttpVerb::Put,
            CrudOperation::Delete => HttpVerb::Delete,
        }
    }
}

/// `/crud/<snake model>`
pub fn collection_path(model_name: &str) -> String {
    format!("/crud/{}", to_snake_case(model_name))
}

/// `<Model>CRUD`
pub fn crud_object_name(model_name: &str) -> String {
    format!("{model_name}CRUD")
}

/// Generates the expression decoding one field from the wire record `item`.
///
/// Date fields are parsed with `new Date(...)`. A decoded timestamp equal to
/// the zero epoch means "absent": optional fields become `undefined`,
/// required fields keep the zero-epoch date. `Date[]` fields apply the same
/// rule per element.
pub fn decode_expression(field: &Field) -> String {
    let wire = format!("item.{}", to_snake_case(&field.name));

    match (map_type(&field.field_type).decode_rule(), field.optional) {
        (DecodeRule::Direct, _) => wire,
        (DecodeRule::Date, false) => format!("new Date({wire})"),
        (DecodeRule::Date, true) => format!(
            "(() => {{ const d = new Date({wire}); return d.getTime() === 0 ? undefined : d; }})()"
        ),
        (DecodeRule::DateArray, false) => format!("{wire}.map((value: any) => new Date(value))"),
        (DecodeRule::DateArray, true) => format!(
            "{wire}?.map((value: any) => {{ const d = new Date(value); return d.getTime() === 0 ? undefined : d; }}) as Date[]"
        ),
    }
}

/// Generates `mapResponse(item: any): <Model>`.
pub fn generate_map_response(model: &Model) -> TsMethod {
    let mut method = TsMethod::new("mapResponse")
        .param(TsParam::required("item", "any"))
        .returns(model.name.clone())
        .line(format!("const obj: {} = {{", model.name));

    for field in &model.fields {
        method = method.line(format!(
            "{INDENT}{}: {},",
            to_camel_case_with_first_lower(&field.name),
            decode_expression(field)
        ));
    }

    method.line("};").line("return obj;")
}

/// Generates `mapRequest(data: Partial<<Model>>): any`.
///
/// Every known field key is emitted, with value `undefined` when the partial
/// input lacks it.
pub fn generate_map_request(model: &Model) -> TsMethod {
    let mut method = TsMethod::new("mapRequest")
        .param(TsParam::required("data", format!("Partial<{}>", model.name)))
        .returns("any")
        .line("return {");

    for field in &model.fields {
        method = method.line(format!(
            "{INDENT}{}: data.{},",
            to_snake_case(&field.name),
            to_camel_case_with_first_lower(&field.name)
        ));
    }

    method.line("};")
}

/// Generates the method for one CRUD operation.
pub fn generate_operation(model: &Model, operation: CrudOperation) -> TsMethod {
    let name = &model.name;
    let base = collection_path(name);
    let verb = operation.verb();
    let method = TsMethod::new_async(operation.method_name());
    let id = TsParam::required("id", "number");

    match operation {
        CrudOperation::List => method
            .param(TsParam::optional("limit", "number"))
            .param(TsParam::optional("offset", "number"))
            .returns(format!("Promise<{name}[]>"))
            .line(format!(
                "const response = {};",
                axios_call(verb, &PathExpr::fixed(&base), Some("{ params: { limit, offset } }"))
            ))
            .line("return response.data.map((item: any) => this.mapResponse(item));"),
        CrudOperation::GetById => method
            .param(id)
            .returns(format!("Promise<{name}>"))
            .line(format!(
                "const response = {};",
                axios_call(verb, &PathExpr::with_id(&base), None)
            ))
            .line("return this.mapResponse(response.data);"),
        CrudOperation::Create => method
            .param(TsParam::required("data", format!("Omit<{name}, 'id'>")))
            .returns(format!("Promise<{name}>"))
            .line(format!(
                "const response = {};",
                axios_call(verb, &PathExpr::fixed(&base), Some("this.mapRequest(data)"))
            ))
            .line("return this.mapResponse(response.data);"),
        CrudOperation::CreateMany => method
            .param(TsParam::required("data", format!("Omit<{name}, 'id'>[]")))
            .returns(format!("Promise<{name}[]>"))
            .line(format!(
                "const response = {};",
                axios_call(
                    verb,
                    &PathExpr::fixed(format!("{base}/many")),
                    Some("data.map((d) => this.mapRequest(d))")
                )
            ))
            .line("return response.data.map((item: any) => this.mapResponse(item));"),
        CrudOperation::Update => method
            .param(id)
            .param(TsParam::required(
                "data",
                format!("Partial<Omit<{name}, 'id'>>"),
            ))
            .returns(format!("Promise<{name}>"))
            .line(format!(
                "const response = {};",
                axios_call(verb, &PathExpr::with_id(&base), Some("this.mapRequest(data)"))
            ))
            .line("return this.mapResponse(response.data);"),
        CrudOperation::Delete => method
            .param(id)
            .returns(format!("Promise<{name}>"))
            .line(format!(
                "const response = {};",
                axios_call(verb, &PathExpr::with_id(&base), None)
            ))
            .line("return this.mapResponse(response.data);"),
        CrudOperation::Count => method
            .returns("Promise<number>")
            .line(format!(
                "const response = {};",
                axios_call(verb, &PathExpr::fixed(format!("{base}/count")), None)
            ))
            .line("return response.data.count;"),
    }
}

/// Generates the `<Model>CRUD` object.
pub fn generate_crud_object(model: &Model) -> TsObject {
    let mut methods = vec![generate_map_response(model), generate_map_request(model)];
    methods.extend(CrudOperation::iter().map(|op| generate_operation(model, op)));
    TsObject::new(crud_object_name(&model.name), methods)
}

/// Generates the complete `services/<Model>.ts` module.
pub fn generate_crud_module(model: &Model) -> TsModule {
    TsModule::new()
        .import(TsImport::single(model.name.clone(), "../types"))
        .import(TsImport::single(super::axios::CLIENT_FACTORY, "../utils"))
        .item(TsItem::Object(generate_crud_object(model)))
}
