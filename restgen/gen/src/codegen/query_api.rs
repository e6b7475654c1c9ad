//! Relationship and query API generation (`methods/<Model>.ts`).
//!
//! The `<Model>API` object offers `search` plus accessors per edge:
//!
//! - `"to"` edges get `get<Edge>`, `connect<Edge>`, and `disconnect<Edge>`
//!   against `/api/<model>/<id>/<edge>`. Responses are decoded with the
//!   *related* model's `mapResponse`, as a single record or an array
//!   depending on the response shape.
//! - `"from"` edges get `get<Model>By<Edge>`, which re-fetches this model's
//!   own record from `/api/<model>/<id>` and never touches the related model.
//!   This mirrors the backend's current contract for the read-only side.

use restgen_define::{Direction, Edge, Model};

use super::axios::{CLIENT_FACTORY, HttpVerb, PathExpr, axios_call};
use super::crud::crud_object_name;
use super::fragment::{TsImport, TsItem, TsMethod, TsModule, TsObject, TsParam};
use super::search::{generate_search_input, search_input_name};
use crate::naming::{to_camel_case_with_first_lower, to_capitalized_camel_case, to_snake_case};

/// `/api/<snake model>`
pub fn api_path(model_name: &str) -> String {
    format!("/api/{}", to_snake_case(model_name))
}

/// `<Model>API`
pub fn api_object_name(model_name: &str) -> String {
    format!("{model_name}API")
}

/// Generates `search(input, limit?, offset?)`.
pub fn generate_search(model: &Model) -> TsMethod {
    let path = PathExpr::fixed(format!("{}/search", api_path(&model.name)));

    TsMethod::new_async("search")
        .param(TsParam::required("input", search_input_name(&model.name)))
        .param(TsParam::optional("limit", "number"))
        .param(TsParam::optional("offset", "number"))
        .returns(format!("Promise<{}[]>", model.name))
        .line(format!(
            "const response = {};",
            axios_call(HttpVerb::Get, &path, Some("{ params: { ...input, limit, offset } }"))
        ))
        .line(format!(
            "return response.data.map((item: any) => {}.mapResponse(item));",
            crud_object_name(&model.name)
        ))
}

/// Generates the accessor methods for one edge.
pub fn generate_edge_methods(model: &Model, edge: &Edge) -> Vec<TsMethod> {
    match edge.direction {
        Direction::To => generate_to_edge(model, edge),
        Direction::From => vec![generate_from_edge(model, edge)],
    }
}

fn generate_to_edge(model: &Model, edge: &Edge) -> Vec<TsMethod> {
    let suffix = to_capitalized_camel_case(&edge.name);
    let segment = to_snake_case(&edge.name);
    let path = PathExpr::with_id_and_tail(api_path(&model.name), segment.clone());
    let related = &edge.target;
    let related_crud = crud_object_name(related);
    let returns = format!("Promise<{related} | {related}[]>");
    let getter = format!("get{suffix}");
    let id = TsParam::required("id", "number");

    let get = TsMethod::new_async(getter.clone())
        .param(id.clone())
        .returns(returns.clone())
        .line(format!(
            "const response = {};",
            axios_call(HttpVerb::Get, &path, None)
        ))
        .line(format!(
            "return Array.isArray(response.data) ? response.data.map((item: any) => {related_crud}.mapResponse(item)) : {related_crud}.mapResponse(response.data);"
        ));

    let related_id = format!("{}Id", to_camel_case_with_first_lower(&edge.name));
    let payload = format!("{{ {segment}_id: {related_id} }}");
    let connect = TsMethod::new_async(format!("connect{suffix}"))
        .param(id.clone())
        .param(TsParam::required(related_id.clone(), "number"))
        .returns(returns.clone())
        .line(format!(
            "{};",
            axios_call(HttpVerb::Post, &path, Some(payload.as_str()))
        ))
        .line(format!("return this.{getter}(id);"));

    let disconnect = TsMethod::new_async(format!("disconnect{suffix}"))
        .param(id)
        .returns(returns)
        .line(format!("{};", axios_call(HttpVerb::Delete, &path, None)))
        .line(format!("return this.{getter}(id);"));

    vec![get, connect, disconnect]
}

fn generate_from_edge(model: &Model, edge: &Edge) -> TsMethod {
    let name = &model.name;

    TsMethod::new_async(format!(
        "get{name}By{}",
        to_capitalized_camel_case(&edge.name)
    ))
    .param(TsParam::required("id", "number"))
    .returns(format!("Promise<{name}>"))
    .line(format!(
        "const response = {};",
        axios_call(HttpVerb::Get, &PathExpr::with_id(api_path(name)), None)
    ))
    .line(format!(
        "return {}.mapResponse(response.data);",
        crud_object_name(name)
    ))
}

/// Generates the `<Model>API` object.
pub fn generate_api_object(model: &Model) -> TsObject {
    let mut methods = vec![generate_search(model)];
    for edge in &model.edges {
        methods.extend(generate_edge_methods(model, edge));
    }
    TsObject::new(api_object_name(&model.name), methods)
}

/// Returns the related model types, deduplicated, excluding the model itself.
fn related_models(model: &Model) -> Vec<&str> {
    model
        .related_types()
        .into_iter()
        .filter(|related| *related != model.name)
        .collect()
}

/// Generates the complete `methods/<Model>.ts` module.
pub fn generate_query_module(model: &Model) -> TsModule {
    let related = related_models(model);

    let mut types = vec![model.name.clone()];
    types.extend(related.iter().map(|r| r.to_string()));

    let mut module = TsModule::new()
        .import(TsImport::new(types, "../types"))
        .import(TsImport::single(CLIENT_FACTORY, "../utils"))
        .import(TsImport::single(
            crud_object_name(&model.name),
            format!("../services/{}", model.name),
        ));

    for related in related {
        module = module.import(TsImport::single(
            crud_object_name(related),
            format!("../services/{related}"),
        ));
    }

    module
        .item(TsItem::Interface(generate_search_input(model)))
        .item(TsItem::Object(generate_api_object(model)))
}
