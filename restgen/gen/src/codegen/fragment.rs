//! Structured TypeScript text fragments.
//!
//! Emitters build values of these types instead of concatenating strings, so
//! tests can inspect the generated shape (method names, property lists,
//! imports) without parsing TypeScript. Rendering is deterministic and uses a
//! four-space indent.

use std::fmt::Write;

/// One level of indentation in generated TypeScript.
pub const INDENT: &str = "    ";

/// Notice prepended to every generated file.
pub const GENERATED_NOTICE: &str =
    "// This file was automatically generated by restgen. Do not edit manually.";

/// `import { A, B } from '<from>';` or `import A from '<from>';`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsImport {
    pub names: Vec<String>,
    pub from: String,
    /// Binds the module's default export instead of named exports.
    pub is_default: bool,
}

impl TsImport {
    pub fn new(names: Vec<String>, from: impl Into<String>) -> Self {
        Self {
            names,
            from: from.into(),
            is_default: false,
        }
    }

    /// Imports the default export under `name`.
    pub fn default_export(name: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            is_default: true,
            ..Self::single(name, from)
        }
    }

    /// Imports a single name.
    pub fn single(name: impl Into<String>, from: impl Into<String>) -> Self {
        Self::new(vec![name.into()], from)
    }

    pub fn render(&self) -> String {
        if self.is_default {
            format!("import {} from '{}';", self.names.join(", "), self.from)
        } else {
            format!("import {{ {} }} from '{}';", self.names.join(", "), self.from)
        }
    }
}

/// `export * from '<from>';`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsReExport {
    pub from: String,
}

impl TsReExport {
    pub fn new(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }

    pub fn render(&self) -> String {
        format!("export * from '{}';", self.from)
    }
}

/// An interface member: `name?: type; // comment`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsProperty {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    /// Trailing line comment.
    pub comment: Option<String>,
}

impl TsProperty {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, optional: bool) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn render(&self) -> String {
        let marker = if self.optional { "?" } else { "" };
        match &self.comment {
            Some(comment) => format!("{}{}: {}; // {}", self.name, marker, self.ty, comment),
            None => format!("{}{}: {};", self.name, marker, self.ty),
        }
    }
}

/// `export interface Name { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsInterface {
    pub name: String,
    pub properties: Vec<TsProperty>,
}

impl TsInterface {
    pub fn new(name: impl Into<String>, properties: Vec<TsProperty>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// Returns the property names in declaration order.
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn render(&self) -> String {
        let mut out = format!("export interface {} {{\n", self.name);
        for property in &self.properties {
            let _ = writeln!(out, "{INDENT}{}", property.render());
        }
        out.push_str("}\n");
        out
    }
}

/// A method parameter: `name?: type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsParam {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl TsParam {
    pub fn required(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            optional: true,
            ..Self::required(name, ty)
        }
    }

    pub fn render(&self) -> String {
        let marker = if self.optional { "?" } else { "" };
        format!("{}{}: {}", self.name, marker, self.ty)
    }
}

/// A method inside an exported object literal.
///
/// Body lines are relative to the method body; nested blocks carry their own
/// leading [`INDENT`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsMethod {
    pub name: String,
    pub is_async: bool,
    pub params: Vec<TsParam>,
    /// Full return type annotation, e.g. `Promise<User[]>`.
    pub returns: Option<String>,
    pub body: Vec<String>,
}

impl TsMethod {
    /// Creates a synchronous method.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_async: false,
            params: Vec::new(),
            returns: None,
            body: Vec::new(),
        }
    }

    /// Creates an `async` method.
    pub fn new_async(name: impl Into<String>) -> Self {
        Self {
            is_async: true,
            ..Self::new(name)
        }
    }

    pub fn param(mut self, param: TsParam) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Renders the method at one level of indentation, with trailing comma.
    pub fn render(&self) -> String {
        let params: Vec<String> = self.params.iter().map(TsParam::render).collect();
        let prefix = if self.is_async { "async " } else { "" };
        let returns = self
            .returns
            .as_ref()
            .map(|ty| format!(": {ty}"))
            .unwrap_or_default();

        let mut out = format!(
            "{INDENT}{prefix}{}({}){returns} {{\n",
            self.name,
            params.join(", ")
        );
        for line in &self.body {
            if line.is_empty() {
                out.push('\n');
            } else {
                let _ = writeln!(out, "{INDENT}{INDENT}{line}");
            }
        }
        let _ = writeln!(out, "{INDENT}}},");
        out
    }
}

/// `export const Name = { ...methods };`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsObject {
    pub name: String,
    pub methods: Vec<TsMethod>,
}

impl TsObject {
    pub fn new(name: impl Into<String>, methods: Vec<TsMethod>) -> Self {
        Self {
            name: name.into(),
            methods,
        }
    }

    /// Returns the method names in declaration order.
    pub fn method_names(&self) -> Vec<&str> {
        self.methods.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn render(&self) -> String {
        let methods: Vec<String> = self.methods.iter().map(TsMethod::render).collect();
        format!("export const {} = {{\n{}}};\n", self.name, methods.join("\n"))
    }
}

/// A top-level item in a generated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsItem {
    Interface(TsInterface),
    Object(TsObject),
    /// Fixed text emitted verbatim (must end with a newline).
    Raw(String),
}

impl TsItem {
    pub fn render(&self) -> String {
        match self {
            TsItem::Interface(interface) => interface.render(),
            TsItem::Object(object) => object.render(),
            TsItem::Raw(text) => text.clone(),
        }
    }
}

/// A complete generated file: notice, imports, re-exports, then items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TsModule {
    pub imports: Vec<TsImport>,
    pub re_exports: Vec<TsReExport>,
    pub items: Vec<TsItem>,
}

impl TsModule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: TsImport) -> Self {
        self.imports.push(import);
        self
    }

    pub fn re_export(mut self, from: impl Into<String>) -> Self {
        self.re_exports.push(TsReExport::new(from));
        self
    }

    pub fn item(mut self, item: TsItem) -> Self {
        self.items.push(item);
        self
    }

    /// Finds the first exported object literal.
    pub fn object(&self) -> Option<&TsObject> {
        self.items.iter().find_map(|item| match item {
            TsItem::Object(object) => Some(object),
            _ => None,
        })
    }

    /// Finds an interface by name.
    pub fn interface(&self, name: &str) -> Option<&TsInterface> {
        self.items.iter().find_map(|item| match item {
            TsItem::Interface(interface) if interface.name == name => Some(interface),
            _ => None,
        })
    }

    pub fn render(&self) -> String {
        let mut blocks: Vec<String> = vec![format!("{GENERATED_NOTICE}\n")];

        if !self.imports.is_empty() {
            let lines: Vec<String> = self.imports.iter().map(TsImport::render).collect();
            blocks.push(format!("{}\n", lines.join("\n")));
        }
        if !self.re_exports.is_empty() {
            let lines: Vec<String> = self.re_exports.iter().map(TsReExport::render).collect();
            blocks.push(format!("{}\n", lines.join("\n")));
        }
        blocks.extend(self.items.iter().map(TsItem::render));

        blocks.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_renders_names_in_order() {
        let import = TsImport::new(vec!["User".into(), "Team".into()], "../types");
        assert_eq!(import.render(), "import { User, Team } from '../types';");
    }

    #[test]
    fn default_import_has_no_braces() {
        let import = TsImport::default_export("axios", "axios");
        assert_eq!(import.render(), "import axios from 'axios';");
    }

    #[test]
    fn property_renders_optional_marker_and_comment() {
        let required = TsProperty::new("fullName", "string", false).with_comment("full_name");
        let optional = TsProperty::new("age", "number", true);

        assert_eq!(required.render(), "fullName: string; // full_name");
        assert_eq!(optional.render(), "age?: number;");
    }

    #[test]
    fn interface_renders_one_property_per_line() {
        let interface = TsInterface::new(
            "User",
            vec![
                TsProperty::new("fullName", "string", false),
                TsProperty::new("age", "number", true),
            ],
        );

        assert_eq!(
            interface.render(),
            "export interface User {\n    fullName: string;\n    age?: number;\n}\n"
        );
        assert_eq!(interface.property_names(), vec!["fullName", "age"]);
    }

    #[test]
    fn empty_interface_renders() {
        let interface = TsInterface::new("Empty", vec![]);
        assert_eq!(interface.render(), "export interface Empty {\n}\n");
    }

    #[test]
    fn method_renders_signature_and_indented_body() {
        let method = TsMethod::new_async("getById")
            .param(TsParam::required("id", "number"))
            .returns("Promise<User>")
            .line("const response = await fetchIt(id);")
            .line("")
            .line("return response;");

        assert_eq!(
            method.render(),
            "    async getById(id: number): Promise<User> {\n        const response = await fetchIt(id);\n\n        return response;\n    },\n"
        );
    }

    #[test]
    fn method_renders_optional_params() {
        let method = TsMethod::new("page")
            .param(TsParam::optional("limit", "number"))
            .param(TsParam::optional("offset", "number"));

        assert!(method.render().starts_with("    page(limit?: number, offset?: number) {"));
    }

    #[test]
    fn object_separates_methods_with_blank_line() {
        let object = TsObject::new(
            "Api",
            vec![TsMethod::new("a").line("return 1;"), TsMethod::new("b").line("return 2;")],
        );

        let rendered = object.render();
        assert!(rendered.starts_with("export const Api = {\n"));
        assert!(rendered.contains("    },\n\n    b() {"));
        assert!(rendered.ends_with("};\n"));
        assert_eq!(object.method_names(), vec!["a", "b"]);
    }

    #[test]
    fn module_orders_blocks() {
        let module = TsModule::new()
            .import(TsImport::single("User", "../types"))
            .re_export("./User")
            .item(TsItem::Raw("const x = 1;\n".to_string()));

        let rendered = module.render();
        let notice = rendered.find(GENERATED_NOTICE).unwrap();
        let import = rendered.find("import { User }").unwrap();
        let export = rendered.find("export * from './User';").unwrap();
        let raw = rendered.find("const x = 1;").unwrap();

        assert_eq!(notice, 0);
        assert!(import < export && export < raw);
    }

    #[test]
    fn module_without_imports_skips_block() {
        let module = TsModule::new().re_export("./A").re_export("./B");
        assert_eq!(
            module.render(),
            format!("{GENERATED_NOTICE}\n\nexport * from './A';\nexport * from './B';\n")
        );
    }
}
