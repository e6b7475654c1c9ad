//! HTTP call expressions for generated code.
//!
//! All generated network calls go through the `getAPIAxiosInstance()` factory
//! emitted in `utils/getAxiosInstance.ts`, so endpoint configuration is read
//! at call time.

use strum::{Display, EnumIter};

/// Name of the generated HTTP client factory.
pub const CLIENT_FACTORY: &str = "getAPIAxiosInstance";

/// HTTP verbs used by generated services, displayed as axios method names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
}

/// A request path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathExpr {
    /// A fixed path, rendered as a quoted string.
    Fixed(String),
    /// `<base>/<id>` with an optional trailing segment, rendered as a
    /// template literal interpolating the `id` parameter.
    WithId { base: String, tail: Option<String> },
}

impl PathExpr {
    pub fn fixed(path: impl Into<String>) -> Self {
        PathExpr::Fixed(path.into())
    }

    pub fn with_id(base: impl Into<String>) -> Self {
        PathExpr::WithId {
            base: base.into(),
            tail: None,
        }
    }

    pub fn with_id_and_tail(base: impl Into<String>, tail: impl Into<String>) -> Self {
        PathExpr::WithId {
            base: base.into(),
            tail: Some(tail.into()),
        }
    }

    pub fn render(&self) -> String {
        match self {
            PathExpr::Fixed(path) => format!("'{path}'"),
            PathExpr::WithId { base, tail: None } => format!("`{base}/${{id}}`"),
            PathExpr::WithId {
                base,
                tail: Some(tail),
            } => format!("`{base}/${{id}}/{tail}`"),
        }
    }
}

/// Renders `await getAPIAxiosInstance().<verb>(<path>[, <arg>])`.
///
/// ```
/// use restgen_gen::codegen::axios::{HttpVerb, PathExpr, axios_call};
///
/// assert_eq!(
///     axios_call(HttpVerb::Get, &PathExpr::with_id("/crud/user"), None),
///     "await getAPIAxiosInstance().get(`/crud/user/${id}`)"
/// );
/// ```
pub fn axios_call(verb: HttpVerb, path: &PathExpr, arg: Option<&str>) -> String {
    match arg {
        Some(arg) => format!("await {CLIENT_FACTORY}().{verb}({}, {arg})", path.render()),
        None => format!("await {CLIENT_FACTORY}().{verb}({})", path.render()),
    }
}
