//! Schema document types.
//!
//! Field names on the wire follow the backend's schema export
//! (`model_name`, `field_name`, `is_optional`, `edge_name`). Missing arrays
//! deserialize as empty and unknown keys are ignored.

use serde::Deserialize;

use crate::types::{Direction, FieldType};

/// The root of a generation input: an ordered sequence of models.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub models: Vec<Model>,
}

impl Schema {
    /// Creates a schema from a list of models.
    pub fn new(models: Vec<Model>) -> Self {
        Self { models }
    }

    /// Looks up a model by its exact name.
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name == name)
    }
}

/// A schema-declared entity type.
///
/// The name is used verbatim as the generated type name and file name, and
/// snake-cased as the REST path segment, so it must be a valid identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Model {
    #[serde(rename = "model_name")]
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Model {
    /// Creates a model with no fields or edges.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Adds a field, builder style.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds an edge, builder style.
    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }

    /// Returns the distinct edge target types in first-seen order.
    ///
    /// ```
    /// use restgen_define::{Direction, Edge, Model};
    ///
    /// let model = Model::new("User")
    ///     .with_edge(Edge::new("team", "Team", Direction::To))
    ///     .with_edge(Edge::new("owned_team", "Team", Direction::From))
    ///     .with_edge(Edge::new("pets", "Pet", Direction::To));
    ///
    /// assert_eq!(model.related_types(), vec!["Team", "Pet"]);
    /// ```
    pub fn related_types(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for edge in &self.edges {
            if !seen.contains(&edge.target.as_str()) {
                seen.push(&edge.target);
            }
        }
        seen
    }
}

/// A model attribute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Field {
    /// Raw identifier in arbitrary casing.
    #[serde(rename = "field_name")]
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(rename = "is_optional", default)]
    pub optional: bool,
}

impl Field {
    /// Creates a required field.
    pub fn new(name: impl Into<String>, field_type: impl Into<FieldType>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            optional: false,
        }
    }

    /// Creates an optional field.
    pub fn optional(name: impl Into<String>, field_type: impl Into<FieldType>) -> Self {
        Self {
            optional: true,
            ..Self::new(name, field_type)
        }
    }
}

/// A relationship from the owning model to another model.
///
/// The target is not checked against the schema's model set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Edge {
    #[serde(rename = "edge_name")]
    pub name: String,
    /// Name of the related model.
    #[serde(rename = "type")]
    pub target: String,
    pub direction: Direction,
}

impl Edge {
    pub fn new(name: impl Into<String>, target: impl Into<String>, direction: Direction) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_document() {
        let json = r#"{
            "models": [
                {
                    "model_name": "Appeal",
                    "fields": [
                        { "field_name": "AppealNumber", "type": "int", "is_optional": false },
                        { "field_name": "closed_at", "type": "time.Time", "is_optional": true },
                        { "field_name": "Address", "type": "PostalAddress", "is_optional": false }
                    ],
                    "edges": [
                        { "edge_name": "recipient", "type": "Person", "direction": "to" },
                        { "edge_name": "source", "type": "Channel", "direction": "from" }
                    ]
                }
            ]
        }"#;

        let schema: Schema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.models.len(), 1);

        let appeal = &schema.models[0];
        assert_eq!(appeal.name, "Appeal");
        assert_eq!(appeal.fields[0], Field::new("AppealNumber", FieldType::Int));
        assert_eq!(appeal.fields[1], Field::optional("closed_at", FieldType::Time));
        assert_eq!(
            appeal.fields[2].field_type,
            FieldType::Reference("PostalAddress".to_string())
        );
        assert_eq!(
            appeal.edges,
            vec![
                Edge::new("recipient", "Person", Direction::To),
                Edge::new("source", "Channel", Direction::From),
            ]
        );
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let schema: Schema = serde_json::from_str(r#"{ "models": [{ "model_name": "Tag" }] }"#).unwrap();
        assert_eq!(schema.models[0], Model::new("Tag"));

        let empty: Schema = serde_json::from_str("{}").unwrap();
        assert!(empty.models.is_empty());
    }

    #[test]
    fn missing_optional_flag_means_required() {
        let field: Field =
            serde_json::from_str(r#"{ "field_name": "name", "type": "string" }"#).unwrap();
        assert!(!field.optional);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let model: Model = serde_json::from_str(
            r#"{ "model_name": "User", "table": "users", "fields": [], "edges": [] }"#,
        )
        .unwrap();
        assert_eq!(model.name, "User");
    }

    #[test]
    fn malformed_document_is_rejected() {
        assert!(serde_json::from_str::<Schema>(r#"{ "models": [{ "fields": [] }] }"#).is_err());
        assert!(serde_json::from_str::<Schema>(r#"{ "models": 3 }"#).is_err());
    }

    #[test]
    fn related_types_keeps_first_seen_order() {
        let model = Model::new("Post")
            .with_edge(Edge::new("author", "User", Direction::To))
            .with_edge(Edge::new("comments", "Comment", Direction::To))
            .with_edge(Edge::new("editor", "User", Direction::To));

        assert_eq!(model.related_types(), vec!["User", "Comment"]);
    }

    #[test]
    fn model_lookup_is_exact() {
        let schema = Schema::new(vec![Model::new("User"), Model::new("Team")]);

        assert_eq!(schema.model("Team").map(|m| m.name.as_str()), Some("Team"));
        assert!(schema.model("team").is_none());
        assert!(schema.model("Date").is_none());
    }
}
