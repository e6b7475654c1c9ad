//! Shared schema fixtures for unit tests.

use restgen_define::{Direction, Edge, Field, FieldType, Model, Schema};

/// The single-field `User` model from the end-to-end example.
pub fn user_model() -> Model {
    Model::new("User").with_field(Field::new("FullName", FieldType::String))
}

pub fn user_schema() -> Schema {
    Schema::new(vec![user_model()])
}

/// Three related models exercising every field type and both edge directions.
pub fn blog_schema() -> Schema {
    let user = Model::new("User")
        .with_field(Field::new("FullName", FieldType::String))
        .with_field(Field::optional("LastSeen", FieldType::Time))
        .with_edge(Edge::new("team", "Team", Direction::To));

    let team = Model::new("Team")
        .with_field(Field::new("name", FieldType::String))
        .with_field(Field::new("member_ids", FieldType::IntArray))
        .with_edge(Edge::new("Owner", "User", Direction::From));

    let post = Model::new("Post")
        .with_field(Field::new("title", FieldType::String))
        .with_field(Field::new("tags", FieldType::StringArray))
        .with_field(Field::new("score", FieldType::Float))
        .with_field(Field::new("published", FieldType::Bool))
        .with_field(Field::optional("edited_at", FieldType::TimeArray))
        .with_field(Field::new("author", FieldType::reference("User")))
        .with_edge(Edge::new("author", "User", Direction::To))
        .with_edge(Edge::new("reviewer", "User", Direction::To));

    Schema::new(vec![user, team, post])
}
