use redmap::{FieldType, InMemoryStore, Model, Schema};

/// The user model every suite runs against.
pub fn user_model() -> Model<InMemoryStore> {
    Model::new(
        InMemoryStore::new(),
        "user",
        Schema::new()
            .field("name", FieldType::String)
            .field("age", FieldType::Number)
            .field("email", FieldType::String),
    )
}
