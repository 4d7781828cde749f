//! Declarative description of which snapshot attributes survive emission
//!
//! A [`Shape`] is an ordered list of [`Field`]s. Each field names the key it is
//! emitted under, the attribute it is read from, and the structure its value
//! takes. Shapes nest: repeated blocks and nested records carry their own shape.

use std::collections::HashMap;

/// Type a scalar attribute is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Integer,
    Float,
    Bool,
}

/// How a single nested record or free-form map is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nesting {
    /// `key = { ... }`
    Map,
    /// `key { ... }`
    Block,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Scalar(ScalarKind),
    /// Homogeneous list of scalars, emitted inline.
    List(ScalarKind),
    /// List of records, each emitted as a repeated block.
    Blocks(Shape),
    /// A single record.
    Nested(Shape, Nesting),
    /// String-keyed scalar map whose keys are not known ahead of time.
    Map(Nesting),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    source: String,
    kind: FieldKind,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        Self {
            source: name.clone(),
            name,
            kind,
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarKind::String))
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarKind::Integer))
    }

    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarKind::Float))
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarKind::Bool))
    }

    pub fn list(name: impl Into<String>, element: ScalarKind) -> Self {
        Self::new(name, FieldKind::List(element))
    }

    pub fn blocks(name: impl Into<String>, shape: Shape) -> Self {
        Self::new(name, FieldKind::Blocks(shape))
    }

    pub fn nested(name: impl Into<String>, shape: Shape, nesting: Nesting) -> Self {
        Self::new(name, FieldKind::Nested(shape, nesting))
    }

    pub fn map(name: impl Into<String>, nesting: Nesting) -> Self {
        Self::new(name, FieldKind::Map(nesting))
    }

    /// Read the value from a differently named snapshot attribute.
    pub fn from_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Key the value is emitted under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot attribute the value is read from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    fields: Vec<Field>,
}

impl Shape {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Lookup of the shape used for a resource type.
pub trait ShapeRegistry {
    /// Returns `None` when the type is unknown.
    fn shape_for(&self, resource_type: &str) -> Option<Shape>;
}

impl ShapeRegistry for HashMap<String, Shape> {
    fn shape_for(&self, resource_type: &str) -> Option<Shape> {
        self.get(resource_type).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_defaults_to_name() {
        let field = Field::integer("connector_id");
        assert_eq!(field.source(), "connector_id");
        assert_eq!(field.kind(), &FieldKind::Scalar(ScalarKind::Integer));
    }

    #[test]
    fn from_source_renames_only_the_input() {
        let field = Field::string("name").from_source("user_name");
        assert_eq!(field.name(), "name");
        assert_eq!(field.source(), "user_name");
    }

    #[test]
    fn fields_keep_declaration_order() {
        let shape = Shape::new(vec![
            Field::string("b"),
            Field::string("a"),
            Field::blocks("c", Shape::new(vec![Field::boolean("enabled")])),
        ]);
        let names: Vec<&str> = shape.fields().iter().map(Field::name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert!(shape.field("c").is_some());
        assert!(shape.field("missing").is_none());
    }

    #[test]
    fn hashmap_registry() {
        let mut registry = HashMap::new();
        registry.insert("t".to_string(), Shape::new(vec![Field::string("name")]));
        assert!(registry.shape_for("t").is_some());
        assert!(registry.shape_for("u").is_none());
    }
}
