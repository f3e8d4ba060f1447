use super::{ArgumentsList, CompositeTypeId, EnumId, Identifier, ModelId, WithSpan};
use crate::ast::FieldId;
use diagnostics::Span;

/// An attribute (following `@` or `@@`) on a model, model field, enum, enum
/// value or composite type field.
#[derive(Debug, Clone)]
pub struct Attribute {
    /// The name of the attribute:
    ///
    /// ```ignore
    /// @@index([a, b, c])
    ///   ^^^^^
    /// ```
    ///
    /// The name can be qualified with a datasource scope: `@db.Text` has the
    /// name `db.Text`.
    pub name: Identifier,
    /// The arguments of the attribute.
    ///
    /// ```ignore
    /// @@index([a, b, c], map: "myidix")
    ///         ^^^^^^^^^^^^^^^^^^^^^^^^
    /// ```
    pub arguments: ArgumentsList,
    /// The AST span of the node.
    pub span: Span,
}

impl Attribute {
    /// The name of the attribute, as a string.
    pub fn name(&self) -> &str {
        &self.name.name
    }

    /// Try to find the argument and return its span.
    pub fn span_for_argument(&self, argument: &str) -> Option<Span> {
        self.arguments
            .iter()
            .find(|a| a.name.as_ref().map(|n| n.name.as_str()) == Some(argument))
            .map(|a| a.span)
    }
}

impl WithSpan for Attribute {
    fn span(&self) -> Span {
        self.span
    }
}

/// A node containing attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeContainer {
    Model(ModelId),
    ModelField(ModelId, FieldId),
    Enum(EnumId),
    EnumValue(EnumId, u32),
    CompositeType(CompositeTypeId),
    CompositeTypeField(CompositeTypeId, FieldId),
}

impl From<ModelId> for AttributeContainer {
    fn from(v: ModelId) -> Self {
        Self::Model(v)
    }
}

impl From<(ModelId, FieldId)> for AttributeContainer {
    fn from((model, field): (ModelId, FieldId)) -> Self {
        Self::ModelField(model, field)
    }
}

impl From<EnumId> for AttributeContainer {
    fn from(v: EnumId) -> Self {
        Self::Enum(v)
    }
}

impl From<(EnumId, u32)> for AttributeContainer {
    fn from((enm, val): (EnumId, u32)) -> Self {
        Self::EnumValue(enm, val)
    }
}

impl From<CompositeTypeId> for AttributeContainer {
    fn from(v: CompositeTypeId) -> Self {
        Self::CompositeType(v)
    }
}

impl From<(CompositeTypeId, FieldId)> for AttributeContainer {
    fn from((ct, field): (CompositeTypeId, FieldId)) -> Self {
        Self::CompositeTypeField(ct, field)
    }
}

/// An attribute, identified by the container it belongs to and its index in
/// the container's attribute list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeId(AttributeContainer, u32);

impl AttributeId {
    pub fn new_in_container(container: AttributeContainer, idx: usize) -> AttributeId {
        AttributeId(container, idx as u32)
    }

    pub fn container(self) -> AttributeContainer {
        self.0
    }

    pub fn attribute_idx(self) -> usize {
        self.1 as usize
    }
}
