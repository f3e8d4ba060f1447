use super::{
    Attribute, Comment, Field, FieldId, Identifier, WithAttributes, WithDocumentation, WithIdentifier, WithSpan,
};
use diagnostics::Span;

/// An opaque identifier for a composite type in a schema AST. Use the
/// `schema[composite_type_id]` syntax to resolve the id to an
/// `ast::CompositeType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompositeTypeId(pub(crate) u32);

/// A composite type declaration. Composite types can be used as field types,
/// but they never back a table of their own.
#[derive(Debug, Clone)]
pub struct CompositeType {
    /// The name of the type.
    ///
    /// ```ignore
    /// type Address { .. }
    ///      ^^^^^^^
    /// ```
    pub name: Identifier,
    /// The fields of the type.
    pub fields: Vec<Field>,
    /// The attributes of this type.
    pub attributes: Vec<Attribute>,
    /// The documentation for this type.
    pub documentation: Option<Comment>,
    /// The location of this type in the text representation.
    pub span: Span,
}

impl CompositeType {
    pub fn iter_fields(&self) -> impl ExactSizeIterator<Item = (FieldId, &Field)> + Clone {
        self.fields
            .iter()
            .enumerate()
            .map(|(idx, field)| (FieldId(idx as u32), field))
    }
}

impl std::ops::Index<FieldId> for CompositeType {
    type Output = Field;

    fn index(&self, index: FieldId) -> &Self::Output {
        &self.fields[index.0 as usize]
    }
}

impl WithIdentifier for CompositeType {
    fn identifier(&self) -> &Identifier {
        &self.name
    }
}

impl WithSpan for CompositeType {
    fn span(&self) -> Span {
        self.span
    }
}

impl WithAttributes for CompositeType {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

impl WithDocumentation for CompositeType {
    fn documentation(&self) -> Option<&str> {
        self.documentation.as_ref().map(|doc| doc.text.as_str())
    }
}
