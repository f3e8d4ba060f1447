use super::{ModelWalker, ScalarFieldAttributeWalker, ScalarFieldWalker};
use crate::{types::IdAttribute, ParserDatabase};
use schema_ast::ast;

/// The `@id` or `@@id` attribute of a model.
#[derive(Clone, Copy)]
pub struct PrimaryKeyWalker<'db> {
    pub(crate) model_id: crate::ModelId,
    pub(crate) attribute: &'db IdAttribute,
    pub(crate) db: &'db ParserDatabase,
}

impl<'db> PrimaryKeyWalker<'db> {
    /// The model the id is defined on.
    pub fn model(self) -> ModelWalker<'db> {
        self.db.walk(self.model_id)
    }

    /// The AST node of the defining attribute.
    pub fn ast_attribute(self) -> &'db ast::Attribute {
        &self.db.asts[self.attribute.source_attribute]
    }

    /// The `name:` argument of `@@id`: the client name of the id.
    pub fn name(self) -> Option<&'db str> {
        self.attribute.name.map(|id| &self.db.interner[id])
    }

    /// The `map:` argument: the database name of the primary key constraint.
    pub fn mapped_name(self) -> Option<&'db str> {
        self.attribute.mapped_name.map(|id| &self.db.interner[id])
    }

    /// The `clustered:` argument, if set.
    pub fn clustered(self) -> Option<bool> {
        self.attribute.clustered
    }

    /// True if the primary key was defined with the field-level `@id` form.
    pub fn is_defined_on_field(self) -> bool {
        self.attribute.source_field.is_some()
    }

    /// The scalar fields the id covers, in definition order. For composite
    /// paths, the root field on the model.
    pub fn fields(self) -> impl ExactSizeIterator<Item = ScalarFieldWalker<'db>> + Clone {
        let db = self.db;
        self.attribute.fields.iter().map(move |field| db.walk(field.path.root()))
    }

    /// The fields of the id, with their arguments, in definition order.
    pub fn scalar_field_attributes(self) -> impl ExactSizeIterator<Item = ScalarFieldAttributeWalker<'db>> + Clone {
        let db = self.db;
        self.attribute
            .fields
            .iter()
            .map(move |args| ScalarFieldAttributeWalker { args, db })
    }

    /// Does the primary key cover exactly the given fields, in the same
    /// order?
    pub fn contains_exactly_fields(self, fields: impl ExactSizeIterator<Item = ScalarFieldWalker<'db>>) -> bool {
        self.attribute.fields.len() == fields.len()
            && self
                .fields()
                .zip(fields)
                .all(|(this, other)| this.id == other.id)
    }
}
