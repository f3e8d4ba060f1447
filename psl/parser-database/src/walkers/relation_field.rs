use super::{ModelWalker, RelationWalker, ScalarFieldWalker, Walker};
use crate::{
    types::{RelationField, RelationFieldId},
    ReferentialAction,
};
use schema_ast::ast::{self, WithName};

/// A relation field on a model in the schema.
pub type RelationFieldWalker<'db> = Walker<'db, RelationFieldId>;

impl<'db> RelationFieldWalker<'db> {
    /// The field name.
    pub fn name(self) -> &'db str {
        self.ast_field().name()
    }

    /// The AST node of the field.
    pub fn ast_field(self) -> &'db ast::Field {
        let RelationField { model_id, field_id, .. } = self.db.types[self.id];
        &self.db.asts[model_id][field_id]
    }

    /// The field id in the AST model.
    pub fn field_id(self) -> ast::FieldId {
        self.db.types[self.id].field_id
    }

    /// The model the field is defined on.
    pub fn model(self) -> ModelWalker<'db> {
        self.walk(self.db.types[self.id].model_id)
    }

    /// The model the relation field refers to.
    pub fn related_model(self) -> ModelWalker<'db> {
        self.walk(self.db.types[self.id].referenced_model)
    }

    /// Does the relation field reference the passed in model?
    pub fn references_model(self, other: crate::ModelId) -> bool {
        self.db.types[self.id].referenced_model == other
    }

    /// The relation name explicitly written in the schema, from
    /// `@relation("...")`.
    pub fn explicit_relation_name(self) -> Option<&'db str> {
        self.db.types[self.id].name.map(|id| &self.db.interner[id])
    }

    /// The `onDelete` argument on the relation.
    pub fn explicit_on_delete(self) -> Option<ReferentialAction> {
        self.db.types[self.id].on_delete.map(|(action, _)| action)
    }

    /// The `onUpdate` argument on the relation.
    pub fn explicit_on_update(self) -> Option<ReferentialAction> {
        self.db.types[self.id].on_update.map(|(action, _)| action)
    }

    /// Is there an `@ignore` attribute on the field?
    pub fn is_ignored(self) -> bool {
        self.db.types[self.id].is_ignored
    }

    /// Is the field required?
    pub fn is_required(self) -> bool {
        self.ast_field().arity.is_required()
    }

    /// Is the field optional?
    pub fn is_optional(self) -> bool {
        self.ast_field().arity.is_optional()
    }

    /// Is the field a list?
    pub fn is_list(self) -> bool {
        self.ast_field().arity.is_list()
    }

    /// The `map:` argument of the `@relation` attribute: the foreign key
    /// constraint name.
    pub fn mapped_name(self) -> Option<&'db str> {
        self.db.types[self.id].mapped_name.map(|id| &self.db.interner[id])
    }

    /// The fields in the `fields: [...]` argument of the `@relation`
    /// attribute: the foreign key columns on this model.
    pub fn referencing_fields(self) -> Option<impl ExactSizeIterator<Item = ScalarFieldWalker<'db>> + Clone> {
        let db = self.db;
        self.db.types[self.id]
            .fields
            .as_ref()
            .map(move |fields| fields.iter().map(move |field| db.walk(*field)))
    }

    /// The fields in the `references: [...]` argument of the `@relation`
    /// attribute: the referenced fields on the related model.
    pub fn referenced_fields(self) -> Option<impl ExactSizeIterator<Item = ScalarFieldWalker<'db>> + Clone> {
        let db = self.db;
        self.db.types[self.id]
            .references
            .as_ref()
            .map(move |references| references.iter().map(move |field| db.walk(*field)))
    }

    /// The relation this field belongs to.
    pub fn relation(self) -> RelationWalker<'db> {
        self.walk(
            self.db
                .relations
                .from_field(self.id)
                .expect("relation fields must belong to a relation"),
        )
    }
}
