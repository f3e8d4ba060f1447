use super::{
    IndexWalker, PrimaryKeyWalker, RelationFieldWalker, ScalarFieldWalker, UniqueCriteriaWalker, Walker,
};
use crate::types::{ModelAttributes, ShardKeyAttribute};
use diagnostics::Span;
use either::Either;
use schema_ast::ast::{self, WithName};

/// A `model` declaration in the schema.
pub type ModelWalker<'db> = Walker<'db, crate::ModelId>;

impl<'db> ModelWalker<'db> {
    /// The name of the model.
    pub fn name(self) -> &'db str {
        self.ast_model().name()
    }

    /// The AST node.
    pub fn ast_model(self) -> &'db ast::Model {
        &self.db.asts[self.id]
    }

    pub(crate) fn attributes(self) -> &'db ModelAttributes {
        &self.db.types.model_attributes[&self.id]
    }

    /// The name of the database table the model points to.
    pub fn database_name(self) -> &'db str {
        self.mapped_name().unwrap_or_else(|| self.name())
    }

    /// The mapped name of the model, from `@@map`.
    pub fn mapped_name(self) -> Option<&'db str> {
        self.attributes().mapped_name.map(|id| &self.db.interner[id])
    }

    /// True if the model is ignored with `@@ignore`.
    pub fn is_ignored(self) -> bool {
        self.attributes().is_ignored
    }

    /// The `@@schema` annotation, if any.
    pub fn schema(self) -> Option<(&'db str, Span)> {
        self.attributes()
            .schema
            .map(|(name, span)| (&self.db.interner[name], span))
    }

    /// The scalar fields of the model, in declaration order.
    pub fn scalar_fields(self) -> impl ExactSizeIterator<Item = ScalarFieldWalker<'db>> + Clone {
        let db = self.db;
        db.types
            .range_model_scalar_fields(self.id)
            .map(move |(id, _)| db.walk(id))
    }

    /// The relation fields of the model, in declaration order.
    pub fn relation_fields(self) -> impl ExactSizeIterator<Item = RelationFieldWalker<'db>> + Clone {
        let db = self.db;
        db.types
            .range_model_relation_fields(self.id)
            .map(move |(id, _)| db.walk(id))
    }

    /// The primary key of the model, from `@id` or `@@id`.
    pub fn primary_key(self) -> Option<PrimaryKeyWalker<'db>> {
        self.attributes().primary_key.as_ref().map(|pk| PrimaryKeyWalker {
            model_id: self.id,
            attribute: pk,
            db: self.db,
        })
    }

    /// The indexes of the model: `@@index`, `@@fulltext`, and the unique
    /// constraints (`@unique` and `@@unique`).
    pub fn indexes(self) -> impl Iterator<Item = IndexWalker<'db>> {
        let model_id = self.id;
        let db = self.db;

        self.attributes()
            .ast_indexes
            .iter()
            .map(move |(attribute_id, index)| IndexWalker {
                model_id,
                attribute_id: *attribute_id,
                index,
                db,
            })
    }

    /// The shard key of the model, from `@shardKey` or `@@shardKey`.
    pub fn shard_key(self) -> Option<ShardKeyWalker<'db>> {
        self.attributes().shard_key.as_ref().map(|shard_key| ShardKeyWalker {
            model_id: self.id,
            attribute: shard_key,
            db: self.db,
        })
    }

    /// All the criteria that uniquely identify a record: the primary key and
    /// every unique index.
    pub fn unique_criterias(self) -> impl Iterator<Item = UniqueCriteriaWalker<'db>> {
        let db = self.db;

        let from_pk = self
            .attributes()
            .primary_key
            .iter()
            .map(move |pk| UniqueCriteriaWalker { fields: &pk.fields, db });

        let from_indexes = self
            .indexes()
            .filter(|walker| walker.is_unique())
            .map(move |walker| UniqueCriteriaWalker {
                fields: &walker.index.fields,
                db,
            });

        from_pk.chain(from_indexes)
    }

    /// The subset of `unique_criterias()` with no optional and no unsupported
    /// fields.
    pub fn required_unique_criterias(self) -> impl Iterator<Item = UniqueCriteriaWalker<'db>> {
        self.unique_criterias().filter(|criteria| criteria.is_strict_criteria())
    }
}

/// The `@shardKey` or `@@shardKey` attribute of a model.
#[derive(Clone, Copy)]
pub struct ShardKeyWalker<'db> {
    pub(crate) model_id: crate::ModelId,
    pub(crate) attribute: &'db ShardKeyAttribute,
    pub(crate) db: &'db crate::ParserDatabase,
}

impl<'db> ShardKeyWalker<'db> {
    /// The model the shard key is defined on.
    pub fn model(self) -> ModelWalker<'db> {
        self.db.walk(self.model_id)
    }

    /// True if the shard key was defined with the field-level `@shardKey`
    /// form.
    pub fn is_defined_on_field(self) -> bool {
        self.attribute.source_field.is_some()
    }

    /// The scalar fields the shard key covers, in definition order.
    pub fn fields(self) -> impl ExactSizeIterator<Item = ScalarFieldWalker<'db>> + Clone {
        let db = self.db;
        self.attribute.fields.iter().map(move |field| match field.path.field_in_index() {
            Either::Left(sfid) => db.walk(sfid),
            Either::Right(_) => db.walk(field.path.root()),
        })
    }
}
