use super::{ModelWalker, ScalarFieldWalker};
use crate::{
    types::{FieldWithArgs, IndexAlgorithm, IndexAttribute, IndexType, OperatorClass, SortOrder},
    ParserDatabase,
};
use either::Either;
use schema_ast::ast;

/// An index, unique constraint or fulltext index.
#[derive(Clone, Copy)]
pub struct IndexWalker<'db> {
    pub(crate) model_id: crate::ModelId,
    pub(crate) attribute_id: crate::AttributeId,
    pub(crate) index: &'db IndexAttribute,
    pub(crate) db: &'db ParserDatabase,
}

impl<'db> IndexWalker<'db> {
    /// The model the index is defined on.
    pub fn model(self) -> ModelWalker<'db> {
        self.db.walk(self.model_id)
    }

    /// The AST node of the defining attribute.
    pub fn ast_attribute(self) -> &'db ast::Attribute {
        &self.db.asts[self.attribute_id]
    }

    /// The `name:` argument of the index attribute. The client name of the
    /// index, as opposed to `mapped_name()`, the database name.
    pub fn name(self) -> Option<&'db str> {
        self.index.name.map(|id| &self.db.interner[id])
    }

    /// The `map:` argument of the index attribute: the database name.
    pub fn mapped_name(self) -> Option<&'db str> {
        self.index.mapped_name.map(|id| &self.db.interner[id])
    }

    /// Is this index a unique constraint?
    pub fn is_unique(self) -> bool {
        self.index.is_unique()
    }

    /// Is this index a fulltext index?
    pub fn is_fulltext(self) -> bool {
        self.index.is_fulltext()
    }

    /// Is this a plain index?
    pub fn is_normal(self) -> bool {
        matches!(self.index.r#type, IndexType::Normal)
    }

    /// The index algorithm from the `type:` argument, if set.
    pub fn algorithm(self) -> Option<IndexAlgorithm> {
        self.index.algorithm
    }

    /// The `clustered:` argument, if set.
    pub fn clustered(self) -> Option<bool> {
        self.index.clustered
    }

    /// True if the index was defined with the field-level form (`@unique` on
    /// a field).
    pub fn is_defined_on_field(self) -> bool {
        self.index.source_field.is_some()
    }

    /// The fields of the index, with their arguments, in definition order.
    pub fn scalar_field_attributes(self) -> impl ExactSizeIterator<Item = ScalarFieldAttributeWalker<'db>> + Clone {
        let db = self.db;
        self.index
            .fields
            .iter()
            .map(move |args| ScalarFieldAttributeWalker { args, db })
    }

    /// The scalar fields covered by the index, in definition order. For
    /// composite paths, the root field on the model.
    pub fn fields(self) -> impl ExactSizeIterator<Item = ScalarFieldWalker<'db>> + Clone {
        let db = self.db;
        self.index.fields.iter().map(move |args| db.walk(args.path.root()))
    }

    /// Is the field part of the index?
    pub fn contains_field(self, field: ScalarFieldWalker<'db>) -> bool {
        self.fields().any(|f| f.id == field.id)
    }
}

/// A field in an index or primary key definition, together with its
/// arguments: `@@index([x(sort: Desc, length: 10)])`.
#[derive(Clone, Copy)]
pub struct ScalarFieldAttributeWalker<'db> {
    pub(crate) args: &'db FieldWithArgs,
    pub(crate) db: &'db ParserDatabase,
}

impl<'db> ScalarFieldAttributeWalker<'db> {
    /// The sort order of the field in the index, if defined.
    pub fn sort_order(self) -> Option<SortOrder> {
        self.args.sort_order
    }

    /// The `length:` argument of the field, if defined.
    pub fn length(self) -> Option<u32> {
        self.args.length
    }

    /// The `ops:` argument of the field, if defined.
    pub fn operator_class(self) -> Option<OperatorClassWalker<'db>> {
        self.args
            .operator_class
            .map(|class| OperatorClassWalker { class, db: self.db })
    }

    /// The field the index element points at: either a scalar field of the
    /// model, or a field reached through a composite type path.
    pub fn as_path(self) -> Either<ScalarFieldWalker<'db>, (crate::CompositeTypeId, ast::FieldId)> {
        match self.args.path.field_in_index() {
            Either::Left(sfid) => Either::Left(self.db.walk(sfid)),
            Either::Right(path) => Either::Right(path),
        }
    }

    /// The root scalar field of the index element on the model.
    pub fn field(self) -> ScalarFieldWalker<'db> {
        self.db.walk(self.args.path.root())
    }
}

/// The operator class of an index field.
#[derive(Clone, Copy)]
pub struct OperatorClassWalker<'db> {
    pub(crate) class: OperatorClass,
    pub(crate) db: &'db ParserDatabase,
}

impl<'db> OperatorClassWalker<'db> {
    /// The operator class: a known class, or the raw string passed with
    /// `ops: raw("...")`.
    pub fn get(self) -> Either<OperatorClass, &'db str> {
        match self.class {
            OperatorClass::Raw(string_id) => Either::Right(&self.db.interner[string_id]),
            class => Either::Left(class),
        }
    }
}
