use super::ScalarFieldWalker;
use crate::{types::FieldWithArgs, ParserDatabase};
use either::Either;

/// A set of fields that uniquely identify a record: the primary key or a
/// unique index.
#[derive(Clone, Copy)]
pub struct UniqueCriteriaWalker<'db> {
    pub(crate) fields: &'db [FieldWithArgs],
    pub(crate) db: &'db ParserDatabase,
}

impl<'db> UniqueCriteriaWalker<'db> {
    /// The scalar fields of the criteria, in definition order. For composite
    /// paths, the root field on the model.
    pub fn fields(self) -> impl ExactSizeIterator<Item = ScalarFieldWalker<'db>> + Clone {
        let db = self.db;
        self.fields.iter().map(move |field| db.walk(field.path.root()))
    }

    /// A strict criteria can always identify a record: it has no optional
    /// and no unsupported fields.
    pub fn is_strict_criteria(self) -> bool {
        !self.has_optional_fields() && !self.has_unsupported_fields()
    }

    pub(crate) fn has_optional_fields(self) -> bool {
        self.fields.iter().any(|field| match field.path.field_in_index() {
            Either::Left(sfid) => self.db.walk(sfid).is_optional(),
            Either::Right((ctid, field_id)) => self.db.asts[ctid][field_id].arity.is_optional(),
        })
    }

    pub(crate) fn has_unsupported_fields(self) -> bool {
        self.fields.iter().any(|field| match field.path.field_in_index() {
            Either::Left(sfid) => self.db.walk(sfid).is_unsupported(),
            Either::Right((ctid, field_id)) => self
                .db
                .types
                .composite_type_fields
                .get(&(ctid, field_id))
                .map(|field| field.r#type.is_unsupported())
                .unwrap_or(false),
        })
    }
}
