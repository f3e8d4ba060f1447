use super::Walker;
use crate::types::{CompositeTypeField, ScalarFieldType};
use diagnostics::Span;
use schema_ast::ast::{self, WithName};

/// A `type` declaration in the schema.
pub type CompositeTypeWalker<'db> = Walker<'db, crate::CompositeTypeId>;

/// A field in a composite type.
pub type CompositeTypeFieldWalker<'db> = Walker<'db, (crate::CompositeTypeId, ast::FieldId)>;

impl<'db> CompositeTypeWalker<'db> {
    /// The name of the composite type.
    pub fn name(self) -> &'db str {
        self.ast_composite_type().name()
    }

    /// The AST node.
    pub fn ast_composite_type(self) -> &'db ast::CompositeType {
        &self.db.asts[self.id]
    }

    /// Iterate over the fields of the composite type.
    pub fn fields(self) -> impl Iterator<Item = CompositeTypeFieldWalker<'db>> {
        let db = self.db;
        let ctid = self.id;
        db.types
            .composite_type_fields
            .range((ctid, ast::FieldId::MIN)..=(ctid, ast::FieldId::MAX))
            .map(move |(id, _)| db.walk(*id))
    }
}

impl<'db> CompositeTypeFieldWalker<'db> {
    fn field(self) -> &'db CompositeTypeField {
        &self.db.types.composite_type_fields[&self.id]
    }

    /// The composite type the field belongs to.
    pub fn composite_type(self) -> CompositeTypeWalker<'db> {
        self.walk(self.id.0)
    }

    /// The AST node for the field.
    pub fn ast_field(self) -> &'db ast::Field {
        &self.db.asts[self.id.0][self.id.1]
    }

    /// The name of the field.
    pub fn name(self) -> &'db str {
        self.ast_field().name()
    }

    /// The arity of the field.
    pub fn arity(self) -> ast::FieldArity {
        self.ast_field().arity
    }

    /// The type of the field.
    pub fn r#type(self) -> ScalarFieldType {
        self.field().r#type
    }

    /// The mapped name of the field, from `@map`.
    pub fn mapped_name(self) -> Option<&'db str> {
        self.field().mapped_name.map(|id| &self.db.interner[id])
    }

    /// The name of the field in the database.
    pub fn database_name(self) -> &'db str {
        self.mapped_name().unwrap_or_else(|| self.name())
    }

    /// The default value expression from `@default`, if any.
    pub fn default_value(self) -> Option<&'db ast::Expression> {
        self.field().default.as_ref().map(|default| {
            let attribute = &self.db.asts[default.default_attribute];
            &attribute.arguments.arguments[default.argument_idx].value
        })
    }

    /// The `@db.Xyz(...)` native type annotation, if any.
    pub fn raw_native_type(self) -> Option<(&'db str, &'db str, &'db [String], Span)> {
        let db = self.db;
        self.field()
            .native_type
            .as_ref()
            .map(move |(scope, name, args, span)| (&db.interner[*scope], &db.interner[*name], args.as_slice(), *span))
    }
}
