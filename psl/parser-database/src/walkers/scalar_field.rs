use super::{ModelWalker, Walker};
use crate::{
    types::{DefaultAttribute, ScalarField, ScalarFieldId, ScalarFieldType, ScalarType},
    ParserDatabase,
};
use diagnostics::Span;
use schema_ast::ast::{self, WithName};

/// A scalar field, as part of a model.
pub type ScalarFieldWalker<'db> = Walker<'db, ScalarFieldId>;

impl<'db> ScalarFieldWalker<'db> {
    /// The field name.
    pub fn name(self) -> &'db str {
        self.ast_field().name()
    }

    /// The AST node for the field.
    pub fn ast_field(self) -> &'db ast::Field {
        let ScalarField { model_id, field_id, .. } = self.db.types[self.id];
        &self.db.asts[model_id][field_id]
    }

    /// The field id in the AST model.
    pub fn field_id(self) -> ast::FieldId {
        self.db.types[self.id].field_id
    }

    /// The model the field belongs to.
    pub fn model(self) -> ModelWalker<'db> {
        self.walk(self.db.types[self.id].model_id)
    }

    /// The type of the field.
    pub fn scalar_field_type(self) -> ScalarFieldType {
        self.db.types[self.id].r#type
    }

    /// The type of the field in case it is a built-in scalar type.
    pub fn scalar_type(self) -> Option<ScalarType> {
        self.db.types[self.id].r#type.as_builtin_scalar()
    }

    /// The field arity.
    pub fn arity(self) -> ast::FieldArity {
        self.ast_field().arity
    }

    /// Is the field optional / nullable?
    pub fn is_optional(self) -> bool {
        self.ast_field().arity.is_optional()
    }

    /// Is the field a list?
    pub fn is_list(self) -> bool {
        self.ast_field().arity.is_list()
    }

    /// Is the field required?
    pub fn is_required(self) -> bool {
        self.ast_field().arity.is_required()
    }

    /// Is there an `@ignore` attribute on the field?
    pub fn is_ignored(self) -> bool {
        self.db.types[self.id].is_ignored
    }

    /// Is there an `@updatedAt` attribute on the field?
    pub fn is_updated_at(self) -> bool {
        self.db.types[self.id].is_updated_at
    }

    /// Is the type of the field `Unsupported("...")`?
    pub fn is_unsupported(self) -> bool {
        self.db.types[self.id].r#type.is_unsupported()
    }

    /// The contents of the `Unsupported("...")` type, if applicable.
    pub fn unsupported_type(self) -> Option<&'db str> {
        match self.db.types[self.id].r#type {
            ScalarFieldType::Unsupported(name) => Some(&self.db.interner[name]),
            _ => None,
        }
    }

    /// The name of the field in the database, from `@map`.
    pub fn mapped_name(self) -> Option<&'db str> {
        self.db.types[self.id].mapped_name.map(|id| &self.db.interner[id])
    }

    /// The name of the database column the field points to.
    pub fn database_name(self) -> &'db str {
        self.mapped_name().unwrap_or_else(|| self.name())
    }

    /// The `@default()` attribute of the field, if any.
    pub fn default_value(self) -> Option<DefaultValueWalker<'db>> {
        self.db.types[self.id].default.as_ref().map(|default| DefaultValueWalker {
            field_id: self.id,
            default,
            db: self.db,
        })
    }

    /// The `@db.Xyz(...)` native type annotation, if any: scope name, type
    /// name, arguments and span.
    pub fn raw_native_type(self) -> Option<(&'db str, &'db str, &'db [String], Span)> {
        let db = self.db;
        self.db.types[self.id]
            .native_type
            .as_ref()
            .map(move |(scope, name, args, span)| (&db.interner[*scope], &db.interner[*name], args.as_slice(), *span))
    }

    /// Is the field the whole primary key of the model?
    pub fn is_single_pk(self) -> bool {
        self.model()
            .primary_key()
            .map(|pk| pk.contains_exactly_fields(std::iter::once(self)))
            .unwrap_or(false)
    }
}

/// The `@default()` attribute of a scalar field.
#[derive(Clone, Copy)]
pub struct DefaultValueWalker<'db> {
    pub(crate) field_id: ScalarFieldId,
    pub(crate) default: &'db DefaultAttribute,
    pub(crate) db: &'db ParserDatabase,
}

impl<'db> DefaultValueWalker<'db> {
    /// The AST node of the attribute.
    pub fn ast_attribute(self) -> &'db ast::Attribute {
        &self.db.asts[self.default.default_attribute]
    }

    /// The value expression in the `@default` attribute.
    ///
    /// ```ignore
    /// score Int @default(0)
    ///                    ^
    /// ```
    pub fn value(self) -> &'db ast::Expression {
        &self.ast_attribute().arguments.arguments[self.default.argument_idx].value
    }

    /// Is this an `autoincrement()` default?
    pub fn is_autoincrement(self) -> bool {
        matches!(self.value(), ast::Expression::Function(name, _, _) if name == "autoincrement")
    }

    /// Is this a `cuid()` default?
    pub fn is_cuid(self) -> bool {
        matches!(self.value(), ast::Expression::Function(name, _, _) if name == "cuid")
    }

    /// Is this a `dbgenerated()` default?
    pub fn is_dbgenerated(self) -> bool {
        matches!(self.value(), ast::Expression::Function(name, _, _) if name == "dbgenerated")
    }

    /// Is this a `now()` default?
    pub fn is_now(self) -> bool {
        matches!(self.value(), ast::Expression::Function(name, _, _) if name == "now")
    }

    /// Is this a `uuid()` default?
    pub fn is_uuid(self) -> bool {
        matches!(self.value(), ast::Expression::Function(name, _, _) if name == "uuid")
    }

    /// The `map:` argument of the attribute.
    pub fn mapped_name(self) -> Option<&'db str> {
        self.default.mapped_name.map(|id| &self.db.interner[id])
    }

    /// The field the attribute is defined on.
    pub fn field(self) -> ScalarFieldWalker<'db> {
        self.db.walk(self.field_id)
    }
}
