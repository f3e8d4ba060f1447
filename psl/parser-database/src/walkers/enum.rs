use super::Walker;
use schema_ast::ast::{self, WithDocumentation, WithName};

/// An `enum` declaration in the schema.
pub type EnumWalker<'db> = Walker<'db, crate::EnumId>;

/// One value in an `enum` declaration in the schema.
pub type EnumValueWalker<'db> = Walker<'db, (crate::EnumId, usize)>;

impl<'db> EnumWalker<'db> {
    /// The name of the enum.
    pub fn name(self) -> &'db str {
        self.ast_enum().name()
    }

    /// The AST node.
    pub fn ast_enum(self) -> &'db ast::Enum {
        &self.db.asts[self.id]
    }

    fn attributes(self) -> &'db crate::types::EnumAttributes {
        &self.db.types.enum_attributes[&self.id]
    }

    /// The mapped name of the enum, from `@@map`.
    pub fn mapped_name(self) -> Option<&'db str> {
        self.attributes().mapped_name.map(|id| &self.db.interner[id])
    }

    /// The name of the enum in the database.
    pub fn database_name(self) -> &'db str {
        self.mapped_name().unwrap_or_else(|| self.name())
    }

    /// The values of the enum.
    pub fn values(self) -> impl ExactSizeIterator<Item = EnumValueWalker<'db>> + Clone {
        let db = self.db;
        let enum_id = self.id;
        self.ast_enum()
            .values
            .iter()
            .enumerate()
            .map(move |(value_idx, _)| db.walk((enum_id, value_idx)))
    }
}

impl<'db> EnumValueWalker<'db> {
    fn ast_value(self) -> &'db ast::EnumValue {
        &self.db.asts[self.id.0].values[self.id.1]
    }

    /// The enum the value belongs to.
    pub fn r#enum(self) -> EnumWalker<'db> {
        self.walk(self.id.0)
    }

    /// The name of the value.
    pub fn name(self) -> &'db str {
        self.ast_value().name()
    }

    /// The documentation on the value.
    pub fn documentation(self) -> Option<&'db str> {
        self.ast_value().documentation()
    }

    /// The mapped name of the value, from `@map`.
    pub fn mapped_name(self) -> Option<&'db str> {
        self.db.types.enum_attributes[&self.id.0]
            .mapped_values
            .get(&(self.id.1 as u32))
            .map(|id| &self.db.interner[*id])
    }

    /// The name of the value in the database.
    pub fn database_name(self) -> &'db str {
        self.mapped_name().unwrap_or_else(|| self.name())
    }
}
