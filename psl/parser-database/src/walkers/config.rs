use super::Walker;
use crate::coerce_opt;
use schema_ast::ast::{self, WithName};

/// A `datasource` block in the schema.
pub type DatasourceWalker<'db> = Walker<'db, crate::InFile<ast::SourceId>>;

/// A `generator` block in the schema.
pub type GeneratorWalker<'db> = Walker<'db, crate::InFile<ast::GeneratorId>>;

impl<'db> DatasourceWalker<'db> {
    /// The name of the datasource.
    pub fn name(self) -> &'db str {
        self.ast_source().name()
    }

    /// The AST node.
    pub fn ast_source(self) -> &'db ast::SourceConfig {
        &self.db.asts[self.id]
    }

    /// The raw key/value properties of the block, in declaration order.
    pub fn properties(self) -> impl ExactSizeIterator<Item = &'db ast::ConfigBlockProperty> + Clone {
        self.ast_source().properties.iter()
    }

    /// The value of the property with the given key, if both are present.
    pub fn property(self, name: &str) -> Option<&'db ast::Expression> {
        self.properties()
            .find(|property| property.name.name == name)
            .and_then(|property| property.value.as_ref())
    }

    /// The property coerced to a boolean. Configuration properties are read
    /// relaxed: `flag = true` and `flag = "true"` are equivalent.
    pub fn boolean_property(self, name: &str) -> Option<bool> {
        self.property(name).and_then(coerce_opt::boolean)
    }

    /// The property coerced to an integer. Configuration properties are read
    /// relaxed: `size = 5` and `size = "5"` are equivalent.
    pub fn integer_property(self, name: &str) -> Option<i64> {
        self.property(name).and_then(coerce_opt::integer)
    }
}

impl<'db> GeneratorWalker<'db> {
    /// The name of the generator.
    pub fn name(self) -> &'db str {
        self.ast_generator().name()
    }

    /// The AST node.
    pub fn ast_generator(self) -> &'db ast::GeneratorConfig {
        &self.db.asts[self.id]
    }

    /// The raw key/value properties of the block, in declaration order.
    pub fn properties(self) -> impl ExactSizeIterator<Item = &'db ast::ConfigBlockProperty> + Clone {
        self.ast_generator().properties.iter()
    }

    /// The value of the property with the given key, if both are present.
    pub fn property(self, name: &str) -> Option<&'db ast::Expression> {
        self.properties()
            .find(|property| property.name.name == name)
            .and_then(|property| property.value.as_ref())
    }

    /// The property coerced to a boolean. Configuration properties are read
    /// relaxed: `flag = true` and `flag = "true"` are equivalent.
    pub fn boolean_property(self, name: &str) -> Option<bool> {
        self.property(name).and_then(coerce_opt::boolean)
    }

    /// The property coerced to an integer. Configuration properties are read
    /// relaxed: `size = 5` and `size = "5"` are equivalent.
    pub fn integer_property(self, name: &str) -> Option<i64> {
        self.property(name).and_then(coerce_opt::integer)
    }
}
