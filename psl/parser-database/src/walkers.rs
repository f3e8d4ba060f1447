//! Convenient access to a schema as understood by ParserDatabase.
//!
//! A walker is a cheap `Copy` handle bundling a reference to the database
//! with an identifier. Walkers expose semantic accessors and are the stable
//! public API of the analyzer: downstream consumers navigate the resolved
//! schema through walkers and never read IR tables or raw AST directly.

mod composite_type;
mod config;
mod r#enum;
mod index;
mod model;
mod primary_key;
mod relation;
mod relation_field;
mod scalar_field;
mod unique_criteria;

pub use composite_type::*;
pub use config::*;
pub use index::*;
pub use model::*;
pub use primary_key::*;
pub use r#enum::*;
pub use relation::*;
pub use relation_field::*;
pub use scalar_field::*;
pub use unique_criteria::*;

/// A generic walker. Only walkers instantiated with a concrete ID type (`I`)
/// are useful.
#[derive(Clone, Copy)]
pub struct Walker<'db, I> {
    /// The parser database being traversed.
    pub db: &'db crate::ParserDatabase,
    /// The identifier of the focused element.
    pub id: I,
}

impl<'db, I> Walker<'db, I> {
    /// Traverse something else in the same schema.
    pub fn walk<J>(self, other: J) -> Walker<'db, J> {
        self.db.walk(other)
    }
}

impl<'db, I: PartialEq> PartialEq for Walker<'db, I> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<'db, I: PartialEq> Eq for Walker<'db, I> {}

impl<'db, I: std::hash::Hash> std::hash::Hash for Walker<'db, I> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<'db, I: std::fmt::Debug> std::fmt::Debug for Walker<'db, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Walker").field(&self.id).finish()
    }
}
