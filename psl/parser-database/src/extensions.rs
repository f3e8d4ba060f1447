/// The id of a type in the extension type registry passed to
/// [`ParserDatabase::new`](crate::ParserDatabase::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExtensionTypeId(u32);

impl From<u32> for ExtensionTypeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ExtensionTypeId> for u32 {
    fn from(id: ExtensionTypeId) -> Self {
        id.0
    }
}

/// A single type contributed by a database extension.
#[derive(Debug, Clone)]
pub struct ExtensionTypeEntry<'a> {
    pub id: ExtensionTypeId,
    /// The name of the type in the schema language.
    pub prisma_name: &'a str,
    /// The name of the type in the database.
    pub db_name: &'a str,
    /// The type modifiers accepted by the database type.
    pub db_type_modifiers: &'a [String],
}

/// A registry of types contributed by database extensions. Field type names
/// that resolve through the registry are classified as extension types.
///
/// The registry is injected into the analyzer; the empty registry
/// ([`NoExtensionTypes`]) is the common case.
pub trait ExtensionTypes {
    /// Resolve a type name in the schema language to an extension type.
    fn get_by_prisma_name(&self, name: &str) -> Option<ExtensionTypeId>;

    /// Resolve an extension type id back to its entry.
    fn get_by_id(&self, id: ExtensionTypeId) -> Option<ExtensionTypeEntry<'_>>;
}

/// The empty extension type registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoExtensionTypes;

impl ExtensionTypes for NoExtensionTypes {
    fn get_by_prisma_name(&self, _: &str) -> Option<ExtensionTypeId> {
        None
    }

    fn get_by_id(&self, _: ExtensionTypeId) -> Option<ExtensionTypeEntry<'_>> {
        None
    }
}
