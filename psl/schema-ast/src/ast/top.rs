use super::{
    CompositeType, CompositeTypeId, Enum, EnumId, GeneratorConfig, GeneratorId, Identifier, Model, ModelId,
    SourceConfig, SourceId, WithIdentifier, WithSpan,
};
use diagnostics::Span;

/// Enum for distinguishing between top-level entries.
#[derive(Debug, Clone)]
pub enum Top {
    /// A composite type.
    CompositeType(CompositeType),
    /// An enum declaration.
    Enum(Enum),
    /// A generator block.
    Generator(GeneratorConfig),
    /// A model declaration.
    Model(Model),
    /// A datasource block.
    Source(SourceConfig),
}

impl Top {
    /// A string saying what kind of item this is.
    pub fn get_type(&self) -> &'static str {
        match self {
            Top::CompositeType(_) => "composite type",
            Top::Enum(_) => "enum",
            Top::Generator(_) => "generator",
            Top::Model(_) => "model",
            Top::Source(_) => "datasource",
        }
    }

    /// The name of the item.
    pub fn name(&self) -> &str {
        &self.identifier().name
    }

    pub fn as_composite_type(&self) -> Option<&CompositeType> {
        match self {
            Top::CompositeType(ct) => Some(ct),
            _ => None,
        }
    }

    pub fn as_model(&self) -> Option<&Model> {
        match self {
            Top::Model(model) => Some(model),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&Enum> {
        match self {
            Top::Enum(r#enum) => Some(r#enum),
            _ => None,
        }
    }

    pub fn as_generator(&self) -> Option<&GeneratorConfig> {
        match self {
            Top::Generator(gen_config) => Some(gen_config),
            _ => None,
        }
    }

    pub fn as_source(&self) -> Option<&SourceConfig> {
        match self {
            Top::Source(source) => Some(source),
            _ => None,
        }
    }
}

impl WithIdentifier for Top {
    fn identifier(&self) -> &Identifier {
        match self {
            Top::CompositeType(ct) => ct.identifier(),
            Top::Enum(x) => x.identifier(),
            Top::Generator(x) => x.identifier(),
            Top::Model(x) => x.identifier(),
            Top::Source(x) => x.identifier(),
        }
    }
}

impl WithSpan for Top {
    fn span(&self) -> Span {
        match self {
            Top::CompositeType(ct) => ct.span(),
            Top::Enum(en) => en.span(),
            Top::Generator(gen) => gen.span(),
            Top::Model(model) => model.span(),
            Top::Source(source) => source.span(),
        }
    }
}

/// An identifier for a top-level item in a schema AST. Use the `schema[top_id]`
/// syntax to resolve the id to an `ast::Top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TopId {
    /// A composite type.
    CompositeType(CompositeTypeId),
    /// An enum declaration.
    Enum(EnumId),
    /// A generator block.
    Generator(GeneratorId),
    /// A model declaration.
    Model(ModelId),
    /// A datasource block.
    Source(SourceId),
}

impl TopId {
    /// Try to interpret the top as an enum.
    pub fn as_enum_id(self) -> Option<EnumId> {
        match self {
            TopId::Enum(id) => Some(id),
            _ => None,
        }
    }

    /// Try to interpret the top as a model.
    pub fn as_model_id(self) -> Option<ModelId> {
        match self {
            TopId::Model(id) => Some(id),
            _ => None,
        }
    }

    /// Try to interpret the top as a composite type.
    pub fn as_composite_type_id(self) -> Option<CompositeTypeId> {
        match self {
            TopId::CompositeType(id) => Some(id),
            _ => None,
        }
    }

    pub(crate) fn top_idx(self) -> usize {
        match self {
            TopId::CompositeType(CompositeTypeId(idx))
            | TopId::Enum(EnumId(idx))
            | TopId::Generator(GeneratorId(idx))
            | TopId::Model(ModelId(idx))
            | TopId::Source(SourceId(idx)) => idx as usize,
        }
    }
}
