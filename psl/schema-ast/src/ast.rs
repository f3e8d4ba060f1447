mod argument;
mod attribute;
mod comment;
mod composite_type;
mod config;
mod r#enum;
mod expression;
mod field;
mod generator_config;
mod identifier;
mod model;
mod source_config;
mod top;
mod traits;

pub use argument::{Argument, ArgumentsList, EmptyArgument};
pub use attribute::{Attribute, AttributeContainer, AttributeId};
pub use comment::Comment;
pub use composite_type::{CompositeType, CompositeTypeId};
pub use config::ConfigBlockProperty;
pub use expression::Expression;
pub use field::{Field, FieldArity, FieldId, FieldType};
pub use generator_config::{GeneratorConfig, GeneratorId};
pub use identifier::Identifier;
pub use model::{Model, ModelId};
pub use r#enum::{Enum, EnumValue, EnumId};
pub use source_config::{SourceConfig, SourceId};
pub use top::{Top, TopId};
pub use traits::{WithAttributes, WithDocumentation, WithIdentifier, WithName, WithSpan};

pub use diagnostics::Span;

/// AST representation of a schema file.
///
/// This module is used internally to represent an AST. The AST's nodes can be
/// used during validation of a schema, especially when implementing custom
/// attributes.
///
/// The AST is not validated, also fields and attributes are not resolved.
/// Every node is annotated with its location in the text representation.
/// Basically, the AST is an object oriented representation of the schema's
/// text.
#[derive(Debug, Default)]
pub struct SchemaAst {
    /// All structures of the schema, in the order they appear in the source.
    pub tops: Vec<Top>,
}

impl SchemaAst {
    /// Iterate over all the top-level items in the schema.
    pub fn iter_tops(&self) -> impl Iterator<Item = (TopId, &Top)> {
        self.tops
            .iter()
            .enumerate()
            .map(|(top_idx, top)| (top_idx_to_top_id(top_idx, top), top))
    }

    /// Iterate over all the datasource blocks in the schema.
    pub fn sources(&self) -> impl Iterator<Item = &SourceConfig> {
        self.tops.iter().filter_map(|top| top.as_source())
    }

    /// Iterate over all the generator blocks in the schema.
    pub fn generators(&self) -> impl Iterator<Item = &GeneratorConfig> {
        self.tops.iter().filter_map(|top| top.as_generator())
    }
}

impl std::ops::Index<TopId> for SchemaAst {
    type Output = Top;

    fn index(&self, index: TopId) -> &Self::Output {
        &self.tops[index.top_idx()]
    }
}

impl std::ops::Index<ModelId> for SchemaAst {
    type Output = Model;

    fn index(&self, index: ModelId) -> &Self::Output {
        self.tops[index.0 as usize].as_model().unwrap()
    }
}

impl std::ops::Index<EnumId> for SchemaAst {
    type Output = Enum;

    fn index(&self, index: EnumId) -> &Self::Output {
        self.tops[index.0 as usize].as_enum().unwrap()
    }
}

impl std::ops::Index<CompositeTypeId> for SchemaAst {
    type Output = CompositeType;

    fn index(&self, index: CompositeTypeId) -> &Self::Output {
        self.tops[index.0 as usize].as_composite_type().unwrap()
    }
}

impl std::ops::Index<SourceId> for SchemaAst {
    type Output = SourceConfig;

    fn index(&self, index: SourceId) -> &Self::Output {
        self.tops[index.0 as usize].as_source().unwrap()
    }
}

impl std::ops::Index<GeneratorId> for SchemaAst {
    type Output = GeneratorConfig;

    fn index(&self, index: GeneratorId) -> &Self::Output {
        self.tops[index.0 as usize].as_generator().unwrap()
    }
}

impl std::ops::Index<AttributeContainer> for SchemaAst {
    type Output = [Attribute];

    fn index(&self, index: AttributeContainer) -> &Self::Output {
        match index {
            AttributeContainer::Model(model_id) => &self[model_id].attributes,
            AttributeContainer::ModelField(model_id, field_id) => &self[model_id][field_id].attributes,
            AttributeContainer::Enum(enum_id) => &self[enum_id].attributes,
            AttributeContainer::EnumValue(enum_id, value_idx) => &self[enum_id].values[value_idx as usize].attributes,
            AttributeContainer::CompositeType(ctid) => &self[ctid].attributes,
            AttributeContainer::CompositeTypeField(ctid, field_id) => &self[ctid][field_id].attributes,
        }
    }
}

impl std::ops::Index<AttributeId> for SchemaAst {
    type Output = Attribute;

    fn index(&self, index: AttributeId) -> &Self::Output {
        &self[index.container()][index.attribute_idx()]
    }
}

fn top_idx_to_top_id(top_idx: usize, top: &Top) -> TopId {
    match top {
        Top::Enum(_) => TopId::Enum(EnumId(top_idx as u32)),
        Top::Model(_) => TopId::Model(ModelId(top_idx as u32)),
        Top::Source(_) => TopId::Source(SourceId(top_idx as u32)),
        Top::Generator(_) => TopId::Generator(GeneratorId(top_idx as u32)),
        Top::CompositeType(_) => TopId::CompositeType(CompositeTypeId(top_idx as u32)),
    }
}
