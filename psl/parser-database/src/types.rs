use crate::{context::Context, interner::StringId, relations::ReferentialAction, DatamodelError};
use either::Either;
use rustc_hash::FxHashMap as HashMap;
use schema_ast::ast::{self, WithName};
use diagnostics::Span;
use std::{collections::BTreeMap, fmt, ops};

pub(super) fn resolve_types(ctx: &mut Context<'_>) {
    let asts = ctx.asts;

    for ((file_id, top_id), top) in asts.iter_tops() {
        match (top_id, top) {
            (ast::TopId::Model(model_id), ast::Top::Model(model)) => visit_model((file_id, model_id), model, ctx),
            (ast::TopId::CompositeType(ctid), ast::Top::CompositeType(ct)) => {
                visit_composite_type((file_id, ctid), ct, ctx)
            }
            _ => (),
        }
    }
}

/// An id for a scalar field in a schema. Only the fields that constitute a
/// valid scalar field in a valid schema get a ScalarFieldId.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScalarFieldId(u32);

/// An id for a relation field in a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelationFieldId(u32);

#[derive(Debug, Default)]
pub(super) struct Types {
    pub(super) composite_type_fields: BTreeMap<(crate::CompositeTypeId, ast::FieldId), CompositeTypeField>,
    /// The sort order of the vec is the sort order of `(ModelId, ast::FieldId)`.
    scalar_fields: Vec<ScalarField>,
    /// The sort order of the vec is the sort order of `(ModelId, ast::FieldId)`.
    relation_fields: Vec<RelationField>,
    pub(super) enum_attributes: HashMap<crate::EnumId, EnumAttributes>,
    pub(super) model_attributes: HashMap<crate::ModelId, ModelAttributes>,
}

impl Types {
    pub(super) fn push_scalar_field(&mut self, scalar_field: ScalarField) -> ScalarFieldId {
        let id = ScalarFieldId(self.scalar_fields.len() as u32);
        debug_assert!(self
            .scalar_fields
            .last()
            .map(|prev| (prev.model_id, prev.field_id) < (scalar_field.model_id, scalar_field.field_id))
            .unwrap_or(true));
        self.scalar_fields.push(scalar_field);
        id
    }

    pub(super) fn push_relation_field(&mut self, relation_field: RelationField) -> RelationFieldId {
        let id = RelationFieldId(self.relation_fields.len() as u32);
        debug_assert!(self
            .relation_fields
            .last()
            .map(|prev| (prev.model_id, prev.field_id) < (relation_field.model_id, relation_field.field_id))
            .unwrap_or(true));
        self.relation_fields.push(relation_field);
        id
    }

    /// Iterate over the scalar fields of a model, in field definition order.
    /// The underlying vector is sorted by `(model, field)`, so the range is
    /// found by binary search.
    pub(super) fn range_model_scalar_fields(
        &self,
        model_id: crate::ModelId,
    ) -> impl ExactSizeIterator<Item = (ScalarFieldId, &ScalarField)> + Clone {
        let start = self.scalar_fields.partition_point(|sf| sf.model_id < model_id);
        let end = self.scalar_fields.partition_point(|sf| sf.model_id <= model_id);
        self.scalar_fields[start..end]
            .iter()
            .enumerate()
            .map(move |(idx, sf)| (ScalarFieldId((start + idx) as u32), sf))
    }

    /// Iterate over the relation fields of a model, in field definition order.
    pub(super) fn range_model_relation_fields(
        &self,
        model_id: crate::ModelId,
    ) -> impl ExactSizeIterator<Item = (RelationFieldId, &RelationField)> + Clone {
        let start = self.relation_fields.partition_point(|rf| rf.model_id < model_id);
        let end = self.relation_fields.partition_point(|rf| rf.model_id <= model_id);
        self.relation_fields[start..end]
            .iter()
            .enumerate()
            .map(move |(idx, rf)| (RelationFieldId((start + idx) as u32), rf))
    }

    /// The `ScalarFieldId` of the AST field, if it resolved to a scalar field.
    pub(super) fn find_model_scalar_field(
        &self,
        model_id: crate::ModelId,
        field_id: ast::FieldId,
    ) -> Option<ScalarFieldId> {
        self.scalar_fields
            .binary_search_by_key(&(model_id, field_id), |sf| (sf.model_id, sf.field_id))
            .ok()
            .map(|idx| ScalarFieldId(idx as u32))
    }

    pub(super) fn iter_scalar_fields(&self) -> impl Iterator<Item = (ScalarFieldId, &ScalarField)> {
        self.scalar_fields
            .iter()
            .enumerate()
            .map(|(idx, sf)| (ScalarFieldId(idx as u32), sf))
    }

    pub(super) fn iter_relation_fields(&self) -> impl Iterator<Item = (RelationFieldId, &RelationField)> {
        self.relation_fields
            .iter()
            .enumerate()
            .map(|(idx, rf)| (RelationFieldId(idx as u32), rf))
    }
}

impl ops::Index<ScalarFieldId> for Types {
    type Output = ScalarField;

    fn index(&self, index: ScalarFieldId) -> &Self::Output {
        &self.scalar_fields[index.0 as usize]
    }
}

impl ops::IndexMut<ScalarFieldId> for Types {
    fn index_mut(&mut self, index: ScalarFieldId) -> &mut Self::Output {
        &mut self.scalar_fields[index.0 as usize]
    }
}

impl ops::Index<RelationFieldId> for Types {
    type Output = RelationField;

    fn index(&self, index: RelationFieldId) -> &Self::Output {
        &self.relation_fields[index.0 as usize]
    }
}

impl ops::IndexMut<RelationFieldId> for Types {
    fn index_mut(&mut self, index: RelationFieldId) -> &mut Self::Output {
        &mut self.relation_fields[index.0 as usize]
    }
}

#[derive(Debug)]
pub(super) struct CompositeTypeField {
    pub(super) r#type: ScalarFieldType,
    pub(super) mapped_name: Option<StringId>,
    pub(super) default: Option<DefaultAttribute>,
    /// Native type name, arguments and span.
    ///
    /// (attribute scope, native type name, arguments, span)
    ///
    /// For example: `@db.Text` would translate to `("db", "Text", [], ..)`.
    pub(super) native_type: Option<(StringId, StringId, Vec<String>, Span)>,
}

/// The type of a scalar field, parsed and categorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarFieldType {
    /// A composite type.
    CompositeType(crate::CompositeTypeId),
    /// An enum.
    Enum(crate::EnumId),
    /// A built-in scalar type.
    BuiltInScalar(ScalarType),
    /// A type provided by the extension type registry.
    Extension(crate::ExtensionTypeId),
    /// An `Unsupported("...")` type.
    Unsupported(StringId),
}

impl ScalarFieldType {
    /// Try to interpret this field type as a known scalar type.
    pub fn as_builtin_scalar(self) -> Option<ScalarType> {
        match self {
            ScalarFieldType::BuiltInScalar(s) => Some(s),
            _ => None,
        }
    }

    /// Try to interpret this field type as an enum.
    pub fn as_enum(self) -> Option<crate::EnumId> {
        match self {
            ScalarFieldType::Enum(id) => Some(id),
            _ => None,
        }
    }

    /// Try to interpret this field type as a composite type.
    pub fn as_composite_type(self) -> Option<crate::CompositeTypeId> {
        match self {
            ScalarFieldType::CompositeType(id) => Some(id),
            _ => None,
        }
    }

    /// True if the field's type is `Unsupported("...")`.
    pub fn is_unsupported(self) -> bool {
        matches!(self, ScalarFieldType::Unsupported(_))
    }
}

/// An attribute (@default) on a field.
#[derive(Debug, Clone, Copy)]
pub(super) struct DefaultAttribute {
    pub(super) mapped_name: Option<StringId>,
    /// The index of the argument holding the value expression in the
    /// `@default()` attribute's argument list.
    pub(super) argument_idx: usize,
    pub(super) default_attribute: crate::AttributeId,
}

#[derive(Debug)]
pub(super) struct ScalarField {
    pub(super) model_id: crate::ModelId,
    pub(super) field_id: ast::FieldId,
    pub(super) r#type: ScalarFieldType,
    pub(super) is_ignored: bool,
    pub(super) is_updated_at: bool,
    pub(super) default: Option<DefaultAttribute>,
    /// @map
    pub(super) mapped_name: Option<StringId>,
    /// Native type name, arguments and span.
    ///
    /// (attribute scope, native type name, arguments, span)
    ///
    /// For example: `@db.Text` would translate to `("db", "Text", [], ..)`.
    pub(super) native_type: Option<(StringId, StringId, Vec<String>, Span)>,
}

#[derive(Debug)]
pub(super) struct RelationField {
    pub(super) model_id: crate::ModelId,
    pub(super) field_id: ast::FieldId,
    pub(super) referenced_model: crate::ModelId,
    pub(super) on_delete: Option<(ReferentialAction, Span)>,
    pub(super) on_update: Option<(ReferentialAction, Span)>,
    /// The `fields` explicitly present in the `@relation` attribute.
    pub(super) fields: Option<Vec<ScalarFieldId>>,
    /// The `references` explicitly present in the `@relation` attribute.
    pub(super) references: Option<Vec<ScalarFieldId>>,
    /// The `name` explicitly present in the `@relation` attribute.
    pub(super) name: Option<StringId>,
    /// @ignore
    pub(super) is_ignored: bool,
    /// The foreign key constraint name set through the `map` argument.
    pub(super) mapped_name: Option<StringId>,
}

impl RelationField {
    pub(super) fn new(model_id: crate::ModelId, field_id: ast::FieldId, referenced_model: crate::ModelId) -> Self {
        RelationField {
            model_id,
            field_id,
            referenced_model,
            on_delete: None,
            on_update: None,
            fields: None,
            references: None,
            name: None,
            is_ignored: false,
            mapped_name: None,
        }
    }
}

/// Information gathered from validating attributes on a model.
#[derive(Debug, Default)]
pub(super) struct ModelAttributes {
    /// @(@)id
    pub(super) primary_key: Option<IdAttribute>,
    /// @@ignore
    pub(super) is_ignored: bool,
    /// @@schema
    pub(super) schema: Option<(StringId, Span)>,
    /// @(@)index and @(@)unique.
    pub(super) ast_indexes: Vec<(crate::AttributeId, IndexAttribute)>,
    /// @@map
    pub(super) mapped_name: Option<StringId>,
    /// @(@)shardKey
    pub(super) shard_key: Option<ShardKeyAttribute>,
}

/// Information gathered from validating attributes on an enum.
#[derive(Debug, Default)]
pub(super) struct EnumAttributes {
    /// @@map
    pub(super) mapped_name: Option<StringId>,
    /// @map on enum values: the value index in the enum to the mapped name.
    pub(super) mapped_values: HashMap<u32, StringId>,
}

/// An index, unique constraint or fulltext index on a model.
#[derive(Debug, Clone)]
pub(super) struct IndexAttribute {
    pub(super) r#type: IndexType,
    pub(super) fields: Vec<FieldWithArgs>,
    /// Set when the index was defined with the field-level form (`@unique` on
    /// a field), absent for the block form.
    pub(super) source_field: Option<ScalarFieldId>,
    pub(super) name: Option<StringId>,
    pub(super) mapped_name: Option<StringId>,
    pub(super) algorithm: Option<IndexAlgorithm>,
    pub(super) clustered: Option<bool>,
}

impl IndexAttribute {
    pub(super) fn is_unique(&self) -> bool {
        matches!(self.r#type, IndexType::Unique)
    }

    pub(super) fn is_fulltext(&self) -> bool {
        matches!(self.r#type, IndexType::Fulltext)
    }
}

/// A primary key declared with `@id` or `@@id`.
#[derive(Debug, Clone)]
pub(super) struct IdAttribute {
    pub(super) fields: Vec<FieldWithArgs>,
    /// Set when the primary key was defined with the field-level form (`@id`
    /// on a field), absent for the block form.
    pub(super) source_field: Option<ast::FieldId>,
    pub(super) source_attribute: crate::AttributeId,
    pub(super) name: Option<StringId>,
    pub(super) mapped_name: Option<StringId>,
    pub(super) clustered: Option<bool>,
}

/// A shard key declared with `@shardKey` or `@@shardKey`.
#[derive(Debug)]
pub(super) struct ShardKeyAttribute {
    pub(super) fields: Vec<FieldWithArgs>,
    /// Set when the shard key was defined with the field-level form, absent
    /// for the block form.
    pub(super) source_field: Option<ast::FieldId>,
    pub(super) source_attribute: crate::AttributeId,
}

/// A field in an index or primary key definition, together with its
/// per-field arguments: `fieldName(sort: Desc, length: 10)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWithArgs {
    pub(crate) path: IndexFieldPath,
    pub(crate) sort_order: Option<SortOrder>,
    pub(crate) length: Option<u32>,
    pub(crate) operator_class: Option<OperatorClass>,
}

/// A field in an index definition: either a scalar field of the model, or a
/// path into a composite type (`field.sub.leaf`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexFieldPath {
    /// The scalar field on the model where the path begins.
    root: ScalarFieldId,
    /// The path into the composite type, if the root field has a composite
    /// type. Empty for plain scalar fields.
    path: Vec<(crate::CompositeTypeId, ast::FieldId)>,
}

impl IndexFieldPath {
    pub(crate) fn new(root: ScalarFieldId) -> Self {
        IndexFieldPath { root, path: Vec::new() }
    }

    pub(crate) fn push_field(&mut self, ctid: crate::CompositeTypeId, field_id: ast::FieldId) {
        self.path.push((ctid, field_id));
    }

    /// The scalar field on the model where the path begins.
    pub fn root(&self) -> ScalarFieldId {
        self.root
    }

    /// The path into the composite type. Empty for plain scalar fields.
    pub fn path(&self) -> &[(crate::CompositeTypeId, ast::FieldId)] {
        &self.path
    }

    /// The field the index actually points to: the root scalar field, or the
    /// leaf of the composite path.
    pub fn field_in_index(&self) -> Either<ScalarFieldId, (crate::CompositeTypeId, ast::FieldId)> {
        self.path.last().map(|id| Either::Right(*id)).unwrap_or(Either::Left(self.root))
    }
}

/// The different types of indexes supported in the schema language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexType {
    /// A plain index.
    #[default]
    Normal,
    /// A unique constraint.
    Unique,
    /// A fulltext index.
    Fulltext,
}

/// The database index algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexAlgorithm {
    /// The B-Tree index, the default.
    BTree,
    /// A hash index.
    Hash,
    /// A GiST index.
    Gist,
    /// A GIN index.
    Gin,
    /// An SP-GiST index.
    SpGist,
    /// A BRIN index.
    Brin,
}

impl IndexAlgorithm {
    pub(super) fn try_from_str(s: &str) -> Option<Self> {
        match s {
            "BTree" => Some(IndexAlgorithm::BTree),
            "Hash" => Some(IndexAlgorithm::Hash),
            "Gist" => Some(IndexAlgorithm::Gist),
            "Gin" => Some(IndexAlgorithm::Gin),
            "SpGist" => Some(IndexAlgorithm::SpGist),
            "Brin" => Some(IndexAlgorithm::Brin),
        _ => None,
        }
    }
}

impl fmt::Display for IndexAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexAlgorithm::BTree => f.write_str("BTree"),
            IndexAlgorithm::Hash => f.write_str("Hash"),
            IndexAlgorithm::Gist => f.write_str("Gist"),
            IndexAlgorithm::Gin => f.write_str("Gin"),
            IndexAlgorithm::SpGist => f.write_str("SpGist"),
            IndexAlgorithm::Brin => f.write_str("Brin"),
        }
    }
}

/// The sort order of an index or primary key field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// The operator class of an index field (the `ops` argument).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorClass {
    /// GiST network operator class.
    InetOps,
    /// GIN jsonb operator class.
    JsonbOps,
    /// GIN jsonb path operator class.
    JsonbPathOps,
    /// GIN array operator class.
    ArrayOps,
    /// SP-GiST text operator class.
    TextOps,
    /// An operator class the schema language does not know, passed through
    /// with `ops: raw("...")`.
    Raw(StringId),
}

impl OperatorClass {
    pub(super) fn try_from_str(s: &str) -> Option<Self> {
        match s {
            "InetOps" => Some(OperatorClass::InetOps),
            "JsonbOps" => Some(OperatorClass::JsonbOps),
            "JsonbPathOps" => Some(OperatorClass::JsonbPathOps),
            "ArrayOps" => Some(OperatorClass::ArrayOps),
            "TextOps" => Some(OperatorClass::TextOps),
            _ => None,
        }
    }
}

/// The schema language's built-in scalar types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ScalarType {
    Int,
    BigInt,
    Float,
    Boolean,
    String,
    DateTime,
    Json,
    Bytes,
    Decimal,
}

impl ScalarType {
    /// The string representation of the scalar type in the schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::Int => "Int",
            ScalarType::BigInt => "BigInt",
            ScalarType::Float => "Float",
            ScalarType::Boolean => "Boolean",
            ScalarType::String => "String",
            ScalarType::DateTime => "DateTime",
            ScalarType::Json => "Json",
            ScalarType::Bytes => "Bytes",
            ScalarType::Decimal => "Decimal",
        }
    }

    /// True if the type is a numeric type.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ScalarType::Int | ScalarType::BigInt | ScalarType::Float | ScalarType::Decimal)
    }

    pub(crate) fn try_from_str(s: &str) -> Option<ScalarType> {
        match s {
            "Int" => Some(ScalarType::Int),
            "BigInt" => Some(ScalarType::BigInt),
            "Float" => Some(ScalarType::Float),
            "Boolean" => Some(ScalarType::Boolean),
            "String" => Some(ScalarType::String),
            "DateTime" => Some(ScalarType::DateTime),
            "Json" => Some(ScalarType::Json),
            "Bytes" => Some(ScalarType::Bytes),
            "Decimal" => Some(ScalarType::Decimal),
            _ => None,
        }
    }

    const ALL: &'static [&'static str] = &[
        "Int", "BigInt", "Float", "Boolean", "String", "DateTime", "Json", "Bytes", "Decimal",
    ];
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn visit_model<'a>(model_id: crate::ModelId, ast_model: &'a ast::Model, ctx: &mut Context<'a>) {
    for (field_id, ast_field) in ast_model.iter_fields() {
        match field_type(ast_field, ctx) {
            Ok(FieldType::Model(referenced_model)) => {
                ctx.types
                    .push_relation_field(RelationField::new(model_id, field_id, referenced_model));
            }
            Ok(FieldType::Scalar(scalar_field_type)) => {
                ctx.types.push_scalar_field(ScalarField {
                    model_id,
                    field_id,
                    r#type: scalar_field_type,
                    is_ignored: false,
                    is_updated_at: false,
                    default: None,
                    mapped_name: None,
                    native_type: None,
                });
            }
            Err(supported) => push_type_not_found_error(supported, ast_field.field_type.span(), ctx),
        }
    }
}

fn visit_composite_type<'a>(ct_id: crate::CompositeTypeId, ct: &'a ast::CompositeType, ctx: &mut Context<'a>) {
    for (field_id, ast_field) in ct.iter_fields() {
        match field_type(ast_field, ctx) {
            Ok(FieldType::Scalar(scalar_type)) => {
                let field = CompositeTypeField {
                    r#type: scalar_type,
                    mapped_name: None,
                    default: None,
                    native_type: None,
                };
                ctx.types.composite_type_fields.insert((ct_id, field_id), field);
            }
            Ok(FieldType::Model(referenced_model_id)) => {
                let referenced_model_name = ctx.asts[referenced_model_id].name();
                ctx.push_error(DatamodelError::new_composite_type_validation_error(
                    &format!("{referenced_model_name} refers to a model, making this a relation field. Relation fields inside composite types are not supported."),
                    ct.name(),
                    ast_field.field_type.span(),
                ))
            }
            Err(supported) => push_type_not_found_error(supported, ast_field.field_type.span(), ctx),
        }
    }
}

enum FieldType {
    Model(crate::ModelId),
    Scalar(ScalarFieldType),
}

fn field_type<'db>(field: &'db ast::Field, ctx: &mut Context<'db>) -> Result<FieldType, &'db str> {
    let supported = match &field.field_type {
        ast::FieldType::Supported(ident) => &ident.name,
        ast::FieldType::Unsupported(name, _) => {
            let unsupported = ctx.interner.intern(name);
            return Ok(FieldType::Scalar(ScalarFieldType::Unsupported(unsupported)));
        }
    };

    if let Some(tpe) = ScalarType::try_from_str(supported) {
        return Ok(FieldType::Scalar(ScalarFieldType::BuiltInScalar(tpe)));
    }

    match ctx
        .interner
        .lookup(supported)
        .and_then(|name_id| ctx.names.tops.get(&name_id).copied())
    {
        Some((file_id, ast::TopId::Model(model_id))) => Ok(FieldType::Model((file_id, model_id))),
        Some((file_id, ast::TopId::Enum(enum_id))) => Ok(FieldType::Scalar(ScalarFieldType::Enum((file_id, enum_id)))),
        Some((file_id, ast::TopId::CompositeType(ctid))) => {
            Ok(FieldType::Scalar(ScalarFieldType::CompositeType((file_id, ctid))))
        }
        Some(_) => unreachable!(),
        None => match ctx.extensions.get_by_prisma_name(supported) {
            Some(id) => Ok(FieldType::Scalar(ScalarFieldType::Extension(id))),
            None => Err(supported),
        },
    }
}

/// Emit a `TypeNotFound` error, with a case-insensitive suggestion when one
/// exists.
fn push_type_not_found_error(type_name: &str, span: Span, ctx: &mut Context<'_>) {
    let suggestion = ScalarType::ALL
        .iter()
        .copied()
        .find(|builtin| builtin.eq_ignore_ascii_case(type_name))
        .map(|s| s.to_owned())
        .or_else(|| {
            ctx.names
                .tops
                .keys()
                .map(|name_id| &ctx.interner[*name_id])
                .find(|top_name| top_name.eq_ignore_ascii_case(type_name))
                .map(|s| s.to_owned())
        });

    match suggestion {
        Some(suggestion) => ctx.push_error(DatamodelError::new_type_for_case_not_found_error(
            type_name,
            &suggestion,
            span,
        )),
        None => ctx.push_error(DatamodelError::new_type_not_found_error(type_name, span)),
    }
}
