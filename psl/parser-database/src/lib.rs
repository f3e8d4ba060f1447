//! See the docs on [ParserDatabase](./struct.ParserDatabase.html).
//!
//! ## Scope
//!
//! The ParserDatabase is tasked with gathering information about the schema.
//! It is _connector agnostic_: it gathers information and performs generic
//! validations, leaving connector-specific validations to downstream
//! consumers.
//!
//! ## Terminology
//!
//! Names:
//!
//! - _name_: the item name in the schema for datasources, generators, models,
//!   model fields, composite types, composite type fields, enums and enum
//!   variants.
//! - _mapped name_: the name inside an `@map()` or `@@map()` attribute of a
//!   model, field, enum or enum variant. This is used to determine what the
//!   name of the schema item is in the database.

#![deny(unsafe_code, rust_2018_idioms)]

pub mod walkers;

mod attributes;
mod coerce_expression;
mod context;
mod extensions;
mod files;
mod ids;
mod interner;
mod names;
mod relations;
mod types;

pub use coerce_expression::{coerce, coerce_array, coerce_opt};
pub use diagnostics::{DatamodelError, DatamodelWarning, Diagnostics, FileId, Span};
pub use extensions::{ExtensionTypeEntry, ExtensionTypeId, ExtensionTypes, NoExtensionTypes};
pub use ids::*;
pub use interner::StringId;
pub use names::is_reserved_type_name;
pub use relations::{ReferentialAction, RelationId};
pub use schema_ast::{ast, SourceFile};
pub use types::{
    FieldWithArgs, IndexAlgorithm, IndexFieldPath, IndexType, OperatorClass, RelationFieldId, ScalarFieldId,
    ScalarFieldType, ScalarType, SortOrder,
};

use self::{context::Context, files::Files, interner::StringInterner, names::Names, relations::Relations, types::Types};

/// ParserDatabase is a container for a Schema AST, together with information
/// gathered during schema validation. Each validation step enriches the
/// database with information that can be used to work with the schema,
/// without changing the AST. Instantiating with `ParserDatabase::new()` will
/// perform a number of validations and make sure the schema makes sense, but
/// it cannot fail. In case the schema is invalid, diagnostics will be
/// created and the resolved information will be incomplete.
///
/// Validations are carried out in the following order:
///
/// - The AST is walked a first time to resolve names: to each relevant
///   identifier, we attach an ID that can be used to reference the
///   corresponding item (model, enum, field, ...)
/// - The AST is walked a second time to resolve types. For each field, we
///   look at the type identifier and resolve what it refers to.
/// - The AST is walked a third time to validate attributes on models, fields,
///   enums, composite types and their fields.
/// - Relations are then inferred from the resolved relation fields.
pub struct ParserDatabase {
    asts: Files,
    interner: StringInterner,
    names: Names,
    types: Types,
    relations: Relations,
}

impl ParserDatabase {
    /// See the docs on [ParserDatabase](/struct.ParserDatabase.html).
    pub fn new_single_file(file: SourceFile, diagnostics: &mut Diagnostics) -> Self {
        Self::new(
            vec![("schema.prisma".to_owned(), file)],
            &NoExtensionTypes,
            diagnostics,
        )
    }

    /// See the docs on [ParserDatabase](/struct.ParserDatabase.html).
    pub fn new(
        files: Vec<(String, SourceFile)>,
        extensions: &dyn ExtensionTypes,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let asts = files
            .into_iter()
            .enumerate()
            .map(|(file_idx, (path, source))| {
                let id = FileId(file_idx as u32);
                let ast = schema_ast::parse_schema(source.as_str(), diagnostics, id);
                (path, source, ast)
            })
            .collect();
        let asts = Files(asts);

        let mut interner = StringInterner::default();
        let mut names = Names::default();
        let mut types = Types::default();
        let mut relations = Relations::default();
        let mut ctx = Context::new(
            &asts,
            extensions,
            &mut interner,
            &mut names,
            &mut types,
            &mut relations,
            diagnostics,
        );

        // First pass: resolve names.
        names::resolve_names(&mut ctx);

        // Return early on name resolution errors.
        if ctx.diagnostics.has_errors() {
            return ParserDatabase {
                asts,
                interner,
                names,
                types,
                relations,
            };
        }

        // Second pass: resolve top-level items and field types.
        types::resolve_types(&mut ctx);

        // Return early on type resolution errors.
        if ctx.diagnostics.has_errors() {
            return ParserDatabase {
                asts,
                interner,
                names,
                types,
                relations,
            };
        }

        // Third pass: validate model and field attributes.
        attributes::resolve_attributes(&mut ctx);

        // Fourth step: relation inference.
        relations::infer_relations(&mut ctx);

        ParserDatabase {
            asts,
            interner,
            names,
            types,
            relations,
        }
    }

    /// The parsed AST of a file.
    pub fn ast(&self, file_id: FileId) -> &ast::SchemaAst {
        &self.asts[file_id].2
    }

    /// The name of the file.
    pub fn file_name(&self, file_id: FileId) -> &str {
        &self.asts[file_id].0
    }

    /// The source file contents of a file.
    pub fn source(&self, file_id: FileId) -> &str {
        self.asts[file_id].1.as_str()
    }

    /// The source file contents, assuming a single schema file.
    pub fn source_assert_single(&self) -> &str {
        assert_eq!(self.asts.0.len(), 1);
        self.asts.0[0].1.as_str()
    }

    /// Iterate over all file ids in the schema.
    pub fn iter_file_ids(&self) -> impl Iterator<Item = FileId> + '_ {
        self.asts.iter().map(|(file_id, _, _, _)| file_id)
    }

    /// The total number of models across all files.
    pub fn models_count(&self) -> usize {
        self.asts
            .iter_tops()
            .filter(|(_, top)| matches!(top, ast::Top::Model(_)))
            .count()
    }

    /// The total number of enums across all files.
    pub fn enums_count(&self) -> usize {
        self.asts
            .iter_tops()
            .filter(|(_, top)| matches!(top, ast::Top::Enum(_)))
            .count()
    }

    /// Find a model by name.
    pub fn find_model<'db>(&'db self, name: &str) -> Option<walkers::ModelWalker<'db>> {
        let top_id = self.find_top(name)?;
        top_id.1.as_model_id().map(|model_id| self.walk((top_id.0, model_id)))
    }

    /// Find an enum by name.
    pub fn find_enum<'db>(&'db self, name: &str) -> Option<walkers::EnumWalker<'db>> {
        let top_id = self.find_top(name)?;
        top_id.1.as_enum_id().map(|enum_id| self.walk((top_id.0, enum_id)))
    }

    /// Find a composite type by name.
    pub fn find_composite_type<'db>(&'db self, name: &str) -> Option<walkers::CompositeTypeWalker<'db>> {
        let top_id = self.find_top(name)?;
        top_id
            .1
            .as_composite_type_id()
            .map(|ctid| self.walk((top_id.0, ctid)))
    }

    fn find_top(&self, name: &str) -> Option<crate::TopId> {
        let name_id = self.interner.lookup(name)?;
        self.names.tops.get(&name_id).copied()
    }

    /// Traverse a schema element by id.
    pub fn walk<I>(&self, id: I) -> walkers::Walker<'_, I> {
        walkers::Walker { db: self, id }
    }

    /// Walk all the models in the schema.
    pub fn walk_models(&self) -> impl Iterator<Item = walkers::ModelWalker<'_>> + '_ {
        self.asts.iter_tops().filter_map(|((file_id, top_id), _)| {
            top_id.as_model_id().map(|model_id| self.walk((file_id, model_id)))
        })
    }

    /// Walk all the enums in the schema.
    pub fn walk_enums(&self) -> impl Iterator<Item = walkers::EnumWalker<'_>> + '_ {
        self.asts.iter_tops().filter_map(|((file_id, top_id), _)| {
            top_id.as_enum_id().map(|enum_id| self.walk((file_id, enum_id)))
        })
    }

    /// Walk all the composite types in the schema.
    pub fn walk_composite_types(&self) -> impl Iterator<Item = walkers::CompositeTypeWalker<'_>> + '_ {
        self.asts.iter_tops().filter_map(|((file_id, top_id), _)| {
            top_id.as_composite_type_id().map(|ctid| self.walk((file_id, ctid)))
        })
    }

    /// Walk all the relations in the schema. A relation may be defined by one
    /// or two relation fields.
    pub fn walk_relations(&self) -> impl ExactSizeIterator<Item = walkers::RelationWalker<'_>> + Clone {
        self.relations.iter().map(move |relation_id| self.walk(relation_id))
    }

    /// Walk all the relations where the model is on the forward (model A)
    /// side.
    pub fn walk_relations_from(&self, model_id: ModelId) -> impl Iterator<Item = walkers::RelationWalker<'_>> {
        self.relations.from_model(model_id).map(move |relation_id| self.walk(relation_id))
    }

    /// Walk all the relations where the model is on the back (model B) side.
    pub fn walk_relations_to(&self, model_id: ModelId) -> impl Iterator<Item = walkers::RelationWalker<'_>> {
        self.relations.to_model(model_id).map(move |relation_id| self.walk(relation_id))
    }

    /// Walk all the datasource blocks in the schema.
    pub fn walk_datasources(&self) -> impl Iterator<Item = walkers::DatasourceWalker<'_>> + '_ {
        self.asts.iter_tops().filter_map(|((file_id, top_id), _)| match top_id {
            ast::TopId::Source(source_id) => Some(self.walk((file_id, source_id))),
            _ => None,
        })
    }

    /// Walk all the generator blocks in the schema.
    pub fn walk_generators(&self) -> impl Iterator<Item = walkers::GeneratorWalker<'_>> + '_ {
        self.asts.iter_tops().filter_map(|((file_id, top_id), _)| match top_id {
            ast::TopId::Generator(generator_id) => Some(self.walk((file_id, generator_id))),
            _ => None,
        })
    }
}

impl std::fmt::Debug for ParserDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ParserDatabase { ... }")
    }
}

impl std::ops::Index<FileId> for ParserDatabase {
    type Output = ast::SchemaAst;

    fn index(&self, index: FileId) -> &Self::Output {
        &self.asts[index].2
    }
}
