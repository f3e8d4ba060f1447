mod reserved_model_names;

pub use reserved_model_names::is_reserved_type_name;

use crate::{
    context::Context,
    interner::StringId,
    types::ScalarType,
    DatamodelError,
};
use reserved_model_names::{validate_composite_type_name, validate_enum_name, validate_model_name};
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use schema_ast::ast::{self, ConfigBlockProperty, WithIdentifier, WithName, WithSpan};

/// Resolved names for use in the validation process.
#[derive(Default)]
pub(super) struct Names {
    /// Models, enums and composite types. They are in a shared namespace.
    pub(super) tops: HashMap<StringId, crate::TopId>,
    /// Generators have their own namespace.
    pub(super) generators: HashMap<StringId, crate::TopId>,
    /// Datasources have their own namespace.
    pub(super) datasources: HashMap<StringId, crate::TopId>,
    pub(super) model_fields: HashMap<(crate::ModelId, StringId), ast::FieldId>,
    pub(super) composite_type_fields: HashMap<(crate::CompositeTypeId, StringId), ast::FieldId>,
}

/// `resolve_names()` is responsible for populating `ParserDatabase.names` and
/// validating that there are no name collisions in the following namespaces:
///
/// - Model, enum and composite type names
/// - Generators
/// - Datasources
/// - Model fields for each model
/// - Enum variants for each enum
pub(super) fn resolve_names(ctx: &mut Context<'_>) {
    let mut tmp_names: HashSet<&str> = HashSet::default(); // throwaway container for duplicate checking
    let mut names = Names::default();
    let asts = ctx.asts;

    for ((file_id, top_id), top) in asts.iter_tops() {
        let namespace = match (top_id, top) {
            (_, ast::Top::Enum(ast_enum)) => {
                tmp_names.clear();
                validate_identifier(ast_enum.identifier(), "Enum", ctx);
                validate_enum_name(ast_enum, ctx);

                for value in &ast_enum.values {
                    validate_identifier(value.identifier(), "Enum Value", ctx);

                    if !tmp_names.insert(value.name()) {
                        ctx.push_error(DatamodelError::new_duplicate_enum_value_error(
                            ast_enum.name(),
                            value.name(),
                            value.span(),
                        ))
                    }
                }

                &mut names.tops
            }
            (ast::TopId::Model(model_id), ast::Top::Model(model)) => {
                validate_identifier(model.identifier(), "Model", ctx);
                validate_model_name(model, ctx);

                for (field_id, field) in model.iter_fields() {
                    validate_identifier(field.identifier(), "Field", ctx);
                    let field_name_id = ctx.interner.intern(field.name());

                    if names
                        .model_fields
                        .insert(((file_id, model_id), field_name_id), field_id)
                        .is_some()
                    {
                        ctx.push_error(DatamodelError::new_duplicate_field_error(
                            "model",
                            model.name(),
                            field.name(),
                            field.identifier().span,
                        ))
                    }
                }

                &mut names.tops
            }
            (ast::TopId::CompositeType(ctid), ast::Top::CompositeType(ct)) => {
                validate_identifier(ct.identifier(), "Composite type", ctx);
                validate_composite_type_name(ct, ctx);

                for (field_id, field) in ct.iter_fields() {
                    validate_identifier(field.identifier(), "Field", ctx);
                    let field_name_id = ctx.interner.intern(field.name());

                    if names
                        .composite_type_fields
                        .insert(((file_id, ctid), field_name_id), field_id)
                        .is_some()
                    {
                        ctx.push_error(DatamodelError::new_duplicate_field_error(
                            "composite type",
                            ct.name(),
                            field.name(),
                            field.identifier().span,
                        ))
                    }
                }

                &mut names.tops
            }
            (_, ast::Top::Generator(generator)) => {
                validate_identifier(generator.identifier(), "Generator", ctx);
                check_for_duplicate_properties(top, &generator.properties, &mut tmp_names, ctx);
                &mut names.generators
            }
            (_, ast::Top::Source(datasource)) => {
                validate_identifier(datasource.identifier(), "Datasource", ctx);
                check_for_duplicate_properties(top, &datasource.properties, &mut tmp_names, ctx);
                &mut names.datasources
            }
            _ => unreachable!(),
        };

        insert_name((file_id, top_id), top, namespace, ctx)
    }

    let _ = std::mem::replace(ctx.names, names);
}

fn insert_name(
    top_id: crate::TopId,
    top: &ast::Top,
    namespace: &mut HashMap<StringId, crate::TopId>,
    ctx: &mut Context<'_>,
) {
    let name = ctx.interner.intern(top.name());

    if let Some(existing) = namespace.insert(name, top_id) {
        let current_type = top.get_type();
        let existing_type = ctx.asts[existing].get_type();
        ctx.push_error(DatamodelError::new_duplicate_top_error(
            top.name(),
            current_type,
            existing_type,
            top.identifier().span,
        ))
    }
}

fn check_for_duplicate_properties<'a>(
    top: &ast::Top,
    props: &'a [ConfigBlockProperty],
    tmp_names: &mut HashSet<&'a str>,
    ctx: &mut Context<'_>,
) {
    tmp_names.clear();

    for arg in props {
        if !tmp_names.insert(&arg.name.name) {
            ctx.push_error(DatamodelError::new_duplicate_config_key_error(
                &format!("{} \"{}\"", top.get_type(), top.name()),
                &arg.name.name,
                arg.name.span,
            ));
        }
    }
}

fn validate_identifier(ident: &ast::Identifier, schema_item: &str, ctx: &mut Context<'_>) {
    if ident.name.is_empty() {
        ctx.push_error(DatamodelError::new_validation_error(
            &format!("The name of a {schema_item} must not be empty."),
            ident.span,
        ))
    } else if ident.name.chars().next().unwrap().is_numeric() {
        ctx.push_error(DatamodelError::new_validation_error(
            &format!("The name of a {schema_item} must not start with a number."),
            ident.span,
        ))
    } else if ident.name.contains('-') {
        ctx.push_error(DatamodelError::new_validation_error(
            &format!("The character `-` is not allowed in {schema_item} names."),
            ident.span,
        ))
    }
}

/// Is this name a built-in scalar type name?
pub(crate) fn is_scalar_type_name(name: &str) -> bool {
    ScalarType::try_from_str(name).is_some()
}
