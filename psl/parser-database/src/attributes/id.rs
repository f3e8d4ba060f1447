use super::{
    format_fields_in_error_with_leading_word, get_map_argument, get_name_argument, get_sort_order_argument,
    resolve_field_array_with_args, validate_client_name, validate_clustering_setting, FieldResolutionError,
    FieldResolvingSetup,
};
use crate::{
    coerce,
    context::Context,
    types::{FieldWithArgs, IdAttribute, IndexFieldPath, ModelAttributes},
    DatamodelError, ScalarFieldId,
};
use diagnostics::Span;
use either::Either;
use schema_ast::ast::{self, WithName, WithSpan};
use std::borrow::Cow;

/// `@@id` on models.
pub(super) fn model(model_data: &mut ModelAttributes, model_id: crate::ModelId, ctx: &mut Context<'_>) {
    let attr_span = ctx.current_attribute().span;
    let source_attribute = ctx.current_attribute_id();

    let fields_arg = match ctx.visit_default_arg("fields") {
        Ok(fields_arg) => fields_arg,
        Err(err) => return ctx.push_error(err),
    };

    // The id takes top-level scalar fields only; composite paths are not
    // followed here.
    let fields = match resolve_field_array_with_args(fields_arg, model_id, FieldResolvingSetup::OnlyTopLevel, ctx) {
        Ok(fields) => fields,
        Err(FieldResolutionError::AlreadyDealtWith) => return,
        Err(FieldResolutionError::ProblematicFields {
            unknown_fields,
            relation_fields,
        }) => {
            push_id_field_errors(model_id, unknown_fields, relation_fields, fields_arg.span(), attr_span, ctx);
            return;
        }
    };

    if model_data.primary_key.is_some() {
        let ast_model = &ctx.asts[model_id];
        ctx.push_error(DatamodelError::new_model_validation_error(
            "Each model must have at most one id criteria. You can't have `@id` and `@@id` at the same time.",
            "model",
            ast_model.name(),
            ast_model.span(),
        ));
    }

    validate_id_fields_are_required(model_id, &fields, model_data.is_ignored, attr_span, ctx);

    let mapped_name = get_map_argument(ctx);
    let name = get_name_argument(ctx);

    if let Some(name) = name {
        validate_client_name(attr_span, ctx.asts[model_id].name(), name, "@@id", ctx);
    }

    model_data.primary_key = Some(IdAttribute {
        name,
        mapped_name,
        source_attribute,
        source_field: None,
        fields,
        clustered: validate_clustering_setting(ctx),
    });
}

/// `@id` on fields.
pub(super) fn field(
    ast_model: &ast::Model,
    scalar_field_id: ScalarFieldId,
    field_id: ast::FieldId,
    model_attributes: &mut ModelAttributes,
    ctx: &mut Context<'_>,
) {
    if model_attributes.primary_key.is_some() {
        ctx.push_error(DatamodelError::new_model_validation_error(
            "At most one field must be marked as the id field with the `@id` attribute.",
            "model",
            ast_model.name(),
            ast_model.span(),
        ));
        return;
    }

    let source_attribute = ctx.current_attribute_id();
    let mapped_name = get_map_argument(ctx);
    let length = ctx
        .visit_optional_arg("length")
        .and_then(|length| coerce::integer(length, ctx.diagnostics))
        .map(|len| len as u32);
    let sort_order = get_sort_order_argument(ctx);
    let clustered = validate_clustering_setting(ctx);

    model_attributes.primary_key = Some(IdAttribute {
        name: None,
        mapped_name,
        source_attribute,
        source_field: Some(field_id),
        fields: vec![FieldWithArgs {
            path: IndexFieldPath::new(scalar_field_id),
            sort_order,
            length,
            operator_class: None,
        }],
        clustered,
    });
}

// Checked after all the model attributes are resolved: whether the model is
// `@@ignore`d is not known yet while the field attributes are visited.
pub(super) fn validate_id_field_arities(
    model_id: crate::ModelId,
    model_attributes: &ModelAttributes,
    ctx: &mut Context<'_>,
) {
    if model_attributes.is_ignored {
        return;
    }

    // Only the field-level `@id` form. The block form validates its fields
    // when the attribute is resolved.
    let (pk, field_id) = match &model_attributes.primary_key {
        Some(pk) => match pk.source_field {
            Some(field_id) => (pk, field_id),
            None => return,
        },
        None => return,
    };

    if ctx.asts[model_id][field_id].arity.is_required() {
        return;
    }

    ctx.push_error(DatamodelError::new_attribute_validation_error(
        "Fields that are marked as id must be required.",
        "@id",
        ctx.asts[pk.source_attribute].span,
    ))
}

/// Every field of an id must be required, unless the model is ignored.
fn validate_id_fields_are_required(
    model_id: crate::ModelId,
    fields: &[FieldWithArgs],
    model_is_ignored: bool,
    attr_span: Span,
    ctx: &mut Context<'_>,
) {
    if model_is_ignored {
        return;
    }

    let mut optional_fields: Vec<Cow<'_, str>> = Vec::new();

    for field in fields {
        let ast_field = match field.path.field_in_index() {
            Either::Left(sfid) => {
                let (field_model_id, field_id) = {
                    let scalar_field = &ctx.types[sfid];
                    (scalar_field.model_id, scalar_field.field_id)
                };

                &ctx.asts[field_model_id][field_id]
            }
            Either::Right((ctid, field_id)) => &ctx.asts[ctid][field_id],
        };

        if !ast_field.arity.is_required() {
            optional_fields.push(Cow::from(ast_field.name()));
        }
    }

    if optional_fields.is_empty() {
        return;
    }

    let msg = format!(
        "The id definition refers to the optional {}. ID definitions must reference only required fields.",
        format_fields_in_error_with_leading_word(optional_fields.into_iter())
    );
    let model_name = ctx.asts[model_id].name();

    ctx.push_error(DatamodelError::new_model_validation_error(&msg, "model", model_name, attr_span));
}

fn push_id_field_errors(
    model_id: crate::ModelId,
    unknown_fields: Vec<(crate::TopId, Cow<'_, str>)>,
    relation_fields: Vec<(&ast::Field, ast::FieldId)>,
    fields_span: Span,
    attr_span: Span,
    ctx: &mut Context<'_>,
) {
    let model_name = ctx.asts[model_id].name();

    if !unknown_fields.is_empty() {
        // The id resolves top-level fields only, so the unknown names were
        // all looked up in the model itself.
        let field_names = unknown_fields.into_iter().map(|(_, field_name)| field_name);

        let msg = format!(
            "The multi field id declaration refers to the unknown {}.",
            format_fields_in_error_with_leading_word(field_names)
        );

        ctx.push_error(DatamodelError::new_model_validation_error(
            &msg,
            "model",
            model_name,
            fields_span,
        ));
    }

    if !relation_fields.is_empty() {
        let field_names = relation_fields.iter().map(|(field, _)| Cow::from(field.name()));

        let msg = format!(
            "The id definition refers to the relation {}. ID definitions must reference only scalar fields.",
            format_fields_in_error_with_leading_word(field_names)
        );

        ctx.push_error(DatamodelError::new_model_validation_error(
            &msg,
            "model",
            model_name,
            attr_span,
        ));
    }
}
