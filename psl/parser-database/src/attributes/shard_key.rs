use super::{FieldResolutionError, FieldResolvingSetup};
use crate::{
    attributes::{format_fields_in_error_with_leading_word, resolve_field_array_with_args},
    context::Context,
    types::{FieldWithArgs, IndexFieldPath, ModelAttributes, ScalarFieldId, ShardKeyAttribute},
    DatamodelError,
};
use either::Either;
use schema_ast::ast::{self, WithName, WithSpan};
use std::borrow::Cow;

/// @@shardKey on models
pub(super) fn model(model_data: &mut ModelAttributes, model_id: crate::ModelId, ctx: &mut Context<'_>) {
    let attr = ctx.current_attribute();
    let fields = match ctx.visit_default_arg("fields") {
        Ok(value) => value,
        Err(err) => return ctx.push_error(err),
    };

    let resolved_fields = match resolve_field_array_with_args(fields, model_id, FieldResolvingSetup::OnlyTopLevel, ctx)
    {
        Ok(fields) => fields,
        Err(FieldResolutionError::AlreadyDealtWith) => return,
        Err(FieldResolutionError::ProblematicFields {
            unknown_fields,
            relation_fields,
        }) => {
            if !unknown_fields.is_empty() {
                let field_names = unknown_fields.into_iter().map(|(_, field_name)| field_name);

                let msg = format!(
                    "The multi field shard key declaration refers to the unknown {}.",
                    format_fields_in_error_with_leading_word(field_names)
                );

                ctx.push_error(DatamodelError::new_model_validation_error(
                    &msg,
                    "model",
                    ctx.asts[model_id].name(),
                    fields.span(),
                ));
            }

            if !relation_fields.is_empty() {
                let field_names = relation_fields.iter().map(|(f, _)| Cow::from(f.name()));

                let msg = format!(
                    "The shard key definition refers to the relation {}. Shard key definitions must reference only scalar fields.",
                    format_fields_in_error_with_leading_word(field_names)
                );

                ctx.push_error(DatamodelError::new_model_validation_error(
                    &msg,
                    "model",
                    ctx.asts[model_id].name(),
                    attr.span,
                ));
            }

            return;
        }
    };

    if model_data.shard_key.is_some() {
        let ast_model = &ctx.asts[model_id];
        ctx.push_error(DatamodelError::new_model_validation_error(
            "Each model can have at most one shard key. You can't have `@shardKey` and `@@shardKey` at the same time.",
            "model",
            ast_model.name(),
            ast_model.span(),
        ))
    }

    model_data.shard_key = Some(ShardKeyAttribute {
        source_attribute: ctx.current_attribute_id(),
        fields: resolved_fields,
        source_field: None,
    });
}

/// @shardKey on fields
pub(super) fn field(
    field_id: ast::FieldId,
    scalar_field_id: ScalarFieldId,
    model_attributes: &mut ModelAttributes,
    ctx: &mut Context<'_>,
) {
    if model_attributes.shard_key.is_some() {
        let model_id = ctx.types[scalar_field_id].model_id;
        let ast_model = &ctx.asts[model_id];
        ctx.push_error(DatamodelError::new_model_validation_error(
            "At most one field must be marked as the shard key with the `@shardKey` attribute.",
            "model",
            ast_model.name(),
            ast_model.span(),
        ))
    } else {
        model_attributes.shard_key = Some(ShardKeyAttribute {
            source_attribute: ctx.current_attribute_id(),
            fields: vec![FieldWithArgs {
                path: IndexFieldPath::new(scalar_field_id),
                sort_order: None,
                length: None,
                operator_class: None,
            }],
            source_field: Some(field_id),
        })
    }
}

// Shard key fields must be required. This has to be a separate step because
// the model attributes (which may include `@@ignore`) are not collected yet
// when field attributes are visited.
pub(super) fn validate_shard_key_field_arities(
    model_id: crate::ModelId,
    model_attributes: &ModelAttributes,
    ctx: &mut Context<'_>,
) {
    if model_attributes.is_ignored {
        return;
    }

    let Some(shard_key) = &model_attributes.shard_key else {
        return;
    };

    if let Some(field_id) = shard_key.source_field {
        if !ctx.asts[model_id][field_id].arity.is_required() {
            ctx.push_error(DatamodelError::new_attribute_validation_error(
                "Fields that are marked as shard keys must be required.",
                "@shardKey",
                ctx.asts[shard_key.source_attribute].span,
            ))
        }

        return;
    }

    let optional_fields: Vec<&str> = shard_key
        .fields
        .iter()
        .filter_map(|field| match field.path.field_in_index() {
            Either::Left(sfid) => {
                let sf = &ctx.types[sfid];
                let ast_field = &ctx.asts[sf.model_id][sf.field_id];

                if ast_field.arity.is_required() {
                    None
                } else {
                    Some(ast_field.name())
                }
            }
            Either::Right(_) => None,
        })
        .collect();

    if !optional_fields.is_empty() {
        let ast_model = &ctx.asts[model_id];
        ctx.push_error(DatamodelError::new_model_validation_error(
            &format!(
                "The shard key definition refers to the optional {}. Shard key definitions must reference only required fields.",
                format_fields_in_error_with_leading_word(optional_fields.into_iter().map(Cow::from))
            ),
            "model",
            ast_model.name(),
            ctx.asts[shard_key.source_attribute].span,
        ))
    }
}
