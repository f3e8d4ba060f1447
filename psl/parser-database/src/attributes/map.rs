use crate::{
    coerce,
    context::Context,
    types::{EnumAttributes, ModelAttributes, ScalarFieldId},
    DatamodelError, StringId,
};
use schema_ast::ast::{self, WithName};

/// @@map on models
pub(super) fn model(model_attributes: &mut ModelAttributes, model_id: crate::ModelId, ctx: &mut Context<'_>) {
    let mapped_name = match visit_map_attribute(ctx) {
        Some(name) => name,
        None => return,
    };

    model_attributes.mapped_name = Some(mapped_name);

    validate_top_mapped_name(mapped_name, (model_id.0, ast::TopId::Model(model_id.1)), ctx);
}

/// @@map on enums
pub(super) fn r#enum(enum_attributes: &mut EnumAttributes, enum_id: crate::EnumId, ctx: &mut Context<'_>) {
    let mapped_name = match visit_map_attribute(ctx) {
        Some(name) => name,
        None => return,
    };

    enum_attributes.mapped_name = Some(mapped_name);

    validate_top_mapped_name(mapped_name, (enum_id.0, ast::TopId::Enum(enum_id.1)), ctx);
}

/// The mapped name of a model or enum must not collide with the name of
/// another top, nor with another mapped name.
fn validate_top_mapped_name(mapped_name: StringId, top_id: crate::TopId, ctx: &mut Context<'_>) {
    let attribute_span = ctx.current_attribute().span;

    if let Some(existing_top_id) = ctx.names.tops.get(&mapped_name).copied() {
        if existing_top_id != top_id {
            let mapped = ctx.interner[mapped_name].to_owned();
            let existing_name = ctx.asts[existing_top_id].name().to_owned();
            ctx.push_error(DatamodelError::new_duplicate_model_database_name_error(
                &mapped,
                &existing_name,
                attribute_span,
            ));
            return;
        }
    }

    if let Some(existing_top_id) = ctx.mapped_top_names.insert(mapped_name, top_id) {
        if existing_top_id != top_id {
            let mapped = ctx.interner[mapped_name].to_owned();
            let existing_name = ctx.asts[existing_top_id].name().to_owned();
            ctx.push_error(DatamodelError::new_duplicate_model_database_name_error(
                &mapped,
                &existing_name,
                attribute_span,
            ));
        }
    }
}

/// @map on model scalar fields
pub(super) fn scalar_field(
    ast_model: &ast::Model,
    ast_field: &ast::Field,
    model_id: crate::ModelId,
    field_id: ast::FieldId,
    scalar_field_id: ScalarFieldId,
    ctx: &mut Context<'_>,
) {
    let mapped_name = match visit_map_attribute(ctx) {
        Some(name) => name,
        None => return,
    };

    ctx.types[scalar_field_id].mapped_name = Some(mapped_name);

    if ctx
        .mapped_model_scalar_field_names
        .insert((model_id, mapped_name), field_id)
        .is_some()
    {
        ctx.push_error(DatamodelError::new_duplicate_field_error(
            "model",
            ast_model.name(),
            ast_field.name(),
            ast_field.span,
        ));
        return;
    }

    // The mapped name must not collide with the plain name of a sibling
    // field, unless that sibling maps away itself.
    if let Some(sibling_field_id) = ctx.names.model_fields.get(&(model_id, mapped_name)).copied() {
        if sibling_field_id == field_id {
            return;
        }

        let sibling_mapped_elsewhere = ctx
            .types
            .find_model_scalar_field(model_id, sibling_field_id)
            .map(|sfid| ctx.types[sfid].mapped_name.is_some())
            .unwrap_or(false);

        if !sibling_mapped_elsewhere {
            ctx.push_error(DatamodelError::new_duplicate_field_error(
                "model",
                ast_model.name(),
                ast_field.name(),
                ast_field.span,
            ));
        }
    }
}

/// @map on composite type fields
pub(super) fn composite_type_field(
    ct: &ast::CompositeType,
    ast_field: &ast::Field,
    ctid: crate::CompositeTypeId,
    field_id: ast::FieldId,
    ctx: &mut Context<'_>,
) {
    let mapped_name = match visit_map_attribute(ctx) {
        Some(name) => name,
        None => return,
    };

    if let Some(field) = ctx.types.composite_type_fields.get_mut(&(ctid, field_id)) {
        field.mapped_name = Some(mapped_name);
    }

    if ctx
        .mapped_composite_type_names
        .insert((ctid, mapped_name), field_id)
        .is_some()
    {
        ctx.push_error(DatamodelError::new_duplicate_field_error(
            "composite type",
            ct.name(),
            ast_field.name(),
            ast_field.span,
        ));
        return;
    }

    if let Some(sibling_field_id) = ctx.names.composite_type_fields.get(&(ctid, mapped_name)).copied() {
        if sibling_field_id == field_id {
            return;
        }

        let sibling_mapped_elsewhere = ctx
            .types
            .composite_type_fields
            .get(&(ctid, sibling_field_id))
            .map(|field| field.mapped_name.is_some())
            .unwrap_or(false);

        if !sibling_mapped_elsewhere {
            ctx.push_error(DatamodelError::new_duplicate_field_error(
                "composite type",
                ct.name(),
                ast_field.name(),
                ast_field.span,
            ));
        }
    }
}

/// @map on enum values
pub(super) fn enum_value(
    ast_enum: &ast::Enum,
    enum_id: crate::EnumId,
    value_idx: u32,
    enum_attributes: &mut EnumAttributes,
    ctx: &mut Context<'_>,
) {
    let mapped_name = match visit_map_attribute(ctx) {
        Some(name) => name,
        None => return,
    };

    enum_attributes.mapped_values.insert(value_idx, mapped_name);

    if ctx
        .mapped_enum_value_names
        .insert((enum_id, mapped_name), value_idx)
        .is_some()
    {
        let value = &ast_enum.values[value_idx as usize];
        ctx.push_error(DatamodelError::new_duplicate_enum_value_error(
            ast_enum.name(),
            value.name(),
            value.span,
        ));
        return;
    }

    let mapped = ctx.interner[mapped_name].to_owned();
    let sibling = ast_enum
        .iter_values()
        .find(|(idx, value)| *idx != value_idx && value.name() == mapped);

    if let Some((sibling_idx, _)) = sibling {
        let sibling_mapped_elsewhere = enum_attributes
            .mapped_values
            .get(&sibling_idx)
            .map(|mapped| *mapped != mapped_name)
            .unwrap_or(false);

        if !sibling_mapped_elsewhere {
            let value = &ast_enum.values[value_idx as usize];
            ctx.push_error(DatamodelError::new_duplicate_enum_value_error(
                ast_enum.name(),
                value.name(),
                value.span,
            ));
        }
    }
}

pub(super) fn visit_map_attribute(ctx: &mut Context<'_>) -> Option<StringId> {
    match ctx.visit_default_arg("name").map(|value| coerce::string(value, ctx.diagnostics)) {
        Ok(Some("")) => {
            ctx.push_attribute_validation_error("The `name` argument cannot be an empty string.");
            None
        }
        Ok(Some(name)) => Some(ctx.interner.intern(name)),
        Ok(None) => None,
        Err(err) => {
            ctx.push_error(err);
            None
        }
    }
}
