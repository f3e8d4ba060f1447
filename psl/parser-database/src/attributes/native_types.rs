use crate::{context::Context, types::ScalarFieldId, StringId};
use schema_ast::ast;

/// `@db.Text` and friends on model scalar fields. The type name and its
/// arguments are captured verbatim; connectors validate them downstream.
pub(super) fn visit_model_field_native_type_attribute(
    datasource_name: StringId,
    type_name: StringId,
    attribute_id: crate::AttributeId,
    scalar_field_id: ScalarFieldId,
    ctx: &mut Context<'_>,
) {
    let attribute = &ctx.asts[attribute_id];
    let args = extract_type_arguments(attribute);

    ctx.types[scalar_field_id].native_type = Some((datasource_name, type_name, args, attribute.span));
}

/// `@db.Text` and friends on composite type fields.
pub(super) fn visit_composite_type_field_native_type_attribute(
    ctid: crate::CompositeTypeId,
    field_id: ast::FieldId,
    datasource_name: StringId,
    type_name: StringId,
    attribute_id: crate::AttributeId,
    ctx: &mut Context<'_>,
) {
    let attribute = &ctx.asts[attribute_id];
    let args = extract_type_arguments(attribute);

    if let Some(field) = ctx.types.composite_type_fields.get_mut(&(ctid, field_id)) {
        field.native_type = Some((datasource_name, type_name, args, attribute.span));
    }
}

fn extract_type_arguments(attribute: &ast::Attribute) -> Vec<String> {
    attribute
        .arguments
        .arguments
        .iter()
        .map(|arg| arg.value.to_string())
        .collect()
}
