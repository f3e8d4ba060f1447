use crate::{
    coerce,
    context::Context,
    types::{DefaultAttribute, ScalarFieldId, ScalarFieldType, ScalarType},
    StringId,
};
use base64::Engine as _;
use schema_ast::ast::{self, WithName};

/// @default on model scalar fields
pub(super) fn visit_model_field_default(
    scalar_field_id: ScalarFieldId,
    model_id: crate::ModelId,
    field_id: ast::FieldId,
    ctx: &mut Context<'_>,
) {
    let (argument_idx, value) = match ctx.visit_default_arg_with_idx("value") {
        Ok(value) => value,
        Err(err) => return ctx.push_error(err),
    };

    let ast_field = &ctx.asts[model_id][field_id];

    let mapped_name = default_attribute_mapped_name(ctx);
    let default_attribute = ctx.current_attribute_id();

    let accept = move |ctx: &mut Context<'_>| {
        let default_value = DefaultAttribute {
            argument_idx,
            mapped_name,
            default_attribute,
        };

        ctx.types[scalar_field_id].default = Some(default_value);
    };

    match ctx.types[scalar_field_id].r#type {
        ScalarFieldType::CompositeType(_) => {
            ctx.push_attribute_validation_error(
                "Defaults on fields of type composite are not supported. Please remove the `@default` attribute.",
            );
        }
        ScalarFieldType::Enum(enum_id) => validate_enum_default(value, enum_id, accept, ctx),
        ScalarFieldType::BuiltInScalar(scalar_type) => {
            validate_builtin_scalar_default(value, scalar_type, ast_field.arity, accept, ctx)
        }
        ScalarFieldType::Unsupported(_) => validate_dbgenerated_only_default(
            value,
            "Only `dbgenerated()` defaults are allowed on `Unsupported` fields.",
            accept,
            ctx,
        ),
        ScalarFieldType::Extension(_) => validate_dbgenerated_only_default(
            value,
            "Only `dbgenerated()` defaults are allowed on extension type fields.",
            accept,
            ctx,
        ),
    }
}

/// @default on composite type fields
pub(super) fn visit_composite_field_default(ctid: crate::CompositeTypeId, field_id: ast::FieldId, ctx: &mut Context<'_>) {
    let (argument_idx, value) = match ctx.visit_default_arg_with_idx("value") {
        Ok(value) => value,
        Err(err) => return ctx.push_error(err),
    };

    if ctx.visit_optional_arg("map").is_some() {
        ctx.push_attribute_validation_error("The `map` argument is not allowed on composite type field defaults.");
    }

    let ast_field = &ctx.asts[ctid][field_id];
    let default_attribute = ctx.current_attribute_id();

    let accept = move |ctx: &mut Context<'_>| {
        let default_value = DefaultAttribute {
            argument_idx,
            mapped_name: None,
            default_attribute,
        };

        if let Some(field) = ctx.types.composite_type_fields.get_mut(&(ctid, field_id)) {
            field.default = Some(default_value);
        }
    };

    if let ast::Expression::Function(name, _, _) = value {
        if name == "dbgenerated" {
            ctx.push_attribute_validation_error(
                "Fields of composite types cannot have `dbgenerated()` as default.",
            );
            return;
        }
    }

    let r#type = match ctx.types.composite_type_fields.get(&(ctid, field_id)) {
        Some(field) => field.r#type,
        None => return,
    };

    match r#type {
        ScalarFieldType::CompositeType(_) => {
            ctx.push_attribute_validation_error(
                "Defaults on fields of type composite are not supported. Please remove the `@default` attribute.",
            );
        }
        ScalarFieldType::Enum(enum_id) => validate_enum_default(value, enum_id, accept, ctx),
        ScalarFieldType::BuiltInScalar(scalar_type) => {
            validate_builtin_scalar_default(value, scalar_type, ast_field.arity, accept, ctx)
        }
        ScalarFieldType::Unsupported(_) | ScalarFieldType::Extension(_) => {
            ctx.push_attribute_validation_error("This field type does not take a default value.")
        }
    }
}

fn validate_builtin_scalar_default(
    value: &ast::Expression,
    scalar_type: ScalarType,
    arity: ast::FieldArity,
    accept: impl FnOnce(&mut Context<'_>),
    ctx: &mut Context<'_>,
) {
    match value {
        ast::Expression::Function(name, funcargs, _) => {
            validate_default_function(name, funcargs, scalar_type, accept, ctx)
        }
        _ if arity.is_list() => validate_default_list(value, scalar_type, accept, ctx),
        _ => {
            validate_scalar_default_literal(value, scalar_type, accept, ctx);
        }
    }
}

fn validate_default_list(
    value: &ast::Expression,
    scalar_type: ScalarType,
    accept: impl FnOnce(&mut Context<'_>),
    ctx: &mut Context<'_>,
) {
    let values = match value.as_array() {
        Some((values, _)) => values,
        None => {
            ctx.push_attribute_validation_error("The default value of a list field must be a list.");
            return;
        }
    };

    let mut is_valid = true;
    for value in values {
        is_valid &= validate_scalar_default_literal(value, scalar_type, |_| (), ctx).is_some();
    }

    if is_valid {
        accept(ctx);
    }
}

/// Validate a literal default against the field's scalar type. Returns
/// `Some(())` when the value is acceptable.
fn validate_scalar_default_literal(
    value: &ast::Expression,
    scalar_type: ScalarType,
    accept: impl FnOnce(&mut Context<'_>),
    ctx: &mut Context<'_>,
) -> Option<()> {
    let valid = match scalar_type {
        ScalarType::Int | ScalarType::BigInt => coerce::integer(value, ctx.diagnostics).map(drop),
        ScalarType::Float | ScalarType::Decimal => coerce::float(value, ctx.diagnostics).map(drop),
        ScalarType::Boolean => coerce::boolean(value, ctx.diagnostics).map(drop),
        // Quoted JSON is permitted; the contents are not validated here.
        ScalarType::String | ScalarType::DateTime | ScalarType::Json => {
            coerce::string(value, ctx.diagnostics).map(drop)
        }
        ScalarType::Bytes => match coerce::string(value, ctx.diagnostics) {
            Some(s) => {
                if base64::engine::general_purpose::STANDARD.decode(s).is_ok() {
                    Some(())
                } else {
                    ctx.push_attribute_validation_error("The default value is not a valid base64 string.");
                    None
                }
            }
            None => None,
        },
    };

    if valid.is_some() {
        accept(ctx);
    }

    valid
}

fn validate_default_function(
    name: &str,
    funcargs: &ast::ArgumentsList,
    scalar_type: ScalarType,
    accept: impl FnOnce(&mut Context<'_>),
    ctx: &mut Context<'_>,
) {
    match (name, scalar_type) {
        ("dbgenerated", _) => validate_dbgenerated_args(funcargs, accept, ctx),
        ("autoincrement", ScalarType::Int | ScalarType::BigInt) => validate_empty_function_args(name, funcargs, accept, ctx),
        ("autoincrement", _) => {
            ctx.push_attribute_validation_error("The `autoincrement()` default can only be used on `Int` and `BigInt` fields.")
        }
        ("now", ScalarType::DateTime) => validate_empty_function_args(name, funcargs, accept, ctx),
        ("now", _) => ctx.push_attribute_validation_error("The `now()` default can only be used on `DateTime` fields."),
        ("uuid" | "cuid", ScalarType::String) => validate_optional_version_function_args(name, funcargs, accept, ctx),
        ("uuid" | "cuid", _) => {
            ctx.push_attribute_validation_error(&format!("The `{name}()` default can only be used on `String` fields."))
        }
        (other, _) => {
            ctx.push_attribute_validation_error(&format!("The function `{other}` is not a known function."))
        }
    }
}

fn validate_empty_function_args(
    fn_name: &str,
    args: &ast::ArgumentsList,
    accept: impl FnOnce(&mut Context<'_>),
    ctx: &mut Context<'_>,
) {
    if args.arguments.is_empty() && args.empty_arguments.is_empty() {
        return accept(ctx);
    }

    ctx.push_attribute_validation_error(&format!(
        "The `{fn_name}` function does not take any argument. Consider changing this default to `{fn_name}()`.",
    ))
}

/// `uuid()` and `cuid()` take an optional integer version argument.
fn validate_optional_version_function_args(
    fn_name: &str,
    args: &ast::ArgumentsList,
    accept: impl FnOnce(&mut Context<'_>),
    ctx: &mut Context<'_>,
) {
    match args.arguments.as_slice() {
        [] => accept(ctx),
        [arg] => {
            if coerce::integer(&arg.value, ctx.diagnostics).is_some() {
                accept(ctx);
            }
        }
        _ => ctx.push_attribute_validation_error(&format!(
            "The `{fn_name}` function takes at most one argument, the version.",
        )),
    }
}

fn validate_dbgenerated_args(args: &ast::ArgumentsList, accept: impl FnOnce(&mut Context<'_>), ctx: &mut Context<'_>) {
    let mut bail = || ctx.push_attribute_validation_error("`dbgenerated()` takes a single String argument");

    if args.empty_arguments.len() + args.arguments.len() > 1 {
        return bail();
    }

    match args.arguments.first().map(|arg| &arg.value) {
        Some(ast::Expression::StringValue(val, _)) if val.is_empty() => {
            ctx.push_attribute_validation_error(
                "dbgenerated() takes either no argument, or a single nonempty string argument.",
            );
        }
        None | Some(ast::Expression::StringValue(_, _)) => accept(ctx),
        _ => bail(),
    }
}

fn validate_enum_default(
    value: &ast::Expression,
    enum_id: crate::EnumId,
    accept: impl FnOnce(&mut Context<'_>),
    ctx: &mut Context<'_>,
) {
    match value.as_constant_value() {
        Some((constant, _)) => {
            let enum_value_exists = ctx.asts[enum_id].values.iter().any(|value| value.name() == constant);

            if enum_value_exists {
                accept(ctx)
            } else {
                ctx.push_attribute_validation_error(
                    "The defined default value is not a valid value of the enum specified for the field.",
                )
            }
        }
        None => ctx.push_attribute_validation_error("The default value of an enum field must be an enum value."),
    }
}

fn validate_dbgenerated_only_default(
    value: &ast::Expression,
    message: &str,
    accept: impl FnOnce(&mut Context<'_>),
    ctx: &mut Context<'_>,
) {
    match value {
        ast::Expression::Function(name, funcargs, _) if name == "dbgenerated" => {
            validate_dbgenerated_args(funcargs, accept, ctx)
        }
        _ => ctx.push_attribute_validation_error(message),
    }
}

fn default_attribute_mapped_name(ctx: &mut Context<'_>) -> Option<StringId> {
    match ctx
        .visit_optional_arg("map")
        .and_then(|name| coerce::string(name, ctx.diagnostics))
    {
        Some("") => {
            ctx.push_attribute_validation_error("The `map` argument cannot be an empty string.");
            None
        }
        Some(name) => Some(ctx.interner.intern(name)),
        None => None,
    }
}
