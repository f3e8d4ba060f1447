use crate::context::Context;
use diagnostics::DatamodelError;
use schema_ast::ast::{self, WithName};

/// Returns `true` if a model or enum cannot be named this, either because it
/// clashes with a built-in scalar type or with the generated client API.
pub fn is_reserved_type_name(name: &str) -> bool {
    super::is_scalar_type_name(name) || RESERVED_NAMES.contains(&name)
}

pub(crate) fn validate_model_name(ast_model: &ast::Model, ctx: &mut Context<'_>) {
    if super::is_scalar_type_name(ast_model.name()) {
        ctx.push_error(DatamodelError::new_reserved_scalar_type_error(
            ast_model.name(),
            ast_model.name.span,
        ));
        return;
    }

    if RESERVED_NAMES.contains(&ast_model.name()) {
        ctx.push_error(DatamodelError::new_reserved_model_name_error(
            ast_model.name(),
            ast_model.name.span,
        ));
    }
}

pub(crate) fn validate_enum_name(ast_enum: &ast::Enum, ctx: &mut Context<'_>) {
    if super::is_scalar_type_name(ast_enum.name()) {
        ctx.push_error(DatamodelError::new_reserved_scalar_type_error(
            ast_enum.name(),
            ast_enum.name.span,
        ))
    }
}

pub(crate) fn validate_composite_type_name(ct: &ast::CompositeType, ctx: &mut Context<'_>) {
    if super::is_scalar_type_name(ct.name()) {
        ctx.push_error(DatamodelError::new_reserved_scalar_type_error(ct.name(), ct.name.span))
    }
}

/// The names the generated client reserves for itself: the client entry
/// point, and the JavaScript keywords, because models become properties and
/// types in the generated code. The list must be reproduced exactly for
/// compatibility.
const RESERVED_NAMES: &[&str] = &[
    "PrismaClient",
    // JavaScript keywords
    "async",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];
