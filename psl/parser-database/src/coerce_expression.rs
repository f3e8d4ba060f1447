use crate::ast;
use diagnostics::{DatamodelError, Diagnostics};

/// Coerce expressions to a specific type, emitting an error on type mismatch.
pub mod coerce {
    use super::*;

    pub fn string<'a>(expr: &'a ast::Expression, diagnostics: &mut Diagnostics) -> Option<&'a str> {
        coerce_or_error(super::coerce_opt::string(expr), expr, "String", diagnostics)
    }

    pub fn constant<'a>(expr: &'a ast::Expression, diagnostics: &mut Diagnostics) -> Option<&'a str> {
        coerce_or_error(super::coerce_opt::constant(expr), expr, "constant", diagnostics)
    }

    /// Strict: only an integer literal is accepted.
    pub fn integer(expr: &ast::Expression, diagnostics: &mut Diagnostics) -> Option<i64> {
        coerce_or_error(
            expr.as_numeric_value().and_then(|(num, _)| num.parse().ok()),
            expr,
            "numeric",
            diagnostics,
        )
    }

    pub fn float(expr: &ast::Expression, diagnostics: &mut Diagnostics) -> Option<f64> {
        coerce_or_error(super::coerce_opt::float(expr), expr, "numeric", diagnostics)
    }

    /// Strict: only the `true` and `false` constants are accepted.
    pub fn boolean(expr: &ast::Expression, diagnostics: &mut Diagnostics) -> Option<bool> {
        coerce_or_error(
            expr.as_constant_value().and_then(|(constant, _)| constant.parse().ok()),
            expr,
            "boolean",
            diagnostics,
        )
    }

    pub fn function<'a>(
        expr: &'a ast::Expression,
        diagnostics: &mut Diagnostics,
    ) -> Option<(&'a str, &'a ast::ArgumentsList)> {
        coerce_or_error(super::coerce_opt::function(expr), expr, "function", diagnostics)
    }

    fn coerce_or_error<T>(
        coerced: Option<T>,
        expr: &ast::Expression,
        expected_type: &'static str,
        diagnostics: &mut Diagnostics,
    ) -> Option<T> {
        match coerced {
            Some(value) => Some(value),
            None => {
                diagnostics.push_error(DatamodelError::new_value_parser_error(
                    expected_type,
                    expr.describe_value_type(),
                    &expr.to_string(),
                    expr.span(),
                ));
                None
            }
        }
    }
}

/// Fallible coercions of expressions to more specific types, without
/// diagnostics. These are the relaxed variants: quoted boolean and integer
/// literals are accepted where the strict [`coerce`] functions are not,
/// for callers reading loosely typed input like configuration block
/// properties.
pub mod coerce_opt {
    use super::*;

    pub fn string(expr: &ast::Expression) -> Option<&str> {
        expr.as_string_value().map(|(s, _)| s)
    }

    pub fn constant(expr: &ast::Expression) -> Option<&str> {
        expr.as_constant_value().map(|(s, _)| s)
    }

    /// An integer literal, or a quoted integer like `"123"`.
    pub fn integer(expr: &ast::Expression) -> Option<i64> {
        expr.as_numeric_value()
            .map(|(num, _)| num)
            .or_else(|| expr.as_string_value().map(|(s, _)| s))
            .and_then(|num| num.parse().ok())
    }

    /// Integer literals are promoted to float.
    pub fn float(expr: &ast::Expression) -> Option<f64> {
        expr.as_numeric_value().and_then(|(s, _)| s.parse().ok())
    }

    /// A `true` or `false` constant, or a quoted boolean like `"true"`.
    pub fn boolean(expr: &ast::Expression) -> Option<bool> {
        expr.as_constant_value()
            .map(|(constant, _)| constant)
            .or_else(|| expr.as_string_value().map(|(s, _)| s))
            .and_then(|constant| constant.parse().ok())
    }

    pub fn function(expr: &ast::Expression) -> Option<(&str, &ast::ArgumentsList)> {
        expr.as_function().map(|(name, args, _)| (name, args))
    }
}

/// Coerce an expression to an array of `T`s. As a convenience, a single value
/// is treated as a one-element array, so `@@id(fields: foo)` means
/// `@@id(fields: [foo])`.
pub fn coerce_array<'a, T>(
    expr: &'a ast::Expression,
    coercer: &dyn Fn(&'a ast::Expression, &mut Diagnostics) -> Option<T>,
    diagnostics: &mut Diagnostics,
) -> Option<Vec<T>> {
    let mut out = Vec::new();
    let mut is_valid = true;

    match expr {
        ast::Expression::Array(vals, _) => {
            for val in vals {
                match coercer(val, diagnostics) {
                    Some(val) => out.push(val),
                    None => is_valid = false,
                }
            }
        }
        _ => out.push(coercer(expr, diagnostics)?),
    }

    if !is_valid {
        return None;
    }

    Some(out)
}
