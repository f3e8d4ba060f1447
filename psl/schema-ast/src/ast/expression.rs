use super::ArgumentsList;
use diagnostics::Span;
use std::fmt;

/// Represents arbitrary, even nested, expressions.
#[derive(Debug, Clone)]
pub enum Expression {
    /// Any numeric value e.g. floats or ints.
    NumericValue(String, Span),
    /// Any string value.
    StringValue(String, Span),
    /// Any literal constant, basically a string which was not inside "...".
    /// This can be an enum value, an identifier constant like `Desc`, or a
    /// dotted path like `db.Text`.
    ConstantValue(String, Span),
    /// A function call with a name and arguments, e.g. `dbgenerated("now()")`.
    Function(String, ArgumentsList, Span),
    /// An array of other values.
    Array(Vec<Expression>, Span),
}

impl Expression {
    pub fn as_string_value(&self) -> Option<(&str, Span)> {
        match self {
            Expression::StringValue(s, span) => Some((s, *span)),
            _ => None,
        }
    }

    pub fn as_numeric_value(&self) -> Option<(&str, Span)> {
        match self {
            Expression::NumericValue(s, span) => Some((s, *span)),
            _ => None,
        }
    }

    pub fn as_constant_value(&self) -> Option<(&str, Span)> {
        match self {
            Expression::ConstantValue(s, span) => Some((s, *span)),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<(&str, &ArgumentsList, Span)> {
        match self {
            Expression::Function(name, args, span) => Some((name, args, *span)),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<(&[Expression], Span)> {
        match self {
            Expression::Array(expressions, span) => Some((expressions, *span)),
            _ => None,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Expression::NumericValue(_, span)
            | Expression::StringValue(_, span)
            | Expression::ConstantValue(_, span)
            | Expression::Function(_, _, span)
            | Expression::Array(_, span) => *span,
        }
    }

    pub fn is_env_expression(&self) -> bool {
        matches!(self, Expression::Function(name, _, _) if name == "env")
    }

    /// Describes the expression by its AST shape, for diagnostics.
    pub fn describe_value_type(&self) -> &'static str {
        match self {
            Expression::NumericValue(val, _) if val.parse::<i64>().is_ok() => "numeric",
            Expression::NumericValue(_, _) => "float",
            Expression::StringValue(_, _) => "string",
            Expression::ConstantValue(_, _) => "literal",
            Expression::Function(_, _, _) => "functional",
            Expression::Array(_, _) => "array",
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::NumericValue(val, _) => f.write_str(val),
            Expression::StringValue(val, _) => write!(f, "\"{}\"", val.escape_debug()),
            Expression::ConstantValue(val, _) => f.write_str(val),
            Expression::Function(fun, args, _) => {
                f.write_str(fun)?;
                f.write_str("(")?;
                for (idx, arg) in args.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(arg, f)?;
                }
                f.write_str(")")
            }
            Expression::Array(vals, _) => {
                f.write_str("[")?;
                for (idx, val) in vals.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(val, f)?;
                }
                f.write_str("]")
            }
        }
    }
}
