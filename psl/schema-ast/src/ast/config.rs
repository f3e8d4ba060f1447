use super::{Expression, Identifier, WithSpan};
use diagnostics::Span;

/// A `key = value` property in a datasource or generator block.
///
/// ```ignore
/// datasource db {
///     provider = "postgresql"
///     ^^^^^^^^^^^^^^^^^^^^^^^
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBlockProperty {
    /// The property name.
    ///
    /// ```ignore
    /// provider = "postgresql"
    /// ^^^^^^^^
    /// ```
    pub name: Identifier,
    /// The property value, if provided.
    ///
    /// ```ignore
    /// provider = "postgresql"
    ///            ^^^^^^^^^^^^
    /// ```
    pub value: Option<Expression>,
    /// The span of the whole property.
    pub span: Span,
}

impl WithSpan for ConfigBlockProperty {
    fn span(&self) -> Span {
        self.span
    }
}
