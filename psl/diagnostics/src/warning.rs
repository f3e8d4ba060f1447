use crate::{
    pretty_print::{pretty_print, DiagnosticColorer},
    Span,
};
use colored::{ColoredString, Colorize};

/// A non-fatal diagnostic. Warnings never fail validation on their own.
#[derive(Debug, Clone, PartialEq)]
pub struct DatamodelWarning {
    message: String,
    span: Span,
}

impl DatamodelWarning {
    pub fn new(message: String, span: Span) -> DatamodelWarning {
        DatamodelWarning { message, span }
    }

    pub fn new_field_validation(message: &str, model: &str, field: &str, span: Span) -> DatamodelWarning {
        DatamodelWarning {
            message: format!("Warning validating field `{field}` in model `{model}`: {message}"),
            span,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn pretty_print(&self, f: &mut dyn std::io::Write, file_name: &str, text: &str) -> std::io::Result<()> {
        pretty_print(f, file_name, text, &self.span(), self.message(), &WarningColorer)
    }
}

struct WarningColorer;

impl DiagnosticColorer for WarningColorer {
    fn title(&self) -> &'static str {
        "warning"
    }

    fn primary_color(&self, token: &str) -> ColoredString {
        token.bright_yellow()
    }
}
