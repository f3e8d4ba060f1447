use crate::{
    pretty_print::{pretty_print, DiagnosticColorer},
    Span,
};
use colored::{ColoredString, Colorize};
use thiserror::Error;

/// A validation or parser error, as a value.
///
/// Every variant is one stable error kind. The rendered message is the
/// `Display` implementation; [`DatamodelError::pretty_print`] renders the
/// message together with the source context the span points into.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DatamodelError {
    #[error("{message}")]
    LexError { message: String, span: Span },

    #[error("Unexpected token. Expected one of: {expected}")]
    ParserError { expected: String, span: Span },

    #[error(
        "Type \"{type_name}\" is neither a built-in type, nor refers to another model, composite type, or enum."
    )]
    TypeNotFound { type_name: String, span: Span },

    #[error(
        "Type \"{type_name}\" is neither a built-in type, nor refers to another model, composite type, or enum. Did you mean \"{suggestion}\"?"
    )]
    TypeForCaseNotFound {
        type_name: String,
        suggestion: String,
        span: Span,
    },

    #[error("Expected a {expected_type} value, but received {received_type} value `{raw}`.")]
    ValueParserError {
        expected_type: String,
        received_type: String,
        raw: String,
        span: Span,
    },

    #[error("Attribute not known: \"@{attribute_name}\".")]
    AttributeNotKnown { attribute_name: String, span: Span },

    #[error("Attribute \"@{attribute_name}\" can only be defined once.")]
    DuplicateAttribute { attribute_name: String, span: Span },

    #[error("Argument \"{argument_name}\" is already specified.")]
    DuplicateArgument { argument_name: String, span: Span },

    #[error("Argument \"{argument_name}\" is already specified as unnamed argument.")]
    DuplicateDefaultArgument { argument_name: String, span: Span },

    #[error("Argument \"{argument_name}\" is missing.")]
    ArgumentNotFound { argument_name: String, span: Span },

    #[error("No such argument.")]
    UnusedArgument { span: Span },

    #[error("Error parsing attribute \"{attribute_name}\": {message}")]
    AttributeValidationError {
        message: String,
        attribute_name: String,
        span: Span,
    },

    #[error("Error validating {block_type} \"{model_name}\": {message}")]
    ModelValidationError {
        message: String,
        block_type: &'static str,
        model_name: String,
        span: Span,
    },

    #[error("Error validating enum \"{enum_name}\": {message}")]
    EnumValidationError {
        message: String,
        enum_name: String,
        span: Span,
    },

    #[error("Error validating composite type \"{composite_type_name}\": {message}")]
    CompositeTypeValidationError {
        message: String,
        composite_type_name: String,
        span: Span,
    },

    #[error("Error validating field `{field_name}` in {container_type} `{container_name}`: {message}")]
    FieldValidationError {
        message: String,
        container_type: &'static str,
        container_name: String,
        field_name: String,
        span: Span,
    },

    #[error("Field \"{field_name}\" is already defined on {container_type} \"{container_name}\".")]
    DuplicateField {
        container_type: &'static str,
        container_name: String,
        field_name: String,
        span: Span,
    },

    #[error("Value \"{value_name}\" is already defined on enum \"{enum_name}\".")]
    DuplicateEnumValue {
        enum_name: String,
        value_name: String,
        span: Span,
    },

    #[error("The {top_type} \"{name}\" cannot be defined because a {existing_top_type} with that name already exists.")]
    DuplicateTop {
        name: String,
        top_type: &'static str,
        existing_top_type: &'static str,
        span: Span,
    },

    #[error("Key \"{key_name}\" is already defined in {conf_block_name}.")]
    DuplicateConfigKey {
        conf_block_name: String,
        key_name: String,
        span: Span,
    },

    #[error("{message}")]
    ReservedName { message: String, span: Span },

    #[error("{message}")]
    GenericValidationError { message: String, span: Span },
}

impl DatamodelError {
    pub fn new_lexer_error(message: impl Into<String>, span: Span) -> DatamodelError {
        DatamodelError::LexError {
            message: message.into(),
            span,
        }
    }

    pub fn new_parser_error(expected: &[&str], span: Span) -> DatamodelError {
        DatamodelError::ParserError {
            expected: expected.join(", "),
            span,
        }
    }

    pub fn new_type_not_found_error(type_name: &str, span: Span) -> DatamodelError {
        DatamodelError::TypeNotFound {
            type_name: type_name.to_owned(),
            span,
        }
    }

    pub fn new_type_for_case_not_found_error(type_name: &str, suggestion: &str, span: Span) -> DatamodelError {
        DatamodelError::TypeForCaseNotFound {
            type_name: type_name.to_owned(),
            suggestion: suggestion.to_owned(),
            span,
        }
    }

    pub fn new_value_parser_error(expected_type: &str, received_type: &str, raw: &str, span: Span) -> DatamodelError {
        DatamodelError::ValueParserError {
            expected_type: expected_type.to_owned(),
            received_type: received_type.to_owned(),
            raw: raw.to_owned(),
            span,
        }
    }

    pub fn new_attribute_not_known_error(attribute_name: &str, span: Span) -> DatamodelError {
        DatamodelError::AttributeNotKnown {
            attribute_name: attribute_name.to_owned(),
            span,
        }
    }

    pub fn new_duplicate_attribute_error(attribute_name: &str, span: Span) -> DatamodelError {
        DatamodelError::DuplicateAttribute {
            attribute_name: attribute_name.to_owned(),
            span,
        }
    }

    pub fn new_duplicate_argument_error(argument_name: &str, span: Span) -> DatamodelError {
        DatamodelError::DuplicateArgument {
            argument_name: argument_name.to_owned(),
            span,
        }
    }

    pub fn new_duplicate_default_argument_error(argument_name: &str, span: Span) -> DatamodelError {
        DatamodelError::DuplicateDefaultArgument {
            argument_name: argument_name.to_owned(),
            span,
        }
    }

    pub fn new_argument_not_found_error(argument_name: &str, span: Span) -> DatamodelError {
        DatamodelError::ArgumentNotFound {
            argument_name: argument_name.to_owned(),
            span,
        }
    }

    pub fn new_unused_argument_error(span: Span) -> DatamodelError {
        DatamodelError::UnusedArgument { span }
    }

    /// `attribute_name` is the full name, with the `@` or `@@` marker.
    pub fn new_attribute_validation_error(message: &str, attribute_name: &str, span: Span) -> DatamodelError {
        DatamodelError::AttributeValidationError {
            message: message.to_owned(),
            attribute_name: attribute_name.to_owned(),
            span,
        }
    }

    pub fn new_model_validation_error(
        message: &str,
        block_type: &'static str,
        model_name: &str,
        span: Span,
    ) -> DatamodelError {
        DatamodelError::ModelValidationError {
            message: message.to_owned(),
            block_type,
            model_name: model_name.to_owned(),
            span,
        }
    }

    pub fn new_enum_validation_error(message: &str, enum_name: &str, span: Span) -> DatamodelError {
        DatamodelError::EnumValidationError {
            message: message.to_owned(),
            enum_name: enum_name.to_owned(),
            span,
        }
    }

    pub fn new_composite_type_validation_error(
        message: &str,
        composite_type_name: &str,
        span: Span,
    ) -> DatamodelError {
        DatamodelError::CompositeTypeValidationError {
            message: message.to_owned(),
            composite_type_name: composite_type_name.to_owned(),
            span,
        }
    }

    pub fn new_field_validation_error(
        message: &str,
        container_type: &'static str,
        container_name: &str,
        field_name: &str,
        span: Span,
    ) -> DatamodelError {
        DatamodelError::FieldValidationError {
            message: message.to_owned(),
            container_type,
            container_name: container_name.to_owned(),
            field_name: field_name.to_owned(),
            span,
        }
    }

    pub fn new_duplicate_field_error(
        container_type: &'static str,
        container_name: &str,
        field_name: &str,
        span: Span,
    ) -> DatamodelError {
        DatamodelError::DuplicateField {
            container_type,
            container_name: container_name.to_owned(),
            field_name: field_name.to_owned(),
            span,
        }
    }

    pub fn new_duplicate_enum_value_error(enum_name: &str, value_name: &str, span: Span) -> DatamodelError {
        DatamodelError::DuplicateEnumValue {
            enum_name: enum_name.to_owned(),
            value_name: value_name.to_owned(),
            span,
        }
    }

    pub fn new_duplicate_top_error(
        name: &str,
        top_type: &'static str,
        existing_top_type: &'static str,
        span: Span,
    ) -> DatamodelError {
        DatamodelError::DuplicateTop {
            name: name.to_owned(),
            top_type,
            existing_top_type,
            span,
        }
    }

    pub fn new_duplicate_config_key_error(conf_block_name: &str, key_name: &str, span: Span) -> DatamodelError {
        DatamodelError::DuplicateConfigKey {
            conf_block_name: conf_block_name.to_owned(),
            key_name: key_name.to_owned(),
            span,
        }
    }

    pub fn new_reserved_scalar_type_error(type_name: &str, span: Span) -> DatamodelError {
        DatamodelError::ReservedName {
            message: format!("\"{type_name}\" is a reserved scalar type name and cannot be used."),
            span,
        }
    }

    pub fn new_reserved_model_name_error(name: &str, span: Span) -> DatamodelError {
        DatamodelError::ReservedName {
            message: format!("The model name `{name}` is invalid. It is a reserved name. Please change it."),
            span,
        }
    }

    pub fn new_duplicate_model_database_name_error(
        model_database_name: &str,
        existing_model_name: &str,
        span: Span,
    ) -> DatamodelError {
        DatamodelError::GenericValidationError {
            message: format!(
                "The model with database name \"{model_database_name}\" could not be defined because another model with this name exists: \"{existing_model_name}\""
            ),
            span,
        }
    }

    pub fn new_validation_error(message: &str, span: Span) -> DatamodelError {
        DatamodelError::GenericValidationError {
            message: message.to_owned(),
            span,
        }
    }

    pub fn new_legacy_parser_error(message: &str, span: Span) -> DatamodelError {
        DatamodelError::GenericValidationError {
            message: message.to_owned(),
            span,
        }
    }

    /// The source location the error points at.
    pub fn span(&self) -> Span {
        match self {
            DatamodelError::LexError { span, .. }
            | DatamodelError::ParserError { span, .. }
            | DatamodelError::TypeNotFound { span, .. }
            | DatamodelError::TypeForCaseNotFound { span, .. }
            | DatamodelError::ValueParserError { span, .. }
            | DatamodelError::AttributeNotKnown { span, .. }
            | DatamodelError::DuplicateAttribute { span, .. }
            | DatamodelError::DuplicateArgument { span, .. }
            | DatamodelError::DuplicateDefaultArgument { span, .. }
            | DatamodelError::ArgumentNotFound { span, .. }
            | DatamodelError::UnusedArgument { span }
            | DatamodelError::AttributeValidationError { span, .. }
            | DatamodelError::ModelValidationError { span, .. }
            | DatamodelError::EnumValidationError { span, .. }
            | DatamodelError::CompositeTypeValidationError { span, .. }
            | DatamodelError::FieldValidationError { span, .. }
            | DatamodelError::DuplicateField { span, .. }
            | DatamodelError::DuplicateEnumValue { span, .. }
            | DatamodelError::DuplicateTop { span, .. }
            | DatamodelError::DuplicateConfigKey { span, .. }
            | DatamodelError::ReservedName { span, .. }
            | DatamodelError::GenericValidationError { span, .. } => *span,
        }
    }

    /// The rendered message, without source context.
    pub fn description(&self) -> String {
        self.to_string()
    }

    pub fn pretty_print(&self, f: &mut dyn std::io::Write, file_name: &str, text: &str) -> std::io::Result<()> {
        pretty_print(f, file_name, text, &self.span(), &self.description(), &ErrorColorer)
    }
}

struct ErrorColorer;

impl DiagnosticColorer for ErrorColorer {
    fn title(&self) -> &'static str {
        "error"
    }

    fn primary_color(&self, token: &str) -> ColoredString {
        token.bright_red()
    }
}
