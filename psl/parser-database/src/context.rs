mod attributes;

use self::attributes::{attribute_id_at, AttributesValidationState};
use crate::{
    extensions::ExtensionTypes,
    files::Files,
    interner::{StringId, StringInterner},
    names::Names,
    relations::Relations,
    types::Types,
};
use diagnostics::{DatamodelError, Diagnostics};
use rustc_hash::FxHashMap as HashMap;
use schema_ast::ast;

/// Validation context. This is an implementation detail of ParserDatabase. It
/// contains the database itself, as well as context that is discarded after
/// validation.
///
/// ## Attribute validation
///
/// The Context also acts as a state machine for attribute validation. The
/// goal is to avoid manual work validating things that are valid for every
/// attribute set, and every argument set inside an attribute: multiple
/// attributes with the same name, multiple arguments with the same name,
/// missing arguments, leftover arguments that were not validated.
///
/// The state machine works as follows:
///
/// - `visit_attributes()` must be called first on a container. It defines
///   the set of attributes that still need to be consumed.
/// - `visit_optional_single_attr()` and `visit_repeated_attr()` then each
///   claim one attribute and make it current, indexing its arguments.
/// - Arguments of the current attribute are consumed with
///   `visit_default_arg()` and `visit_optional_arg()`.
/// - `validate_visited_arguments()` closes the current attribute, reporting
///   every argument that was not consumed.
/// - `validate_visited_attributes()` closes the container, reporting every
///   attribute that was not claimed.
///
/// Calling the methods out of order is a programming error and panics; it is
/// never triggered by user input.
pub(crate) struct Context<'db> {
    pub(crate) asts: &'db Files,
    pub(crate) interner: &'db mut StringInterner,
    pub(crate) names: &'db mut Names,
    pub(crate) types: &'db mut Types,
    pub(crate) relations: &'db mut Relations,
    pub(crate) extensions: &'db dyn ExtensionTypes,
    pub(crate) diagnostics: &'db mut Diagnostics,
    attributes: AttributesValidationState,

    // @map'ed names indexes. These are not in the db because they are only
    // used for validating name collisions.
    pub(super) mapped_model_scalar_field_names: HashMap<(crate::ModelId, StringId), ast::FieldId>,
    pub(super) mapped_composite_type_names: HashMap<(crate::CompositeTypeId, StringId), ast::FieldId>,
    pub(super) mapped_enum_value_names: HashMap<(crate::EnumId, StringId), u32>,
    pub(super) mapped_top_names: HashMap<StringId, crate::TopId>,
}

impl<'db> Context<'db> {
    pub(super) fn new(
        asts: &'db Files,
        extensions: &'db dyn ExtensionTypes,
        interner: &'db mut StringInterner,
        names: &'db mut Names,
        types: &'db mut Types,
        relations: &'db mut Relations,
        diagnostics: &'db mut Diagnostics,
    ) -> Self {
        Context {
            asts,
            interner,
            names,
            types,
            relations,
            extensions,
            diagnostics,
            attributes: AttributesValidationState::default(),
            mapped_model_scalar_field_names: Default::default(),
            mapped_composite_type_names: Default::default(),
            mapped_enum_value_names: Default::default(),
            mapped_top_names: Default::default(),
        }
    }

    pub(super) fn push_error(&mut self, error: DatamodelError) {
        self.diagnostics.push_error(error)
    }

    /// Return the attribute currently being validated. Panics if the context
    /// is not in the right state.
    #[track_caller]
    pub(crate) fn current_attribute_id(&self) -> crate::AttributeId {
        self.attributes.attribute.unwrap()
    }

    /// Return the attribute currently being validated. Panics if the context
    /// is not in the right state.
    #[track_caller]
    pub(crate) fn current_attribute(&self) -> &'db ast::Attribute {
        &self.asts[self.attributes.attribute.unwrap()]
    }

    /// Discard arguments without validation.
    pub(crate) fn discard_arguments(&mut self) {
        self.attributes.attribute = None;
        self.attributes.args.clear();
    }

    /// All attribute validation should go through `visit_attributes()`. It
    /// lets us enforce some rules, for example that certain attributes should
    /// not be repeated, and make sure that _all_ attributes are visited during
    /// the validation process, emitting unknown attribute errors when it is
    /// not the case.
    ///
    /// - When you are done validating an attribute, you must call
    ///   `validate_visited_arguments()`. Otherwise, the Context will helpfully
    ///   panic.
    /// - When you are done validating an attribute set, you must call
    ///   `validate_visited_attributes()`. Otherwise, the Context will
    ///   helpfully panic.
    pub(crate) fn visit_attributes(&mut self, container: impl Into<ast::AttributeContainer>, file_id: crate::FileId) {
        let container: crate::AttributeContainer = (file_id, container.into());
        if self.attributes.attributes.is_some() || !self.attributes.unused_attributes.is_empty() {
            panic!(
                "`ctx.visit_attributes()` called with {:?} while the Context is still validating the previous attribute set on {:?}",
                container, self.attributes.attributes
            );
        }

        self.attributes.set_attributes(container, self.asts);
    }

    /// Extract an attribute that can occur zero or once. Example: `@@id` on
    /// models. Returns `true` if the attribute is defined.
    pub(crate) fn visit_optional_single_attr(&mut self, name: &'static str) -> bool {
        let container = self.attributes.attributes;
        let mut attrs = iter_attributes(container, self.asts).filter(|(_, a)| a.name.name == name);

        let (first_idx, first) = match attrs.next() {
            Some(first) => first,
            None => return false,
        };

        if attrs.next().is_some() {
            // The first one is valid, the rest are duplicates.
            let duplicates: Vec<_> = iter_attributes(container, self.asts)
                .filter(|(_, a)| a.name.name == name)
                .skip(1)
                .map(|(attr_id, attr)| (attr_id, attr.name.name.clone(), attr.name.span))
                .collect();

            for (attr_id, attr_name, span) in duplicates {
                self.push_error(DatamodelError::new_duplicate_attribute_error(&attr_name, span));
                self.attributes.unused_attributes.remove(&attr_id);
            }

            self.attributes.unused_attributes.remove(&first_idx);
            return false;
        }

        drop(attrs);
        self.attributes.unused_attributes.remove(&first_idx);
        self.set_attribute(first_idx, first)
    }

    /// Extract an attribute that can occur zero or more times. Example:
    /// `@@index` on models.
    ///
    /// Returns `true` as long as a next attribute is found.
    pub(crate) fn visit_repeated_attr(&mut self, name: &'static str) -> bool {
        let mut has_valid_attribute = false;

        while !has_valid_attribute {
            let first_attr = iter_attributes(self.attributes.attributes, self.asts)
                .filter(|(_, attr)| attr.name.name == name)
                .find(|(attr_id, _)| self.attributes.unused_attributes.contains(attr_id));
            let (attr_id, attr) = match first_attr {
                Some(first_attr) => first_attr,
                None => break,
            };
            self.attributes.unused_attributes.remove(&attr_id);
            has_valid_attribute = self.set_attribute(attr_id, attr);
        }

        has_valid_attribute
    }

    /// Find the datasource-scoped attribute of the current container, if any:
    /// the first attribute whose name contains a dot, e.g. `@db.Text`.
    /// Returns the interned scope name, the interned type name and the
    /// attribute id. Additional datasource-scoped attributes are reported as
    /// duplicates.
    pub(crate) fn visit_datasource_scoped(&mut self) -> Option<(StringId, StringId, crate::AttributeId)> {
        let attrs: Vec<_> = iter_attributes(self.attributes.attributes, self.asts)
            .filter(|(_, attr)| attr.name.name.contains('.'))
            .map(|(attr_id, attr)| (attr_id, attr))
            .collect();
        let mut drained = None;

        for (attr_id, attr) in attrs {
            if !self.attributes.unused_attributes.remove(&attr_id) {
                continue;
            }

            if drained.is_some() {
                self.push_error(DatamodelError::new_duplicate_attribute_error(
                    &attr.name.name,
                    attr.name.span,
                ));
                continue;
            }

            let mut parts = attr.name.name.split('.');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(scope), Some(type_name), None) => {
                    let scope_id = self.interner.intern(scope);
                    let type_name_id = self.interner.intern(type_name);
                    drained = Some((scope_id, type_name_id, attr_id));
                }
                _ => self.push_error(DatamodelError::new_validation_error(
                    "Native type attribute names must take the form `@scope.TypeName`.",
                    attr.span,
                )),
            }
        }

        drained
    }

    /// Gets the argument with the given name in the current attribute, or if
    /// it is not found, the first unnamed argument.
    ///
    /// Use this to implement unnamed argument behavior.
    pub(crate) fn visit_default_arg_with_idx(
        &mut self,
        name: &str,
    ) -> Result<(usize, &'db ast::Expression), DatamodelError> {
        let name_s = self.interner.intern(name);
        match (
            self.attributes.args.remove(&Some(name_s)),
            self.attributes.args.remove(&None),
        ) {
            (Some(arg_idx), None) | (None, Some(arg_idx)) => {
                let arg = self.arg_at(arg_idx);
                Ok((arg_idx, &arg.value))
            }
            (Some(arg_idx), Some(_)) => {
                let arg = self.arg_at(arg_idx);
                Err(DatamodelError::new_duplicate_default_argument_error(name, arg.span))
            }
            (None, None) => Err(DatamodelError::new_argument_not_found_error(
                name,
                self.current_attribute().span,
            )),
        }
    }

    /// Gets the argument with the given name in the current attribute, or if
    /// it is not found, the first unnamed argument.
    pub(crate) fn visit_default_arg(&mut self, name: &str) -> Result<&'db ast::Expression, DatamodelError> {
        self.visit_default_arg_with_idx(name).map(|(_, expr)| expr)
    }

    /// Like `visit_default_arg()`, but absence of the argument is not an
    /// error.
    pub(crate) fn visit_optional_default_arg(&mut self, name: &str) -> Option<&'db ast::Expression> {
        let name_s = self.interner.intern(name);
        match (
            self.attributes.args.remove(&Some(name_s)),
            self.attributes.args.remove(&None),
        ) {
            (Some(arg_idx), None) | (None, Some(arg_idx)) => Some(&self.arg_at(arg_idx).value),
            (Some(arg_idx), Some(_)) => {
                let span = self.arg_at(arg_idx).span;
                self.push_error(DatamodelError::new_duplicate_default_argument_error(name, span));
                Some(&self.arg_at(arg_idx).value)
            }
            (None, None) => None,
        }
    }

    /// Consume the named argument if it is present.
    pub(crate) fn visit_optional_arg(&mut self, name: &str) -> Option<&'db ast::Expression> {
        let arg_name = self.interner.intern(name);
        let idx = self.attributes.args.remove(&Some(arg_name))?;
        Some(&self.arg_at(idx).value)
    }

    /// Report an attribute validation error on the current attribute.
    pub(crate) fn push_attribute_validation_error(&mut self, message: &str) {
        let attribute = self.current_attribute();
        let err = DatamodelError::new_attribute_validation_error(
            message,
            &format!("@{}", attribute.name.name),
            attribute.span,
        );
        self.push_error(err);
    }

    /// Close the current attribute: every unconsumed argument is an error.
    pub(crate) fn validate_visited_arguments(&mut self) {
        let attr = if let Some(attrid) = self.attributes.attribute {
            &self.asts[attrid]
        } else {
            panic!("State machine misuse: validate_visited_arguments() called without a current attribute.")
        };

        let diagnostics = &mut self.diagnostics;
        for arg_idx in self.attributes.args.values() {
            let arg = &attr.arguments.arguments[*arg_idx];
            diagnostics.push_error(DatamodelError::new_unused_argument_error(arg.span));
        }

        self.discard_arguments();
    }

    /// Close the current container: every attribute that was not claimed by a
    /// `visit_*` call is not a known attribute.
    pub(crate) fn validate_visited_attributes(&mut self) {
        if !self.attributes.args.is_empty() || self.attributes.attribute.is_some() {
            panic!("State machine misuse: validate_visited_attributes() called before validate_visited_arguments().")
        }

        // Iterate in attribute definition order so diagnostics are stable.
        let unknown: Vec<_> = iter_attributes(self.attributes.attributes, self.asts)
            .filter(|(attr_id, _)| self.attributes.unused_attributes.contains(attr_id))
            .map(|(_, attr)| (attr.name.name.clone(), attr.name.span))
            .collect();

        for (attr_name, span) in unknown {
            self.push_error(DatamodelError::new_attribute_not_known_error(&attr_name, span));
        }

        self.attributes.unused_attributes.clear();
        self.attributes.attributes = None;
    }

    fn arg_at(&self, idx: usize) -> &'db ast::Argument {
        &self.current_attribute().arguments.arguments[idx]
    }

    /// Set the current attribute and index its arguments, reporting duplicate
    /// named arguments, multiple unnamed arguments and arguments without a
    /// value. Returns false when the attribute is unusable.
    fn set_attribute(&mut self, attribute_id: crate::AttributeId, attribute: &'db ast::Attribute) -> bool {
        if self.attributes.attribute.is_some() {
            panic!("State machine misuse: cannot visit two attributes at the same time.")
        }

        let mut args = HashMap::default();
        let mut errors = Vec::new();
        let mut unnamed_arguments: Vec<String> = Vec::new();

        for (arg_idx, arg) in attribute.arguments.arguments.iter().enumerate() {
            let arg_name = arg.name.as_ref().map(|name| self.interner.intern(&name.name));
            if let Some(existing_idx) = args.insert(arg_name, arg_idx) {
                match &arg.name {
                    Some(name) => errors.push(DatamodelError::new_duplicate_argument_error(&name.name, arg.span)),
                    None => {
                        if unnamed_arguments.is_empty() {
                            let existing = &attribute.arguments.arguments[existing_idx];
                            unnamed_arguments.push(existing.value.to_string());
                        }
                        unnamed_arguments.push(arg.value.to_string());
                    }
                }
            }
        }

        if !unnamed_arguments.is_empty() {
            errors.push(DatamodelError::new_attribute_validation_error(
                &format!(
                    "You provided multiple unnamed arguments. This is not possible. Did you forget the brackets? Did you mean `[{}]`?",
                    unnamed_arguments.join(", ")
                ),
                &format!("@{}", attribute.name.name),
                attribute.span,
            ));
        }

        for arg in &attribute.arguments.empty_arguments {
            errors.push(DatamodelError::new_attribute_validation_error(
                &format!("The `{}` argument is missing a value.", arg.name.name),
                &format!("@{}", attribute.name.name),
                arg.name.span,
            ));
        }

        let is_reasonably_valid = errors.is_empty();
        for error in errors {
            self.push_error(error);
        }

        if !is_reasonably_valid {
            return false;
        }

        self.attributes.attribute = Some(attribute_id);
        self.attributes.args = args;

        true
    }
}

/// Iterate over the attributes of a container. The container is `Copy`, so
/// the iterator only borrows the ASTs; the context stays free for mutation.
fn iter_attributes<'db>(
    container: Option<crate::AttributeContainer>,
    asts: &'db Files,
) -> impl Iterator<Item = (crate::AttributeId, &'db ast::Attribute)> + 'db {
    container.into_iter().flat_map(move |container| {
        asts[container]
            .iter()
            .enumerate()
            .map(move |(idx, attr)| (attribute_id_at(container, idx), attr))
    })
}
