use super::*;
use crate::interner::StringId;
use rustc_hash::FxHashMap as HashMap;
use rustc_hash::FxHashSet as HashSet;

/// The state of the attribute resolution state machine for one container.
/// See the docs on the `Context` attribute methods.
#[derive(Default)]
pub(super) struct AttributesValidationState {
    /// The attribute container being validated.
    pub(super) attributes: Option<crate::AttributeContainer>,
    /// The attributes not yet claimed by a `visit_*` call.
    pub(super) unused_attributes: HashSet<crate::AttributeId>,

    /// The attribute being validated.
    pub(super) attribute: Option<crate::AttributeId>,
    /// The remaining arguments of `attribute`: argument name (None for the
    /// unnamed argument) to index in the argument list.
    pub(super) args: HashMap<Option<StringId>, usize>,
}

impl AttributesValidationState {
    pub(super) fn set_attributes(&mut self, container: crate::AttributeContainer, asts: &Files) {
        let attribute_count = asts[container].len();
        self.unused_attributes.clear();
        self.unused_attributes.extend(
            (0..attribute_count).map(|idx| attribute_id_at(container, idx)),
        );

        self.attributes = Some(container);
    }
}

pub(super) fn attribute_id_at(container: crate::AttributeContainer, idx: usize) -> crate::AttributeId {
    (container.0, ast::AttributeId::new_in_container(container.1, idx))
}
