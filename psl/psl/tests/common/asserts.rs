use diagnostics::{DatamodelError, Diagnostics};
use psl::parser_database::{walkers, ReferentialAction, ScalarType};
use pretty_assertions::assert_eq;

pub(crate) trait DatamodelAssert<'a> {
    fn assert_has_model(&'a self, name: &str) -> walkers::ModelWalker<'a>;
    fn assert_has_enum(&'a self, name: &str) -> walkers::EnumWalker<'a>;
    fn assert_has_composite_type(&'a self, name: &str) -> walkers::CompositeTypeWalker<'a>;
}

pub(crate) trait ModelAssert<'a> {
    fn assert_field_count(self, count: usize) -> Self;
    fn assert_has_scalar_field(self, name: &str) -> walkers::ScalarFieldWalker<'a>;
    fn assert_has_relation_field(self, name: &str) -> walkers::RelationFieldWalker<'a>;
    fn assert_ignored(self, ignored: bool) -> Self;
    fn assert_with_db_name(self, name: &str) -> Self;
}

pub(crate) trait ScalarFieldAssert {
    fn assert_scalar_type(&self, t: ScalarType) -> &Self;
    fn assert_is_single_field_id(&self) -> walkers::PrimaryKeyWalker<'_>;
    fn assert_is_single_field_unique(&self) -> walkers::IndexWalker<'_>;
    fn assert_not_single_field_unique(&self) -> &Self;
    fn assert_ignored(&self, ignored: bool) -> &Self;
    fn assert_is_updated_at(&self, updated_at: bool) -> &Self;
    fn assert_with_db_name(&self, name: &str) -> &Self;
}

pub(crate) trait RelationFieldAssert {
    fn assert_ignored(self, ignored: bool) -> Self;
    fn assert_relation_to(self, model_id: psl::parser_database::ModelId) -> Self;
    fn assert_relation_delete_strategy(self, action: ReferentialAction) -> Self;
    fn assert_relation_update_strategy(self, action: ReferentialAction) -> Self;
}

pub(crate) trait ErrorAsserts {
    fn assert_is(&self, error: DatamodelError) -> &Self;
    fn assert_is_at(&self, index: usize, error: DatamodelError) -> &Self;
    fn assert_is_message(&self, msg: &str) -> &Self;
    fn assert_is_message_at(&self, index: usize, msg: &str) -> &Self;
    fn assert_length(&self, length: usize) -> &Self;
}

impl<'a> DatamodelAssert<'a> for psl::ValidatedSchema {
    #[track_caller]
    fn assert_has_model(&'a self, name: &str) -> walkers::ModelWalker<'a> {
        self.db
            .walk_models()
            .find(|m| m.name() == name)
            .unwrap_or_else(|| panic!("Model {name} not found"))
    }

    #[track_caller]
    fn assert_has_enum(&'a self, name: &str) -> walkers::EnumWalker<'a> {
        self.db
            .walk_enums()
            .find(|e| e.name() == name)
            .unwrap_or_else(|| panic!("Enum {name} not found"))
    }

    #[track_caller]
    fn assert_has_composite_type(&'a self, name: &str) -> walkers::CompositeTypeWalker<'a> {
        self.db
            .walk_composite_types()
            .find(|ct| ct.name() == name)
            .unwrap_or_else(|| panic!("Composite type {name} not found"))
    }
}

impl<'a> ModelAssert<'a> for walkers::ModelWalker<'a> {
    fn assert_field_count(self, count: usize) -> Self {
        assert_eq!(self.scalar_fields().count() + self.relation_fields().count(), count);
        self
    }

    fn assert_ignored(self, ignored: bool) -> Self {
        assert_eq!(self.is_ignored(), ignored);
        self
    }

    #[track_caller]
    fn assert_with_db_name(self, name: &str) -> Self {
        assert_eq!(self.database_name(), name);
        self
    }

    #[track_caller]
    fn assert_has_scalar_field(self, name: &str) -> walkers::ScalarFieldWalker<'a> {
        self.scalar_fields()
            .find(|sf| sf.name() == name)
            .unwrap_or_else(|| panic!("Could not find scalar field with name {name}"))
    }

    #[track_caller]
    fn assert_has_relation_field(self, name: &str) -> walkers::RelationFieldWalker<'a> {
        self.relation_fields()
            .find(|rf| rf.name() == name)
            .unwrap_or_else(|| panic!("Could not find relation field with name {name}"))
    }
}

impl ScalarFieldAssert for walkers::ScalarFieldWalker<'_> {
    #[track_caller]
    fn assert_scalar_type(&self, t: ScalarType) -> &Self {
        assert_eq!(self.scalar_type(), Some(t));
        self
    }

    fn assert_ignored(&self, ignored: bool) -> &Self {
        assert_eq!(self.is_ignored(), ignored);
        self
    }

    fn assert_is_updated_at(&self, updated_at: bool) -> &Self {
        assert_eq!(self.is_updated_at(), updated_at);
        self
    }

    #[track_caller]
    fn assert_with_db_name(&self, name: &str) -> &Self {
        assert_eq!(self.database_name(), name);
        self
    }

    #[track_caller]
    fn assert_is_single_field_id(&self) -> walkers::PrimaryKeyWalker<'_> {
        self.model()
            .primary_key()
            .filter(|id| id.is_defined_on_field())
            .filter(|id| id.contains_exactly_fields(std::iter::once(*self)))
            .expect("Field is not a single-field id.")
    }

    #[track_caller]
    fn assert_is_single_field_unique(&self) -> walkers::IndexWalker<'_> {
        self.model()
            .indexes()
            .filter(|i| i.is_defined_on_field())
            .filter(|i| i.is_unique())
            .find(|i| i.contains_field(*self))
            .expect("Field is not a single-field unique.")
    }

    #[track_caller]
    fn assert_not_single_field_unique(&self) -> &Self {
        let unique = self
            .model()
            .indexes()
            .filter(|i| i.is_defined_on_field())
            .filter(|i| i.is_unique())
            .find(|i| i.contains_field(*self));

        if unique.is_some() {
            panic!("Expected field to not be a single-field unique.");
        }

        self
    }
}

impl RelationFieldAssert for walkers::RelationFieldWalker<'_> {
    fn assert_relation_to(self, model_id: psl::parser_database::ModelId) -> Self {
        assert!(self.references_model(model_id));
        self
    }

    fn assert_ignored(self, ignored: bool) -> Self {
        assert_eq!(self.is_ignored(), ignored);
        self
    }

    fn assert_relation_delete_strategy(self, action: ReferentialAction) -> Self {
        assert_eq!(self.explicit_on_delete(), Some(action));
        self
    }

    fn assert_relation_update_strategy(self, action: ReferentialAction) -> Self {
        assert_eq!(self.explicit_on_update(), Some(action));
        self
    }
}

impl ErrorAsserts for Diagnostics {
    #[track_caller]
    fn assert_is(&self, error: DatamodelError) -> &Self {
        assert_eq!(
            self.errors().len(),
            1,
            "Expected exactly one validation error. Errors are: {:?}",
            &self.errors()
        );
        assert_eq!(self.errors()[0], error);
        self
    }

    #[track_caller]
    fn assert_is_at(&self, index: usize, error: DatamodelError) -> &Self {
        assert_eq!(self.errors()[index], error);
        self
    }

    #[track_caller]
    fn assert_is_message(&self, msg: &str) -> &Self {
        assert_eq!(
            self.errors().len(),
            1,
            "Expected exactly one validation error. Errors are: {:?}",
            &self.errors()
        );
        assert_eq!(self.errors()[0].description(), msg);
        self
    }

    #[track_caller]
    fn assert_is_message_at(&self, index: usize, msg: &str) -> &Self {
        assert_eq!(self.errors()[index].description(), msg);
        self
    }

    #[track_caller]
    fn assert_length(&self, length: usize) -> &Self {
        assert_eq!(
            self.errors().len(),
            length,
            "Expected exactly {} validation errors, but got {}. The errors were {:?}",
            length,
            self.errors().len(),
            &self.errors(),
        );
        self
    }
}
