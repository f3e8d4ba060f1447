use super::{ModelWalker, RelationFieldWalker, Walker};
use crate::relations::{OneToManyRelationFields, OneToOneRelationFields, RelationAttributes, RelationId};

/// A relation between two models in the schema.
pub type RelationWalker<'db> = Walker<'db, RelationId>;

impl<'db> RelationWalker<'db> {
    /// The models at the two ends of the relation: `[model_a, model_b]`.
    pub fn models(self) -> [crate::ModelId; 2] {
        let relation = &self.db.relations[self.id];
        [relation.model_a, relation.model_b]
    }

    /// Model A: for inline relations, the model carrying the foreign key; for
    /// many-to-many relations, the first model in canonical order.
    pub fn model_a(self) -> ModelWalker<'db> {
        self.walk(self.db.relations[self.id].model_a)
    }

    /// Model B: the other end of the relation.
    pub fn model_b(self) -> ModelWalker<'db> {
        self.walk(self.db.relations[self.id].model_b)
    }

    /// The relation name explicitly written in the schema, if any.
    pub fn explicit_relation_name(self) -> Option<&'db str> {
        self.db.relations[self.id].relation_name.map(|id| &self.db.interner[id])
    }

    /// Is the relation between a model and itself?
    pub fn is_self_relation(self) -> bool {
        let relation = &self.db.relations[self.id];
        relation.model_a == relation.model_b
    }

    /// True only for implicit many-to-many relations.
    pub fn is_implicit_many_to_many(self) -> bool {
        self.db.relations[self.id].is_implicit_many_to_many()
    }

    /// True only for two-way embedded many-to-many relations.
    pub fn is_two_way_embedded_many_to_many(self) -> bool {
        self.db.relations[self.id].is_two_way_embedded_many_to_many()
    }

    /// Converts the walker to either an implicit many to many, a two-way
    /// embedded many to many, or an inline relation walker. The conversion is
    /// total: every relation refines to exactly one variant.
    pub fn refine(self) -> RefinedRelationWalker<'db> {
        match self.db.relations[self.id].attributes {
            RelationAttributes::ImplicitManyToMany { .. } => {
                RefinedRelationWalker::ImplicitManyToMany(ImplicitManyToManyRelationWalker(self))
            }
            RelationAttributes::TwoWayEmbeddedManyToMany { .. } => {
                RefinedRelationWalker::TwoWayEmbeddedManyToMany(TwoWayEmbeddedManyToManyRelationWalker(self))
            }
            RelationAttributes::OneToOne(_) | RelationAttributes::OneToMany(_) => {
                RefinedRelationWalker::Inline(InlineRelationWalker(self))
            }
        }
    }
}

/// A relation that has the exact representation of its type.
#[derive(Clone, Copy)]
pub enum RefinedRelationWalker<'db> {
    /// A one-to-one or one-to-many relation, backed by a foreign key.
    Inline(InlineRelationWalker<'db>),
    /// A many-to-many relation, backed by an implicit join table.
    ImplicitManyToMany(ImplicitManyToManyRelationWalker<'db>),
    /// A many-to-many relation between two embedded field lists.
    TwoWayEmbeddedManyToMany(TwoWayEmbeddedManyToManyRelationWalker<'db>),
}

impl<'db> RefinedRelationWalker<'db> {
    /// Try to interpret the relation as an inline (foreign-key backed)
    /// relation.
    pub fn as_inline(self) -> Option<InlineRelationWalker<'db>> {
        match self {
            RefinedRelationWalker::Inline(inline) => Some(inline),
            _ => None,
        }
    }

    /// Try to interpret the relation as an implicit many-to-many relation.
    pub fn as_many_to_many(self) -> Option<ImplicitManyToManyRelationWalker<'db>> {
        match self {
            RefinedRelationWalker::ImplicitManyToMany(m2m) => Some(m2m),
            _ => None,
        }
    }
}

/// A one-to-one or one-to-many relation: there is a foreign key on one side.
#[derive(Clone, Copy)]
pub struct InlineRelationWalker<'db>(pub(super) RelationWalker<'db>);

impl<'db> InlineRelationWalker<'db> {
    /// Is the relation one-to-one?
    pub fn is_one_to_one(self) -> bool {
        matches!(self.relation().attributes, RelationAttributes::OneToOne(_))
    }

    /// The model carrying the foreign key.
    pub fn referencing_model(self) -> ModelWalker<'db> {
        self.0.model_a()
    }

    /// The model referenced by the foreign key.
    pub fn referenced_model(self) -> ModelWalker<'db> {
        self.0.model_b()
    }

    /// The relation field on the side of the model carrying the foreign key,
    /// if defined.
    pub fn forward_relation_field(self) -> Option<RelationFieldWalker<'db>> {
        let db = self.0.db;
        match self.relation().attributes {
            RelationAttributes::OneToOne(OneToOneRelationFields::Forward(field))
            | RelationAttributes::OneToOne(OneToOneRelationFields::Both(field, _))
            | RelationAttributes::OneToMany(OneToManyRelationFields::Forward(field))
            | RelationAttributes::OneToMany(OneToManyRelationFields::Both(field, _)) => Some(db.walk(field)),
            RelationAttributes::OneToMany(OneToManyRelationFields::Back(_)) => None,
            RelationAttributes::ImplicitManyToMany { .. } | RelationAttributes::TwoWayEmbeddedManyToMany { .. } => {
                unreachable!()
            }
        }
    }

    /// The relation field on the side of the referenced model, if defined.
    pub fn back_relation_field(self) -> Option<RelationFieldWalker<'db>> {
        let db = self.0.db;
        match self.relation().attributes {
            RelationAttributes::OneToOne(OneToOneRelationFields::Both(_, field))
            | RelationAttributes::OneToMany(OneToManyRelationFields::Both(_, field))
            | RelationAttributes::OneToMany(OneToManyRelationFields::Back(field)) => Some(db.walk(field)),
            RelationAttributes::OneToOne(OneToOneRelationFields::Forward(_))
            | RelationAttributes::OneToMany(OneToManyRelationFields::Forward(_)) => None,
            RelationAttributes::ImplicitManyToMany { .. } | RelationAttributes::TwoWayEmbeddedManyToMany { .. } => {
                unreachable!()
            }
        }
    }

    /// The relation name, if any side declares one.
    pub fn explicit_relation_name(self) -> Option<&'db str> {
        self.0.explicit_relation_name()
    }

    fn relation(self) -> &'db crate::relations::Relation {
        &self.0.db.relations[self.0.id]
    }
}

/// Describes an implicit m:n relation between two models. Neither side
/// defines `fields` or `references`; the join table is implied.
#[derive(Clone, Copy)]
pub struct ImplicitManyToManyRelationWalker<'db>(pub(super) RelationWalker<'db>);

impl<'db> ImplicitManyToManyRelationWalker<'db> {
    /// The model A of the relation. Model A is the one with the
    /// lexicographically smaller name; on self-relations, the tie breaks on
    /// the two relation field names.
    pub fn model_a(self) -> ModelWalker<'db> {
        self.0.model_a()
    }

    /// The model B of the relation.
    pub fn model_b(self) -> ModelWalker<'db> {
        self.0.model_b()
    }

    /// The relation field on model A.
    pub fn field_a(self) -> RelationFieldWalker<'db> {
        match self.0.db.relations[self.0.id].attributes {
            RelationAttributes::ImplicitManyToMany { field_a, .. } => self.0.walk(field_a),
            _ => unreachable!(),
        }
    }

    /// The relation field on model B.
    pub fn field_b(self) -> RelationFieldWalker<'db> {
        match self.0.db.relations[self.0.id].attributes {
            RelationAttributes::ImplicitManyToMany { field_b, .. } => self.0.walk(field_b),
            _ => unreachable!(),
        }
    }

    /// Is the relation between a model and itself?
    pub fn is_self_relation(self) -> bool {
        self.0.is_self_relation()
    }
}

/// A many-to-many relation where both sides define `fields`.
#[derive(Clone, Copy)]
pub struct TwoWayEmbeddedManyToManyRelationWalker<'db>(pub(super) RelationWalker<'db>);

impl<'db> TwoWayEmbeddedManyToManyRelationWalker<'db> {
    /// The model A of the relation.
    pub fn model_a(self) -> ModelWalker<'db> {
        self.0.model_a()
    }

    /// The model B of the relation.
    pub fn model_b(self) -> ModelWalker<'db> {
        self.0.model_b()
    }

    /// The relation field on model A.
    pub fn field_a(self) -> RelationFieldWalker<'db> {
        match self.0.db.relations[self.0.id].attributes {
            RelationAttributes::TwoWayEmbeddedManyToMany { field_a, .. } => self.0.walk(field_a),
            _ => unreachable!(),
        }
    }

    /// The relation field on model B.
    pub fn field_b(self) -> RelationFieldWalker<'db> {
        match self.0.db.relations[self.0.id].attributes {
            RelationAttributes::TwoWayEmbeddedManyToMany { field_b, .. } => self.0.walk(field_b),
            _ => unreachable!(),
        }
    }
}
