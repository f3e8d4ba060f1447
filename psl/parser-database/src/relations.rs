use crate::{
    context::Context,
    files::Files,
    interner::StringId,
    types::{RelationField, RelationFieldId, ScalarFieldId, Types},
};
use rustc_hash::FxHashMap as HashMap;
use schema_ast::ast::{self, WithName};
use std::collections::BTreeSet;

/// Detect relation types and construct relation objects to the database.
pub(super) fn infer_relations(ctx: &mut Context<'_>) {
    let mut relations = Relations::default();

    for (rfid, relation_field) in ctx.types.iter_relation_fields() {
        ingest_relation(rfid, relation_field, ctx.types, ctx.asts, &mut relations);
    }

    let _ = std::mem::replace(ctx.relations, relations);
}

/// The identifier for a relation in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelationId(u32);

/// The relations in the schema.
#[derive(Debug, Default)]
pub(crate) struct Relations {
    /// Storage. Private. Do not use directly.
    relations_storage: Vec<Relation>,

    // Indexes for efficient querying.
    //
    // Why BTreeSets?
    //
    // - We can't use a BTreeMap because a pair of models can have multiple
    //   relations.
    // - We use a BTree because we want range queries. Meaning that with a
    //   BTreeSet, we can efficiently ask: "Give me all the relations from
    //   model X".
    /// (model_a, model_b, relation)
    forward: BTreeSet<(crate::ModelId, crate::ModelId, RelationId)>,
    /// (model_b, model_a, relation)
    back: BTreeSet<(crate::ModelId, crate::ModelId, RelationId)>,

    /// Constant-time lookup of the relation a relation field belongs to.
    fields_to_relations: HashMap<RelationFieldId, RelationId>,
}

impl Relations {
    /// Iterate over all relations in the schema.
    pub(crate) fn iter(&self) -> impl ExactSizeIterator<Item = RelationId> + Clone {
        (0..self.relations_storage.len()).map(|idx| RelationId(idx as u32))
    }

    /// Iterate over relations where the provided model is model A, or the
    /// forward side of the relation.
    #[allow(clippy::wrong_self_convention)]
    pub(crate) fn from_model(&self, model_a_id: crate::ModelId) -> impl Iterator<Item = RelationId> + '_ {
        self.forward
            .range(model_range(model_a_id))
            .map(|(_, _, relation_id)| *relation_id)
    }

    /// Iterate over relations where the provided model is model B, or the
    /// back side of the relation.
    pub(crate) fn to_model(&self, model_b_id: crate::ModelId) -> impl Iterator<Item = RelationId> + '_ {
        self.back
            .range(model_range(model_b_id))
            .map(|(_, _, relation_id)| *relation_id)
    }

    /// The relation the field belongs to, in constant time.
    pub(crate) fn from_field(&self, field: RelationFieldId) -> Option<RelationId> {
        self.fields_to_relations.get(&field).copied()
    }

    fn push_relation(&mut self, relation: Relation) -> RelationId {
        let relation_id = RelationId(self.relations_storage.len() as u32);

        self.forward.insert((relation.model_a, relation.model_b, relation_id));
        self.back.insert((relation.model_b, relation.model_a, relation_id));

        let (field_a, field_b) = relation.attributes.fields();
        for field in [field_a, field_b].into_iter().flatten() {
            self.fields_to_relations.insert(field, relation_id);
        }

        self.relations_storage.push(relation);

        relation_id
    }
}

impl std::ops::Index<RelationId> for Relations {
    type Output = Relation;

    fn index(&self, index: RelationId) -> &Self::Output {
        &self.relations_storage[index.0 as usize]
    }
}

fn model_range(
    model_id: crate::ModelId,
) -> std::ops::RangeInclusive<(crate::ModelId, crate::ModelId, RelationId)> {
    let low = (
        model_id,
        (diagnostics::FileId::ZERO, ast::ModelId::ZERO),
        RelationId(u32::MIN),
    );
    let high = (
        model_id,
        (diagnostics::FileId::MAX, ast::ModelId::MAX),
        RelationId(u32::MAX),
    );

    low..=high
}

/// A relation between two models.
#[derive(Debug)]
pub(crate) struct Relation {
    /// The `name` argument in `@relation`.
    pub(crate) relation_name: Option<StringId>,
    pub(crate) attributes: RelationAttributes,
    pub(crate) model_a: crate::ModelId,
    pub(crate) model_b: crate::ModelId,
}

impl Relation {
    pub(crate) fn is_implicit_many_to_many(&self) -> bool {
        matches!(self.attributes, RelationAttributes::ImplicitManyToMany { .. })
    }

    pub(crate) fn is_two_way_embedded_many_to_many(&self) -> bool {
        matches!(self.attributes, RelationAttributes::TwoWayEmbeddedManyToMany { .. })
    }
}

/// The different types of relations and their relation fields.
#[derive(Debug)]
pub(crate) enum RelationAttributes {
    ImplicitManyToMany {
        /// The relation field on model A.
        field_a: RelationFieldId,
        /// The relation field on model B.
        field_b: RelationFieldId,
    },
    TwoWayEmbeddedManyToMany {
        /// The relation field on model A.
        field_a: RelationFieldId,
        /// The relation field on model B.
        field_b: RelationFieldId,
    },
    OneToOne(OneToOneRelationFields),
    OneToMany(OneToManyRelationFields),
}

impl RelationAttributes {
    pub(crate) fn fields(&self) -> (Option<RelationFieldId>, Option<RelationFieldId>) {
        match self {
            RelationAttributes::ImplicitManyToMany { field_a, field_b }
            | RelationAttributes::TwoWayEmbeddedManyToMany { field_a, field_b } => (Some(*field_a), Some(*field_b)),
            RelationAttributes::OneToOne(OneToOneRelationFields::Forward(field_a)) => (Some(*field_a), None),
            RelationAttributes::OneToOne(OneToOneRelationFields::Both(field_a, field_b)) => {
                (Some(*field_a), Some(*field_b))
            }
            RelationAttributes::OneToMany(OneToManyRelationFields::Forward(field_a)) => (Some(*field_a), None),
            RelationAttributes::OneToMany(OneToManyRelationFields::Back(field_b)) => (None, Some(*field_b)),
            RelationAttributes::OneToMany(OneToManyRelationFields::Both(field_a, field_b)) => {
                (Some(*field_a), Some(*field_b))
            }
        }
    }
}

/// The relation fields of a one-to-many relation. The forward side is the
/// side carrying the foreign key.
#[derive(Debug)]
pub(crate) enum OneToManyRelationFields {
    Forward(RelationFieldId),
    Back(RelationFieldId),
    Both(RelationFieldId, RelationFieldId),
}

/// The relation fields of a one-to-one relation. A back relation field alone
/// cannot exist: it has nothing to point to on the other model.
#[derive(Debug)]
pub(crate) enum OneToOneRelationFields {
    Forward(RelationFieldId),
    Both(RelationFieldId, RelationFieldId),
}

/// The referential actions for `onDelete` and `onUpdate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum ReferentialAction {
    /// Deletes record if dependent record is deleted. Updates relation scalar
    /// fields if referenced scalar fields of the dependent record are updated.
    Cascade,
    /// Prevents operation (both updates and deletes) from succeeding if any
    /// records are connected.
    Restrict,
    /// Behavior is database specific. Either defers the check or behaves like
    /// `Restrict`.
    NoAction,
    /// Sets relation scalar fields to null if the relation is deleted or
    /// updated.
    SetNull,
    /// Sets relation scalar fields to their default values on update or
    /// delete of relation.
    SetDefault,
}

impl ReferentialAction {
    /// The string representation of the action in the schema.
    pub fn as_str(self) -> &'static str {
        match self {
            ReferentialAction::Cascade => "Cascade",
            ReferentialAction::Restrict => "Restrict",
            ReferentialAction::NoAction => "NoAction",
            ReferentialAction::SetNull => "SetNull",
            ReferentialAction::SetDefault => "SetDefault",
        }
    }

    pub(crate) fn try_from_str(s: &str) -> Option<Self> {
        match s {
            "Cascade" => Some(ReferentialAction::Cascade),
            "Restrict" => Some(ReferentialAction::Restrict),
            "NoAction" => Some(ReferentialAction::NoAction),
            "SetNull" => Some(ReferentialAction::SetNull),
            "SetDefault" => Some(ReferentialAction::SetDefault),
            _ => None,
        }
    }
}

/// Infer the relation the field belongs to and ingest it. The routine runs
/// once per relation field; the non-canonical side of an already ingested
/// relation returns early so each relation is emitted exactly once.
fn ingest_relation(
    rfid: RelationFieldId,
    relation_field: &RelationField,
    types: &Types,
    asts: &Files,
    relations: &mut Relations,
) {
    let model_id = relation_field.model_id;
    let referenced_model_id = relation_field.referenced_model;
    let arity = asts[model_id][relation_field.field_id].arity;

    // The opposite relation field: a relation field on the referenced model
    // pointing back to this model. When a name is set on either side, both
    // names must match; two unnamed sides always match.
    let opposite = types
        .range_model_relation_fields(referenced_model_id)
        .find(|(opposite_id, opposite_field)| {
            *opposite_id != rfid
                && opposite_field.referenced_model == model_id
                && opposite_field.name == relation_field.name
        });

    let (opposite_id, opposite_field) = match opposite {
        Some(opposite) => opposite,
        None => return ingest_forward_only_relation(rfid, relation_field, arity, types, relations),
    };

    let opposite_arity = asts[referenced_model_id][opposite_field.field_id].arity;

    match (arity, opposite_arity) {
        // Many-to-many.
        (ast::FieldArity::List, ast::FieldArity::List) => {
            let is_self_relation = model_id == referenced_model_id;

            let (field_a, field_b, model_a, model_b) = if is_self_relation {
                // Tie-break by the two relation field names.
                let this_name = asts[model_id][relation_field.field_id].name();
                let opposite_name = asts[referenced_model_id][opposite_field.field_id].name();

                if this_name <= opposite_name {
                    (rfid, opposite_id, model_id, referenced_model_id)
                } else {
                    (opposite_id, rfid, referenced_model_id, model_id)
                }
            } else if asts[model_id].name() < asts[referenced_model_id].name() {
                (rfid, opposite_id, model_id, referenced_model_id)
            } else {
                (opposite_id, rfid, referenced_model_id, model_id)
            };

            // Only the canonical side emits the relation.
            if rfid != field_a {
                return;
            }

            let embedded = relation_field.fields.is_some() || opposite_field.fields.is_some();
            let attributes = if embedded {
                RelationAttributes::TwoWayEmbeddedManyToMany { field_a, field_b }
            } else {
                RelationAttributes::ImplicitManyToMany { field_a, field_b }
            };

            relations.push_relation(Relation {
                relation_name: relation_field.name,
                attributes,
                model_a,
                model_b,
            });
        }
        // One-to-many: this is the back (list) side, the forward side emits.
        (ast::FieldArity::List, _) => (),
        // One-to-many: this is the forward side, it carries the foreign key.
        (_, ast::FieldArity::List) => {
            relations.push_relation(Relation {
                relation_name: relation_field.name,
                attributes: RelationAttributes::OneToMany(OneToManyRelationFields::Both(rfid, opposite_id)),
                model_a: model_id,
                model_b: referenced_model_id,
            });
        }
        // One-to-one.
        (_, _) => {
            // The forward side is the side carrying `fields`/`references`;
            // when that is ambiguous, canonical (model name, field name)
            // ordering decides.
            let this_is_forward = match (
                relation_field.fields.is_some() || relation_field.references.is_some(),
                opposite_field.fields.is_some() || opposite_field.references.is_some(),
            ) {
                (true, false) => true,
                (false, true) => false,
                _ => {
                    let this_key = (asts[model_id].name(), asts[model_id][relation_field.field_id].name());
                    let opposite_key = (
                        asts[referenced_model_id].name(),
                        asts[referenced_model_id][opposite_field.field_id].name(),
                    );
                    this_key <= opposite_key
                }
            };

            if !this_is_forward {
                return;
            }

            relations.push_relation(Relation {
                relation_name: relation_field.name,
                attributes: RelationAttributes::OneToOne(OneToOneRelationFields::Both(rfid, opposite_id)),
                model_a: model_id,
                model_b: referenced_model_id,
            });
        }
    }
}

/// A relation field with no opposite field on the referenced model.
fn ingest_forward_only_relation(
    rfid: RelationFieldId,
    relation_field: &RelationField,
    arity: ast::FieldArity,
    types: &Types,
    relations: &mut Relations,
) {
    if arity.is_list() {
        // A lone list field is the back side of a one-to-many relation; swap
        // the models so that model A always carries the foreign key.
        relations.push_relation(Relation {
            relation_name: relation_field.name,
            attributes: RelationAttributes::OneToMany(OneToManyRelationFields::Back(rfid)),
            model_a: relation_field.referenced_model,
            model_b: relation_field.model_id,
        });
        return;
    }

    // An optional field with neither `fields` nor `references` looks like a
    // back side too: record it back-only, with the same swap as above.
    if arity.is_optional() && relation_field.fields.is_none() && relation_field.references.is_none() {
        relations.push_relation(Relation {
            relation_name: relation_field.name,
            attributes: RelationAttributes::OneToMany(OneToManyRelationFields::Back(rfid)),
            model_a: relation_field.referenced_model,
            model_b: relation_field.model_id,
        });
        return;
    }

    // One-to-one when the referenced fields exactly match a unique criterion
    // of the referenced model, one-to-many otherwise.
    let is_one_to_one = relation_field
        .references
        .as_ref()
        .map(|references| references_unique_criterion(references, relation_field.referenced_model, types))
        .unwrap_or(false);

    let attributes = if is_one_to_one {
        RelationAttributes::OneToOne(OneToOneRelationFields::Forward(rfid))
    } else {
        RelationAttributes::OneToMany(OneToManyRelationFields::Forward(rfid))
    };

    relations.push_relation(Relation {
        relation_name: relation_field.name,
        attributes,
        model_a: relation_field.model_id,
        model_b: relation_field.referenced_model,
    });
}

/// Do the referenced fields exactly match the primary key or a unique index
/// of the referenced model?
fn references_unique_criterion(
    references: &[ScalarFieldId],
    referenced_model: crate::ModelId,
    types: &Types,
) -> bool {
    let Some(model_attributes) = types.model_attributes.get(&referenced_model) else {
        return false;
    };

    if let Some(pk) = &model_attributes.primary_key {
        if fields_match(pk.fields.iter().map(|f| f.path.root()), references) {
            return true;
        }
    }

    model_attributes
        .ast_indexes
        .iter()
        .filter(|(_, index)| index.is_unique())
        .any(|(_, index)| fields_match(index.fields.iter().map(|f| f.path.root()), references))
}

fn fields_match(fields: impl ExactSizeIterator<Item = ScalarFieldId>, references: &[ScalarFieldId]) -> bool {
    fields.len() == references.len() && fields.zip(references.iter()).all(|(a, b)| a == *b)
}
