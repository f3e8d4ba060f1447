mod default;
mod id;
mod map;
mod native_types;
mod shard_key;

use crate::{
    coerce, coerce_array,
    context::Context,
    types::{
        FieldWithArgs, IndexAlgorithm, IndexAttribute, IndexFieldPath, IndexType, ModelAttributes, OperatorClass,
        RelationFieldId, ScalarFieldId, ScalarFieldType, ScalarType, SortOrder,
    },
    DatamodelError, StringId,
};
use diagnostics::Span;
use schema_ast::ast::{self, WithName, WithSpan};
use std::borrow::Cow;

pub(super) fn resolve_attributes(ctx: &mut Context<'_>) {
    let asts = ctx.asts;

    for ((file_id, top_id), top) in asts.iter_tops() {
        match (top_id, top) {
            (ast::TopId::Model(model_id), ast::Top::Model(_)) => resolve_model_attributes((file_id, model_id), ctx),
            (ast::TopId::Enum(enum_id), ast::Top::Enum(ast_enum)) => {
                resolve_enum_attributes((file_id, enum_id), ast_enum, ctx)
            }
            (ast::TopId::CompositeType(ctid), ast::Top::CompositeType(ct)) => {
                resolve_composite_type_attributes((file_id, ctid), ct, ctx)
            }
            _ => (),
        }
    }
}

fn resolve_model_attributes(model_id: crate::ModelId, ctx: &mut Context<'_>) {
    let mut model_attributes = ModelAttributes::default();
    let file_id = model_id.0;

    // First resolve all the attributes defined on fields **in isolation**.
    let scalar_fields: Vec<(ScalarFieldId, ast::FieldId)> = ctx
        .types
        .range_model_scalar_fields(model_id)
        .map(|(id, sf)| (id, sf.field_id))
        .collect();
    for (scalar_field_id, field_id) in scalar_fields {
        visit_scalar_field_attributes(model_id, field_id, scalar_field_id, &mut model_attributes, ctx);
    }

    let relation_fields: Vec<(RelationFieldId, ast::FieldId)> = ctx
        .types
        .range_model_relation_fields(model_id)
        .map(|(id, rf)| (id, rf.field_id))
        .collect();
    for (relation_field_id, field_id) in relation_fields {
        visit_relation_field_attributes(model_id, field_id, relation_field_id, ctx);
    }

    // Resolve all the attributes defined on the model itself **in isolation**.
    ctx.visit_attributes(model_id.1, file_id);

    // @@ignore
    if ctx.visit_optional_single_attr("ignore") {
        model_attributes.is_ignored = true;
        ctx.validate_visited_arguments();
    }

    // @@id
    if ctx.visit_optional_single_attr("id") {
        id::model(&mut model_attributes, model_id, ctx);
        ctx.validate_visited_arguments();
    }

    // @@map
    if ctx.visit_optional_single_attr("map") {
        map::model(&mut model_attributes, model_id, ctx);
        ctx.validate_visited_arguments();
    }

    // @@schema
    if ctx.visit_optional_single_attr("schema") {
        visit_model_schema(&mut model_attributes, ctx);
        ctx.validate_visited_arguments();
    }

    // @@unique
    while ctx.visit_repeated_attr("unique") {
        visit_model_unique(model_id, &mut model_attributes, ctx);
        ctx.validate_visited_arguments();
    }

    // @@index
    while ctx.visit_repeated_attr("index") {
        visit_model_index(model_id, &mut model_attributes, ctx);
        ctx.validate_visited_arguments();
    }

    // @@fulltext
    while ctx.visit_repeated_attr("fulltext") {
        visit_model_fulltext(model_id, &mut model_attributes, ctx);
        ctx.validate_visited_arguments();
    }

    // @@shardKey
    if ctx.visit_optional_single_attr("shardKey") {
        shard_key::model(&mut model_attributes, model_id, ctx);
        ctx.validate_visited_arguments();
    }

    ctx.validate_visited_attributes();

    // Checks that need the fully resolved model attributes.
    id::validate_id_field_arities(model_id, &model_attributes, ctx);
    shard_key::validate_shard_key_field_arities(model_id, &model_attributes, ctx);
    validate_ignored_field_redundancy(model_id, &model_attributes, ctx);
    validate_missing_id(model_id, &model_attributes, ctx);

    ctx.types.model_attributes.insert(model_id, model_attributes);
}

fn resolve_enum_attributes(enum_id: crate::EnumId, ast_enum: &ast::Enum, ctx: &mut Context<'_>) {
    let mut enum_attributes = crate::types::EnumAttributes::default();
    let file_id = enum_id.0;

    for (value_idx, _) in ast_enum.iter_values() {
        ctx.visit_attributes((enum_id.1, value_idx), file_id);

        // @map
        if ctx.visit_optional_single_attr("map") {
            map::enum_value(ast_enum, enum_id, value_idx, &mut enum_attributes, ctx);
            ctx.validate_visited_arguments();
        }

        ctx.validate_visited_attributes();
    }

    // Now validate the enum attributes.
    ctx.visit_attributes(enum_id.1, file_id);

    // @@map
    if ctx.visit_optional_single_attr("map") {
        map::r#enum(&mut enum_attributes, enum_id, ctx);
        ctx.validate_visited_arguments();
    }

    ctx.validate_visited_attributes();

    ctx.types.enum_attributes.insert(enum_id, enum_attributes);
}

fn resolve_composite_type_attributes(ctid: crate::CompositeTypeId, ct: &ast::CompositeType, ctx: &mut Context<'_>) {
    let file_id = ctid.0;

    for (field_id, ast_field) in ct.iter_fields() {
        ctx.visit_attributes((ctid.1, field_id), file_id);

        if ctx.types.composite_type_fields.contains_key(&(ctid, field_id)) {
            // @map
            if ctx.visit_optional_single_attr("map") {
                map::composite_type_field(ct, ast_field, ctid, field_id, ctx);
                ctx.validate_visited_arguments();
            }

            // @default
            if ctx.visit_optional_single_attr("default") {
                default::visit_composite_field_default(ctid, field_id, ctx);
                ctx.validate_visited_arguments();
            }

            // Native type attributes: `@db.Text`.
            if let Some((scope, type_name, attribute_id)) = ctx.visit_datasource_scoped() {
                native_types::visit_composite_type_field_native_type_attribute(ctid, field_id, scope, type_name, attribute_id, ctx);
            }
        }

        ctx.validate_visited_attributes();
    }

    // Composite types do not take block attributes.
    ctx.visit_attributes(ctid.1, file_id);
    ctx.validate_visited_attributes();
}

fn visit_scalar_field_attributes(
    model_id: crate::ModelId,
    field_id: ast::FieldId,
    scalar_field_id: ScalarFieldId,
    model_attributes: &mut ModelAttributes,
    ctx: &mut Context<'_>,
) {
    let file_id = model_id.0;
    let ast_model = &ctx.asts[model_id];
    let ast_field = &ast_model[field_id];
    ctx.visit_attributes((model_id.1, field_id), file_id);

    // @map
    if ctx.visit_optional_single_attr("map") {
        map::scalar_field(ast_model, ast_field, model_id, field_id, scalar_field_id, ctx);
        ctx.validate_visited_arguments();
    }

    // @ignore
    if ctx.visit_optional_single_attr("ignore") {
        if ctx.types[scalar_field_id].r#type.is_unsupported() {
            ctx.push_attribute_validation_error(
                "Fields of type `Unsupported` cannot take an `@ignore` attribute. They are already treated as ignored by the client due to their type.",
            );
        } else {
            ctx.types[scalar_field_id].is_ignored = true;
        }
        ctx.validate_visited_arguments();
    }

    // @id
    if ctx.visit_optional_single_attr("id") {
        id::field(ast_model, scalar_field_id, field_id, model_attributes, ctx);
        ctx.validate_visited_arguments();
    }

    // @updatedAt
    if ctx.visit_optional_single_attr("updatedAt") {
        if !matches!(
            ctx.types[scalar_field_id].r#type,
            ScalarFieldType::BuiltInScalar(ScalarType::DateTime)
        ) {
            ctx.push_attribute_validation_error("Fields that are marked with @updatedAt must be of type DateTime.");
        } else if ast_field.arity.is_list() {
            ctx.push_attribute_validation_error("Fields that are marked with @updatedAt cannot be lists.");
        } else {
            ctx.types[scalar_field_id].is_updated_at = true;
        }
        ctx.validate_visited_arguments();
    }

    // @default
    if ctx.visit_optional_single_attr("default") {
        default::visit_model_field_default(scalar_field_id, model_id, field_id, ctx);
        ctx.validate_visited_arguments();
    }

    // @unique
    if ctx.visit_optional_single_attr("unique") {
        visit_field_unique(scalar_field_id, model_attributes, ctx);
        ctx.validate_visited_arguments();
    }

    // @shardKey
    if ctx.visit_optional_single_attr("shardKey") {
        shard_key::field(field_id, scalar_field_id, model_attributes, ctx);
        ctx.validate_visited_arguments();
    }

    // Native type attributes and extension type modifiers: `@db.Text`.
    if let Some((datasource_name, type_name, attribute_id)) = ctx.visit_datasource_scoped() {
        native_types::visit_model_field_native_type_attribute(datasource_name, type_name, attribute_id, scalar_field_id, ctx);
    }

    ctx.validate_visited_attributes();
}

fn visit_relation_field_attributes(
    model_id: crate::ModelId,
    field_id: ast::FieldId,
    relation_field_id: RelationFieldId,
    ctx: &mut Context<'_>,
) {
    let file_id = model_id.0;
    let ast_model = &ctx.asts[model_id];
    let ast_field = &ast_model[field_id];
    ctx.visit_attributes((model_id.1, field_id), file_id);

    // @relation
    if ctx.visit_optional_single_attr("relation") {
        visit_relation(model_id, relation_field_id, ctx);
        ctx.validate_visited_arguments();
    }

    // @id
    if ctx.visit_optional_single_attr("id") {
        let msg = format!(
            "The field `{}` is a relation field and cannot be marked with `@id`. Only scalar fields can be declared as id.",
            ast_field.name(),
        );
        ctx.push_attribute_validation_error(&msg);
        ctx.discard_arguments();
    }

    // @ignore
    if ctx.visit_optional_single_attr("ignore") {
        ctx.types[relation_field_id].is_ignored = true;
        ctx.validate_visited_arguments();
    }

    // @unique
    if ctx.visit_optional_single_attr("unique") {
        let msg = format!(
            "The field `{}` is a relation field and cannot be marked with `unique`. Only scalar fields can be made unique.",
            ast_field.name(),
        );
        ctx.push_attribute_validation_error(&msg);
        ctx.discard_arguments();
    }

    // @map
    if ctx.visit_optional_single_attr("map") {
        ctx.push_attribute_validation_error("The attribute `@map` cannot be used on relation fields.");
        ctx.discard_arguments();
    }

    // @default
    if ctx.visit_optional_single_attr("default") {
        ctx.push_attribute_validation_error("Cannot set a default value on a relation field.");
        ctx.discard_arguments();
    }

    ctx.validate_visited_attributes();
}

fn visit_model_schema(model_attributes: &mut ModelAttributes, ctx: &mut Context<'_>) {
    let arg = match ctx.visit_default_arg("name") {
        Ok(arg) => arg,
        Err(err) => return ctx.push_error(err),
    };

    if let Some(name) = coerce::string(arg, ctx.diagnostics) {
        let name_id = ctx.interner.intern(name);
        model_attributes.schema = Some((name_id, arg.span()));
    }
}

fn visit_field_unique(scalar_field_id: ScalarFieldId, model_attributes: &mut ModelAttributes, ctx: &mut Context<'_>) {
    let mapped_name = get_map_argument(ctx);
    let length = ctx
        .visit_optional_arg("length")
        .and_then(|length| coerce::integer(length, ctx.diagnostics))
        .map(|len| len as u32);
    let sort_order = get_sort_order_argument(ctx);
    let clustered = validate_clustering_setting(ctx);

    model_attributes.ast_indexes.push((
        ctx.current_attribute_id(),
        IndexAttribute {
            r#type: IndexType::Unique,
            fields: vec![FieldWithArgs {
                path: IndexFieldPath::new(scalar_field_id),
                sort_order,
                length,
                operator_class: None,
            }],
            source_field: Some(scalar_field_id),
            name: None,
            mapped_name,
            algorithm: None,
            clustered,
        },
    ))
}

fn visit_model_unique(model_id: crate::ModelId, model_attributes: &mut ModelAttributes, ctx: &mut Context<'_>) {
    let attr = ctx.current_attribute();
    let current_attribute_id = ctx.current_attribute_id();

    let fields = match ctx.visit_default_arg("fields") {
        Ok(value) => value,
        Err(err) => return ctx.push_error(err),
    };

    let resolved_fields = match resolve_field_array_with_args(fields, model_id, FieldResolvingSetup::FollowComposites, ctx) {
        Ok(fields) => fields,
        Err(FieldResolutionError::AlreadyDealtWith) => return,
        Err(FieldResolutionError::ProblematicFields {
            unknown_fields,
            relation_fields,
        }) => {
            push_problematic_index_fields_errors(
                "unique index",
                unknown_fields,
                relation_fields,
                model_id,
                fields.span(),
                attr.span,
                ctx,
            );
            return;
        }
    };

    let ast_model = &ctx.asts[model_id];
    let mut index_attribute = IndexAttribute {
        r#type: IndexType::Unique,
        fields: resolved_fields,
        source_field: None,
        name: None,
        mapped_name: None,
        algorithm: None,
        clustered: None,
    };

    let name = get_name_argument(ctx);
    if let Some(name) = name {
        validate_client_name(attr.span, ast_model.name(), name, "@@unique", ctx);
    }

    index_attribute.name = name;
    index_attribute.mapped_name = get_map_argument(ctx);
    index_attribute.clustered = validate_clustering_setting(ctx);

    model_attributes.ast_indexes.push((current_attribute_id, index_attribute));
}

fn visit_model_index(model_id: crate::ModelId, model_attributes: &mut ModelAttributes, ctx: &mut Context<'_>) {
    let attr = ctx.current_attribute();
    let current_attribute_id = ctx.current_attribute_id();

    let fields = match ctx.visit_default_arg("fields") {
        Ok(value) => value,
        Err(err) => return ctx.push_error(err),
    };

    let resolved_fields = match resolve_field_array_with_args(fields, model_id, FieldResolvingSetup::FollowComposites, ctx) {
        Ok(fields) => fields,
        Err(FieldResolutionError::AlreadyDealtWith) => return,
        Err(FieldResolutionError::ProblematicFields {
            unknown_fields,
            relation_fields,
        }) => {
            push_problematic_index_fields_errors(
                "index",
                unknown_fields,
                relation_fields,
                model_id,
                fields.span(),
                attr.span,
                ctx,
            );
            return;
        }
    };

    let mut index_attribute = IndexAttribute {
        r#type: IndexType::Normal,
        fields: resolved_fields,
        source_field: None,
        name: None,
        mapped_name: None,
        algorithm: None,
        clustered: None,
    };

    // We do not want to break the existing datamodels for client purposes that
    // use the old `name` argument for indexes. Here we will fetch both map and
    // name arguments if both are present we will throw an error. If only name
    // is present we will validate it and use it as the map argument.
    let name = get_name_argument(ctx);
    let mapped_name = get_map_argument(ctx);

    match (name, mapped_name) {
        (Some(_), Some(_)) => {
            ctx.push_attribute_validation_error(
                "The `@@index` attribute accepts the `name` argument as an alias for the `map` argument for legacy reasons. It does not accept both though. Please use the `map` argument to specify the database name of the index.",
            );
        }
        (Some(name), None) => index_attribute.mapped_name = Some(name),
        (None, Some(map)) => index_attribute.mapped_name = Some(map),
        (None, None) => (),
    }

    index_attribute.algorithm = match ctx
        .visit_optional_arg("type")
        .and_then(|sort| coerce::constant(sort, ctx.diagnostics))
    {
        Some(constant) => match IndexAlgorithm::try_from_str(constant) {
            Some(algo) => Some(algo),
            None => {
                ctx.push_attribute_validation_error(&format!("Unknown index type: {constant}."));
                None
            }
        },
        None => None,
    };

    index_attribute.clustered = validate_clustering_setting(ctx);

    model_attributes.ast_indexes.push((current_attribute_id, index_attribute));
}

fn visit_model_fulltext(model_id: crate::ModelId, model_attributes: &mut ModelAttributes, ctx: &mut Context<'_>) {
    let attr = ctx.current_attribute();
    let current_attribute_id = ctx.current_attribute_id();

    let fields = match ctx.visit_default_arg("fields") {
        Ok(value) => value,
        Err(err) => return ctx.push_error(err),
    };

    let resolved_fields = match resolve_field_array_with_args(fields, model_id, FieldResolvingSetup::FollowComposites, ctx) {
        Ok(fields) => fields,
        Err(FieldResolutionError::AlreadyDealtWith) => return,
        Err(FieldResolutionError::ProblematicFields {
            unknown_fields,
            relation_fields,
        }) => {
            push_problematic_index_fields_errors(
                "fulltext index",
                unknown_fields,
                relation_fields,
                model_id,
                fields.span(),
                attr.span,
                ctx,
            );
            return;
        }
    };

    let mut index_attribute = IndexAttribute {
        r#type: IndexType::Fulltext,
        fields: resolved_fields,
        source_field: None,
        name: None,
        mapped_name: None,
        algorithm: None,
        clustered: None,
    };

    index_attribute.mapped_name = get_map_argument(ctx);

    model_attributes.ast_indexes.push((current_attribute_id, index_attribute));
}

/// `@relation` attribute on a relation field.
fn visit_relation(model_id: crate::ModelId, relation_field_id: RelationFieldId, ctx: &mut Context<'_>) {
    // name: either the unnamed argument or `name:`.
    if let Some(name_arg) = ctx.visit_optional_default_arg("name") {
        match coerce::string(name_arg, ctx.diagnostics) {
            Some("") => ctx.push_attribute_validation_error("A relation cannot have an empty name."),
            Some(name) => {
                let name_id = ctx.interner.intern(name);
                ctx.types[relation_field_id].name = Some(name_id);
            }
            None => (),
        }
    }

    if let Some(fields_arg) = ctx.visit_optional_arg("fields") {
        if let Some(fields) = resolve_relation_scalar_fields(fields_arg, model_id, RelationFieldsSide::Referencing, ctx) {
            ctx.types[relation_field_id].fields = Some(fields);
        }
    }

    if let Some(references_arg) = ctx.visit_optional_arg("references") {
        let referenced_model = ctx.types[relation_field_id].referenced_model;
        if let Some(references) =
            resolve_relation_scalar_fields(references_arg, referenced_model, RelationFieldsSide::Referenced, ctx)
        {
            ctx.types[relation_field_id].references = Some(references);
        }
    }

    if let Some(on_delete) = ctx.visit_optional_arg("onDelete") {
        if let Some(action) = coerce_referential_action(on_delete, ctx) {
            ctx.types[relation_field_id].on_delete = Some((action, on_delete.span()));
        }
    }

    if let Some(on_update) = ctx.visit_optional_arg("onUpdate") {
        if let Some(action) = coerce_referential_action(on_update, ctx) {
            ctx.types[relation_field_id].on_update = Some((action, on_update.span()));
        }
    }

    if let Some(map_arg) = ctx.visit_optional_arg("map") {
        match coerce::string(map_arg, ctx.diagnostics) {
            Some("") => ctx.push_attribute_validation_error("The `map` argument cannot be an empty string."),
            Some(name) => {
                let mapped_name = ctx.interner.intern(name);
                ctx.types[relation_field_id].mapped_name = Some(mapped_name);
            }
            None => (),
        }
    }
}

fn coerce_referential_action(expr: &ast::Expression, ctx: &mut Context<'_>) -> Option<crate::ReferentialAction> {
    let constant = coerce::constant(expr, ctx.diagnostics)?;
    match crate::ReferentialAction::try_from_str(constant) {
        Some(action) => Some(action),
        None => {
            ctx.push_attribute_validation_error(&format!(
                "Invalid referential action: `{constant}`. Allowed values: (`Cascade`, `Restrict`, `NoAction`, `SetNull`, `SetDefault`)",
            ));
            None
        }
    }
}

enum RelationFieldsSide {
    Referencing,
    Referenced,
}

/// Resolve a `fields: [...]` or `references: [...]` argument of `@relation`
/// to scalar field ids on the given model.
fn resolve_relation_scalar_fields(
    values: &ast::Expression,
    model_id: crate::ModelId,
    side: RelationFieldsSide,
    ctx: &mut Context<'_>,
) -> Option<Vec<ScalarFieldId>> {
    let constants = coerce_array(values, &coerce::constant, ctx.diagnostics)?;
    let model_name = ctx.asts[model_id].name();

    let mut field_ids = Vec::with_capacity(constants.len());
    let mut unknown_fields = Vec::new();
    let mut relation_fields = Vec::new();

    for field_name in constants {
        let field_id = ctx
            .interner
            .lookup(field_name)
            .and_then(|name_id| ctx.names.model_fields.get(&(model_id, name_id)).copied());

        let field_id = match field_id {
            Some(field_id) => field_id,
            None => {
                unknown_fields.push(field_name);
                continue;
            }
        };

        match ctx.types.find_model_scalar_field(model_id, field_id) {
            Some(sfid) => field_ids.push(sfid),
            None => relation_fields.push(field_name),
        }
    }

    if !unknown_fields.is_empty() {
        let msg = match side {
            RelationFieldsSide::Referencing => format!(
                "The argument fields must refer only to existing fields. The following fields do not exist in this model: {}",
                unknown_fields.join(", "),
            ),
            RelationFieldsSide::Referenced => format!(
                "The argument `references` must refer only to existing fields in the related model `{model_name}`. The following fields do not exist in the related model: {}",
                unknown_fields.join(", "),
            ),
        };
        ctx.push_attribute_validation_error(&msg);
        return None;
    }

    if !relation_fields.is_empty() {
        let msg = match side {
            RelationFieldsSide::Referencing => format!(
                "The argument fields must refer only to scalar fields. But it is referencing the following relation fields: {}",
                relation_fields.join(", "),
            ),
            RelationFieldsSide::Referenced => format!(
                "The argument `references` must refer only to scalar fields in the related model `{model_name}`. But it is referencing the following relation fields: {}",
                relation_fields.join(", "),
            ),
        };
        ctx.push_attribute_validation_error(&msg);
        return None;
    }

    Some(field_ids)
}

/// Check that the model is either ignored or has a primary key.
fn validate_missing_id(model_id: crate::ModelId, model_attributes: &ModelAttributes, ctx: &mut Context<'_>) {
    if model_attributes.primary_key.is_some() || model_attributes.is_ignored {
        return;
    }

    let ast_model = &ctx.asts[model_id];
    ctx.push_error(DatamodelError::new_model_validation_error(
        "Each model must have exactly one id criteria. Either mark a single field with `@id` or add a multi field id criteria with `@@id([])` to the model.",
        "model",
        ast_model.name(),
        ast_model.span(),
    ));
}

/// `@ignore` on fields of an `@@ignore`d model is redundant.
fn validate_ignored_field_redundancy(model_id: crate::ModelId, model_attributes: &ModelAttributes, ctx: &mut Context<'_>) {
    if !model_attributes.is_ignored {
        return;
    }

    let ast_model = &ctx.asts[model_id];
    let ignored_scalar_spans = ctx
        .types
        .range_model_scalar_fields(model_id)
        .filter(|(_, sf)| sf.is_ignored)
        .map(|(_, sf)| sf.field_id);
    let ignored_relation_spans = ctx
        .types
        .range_model_relation_fields(model_id)
        .filter(|(_, rf)| rf.is_ignored)
        .map(|(_, rf)| rf.field_id);

    let spans: Vec<Span> = ignored_scalar_spans
        .chain(ignored_relation_spans)
        .filter_map(|field_id| {
            ast_model[field_id]
                .attributes
                .iter()
                .find(|attr| attr.name.name == "ignore")
                .map(|attr| attr.span)
        })
        .collect();

    for span in spans {
        ctx.push_error(DatamodelError::new_attribute_validation_error(
            "Fields on an already ignored Model do not need an `@ignore` annotation.",
            "@ignore",
            span,
        ));
    }
}

pub(super) fn get_name_argument(ctx: &mut Context<'_>) -> Option<StringId> {
    match ctx
        .visit_optional_arg("name")
        .and_then(|name| coerce::string(name, ctx.diagnostics))
    {
        Some("") => {
            ctx.push_attribute_validation_error("The `name` argument cannot be an empty string.");
            None
        }
        Some(name) => Some(ctx.interner.intern(name)),
        None => None,
    }
}

pub(super) fn get_map_argument(ctx: &mut Context<'_>) -> Option<StringId> {
    match ctx
        .visit_optional_arg("map")
        .and_then(|map| coerce::string(map, ctx.diagnostics))
    {
        Some("") => {
            ctx.push_attribute_validation_error("The `map` argument cannot be an empty string.");
            None
        }
        Some(name) => Some(ctx.interner.intern(name)),
        None => None,
    }
}

pub(super) fn get_sort_order_argument(ctx: &mut Context<'_>) -> Option<SortOrder> {
    match ctx
        .visit_optional_arg("sort")
        .and_then(|sort| coerce::constant(sort, ctx.diagnostics))
    {
        Some("Desc") => Some(SortOrder::Desc),
        Some("Asc") => Some(SortOrder::Asc),
        Some(other) => {
            ctx.push_attribute_validation_error(&format!(
                "The `sort` argument can only be `Asc` or `Desc` you provided: {other}."
            ));
            None
        }
        None => None,
    }
}

pub(super) fn validate_clustering_setting(ctx: &mut Context<'_>) -> Option<bool> {
    ctx.visit_optional_arg("clustered")
        .and_then(|clustered| coerce::boolean(clustered, ctx.diagnostics))
}

/// The `name:` argument of `@@id`, `@@unique` and friends becomes part of the
/// generated client API, so it must be a valid identifier there.
pub(super) fn validate_client_name(
    span: Span,
    object_name: &str,
    name: StringId,
    attribute: &'static str,
    ctx: &mut Context<'_>,
) {
    let is_valid = ctx.interner[name]
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if is_valid {
        return;
    }

    ctx.push_error(DatamodelError::new_model_validation_error(
        &format!("The `name` property within the `{attribute}` attribute only allows for the following characters: `_a-zA-Z0-9`."),
        "model",
        object_name,
        span,
    ))
}

pub(super) enum FieldResolutionError<'ast> {
    AlreadyDealtWith,
    ProblematicFields {
        /// Fields that do not exist in the model or composite type, with the
        /// top they were looked up in.
        unknown_fields: Vec<(crate::TopId, Cow<'ast, str>)>,
        /// Fields that exist in the model but are relation fields.
        relation_fields: Vec<(&'ast ast::Field, ast::FieldId)>,
    },
}

#[derive(Clone, Copy)]
pub(super) enum FieldResolvingSetup {
    OnlyTopLevel,
    FollowComposites,
}

impl FieldResolvingSetup {
    fn follow_composites(self) -> bool {
        matches!(self, FieldResolvingSetup::FollowComposites)
    }
}

/// Takes an attribute argument that is expected to be an array of field
/// references, optionally with per-field arguments, e.g.
/// `[email, name(sort: Desc, length: 10)]`, and resolves it to fields of the
/// model. Composite paths (`field.sub.leaf`) are resolved within the
/// composite type of `field` when the setup allows it.
pub(super) fn resolve_field_array_with_args<'db>(
    values: &'db ast::Expression,
    model_id: crate::ModelId,
    resolving: FieldResolvingSetup,
    ctx: &mut Context<'db>,
) -> Result<Vec<FieldWithArgs>, FieldResolutionError<'db>> {
    let inputs = match coerce_index_field_inputs(values, ctx) {
        Some(inputs) => inputs,
        None => return Err(FieldResolutionError::AlreadyDealtWith),
    };

    let ast_model = &ctx.asts[model_id];

    let mut field_ids: Vec<FieldWithArgs> = Vec::with_capacity(inputs.len());
    let mut unknown_fields = Vec::new();
    let mut relation_fields = Vec::new();
    let mut already_errored = false;

    'fields: for input in &inputs {
        let mut segments = input.path.split('.');
        let root_name = segments.next().unwrap();

        let field_id = ctx
            .interner
            .lookup(root_name)
            .and_then(|name_id| ctx.names.model_fields.get(&(model_id, name_id)).copied());

        let field_id = match field_id {
            Some(field_id) => field_id,
            None => {
                unknown_fields.push(((model_id.0, ast::TopId::Model(model_id.1)), Cow::from(root_name)));
                continue;
            }
        };

        let sfid = match ctx.types.find_model_scalar_field(model_id, field_id) {
            Some(sfid) => sfid,
            None => {
                relation_fields.push((&ast_model[field_id], field_id));
                continue;
            }
        };

        let mut path = IndexFieldPath::new(sfid);
        let mut current_type = ctx.types[sfid].r#type;

        for segment in segments {
            if !resolving.follow_composites() {
                ctx.push_error(DatamodelError::new_validation_error(
                    "Composite type field paths are not allowed in this attribute.",
                    input.span,
                ));
                already_errored = true;
                continue 'fields;
            }

            let ctid = match current_type {
                ScalarFieldType::CompositeType(ctid) => ctid,
                _ => {
                    ctx.push_error(DatamodelError::new_validation_error(
                        &format!("Unable to resolve the path `{}`: `{root_name}` is not of a composite type.", input.path),
                        input.span,
                    ));
                    already_errored = true;
                    continue 'fields;
                }
            };

            let ct_field_id = ctx
                .interner
                .lookup(segment)
                .and_then(|name_id| ctx.names.composite_type_fields.get(&(ctid, name_id)).copied());

            let ct_field_id = match ct_field_id {
                Some(id) => id,
                None => {
                    unknown_fields.push(((ctid.0, ast::TopId::CompositeType(ctid.1)), Cow::from(segment)));
                    continue 'fields;
                }
            };

            path.push_field(ctid, ct_field_id);
            current_type = ctx.types.composite_type_fields[&(ctid, ct_field_id)].r#type;
        }

        let (sort_order, length, operator_class) = match input.args {
            Some(args) => parse_index_field_arguments(args, ctx),
            None => (None, None, None),
        };

        field_ids.push(FieldWithArgs {
            path,
            sort_order,
            length,
            operator_class,
        });
    }

    if !unknown_fields.is_empty() || !relation_fields.is_empty() {
        Err(FieldResolutionError::ProblematicFields {
            unknown_fields,
            relation_fields,
        })
    } else if already_errored {
        Err(FieldResolutionError::AlreadyDealtWith)
    } else {
        Ok(field_ids)
    }
}

struct IndexFieldInput<'db> {
    /// `a` or `a.b.c`
    path: &'db str,
    span: Span,
    args: Option<&'db ast::ArgumentsList>,
}

fn coerce_index_field_inputs<'db>(
    values: &'db ast::Expression,
    ctx: &mut Context<'db>,
) -> Option<Vec<IndexFieldInput<'db>>> {
    coerce_array(
        values,
        &|expr, diagnostics| match expr {
            ast::Expression::ConstantValue(name, span) => Some(IndexFieldInput {
                path: name.as_str(),
                span: *span,
                args: None,
            }),
            ast::Expression::Function(name, args, span) => Some(IndexFieldInput {
                path: name.as_str(),
                span: *span,
                args: Some(args),
            }),
            _ => {
                diagnostics.push_error(DatamodelError::new_value_parser_error(
                    "constant",
                    expr.describe_value_type(),
                    &expr.to_string(),
                    expr.span(),
                ));
                None
            }
        },
        ctx.diagnostics,
    )
}

/// Parse the per-field arguments in an index field list:
/// `field(sort: Desc, length: 10, ops: raw("..."))`.
fn parse_index_field_arguments(
    args: &ast::ArgumentsList,
    ctx: &mut Context<'_>,
) -> (Option<SortOrder>, Option<u32>, Option<OperatorClass>) {
    let mut sort_order = None;
    let mut length = None;
    let mut operator_class = None;

    for arg in &args.arguments {
        match arg.name.as_ref().map(|n| n.name.as_str()) {
            Some("sort") => match coerce::constant(&arg.value, ctx.diagnostics) {
                Some("Asc") => sort_order = Some(SortOrder::Asc),
                Some("Desc") => sort_order = Some(SortOrder::Desc),
                Some(other) => ctx.push_error(DatamodelError::new_validation_error(
                    &format!("The `sort` argument can only be `Asc` or `Desc` you provided: {other}."),
                    arg.span,
                )),
                None => (),
            },
            Some("length") => {
                length = coerce::integer(&arg.value, ctx.diagnostics).map(|len| len as u32);
            }
            Some("ops") => match &arg.value {
                ast::Expression::ConstantValue(name, span) => match OperatorClass::try_from_str(name) {
                    Some(ops) => operator_class = Some(ops),
                    None => ctx.push_error(DatamodelError::new_validation_error(
                        &format!("Invalid operator class: {name}."),
                        *span,
                    )),
                },
                ast::Expression::Function(name, args, span) if name == "raw" => {
                    match args.arguments.as_slice() {
                        [arg] => match coerce::string(&arg.value, ctx.diagnostics) {
                            Some(s) => {
                                let s = ctx.interner.intern(s);
                                operator_class = Some(OperatorClass::Raw(s));
                            }
                            None => (),
                        },
                        _ => ctx.push_error(DatamodelError::new_validation_error(
                            "The `raw` operator class function takes a single string argument.",
                            *span,
                        )),
                    }
                }
                expr => ctx.push_error(DatamodelError::new_validation_error(
                    "The `ops` argument takes an operator class constant or `raw(\"...\")`.",
                    expr.span(),
                )),
            },
            _ => ctx.push_error(DatamodelError::new_unused_argument_error(arg.span)),
        }
    }

    (sort_order, length, operator_class)
}

fn push_problematic_index_fields_errors(
    attribute_kind: &str,
    unknown_fields: Vec<(crate::TopId, Cow<'_, str>)>,
    relation_fields: Vec<(&ast::Field, ast::FieldId)>,
    model_id: crate::ModelId,
    fields_span: Span,
    attr_span: Span,
    ctx: &mut Context<'_>,
) {
    if !unknown_fields.is_empty() {
        let field_names = unknown_fields
            .into_iter()
            .map(|((file_id, top_id), field_name)| match top_id {
                ast::TopId::CompositeType(ctid) => {
                    let ct_name = ctx.asts[(file_id, ctid)].name();
                    Cow::from(format!("{field_name} in type {ct_name}"))
                }
                ast::TopId::Model(_) => field_name,
                _ => unreachable!(),
            });

        let msg = format!(
            "The {attribute_kind} definition refers to the unknown {}.",
            format_fields_in_error_with_leading_word(field_names),
        );

        let model_name = ctx.asts[model_id].name();
        ctx.push_error(DatamodelError::new_model_validation_error(
            &msg,
            "model",
            model_name,
            fields_span,
        ));
    }

    if !relation_fields.is_empty() {
        let field_names = relation_fields.iter().map(|(f, _)| Cow::from(f.name()));

        let msg = format!(
            "The {attribute_kind} definition refers to the relation {}. Index definitions must reference only scalar fields.",
            format_fields_in_error_with_leading_word(field_names),
        );

        let model_name = ctx.asts[model_id].name();
        ctx.push_error(DatamodelError::new_model_validation_error(
            &msg,
            "model",
            model_name,
            attr_span,
        ));
    }
}

/// "field a" or "fields a, b, c", for use in error messages.
pub(super) fn format_fields_in_error_with_leading_word<'a>(
    fields: impl Iterator<Item = Cow<'a, str>>,
) -> String {
    let fields: Vec<Cow<'_, str>> = fields.collect();

    match fields.as_slice() {
        [single] => format!("field {single}"),
        _ => format!("fields {}", fields.join(", ")),
    }
}
