use crate::common::*;

#[test]
fn field_level_shard_key() {
    let dml = indoc! {r#"
        model User {
          id     Int    @id
          region String @shardKey
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    let shard_key = user.shard_key().unwrap();
    assert!(shard_key.is_defined_on_field());

    let fields: Vec<&str> = shard_key.fields().map(|f| f.name()).collect();
    assert_eq!(fields, &["region"]);
}

#[test]
fn block_level_shard_key() {
    let dml = indoc! {r#"
        model User {
          id     Int    @id
          region String
          tier   Int

          @@shardKey([region, tier])
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_model("User");

    let shard_key = user.shard_key().unwrap();
    assert!(!shard_key.is_defined_on_field());

    let fields: Vec<&str> = shard_key.fields().map(|f| f.name()).collect();
    assert_eq!(fields, &["region", "tier"]);
}

#[test]
fn shard_key_fields_must_be_required() {
    let dml = indoc! {r#"
        model User {
          id     Int     @id
          region String? @shardKey
        }
    "#};

    parse_error(dml)
        .assert_is_message("Error parsing attribute \"@shardKey\": Fields that are marked as shard keys must be required.");
}

#[test]
fn block_shard_key_fields_must_be_required() {
    let dml = indoc! {r#"
        model User {
          id     Int     @id
          region String?

          @@shardKey([region])
        }
    "#};

    parse_error(dml).assert_is_message(
        "Error validating model \"User\": The shard key definition refers to the optional field region. Shard key definitions must reference only required fields.",
    );
}

#[test]
fn at_most_one_shard_key_per_model() {
    let dml = indoc! {r#"
        model User {
          id     Int    @id
          region String @shardKey
          tier   Int

          @@shardKey([tier])
        }
    "#};

    parse_error(dml).assert_is_message(
        "Error validating model \"User\": Each model can have at most one shard key. You can't have `@shardKey` and `@@shardKey` at the same time.",
    );
}

#[test]
fn block_shard_key_with_unknown_fields() {
    let dml = indoc! {r#"
        model User {
          id Int @id

          @@shardKey([zone])
        }
    "#};

    parse_error(dml).assert_is_message(
        "Error validating model \"User\": The multi field shard key declaration refers to the unknown field zone.",
    );
}
