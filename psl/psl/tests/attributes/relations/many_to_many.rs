use crate::common::*;
use psl::parser_database::walkers::RefinedRelationWalker;

#[test]
fn implicit_many_to_many_uses_lexicographic_model_ordering() {
    let dml = indoc! {r#"
        model Tag {
          id    Int    @id
          posts Post[]
        }

        model Post {
          id   Int   @id
          tags Tag[]
        }
    "#};

    let schema = parse_schema(dml);

    assert_eq!(schema.db.walk_relations().count(), 1);
    let relation = schema.db.walk_relations().next().unwrap();
    assert!(relation.is_implicit_many_to_many());

    let m2m = match relation.refine() {
        RefinedRelationWalker::ImplicitManyToMany(m2m) => m2m,
        _ => panic!("expected an implicit many-to-many relation"),
    };

    // `Post` < `Tag`, so Post is model A, whatever the declaration order.
    assert_eq!(m2m.model_a().name(), "Post");
    assert_eq!(m2m.model_b().name(), "Tag");
    assert_eq!(m2m.field_a().name(), "tags");
    assert_eq!(m2m.field_b().name(), "posts");
}

#[test]
fn two_way_embedded_many_to_many() {
    let dml = indoc! {r#"
        model Post {
          id     Int   @id
          tagIds Int[]
          tags   Tag[] @relation(fields: [tagIds], references: [id])
        }

        model Tag {
          id      Int    @id
          postIds Int[]
          posts   Post[] @relation(fields: [postIds], references: [id])
        }
    "#};

    let schema = parse_schema(dml);

    assert_eq!(schema.db.walk_relations().count(), 1);
    let relation = schema.db.walk_relations().next().unwrap();
    assert!(relation.is_two_way_embedded_many_to_many());

    let m2m = match relation.refine() {
        RefinedRelationWalker::TwoWayEmbeddedManyToMany(m2m) => m2m,
        _ => panic!("expected a two-way embedded many-to-many relation"),
    };

    assert_eq!(m2m.model_a().name(), "Post");
    assert_eq!(m2m.field_a().name(), "tags");
    assert_eq!(m2m.field_b().name(), "posts");
}

#[test]
fn self_relation_many_to_many_tie_breaks_on_field_names() {
    let dml = indoc! {r#"
        model User {
          id        Int    @id
          followers User[] @relation("follows")
          following User[] @relation("follows")
        }
    "#};

    let schema = parse_schema(dml);

    assert_eq!(schema.db.walk_relations().count(), 1);
    let relation = schema.db.walk_relations().next().unwrap();
    assert!(relation.is_implicit_many_to_many());
    assert!(relation.is_self_relation());

    let m2m = relation.refine();
    let m2m = match m2m {
        RefinedRelationWalker::ImplicitManyToMany(m2m) => m2m,
        _ => panic!("expected an implicit many-to-many relation"),
    };

    // `followers` < `following` by name.
    assert_eq!(m2m.field_a().name(), "followers");
    assert_eq!(m2m.field_b().name(), "following");
}
