use crate::common::*;
use psl::parser_database::walkers::RefinedRelationWalker;

#[test]
fn one_to_many_self_relation_hierarchy() {
    let dml = indoc! {r#"
        model User {
          id        Int    @id
          managerId Int?
          manager   User?  @relation("H", fields: [managerId], references: [id])
          reports   User[] @relation("H")
        }
    "#};

    let schema = parse_schema(dml);

    assert_eq!(schema.db.walk_relations().count(), 1);
    let relation = schema.db.walk_relations().next().unwrap();

    assert!(relation.is_self_relation());
    assert_eq!(relation.explicit_relation_name(), Some("H"));

    let inline = match relation.refine() {
        RefinedRelationWalker::Inline(inline) => inline,
        _ => panic!("expected an inline relation"),
    };

    assert!(!inline.is_one_to_one());
    assert_eq!(inline.forward_relation_field().unwrap().name(), "manager");
    assert_eq!(inline.back_relation_field().unwrap().name(), "reports");
}

#[test]
fn one_to_one_self_relation() {
    let dml = indoc! {r#"
        model User {
          id        Int   @id
          partnerId Int?  @unique
          partner   User? @relation("Marriage", fields: [partnerId], references: [id])
          partnerOf User? @relation("Marriage")
        }
    "#};

    let schema = parse_schema(dml);

    assert_eq!(schema.db.walk_relations().count(), 1);
    let relation = schema.db.walk_relations().next().unwrap();
    assert!(relation.is_self_relation());

    let inline = relation.refine().as_inline().unwrap();
    assert!(inline.is_one_to_one());
    assert_eq!(inline.forward_relation_field().unwrap().name(), "partner");
    assert_eq!(inline.back_relation_field().unwrap().name(), "partnerOf");
}
