use crate::common::*;
use psl::NoExtensionTypes;

fn validate_multi_file(files: &[(&str, &str)]) -> psl::ValidatedSchema {
    let files = files
        .iter()
        .map(|(name, contents)| (name.to_string(), psl::SourceFile::from(*contents)))
        .collect();

    psl::validate_multi_file(files, &NoExtensionTypes)
}

#[test]
fn relations_resolve_across_files() {
    let schema = validate_multi_file(&[
        (
            "user.prisma",
            indoc! {r#"
                model User {
                  id    Int    @id
                  posts Post[]
                }
            "#},
        ),
        (
            "post.prisma",
            indoc! {r#"
                model Post {
                  id       Int  @id
                  authorId Int
                  author   User @relation(fields: [authorId], references: [id])
                }
            "#},
        ),
    ]);

    assert!(!schema.diagnostics.has_errors(), "{}", schema.render_diagnostics());
    assert_eq!(schema.db.walk_relations().count(), 1);

    let relation = schema.db.walk_relations().next().unwrap();
    let inline = relation.refine().as_inline().unwrap();
    assert_eq!(inline.referencing_model().name(), "Post");

    // The models live in different files.
    let user = schema.assert_has_model("User");
    let post = schema.assert_has_model("Post");
    assert_ne!(user.id.0, post.id.0);
}

#[test]
fn duplicate_tops_across_files_are_rejected() {
    let schema = validate_multi_file(&[
        ("a.prisma", "model User {\n  id Int @id\n}\n"),
        ("b.prisma", "model User {\n  id Int @id\n}\n"),
    ]);

    schema
        .diagnostics
        .assert_is_message("The model \"User\" cannot be defined because a model with that name already exists.");

    // The error span points into the second file.
    assert_eq!(schema.diagnostics.errors()[0].span().file_id, FileId(1));
}

#[test]
fn diagnostics_render_the_correct_file() {
    let schema = validate_multi_file(&[
        ("a.prisma", "model User {\n  id Int @id\n}\n"),
        ("b.prisma", "model Post {\n  id Int @id\n  title Strin\n}\n"),
    ]);

    assert!(schema.diagnostics.has_errors());

    let rendered = schema.render_diagnostics();
    assert!(rendered.contains("b.prisma"), "{rendered}");
}
