use crate::FileId;
use schema_ast::{ast, SourceFile};
use std::ops::Index;

/// The content is a list of (file path, file source text, file AST).
///
/// The file path can be anything, the PSL implementation will only use it to
/// display the file name in errors. For example, files can come from nested
/// directories.
pub(crate) struct Files(pub(crate) Vec<(String, SourceFile, ast::SchemaAst)>);

impl Files {
    /// Iterate all parsed files.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (FileId, &String, &SourceFile, &ast::SchemaAst)> {
        self.0
            .iter()
            .enumerate()
            .map(|(idx, (path, contents, ast))| (FileId(idx as u32), path, contents, ast))
    }

    /// Iterate all top-level items in all files.
    pub(crate) fn iter_tops(&self) -> impl Iterator<Item = (crate::TopId, &ast::Top)> {
        self.iter()
            .flat_map(|(file_id, _, _, ast)| ast.iter_tops().map(move |(top_id, top)| ((file_id, top_id), top)))
    }
}

impl Index<FileId> for Files {
    type Output = (String, SourceFile, ast::SchemaAst);

    fn index(&self, index: FileId) -> &Self::Output {
        &self.0[index.0 as usize]
    }
}

impl<I> Index<crate::InFile<I>> for Files
where
    ast::SchemaAst: Index<I>,
{
    type Output = <ast::SchemaAst as Index<I>>::Output;

    fn index(&self, index: crate::InFile<I>) -> &Self::Output {
        &self[index.0].2[index.1]
    }
}
