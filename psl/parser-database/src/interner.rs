use indexmap::IndexSet;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

/// An interned string. Expected to be tiny.
#[derive(Debug, PartialEq, PartialOrd, Ord, Eq, Clone, Copy, Hash)]
pub struct StringId(u32);

/// An append-only string interner. Ids are dense: the nth interned string has
/// id n-1. Nothing is ever removed.
#[derive(Default)]
pub(crate) struct StringInterner {
    strings: IndexSet<String, BuildHasherDefault<FxHasher>>,
}

impl StringInterner {
    /// Look up a string without interning it.
    pub(crate) fn lookup(&self, s: &str) -> Option<StringId> {
        self.strings.get_index_of(s).map(|idx| StringId(idx as u32))
    }

    /// Get the id of the string, interning it if it is not already interned.
    pub(crate) fn intern(&mut self, s: &str) -> StringId {
        match self.strings.get_index_of(s) {
            Some(idx) => StringId(idx as u32),
            None => {
                let (idx, is_new) = self.strings.insert_full(s.to_owned());
                debug_assert!(is_new);
                StringId(idx as u32)
            }
        }
    }

    pub(crate) fn get(&self, id: StringId) -> &str {
        self.strings.get_index(id.0 as usize).unwrap()
    }
}

impl std::ops::Index<StringId> for StringInterner {
    type Output = str;

    fn index(&self, index: StringId) -> &Self::Output {
        self.get(index)
    }
}
