/// The stable identifier of a file in a schema file set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(pub u32);

impl FileId {
    pub const ZERO: FileId = FileId(0);
    pub const MAX: FileId = FileId(u32::MAX);
}

/// Represents a location in a schema's source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub file_id: FileId,
}

impl Span {
    /// Constructor.
    pub fn new(start: usize, end: usize, file_id: FileId) -> Span {
        Span { start, end, file_id }
    }

    /// Creates a new empty span.
    pub fn empty() -> Span {
        Span {
            start: 0,
            end: 0,
            file_id: FileId::ZERO,
        }
    }

    /// Is the given byte offset inside this span?
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end
    }

    /// Does this span overlap the other span?
    pub fn overlaps(self, other: Span) -> bool {
        self.file_id == other.file_id && (self.contains(other.start) || self.contains(other.end))
    }
}

impl From<(FileId, pest::Span<'_>)> for Span {
    fn from((file_id, s): (FileId, pest::Span<'_>)) -> Self {
        Span {
            start: s.start(),
            end: s.end(),
            file_id,
        }
    }
}
