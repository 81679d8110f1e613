/// What a deletion walk did to the subtree it was handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Removal {
    /// The element wasn't found so nothing changed.
    Absent,
    /// The element's node had duplicates so only its count went down.
    Decremented,
    /// The element's last occurrence was removed and its node spliced out of the tree.
    Unlinked,
}

impl Removal {
    /// Whether a logical occurrence was removed.
    pub(crate) fn removed(self) -> bool {
        !matches!(self, Self::Absent)
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Decremented => "decremented",
            Self::Unlinked => "unlinked",
        }
    }
}
