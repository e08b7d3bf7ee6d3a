/// Access bits of a single field permission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldAccess {
    pub readable: bool,
    pub editable: bool,
}

impl FieldAccess {
    pub const FULL: Self = Self {
        readable: true,
        editable: true,
    };

    pub const READ_ONLY: Self = Self {
        readable: true,
        editable: false,
    };

    /// Overwrite both bits with `target`, returning how many of them flipped
    pub fn apply(&mut self, target: Self) -> usize {
        let changed = usize::from(self.readable != target.readable)
            + usize::from(self.editable != target.editable);
        *self = target;
        changed
    }
}
