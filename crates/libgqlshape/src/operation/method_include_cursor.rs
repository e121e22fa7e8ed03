use crate::operation::Include;
use crate::operation::MethodInclude;

/// Tracks which [`MethodInclude`] the next parameterized relation consumes.
///
/// The cursor walks the method includes of *every* [`Include`] in one
/// compilation, concatenated in order, strictly left to right. It is never
/// reset between includes: the first parameterized segment encountered in the
/// whole compilation consumes the first descriptor, the second consumes the
/// second, and so on.
#[derive(Clone, Debug)]
pub struct MethodIncludeCursor<'a> {
    method_includes: Vec<&'a MethodInclude>,
    position: usize,
}
impl<'a> MethodIncludeCursor<'a> {
    pub fn new(includes: &'a [Include]) -> Self {
        Self {
            method_includes: includes.iter()
                .flat_map(|include| include.method_includes())
                .collect(),
            position: 0,
        }
    }

    /// The descriptor the next parameterized relation would consume.
    pub fn peek(&self) -> Option<&'a MethodInclude> {
        self.method_includes.get(self.position).copied()
    }

    /// Consume the current descriptor and return the new position. Positions
    /// are therefore 1-based from the caller's point of view: the first
    /// consumed descriptor yields `1`.
    pub fn advance(&mut self) -> usize {
        if self.position < self.method_includes.len() {
            self.position += 1;
        }
        self.position
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Descriptors that no parameterized segment has consumed yet.
    pub fn remaining(&self) -> &[&'a MethodInclude] {
        &self.method_includes[self.position..]
    }
}
