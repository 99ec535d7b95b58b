//! Descent Path
//!
//! Tracks the vertices on the current depth-first descent, from the root of
//! the traversal down to the vertex being visited. A vertex that shows up
//! again while still on the path closes a cycle.
//!
//! The path is a single stack shared by the whole traversal: a vertex is
//! pushed when the descent enters it and popped once all of its arcs have
//! been followed. Membership checks and index lookups are O(1) through the
//! insertion-ordered set.

use std::hash::Hash;

use indexmap::IndexSet;

use super::Chain;

/// The stack of vertices between the traversal root and the current vertex.
#[derive(Debug)]
pub(crate) struct Path<T> {
    steps: IndexSet<T>,
}

impl<T> Path<T>
where
    T: Eq + Hash + Clone,
{
    /// Create an empty path.
    pub(crate) fn new() -> Self {
        Self {
            steps: IndexSet::new(),
        }
    }

    /// Descend into `vertex`.
    ///
    /// Returns false (and leaves the path unchanged) if the vertex is already
    /// on the path.
    pub(crate) fn enter(&mut self, vertex: T) -> bool {
        self.steps.insert(vertex)
    }

    /// Step back out of the most recently entered vertex.
    pub(crate) fn leave(&mut self) -> Option<T> {
        self.steps.pop()
    }

    /// Get the current depth of the descent.
    pub(crate) fn depth(&self) -> usize {
        self.steps.len()
    }

    /// Build the cycle that revisiting `vertex` would close.
    ///
    /// The chain runs from the first occurrence of `vertex` on the path to
    /// the deepest step, then back to `vertex`. Returns `None` if `vertex`
    /// is not on the path.
    pub(crate) fn cycle_through(&self, vertex: &T) -> Option<Chain<T>> {
        let start = self.steps.get_index_of(vertex)?;
        let mut cycle: Chain<T> = self.steps.iter().skip(start).cloned().collect();
        cycle.push(vertex.clone());
        Some(cycle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_leave_behave_like_a_stack() {
        let mut path = Path::new();
        assert!(path.enter("a"));
        assert!(path.enter("b"));
        assert_eq!(path.depth(), 2);

        assert_eq!(path.leave(), Some("b"));
        assert_eq!(path.leave(), Some("a"));
        assert_eq!(path.leave(), None);
    }

    #[test]
    fn reentering_a_vertex_is_refused() {
        let mut path = Path::new();
        assert!(path.enter(1));
        assert!(path.enter(2));
        assert!(!path.enter(1));
        assert_eq!(path.depth(), 2);
    }

    #[test]
    fn cycle_starts_at_first_occurrence() {
        let mut path = Path::new();
        for v in ["root", "a", "b", "c"] {
            path.enter(v);
        }

        let cycle = path.cycle_through(&"a").unwrap();
        assert_eq!(cycle.to_string(), "a -> b -> c -> a");
        assert!(path.cycle_through(&"z").is_none());
    }

    #[test]
    fn self_loop_is_a_two_step_chain() {
        let mut path = Path::new();
        path.enter('x');
        let cycle = path.cycle_through(&'x').unwrap();
        assert_eq!(cycle.into_vec(), vec!['x', 'x']);
    }

    #[test]
    fn leaving_frees_the_vertex_for_another_branch() {
        let mut path = Path::new();
        path.enter("a");
        path.enter("b");
        path.leave();
        assert!(path.cycle_through(&"b").is_none());
        assert!(path.enter("b"));
    }
}
