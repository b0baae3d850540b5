//! Depth-indexed memory of "the current entity at depth N".
//!
//! The driver keeps one stack of source peoplas and one of target lists.
//! When the document climbs back up the tree, the entry at the new depth
//! restores context.

/// A stack with one slot per nesting depth. Unpopulated depths hold `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumbs<T> {
    crumbs: Vec<Option<T>>,
}

impl<T> Default for Breadcrumbs<T> {
    fn default() -> Self {
        Self { crumbs: Vec::new() }
    }
}

impl<T> From<Vec<Option<T>>> for Breadcrumbs<T> {
    fn from(crumbs: Vec<Option<T>>) -> Self {
        Self { crumbs }
    }
}

impl<T> Breadcrumbs<T> {
    /// Sets the entry at `depth`. Deeper entries are dropped and missing
    /// shallower ones are filled with `None`; the result has `depth + 1`
    /// entries.
    pub fn update(&mut self, depth: usize, value: T) {
        self.crumbs.truncate(depth);
        while self.crumbs.len() < depth {
            self.crumbs.push(None);
        }
        self.crumbs.push(Some(value));
    }

    pub fn get(&self, depth: usize) -> Option<&T> {
        self.crumbs.get(depth).and_then(Option::as_ref)
    }

    pub fn truncate(&mut self, depth: usize) {
        self.crumbs.truncate(depth);
    }

    pub fn clear(&mut self) {
        self.crumbs.clear();
    }

    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }

    pub fn as_slice(&self) -> &[Option<T>] {
        &self.crumbs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], 0, vec![Some("A")])]
    #[case(vec![Some("B"), Some("C")], 0, vec![Some("A")])]
    #[case(vec![Some("A"), Some("B"), Some("C"), Some("D")], 1, vec![Some("A"), Some("C")])]
    #[case(vec![], 2, vec![None, None, Some("A")])]
    #[case(vec![Some("A"), None], 2, vec![Some("A"), None, Some("B")])]
    fn updates_at_depth(
        #[case] start: Vec<Option<&'static str>>,
        #[case] depth: usize,
        #[case] expected: Vec<Option<&'static str>>,
    ) {
        let mut crumbs = Breadcrumbs::from(start);
        let value = expected[depth].unwrap();

        crumbs.update(depth, value);

        assert_eq!(crumbs.as_slice(), expected.as_slice());
        assert_eq!(crumbs.len(), depth + 1);
    }

    #[test]
    fn absent_entries_read_as_none() {
        let crumbs = Breadcrumbs::from(vec![None, Some(3)]);
        assert_eq!(crumbs.get(0), None);
        assert_eq!(crumbs.get(1), Some(&3));
        assert_eq!(crumbs.get(5), None);
    }
}
