//! Grouping of flat, ordered sequences into forests.
//!
//! The builder walks the input once per nesting level. For every item it
//! takes the longest run of following items that are subordinate to it,
//! builds that run into the item's children, and moves on to whatever is left.
//! Subordination is always decided against the item that opened the run, never
//! against the previous item, so `[h1, h3, h2]` nests both `h3` and `h2` under
//! `h1` as siblings.
use std::iter::Peekable;

/// An ordered list of sibling nodes.
pub type Forest<T> = Vec<Node<T>>;

/// One item of the input sequence together with the items nested under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
  /// The heading item this node stands for.
  pub value:    T,
  /// Nested items. `None` for a leaf; [`build`] never produces an empty
  /// forest here.
  pub children: Option<Forest<T>>,
}

impl<T> Node<T> {
  /// Create a node without children.
  #[must_use]
  pub const fn leaf(value: T) -> Self {
    Self {
      value,
      children: None,
    }
  }

  /// Create a node with the given children. An empty forest is stored as
  /// `None`, so both spellings of "no children" compare equal.
  #[must_use]
  pub fn with_children(value: T, children: Forest<T>) -> Self {
    Self {
      value,
      children: (!children.is_empty()).then_some(children),
    }
  }

  /// Direct children of this node, empty for a leaf.
  #[must_use]
  pub fn children(&self) -> &[Self] {
    self.children.as_deref().unwrap_or_default()
  }

  #[must_use]
  pub fn is_leaf(&self) -> bool {
    self.children().is_empty()
  }

  /// Number of levels in this subtree, counting the node itself.
  #[must_use]
  pub fn depth(&self) -> usize {
    1 + self.children().iter().map(Self::depth).max().unwrap_or(0)
  }
}

/// Consume the longest prefix of `iter` whose items satisfy `predicate`.
///
/// The first item that fails the predicate stays in the iterator.
///
/// # Example
///
/// ```rust
/// use simpletoc::tree::take_while;
///
/// let mut items = vec![1, 3, 5, 6, 7].into_iter().peekable();
/// let odd = take_while(&mut items, |n| n % 2 == 1);
///
/// assert_eq!(odd, vec![1, 3, 5]);
/// assert_eq!(items.next(), Some(6));
/// ```
pub fn take_while<I, P>(iter: &mut Peekable<I>, mut predicate: P) -> Vec<I::Item>
where
  I: Iterator,
  P: FnMut(&I::Item) -> bool,
{
  let mut taken = Vec::new();
  while let Some(item) = iter.next_if(|item| predicate(item)) {
    taken.push(item);
  }
  taken
}

/// Build a forest from `items`.
///
/// `is_child_of(current, next)` must return `true` when `next` belongs under
/// `current`. It is only ever called with `current` being the item that
/// opened the run under inspection. Nothing checks that the relation is
/// consistent; an erratic relation yields a well-formed but meaningless tree.
///
/// An empty input yields an empty forest.
///
/// Flattening the result with [`flatten`] gives back `items` in their original
/// order.
pub fn build<T, F>(items: impl IntoIterator<Item = T>, is_child_of: F) -> Forest<T>
where
  F: Fn(&T, &T) -> bool,
{
  build_forest(items.into_iter().collect(), &is_child_of)
}

fn build_forest<T, F>(items: Vec<T>, is_child_of: &F) -> Forest<T>
where
  F: Fn(&T, &T) -> bool,
{
  let mut forest = Vec::new();
  let mut rest = items.into_iter().peekable();

  while let Some(current) = rest.next() {
    let run = take_while(&mut rest, |next| is_child_of(&current, next));
    let children = build_forest(run, is_child_of);
    forest.push(Node::with_children(current, children));
  }

  forest
}

/// Pre-order view of every value in `forest`, parents before their children.
#[must_use]
pub fn flatten<T>(forest: &[Node<T>]) -> Vec<&T> {
  let mut out = Vec::new();
  flatten_into(forest, &mut out);
  out
}

fn flatten_into<'a, T>(forest: &'a [Node<T>], out: &mut Vec<&'a T>) {
  for node in forest {
    out.push(&node.value);
    flatten_into(node.children(), out);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn deeper(current: &u8, next: &u8) -> bool {
    next > current
  }

  #[test]
  fn test_build_empty_input() {
    let forest: Forest<u8> = build(Vec::new(), deeper);
    assert!(forest.is_empty());
  }

  #[test]
  fn test_build_single_item() {
    assert_eq!(build([1u8], deeper), vec![Node::leaf(1)]);
  }

  #[test]
  fn test_build_compares_against_run_opener() {
    // 3 is not deeper than 4, but both are deeper than 1
    let forest = build([1u8, 4, 3], deeper);

    assert_eq!(
      forest,
      vec![Node::with_children(1, vec![
        Node::leaf(4),
        Node::leaf(3)
      ])]
    );
  }

  #[test]
  fn test_build_doc_example() {
    let forest = build([5u8, 3, 2, 5, 4], |current, next| next < current);

    assert_eq!(
      forest,
      vec![
        Node::with_children(5, vec![Node::with_children(3, vec![
          Node::leaf(2)
        ])]),
        Node::with_children(5, vec![Node::leaf(4)]),
      ]
    );
  }

  #[test]
  fn test_with_children_normalises_empty_forest() {
    let node = Node::with_children("a", Vec::new());
    assert_eq!(node, Node::leaf("a"));
    assert!(node.is_leaf());
    assert_eq!(node.depth(), 1);
  }

  #[test]
  fn test_take_while_stops_at_first_failure() {
    let mut iter = [2, 4, 5, 6].into_iter().peekable();
    assert_eq!(take_while(&mut iter, |n| n % 2 == 0), vec![2, 4]);
    assert_eq!(iter.collect::<Vec<_>>(), vec![5, 6]);
  }

  #[test]
  fn test_take_while_empty_prefix() {
    let mut iter = [1, 2].into_iter().peekable();
    assert!(take_while(&mut iter, |n| *n > 5).is_empty());
    assert_eq!(iter.next(), Some(1));
  }
}
