#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

use chain::Chain;
use chain::Node;
use core::fmt;
use core::iter::FusedIterator;

pub use allocator_api2::alloc::AllocError;
pub use allocator_api2::alloc::Allocator;
pub use allocator_api2::alloc::Global;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

mod chain;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// The operations shared by every list in this crate.
///
/// Values go in and booleans or counts come out; no implementation hands out
/// references into its links. The trait is object safe, so a driver can
/// measure different variants through `&mut dyn List`.

pub trait List {
  /// The number of stored values.

  fn len(&self) -> usize;

  /// Whether the list stores no values.

  fn is_empty(&self) -> bool;

  /// Inserts `value` at the front of the list. Duplicates are allowed.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory, in which case the
  /// list is unchanged.

  fn try_add(&mut self, value: i64) -> Result<(), AllocError>;

  /// Inserts `value` at the front of the list.
  ///
  /// Returns `false`, leaving the list unchanged, on failure to allocate
  /// memory.

  fn add(&mut self, value: i64) -> bool {
    self.try_add(value).is_ok()
  }

  /// Removes the first occurrence of `value`, returning whether one was
  /// found.

  fn remove(&mut self, value: i64) -> bool;

  /// Removes every value. The traversal count is left alone.

  fn clear(&mut self);

  /// Searches for `value` from the front, adding one to the traversal count
  /// for each element visited up to and including the match.

  fn contains(&mut self, value: i64) -> bool;

  /// The number of elements visited by [`contains`](Self::contains) since the
  /// last reset.

  fn traversal_count(&self) -> u64;

  /// Sets the traversal count back to zero.

  fn reset_traversal_count(&mut self);
}

/// A singly-linked list whose searches never reorder it.

pub struct SequentialList<A: Allocator = Global>(Chain<A>);

/// A singly-linked list that moves each element found by
/// [`contains`](List::contains) to the front.
///
/// Every other operation behaves exactly as on [`SequentialList`].

pub struct AdaptiveList<A: Allocator = Global>(Chain<A>);

/// An iterator over the values of a list, front to back.
///
/// Created by [`SequentialList::iter`] and [`AdaptiveList::iter`]. Iterating
/// does not count as a traversal.

pub struct Values<'a, A: Allocator = Global>(Option<&'a Node<A>>);

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SequentialList                                                             //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl SequentialList<Global> {
  /// Creates an empty list backed by the global allocator.

  pub fn new() -> Self {
    Self(Chain::new_in(Global))
  }
}

impl<A: Allocator> SequentialList<A> {
  /// Creates an empty list whose elements are allocated with `allocator`.

  pub fn new_in(allocator: A) -> Self {
    Self(Chain::new_in(allocator))
  }

  /// An iterator over the stored values, front to back.

  pub fn iter(&self) -> Values<'_, A> {
    Values(self.0.first())
  }

  /// A reference to the allocator.

  pub fn allocator(&self) -> &A {
    self.0.allocator()
  }
}

impl<A: Allocator + Clone> List for SequentialList<A> {
  #[inline(always)]
  fn len(&self) -> usize {
    self.0.len()
  }

  #[inline(always)]
  fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  fn try_add(&mut self, value: i64) -> Result<(), AllocError> {
    self.0.try_push_front(value)
  }

  fn remove(&mut self, value: i64) -> bool {
    self.0.remove_first(value)
  }

  fn clear(&mut self) {
    self.0.clear()
  }

  fn contains(&mut self, value: i64) -> bool {
    self.0.scan(value)
  }

  #[inline(always)]
  fn traversal_count(&self) -> u64 {
    self.0.traversals()
  }

  #[inline(always)]
  fn reset_traversal_count(&mut self) {
    self.0.reset_traversals()
  }
}

impl Default for SequentialList<Global> {
  fn default() -> Self {
    Self::new()
  }
}

impl<A: Allocator> fmt::Debug for SequentialList<A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<'a, A: Allocator> IntoIterator for &'a SequentialList<A> {
  type Item = i64;
  type IntoIter = Values<'a, A>;

  fn into_iter(self) -> Values<'a, A> {
    self.iter()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// AdaptiveList                                                               //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl AdaptiveList<Global> {
  /// Creates an empty list backed by the global allocator.

  pub fn new() -> Self {
    Self(Chain::new_in(Global))
  }
}

impl<A: Allocator> AdaptiveList<A> {
  /// Creates an empty list whose elements are allocated with `allocator`.

  pub fn new_in(allocator: A) -> Self {
    Self(Chain::new_in(allocator))
  }

  /// An iterator over the stored values, front to back.

  pub fn iter(&self) -> Values<'_, A> {
    Values(self.0.first())
  }

  /// A reference to the allocator.

  pub fn allocator(&self) -> &A {
    self.0.allocator()
  }
}

impl<A: Allocator + Clone> List for AdaptiveList<A> {
  #[inline(always)]
  fn len(&self) -> usize {
    self.0.len()
  }

  #[inline(always)]
  fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  fn try_add(&mut self, value: i64) -> Result<(), AllocError> {
    self.0.try_push_front(value)
  }

  fn remove(&mut self, value: i64) -> bool {
    self.0.remove_first(value)
  }

  fn clear(&mut self) {
    self.0.clear()
  }

  /// Searches for `value` from the front, counting visited elements as
  /// [`SequentialList`] does. A match found behind the first element is
  /// unlinked and relinked as the new first element; a miss changes nothing.

  fn contains(&mut self, value: i64) -> bool {
    self.0.scan_to_front(value)
  }

  #[inline(always)]
  fn traversal_count(&self) -> u64 {
    self.0.traversals()
  }

  #[inline(always)]
  fn reset_traversal_count(&mut self) {
    self.0.reset_traversals()
  }
}

impl Default for AdaptiveList<Global> {
  fn default() -> Self {
    Self::new()
  }
}

impl<A: Allocator> fmt::Debug for AdaptiveList<A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<'a, A: Allocator> IntoIterator for &'a AdaptiveList<A> {
  type Item = i64;
  type IntoIter = Values<'a, A>;

  fn into_iter(self) -> Values<'a, A> {
    self.iter()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Values                                                                     //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, A: Allocator> Iterator for Values<'a, A> {
  type Item = i64;

  #[inline(always)]
  fn next(&mut self) -> Option<i64> {
    let node = self.0?;
    self.0 = node.next.as_deref();
    Some(node.value)
  }
}

impl<'a, A: Allocator> FusedIterator for Values<'a, A> { }

impl<'a, A: Allocator> Clone for Values<'a, A> {
  fn clone(&self) -> Self {
    Values(self.0)
  }
}

impl<'a, A: Allocator> fmt::Debug for Values<'a, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.clone()).finish()
  }
}
