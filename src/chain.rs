use allocator_api2::alloc::AllocError;
use allocator_api2::alloc::Allocator;
use allocator_api2::boxed::Box;
use core::mem;

pub(crate) type Link<A> = Option<Box<Node<A>, A>>;

pub(crate) struct Node<A: Allocator> {
  pub(crate) value: i64,
  pub(crate) next: Link<A>,
}

/// The state shared by both list variants.
///
/// Every element is owned by exactly one slot: `head` for the first element,
/// the predecessor's `next` for the rest. Unlinking always goes through that
/// owning slot, so the first element needs no special predecessor handling.

pub(crate) struct Chain<A: Allocator> {
  head: Link<A>,
  len: usize,
  traversals: u64,
  allocator: A,
}

impl<A: Allocator> Chain<A> {
  #[inline(always)]
  pub(crate) fn new_in(allocator: A) -> Self {
    Self {
      head: None,
      len: 0,
      traversals: 0,
      allocator,
    }
  }

  #[inline(always)]
  pub(crate) fn len(&self) -> usize {
    self.len
  }

  #[inline(always)]
  pub(crate) fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  #[inline(always)]
  pub(crate) fn first(&self) -> Option<&Node<A>> {
    self.head.as_deref()
  }

  #[inline(always)]
  pub(crate) fn traversals(&self) -> u64 {
    self.traversals
  }

  #[inline(always)]
  pub(crate) fn reset_traversals(&mut self) {
    self.traversals = 0;
  }

  pub(crate) fn allocator(&self) -> &A {
    &self.allocator
  }

  pub(crate) fn remove_first(&mut self, value: i64) -> bool {
    let mut link = &mut self.head;

    loop {
      match link {
        None => return false,
        Some(node) if node.value == value => {
          // The old box is dropped by the assignment, after its successor has
          // been moved out of it.

          *link = node.next.take();
          self.len = self.len - 1;
          return true;
        }
        Some(node) => link = &mut node.next,
      }
    }
  }

  pub(crate) fn clear(&mut self) {
    let n = self.len;

    // Iterative so that dropping a long chain does not recurse once per
    // element.

    let mut link = self.head.take();

    while let Some(mut node) = link {
      link = node.next.take();
    }

    self.len = 0;

    if n != 0 {
      log::trace!("mtflist: released {} elements", n);
    }
  }

  pub(crate) fn scan(&mut self, value: i64) -> bool {
    let mut node = self.head.as_deref();

    while let Some(n) = node {
      self.traversals = self.traversals + 1;

      if n.value == value {
        return true;
      }

      node = n.next.as_deref();
    }

    false
  }

  pub(crate) fn scan_to_front(&mut self, value: i64) -> bool {
    let mut link = &mut self.head;
    let mut depth = 0_usize;

    loop {
      match link {
        None => return false,
        Some(node) if node.value == value => {
          self.traversals = self.traversals + 1;

          if depth == 0 {
            return true;
          }

          let next = node.next.take();

          if let Some(mut found) = mem::replace(link, next) {
            found.next = self.head.take();
            self.head = Some(found);
          }

          log::trace!("mtflist: moved {} to front from position {}", value, depth);

          return true;
        }
        Some(node) => {
          self.traversals = self.traversals + 1;
          depth = depth + 1;
          link = &mut node.next;
        }
      }
    }
  }
}

impl<A: Allocator + Clone> Chain<A> {
  pub(crate) fn try_push_front(&mut self, value: i64) -> Result<(), AllocError> {
    // Allocate before touching any link so that a failure leaves the chain
    // exactly as it was.

    let node = Node { value, next: None };

    let mut node =
      match Box::try_new_in(node, self.allocator.clone()) {
        Ok(node) => node,
        Err(e) => {
          log::debug!("mtflist: failed to allocate element for {} ({} stored)", value, self.len);
          return Err(e);
        }
      };

    node.next = self.head.take();
    self.head = Some(node);
    self.len = self.len + 1;

    Ok(())
  }
}

impl<A: Allocator> Drop for Chain<A> {
  fn drop(&mut self) {
    self.clear()
  }
}
