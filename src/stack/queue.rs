use std::collections::VecDeque;
use tracing::trace;
use super::*;

/// A `Stack<T>` backed by a double-ended queue. The back of the
/// `VecDeque<T>` is the top of the stack.
#[derive(Debug, Clone)]
pub struct QueueStack<T> {
  queue: VecDeque<T>,
}

impl<T> QueueStack<T> {
  /// Creates an empty stack with room for `capacity` elements before
  /// reallocating. Not a bound: pushing past it still succeeds.
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      queue: VecDeque::with_capacity(capacity),
    }
  }

  /// Returns a mutable reference to the top element, so it can be
  /// replaced in place.
  pub fn peek_mut(&mut self) -> Result<&mut T, EmptyStackError> {
    self.queue.back_mut().ok_or_else(|| {
      trace!(op = "peek_mut", "queue stack underflow");
      EmptyStackError
    })
  }
}

impl<T> Stack<T> for QueueStack<T> {
  fn new() -> Self {
    Self {
      queue: VecDeque::new(),
    }
  }

  fn push(&mut self, elem: T) {
    self.queue.push_back(elem);
  }

  fn pop(&mut self) -> Result<T, EmptyStackError> {
    self.queue.pop_back().ok_or_else(|| {
      trace!(op = "pop", "queue stack underflow");
      EmptyStackError
    })
  }

  fn peek(&self) -> Result<&T, EmptyStackError> {
    self.queue.back().ok_or_else(|| {
      trace!(op = "peek", "queue stack underflow");
      EmptyStackError
    })
  }

  fn is_empty(&self) -> bool {
    self.queue.is_empty()
  }

  fn size(&self) -> usize {
    self.queue.len()
  }
}

impl<T> Default for QueueStack<T> {
  fn default() -> Self {
    Self::new()
  }
}
