use tracing::trace;
use super::*;

/// A simple array-based `Stack<T>`. Uses Rust's `Vec<T>`.
#[derive(Debug, Clone)]
pub struct ArrayStack<T> {
  elems: Vec<T>,
}

impl<T> ArrayStack<T> {
  /// Creates an empty stack with room for `capacity` elements before
  /// reallocating. Not a bound: pushing past it still succeeds.
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      elems: Vec::with_capacity(capacity),
    }
  }
}

impl<T> Stack<T> for ArrayStack<T> {
  fn new() -> Self {
    Self {
      elems: Vec::new(),
    }
  }

  fn push(&mut self, elem: T) {
    self.elems.push(elem)
  }

  fn pop(&mut self) -> Result<T, EmptyStackError> {
    self.elems.pop().ok_or_else(|| {
      trace!(op = "pop", "array stack underflow");
      EmptyStackError
    })
  }

  fn peek(&self) -> Result<&T, EmptyStackError> {
    self.elems.last().ok_or_else(|| {
      trace!(op = "peek", "array stack underflow");
      EmptyStackError
    })
  }

  fn is_empty(&self) -> bool {
    self.elems.is_empty()
  }

  fn size(&self) -> usize {
    self.elems.len()
  }
}

impl<T> Default for ArrayStack<T> {
  fn default() -> Self {
    Self::new()
  }
}
