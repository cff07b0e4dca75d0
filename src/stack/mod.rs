//! Stack implementations
//!
//! This module provides two sequential stacks. The `QueueStack` wraps a
//! double-ended queue and treats its back as the top, while the
//! `ArrayStack` wraps a `Vec`. Both report underflow through
//! `EmptyStackError` rather than exposing the backing container's
//! `Option`.

mod array;
mod queue;

pub use self::array::ArrayStack;
pub use self::queue::QueueStack;

pub use crate::error::EmptyStackError;

/// The `Stack<T>` abstract data type.
pub trait Stack<T> {
  /// Creates a new, empty `Stack<T>`.
  fn new() -> Self;

  /// Pushes an element onto the stack.
  fn push(&mut self, elem: T);

  /// Removes and returns the top element. Fails on an empty stack,
  /// which is left untouched.
  fn pop(&mut self) -> Result<T, EmptyStackError>;

  /// Returns the top element without removing it.
  fn peek(&self) -> Result<&T, EmptyStackError>;

  /// Predicate that tests if the stack is empty.
  fn is_empty(&self) -> bool;

  /// Returns the number of elements in the stack.
  fn size(&self) -> usize;
}
