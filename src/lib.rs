//! A last-in-first-out stack built on a double-ended queue.
//!
//! ```
//! use queuestack::{QueueStack, Stack};
//!
//! let mut stack = QueueStack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.peek(), Ok(&2));
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.size(), 1);
//! ```

pub mod error;
pub mod stack;


pub use crate::error::EmptyStackError;
pub use crate::stack::{ArrayStack, QueueStack, Stack};


///////////////////////////////////////////////////////////////////////////////
//// Scenario Tests
///////////////////////////////////////////////////////////////////////////////
