//! Call tracking for the evaluator.
//!
//! `CallStack` records the user functions currently executing. Its depth
//! limit turns runaway recursion into a `StackOverflow` error, and its
//! frames become the backtrace on errors raised inside a call.

use lisp_diagnostic::{stack_overflow, LispError, LispResult};

/// One active user-function call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    pub name: String,
}

impl CallFrame {
    pub fn new(name: impl Into<String>) -> Self {
        CallFrame { name: name.into() }
    }
}

/// Live call stack.
///
/// `max_depth` is `None` for unlimited, `Some(n)` to allow at most `n`
/// nested calls.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit.
    ///
    /// The frame is NOT pushed on overflow.
    pub fn push(&mut self, frame: CallFrame) -> LispResult<()> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(stack_overflow(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Function names, most recent call first.
    pub fn capture(&self) -> Vec<String> {
        self.frames.iter().rev().map(|f| f.name.clone()).collect()
    }

    /// Attach a backtrace unless the error already carries a deeper one.
    pub fn attach_backtrace(&self, err: LispError) -> LispError {
        if self.frames.is_empty() || !err.backtrace.is_empty() {
            return err;
        }
        err.with_backtrace(self.capture())
    }
}

impl Default for CallStack {
    /// Creates an unlimited call stack.
    fn default() -> Self {
        Self::new(None)
    }
}
