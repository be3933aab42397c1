//! Mutation hooks
//!
//! Optional notification callbacks fired around filesystem mutations.
//! Hooks are passed explicitly to the operation that should fire them,
//! never registered in process-global state.

use std::path::Path;

/// A pair of callbacks invoked around each filesystem mutation.
///
/// `before` fires immediately before a mutation syscall is attempted;
/// `after` fires once the syscall has succeeded. A mutation that fails
/// fires `before` only.
#[derive(Default)]
pub struct MutationHooks<'h> {
    before: Option<Box<dyn FnMut(&Path) + 'h>>,
    after: Option<Box<dyn FnMut(&Path) + 'h>>,
}

impl<'h> MutationHooks<'h> {
    /// Hooks that do nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the callback fired before each mutation.
    pub fn on_before(mut self, hook: impl FnMut(&Path) + 'h) -> Self {
        self.before = Some(Box::new(hook));
        self
    }

    /// Set the callback fired after each successful mutation.
    pub fn on_after(mut self, hook: impl FnMut(&Path) + 'h) -> Self {
        self.after = Some(Box::new(hook));
        self
    }

    pub(crate) fn fire_before(&mut self, path: &Path) {
        if let Some(hook) = self.before.as_mut() {
            hook(path);
        }
    }

    pub(crate) fn fire_after(&mut self, path: &Path) {
        if let Some(hook) = self.after.as_mut() {
            hook(path);
        }
    }
}
