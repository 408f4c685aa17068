//! Call counting.

use std::cell::Cell;

/// Wraps a function and counts how often it has been called.
///
/// Multi-argument functions take a tuple.
pub struct Counted<F> {
    f: F,
    calls: Cell<u64>,
}

impl<F> Counted<F> {
    pub fn new(f: F) -> Self {
        Self {
            f,
            calls: Cell::new(0),
        }
    }

    /// Invoke the wrapped function.
    pub fn call<A, R>(&self, arg: A) -> R
    where
        F: Fn(A) -> R,
    {
        self.calls.set(self.calls.get() + 1);
        (self.f)(arg)
    }

    /// Invoke a wrapped `FnMut`.
    pub fn call_mut<A, R>(&mut self, arg: A) -> R
    where
        F: FnMut(A) -> R,
    {
        self.calls.set(self.calls.get() + 1);
        (self.f)(arg)
    }

    pub fn calls(&self) -> u64 {
        self.calls.get()
    }

    pub fn reset(&self) {
        self.calls.set(0);
    }

    pub fn into_inner(self) -> F {
        self.f
    }
}
