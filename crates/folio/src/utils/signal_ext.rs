//! Extension trait for Dioxus signals holding larger state values.
//!
//! The form state is edited in place through one of its methods far more
//! often than it is replaced:
//!
//! ```ignore
//! form.mutate(|form| {
//!     form.set_field(Field::Title, value);
//! });
//! ```

use dioxus::prelude::*;

/// Mutation helpers, implemented for every `Signal<T>` where `T: Clone + 'static`.
pub trait SignalExt<T: Clone + 'static> {
    /// Mutate the signal's value in place.
    ///
    /// Reads (clones) the current value, passes it to `f` and writes the
    /// modified value back.
    fn mutate<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T);
}

impl<T: Clone + 'static> SignalExt<T> for Signal<T> {
    fn mutate<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let mut value = self.read().clone();
        f(&mut value);
        self.set(value);
    }
}

// Note: no unit tests here; mutate needs a Dioxus runtime and is a thin
// wrapper around Signal::read() and Signal::set().
