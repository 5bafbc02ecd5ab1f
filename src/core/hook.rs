//! Callable wrappers for state and transition hooks.
//!
//! Hooks are zero-argument callbacks attached to states (entry/during/exit)
//! or transitions (on-transition action). Guards are zero-argument predicates
//! that gate whether a transition may fire. Any context a hook needs is
//! captured by its closure; the engine passes nothing in and takes nothing
//! out.

/// Zero-argument callback attached to a state or transition.
///
/// A `Hook` may mutate captured host state (counters, flags, peripherals),
/// which is why it wraps `FnMut`. An absent hook is a no-op; the engine never
/// requires one.
///
/// # Example
///
/// ```rust
/// use lockstep::core::Hook;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let fired = Arc::new(AtomicUsize::new(0));
/// let probe = Arc::clone(&fired);
///
/// let mut hook = Hook::new(move || {
///     probe.fetch_add(1, Ordering::Relaxed);
/// });
///
/// hook.call();
/// assert_eq!(fired.load(Ordering::Relaxed), 1);
/// ```
pub struct Hook {
    callback: Box<dyn FnMut() + Send>,
}

impl Hook {
    /// Wrap a zero-argument callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        Hook {
            callback: Box::new(callback),
        }
    }

    /// Invoke the callback.
    pub fn call(&mut self) {
        (self.callback)()
    }
}

/// Zero-argument predicate that gates a transition.
///
/// Guards are evaluated during [`step`](crate::StateMachine::step) with no
/// arguments; whatever they inspect must be captured by the closure. A
/// transition whose table cell has no guard never fires.
///
/// # Example
///
/// ```rust
/// use lockstep::core::Guard;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let ready = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&ready);
///
/// let guard = Guard::new(move || flag.load(Ordering::Relaxed));
///
/// assert!(!guard.check());
/// ready.store(true, Ordering::Relaxed);
/// assert!(guard.check());
/// ```
pub struct Guard {
    predicate: Box<dyn Fn() -> bool + Send>,
}

impl Guard {
    /// Wrap a zero-argument predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + Send + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// A guard that always passes.
    pub fn always() -> Self {
        Guard::new(|| true)
    }

    /// A guard that never passes.
    ///
    /// Equivalent to leaving the guard absent; useful when a transition
    /// should stay in the table but be switched off.
    pub fn never() -> Self {
        Guard::new(|| false)
    }

    /// Evaluate the predicate.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }
}
