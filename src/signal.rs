//! One-shot "gallery ready" notification between the project loader and
//! the lightbox.

use std::cell::RefCell;
use std::rc::Rc;

type Listener = Box<dyn FnOnce(usize)>;

/// Single-threaded one-shot signal carrying the rendered image count.
///
/// Cloning yields another handle to the same signal. Listeners registered
/// after the signal fired run immediately with the recorded count.
#[derive(Clone, Default)]
pub struct ReadySignal {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    fired: Option<usize>,
    listeners: Vec<Listener>,
}

impl ReadySignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Image count carried by the signal, once fired.
    pub fn fired(&self) -> Option<usize> {
        self.inner.borrow().fired
    }

    pub fn subscribe(&self, listener: impl FnOnce(usize) + 'static) {
        let fired = self.inner.borrow().fired;
        match fired {
            Some(count) => listener(count),
            None => self.inner.borrow_mut().listeners.push(Box::new(listener)),
        }
    }

    /// Fire the signal. Returns `false` if it had already fired.
    pub fn fire(&self, count: usize) -> bool {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            if inner.fired.is_some() {
                return false;
            }
            inner.fired = Some(count);
            std::mem::take(&mut inner.listeners)
        };
        // Listeners may subscribe again, so the borrow is released first.
        for listener in listeners {
            listener(count);
        }
        true
    }
}

impl std::fmt::Debug for ReadySignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ReadySignal")
            .field("fired", &inner.fired)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}
