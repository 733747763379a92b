#![allow(dead_code)]

use std::cell::RefCell;
use std::ptr::NonNull;
use std::rc::Rc;

use rcontainers::{Allocator, Global, TryReserveError};

/// One lifecycle event of a [`Tracked`] value, tagged with the value it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    New(i32),
    Clone(i32),
    Drop(i32),
}

thread_local! {
    static HISTORY: RefCell<Vec<Event>> = const { RefCell::new(Vec::new()) };
}

fn record(event: Event) {
    HISTORY.with(|h| h.borrow_mut().push(event));
}

/// Forgets every event recorded so far on this thread.
pub fn reset() {
    HISTORY.with(|h| h.borrow_mut().clear());
}

/// Returns and forgets every event recorded so far on this thread.
pub fn take_history() -> Vec<Event> {
    HISTORY.with(|h| std::mem::take(&mut *h.borrow_mut()))
}

/// Counts recorded events matching `pred`, without forgetting them.
pub fn count(pred: impl Fn(&Event) -> bool) -> usize {
    HISTORY.with(|h| h.borrow().iter().filter(|e| pred(e)).count())
}

/// A heap-owning value that logs its construction, clones and drops.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tracked {
    value: Box<i32>,
}

impl Tracked {
    pub fn new(value: i32) -> Self {
        record(Event::New(value));
        Tracked {
            value: Box::new(value),
        }
    }

    pub fn value(&self) -> i32 {
        *self.value
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        record(Event::Clone(*self.value));
        Tracked {
            value: self.value.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        record(Event::Drop(*self.value));
    }
}

/// Bookkeeping shared by the clones of a [`Counting`] allocator.
#[derive(Debug, Default)]
pub struct Stats {
    pub allocations: usize,
    pub deallocations: usize,
    pub requested: Vec<usize>,
    live: Vec<(usize, usize)>,
}

impl Stats {
    /// Blocks handed out and not yet returned.
    pub fn outstanding(&self) -> usize {
        self.live.len()
    }
}

/// Delegates to [`Global`] and checks that every block comes back with the size it was
/// allocated with.
#[derive(Debug, Clone, Default)]
pub struct Counting {
    pub stats: Rc<RefCell<Stats>>,
}

impl<T> Allocator<T> for Counting {
    fn allocate(&self, n: usize) -> Result<NonNull<T>, TryReserveError> {
        let ptr = <Global as Allocator<T>>::allocate(&Global, n)?;
        let mut stats = self.stats.borrow_mut();
        stats.allocations += 1;
        stats.requested.push(n);
        stats.live.push((ptr.as_ptr() as usize, n));
        Ok(ptr)
    }

    unsafe fn deallocate(&self, ptr: NonNull<T>, n: usize) {
        {
            let mut stats = self.stats.borrow_mut();
            let addr = ptr.as_ptr() as usize;
            let at = stats
                .live
                .iter()
                .position(|&(a, _)| a == addr)
                .expect("deallocating a block that was never allocated");
            let (_, allocated) = stats.live.swap_remove(at);
            assert_eq!(allocated, n, "block released with a different size");
            stats.deallocations += 1;
        }
        unsafe { <Global as Allocator<T>>::deallocate(&Global, ptr, n) }
    }
}
