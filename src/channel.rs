//! Fixed-capacity command queue shared between the control side and a renderer.
//!
//! The control side (web form, MQTT handler, button ISR) pushes commands, the
//! render loop drains them at the start of each frame. Access is serialised
//! with `critical-section`, so both sides may live in different interrupt
//! priorities or threads.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// The queue was full; the rejected value is handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// The queue was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Bounded FIFO holding up to `SIZE` values.
pub struct Channel<T, const SIZE: usize> {
    queue: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Queue `value`, or hand it back if the queue is full
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            queue.push_back(value).map_err(TrySendError)
        })
    }

    /// Queue `value`, evicting the oldest entry when full.
    ///
    /// Returns the evicted entry, if any. Useful for commands where the
    /// newest request matters more than a complete history.
    pub fn send_evicting(&self, value: T) -> Option<T> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            let evicted = if queue.is_full() {
                queue.pop_front()
            } else {
                None
            };
            // Cannot fail: a slot was freed above when the queue was full.
            let _ = queue.push_back(value);
            evicted
        })
    }

    /// Take the oldest queued value
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of queued values
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.queue.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop everything that is queued
    pub fn clear(&self) {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().clear());
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of a [`Channel`]
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }

    pub fn send_evicting(&self, value: T) -> Option<T> {
        self.channel.send_evicting(value)
    }
}

/// Receiving half of a [`Channel`]
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.channel.try_receive()
    }

    /// Hand every queued value to `handle`, oldest first.
    ///
    /// Each value is taken in its own critical section, so senders are never
    /// blocked for the whole drain. Returns how many values were handled.
    pub fn drain(&self, mut handle: impl FnMut(T)) -> usize {
        let mut handled = 0;
        while let Ok(value) = self.channel.try_receive() {
            handle(value);
            handled += 1;
        }
        handled
    }
}
