//! Deterministic stand-ins for the browser host used by unit tests.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::host::{DrawSurface, FrameHost, TimerHost, Viewport};

struct PendingTimer {
    id: u64,
    due: u32,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct TimerQueue {
    now: u32,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

/// Timer host with a manually advanced clock.
#[derive(Clone, Default)]
pub struct ManualTimers {
    queue: Rc<RefCell<TimerQueue>>,
}

pub struct ManualTimeout {
    id: u64,
    queue: Weak<RefCell<TimerQueue>>,
}

impl Drop for ManualTimeout {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            queue.borrow_mut().pending.retain(|timer| timer.id != self.id);
        }
    }
}

impl ManualTimers {
    pub fn now(&self) -> u32 {
        self.queue.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Moves the clock forward, firing due timers in (due, registration) order.
    pub fn advance(&self, ms: u32) {
        let target = self.now() + ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let index = queue
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due <= target)
                    .min_by_key(|(_, timer)| (timer.due, timer.id))
                    .map(|(index, _)| index);
                index.map(|index| {
                    let timer = queue.pending.remove(index);
                    queue.now = timer.due;
                    timer
                })
            };
            match next {
                Some(timer) => (timer.callback)(),
                None => break,
            }
        }
        self.queue.borrow_mut().now = target;
    }
}

impl TimerHost for ManualTimers {
    type Handle = ManualTimeout;

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualTimeout {
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        let due = queue.now + delay_ms;
        queue.pending.push(PendingTimer { id, due, callback });
        ManualTimeout {
            id,
            queue: Rc::downgrade(&self.queue),
        }
    }
}

#[derive(Default)]
struct FrameQueue {
    next_id: u64,
    pending: Vec<(u64, Box<dyn FnOnce()>)>,
}

/// Frame host pumped one display refresh at a time.
#[derive(Clone, Default)]
pub struct ManualFrames {
    queue: Rc<RefCell<FrameQueue>>,
}

pub struct ManualFrame {
    id: u64,
    queue: Weak<RefCell<FrameQueue>>,
}

impl Drop for ManualFrame {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            queue.borrow_mut().pending.retain(|(id, _)| *id != self.id);
        }
    }
}

impl ManualFrames {
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Runs every callback requested before this refresh. Returns how many ran.
    pub fn refresh(&self) -> usize {
        let due: Vec<_> = self.queue.borrow_mut().pending.drain(..).collect();
        let ran = due.len();
        for (_, callback) in due {
            callback();
        }
        ran
    }
}

impl FrameHost for ManualFrames {
    type Handle = ManualFrame;

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> ManualFrame {
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        queue.pending.push((id, callback));
        ManualFrame {
            id,
            queue: Rc::downgrade(&self.queue),
        }
    }
}

type Listeners = RefCell<Vec<(u64, Box<dyn FnMut()>)>>;

#[derive(Clone)]
pub struct FakeViewport {
    size: Rc<Cell<(f64, f64)>>,
    listeners: Rc<Listeners>,
    next_id: Rc<Cell<u64>>,
}

pub struct FakeSubscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Drop for FakeSubscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl FakeViewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Rc::new(Cell::new((width, height))),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn resize(&self, width: f64, height: f64) {
        self.size.set((width, height));
        for (_, listener) in self.listeners.borrow_mut().iter_mut() {
            listener();
        }
    }
}

impl Viewport for FakeViewport {
    type Subscription = FakeSubscription;

    fn size(&self) -> (f64, f64) {
        self.size.get()
    }

    fn on_resize(&self, callback: Box<dyn FnMut()>) -> FakeSubscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, callback));
        FakeSubscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Resize(f64, f64),
    Clear,
    Circle { x: f64, y: f64, radius: f64, fill: String },
}

/// Surface that records every call instead of drawing.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    ops: Rc<RefCell<Vec<DrawOp>>>,
}

impl RecordingSurface {
    pub fn ops(&self) -> Vec<DrawOp> {
        self.ops.borrow().clone()
    }

    pub fn clear_log(&self) {
        self.ops.borrow_mut().clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn set_size(&self, width: f64, height: f64) {
        self.ops.borrow_mut().push(DrawOp::Resize(width, height));
    }

    fn clear(&self) {
        self.ops.borrow_mut().push(DrawOp::Clear);
    }

    fn fill_circle(&self, x: f64, y: f64, radius: f64, fill: &str) {
        self.ops.borrow_mut().push(DrawOp::Circle {
            x,
            y,
            radius,
            fill: fill.to_string(),
        });
    }
}
