//! Frame scheduling.
//!
//! A [`FrameLoop`] registers one callback with a [`FrameScheduler`] and
//! re-requests it before every repaint, running its step function each time.
//! The loop keeps at most one pending request: `start` cancels whatever was
//! pending, and a callback that fires with nothing pending is ignored.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::error::Result;

/// Opaque id of a pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Host primitive that runs a registered callback once before the next repaint.
///
/// A callback is registered once and may be requested any number of times, so a
/// cancelled request never strands a host-side function.
pub trait FrameScheduler {
    type Callback;

    fn register(&self, callback: Box<dyn FnMut(f64)>) -> Self::Callback;
    fn request(&self, callback: &Self::Callback) -> Result<FrameHandle>;
    fn cancel(&self, handle: FrameHandle);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for Rc<S> {
    type Callback = S::Callback;

    fn register(&self, callback: Box<dyn FnMut(f64)>) -> Self::Callback {
        (**self).register(callback)
    }

    fn request(&self, callback: &Self::Callback) -> Result<FrameHandle> {
        (**self).request(callback)
    }

    fn cancel(&self, handle: FrameHandle) {
        (**self).cancel(handle)
    }
}

// --- Loop --------------------------------------------------------------------

struct LoopState<S: FrameScheduler> {
    scheduler: S,
    step: Box<dyn FnMut(f64)>,
    callback: Option<S::Callback>,
    pending: Option<FrameHandle>,
    generation: u64,
    frames: u64,
}

impl<S: FrameScheduler> Drop for LoopState<S> {
    fn drop(&mut self) {
        if let Some(h) = self.pending.take() {
            self.scheduler.cancel(h);
        }
    }
}

/// Cancellable animation loop. Cloning yields another handle to the same loop.
pub struct FrameLoop<S: FrameScheduler> {
    state: Rc<RefCell<LoopState<S>>>,
}

impl<S: FrameScheduler> Clone for FrameLoop<S> {
    fn clone(&self) -> Self {
        Self { state: self.state.clone() }
    }
}

impl<S: FrameScheduler + 'static> FrameLoop<S> {
    pub fn new(scheduler: S, step: impl FnMut(f64) + 'static) -> Self {
        let state = Rc::new(RefCell::new(LoopState {
            scheduler,
            step: Box::new(step),
            callback: None,
            pending: None,
            generation: 0,
            frames: 0,
        }));
        let weak: Weak<RefCell<LoopState<S>>> = Rc::downgrade(&state);
        let callback = state.borrow().scheduler.register(Box::new(move |ts: f64| on_frame(&weak, ts)));
        state.borrow_mut().callback = Some(callback);
        Self { state }
    }

    /// Start (or restart) the loop. Any previously pending frame is cancelled.
    pub fn start(&self) -> Result<()> {
        {
            let mut st = self.state.borrow_mut();
            if let Some(h) = st.pending.take() {
                st.scheduler.cancel(h);
            }
            st.generation += 1;
        }
        request_frame(&self.state)
    }

    /// Cancel the pending frame. Calling it on a stopped loop does nothing.
    pub fn stop(&self) {
        let mut st = self.state.borrow_mut();
        if let Some(h) = st.pending.take() {
            st.scheduler.cancel(h);
        }
        st.generation += 1;
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().pending.is_some()
    }

    /// Number of step invocations since construction.
    pub fn frames(&self) -> u64 {
        self.state.borrow().frames
    }
}

fn request_frame<S: FrameScheduler>(state: &Rc<RefCell<LoopState<S>>>) -> Result<()> {
    let mut guard = state.borrow_mut();
    let st = &mut *guard;
    let Some(callback) = &st.callback else {
        return Ok(());
    };
    let handle = st.scheduler.request(callback)?;
    st.pending = Some(handle);
    Ok(())
}

fn on_frame<S: FrameScheduler>(weak: &Weak<RefCell<LoopState<S>>>, ts: f64) {
    let Some(state) = weak.upgrade() else { return };
    // The step runs without the state borrowed so it may call stop/start.
    let (generation, mut step) = {
        let mut st = state.borrow_mut();
        if st.pending.take().is_none() {
            return;
        }
        st.frames += 1;
        (st.generation, std::mem::replace(&mut st.step, Box::new(|_| {})))
    };
    step(ts);
    {
        let mut st = state.borrow_mut();
        st.step = step;
        if st.generation != generation || st.pending.is_some() {
            return;
        }
    }
    if let Err(err) = request_frame(&state) {
        crate::diag::error(&format!("frame loop stopped: {err}"));
    }
}

// --- Manual scheduler ----------------------------------------------------------

type ManualCallback = Rc<RefCell<Box<dyn FnMut(f64)>>>;

/// Scheduler driven by the caller: requests queue up until [`ManualScheduler::tick`].
///
/// Used on headless hosts and in tests.
#[derive(Default)]
pub struct ManualScheduler {
    next_id: Cell<i32>,
    queue: RefCell<VecDeque<(FrameHandle, ManualCallback)>>,
    cancelled: Cell<usize>,
    registered: Cell<usize>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests waiting for the next tick.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Total number of cancelled requests.
    pub fn cancelled(&self) -> usize {
        self.cancelled.get()
    }

    /// Number of callbacks registered so far.
    pub fn registered(&self) -> usize {
        self.registered.get()
    }

    /// Run every request queued before this call. Returns how many ran.
    pub fn tick(&self, timestamp: f64) -> usize {
        let due: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        let n = due.len();
        for (_, cb) in due {
            let mut f = cb.borrow_mut();
            (&mut **f)(timestamp);
        }
        n
    }
}

impl FrameScheduler for ManualScheduler {
    type Callback = ManualCallback;

    fn register(&self, callback: Box<dyn FnMut(f64)>) -> ManualCallback {
        self.registered.set(self.registered.get() + 1);
        Rc::new(RefCell::new(callback))
    }

    fn request(&self, callback: &ManualCallback) -> Result<FrameHandle> {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let handle = FrameHandle(id);
        self.queue.borrow_mut().push_back((handle, callback.clone()));
        Ok(handle)
    }

    fn cancel(&self, handle: FrameHandle) {
        let mut q = self.queue.borrow_mut();
        let before = q.len();
        q.retain(|(h, _)| *h != handle);
        if q.len() != before {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }
}

// --- Browser scheduler ---------------------------------------------------------

/// `window.requestAnimationFrame` / `cancelAnimationFrame`.
#[derive(Debug, Clone)]
pub struct BrowserScheduler {
    window: web_sys::Window,
}

impl BrowserScheduler {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(crate::error::EffectError::NoWindow)?;
        Ok(Self { window })
    }
}

impl FrameScheduler for BrowserScheduler {
    type Callback = wasm_bindgen::closure::Closure<dyn FnMut(f64)>;

    fn register(&self, callback: Box<dyn FnMut(f64)>) -> Self::Callback {
        wasm_bindgen::closure::Closure::wrap(callback)
    }

    fn request(&self, callback: &Self::Callback) -> Result<FrameHandle> {
        use wasm_bindgen::JsCast;
        let id = self.window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        Ok(FrameHandle(id))
    }

    fn cancel(&self, handle: FrameHandle) {
        if let Err(err) = self.window.cancel_animation_frame(handle.0) {
            crate::diag::warn(&format!("cancelAnimationFrame failed: {err:?}"));
        }
    }
}
