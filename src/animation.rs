//! Rain + surface + frame loop, independent of the browser.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;
use crate::frame::{FrameLoop, FrameScheduler};
use crate::rain::{DigitalRain, RainSurface};

struct Scene {
    rain: DigitalRain,
    surface: Box<dyn RainSurface>,
}

/// A running (or stoppable) digital-rain effect bound to one surface.
pub struct RainAnimation<S: FrameScheduler> {
    scene: Rc<RefCell<Scene>>,
    frame_loop: FrameLoop<S>,
}

impl<S: FrameScheduler + 'static> RainAnimation<S> {
    /// Columns are built from the surface's current size.
    pub fn new(mut rain: DigitalRain, surface: Box<dyn RainSurface>, scheduler: S) -> Self {
        rain.resize(surface.width(), surface.height());
        let scene = Rc::new(RefCell::new(Scene { rain, surface }));
        let step_scene = scene.clone();
        let frame_loop = FrameLoop::new(scheduler, move |_ts| {
            let mut guard = step_scene.borrow_mut();
            let Scene { rain, surface } = &mut *guard;
            rain.step(&mut **surface);
        });
        Self { scene, frame_loop }
    }

    pub fn start(&self) -> Result<()> {
        self.frame_loop.start()
    }

    pub fn stop(&self) {
        self.frame_loop.stop();
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub fn frames(&self) -> u64 {
        self.frame_loop.frames()
    }

    /// Resize the surface and rebuild the columns, restarting the loop if it
    /// was running.
    pub fn resize(&self, width: f64, height: f64) -> Result<()> {
        let was_running = self.frame_loop.is_running();
        self.frame_loop.stop();
        {
            let mut scene = self.scene.borrow_mut();
            scene.surface.set_size(width, height);
            let (w, h) = (scene.surface.width(), scene.surface.height());
            scene.rain.resize(w, h);
        }
        if was_running {
            self.frame_loop.start()?;
        }
        Ok(())
    }

    pub fn column_count(&self) -> usize {
        self.scene.borrow().rain.column_count()
    }

    /// Read-only access to the rain state.
    pub fn with_rain<R>(&self, f: impl FnOnce(&DigitalRain) -> R) -> R {
        f(&self.scene.borrow().rain)
    }
}
