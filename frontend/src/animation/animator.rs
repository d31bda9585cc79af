use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, info, warn};
use rand::Rng;

use super::host::{DrawSurface, FrameHost, Viewport};
use super::particles::{Bounds, ParticleField};

struct AnimatorState<F: FrameHost, S> {
    frames: F,
    surface: S,
    field: RefCell<ParticleField>,
    pending: RefCell<Option<F::Handle>>,
    running: Cell<bool>,
}

impl<F, S> AnimatorState<F, S>
where
    F: FrameHost + 'static,
    S: DrawSurface + 'static,
{
    fn tick(self: &Rc<Self>) {
        if !self.running.get() {
            return;
        }
        // The handle that brought us here has fired; release it before
        // queuing the next refresh.
        drop(self.pending.borrow_mut().take());
        self.field.borrow_mut().render(&self.surface);

        let next = Rc::clone(self);
        let handle = self.frames.request_frame(Box::new(move || next.tick()));
        *self.pending.borrow_mut() = Some(handle);
    }

    fn resize(&self, width: f64, height: f64) {
        debug!("particle surface resized to {}x{}", width, height);
        self.surface.set_size(width, height);
        self.field.borrow_mut().resize(width, height);
    }

    fn stop(&self) {
        self.running.set(false);
        drop(self.pending.borrow_mut().take());
    }
}

/// Owns the hero particle loop. The loop re-arms itself on every display
/// refresh until the animator is dropped, which cancels the queued frame and
/// removes the resize listener.
pub struct ParticleAnimator<F, V, S>
where
    F: FrameHost + 'static,
    V: Viewport,
    S: DrawSurface + 'static,
{
    state: Rc<AnimatorState<F, S>>,
    _resize: V::Subscription,
}

impl<F, V, S> ParticleAnimator<F, V, S>
where
    F: FrameHost + 'static,
    V: Viewport + Clone + 'static,
    S: DrawSurface + 'static,
{
    /// Returns `None` without side effects when there is nothing to draw on.
    pub fn start<R: Rng + ?Sized>(
        frames: F,
        viewport: V,
        surface: Option<S>,
        count: usize,
        rng: &mut R,
    ) -> Option<Self> {
        let surface = surface?;
        let (width, height) = viewport.size();
        surface.set_size(width, height);
        let field = ParticleField::spawn(count, Bounds::new(width, height), rng);
        if field.is_empty() {
            warn!("particle field is empty on {}x{}", width, height);
        } else {
            info!("starting {} particles on {}x{}", field.len(), width, height);
        }

        let state = Rc::new(AnimatorState {
            frames,
            surface,
            field: RefCell::new(field),
            pending: RefCell::new(None),
            running: Cell::new(true),
        });

        let resize = viewport.on_resize(Box::new({
            let state: Weak<AnimatorState<F, S>> = Rc::downgrade(&state);
            let viewport = viewport.clone();
            move || {
                if let Some(state) = state.upgrade() {
                    let (width, height) = viewport.size();
                    state.resize(width, height);
                }
            }
        }));

        state.tick();
        Some(Self {
            state,
            _resize: resize,
        })
    }

    #[cfg(test)]
    pub fn bounds(&self) -> Bounds {
        self.state.field.borrow().bounds()
    }

    #[cfg(test)]
    pub fn particle_count(&self) -> usize {
        self.state.field.borrow().len()
    }

    #[cfg(test)]
    pub fn field(&self) -> ParticleField {
        self.state.field.borrow().clone()
    }
}

impl<F, V, S> Drop for ParticleAnimator<F, V, S>
where
    F: FrameHost + 'static,
    V: Viewport,
    S: DrawSurface + 'static,
{
    fn drop(&mut self) {
        info!("stopping particle animation");
        self.state.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::testing::{
        DrawOp, FakeViewport, ManualFrames, RecordingSurface,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type TestAnimator = ParticleAnimator<ManualFrames, FakeViewport, RecordingSurface>;

    fn start(
        frames: &ManualFrames,
        viewport: &FakeViewport,
        surface: &RecordingSurface,
    ) -> TestAnimator {
        let mut rng = StdRng::seed_from_u64(42);
        ParticleAnimator::start(
            frames.clone(),
            viewport.clone(),
            Some(surface.clone()),
            60,
            &mut rng,
        )
        .expect("surface was provided")
    }

    #[test]
    fn start_sizes_surface_and_draws_first_frame() {
        let frames = ManualFrames::default();
        let viewport = FakeViewport::new(800.0, 600.0);
        let surface = RecordingSurface::default();

        let animator = start(&frames, &viewport, &surface);

        let ops = surface.ops();
        assert_eq!(ops[0], DrawOp::Resize(800.0, 600.0));
        assert_eq!(ops[1], DrawOp::Clear);
        assert_eq!(ops.len(), 2 + 60);
        assert_eq!(frames.pending(), 1);
        assert_eq!(animator.particle_count(), 60);
    }

    #[test]
    fn loop_rearms_on_every_refresh() {
        let frames = ManualFrames::default();
        let viewport = FakeViewport::new(800.0, 600.0);
        let surface = RecordingSurface::default();
        let animator = start(&frames, &viewport, &surface);

        for _ in 0..50 {
            assert_eq!(frames.refresh(), 1);
            assert_eq!(frames.pending(), 1);
        }
        let clears = surface.ops().iter().filter(|op| **op == DrawOp::Clear).count();
        assert_eq!(clears, 51);
        assert_eq!(animator.particle_count(), 60);
    }

    #[test]
    fn resize_updates_surface_and_bounds() {
        let frames = ManualFrames::default();
        let viewport = FakeViewport::new(800.0, 600.0);
        let surface = RecordingSurface::default();
        let animator = start(&frames, &viewport, &surface);
        let before = animator.field();

        surface.clear_log();
        viewport.resize(1200.0, 800.0);

        assert_eq!(surface.ops(), vec![DrawOp::Resize(1200.0, 800.0)]);
        assert_eq!(animator.bounds(), Bounds::new(1200.0, 800.0));
        // positions are not renormalized
        assert_eq!(animator.field().particles(), before.particles());

        for _ in 0..100 {
            frames.refresh();
        }
        assert_eq!(animator.bounds(), Bounds::new(1200.0, 800.0));
    }

    #[test]
    fn drop_cancels_frame_and_removes_listener() {
        let frames = ManualFrames::default();
        let viewport = FakeViewport::new(800.0, 600.0);
        let surface = RecordingSurface::default();
        let animator = start(&frames, &viewport, &surface);
        assert_eq!(viewport.listener_count(), 1);

        drop(animator);

        assert_eq!(frames.pending(), 0);
        assert_eq!(viewport.listener_count(), 0);
        surface.clear_log();
        assert_eq!(frames.refresh(), 0);
        viewport.resize(10.0, 10.0);
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn missing_surface_means_no_animation() {
        let frames = ManualFrames::default();
        let viewport = FakeViewport::new(800.0, 600.0);
        let mut rng = StdRng::seed_from_u64(1);

        let animator: Option<TestAnimator> =
            ParticleAnimator::start(frames.clone(), viewport.clone(), None, 60, &mut rng);

        assert!(animator.is_none());
        assert_eq!(frames.pending(), 0);
        assert_eq!(viewport.listener_count(), 0);
    }
}
