//! Swipe-down-to-close gesture tracking.
//!
//! [`SwipeToClose`] follows one touch at a time and turns its vertical
//! displacement into a [`SwipeFrame`]. Frames are drawn through a
//! [`FrameScheduler`] with at most one request outstanding: every new touch
//! sample cancels the previous request before issuing its own.

use std::rc::Rc;

use crate::style::Style;

/// Fraction of the element height past which releasing closes it.
pub const CLOSE_THRESHOLD: f64 = 0.4;
/// How much the element shrinks at full displacement.
pub const SCALE_FACTOR: f64 = 0.1;
pub const DRAG_TRANSITION: &str = "none";
pub const RELEASE_TRANSITION: &str = "transform 0.3s ease-out, opacity 0.3s ease-out";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeFrame {
    pub translate_y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl SwipeFrame {
    pub fn at(displacement: f64, height: f64) -> Self {
        let progress = if height > 0.0 {
            (displacement / height).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            translate_y: displacement,
            scale: 1.0 - progress * SCALE_FACTOR,
            opacity: 1.0 - progress,
        }
    }

    pub fn rest() -> Self {
        Self::at(0.0, 0.0)
    }

    pub fn transform(&self) -> String {
        format!("translateY({}px) scale({})", self.translate_y, self.scale)
    }

    pub fn style(&self) -> Style {
        Style::new()
            .with("transform", self.transform())
            .with("opacity", self.opacity.to_string())
    }
}

/// Schedules work for the next paint.
pub trait FrameScheduler {
    fn schedule(&self, frame: Box<dyn FnOnce()>);

    /// Drops the outstanding request, if any.
    fn cancel(&self);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for Rc<S> {
    fn schedule(&self, frame: Box<dyn FnOnce()>) {
        (**self).schedule(frame)
    }

    fn cancel(&self) {
        (**self).cancel()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Close,
    Reset,
}

#[derive(Debug, Clone, Copy)]
struct Gesture {
    start_y: f64,
    height: f64,
}

pub struct SwipeToClose<S: FrameScheduler> {
    scheduler: S,
    render: Rc<dyn Fn(SwipeFrame)>,
    gesture: Option<Gesture>,
}

impl<S: FrameScheduler> SwipeToClose<S> {
    pub fn new(scheduler: S, render: impl Fn(SwipeFrame) + 'static) -> Self {
        Self {
            scheduler,
            render: Rc::new(render),
            gesture: None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn touch_start(&mut self, y: f64, height: f64) {
        self.gesture = Some(Gesture { start_y: y, height });
    }

    /// Schedules the frame for the new position. Upward movement is clamped
    /// to the rest position.
    pub fn touch_move(&mut self, y: f64) -> Option<SwipeFrame> {
        let gesture = self.gesture?;
        let displacement = (y - gesture.start_y).max(0.0);
        let frame = SwipeFrame::at(displacement, gesture.height);
        self.draw(frame);
        Some(frame)
    }

    /// Ends the gesture. Returns `None` when no gesture was in progress.
    pub fn touch_end(&mut self, y: f64) -> Option<SwipeOutcome> {
        let gesture = self.gesture.take()?;
        let displacement = y - gesture.start_y;

        if gesture.height > 0.0 && displacement >= gesture.height * CLOSE_THRESHOLD {
            Some(SwipeOutcome::Close)
        } else {
            self.draw(SwipeFrame::at(0.0, gesture.height));
            Some(SwipeOutcome::Reset)
        }
    }

    /// Abandons the gesture and any frame still waiting to be drawn.
    pub fn cancel(&mut self) {
        self.gesture = None;
        self.scheduler.cancel();
    }

    fn draw(&self, frame: SwipeFrame) {
        self.scheduler.cancel();
        let render = self.render.clone();
        self.scheduler.schedule(Box::new(move || render(frame)));
    }
}

impl<S: FrameScheduler> Drop for SwipeToClose<S> {
    fn drop(&mut self) {
        self.scheduler.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct ManualFrames {
        pending: RefCell<Option<Box<dyn FnOnce()>>>,
        requested: Cell<usize>,
        cancelled: Cell<usize>,
    }

    impl ManualFrames {
        fn flush(&self) {
            let frame = self.pending.borrow_mut().take();
            if let Some(frame) = frame {
                frame();
            }
        }
    }

    impl FrameScheduler for ManualFrames {
        fn schedule(&self, frame: Box<dyn FnOnce()>) {
            self.requested.set(self.requested.get() + 1);
            *self.pending.borrow_mut() = Some(frame);
        }

        fn cancel(&self) {
            if self.pending.borrow_mut().take().is_some() {
                self.cancelled.set(self.cancelled.get() + 1);
            }
        }
    }

    fn tracker() -> (SwipeToClose<Rc<ManualFrames>>, Rc<ManualFrames>, Rc<RefCell<Vec<SwipeFrame>>>) {
        let frames = Rc::new(ManualFrames::default());
        let drawn = Rc::new(RefCell::new(Vec::new()));
        let sink = drawn.clone();
        let swipe = SwipeToClose::new(frames.clone(), move |frame| sink.borrow_mut().push(frame));
        (swipe, frames, drawn)
    }

    #[test]
    fn test_frame_math() {
        let frame = SwipeFrame::at(50.0, 200.0);
        assert_eq!(frame.translate_y, 50.0);
        assert!((frame.scale - 0.975).abs() < 1e-12);
        assert!((frame.opacity - 0.75).abs() < 1e-12);

        let past = SwipeFrame::at(400.0, 200.0);
        assert!((past.scale - 0.9).abs() < 1e-12);
        assert_eq!(past.opacity, 0.0);

        assert_eq!(SwipeFrame::at(10.0, 0.0).opacity, 1.0);
        assert_eq!(SwipeFrame::rest().transform(), "translateY(0px) scale(1)");
    }

    #[test]
    fn test_moves_coalesce_into_one_frame() {
        let (mut swipe, frames, drawn) = tracker();

        swipe.touch_start(100.0, 200.0);
        swipe.touch_move(110.0);
        swipe.touch_move(120.0);
        swipe.touch_move(130.0);

        assert_eq!(frames.requested.get(), 3);
        assert_eq!(frames.cancelled.get(), 2);

        frames.flush();
        let drawn = drawn.borrow();
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].translate_y, 30.0);
    }

    #[test]
    fn test_upward_swipe_is_clamped() {
        let (mut swipe, _frames, _drawn) = tracker();
        swipe.touch_start(300.0, 200.0);
        let frame = swipe.touch_move(250.0).unwrap();
        assert_eq!(frame.translate_y, 0.0);
        assert_eq!(frame.opacity, 1.0);
    }

    #[test]
    fn test_short_swipe_resets() {
        let (mut swipe, frames, drawn) = tracker();

        swipe.touch_start(0.0, 200.0);
        swipe.touch_move(79.0);
        assert_eq!(swipe.touch_end(79.0), Some(SwipeOutcome::Reset));

        frames.flush();
        assert_eq!(drawn.borrow().last().map(|f| f.translate_y), Some(0.0));
        assert!(!swipe.is_tracking());
    }

    #[test]
    fn test_long_swipe_closes_once() {
        let (mut swipe, _frames, _drawn) = tracker();

        swipe.touch_start(0.0, 200.0);
        swipe.touch_move(80.0);
        assert_eq!(swipe.touch_end(80.0), Some(SwipeOutcome::Close));
        assert_eq!(swipe.touch_end(120.0), None);
    }

    #[test]
    fn test_threshold_grid() {
        for height in [100.0, 250.0, 500.0] {
            for percent in 0..=100 {
                let (mut swipe, _frames, _drawn) = tracker();
                let displacement = height * percent as f64 / 100.0;
                swipe.touch_start(0.0, height);
                let outcome = swipe.touch_end(displacement);
                let expected = if percent >= 40 {
                    SwipeOutcome::Close
                } else {
                    SwipeOutcome::Reset
                };
                assert_eq!(outcome, Some(expected), "height {height}, {percent}%");
            }
        }
    }

    #[test]
    fn test_move_without_start_is_ignored() {
        let (mut swipe, frames, _drawn) = tracker();
        assert_eq!(swipe.touch_move(50.0), None);
        assert_eq!(swipe.touch_end(50.0), None);
        assert_eq!(frames.requested.get(), 0);
    }

    #[test]
    fn test_cancel_drops_pending_frame() {
        let (mut swipe, frames, drawn) = tracker();

        swipe.touch_start(0.0, 200.0);
        swipe.touch_move(40.0);
        swipe.cancel();
        frames.flush();

        assert!(drawn.borrow().is_empty());
        assert_eq!(swipe.touch_move(60.0), None);
    }
}
