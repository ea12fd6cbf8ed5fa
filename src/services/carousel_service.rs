use std::collections::HashMap;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::mpsc;

/// Opaque identifier of a scheduled autoplay timer
pub type TimerId = u64;

/// Autoplay toggle label while the timer is running (it names the action)
pub const AUTOPLAY_RUNNING_LABEL: &str = "Pausar";
/// Autoplay toggle label while stopped
pub const AUTOPLAY_STOPPED_LABEL: &str = "Reproducir";

/// Scheduling port for the autoplay loop.
///
/// The carousel never touches wall-clock time itself; it only asks this
/// port to schedule or cancel a repeating timer. Whoever drives the timer
/// delivers each expiry back through [`CarouselService::tick`].
pub trait AutoplayScheduler {
    /// Schedule a repeating timer and return its identifier
    fn schedule(&mut self, every: Duration) -> TimerId;
    /// Cancel a previously scheduled timer; unknown ids are ignored
    fn cancel(&mut self, id: TimerId);
}

/// Pure render output for one carousel state. Computing it twice for the
/// same index yields the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderFrame {
    /// Horizontal track offset as a percentage, `-(index * 100)`
    pub offset_percent: i32,
    /// Index of the active indicator dot
    pub active: usize,
    pub total: usize,
    pub autoplay_label: &'static str,
}

/// Rotating viewport over a fixed-size ordered set of slides.
///
/// Three input sources converge here: manual controls, the autoplay
/// timer and touch gestures. All transitions run to completion on one
/// logical thread, so the current index and the rendered frame can never
/// be observed mid-update.
pub struct CarouselService<S: AutoplayScheduler> {
    current: usize,
    total: usize,
    interval: Duration,
    swipe_threshold: f32,
    scheduler: S,
    /// Present iff autoplay is running; never more than one live timer
    timer: Option<TimerId>,
    /// Horizontal coordinate captured on touch start, cleared on resolve
    gesture_start: Option<f32>,
}

impl<S: AutoplayScheduler> CarouselService<S> {
    /// Create the controller. Autoplay starts immediately unless the
    /// slide set is empty, in which case every operation is a no-op.
    pub fn new(total: usize, interval: Duration, swipe_threshold: f32, scheduler: S) -> Self {
        let mut carousel = Self {
            current: 0,
            total,
            interval,
            swipe_threshold,
            scheduler,
            timer: None,
            gesture_start: None,
        };

        if total == 0 {
            warn!("Carousel constructed with no slides; all controls disabled");
        } else {
            info!("Carousel ready with {} slides, autoplay active", total);
            carousel.start_autoplay();
        }
        carousel
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_autoplaying(&self) -> bool {
        self.timer.is_some()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Advance to the next slide, wrapping at the end
    pub fn next(&mut self) {
        if self.total == 0 {
            return;
        }
        self.current = (self.current + 1) % self.total;
        debug!("Carousel advanced to slide {}/{}", self.current + 1, self.total);
    }

    /// Go back one slide, wrapping at the start
    pub fn previous(&mut self) {
        if self.total == 0 {
            return;
        }
        self.current = (self.current + self.total - 1) % self.total;
        debug!("Carousel rewound to slide {}/{}", self.current + 1, self.total);
    }

    /// Jump to a slide by index. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.total {
            debug!("Ignoring out-of-range slide index {}", index);
            return;
        }
        self.current = index;
    }

    /// One autoplay expiry, delivered by the timer driver
    pub fn tick(&mut self) {
        self.next();
    }

    /// Start the autoplay loop. A live timer is cancelled first, so two
    /// consecutive starts never leave two timers running.
    pub fn start_autoplay(&mut self) {
        if self.total == 0 {
            return;
        }
        if let Some(old) = self.timer.take() {
            debug!("Replacing live autoplay timer {}", old);
            self.scheduler.cancel(old);
        }
        let id = self.scheduler.schedule(self.interval);
        self.timer = Some(id);
        info!("Autoplay started, timer {} every {:?}", id, self.interval);
    }

    /// Stop the autoplay loop and cancel the pending timer
    pub fn stop_autoplay(&mut self) {
        if let Some(id) = self.timer.take() {
            self.scheduler.cancel(id);
            info!("Autoplay stopped, timer {} cancelled", id);
        }
    }

    /// Dispatch to start or stop based on current state
    pub fn toggle_autoplay(&mut self) {
        if self.timer.is_some() {
            self.stop_autoplay();
        } else {
            self.start_autoplay();
        }
    }

    /// Capture the horizontal coordinate of a touch start
    pub fn touch_start(&mut self, x: f32) {
        self.gesture_start = Some(x);
    }

    /// Resolve a gesture against the swipe threshold. Displacements under
    /// the threshold are taps; a touch end without a matching start does
    /// nothing. The captured start is cleared either way.
    pub fn touch_end(&mut self, x: f32) {
        let Some(start) = self.gesture_start.take() else {
            return;
        };
        let displacement = start - x;
        if displacement.abs() < self.swipe_threshold {
            debug!("Gesture displacement {:.0}px treated as tap", displacement);
            return;
        }
        if displacement > 0.0 {
            self.next();
        } else {
            self.previous();
        }
    }

    /// Compute the render frame for the current state
    pub fn frame(&self) -> RenderFrame {
        RenderFrame {
            offset_percent: -((self.current as i32) * 100),
            active: self.current,
            total: self.total,
            autoplay_label: if self.timer.is_some() {
                AUTOPLAY_RUNNING_LABEL
            } else {
                AUTOPLAY_STOPPED_LABEL
            },
        }
    }
}

/// Production scheduler: each timer is a tokio task emitting expiries
/// over a channel, aborted on cancellation so no zombie tick can land.
pub struct TokioScheduler {
    ticks: mpsc::UnboundedSender<()>,
    tasks: HashMap<TimerId, tokio::task::AbortHandle>,
    next_id: TimerId,
}

impl TokioScheduler {
    /// Create a scheduler emitting expiries on `ticks`. Must be called
    /// from within a tokio runtime.
    pub fn new(ticks: mpsc::UnboundedSender<()>) -> Self {
        Self {
            ticks,
            tasks: HashMap::new(),
            next_id: 0,
        }
    }
}

impl AutoplayScheduler for TokioScheduler {
    fn schedule(&mut self, every: Duration) -> TimerId {
        self.next_id += 1;
        let id = self.next_id;
        let tx = self.ticks.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            // The first interval expiry is immediate; the carousel already
            // shows slide 0, so skip it.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(()).is_err() {
                    break;
                }
            }
        });

        self.tasks.insert(id, handle.abort_handle());
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(handle) = self.tasks.remove(&id) {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test double recording every schedule and cancellation
    #[derive(Default)]
    struct FakeScheduler {
        scheduled: Vec<(TimerId, Duration)>,
        cancelled: Vec<TimerId>,
        next_id: TimerId,
    }

    impl FakeScheduler {
        fn active_timers(&self) -> usize {
            self.scheduled
                .iter()
                .filter(|(id, _)| !self.cancelled.contains(id))
                .count()
        }
    }

    impl AutoplayScheduler for FakeScheduler {
        fn schedule(&mut self, every: Duration) -> TimerId {
            self.next_id += 1;
            self.scheduled.push((self.next_id, every));
            self.next_id
        }

        fn cancel(&mut self, id: TimerId) {
            self.cancelled.push(id);
        }
    }

    const INTERVAL: Duration = Duration::from_millis(5000);

    fn carousel(total: usize) -> CarouselService<FakeScheduler> {
        CarouselService::new(total, INTERVAL, 50.0, FakeScheduler::default())
    }

    #[test]
    fn starts_autoplaying_with_the_configured_cadence() {
        let carousel = carousel(3);
        assert!(carousel.is_autoplaying());
        assert_eq!(carousel.scheduler().active_timers(), 1);
        assert_eq!(carousel.scheduler().scheduled[0].1, INTERVAL);
        assert_eq!(carousel.frame().autoplay_label, AUTOPLAY_RUNNING_LABEL);
    }

    #[test]
    fn navigation_wraps_around_both_ends() {
        let mut carousel = carousel(3);
        carousel.previous();
        assert_eq!(carousel.current_index(), 2);
        carousel.next();
        assert_eq!(carousel.current_index(), 0);
        carousel.go_to(2);
        carousel.next();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut carousel = carousel(3);
        carousel.go_to(1);
        carousel.go_to(3);
        carousel.go_to(99);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn zero_slides_short_circuits_everything() {
        let mut carousel = carousel(0);
        assert!(!carousel.is_autoplaying());
        carousel.next();
        carousel.previous();
        carousel.go_to(0);
        carousel.tick();
        carousel.start_autoplay();
        carousel.touch_start(200.0);
        carousel.touch_end(0.0);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.scheduler().active_timers(), 0);
        assert_eq!(carousel.frame().autoplay_label, AUTOPLAY_STOPPED_LABEL);
    }

    #[test]
    fn double_start_keeps_exactly_one_timer() {
        let mut carousel = carousel(3);
        carousel.start_autoplay();
        assert_eq!(carousel.scheduler().active_timers(), 1);
        assert_eq!(carousel.scheduler().scheduled.len(), 2);

        // One stop fully silences it
        carousel.stop_autoplay();
        assert!(!carousel.is_autoplaying());
        assert_eq!(carousel.scheduler().active_timers(), 0);
    }

    #[test]
    fn stop_cancels_the_pending_timer_once() {
        let mut carousel = carousel(3);
        carousel.stop_autoplay();
        carousel.stop_autoplay();
        assert_eq!(carousel.scheduler().cancelled.len(), 1);
        assert_eq!(carousel.frame().autoplay_label, AUTOPLAY_STOPPED_LABEL);
    }

    #[test]
    fn toggle_dispatches_on_current_state() {
        let mut carousel = carousel(3);
        carousel.toggle_autoplay();
        assert!(!carousel.is_autoplaying());
        carousel.toggle_autoplay();
        assert!(carousel.is_autoplaying());
        assert_eq!(carousel.scheduler().active_timers(), 1);
    }

    #[test]
    fn swipe_below_threshold_is_a_tap() {
        let mut carousel = carousel(3);
        carousel.touch_start(100.0);
        carousel.touch_end(51.0); // 49px
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn swipe_past_threshold_navigates_by_sign() {
        let mut carousel = carousel(3);

        // 51px leftward drag advances
        carousel.touch_start(100.0);
        carousel.touch_end(49.0);
        assert_eq!(carousel.current_index(), 1);

        // 51px rightward drag rewinds
        carousel.touch_start(49.0);
        carousel.touch_end(100.0);
        assert_eq!(carousel.current_index(), 0);

        // Exactly the threshold counts as a swipe
        carousel.touch_start(50.0);
        carousel.touch_end(0.0);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn gesture_start_is_cleared_after_each_resolve() {
        let mut carousel = carousel(3);
        carousel.touch_start(100.0);
        carousel.touch_end(0.0);
        assert_eq!(carousel.current_index(), 1);

        // No lingering start: a second end alone does nothing
        carousel.touch_end(0.0);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn touch_end_without_start_is_a_noop() {
        let mut carousel = carousel(3);
        carousel.touch_end(500.0);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn frame_is_a_pure_function_of_the_index() {
        let mut carousel = carousel(3);
        carousel.go_to(2);
        let first = carousel.frame();
        let second = carousel.frame();
        assert_eq!(first, second);
        assert_eq!(first.offset_percent, -200);
        assert_eq!(first.active, 2);
        assert_eq!(first.total, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_scheduler_emits_and_cancellation_silences() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);

        let id = scheduler.schedule(Duration::from_millis(5000));
        // Paused-clock auto-advance drives the interval to its next expiry
        assert!(rx.recv().await.is_some());

        scheduler.cancel(id);
        let silenced = tokio::time::timeout(Duration::from_secs(60), rx.recv()).await;
        assert!(silenced.is_err(), "cancelled timer must not tick again");
    }
}
