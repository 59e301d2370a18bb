//! Timer lifecycle for the live dashboard.
//!
//! [`LiveUpdates`] is the only owner of the repeating timer. It keeps the
//! handle in an `Option`, takes and cancels it before anything new is
//! scheduled, and cancels it on drop. At most one timer is alive per
//! controller no matter how cadence and pause are toggled.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use thiserror::Error;

use crate::water::cadence::Cadence;

#[derive(Debug, Error)]
#[error("could not schedule timer: {0}")]
pub struct ScheduleError(pub String);

/// Platform timer facility: repeating and one-shot callbacks that can be
/// cancelled. Cancelling a timer that already fired is a no-op.
pub trait Scheduler {
    type Handle;

    /// Call `tick` every `period`, first call one period from now.
    fn schedule_repeating(
        &mut self,
        period: Duration,
        tick: Rc<dyn Fn()>,
    ) -> Result<Self::Handle, ScheduleError>;

    /// Call `tick` once, `delay` from now.
    fn schedule_once(
        &mut self,
        delay: Duration,
        tick: Rc<dyn Fn()>,
    ) -> Result<Self::Handle, ScheduleError>;

    fn cancel(&mut self, handle: Self::Handle);
}

/// Start/pause/cadence controller around a [`Scheduler`].
pub struct LiveUpdates<S: Scheduler> {
    scheduler: S,
    tick: Rc<dyn Fn()>,
    cadence: Cadence,
    running: bool,
    active: Option<S::Handle>,
}

impl<S: Scheduler> LiveUpdates<S> {
    /// Paused controller; call [`LiveUpdates::start`] to begin ticking.
    pub fn new(scheduler: S, cadence: Cadence, tick: impl Fn() + 'static) -> Self {
        Self {
            scheduler,
            tick: Rc::new(tick),
            cadence,
            running: false,
            active: None,
        }
    }

    pub fn start(&mut self) -> Result<(), ScheduleError> {
        self.running = true;
        self.reschedule()
    }

    pub fn resume(&mut self) -> Result<(), ScheduleError> {
        self.start()
    }

    pub fn pause(&mut self) {
        self.running = false;
        self.cancel_active();
        tracing::debug!("live updates paused");
    }

    /// Flip between running and paused. Returns the new running state.
    pub fn toggle(&mut self) -> Result<bool, ScheduleError> {
        if self.running {
            self.pause();
        } else {
            self.start()?;
        }
        Ok(self.running)
    }

    /// Switch cadence. A running controller restarts its timer at the new
    /// period; a paused one only records the choice.
    pub fn set_cadence(&mut self, cadence: Cadence) -> Result<(), ScheduleError> {
        if cadence == self.cadence {
            return Ok(());
        }
        self.cadence = cadence;
        if self.running {
            self.reschedule()
        } else {
            Ok(())
        }
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a timer is currently registered with the scheduler.
    pub fn is_scheduled(&self) -> bool {
        self.active.is_some()
    }

    fn reschedule(&mut self) -> Result<(), ScheduleError> {
        self.cancel_active();
        match self
            .scheduler
            .schedule_repeating(self.cadence.period(), Rc::clone(&self.tick))
        {
            Ok(handle) => {
                self.active = Some(handle);
                tracing::debug!(cadence = ?self.cadence, "live updates scheduled");
                Ok(())
            }
            Err(e) => {
                self.running = false;
                Err(e)
            }
        }
    }

    fn cancel_active(&mut self) {
        if let Some(handle) = self.active.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<S: Scheduler> Drop for LiveUpdates<S> {
    fn drop(&mut self) {
        self.cancel_active();
    }
}

impl<S: Scheduler> fmt::Debug for LiveUpdates<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveUpdates")
            .field("cadence", &self.cadence)
            .field("running", &self.running)
            .field("scheduled", &self.active.is_some())
            .finish()
    }
}

// ============================================================================
// Virtual-time scheduler
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

struct ManualTimer {
    id: TimerId,
    /// `None` for one-shot timers.
    period: Option<Duration>,
    next_due: Duration,
    tick: Rc<dyn Fn()>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    created: usize,
    timers: Vec<ManualTimer>,
}

/// Deterministic scheduler driven by [`ManualScheduler::advance`].
///
/// Clones share one clock, so a test can hand a clone to [`LiveUpdates`]
/// and keep another to move time forward and inspect live timers.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    pub fn live_timers(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Timers ever registered, cancelled and fired ones included.
    pub fn timers_created(&self) -> usize {
        self.clock.borrow().created
    }

    /// Move time forward, firing every due callback in time order.
    /// Returns how many callbacks fired.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut fired = 0;
        loop {
            let tick = {
                let mut clock = self.clock.borrow_mut();
                let Some(index) = clock
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.next_due <= target)
                    .min_by_key(|(_, t)| (t.next_due, t.id.0))
                    .map(|(index, _)| index)
                else {
                    break;
                };
                let timer = &clock.timers[index];
                let (due, period, tick) = (timer.next_due, timer.period, Rc::clone(&timer.tick));
                match period {
                    Some(period) => clock.timers[index].next_due += period,
                    None => {
                        clock.timers.remove(index);
                    }
                }
                clock.now = due;
                tick
            };
            tick();
            fired += 1;
        }
        self.clock.borrow_mut().now = target;
        fired
    }

    fn register(&self, period: Option<Duration>, delay: Duration, tick: Rc<dyn Fn()>) -> TimerId {
        let mut clock = self.clock.borrow_mut();
        let id = TimerId(clock.next_id);
        clock.next_id += 1;
        clock.created += 1;
        let next_due = clock.now + delay;
        clock.timers.push(ManualTimer {
            id,
            period,
            next_due,
            tick,
        });
        id
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TimerId;

    fn schedule_repeating(
        &mut self,
        period: Duration,
        tick: Rc<dyn Fn()>,
    ) -> Result<TimerId, ScheduleError> {
        let period = period.max(Duration::from_millis(1));
        Ok(self.register(Some(period), period, tick))
    }

    fn schedule_once(
        &mut self,
        delay: Duration,
        tick: Rc<dyn Fn()>,
    ) -> Result<TimerId, ScheduleError> {
        Ok(self.register(None, delay, tick))
    }

    fn cancel(&mut self, handle: TimerId) {
        self.clock.borrow_mut().timers.retain(|t| t.id != handle);
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.clock.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &clock.now)
            .field("live_timers", &clock.timers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const SEC: Duration = Duration::from_secs(1);

    fn counting(
        cadence: Cadence,
    ) -> (ManualScheduler, LiveUpdates<ManualScheduler>, Rc<Cell<u32>>) {
        let clock = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));
        let hits = Rc::clone(&count);
        let live = LiveUpdates::new(clock.clone(), cadence, move || hits.set(hits.get() + 1));
        (clock, live, count)
    }

    #[test]
    fn new_controller_is_idle() {
        let (clock, live, count) = counting(Cadence::Second);
        assert!(!live.is_running());
        assert!(!live.is_scheduled());
        assert_eq!(clock.advance(10 * SEC), 0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn ticks_once_per_period() {
        let (clock, mut live, count) = counting(Cadence::Second);
        live.start().unwrap();
        clock.advance(SEC / 2);
        assert_eq!(count.get(), 0);
        clock.advance(SEC / 2);
        assert_eq!(count.get(), 1);
        clock.advance(5 * SEC);
        assert_eq!(count.get(), 6);
        assert_eq!(clock.live_timers(), 1);
    }

    #[test]
    fn switching_cadence_replaces_timer() {
        let (clock, mut live, count) = counting(Cadence::Second);
        live.start().unwrap();
        clock.advance(Duration::from_millis(1500));
        assert_eq!(count.get(), 1);

        live.set_cadence(Cadence::Minute).unwrap();
        assert_eq!(clock.live_timers(), 1);

        // the per-second timer is gone; the minute timer is a full period out
        clock.advance(59 * SEC);
        assert_eq!(count.get(), 1);
        clock.advance(SEC);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn no_burst_after_switching_back() {
        let (clock, mut live, count) = counting(Cadence::Second);
        live.start().unwrap();
        live.set_cadence(Cadence::Hour).unwrap();
        clock.advance(30 * 60 * SEC);
        assert_eq!(count.get(), 0);

        live.set_cadence(Cadence::Second).unwrap();
        clock.advance(SEC);
        assert_eq!(count.get(), 1);
        assert_eq!(clock.live_timers(), 1);
    }

    #[test]
    fn reselecting_cadence_keeps_timer() {
        let (clock, mut live, _count) = counting(Cadence::Minute);
        live.start().unwrap();
        live.set_cadence(Cadence::Minute).unwrap();
        assert_eq!(clock.timers_created(), 1);
    }

    #[test]
    fn pause_stops_and_resume_restarts() {
        let (clock, mut live, count) = counting(Cadence::Second);
        live.start().unwrap();
        clock.advance(3 * SEC);
        assert_eq!(count.get(), 3);

        live.pause();
        assert!(!live.is_scheduled());
        assert_eq!(clock.live_timers(), 0);
        clock.advance(100 * SEC);
        assert_eq!(count.get(), 3);

        live.resume().unwrap();
        clock.advance(2 * SEC);
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn cadence_change_while_paused_applies_on_resume() {
        let (clock, mut live, count) = counting(Cadence::Second);
        live.start().unwrap();
        live.pause();
        live.set_cadence(Cadence::Minute).unwrap();
        assert_eq!(clock.live_timers(), 0);

        live.resume().unwrap();
        clock.advance(59 * SEC);
        assert_eq!(count.get(), 0);
        clock.advance(SEC);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn toggle_reports_state() {
        let (clock, mut live, _count) = counting(Cadence::Day);
        assert!(live.toggle().unwrap());
        assert_eq!(clock.live_timers(), 1);
        assert!(!live.toggle().unwrap());
        assert_eq!(clock.live_timers(), 0);
    }

    #[test]
    fn never_more_than_one_timer() {
        let (clock, mut live, _count) = counting(Cadence::Second);
        live.start().unwrap();
        for cadence in Cadence::ALL.iter().cycle().take(20) {
            live.set_cadence(*cadence).unwrap();
            assert!(clock.live_timers() <= 1);
            live.toggle().unwrap();
            assert!(clock.live_timers() <= 1);
            live.start().unwrap();
            assert_eq!(clock.live_timers(), 1);
        }
    }

    #[test]
    fn one_shot_fires_once_and_unregisters() {
        let mut clock = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));
        let hits = Rc::clone(&count);
        clock
            .schedule_once(3 * SEC, Rc::new(move || hits.set(hits.get() + 1)))
            .unwrap();
        assert_eq!(clock.live_timers(), 1);

        clock.advance(Duration::from_millis(2999));
        assert_eq!(count.get(), 0);
        clock.advance(Duration::from_millis(1));
        assert_eq!(count.get(), 1);
        assert_eq!(clock.live_timers(), 0);

        clock.advance(10 * SEC);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn cancelling_a_fired_one_shot_is_harmless() {
        let mut clock = ManualScheduler::new();
        let id = clock.schedule_once(SEC, Rc::new(|| {})).unwrap();
        clock.advance(SEC);
        clock.cancel(id);
        assert_eq!(clock.live_timers(), 0);
    }

    #[test]
    fn drop_cancels_timer() {
        let (clock, mut live, count) = counting(Cadence::Second);
        live.start().unwrap();
        drop(live);
        assert_eq!(clock.live_timers(), 0);
        clock.advance(10 * SEC);
        assert_eq!(count.get(), 0);
    }

    struct Refusing;

    impl Scheduler for Refusing {
        type Handle = ();

        fn schedule_repeating(
            &mut self,
            _period: Duration,
            _tick: Rc<dyn Fn()>,
        ) -> Result<(), ScheduleError> {
            Err(ScheduleError("no timers here".into()))
        }

        fn schedule_once(
            &mut self,
            _delay: Duration,
            _tick: Rc<dyn Fn()>,
        ) -> Result<(), ScheduleError> {
            Err(ScheduleError("no timers here".into()))
        }

        fn cancel(&mut self, _handle: ()) {}
    }

    #[test]
    fn failed_schedule_leaves_controller_paused() {
        let mut live = LiveUpdates::new(Refusing, Cadence::Second, || {});
        let err = live.start().unwrap_err();
        assert_eq!(err.to_string(), "could not schedule timer: no timers here");
        assert!(!live.is_running());
        assert!(!live.is_scheduled());
    }
}
