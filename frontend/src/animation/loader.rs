use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;

use super::host::TimerHost;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoaderPhase {
    Slam,
    Shake,
    Burst,
    Exit,
    Done,
}

impl LoaderPhase {
    pub const INITIAL: LoaderPhase = LoaderPhase::Slam;

    pub fn next(self) -> Option<LoaderPhase> {
        match self {
            LoaderPhase::Slam => Some(LoaderPhase::Shake),
            LoaderPhase::Shake => Some(LoaderPhase::Burst),
            LoaderPhase::Burst => Some(LoaderPhase::Exit),
            LoaderPhase::Exit => Some(LoaderPhase::Done),
            LoaderPhase::Done => None,
        }
    }

    pub fn is_done(self) -> bool {
        self == LoaderPhase::Done
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LoaderPhase::Slam => "slam",
            LoaderPhase::Shake => "shake",
            LoaderPhase::Burst => "burst",
            LoaderPhase::Exit => "exit",
            LoaderPhase::Done => "done",
        }
    }
}

impl fmt::Display for LoaderPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseStep {
    pub offset_ms: u32,
    pub phase: LoaderPhase,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("phase schedule has no steps")]
    Empty,
    #[error("{phase} at {offset_ms}ms does not come after {previous_ms}ms")]
    NonIncreasingOffset {
        phase: LoaderPhase,
        offset_ms: u32,
        previous_ms: u32,
    },
    #[error("{phase} cannot follow {previous}")]
    OutOfOrderPhase {
        previous: LoaderPhase,
        phase: LoaderPhase,
    },
    #[error("schedule stops at {last} and never reaches done")]
    Unfinished { last: LoaderPhase },
}

/// Validated list of timed transitions: offsets strictly increase and the
/// phases walk the whole sequence from `Slam` to `Done` one step at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseSchedule {
    steps: Vec<PhaseStep>,
}

impl PhaseSchedule {
    pub fn new(steps: Vec<PhaseStep>) -> Result<Self, ScheduleError> {
        let mut previous = LoaderPhase::INITIAL;
        let mut previous_ms = None;
        for step in &steps {
            if let Some(previous_ms) = previous_ms {
                if step.offset_ms <= previous_ms {
                    return Err(ScheduleError::NonIncreasingOffset {
                        phase: step.phase,
                        offset_ms: step.offset_ms,
                        previous_ms,
                    });
                }
            }
            if previous.next() != Some(step.phase) {
                return Err(ScheduleError::OutOfOrderPhase {
                    previous,
                    phase: step.phase,
                });
            }
            previous = step.phase;
            previous_ms = Some(step.offset_ms);
        }
        match steps.last() {
            None => Err(ScheduleError::Empty),
            Some(last) if !last.phase.is_done() => Err(ScheduleError::Unfinished { last: last.phase }),
            Some(_) => Ok(Self { steps }),
        }
    }

    pub fn steps(&self) -> &[PhaseStep] {
        &self.steps
    }

    /// Offset of the final transition, i.e. when the loader reaches `Done`.
    pub fn total_duration_ms(&self) -> u32 {
        self.steps.last().map_or(0, |step| step.offset_ms)
    }

    /// Builds the four-step schedule from `[shake, burst, exit, done]` offsets.
    pub fn from_offsets(offsets: [u32; 4]) -> Result<Self, ScheduleError> {
        let [shake, burst, exit, done] = offsets;
        Self::new(vec![
            PhaseStep { offset_ms: shake, phase: LoaderPhase::Shake },
            PhaseStep { offset_ms: burst, phase: LoaderPhase::Burst },
            PhaseStep { offset_ms: exit, phase: LoaderPhase::Exit },
            PhaseStep { offset_ms: done, phase: LoaderPhase::Done },
        ])
    }

    /// Like `from_offsets`, but a rejected set of offsets is logged and the
    /// built-in timing is used instead.
    pub fn from_offsets_or_default(offsets: [u32; 4]) -> Self {
        Self::from_offsets(offsets).unwrap_or_else(|err| {
            warn!("invalid loader offsets {:?}: {}; using defaults", offsets, err);
            Self::default()
        })
    }

    pub fn configured() -> Self {
        Self::from_offsets_or_default(config::LOADER_STEP_OFFSETS_MS)
    }
}

const FALLBACK_STEP_OFFSETS_MS: [u32; 4] = [300, 700, 1100, 1500];

impl Default for PhaseSchedule {
    fn default() -> Self {
        let [shake, burst, exit, done] = FALLBACK_STEP_OFFSETS_MS;
        Self {
            steps: vec![
                PhaseStep { offset_ms: shake, phase: LoaderPhase::Shake },
                PhaseStep { offset_ms: burst, phase: LoaderPhase::Burst },
                PhaseStep { offset_ms: exit, phase: LoaderPhase::Exit },
                PhaseStep { offset_ms: done, phase: LoaderPhase::Done },
            ],
        }
    }
}

struct PhaseState {
    current: Cell<LoaderPhase>,
    observer: Box<dyn Fn(LoaderPhase)>,
}

impl PhaseState {
    fn advance_to(&self, target: LoaderPhase) {
        let current = self.current.get();
        if current.next() != Some(target) {
            warn!("ignoring loader transition {} -> {}", current, target);
            return;
        }
        debug!("loader phase {} -> {}", current, target);
        self.current.set(target);
        (self.observer)(target);
    }
}

/// Plays a `PhaseSchedule` once. Every transition is registered up front;
/// dropping the machine drops the timer handles, so nothing fires after it
/// is gone.
pub struct PhaseMachine<T: TimerHost> {
    state: Rc<PhaseState>,
    _pending: Vec<T::Handle>,
}

impl<T: TimerHost> PhaseMachine<T> {
    pub fn start(
        host: &T,
        schedule: &PhaseSchedule,
        observer: impl Fn(LoaderPhase) + 'static,
    ) -> Self {
        let state = Rc::new(PhaseState {
            current: Cell::new(LoaderPhase::INITIAL),
            observer: Box::new(observer),
        });
        let pending = schedule
            .steps()
            .iter()
            .map(|step| {
                let state = Rc::clone(&state);
                let target = step.phase;
                host.set_timeout(step.offset_ms, Box::new(move || state.advance_to(target)))
            })
            .collect();
        Self {
            state,
            _pending: pending,
        }
    }

    pub fn phase(&self) -> LoaderPhase {
        self.state.current.get()
    }

    pub fn is_ready(&self) -> bool {
        self.phase().is_done()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoaderStatus {
    pub phase: LoaderPhase,
    pub ready: bool,
}

/// Owns a running `PhaseMachine` until it reports ready, then releases it
/// and keeps only the final status.
pub struct LoaderSlot<T: TimerHost> {
    machine: Option<PhaseMachine<T>>,
    last: LoaderStatus,
}

impl<T: TimerHost> Default for LoaderSlot<T> {
    fn default() -> Self {
        Self {
            machine: None,
            last: LoaderStatus {
                phase: LoaderPhase::INITIAL,
                ready: false,
            },
        }
    }
}

impl<T: TimerHost> LoaderSlot<T> {
    pub fn install(&mut self, machine: PhaseMachine<T>) {
        self.machine = Some(machine);
    }

    /// Drops a machine that has not finished yet, cancelling its timers.
    pub fn clear(&mut self) {
        self.machine = None;
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.machine.is_some()
    }

    pub fn status(&mut self) -> LoaderStatus {
        if let Some(machine) = &self.machine {
            self.last = LoaderStatus {
                phase: machine.phase(),
                ready: machine.is_ready(),
            };
            if self.last.ready {
                debug!("loader finished, releasing phase machine");
                self.machine = None;
            }
        }
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::testing::ManualTimers;
    use std::cell::RefCell;

    fn recording_machine(
        timers: &ManualTimers,
    ) -> (PhaseMachine<ManualTimers>, Rc<RefCell<Vec<(u32, LoaderPhase)>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let machine = PhaseMachine::start(timers, &PhaseSchedule::default(), {
            let seen = Rc::clone(&seen);
            let timers = timers.clone();
            move |phase| seen.borrow_mut().push((timers.now(), phase))
        });
        (machine, seen)
    }

    #[test]
    fn phases_play_in_order_exactly_once() {
        let timers = ManualTimers::default();
        let (machine, seen) = recording_machine(&timers);
        assert_eq!(machine.phase(), LoaderPhase::Slam);

        timers.advance(5_000);

        let phases: Vec<_> = seen.borrow().iter().map(|(_, phase)| *phase).collect();
        assert_eq!(
            phases,
            vec![
                LoaderPhase::Shake,
                LoaderPhase::Burst,
                LoaderPhase::Exit,
                LoaderPhase::Done
            ]
        );
        assert!(machine.is_ready());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn transitions_never_fire_early() {
        let timers = ManualTimers::default();
        let (machine, seen) = recording_machine(&timers);

        timers.advance(299);
        assert_eq!(machine.phase(), LoaderPhase::Slam);
        timers.advance(1);
        assert_eq!(machine.phase(), LoaderPhase::Shake);

        timers.advance(1_200);
        for ((fired_at, _), offset) in seen.borrow().iter().zip(config::LOADER_STEP_OFFSETS_MS) {
            assert!(*fired_at >= offset, "fired at {fired_at} before {offset}");
        }
    }

    #[test]
    fn stalled_clock_still_delivers_every_phase_in_order() {
        let timers = ManualTimers::default();
        let (machine, seen) = recording_machine(&timers);

        // one long stall covering the whole schedule
        timers.advance(10_000);

        assert_eq!(seen.borrow().len(), 4);
        assert!(seen.borrow().windows(2).all(|pair| pair[0].1 < pair[1].1));
        assert!(machine.is_ready());
    }

    #[test]
    fn ready_only_at_done() {
        let timers = ManualTimers::default();
        let (machine, _seen) = recording_machine(&timers);
        let schedule = PhaseSchedule::default();

        timers.advance(schedule.total_duration_ms() - 1);
        assert_eq!(machine.phase(), LoaderPhase::Exit);
        assert!(!machine.is_ready());

        timers.advance(1);
        assert!(machine.is_ready());
    }

    #[test]
    fn dropping_machine_cancels_pending_transitions() {
        let timers = ManualTimers::default();
        let (machine, seen) = recording_machine(&timers);

        timers.advance(500);
        assert_eq!(machine.phase(), LoaderPhase::Shake);
        drop(machine);
        assert_eq!(timers.pending(), 0);

        timers.advance(5_000);
        assert_eq!(*seen.borrow(), vec![(300, LoaderPhase::Shake)]);
    }

    #[test]
    fn default_schedule_is_valid_and_matches_config() {
        let schedule = PhaseSchedule::default();
        assert_eq!(PhaseSchedule::new(schedule.steps().to_vec()), Ok(schedule.clone()));
        assert_eq!(schedule.total_duration_ms(), 1_500);
        assert_eq!(PhaseSchedule::configured(), schedule);
    }

    #[test]
    fn rejected_offsets_fall_back_to_default_timing() {
        let custom = PhaseSchedule::from_offsets_or_default([100, 200, 400, 800]);
        assert_eq!(custom.total_duration_ms(), 800);

        let repeated = [300, 300, 1_100, 1_500];
        assert!(matches!(
            PhaseSchedule::from_offsets(repeated),
            Err(ScheduleError::NonIncreasingOffset { phase: LoaderPhase::Burst, .. })
        ));
        assert_eq!(
            PhaseSchedule::from_offsets_or_default(repeated),
            PhaseSchedule::default()
        );
    }

    #[test]
    fn slot_releases_machine_once_done() {
        let timers = ManualTimers::default();
        let mut slot = LoaderSlot::default();
        assert_eq!(
            slot.status(),
            LoaderStatus { phase: LoaderPhase::Slam, ready: false }
        );

        slot.install(PhaseMachine::start(&timers, &PhaseSchedule::default(), |_| {}));
        timers.advance(1_100);
        assert_eq!(
            slot.status(),
            LoaderStatus { phase: LoaderPhase::Exit, ready: false }
        );
        assert!(slot.is_running());

        timers.advance(400);
        let done = LoaderStatus { phase: LoaderPhase::Done, ready: true };
        assert_eq!(slot.status(), done);
        assert!(!slot.is_running());
        assert_eq!(timers.pending(), 0);
        assert_eq!(slot.status(), done);
    }

    #[test]
    fn clearing_slot_cancels_unfinished_machine() {
        let timers = ManualTimers::default();
        let seen = Rc::new(Cell::new(0));
        let mut slot = LoaderSlot::default();
        slot.install(PhaseMachine::start(&timers, &PhaseSchedule::default(), {
            let seen = Rc::clone(&seen);
            move |_| seen.set(seen.get() + 1)
        }));
        timers.advance(700);
        slot.clear();
        timers.advance(5_000);

        assert_eq!(seen.get(), 2);
        assert_eq!(timers.pending(), 0);
        assert!(!slot.status().ready);
    }

    #[test]
    fn schedule_rejects_bad_steps() {
        assert_eq!(PhaseSchedule::new(vec![]), Err(ScheduleError::Empty));

        let repeated_offset = vec![
            PhaseStep { offset_ms: 300, phase: LoaderPhase::Shake },
            PhaseStep { offset_ms: 300, phase: LoaderPhase::Burst },
        ];
        assert!(matches!(
            PhaseSchedule::new(repeated_offset),
            Err(ScheduleError::NonIncreasingOffset { previous_ms: 300, .. })
        ));

        let skips_burst = vec![
            PhaseStep { offset_ms: 300, phase: LoaderPhase::Shake },
            PhaseStep { offset_ms: 700, phase: LoaderPhase::Exit },
        ];
        assert_eq!(
            PhaseSchedule::new(skips_burst),
            Err(ScheduleError::OutOfOrderPhase {
                previous: LoaderPhase::Shake,
                phase: LoaderPhase::Exit
            })
        );

        let stops_early = vec![PhaseStep { offset_ms: 100, phase: LoaderPhase::Shake }];
        assert_eq!(
            PhaseSchedule::new(stops_early),
            Err(ScheduleError::Unfinished { last: LoaderPhase::Shake })
        );
    }

    #[test]
    fn error_messages_name_the_phases() {
        let err = ScheduleError::OutOfOrderPhase {
            previous: LoaderPhase::Shake,
            phase: LoaderPhase::Exit,
        };
        assert_eq!(err.to_string(), "exit cannot follow shake");
    }
}
