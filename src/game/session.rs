//! Session state and the pure transition function
//!
//! `transition` never touches clocks, randomness or the view. Anything with a
//! side effect (arming the countdown, scheduling a refill, flashing a bin) is
//! returned as an [`Effect`] for the controller to carry out.

use std::fmt;

use super::category::BinCategory;
use super::events::GameNotification;
use super::feedback::{Feedback, Outcome};
use super::item::{ItemId, WasteItem};
use super::rules::GameRules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Waiting,
    Playing,
    Paused,
    Ended,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::Waiting => "waiting",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::Ended => "ended",
        };
        f.write_str(name)
    }
}

/// Counters and items of one game
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub phase: GamePhase,
    pub score: u32,
    pub level: u32,
    /// Seconds remaining on the countdown
    pub time_left: u32,
    pub items: Vec<WasteItem>,
    /// Level was cleared and the next batch has not arrived yet
    pub awaiting_batch: bool,
}

impl Session {
    pub fn new(initial_time_secs: u32) -> Self {
        Self {
            phase: GamePhase::Waiting,
            score: 0,
            level: 1,
            time_left: initial_time_secs,
            items: Vec::new(),
            awaiting_batch: false,
        }
    }

    fn fresh_playing(initial_time_secs: u32, batch: Vec<WasteItem>) -> Self {
        Self {
            phase: GamePhase::Playing,
            items: batch,
            ..Self::new(initial_time_secs)
        }
    }

    pub fn item(&self, id: ItemId) -> Option<&WasteItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items_remaining(&self) -> usize {
        self.items.len()
    }
}

/// Inbound trigger, already resolved to data (batches are generated by the caller)
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Start { batch: Vec<WasteItem> },
    PlayAgain { batch: Vec<WasteItem> },
    Pause,
    Resume,
    Reset,
    /// One countdown second elapsed
    Tick,
    Drop { item: ItemId, bin: BinCategory },
    /// Deferred refill after a cleared level
    BatchReady { batch: Vec<WasteItem> },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Start { .. } => "start",
            Event::PlayAgain { .. } => "play_again",
            Event::Pause => "pause",
            Event::Resume => "resume",
            Event::Reset => "reset",
            Event::Tick => "tick",
            Event::Drop { .. } => "drop",
            Event::BatchReady { .. } => "batch_ready",
        }
    }
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    StartTimer,
    StopTimer,
    ScheduleRefill,
    CancelRefill,
    CancelDrag,
    ShowFeedback(Feedback),
    ClearFeedback,
    ShowTip(BinCategory),
    ClearTip,
    Notify(GameNotification),
}

/// Result of applying an event
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub session: Session,
    pub effects: Vec<Effect>,
    /// False when the event was not valid for the current phase
    pub accepted: bool,
}

impl Transition {
    fn ignored(session: Session) -> Self {
        Self {
            session,
            effects: Vec::new(),
            accepted: false,
        }
    }

    fn accepted(session: Session, effects: Vec<Effect>) -> Self {
        Self {
            session,
            effects,
            accepted: true,
        }
    }
}

fn phase_change(from: GamePhase, to: GamePhase) -> Effect {
    Effect::Notify(GameNotification::PhaseChanged { from, to })
}

/// Apply one event to a session
pub fn transition(session: Session, event: Event, rules: &GameRules) -> Transition {
    use GamePhase::*;

    match (session.phase, event) {
        (Waiting, Event::Start { batch }) | (Ended, Event::PlayAgain { batch }) => {
            let from = session.phase;
            let count = batch.len();
            let next = Session::fresh_playing(rules.initial_time_secs, batch);
            Transition::accepted(
                next,
                vec![
                    Effect::CancelRefill,
                    Effect::ClearFeedback,
                    Effect::StartTimer,
                    phase_change(from, Playing),
                    Effect::Notify(GameNotification::BatchSpawned { level: 1, count }),
                ],
            )
        }

        (Playing, Event::Pause) => {
            let next = Session {
                phase: Paused,
                ..session
            };
            Transition::accepted(
                next,
                vec![Effect::StopTimer, Effect::CancelDrag, phase_change(Playing, Paused)],
            )
        }

        (Paused, Event::Resume) => {
            let next = Session {
                phase: Playing,
                ..session
            };
            Transition::accepted(next, vec![Effect::StartTimer, phase_change(Paused, Playing)])
        }

        (from, Event::Reset) => {
            let mut effects = vec![
                Effect::StopTimer,
                Effect::CancelRefill,
                Effect::CancelDrag,
                Effect::ClearFeedback,
                Effect::ClearTip,
            ];
            if from != Waiting {
                effects.push(phase_change(from, Waiting));
            }
            Transition::accepted(Session::new(rules.initial_time_secs), effects)
        }

        (Playing, Event::Tick) if session.time_left > 0 => {
            let mut next = session;
            next.time_left -= 1;
            if next.time_left > 0 {
                return Transition::accepted(next, Vec::new());
            }

            next.phase = Ended;
            let effects = vec![
                Effect::StopTimer,
                Effect::CancelRefill,
                Effect::CancelDrag,
                Effect::Notify(GameNotification::TimeUp {
                    score: next.score,
                    level: next.level,
                }),
                phase_change(Playing, Ended),
            ];
            Transition::accepted(next, effects)
        }

        (Playing, Event::Drop { item, bin }) => {
            let Some(index) = session.items.iter().position(|i| i.id == item) else {
                return Transition::ignored(session);
            };
            evaluate_drop(session, index, bin, rules)
        }

        (Playing | Paused, Event::BatchReady { batch }) if session.awaiting_batch => {
            let count = batch.len();
            let next = Session {
                items: batch,
                awaiting_batch: false,
                ..session
            };
            let level = next.level;
            Transition::accepted(
                next,
                vec![Effect::Notify(GameNotification::BatchSpawned { level, count })],
            )
        }

        (_, _) => Transition::ignored(session),
    }
}

/// Score a drop of `session.items[index]` onto `bin`
fn evaluate_drop(mut session: Session, index: usize, bin: BinCategory, rules: &GameRules) -> Transition {
    let item = &session.items[index];
    let (id, name, category) = (item.id, item.name, item.category);

    if category != bin {
        session.score = session.score.saturating_sub(rules.wrong_penalty);
        let score = session.score;
        return Transition::accepted(
            session,
            vec![
                Effect::ShowFeedback(Feedback::new(bin, Outcome::Wrong)),
                Effect::Notify(GameNotification::ItemMisplaced {
                    item: id,
                    name,
                    bin,
                    score,
                }),
            ],
        );
    }

    session.score = session.score.saturating_add(rules.correct_points);
    session.items.remove(index);

    let mut effects = vec![
        Effect::ShowFeedback(Feedback::new(bin, Outcome::Correct)),
        Effect::ShowTip(category),
        Effect::Notify(GameNotification::ItemSorted {
            item: id,
            name,
            bin,
            score: session.score,
        }),
    ];

    if session.items.is_empty() {
        session.level = session.level.saturating_add(1);
        session.time_left = session.time_left.saturating_add(rules.level_bonus_secs);
        session.awaiting_batch = true;
        effects.push(Effect::ScheduleRefill);
        effects.push(Effect::Notify(GameNotification::LevelUp {
            level: session.level,
            time_left: session.time_left,
        }));
    }

    Transition::accepted(session, effects)
}
