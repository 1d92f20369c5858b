//! Game session controller
//!
//! Owns every piece of mutable game state and is the only thing that mutates
//! it. Inbound triggers come from the view (buttons, item presses), from a
//! [`PointerSource`] and from the scheduler; the view reads back a
//! [`GameSnapshot`] and drains [`GameNotification`]s once per frame.

use glam::Vec2;
use std::time::Duration;

use super::category::BinCategory;
use super::drag::{BinLayout, DragState, ScreenRect};
use super::events::GameNotification;
use super::feedback::Feedback;
use super::input::{PointerEvent, PointerSource};
use super::item::{ItemId, ItemSpawner, WasteItem};
use super::rules::GameRules;
use super::schedule::{Scheduler, TaskHandle};
use super::session::{transition, Effect, Event, GamePhase, Session};

/// Deferred work the controller schedules for itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimedTask {
    /// One countdown second
    Tick,
    /// Next batch after a cleared level
    Refill,
    ExpireFeedback,
}

/// Handles of the pending tasks belonging to the current session
#[derive(Debug, Default)]
struct Lifecycle {
    timer: Option<TaskHandle>,
    refill: Option<TaskHandle>,
    feedback: Option<TaskHandle>,
}

/// Copy of everything the view needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub session: Session,
    pub drag: Option<DragState>,
    pub feedback: Option<Feedback>,
    /// Category whose tip dialog is open
    pub tip: Option<BinCategory>,
}

impl GameSnapshot {
    pub fn dragged_item(&self) -> Option<&WasteItem> {
        self.drag.and_then(|drag| self.session.item(drag.item))
    }

    pub fn is_hovered(&self, bin: BinCategory) -> bool {
        self.drag.and_then(|drag| drag.hovered_bin) == Some(bin)
    }
}

pub struct GameController {
    rules: GameRules,
    session: Session,
    drag: Option<DragState>,
    feedback: Option<Feedback>,
    tip: Option<BinCategory>,
    layout: BinLayout,
    scheduler: Scheduler<TimedTask>,
    lifecycle: Lifecycle,
    spawner: ItemSpawner,
    notifications: Vec<GameNotification>,
}

impl GameController {
    pub fn new(rules: GameRules, spawner: ItemSpawner) -> Self {
        log::info!("Game controller created (item seed {})", spawner.seed());
        Self {
            session: Session::new(rules.initial_time_secs),
            rules,
            drag: None,
            feedback: None,
            tip: None,
            layout: BinLayout::new(),
            scheduler: Scheduler::new(),
            lifecycle: Lifecycle::default(),
            spawner,
            notifications: Vec::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn tip(&self) -> Option<BinCategory> {
        self.tip
    }

    pub fn layout(&self) -> &BinLayout {
        &self.layout
    }

    /// Number of scheduled tasks (countdown, refill, feedback expiry)
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending_count()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            session: self.session.clone(),
            drag: self.drag,
            feedback: self.feedback,
            tip: self.tip,
        }
    }

    /// Take every notification queued since the last call
    pub fn drain_notifications(&mut self) -> Vec<GameNotification> {
        std::mem::take(&mut self.notifications)
    }

    // ----- phase triggers -----

    pub fn start(&mut self) {
        if self.session.phase != GamePhase::Waiting {
            log::debug!("Ignoring start while {}", self.session.phase);
            return;
        }
        let batch = self.new_batch();
        self.dispatch(Event::Start { batch });
    }

    pub fn play_again(&mut self) {
        if self.session.phase != GamePhase::Ended {
            log::debug!("Ignoring play again while {}", self.session.phase);
            return;
        }
        let batch = self.new_batch();
        self.dispatch(Event::PlayAgain { batch });
    }

    pub fn pause(&mut self) {
        self.dispatch(Event::Pause);
    }

    pub fn resume(&mut self) {
        self.dispatch(Event::Resume);
    }

    /// Pause when playing, resume when paused
    pub fn toggle_pause(&mut self) {
        match self.session.phase {
            GamePhase::Playing => self.pause(),
            GamePhase::Paused => self.resume(),
            _ => {}
        }
    }

    pub fn reset(&mut self) {
        self.dispatch(Event::Reset);
    }

    pub fn dismiss_tip(&mut self) {
        self.tip = None;
    }

    // ----- drag gesture -----

    /// Begin dragging an active item. Returns false if the request was ignored.
    pub fn begin_drag(&mut self, item: ItemId) -> bool {
        if self.session.phase != GamePhase::Playing {
            return false;
        }
        if let Some(current) = &self.drag {
            log::debug!("Ignoring drag of {} while {} is dragged", item, current.item);
            return false;
        }
        if self.session.item(item).is_none() {
            log::debug!("Ignoring drag of unknown item {}", item);
            return false;
        }
        log::debug!("Drag started: {}", item);
        self.drag = Some(DragState::new(item));
        true
    }

    pub fn pointer_moved(&mut self, position: Vec2) {
        if let Some(drag) = &mut self.drag {
            drag.track(position, &self.layout);
            log::trace!("Pointer at {:?}, hovering {:?}", position, drag.hovered_bin);
        }
    }

    /// Drop onto the hovered bin, or cancel when no bin is hovered
    pub fn pointer_released(&mut self) {
        let Some(drag) = self.drag else {
            return;
        };
        match drag.hovered_bin {
            Some(bin) => self.drop_on_bin(bin),
            None => self.cancel_drag(),
        }
    }

    /// Evaluate the dragged item against `bin`. No-op without a drag.
    pub fn drop_on_bin(&mut self, bin: BinCategory) {
        let Some(drag) = self.drag.take() else {
            log::debug!("Drop on {} without a dragged item", bin);
            return;
        };
        self.dispatch(Event::Drop {
            item: drag.item,
            bin,
        });
    }

    pub fn cancel_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            log::debug!("Drag cancelled: {}", drag.item);
        }
    }

    /// Drain a pointer source, applying events in delivery order.
    /// Returns the number of events consumed.
    pub fn pump_input(&mut self, source: &mut dyn PointerSource) -> usize {
        let mut consumed = 0;
        while let Some(event) = source.poll() {
            consumed += 1;
            match event {
                PointerEvent::Moved(position) => self.pointer_moved(position),
                PointerEvent::Released => self.pointer_released(),
            }
        }
        consumed
    }

    // ----- bin layout -----

    pub fn set_bin_rect(&mut self, bin: BinCategory, rect: ScreenRect) {
        self.layout.set(bin, rect);
    }

    // ----- time -----

    /// Advance the virtual clock by `dt`, running due tasks one at a time
    pub fn update(&mut self, dt: Duration) {
        let deadline = self.scheduler.now() + dt;
        while let Some((handle, task)) = self.scheduler.pop_due(deadline) {
            self.run_task(handle, task);
        }
        self.scheduler.settle(deadline);
    }

    fn run_task(&mut self, handle: TaskHandle, task: TimedTask) {
        match task {
            TimedTask::Tick => {
                self.dispatch(Event::Tick);
            }
            TimedTask::Refill => {
                if self.lifecycle.refill == Some(handle) {
                    self.lifecycle.refill = None;
                }
                if self.session.awaiting_batch {
                    let batch = self.new_batch();
                    self.dispatch(Event::BatchReady { batch });
                }
            }
            TimedTask::ExpireFeedback => {
                if self.lifecycle.feedback == Some(handle) {
                    self.lifecycle.feedback = None;
                    self.feedback = None;
                }
            }
        }
    }

    fn new_batch(&mut self) -> Vec<WasteItem> {
        self.spawner
            .generate_batch(self.rules.items_per_level, &self.rules.play_area)
    }

    // ----- transition plumbing -----

    fn dispatch(&mut self, event: Event) -> bool {
        let name = event.name();
        let session = std::mem::replace(&mut self.session, Session::new(self.rules.initial_time_secs));
        let result = transition(session, event, &self.rules);
        self.session = result.session;

        if !result.accepted {
            log::debug!("Ignoring {} while {}", name, self.session.phase);
            return false;
        }

        for effect in result.effects {
            self.apply(effect);
        }
        true
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::StartTimer => {
                self.cancel_task(TaskSlot::Timer);
                let handle = self
                    .scheduler
                    .schedule_repeating(self.rules.tick_interval(), TimedTask::Tick);
                self.lifecycle.timer = Some(handle);
            }
            Effect::StopTimer => self.cancel_task(TaskSlot::Timer),
            Effect::ScheduleRefill => {
                self.cancel_task(TaskSlot::Refill);
                let handle = self
                    .scheduler
                    .schedule_once(self.rules.refill_delay(), TimedTask::Refill);
                self.lifecycle.refill = Some(handle);
            }
            Effect::CancelRefill => self.cancel_task(TaskSlot::Refill),
            Effect::CancelDrag => self.cancel_drag(),
            Effect::ShowFeedback(feedback) => {
                self.cancel_task(TaskSlot::Feedback);
                self.feedback = Some(feedback);
                let handle = self
                    .scheduler
                    .schedule_once(self.rules.feedback_duration(), TimedTask::ExpireFeedback);
                self.lifecycle.feedback = Some(handle);
            }
            Effect::ClearFeedback => {
                self.cancel_task(TaskSlot::Feedback);
                self.feedback = None;
            }
            Effect::ShowTip(category) => self.tip = Some(category),
            Effect::ClearTip => self.tip = None,
            Effect::Notify(notification) => {
                log_notification(&notification);
                self.notifications.push(notification);
            }
        }
    }

    fn cancel_task(&mut self, slot: TaskSlot) {
        let handle = match slot {
            TaskSlot::Timer => self.lifecycle.timer.take(),
            TaskSlot::Refill => self.lifecycle.refill.take(),
            TaskSlot::Feedback => self.lifecycle.feedback.take(),
        };
        if let Some(handle) = handle {
            self.scheduler.cancel(handle);
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum TaskSlot {
    Timer,
    Refill,
    Feedback,
}

fn log_notification(notification: &GameNotification) {
    match notification {
        GameNotification::PhaseChanged { from, to } => log::info!("Phase: {} -> {}", from, to),
        GameNotification::ItemSorted { name, bin, score, .. } => {
            log::debug!("{} sorted into {} (score {})", name, bin, score)
        }
        GameNotification::ItemMisplaced { name, bin, score, .. } => {
            log::debug!("{} misplaced into {} (score {})", name, bin, score)
        }
        GameNotification::LevelUp { level, time_left } => {
            log::info!("Level {} reached, {}s left", level, time_left)
        }
        GameNotification::BatchSpawned { level, count } => {
            log::debug!("Spawned {} items for level {}", count, level)
        }
        GameNotification::TimeUp { score, level } => {
            log::info!("Time up: score {} at level {}", score, level)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::feedback::Outcome;
    use crate::game::input::QueuedPointer;

    const SECOND: Duration = Duration::from_secs(1);

    fn controller() -> GameController {
        let mut controller = GameController::new(GameRules::default(), ItemSpawner::new(2024));
        for (i, bin) in BinCategory::ALL.iter().enumerate() {
            let min = Vec2::new(i as f32 * 200.0, 600.0);
            controller.set_bin_rect(*bin, ScreenRect::from_min_size(min, Vec2::new(150.0, 150.0)));
        }
        controller
    }

    fn bin_center(controller: &GameController, bin: BinCategory) -> Vec2 {
        let rect = controller.layout().get(bin).unwrap();
        (rect.min + rect.max) / 2.0
    }

    fn first_item(controller: &GameController) -> WasteItem {
        controller.session().items[0].clone()
    }

    fn wrong_bin(category: BinCategory) -> BinCategory {
        *BinCategory::ALL.iter().find(|b| **b != category).unwrap()
    }

    #[test]
    fn test_start_spawns_batch_and_arms_timer() {
        let mut c = controller();
        c.start();
        assert_eq!(c.phase(), GamePhase::Playing);
        assert_eq!(c.session().items_remaining(), 8);
        assert_eq!(c.pending_tasks(), 1);

        c.update(SECOND * 3);
        assert_eq!(c.session().time_left, 177);
    }

    #[test]
    fn test_pause_stops_countdown() {
        let mut c = controller();
        c.start();
        c.update(SECOND * 2);
        c.pause();
        c.update(SECOND * 10);
        assert_eq!(c.session().time_left, 178);
        assert_eq!(c.pending_tasks(), 0);

        c.resume();
        c.update(Duration::from_millis(999));
        assert_eq!(c.session().time_left, 178);
        c.update(Duration::from_millis(1));
        assert_eq!(c.session().time_left, 177);
    }

    #[test]
    fn test_drag_and_release_over_correct_bin() {
        let mut c = controller();
        c.start();
        let item = first_item(&c);
        let target = bin_center(&c, item.category);

        assert!(c.begin_drag(item.id));
        let mut input = QueuedPointer::new();
        input.move_to(10.0, 10.0).move_to(target.x, target.y).release();
        assert_eq!(c.pump_input(&mut input), 3);

        assert!(c.drag().is_none());
        assert_eq!(c.session().score, 10);
        assert!(c.session().item(item.id).is_none());
        assert_eq!(c.tip(), Some(item.category));
        assert_eq!(c.feedback(), Some(Feedback::new(item.category, Outcome::Correct)));
    }

    #[test]
    fn test_release_outside_bins_cancels() {
        let mut c = controller();
        c.start();
        let item = first_item(&c);

        c.begin_drag(item.id);
        c.pointer_moved(Vec2::new(5.0, 5.0));
        assert_eq!(c.drag().unwrap().hovered_bin, None);
        c.pointer_released();

        assert!(c.drag().is_none());
        assert_eq!(c.session().score, 0);
        assert_eq!(c.session().items_remaining(), 8);
        assert_eq!(c.feedback(), None);
    }

    #[test]
    fn test_hover_tracks_pointer() {
        let mut c = controller();
        c.start();
        let item = first_item(&c);
        c.begin_drag(item.id);

        let glass = bin_center(&c, BinCategory::Glass);
        c.pointer_moved(glass);
        assert!(c.snapshot().is_hovered(BinCategory::Glass));
        c.pointer_moved(Vec2::new(glass.x, 0.0));
        assert!(!c.snapshot().is_hovered(BinCategory::Glass));
    }

    #[test]
    fn test_second_drag_ignored() {
        let mut c = controller();
        c.start();
        let a = c.session().items[0].id;
        let b = c.session().items[1].id;

        assert!(c.begin_drag(a));
        assert!(!c.begin_drag(b));
        assert_eq!(c.drag().unwrap().item, a);
    }

    #[test]
    fn test_drag_requires_playing() {
        let mut c = controller();
        assert!(!c.begin_drag(ItemId(0)));
        c.start();
        c.pause();
        let item = first_item(&c);
        assert!(!c.begin_drag(item.id));
    }

    #[test]
    fn test_drop_without_drag_is_noop() {
        let mut c = controller();
        c.start();
        let before = c.snapshot();
        c.drop_on_bin(BinCategory::Wet);
        c.pointer_released();
        assert_eq!(c.snapshot(), before);
    }

    #[test]
    fn test_wrong_drop_keeps_item_and_feedback_expires() {
        let mut c = controller();
        c.start();
        let item = first_item(&c);
        let bin = wrong_bin(item.category);

        c.begin_drag(item.id);
        c.drop_on_bin(bin);
        assert_eq!(c.session().score, 0);
        assert_eq!(c.session().item(item.id), Some(&item));
        assert_eq!(c.feedback(), Some(Feedback::new(bin, Outcome::Wrong)));
        assert_eq!(c.tip(), None);

        c.update(Duration::from_millis(999));
        assert!(c.feedback().is_some());
        c.update(Duration::from_millis(1));
        assert!(c.feedback().is_none());
    }

    #[test]
    fn test_newer_feedback_gets_full_duration() {
        let mut c = controller();
        c.start();
        let item = first_item(&c);
        let bin = wrong_bin(item.category);

        c.begin_drag(item.id);
        c.drop_on_bin(bin);
        c.update(Duration::from_millis(600));

        c.begin_drag(item.id);
        c.drop_on_bin(bin);
        c.update(Duration::from_millis(600));
        assert!(c.feedback().is_some());
        c.update(Duration::from_millis(400));
        assert!(c.feedback().is_none());
    }

    #[test]
    fn test_pause_cancels_drag() {
        let mut c = controller();
        c.start();
        let item = first_item(&c);
        c.begin_drag(item.id);
        c.pause();
        assert!(c.drag().is_none());
    }

    #[test]
    fn test_clear_level_then_refill() {
        let mut c = controller();
        c.start();

        while let Some(item) = c.session().items.first().cloned() {
            c.begin_drag(item.id);
            c.drop_on_bin(item.category);
        }
        assert_eq!(c.session().level, 2);
        assert_eq!(c.session().score, 80);
        assert_eq!(c.session().time_left, 210);
        assert!(c.session().awaiting_batch);

        c.update(Duration::from_millis(1499));
        assert_eq!(c.session().items_remaining(), 0);
        c.update(Duration::from_millis(1));
        assert_eq!(c.session().items_remaining(), 8);
        assert_eq!(c.session().level, 2);

        // The countdown kept running during the refill delay
        assert_eq!(c.session().time_left, 209);
    }

    #[test]
    fn test_reset_during_refill_delay_cancels_refill() {
        let mut c = controller();
        c.start();
        while let Some(item) = c.session().items.first().cloned() {
            c.begin_drag(item.id);
            c.drop_on_bin(item.category);
        }
        c.reset();
        assert_eq!(c.pending_tasks(), 0);

        c.update(SECOND * 5);
        assert_eq!(c.phase(), GamePhase::Waiting);
        assert_eq!(c.session().items_remaining(), 0);

        // A fresh session only receives its own batch
        c.start();
        c.update(SECOND * 2);
        assert_eq!(c.session().items_remaining(), 8);
        assert_eq!(c.session().level, 1);
    }

    #[test]
    fn test_timeout_ends_and_cancels_everything() {
        let rules = GameRules {
            initial_time_secs: 3,
            ..GameRules::default()
        };
        let mut c = GameController::new(rules, ItemSpawner::new(5));
        c.start();
        let item = first_item(&c);
        c.begin_drag(item.id);

        c.update(SECOND * 10);
        assert_eq!(c.phase(), GamePhase::Ended);
        assert_eq!(c.session().time_left, 0);
        assert!(c.drag().is_none());

        let notes = c.drain_notifications();
        assert!(notes.contains(&GameNotification::TimeUp { score: 0, level: 1 }));
    }

    #[test]
    fn test_timeout_during_refill_discards_batch() {
        let rules = GameRules {
            initial_time_secs: 1,
            level_bonus_secs: 0,
            refill_delay_ms: 1500,
            ..GameRules::default()
        };
        let mut c = GameController::new(rules, ItemSpawner::new(8));
        c.start();
        while let Some(item) = c.session().items.first().cloned() {
            c.begin_drag(item.id);
            c.drop_on_bin(item.category);
        }

        c.update(SECOND * 3);
        assert_eq!(c.phase(), GamePhase::Ended);
        assert_eq!(c.session().items_remaining(), 0);
        assert_eq!(c.pending_tasks(), 0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut c = controller();
        c.start();
        let item = first_item(&c);
        c.begin_drag(item.id);
        c.drop_on_bin(item.category);
        c.update(SECOND * 4);
        let next = first_item(&c);
        c.begin_drag(next.id);

        c.reset();
        let snapshot = c.snapshot();
        assert_eq!(snapshot.session, Session::new(180));
        assert_eq!(snapshot.drag, None);
        assert_eq!(snapshot.feedback, None);
        assert_eq!(snapshot.tip, None);
        assert_eq!(c.pending_tasks(), 0);
    }

    #[test]
    fn test_play_again_only_when_ended() {
        let mut c = controller();
        c.play_again();
        assert_eq!(c.phase(), GamePhase::Waiting);

        c.start();
        c.update(SECOND * 180);
        assert_eq!(c.phase(), GamePhase::Ended);

        c.play_again();
        assert_eq!(c.phase(), GamePhase::Playing);
        assert_eq!(c.session().time_left, 180);
        assert_eq!(c.session().items_remaining(), 8);
    }

    #[test]
    fn test_dismiss_tip() {
        let mut c = controller();
        c.start();
        let item = first_item(&c);
        c.begin_drag(item.id);
        c.drop_on_bin(item.category);
        assert!(c.tip().is_some());
        c.dismiss_tip();
        assert!(c.tip().is_none());
    }

    #[test]
    fn test_notifications_drained_once() {
        let mut c = controller();
        c.start();
        let notes = c.drain_notifications();
        assert!(notes.contains(&GameNotification::PhaseChanged {
            from: GamePhase::Waiting,
            to: GamePhase::Playing,
        }));
        assert!(c.drain_notifications().is_empty());
    }
}
