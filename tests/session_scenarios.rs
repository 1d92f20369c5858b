//! End-to-end game scenarios driven through the public API
//!
//! The pure `transition` function is exercised with hand-built batches so the
//! item categories are known; the controller tests use seeded spawners and a
//! queued pointer in place of a real window.

use std::time::Duration;

use ecosort::game::catalog::templates_for;
use ecosort::game::{
    transition, BinCategory, Effect, Event, Feedback, GameController, GamePhase, GameRules, ItemId,
    ItemSpawner, Outcome, PlayArea, QueuedPointer, ScreenRect, Session, WasteItem,
};
use glam::Vec2;

const SECOND: Duration = Duration::from_secs(1);

// ============================================================================
// Helpers
// ============================================================================

fn item(id: u64, category: BinCategory) -> WasteItem {
    let template = templates_for(category).next().expect("every category has a template");
    WasteItem::from_template(ItemId(id), template, Vec2::new(100.0, 100.0))
}

fn playing(items: Vec<WasteItem>) -> Session {
    let rules = GameRules::default();
    transition(Session::new(rules.initial_time_secs), Event::Start { batch: items }, &rules).session
}

fn laid_out_controller(seed: u64) -> GameController {
    let mut controller = GameController::new(GameRules::default(), ItemSpawner::new(seed));
    for (i, bin) in BinCategory::ALL.iter().enumerate() {
        let min = Vec2::new(i as f32 * 160.0, 500.0);
        controller.set_bin_rect(*bin, ScreenRect::from_min_size(min, Vec2::new(150.0, 170.0)));
    }
    controller
}

fn clear_level(controller: &mut GameController) {
    while let Some(next) = controller.session().items.first().cloned() {
        assert!(controller.begin_drag(next.id));
        controller.drop_on_bin(next.category);
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_correct_drop_scores_and_shows_tip() {
    let rules = GameRules::default();
    let a = item(1, BinCategory::Wet);
    let session = playing(vec![a.clone(), item(2, BinCategory::Dry)]);

    let result = transition(
        session,
        Event::Drop {
            item: a.id,
            bin: BinCategory::Wet,
        },
        &rules,
    );

    assert!(result.accepted);
    assert_eq!(result.session.score, 10);
    assert!(result.session.item(a.id).is_none());
    assert_eq!(result.session.items_remaining(), 1);
    assert!(result.effects.contains(&Effect::ShowTip(BinCategory::Wet)));
    assert!(result
        .effects
        .contains(&Effect::ShowFeedback(Feedback::new(BinCategory::Wet, Outcome::Correct))));
}

#[test]
fn test_wrong_drop_clamps_score_and_keeps_item() {
    let rules = GameRules::default();
    let b = item(7, BinCategory::Dry);
    let session = playing(vec![b.clone()]);

    let result = transition(
        session,
        Event::Drop {
            item: b.id,
            bin: BinCategory::Glass,
        },
        &rules,
    );

    assert_eq!(result.session.score, 0);
    assert_eq!(result.session.item(b.id), Some(&b));
    assert!(result
        .effects
        .contains(&Effect::ShowFeedback(Feedback::new(BinCategory::Glass, Outcome::Wrong))));
    assert!(!result.effects.iter().any(|e| matches!(e, Effect::ShowTip(_))));
}

#[test]
fn test_last_second_tick_ends_game() {
    let rules = GameRules::default();
    let session = Session {
        time_left: 1,
        ..playing(vec![item(1, BinCategory::Glass)])
    };

    let result = transition(session, Event::Tick, &rules);
    assert_eq!(result.session.time_left, 0);
    assert_eq!(result.session.phase, GamePhase::Ended);
    assert!(result.effects.contains(&Effect::StopTimer));

    // Further ticks are not actionable
    let after = transition(result.session, Event::Tick, &rules);
    assert!(!after.accepted);
    assert_eq!(after.session.time_left, 0);
}

#[test]
fn test_cleared_level_refills_after_delay() {
    let mut controller = laid_out_controller(31);
    controller.start();
    clear_level(&mut controller);

    let session = controller.session();
    assert_eq!(session.level, 2);
    assert_eq!(session.time_left, 180 + 30);
    assert_eq!(session.items_remaining(), 0);

    controller.update(Duration::from_millis(1499));
    assert_eq!(controller.session().items_remaining(), 0);
    controller.update(Duration::from_millis(1));
    assert_eq!(controller.session().items_remaining(), 8);
    assert_eq!(controller.session().level, 2);
}

#[test]
fn test_pointer_drag_into_bin() {
    let mut controller = laid_out_controller(77);
    controller.start();
    let target = controller.session().items[0].clone();
    let rect = controller.layout().get(target.category).expect("bin laid out");
    let center = (rect.min + rect.max) / 2.0;

    assert!(controller.begin_drag(target.id));
    let mut pointer = QueuedPointer::new();
    pointer.move_to(20.0, 20.0).move_to(center.x, center.y).release();
    controller.pump_input(&mut pointer);

    assert!(controller.drag().is_none());
    assert_eq!(controller.session().score, 10);
    assert_eq!(controller.tip(), Some(target.category));
    assert!(controller.session().item(target.id).is_none());
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_time_never_increases_while_playing() {
    let rules = GameRules {
        initial_time_secs: 20,
        ..GameRules::default()
    };
    let mut controller = GameController::new(rules, ItemSpawner::new(4));
    controller.start();

    let mut last = controller.session().time_left;
    for step in 0..60 {
        controller.update(Duration::from_millis(370 + step * 7));
        let now = controller.session().time_left;
        assert!(now <= last);
        last = now;
    }
    assert_eq!(last, 0);
    assert_eq!(controller.phase(), GamePhase::Ended);
}

#[test]
fn test_score_moves_by_fixed_steps() {
    let mut controller = laid_out_controller(99);
    controller.start();

    for round in 0..30 {
        let Some(next) = controller.session().items.first().cloned() else {
            controller.update(SECOND * 2);
            continue;
        };
        let before = controller.session().score;
        controller.begin_drag(next.id);

        let bin = if round % 3 == 0 {
            next.category
        } else {
            *BinCategory::ALL
                .iter()
                .find(|b| **b != next.category)
                .expect("four categories")
        };
        controller.drop_on_bin(bin);

        let after = controller.session().score;
        if bin == next.category {
            assert_eq!(after, before + 10);
        } else {
            assert_eq!(after, before.saturating_sub(5));
        }
    }
}

#[test]
fn test_reset_from_any_phase_is_fresh() {
    let fresh = Session::new(180);
    let mut controller = laid_out_controller(12);

    controller.reset();
    assert_eq!(controller.session(), &fresh);

    controller.start();
    controller.update(SECOND * 5);
    controller.reset();
    assert_eq!(controller.session(), &fresh);

    controller.start();
    controller.pause();
    controller.reset();
    assert_eq!(controller.session(), &fresh);

    controller.start();
    controller.update(SECOND * 200);
    assert_eq!(controller.phase(), GamePhase::Ended);
    controller.reset();
    controller.reset();
    assert_eq!(controller.session(), &fresh);
    assert_eq!(controller.pending_tasks(), 0);
}

#[test]
fn test_generated_batches_unique_and_inside_margin() {
    let area = PlayArea::default();
    let mut spawner = ItemSpawner::new(2718);

    for _ in 0..25 {
        let batch = spawner.generate_batch(8, &area);
        let mut ids: Vec<_> = batch.iter().map(|i| i.id).collect();
        ids.sort_by_key(|id| id.0);
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert!(batch.iter().all(|i| area.contains_spawn(i.position)));
    }
}

#[test]
fn test_one_bonus_per_cleared_level() {
    let mut controller = laid_out_controller(5);
    controller.start();

    for expected_level in 2..=4 {
        let before = controller.session().time_left;
        clear_level(&mut controller);
        assert_eq!(controller.session().level, expected_level);
        assert_eq!(controller.session().time_left, before + 30);

        // Waiting for the refill does not award anything more
        controller.update(Duration::from_millis(1500));
        assert_eq!(controller.session().level, expected_level);
        assert_eq!(controller.session().items_remaining(), 8);
    }
}

#[test]
fn test_reset_during_refill_never_leaks_stale_batch() {
    let mut controller = laid_out_controller(8);
    controller.start();
    clear_level(&mut controller);
    controller.reset();
    controller.start();

    let ids: Vec<_> = controller.session().items.iter().map(|i| i.id).collect();
    controller.update(SECOND * 3);
    let after: Vec<_> = controller.session().items.iter().map(|i| i.id).collect();
    assert_eq!(ids, after);
    assert_eq!(controller.session().level, 1);
}
