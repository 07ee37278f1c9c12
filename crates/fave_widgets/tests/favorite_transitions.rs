//! Transition behavior of the favorite button as seen by a host:
//! listener calls and render calls, interleaved in one log.

use fave_theme::icons::material;
use fave_theme::{IconColor, IconId, IconKind};
use fave_widgets::favorite::{FavoriteButton, Phase};
use fave_widgets::{IconTransform, RenderSurface};
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug, PartialEq)]
enum Entry {
    Changed(bool),
    Ended(bool),
    Icon(IconId),
    Transform(IconTransform),
}

type Log = Arc<Mutex<Vec<Entry>>>;

/// Surface writing into the same log as the listeners
struct LogSurface(Log);

impl RenderSurface for LogSurface {
    fn set_icon(&mut self, icon: &IconId) {
        self.0.lock().unwrap().push(Entry::Icon(icon.clone()));
    }

    fn set_transform(&mut self, transform: IconTransform) {
        self.0.lock().unwrap().push(Entry::Transform(transform));
    }
}

fn logged_button(favorite: bool) -> (FavoriteButton<LogSurface>, Log) {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let (changes, ends) = (log.clone(), log.clone());
    let button = FavoriteButton::<LogSurface>::builder()
        .favorite(favorite)
        .on_favorite_change(move |_, fav| changes.lock().unwrap().push(Entry::Changed(fav)))
        .on_animation_end(move |_, fav| ends.lock().unwrap().push(Entry::Ended(fav)))
        .build(LogSurface(log.clone()))
        .expect("default configuration is valid");
    log.lock().unwrap().clear();
    (button, log)
}

fn run_to_end(button: &mut FavoriteButton<LogSurface>) {
    let mut frames = 0;
    while button.is_animating() {
        button.update(16.0);
        frames += 1;
        assert!(frames < 1_000, "transition never settled");
    }
}

fn count(log: &Log, pred: impl Fn(&Entry) -> bool) -> usize {
    log.lock().unwrap().iter().filter(|e| pred(e)).count()
}

fn position(log: &Log, pred: impl Fn(&Entry) -> bool) -> Option<usize> {
    log.lock().unwrap().iter().position(pred)
}

fn transforms(log: &Log) -> Vec<IconTransform> {
    log.lock()
        .unwrap()
        .iter()
        .filter_map(|e| match e {
            Entry::Transform(t) => Some(*t),
            _ => None,
        })
        .collect()
}

#[test]
fn repeated_set_favorite_fires_once() {
    let (mut button, log) = logged_button(false);

    button.set_favorite(true);
    run_to_end(&mut button);
    button.set_favorite(true);
    run_to_end(&mut button);

    assert_eq!(count(&log, |e| *e == Entry::Changed(true)), 1);
    assert_eq!(count(&log, |e| *e == Entry::Ended(true)), 1);
}

#[test]
fn reentrant_change_listener_is_ignored() {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let (changes, ends) = (log.clone(), log.clone());
    let mut button = FavoriteButton::<LogSurface>::builder()
        .on_favorite_change(move |b: &mut FavoriteButton<LogSurface>, fav| {
            changes.lock().unwrap().push(Entry::Changed(fav));
            // Both re-asserting and reversing the change must be no-ops
            b.set_favorite(fav);
            b.set_favorite(!fav);
            b.toggle(Some(false));
        })
        .on_animation_end(move |_, fav| ends.lock().unwrap().push(Entry::Ended(fav)))
        .build(LogSurface(log.clone()))
        .unwrap();

    button.toggle(None);
    assert!(button.is_favorite());
    run_to_end(&mut button);

    assert!(button.is_favorite());
    assert_eq!(count(&log, |e| matches!(e, Entry::Changed(_))), 1);
    assert_eq!(count(&log, |e| matches!(e, Entry::Ended(_))), 1);
    assert_eq!(count(&log, |e| *e == Entry::Ended(true)), 1);
}

#[test]
fn reentrant_call_from_unanimated_end_listener_is_ignored() {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let ends = log.clone();
    let mut button = FavoriteButton::<LogSurface>::builder()
        .animate_favorite(false)
        .on_animation_end(move |b: &mut FavoriteButton<LogSurface>, fav| {
            ends.lock().unwrap().push(Entry::Ended(fav));
            b.toggle(None);
        })
        .build(LogSurface(log.clone()))
        .unwrap();

    button.set_favorite(true);
    assert!(button.is_favorite());
    assert_eq!(count(&log, |e| matches!(e, Entry::Ended(_))), 1);
}

#[test]
fn end_listener_of_animated_transition_may_start_another() {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let ends = log.clone();
    let mut button = FavoriteButton::<LogSurface>::builder()
        .on_animation_end(move |b: &mut FavoriteButton<LogSurface>, fav| {
            ends.lock().unwrap().push(Entry::Ended(fav));
            if fav {
                b.set_favorite(false);
            }
        })
        .build(LogSurface(log.clone()))
        .unwrap();

    button.set_favorite(true);
    run_to_end(&mut button);

    // The end listener ran outside the broadcast, so its request went through
    assert!(!button.is_favorite());
    assert_eq!(
        count(&log, |e| matches!(e, Entry::Ended(_))),
        2,
        "{:?}",
        log.lock().unwrap()
    );
}

#[test]
fn suppressed_listener_still_reports_end() {
    let (mut button, log) = logged_button(true);

    button.set_favorite_suppress_listener(false);
    run_to_end(&mut button);

    assert!(!button.is_favorite());
    assert_eq!(count(&log, |e| matches!(e, Entry::Changed(_))), 0);
    assert_eq!(count(&log, |e| matches!(e, Entry::Ended(_))), 1);
    assert_eq!(count(&log, |e| *e == Entry::Ended(false)), 1);
}

#[test]
fn change_precedes_render_and_end_follows_last_frame() {
    for animated in [false, true] {
        let (mut button, log) = logged_button(false);
        button.set_favorite_with(true, animated, false);
        run_to_end(&mut button);

        let entries = log.lock().unwrap().clone();
        assert_eq!(entries.first(), Some(&Entry::Changed(true)), "animated={animated}");
        assert_eq!(entries.last(), Some(&Entry::Ended(true)), "animated={animated}");
    }
}

#[test]
fn favoriting_rotates_forward_and_grows_in() {
    let (mut button, log) = logged_button(false);

    button.toggle(None);
    assert_eq!(button.phase(), Some(Phase::Rotating));
    run_to_end(&mut button);

    let swap = position(&log, |e| *e == Entry::Icon(material::STAR_BLACK)).expect("icon swapped");
    let frames = transforms(&log);
    let before_swap: Vec<_> = log.lock().unwrap()[..swap]
        .iter()
        .filter_map(|e| match e {
            Entry::Transform(t) => Some(*t),
            _ => None,
        })
        .collect();

    // Rotation stage: unscaled, sweeping forward to +360
    assert!(before_swap.iter().all(|t| t.scale_x == 1.0 && t.scale_y == 1.0));
    assert!(before_swap
        .windows(2)
        .all(|w| w[1].rotation_deg >= w[0].rotation_deg));

    // Bounce stage starts small, pops past 1.0, ends at 1.0
    let bounce: Vec<_> = frames[before_swap.len()..].to_vec();
    assert!((bounce[0].scale_x - 0.2).abs() < 1e-6);
    assert!(bounce.iter().all(|t| t.scale_x == t.scale_y));
    assert!(bounce.iter().any(|t| t.scale_x > 1.0));
    assert_eq!(
        bounce.last(),
        Some(&IconTransform {
            rotation_deg: 360.0,
            scale_x: 1.0,
            scale_y: 1.0
        })
    );
}

#[test]
fn unfavoriting_rotates_backward_and_shrinks_in() {
    let (mut button, log) = logged_button(true);
    button.set_animate_unfavorite(true);

    button.toggle(None);
    run_to_end(&mut button);

    let frames = transforms(&log);
    assert!(frames.iter().all(|t| t.rotation_deg <= 0.0));
    assert_eq!(frames.last().map(|t| t.rotation_deg), Some(-360.0));

    let swap = position(&log, |e| *e == Entry::Icon(material::STAR_BORDER_BLACK)).unwrap();
    let first_bounce = log.lock().unwrap()[swap + 1].clone();
    match first_bounce {
        Entry::Transform(t) => assert!((t.scale_x - 1.3).abs() < 1e-6),
        other => panic!("expected a frame after the swap, got {other:?}"),
    }
}

#[test]
fn toggle_scenario_from_unfavorited() {
    let (mut button, log) = logged_button(false);
    button.toggle(None);

    // Nothing asynchronous has happened yet
    assert_eq!(log.lock().unwrap()[0], Entry::Changed(true));
    assert_eq!(count(&log, |e| matches!(e, Entry::Icon(_))), 0);
    assert_eq!(count(&log, |e| matches!(e, Entry::Ended(_))), 0);

    button.update(400.0);
    assert_eq!(button.phase(), Some(Phase::Bouncing));
    assert_eq!(count(&log, |e| matches!(e, Entry::Icon(_))), 1);

    button.update(300.0);
    assert!(!button.is_animating());
    assert_eq!(count(&log, |e| *e == Entry::Ended(true)), 1);

    // No stray frames once settled
    let len = log.lock().unwrap().len();
    button.update(16.0);
    assert_eq!(log.lock().unwrap().len(), len);
}

#[test]
fn unanimated_request_for_current_state_does_nothing() {
    let (mut button, log) = logged_button(true);
    button.set_favorite_with(true, false, false);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn new_request_settles_transition_in_flight() {
    let (mut button, log) = logged_button(false);
    button.set_animate_unfavorite(true);

    button.set_favorite(true);
    button.update(100.0);
    button.set_favorite(false);

    let entries = log.lock().unwrap().clone();
    let ended_true = entries.iter().position(|e| *e == Entry::Ended(true)).unwrap();
    let changed_false = entries.iter().position(|e| *e == Entry::Changed(false)).unwrap();
    assert!(ended_true < changed_false);
    // The settled transition still showed its icon before finishing
    assert!(entries[..ended_true].contains(&Entry::Icon(material::STAR_BLACK)));

    run_to_end(&mut button);
    assert_eq!(count(&log, |e| *e == Entry::Ended(true)), 1);
    assert_eq!(count(&log, |e| *e == Entry::Ended(false)), 1);
}

#[test]
fn config_change_applies_to_next_transition_only() {
    let (mut button, log) = logged_button(false);
    button.set_animate_unfavorite(true);

    button.set_favorite(true);
    button.set_rotation_angle(90).unwrap();
    run_to_end(&mut button);
    assert_eq!(transforms(&log).last().map(|t| t.rotation_deg), Some(360.0));

    button.set_favorite(false);
    run_to_end(&mut button);
    assert_eq!(transforms(&log).last().map(|t| t.rotation_deg), Some(-90.0));
}

#[test]
fn icon_change_mid_flight_keeps_captured_icon() {
    let (mut button, log) = logged_button(false);
    button.set_favorite(true);
    button.set_favorite_icon(IconId::from_static("replacement"));
    run_to_end(&mut button);

    assert!(log
        .lock()
        .unwrap()
        .contains(&Entry::Icon(material::STAR_BLACK)));
    assert!(!log
        .lock()
        .unwrap()
        .contains(&Entry::Icon(IconId::from_static("replacement"))));
}

#[test]
fn icon_refresh_during_transition_lands_when_it_ends() {
    let (mut button, log) = logged_button(false);
    button.set_favorite(true);
    button.update(100.0);

    button.set_theme(IconColor::White, IconKind::Heart);
    button.refresh_icon();
    // The transition still owns the icon until it settles
    assert_eq!(count(&log, |e| matches!(e, Entry::Icon(_))), 0);

    run_to_end(&mut button);

    let entries = log.lock().unwrap().clone();
    let icons: Vec<_> = entries
        .iter()
        .filter_map(|e| match e {
            Entry::Icon(icon) => Some(icon.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(icons, vec![material::STAR_BLACK, material::HEART_WHITE]);

    // Shown after the last frame, before the end listener
    let refreshed = position(&log, |e| *e == Entry::Icon(material::HEART_WHITE)).unwrap();
    assert!(matches!(entries[refreshed - 1], Entry::Transform(_)));
    assert_eq!(entries[refreshed + 1], Entry::Ended(true));

    // Nothing left over for the next transition
    log.lock().unwrap().clear();
    button.set_favorite(false);
    assert_eq!(
        count(&log, |e| *e == Entry::Icon(material::HEART_BORDER_WHITE)),
        1
    );
}

#[test]
fn very_long_rotation_still_completes() {
    let (mut button, log) = logged_button(false);
    button.set_rotation_duration(268_435_500).unwrap();
    button.set_favorite(true);

    // 2^28 ms in; a 16 ms frame is below f32 resolution from here on
    button.update(268_435_456.0);
    assert_eq!(button.phase(), Some(Phase::Rotating));
    for _ in 0..3 {
        button.update(16.0);
    }
    assert_eq!(button.phase(), Some(Phase::Bouncing));

    run_to_end(&mut button);
    assert_eq!(count(&log, |e| *e == Entry::Ended(true)), 1);
}

#[test]
fn zero_length_rotation_swaps_icon_with_first_frame() {
    let (mut button, log) = logged_button(false);
    button.set_rotation_duration(0).unwrap();
    button.set_favorite(true);

    let entries = log.lock().unwrap().clone();
    assert_eq!(entries[0], Entry::Changed(true));
    assert_eq!(entries[1], Entry::Icon(material::STAR_BLACK));
    assert!(matches!(entries[2], Entry::Transform(t) if (t.scale_x - 0.2).abs() < 1e-6));
}
