//! Integration tests for the button's interaction state machine.
//!
//! Buttons here are built without scanning system fonts and with a font
//! path that does not exist, so they always run on the fallback font.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use glow_button::prelude::*;
use glow_button::{DispatchResult, FontConfig};
use parking_lot::Mutex;

const INSIDE: Point = Point::new(100.0, 30.0);
const OUTSIDE: Point = Point::new(500.0, 500.0);

fn test_config() -> ButtonConfig {
    ButtonConfig::new()
        .font_path(":/fonts/Missing.ttf")
        .font_config(FontConfig::new().load_system_fonts(false))
}

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("glow_button=debug")
        .try_init();
}

fn button() -> ButtonWidget {
    setup();
    ButtonWidget::with_config("Go", 14, 200, 60, test_config())
}

fn counter(signal: &Signal<()>) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = count.clone();
    signal.connect(move |_| {
        count_clone.fetch_add(1, Ordering::SeqCst);
    });
    count
}

#[test]
fn construction_matches_defaults() {
    let button = button();

    assert_eq!(button.state(), Interaction::Idle);
    assert_eq!(button.visible_style(), &StylePresets::default().default);
    assert_eq!(button.glow().level, 0.1);
    assert_eq!(button.shadow().radius, 12.0);
    assert_eq!(button.shadow().spread, 0.4);
    assert_eq!(button.shadow().color.to_rgb8(), [109, 110, 193]);
    assert_eq!(button.shadow().input, *button.glow());
    assert_eq!(button.size_hint(), Size::new(200.0, 60.0));
    assert_eq!(button.font().size(), 14.0);
    assert_eq!(button.cursor(), CursorShape::Arrow);
}

#[test]
fn enter_down_up_ends_hovered_with_high_shadow() {
    let mut button = button();

    button.handle_trigger(PointerTrigger::Enter);
    button.handle_trigger(PointerTrigger::Down);
    button.handle_trigger(PointerTrigger::Up);

    assert_eq!(button.state(), Interaction::Hovered);
    assert_eq!(button.visible_style(), &button.presets().hovered);
    assert_eq!(button.shadow().spread, 0.7);
    assert_eq!(button.shadow().color.a, 0.5);
    assert_eq!(button.glow().level, 0.2);
}

#[test]
fn glow_is_untouched_by_press_and_release() {
    let mut button = button();

    button.handle_trigger(PointerTrigger::Enter);
    let hovered_glow = button.glow().level;
    button.handle_trigger(PointerTrigger::Down);
    assert_eq!(button.glow().level, hovered_glow);
    button.handle_trigger(PointerTrigger::Up);
    assert_eq!(button.glow().level, hovered_glow);

    button.handle_trigger(PointerTrigger::Exit);
    button.handle_trigger(PointerTrigger::Down);
    assert_eq!(button.glow().level, 0.1);
}

#[test]
fn every_sequence_follows_the_transition_table() {
    let triggers = PointerTrigger::ALL;

    for first in triggers {
        for second in triggers {
            for third in triggers {
                let mut button = button();
                for trigger in [first, second, third] {
                    let before = button.state();
                    let after = button.handle_trigger(trigger);
                    let effects = trigger.effects();

                    assert_eq!(after, before.transition(trigger));
                    assert_eq!(button.state(), after);
                    assert_eq!(button.visible_style(), &effects.style.select(button.presets()));
                    if let Some(cursor) = effects.cursor {
                        assert_eq!(button.cursor(), cursor);
                    }
                }
                assert_eq!(button.state(), Interaction::Idle.transition(third));
            }
        }
    }
}

#[test]
fn repeated_enter_is_idempotent() {
    let mut button = button();
    let changes = Arc::new(AtomicUsize::new(0));
    let changes_clone = changes.clone();
    button.state_changed.connect(move |_| {
        changes_clone.fetch_add(1, Ordering::SeqCst);
    });

    button.handle_trigger(PointerTrigger::Enter);
    let visuals = button.visuals();
    button.handle_trigger(PointerTrigger::Enter);

    assert_eq!(button.visuals(), visuals);
    assert_eq!(changes.load(Ordering::SeqCst), 1);
}

#[test]
fn state_changed_reports_each_new_state() {
    let mut button = button();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    button.state_changed.connect(move |state| {
        seen_clone.lock().push(*state);
    });

    button.handle_trigger(PointerTrigger::Enter);
    button.handle_trigger(PointerTrigger::Down);
    button.handle_trigger(PointerTrigger::Up);
    button.handle_trigger(PointerTrigger::Exit);

    assert_eq!(
        *seen.lock(),
        vec![
            Interaction::Hovered,
            Interaction::Pressed,
            Interaction::Hovered,
            Interaction::Idle,
        ]
    );
}

#[test]
fn shadow_attributes_take_effect_on_next_enter() {
    let mut button = button();
    button.set_shadow_attributes(6.0, 30.0, 0.2, 0.9, [10, 20, 30]);

    assert_eq!(button.shadow().radius, 12.0);
    assert_eq!(button.shadow().spread, 0.4);

    button.handle_trigger(PointerTrigger::Enter);
    assert_eq!(button.shadow().radius, 30.0);
    assert_eq!(button.shadow().spread, 0.9);
    assert_eq!(button.shadow().color.to_rgb8(), [10, 20, 30]);
    assert_eq!(button.shadow().color.a, 0.5);
}

#[test]
fn style_sheets_replaced_while_pressed_show_default() {
    let mut button = button();
    button.handle_trigger(PointerTrigger::Down);

    let presets = StylePresets::from_base(Color::BLACK, Color::WHITE, 2.0);
    button.set_style_sheets(presets.default, presets.hovered, presets.pressed);

    assert_eq!(button.state(), Interaction::Pressed);
    assert_eq!(button.visible_style(), &presets.default);
    assert_eq!(button.control().applied_style(), Some(&presets.default));
}

#[test]
fn click_requires_press_and_release_inside() {
    let mut button = button();
    let clicks = counter(&button.clicked);

    button.handle_event(&mut PointerEvent::enter(INSIDE));
    button.handle_event(&mut PointerEvent::press(INSIDE));
    button.handle_event(&mut PointerEvent::release(INSIDE));
    assert_eq!(clicks.load(Ordering::SeqCst), 1);

    button.handle_event(&mut PointerEvent::press(INSIDE));
    button.handle_event(&mut PointerEvent::release(OUTSIDE));
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert_eq!(button.state(), Interaction::Hovered);
}

#[test]
fn press_outside_is_ignored() {
    let mut button = button();
    let clicks = counter(&button.clicked);

    let result = button.handle_event(&mut PointerEvent::press(OUTSIDE));
    assert_eq!(result, DispatchResult::Ignored);
    assert_eq!(button.state(), Interaction::Idle);

    let result = button.handle_event(&mut PointerEvent::release(INSIDE));
    assert_eq!(result, DispatchResult::Ignored);
    assert_eq!(clicks.load(Ordering::SeqCst), 0);
}

#[test]
fn moves_synthesize_enter_and_exit() {
    let mut button = button();

    let result = button.handle_event(&mut PointerEvent::moved(INSIDE));
    assert!(result.was_handled());
    assert_eq!(button.state(), Interaction::Hovered);
    assert_eq!(button.cursor(), CursorShape::Hand);

    let result = button.handle_event(&mut PointerEvent::moved(Point::new(101.0, 31.0)));
    assert_eq!(result, DispatchResult::Ignored);

    button.handle_event(&mut PointerEvent::moved(OUTSIDE));
    assert_eq!(button.state(), Interaction::Idle);
    assert_eq!(button.cursor(), CursorShape::Arrow);
}

#[test]
fn right_button_does_not_click() {
    use glow_button::{MousePressEvent, MouseReleaseEvent};

    let mut button = button();
    let clicks = counter(&button.clicked);

    button.handle_event(&mut PointerEvent::Press(MousePressEvent::new(
        MouseButton::Right,
        INSIDE,
    )));
    assert_eq!(button.state(), Interaction::Pressed);
    button.handle_event(&mut PointerEvent::Release(MouseReleaseEvent::new(
        MouseButton::Right,
        INSIDE,
    )));

    assert_eq!(button.state(), Interaction::Hovered);
    assert_eq!(clicks.load(Ordering::SeqCst), 0);
}

#[test]
fn right_click_during_left_press_keeps_left_click() {
    use glow_button::{MousePressEvent, MouseReleaseEvent};

    let mut button = button();
    let clicks = counter(&button.clicked);

    button.handle_event(&mut PointerEvent::enter(INSIDE));
    button.handle_event(&mut PointerEvent::press(INSIDE));
    button.handle_event(&mut PointerEvent::Press(MousePressEvent::new(
        MouseButton::Right,
        INSIDE,
    )));
    button.handle_event(&mut PointerEvent::Release(MouseReleaseEvent::new(
        MouseButton::Right,
        INSIDE,
    )));
    assert_eq!(clicks.load(Ordering::SeqCst), 0);

    let result = button.handle_event(&mut PointerEvent::release(INSIDE));
    assert_eq!(result, DispatchResult::Accepted);
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert_eq!(button.state(), Interaction::Hovered);

    // The left press was consumed by that click.
    button.handle_event(&mut PointerEvent::press(INSIDE));
    button.handle_event(&mut PointerEvent::release(INSIDE));
    assert_eq!(clicks.load(Ordering::SeqCst), 2);
}

#[test]
fn drag_out_release_stays_hovered_until_pointer_returns() {
    let mut button = button();

    button.handle_event(&mut PointerEvent::enter(INSIDE));
    button.handle_event(&mut PointerEvent::press(INSIDE));
    button.handle_event(&mut PointerEvent::moved(OUTSIDE));
    assert_eq!(button.state(), Interaction::Idle);

    button.handle_event(&mut PointerEvent::release(OUTSIDE));
    assert_eq!(button.state(), Interaction::Hovered);

    // Already outside, so further moves outside change nothing.
    button.handle_event(&mut PointerEvent::moved(Point::new(400.0, 400.0)));
    assert_eq!(button.state(), Interaction::Hovered);
    assert_eq!(button.cursor(), CursorShape::Arrow);

    button.handle_event(&mut PointerEvent::moved(INSIDE));
    button.handle_event(&mut PointerEvent::moved(OUTSIDE));
    assert_eq!(button.state(), Interaction::Idle);
}

#[test]
fn pick_on_bounds_extends_hit_area_to_shadow() {
    let mut button = button();
    let in_shadow = Point::new(205.0, 30.0);

    button.handle_event(&mut PointerEvent::moved(in_shadow));
    assert_eq!(button.state(), Interaction::Idle);

    button.set_pick_on_bounds(true);
    button.handle_event(&mut PointerEvent::moved(in_shadow));
    assert_eq!(button.state(), Interaction::Hovered);
}

#[test]
fn control_receives_every_transition() {
    let mut button = button();
    let styles_before = button.control().style_applications();
    let effects_before = button.control().effect_applications();

    button.handle_trigger(PointerTrigger::Enter);
    button.handle_trigger(PointerTrigger::Exit);

    assert_eq!(button.control().style_applications(), styles_before + 2);
    assert_eq!(button.control().effect_applications(), effects_before + 2);
    assert_eq!(button.control().applied_effect(), Some(button.shadow()));
}
