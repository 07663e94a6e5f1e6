//! Integrationstests für das Drag-Verhalten des Range-Sliders:
//! - Drag über die Bar-Grenzen hinaus (Klemmen)
//! - Schrittraster während des Drags
//! - Überholen von left/right mit Rollenwechsel des aktiven Griffs
//! - Listener-Isolation bei Fehlern und Setter-Asymmetrie

use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use glam::Vec2;
use shape_canvas::{RangeSlider, SliderConfig, SliderHandle};

const SURFACE: Vec2 = Vec2::new(416.0, 64.0);

fn slider_with(config: SliderConfig) -> RangeSlider {
    RangeSlider::new(SURFACE, config)
}

/// Pointer-Position auf dem Griff des gegebenen Werts.
fn handle_pos(slider: &RangeSlider, value: f32) -> Vec2 {
    Vec2::new(slider.handle_screen_x(value), slider.handle_screen_y())
}

#[test]
fn test_drag_current_clamps_at_bar_ends() {
    let mut slider = slider_with(SliderConfig::default());

    slider.on_pointer_down(handle_pos(&slider, slider.current()));
    assert_eq!(slider.selected_handle(), Some(SliderHandle::Current));

    slider.on_pointer_move(Vec2::new(10_000.0, slider.handle_screen_y()));
    assert_relative_eq!(slider.current(), 100.0);

    slider.on_pointer_move(Vec2::new(-10_000.0, slider.handle_screen_y()));
    assert_relative_eq!(slider.current(), 0.0);

    slider.on_pointer_up(Vec2::new(-10_000.0, slider.handle_screen_y()));
    assert_eq!(slider.selected_handle(), None);
}

#[test]
fn test_drag_snaps_to_step_grid() {
    let mut slider = slider_with(SliderConfig {
        min: 0.0,
        max: 100.0,
        step: 10.0,
        ..Default::default()
    });

    slider.on_pointer_down(handle_pos(&slider, slider.current()));
    assert_eq!(slider.selected_handle(), Some(SliderHandle::Current));

    // Ziel irgendwo zwischen zwei Rasterpunkten: der nähere gewinnt
    slider.on_pointer_move(Vec2::new(
        slider.handle_screen_x(43.0),
        slider.handle_screen_y(),
    ));
    assert_relative_eq!(slider.current(), 40.0);

    slider.on_pointer_move(Vec2::new(
        slider.handle_screen_x(47.0),
        slider.handle_screen_y(),
    ));
    assert_relative_eq!(slider.current(), 50.0);
}

#[test]
fn test_drag_to_bar_end_stays_within_max_on_midpoint_grid() {
    // max=10 liegt bei step=4 exakt auf der Rastermitte: auch ein Drag
    // ans rechte Bar-Ende darf den Wertebereich nicht verlassen
    let mut slider = slider_with(SliderConfig {
        min: 0.0,
        max: 10.0,
        step: 4.0,
        ..Default::default()
    });

    slider.on_pointer_down(handle_pos(&slider, slider.current()));
    assert_eq!(slider.selected_handle(), Some(SliderHandle::Current));

    slider.on_pointer_move(Vec2::new(10_000.0, slider.handle_screen_y()));
    assert_relative_eq!(slider.current(), 10.0);
    // Griff bleibt auf der Bar
    assert!(slider.handle_screen_x(slider.current()) <= slider.handle_screen_x(slider.max()));
}

#[test]
fn test_left_drag_past_right_swaps_roles() {
    let mut slider = slider_with(SliderConfig::default());
    assert!(slider.set_right(60.0));

    slider.on_pointer_down(handle_pos(&slider, slider.left()));
    assert_eq!(slider.selected_handle(), Some(SliderHandle::Left));

    // Über die rechte Grenze hinausziehen
    slider.on_pointer_move(Vec2::new(
        slider.handle_screen_x(80.0),
        slider.handle_screen_y(),
    ));

    // Werte sind getauscht, der Finger zieht jetzt den Right-Griff
    assert_relative_eq!(slider.left(), 60.0);
    assert_relative_eq!(slider.right(), 80.0);
    assert_eq!(slider.selected_handle(), Some(SliderHandle::Right));

    // Weiterziehen bewegt die rechte Grenze
    slider.on_pointer_move(Vec2::new(
        slider.handle_screen_x(90.0),
        slider.handle_screen_y(),
    ));
    assert_relative_eq!(slider.left(), 60.0);
    assert_relative_eq!(slider.right(), 90.0);
}

#[test]
fn test_right_drag_past_left_swaps_roles() {
    let mut slider = slider_with(SliderConfig::default());
    assert!(slider.set_left(40.0));

    slider.on_pointer_down(handle_pos(&slider, slider.right()));
    assert_eq!(slider.selected_handle(), Some(SliderHandle::Right));

    slider.on_pointer_move(Vec2::new(
        slider.handle_screen_x(20.0),
        slider.handle_screen_y(),
    ));

    assert_relative_eq!(slider.left(), 20.0);
    assert_relative_eq!(slider.right(), 40.0);
    assert_eq!(slider.selected_handle(), Some(SliderHandle::Left));
}

#[test]
fn test_failing_listener_does_not_block_later_listeners() {
    let calls = Rc::new(RefCell::new(Vec::new()));

    let mut slider = slider_with(SliderConfig::default());
    let calls_first = calls.clone();
    slider.add_change_listener(move |_, _, _| {
        calls_first.borrow_mut().push("first");
        anyhow::bail!("absichtlich fehlgeschlagen")
    });
    let calls_second = calls.clone();
    slider.add_change_listener(move |current, _, _| {
        calls_second.borrow_mut().push("second");
        assert_relative_eq!(current, 0.0);
        Ok(())
    });

    slider.on_pointer_down(handle_pos(&slider, slider.current()));
    slider.on_pointer_move(Vec2::new(-10_000.0, slider.handle_screen_y()));
    slider.on_pointer_up(Vec2::new(-10_000.0, slider.handle_screen_y()));

    assert_eq!(*calls.borrow(), vec!["first", "second"]);
}

#[test]
fn test_listeners_fire_per_value_change_during_drag() {
    let changes = Rc::new(RefCell::new(Vec::new()));

    let mut slider = slider_with(SliderConfig::default());
    let changes_inner = changes.clone();
    slider.add_change_listener(move |current, left, right| {
        changes_inner.borrow_mut().push((current, left, right));
        Ok(())
    });

    slider.on_pointer_down(handle_pos(&slider, slider.current()));
    slider.on_pointer_move(Vec2::new(
        slider.handle_screen_x(60.0),
        slider.handle_screen_y(),
    ));
    // Gleiche Position erneut: kein neuer Wert, keine Benachrichtigung
    slider.on_pointer_move(Vec2::new(
        slider.handle_screen_x(60.0),
        slider.handle_screen_y(),
    ));

    assert_eq!(*changes.borrow(), vec![(60.0, 0.0, 100.0)]);
}

#[test]
fn test_programmatic_setters_never_notify() {
    let fired = Rc::new(RefCell::new(0u32));

    let mut slider = slider_with(SliderConfig::default());
    let fired_inner = fired.clone();
    slider.add_change_listener(move |_, _, _| {
        *fired_inner.borrow_mut() += 1;
        Ok(())
    });

    assert!(slider.set_current(80.0));
    assert!(slider.set_left(20.0));
    assert!(slider.set_right(90.0));

    assert_eq!(*fired.borrow(), 0);
    assert!(slider.take_repaint());
}

#[test]
fn test_release_without_move_recomputes_hover() {
    let mut slider = slider_with(SliderConfig::default());

    let pos = handle_pos(&slider, slider.current());
    slider.on_pointer_down(pos);
    assert_eq!(slider.hover_flags(), [false; 3]);

    // Release auf dem Griff: Drag endet, Griff ist wieder gehovert
    slider.on_pointer_up(pos);
    assert_eq!(slider.selected_handle(), None);
    assert_eq!(slider.hover_flags(), [true, false, false]);
}
