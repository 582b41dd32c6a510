use super::*;
use interface::input::InputTracker;

const LEFT: StrokeSource = StrokeSource::Mouse(MouseButton::Left);

fn pressed_at(tracker: &mut InputTracker,  position: [i32;2]) -> Input {
    tracker.mouse_move(position);
    tracker.mouse_press(MouseButton::Left);
    tracker.frame()
}

#[test]
fn new_stroke_starts_where_pressed() {
    let mut tracker = InputTracker::new();
    let input = pressed_at(&mut tracker, [15, 15]);
    let stroke = Stroke::new(LEFT, &input);
    assert_eq!(stroke.initial_position(), [15, 15]);
    assert_eq!(stroke.current_position(), [15, 15]);
    assert_eq!(stroke.position_diff(), [0, 0]);
    assert!(!stroke.is_released());
    assert_eq!(stroke.dragging_object(), None);
}

#[test]
fn update_follows_the_cursor() {
    let mut tracker = InputTracker::new();
    let mut stroke = Stroke::new(LEFT, &pressed_at(&mut tracker, [15, 15]));
    tracker.mouse_move([20, 45]);
    stroke.update(&tracker.frame());
    assert_eq!(stroke.current_position(), [20, 45]);
    assert_eq!(stroke.position_diff(), [5, 30]);
    assert!(!stroke.is_released());
}

#[test]
fn release_freezes_position() {
    let mut tracker = InputTracker::new();
    let mut stroke = Stroke::new(LEFT, &pressed_at(&mut tracker, [0, 0]));
    tracker.mouse_move([3, 4]);
    tracker.mouse_release(MouseButton::Left);
    stroke.update(&tracker.frame());
    assert!(stroke.is_released());
    assert_eq!(stroke.position_diff(), [3, 4]);

    tracker.mouse_move([100, 100]);
    stroke.update(&tracker.frame());
    assert!(stroke.is_released());
    assert_eq!(stroke.position_diff(), [3, 4]);
}

#[test]
fn released_stays_released_after_new_press() {
    let mut tracker = InputTracker::new();
    let mut stroke = Stroke::new(LEFT, &pressed_at(&mut tracker, [0, 0]));
    tracker.mouse_release(MouseButton::Left);
    stroke.update(&tracker.frame());
    stroke.update(&pressed_at(&mut tracker, [1, 1]));
    assert!(stroke.is_released());
}

#[test]
fn other_button_release_is_ignored() {
    let mut tracker = InputTracker::new();
    tracker.mouse_press(MouseButton::Right);
    let mut stroke = Stroke::new(LEFT, &pressed_at(&mut tracker, [0, 0]));
    tracker.mouse_release(MouseButton::Right);
    stroke.update(&tracker.frame());
    assert!(!stroke.is_released());
}

#[test]
fn button_released_and_pressed_again_ends_the_stroke() {
    let mut tracker = InputTracker::new();
    let mut stroke = Stroke::new(LEFT, &pressed_at(&mut tracker, [0, 0]));
    tracker.mouse_move([7, 2]);
    tracker.mouse_release(MouseButton::Left);
    tracker.mouse_press(MouseButton::Left);
    let input = tracker.frame();
    stroke.update(&input);
    assert!(stroke.is_released());
    assert_eq!(stroke.position_diff(), [7, 2]);
    assert!(LEFT.is_pressed(&input));
}

#[test]
fn dragging_object_is_replaceable() {
    let mut stroke = Stroke::new(LEFT, &Input::default());
    stroke.set_dragging_object(Some(SpriteId(4)));
    assert_eq!(stroke.dragging_object(), Some(SpriteId(4)));
    stroke.set_dragging_object(None);
    assert_eq!(stroke.dragging_object(), None);
}

// =============================================================
// Touch
// =============================================================

#[test]
fn touch_stroke_follows_its_touch() {
    let mut tracker = InputTracker::new();
    tracker.touch_start(TouchId(1), [5, 5]);
    tracker.touch_start(TouchId(2), [50, 50]);
    let source = StrokeSource::Touch(TouchId(1));
    let mut stroke = Stroke::new(source, &tracker.frame());
    assert_eq!(stroke.initial_position(), [5, 5]);

    tracker.touch_move(TouchId(1), [6, 8]);
    tracker.touch_move(TouchId(2), [70, 70]);
    stroke.update(&tracker.frame());
    assert_eq!(stroke.position_diff(), [1, 3]);

    tracker.touch_end(TouchId(1));
    stroke.update(&tracker.frame());
    assert!(stroke.is_released());
    assert_eq!(stroke.position_diff(), [1, 3]);
}

#[test]
fn vanished_touch_counts_as_released() {
    let mut tracker = InputTracker::new();
    tracker.touch_start(TouchId(9), [5, 5]);
    let source = StrokeSource::Touch(TouchId(9));
    let mut stroke = Stroke::new(source, &tracker.frame());

    // the release edge was missed, the touch is just gone
    stroke.update(&InputTracker::new().frame());
    assert!(stroke.is_released());
    assert_eq!(stroke.current_position(), [5, 5]);
}

#[test]
fn unknown_touch_is_released_at_once() {
    let source = StrokeSource::Touch(TouchId(3));
    let input = Input::default();
    assert_eq!(source.position(&input), None);
    assert!(source.is_just_released(&input));
}

#[test]
fn reused_touch_id_releases_where_the_old_touch_ended() {
    let mut tracker = InputTracker::new();
    tracker.touch_start(TouchId(1), [5, 5]);
    let source = StrokeSource::Touch(TouchId(1));
    let mut stroke = Stroke::new(source, &tracker.frame());

    tracker.touch_move(TouchId(1), [15, 5]);
    tracker.touch_end(TouchId(1));
    tracker.touch_start(TouchId(1), [300, 300]);
    let input = tracker.frame();
    stroke.update(&input);
    assert!(stroke.is_released());
    assert_eq!(stroke.current_position(), [15, 5]);
    assert_eq!(stroke.position_diff(), [10, 0]);

    // the new touch under the same id is what a new stroke would start from
    assert!(source.is_pressed(&input));
    assert_eq!(Stroke::new(source, &input).initial_position(), [300, 300]);
}

#[test]
fn lifted_touch_is_not_pressed() {
    let mut tracker = InputTracker::new();
    tracker.touch_start(TouchId(2), [1, 1]);
    tracker.touch_end(TouchId(2));
    let input = tracker.frame();
    let source = StrokeSource::Touch(TouchId(2));
    assert!(!source.is_pressed(&input));
    assert!(source.is_just_released(&input));
}
