use super::*;
use crate::recorder::Recorder;

fn sprite() -> Sprite {
    Sprite::new(SpriteId(0), ImageId(2), [20, 20], [10, 10])
}

#[test]
fn hit_test_inside() {
    let s = sprite();
    assert!(s.hit_test([10, 10]));
    assert!(s.hit_test([15, 15]));
    assert!(s.hit_test([29, 29]));
}

#[test]
fn hit_test_edges_are_half_open() {
    let s = sprite();
    assert!(!s.hit_test([30, 15]));
    assert!(!s.hit_test([15, 30]));
    assert!(!s.hit_test([9, 15]));
    assert!(!s.hit_test([15, 9]));
}

#[test]
fn move_by_translates_without_clamping() {
    let mut s = sprite();
    s.move_by([0, 30]);
    assert_eq!(s.position(), [10, 40]);
    s.move_by([-100, -100]);
    assert_eq!(s.position(), [-90, -60]);
    assert!(s.hit_test([-80, -50]));
}

#[test]
fn draw_offsets_without_moving() {
    let s = sprite();
    let mut gfx = Recorder::default();
    s.draw(&mut gfx, [5, -5], 0.5);
    assert_eq!(gfx.drawn, vec![(ImageId(2), [15, 5], 0.5)]);
    assert_eq!(s.position(), [10, 10]);
}
