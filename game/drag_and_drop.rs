use crate::sprite::{Sprite, SpriteId};
use crate::stroke::{Stroke, StrokeSource};
use interface::game::*;
use interface::input::{Input, MouseButton, TouchId};

use std::mem;

extern crate fxhash;
use fxhash::FxHashSet;
use log::debug;
use rand::Rng;

#[cfg(test)]
#[path = "drag_and_drop_test.rs"]
mod drag_and_drop_test;

pub const NAME: &str = "drag and drop";
pub const SCREEN_SIZE: [u32;2] = [640, 480];
pub const INITIAL_SIZE: [f32;2] = [SCREEN_SIZE[0] as f32, SCREEN_SIZE[1] as f32];
pub const COPIES_PER_IMAGE: usize = 3;

const BACKGROUND_COLOR: &str = "202028";
const DRAGGING_ALPHA: f32 = 0.5;

/// Random position along one axis that keeps the image on screen,
/// or 0 if it's too big for that.
fn random_offset<R: Rng>(rng: &mut R,  screen: u32,  image: u32) -> i32 {
    match screen.checked_sub(image) {
        Some(room) if room > 0 => rng.random_range(0..room) as i32,
        _ => 0,
    }
}

pub struct DragAndDrop {
    /// Touches pressed this frame.
    touch_ids: Vec<TouchId>,
    /// Order doesn't matter.
    strokes: Vec<Stroke>,
    /// Back to front.
    sprites: Vec<Sprite>,
}

impl DragAndDrop {
    /// Place `copies` sprites of every image at random positions.
    /// `image_sizes` is indexed by `ImageId`.
    pub fn new<R: Rng>(image_sizes: &[[u32;2]],  copies: usize,  rng: &mut R) -> Self {
        let mut sprites = Vec::with_capacity(image_sizes.len()*copies);
        for (i, &[w,h]) in image_sizes.iter().enumerate() {
            for _ in 0..copies {
                let position = [
                    random_offset(rng, SCREEN_SIZE[0], w),
                    random_offset(rng, SCREEN_SIZE[1], h),
                ];
                let id = SpriteId(sprites.len() as u32);
                sprites.push(Sprite::new(id, ImageId(i), [w as i32, h as i32], position));
            }
        }
        Self::from_sprites(sprites)
    }

    /// The last sprite is drawn on top.
    pub fn from_sprites(sprites: Vec<Sprite>) -> Self {
        DragAndDrop {
            touch_ids: Vec::new(),
            strokes: Vec::new(),
            sprites,
        }
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    fn sprite(&self,  id: SpriteId) -> Option<&Sprite> {
        self.sprites.iter().find(|sprite| sprite.id() == id)
    }

    /// The front-most sprite at the position.
    pub fn sprite_at(&self,  position: [i32;2]) -> Option<SpriteId> {
        // sprites are ordered from back to front
        self.sprites.iter().rev()
            .find(|sprite| sprite.hit_test(position))
            .map(Sprite::id)
    }

    /// Strokes of earlier frames must have been updated first,
    /// so that a source released and pressed again since then isn't refused.
    fn begin_stroke(&mut self,  source: StrokeSource,  input: &Input) {
        if self.strokes.iter().any(|stroke| stroke.source() == source) {
            return;
        }
        let mut stroke = Stroke::new(source, input);
        let sprite = self.sprite_at(stroke.initial_position());
        debug!("{:?} pressed at {:?}, dragging {:?}", source, stroke.initial_position(), sprite);
        stroke.set_dragging_object(sprite);
        if source.is_pressed(input) {
            self.strokes.push(stroke);
        } else {
            // pressed and released between two frames
            stroke.update(input);
            Self::drop_sprite(&mut self.sprites, &mut stroke);
            debug!("{:?} released", source);
        }
    }

    /// Move the sprite of a released stroke and bring it to the front.
    fn drop_sprite(sprites: &mut Vec<Sprite>,  stroke: &mut Stroke) {
        let Some(id) = stroke.dragging_object() else {
            return;
        };
        if let Some(index) = sprites.iter().position(|sprite| sprite.id() == id) {
            let mut sprite = sprites.remove(index);
            sprite.move_by(stroke.position_diff());
            debug!("dropped {:?} at {:?}", id, sprite.position());
            sprites.push(sprite);
        }
        stroke.set_dragging_object(None);
    }
}

impl Game for DragAndDrop {
    fn update(&mut self,  input: &Input) {
        let sprites = &mut self.sprites;
        self.strokes.retain_mut(|stroke| {
            stroke.update(input);
            if stroke.is_released() {
                Self::drop_sprite(sprites, stroke);
                debug!("{:?} released", stroke.source());
            }
            !stroke.is_released()
        });

        self.touch_ids.clear();
        self.touch_ids.extend_from_slice(input.just_pressed_touch_ids());

        if input.is_mouse_button_just_pressed(MouseButton::Left) {
            self.begin_stroke(StrokeSource::Mouse(MouseButton::Left), input);
        }
        let touch_ids = mem::take(&mut self.touch_ids);
        for &id in &touch_ids {
            self.begin_stroke(StrokeSource::Touch(id), input);
        }
        self.touch_ids = touch_ids;
    }

    fn render(&mut self,  gfx: &mut dyn Graphics) {
        gfx.clear(hex(BACKGROUND_COLOR));

        let dragging = self.strokes.iter()
            .filter_map(Stroke::dragging_object)
            .collect::<FxHashSet<SpriteId>>();

        for sprite in &self.sprites {
            if !dragging.contains(&sprite.id()) {
                sprite.draw(gfx, [0, 0], 1.0);
            }
        }
        for stroke in &self.strokes {
            if let Some(sprite) = stroke.dragging_object().and_then(|id| self.sprite(id)) {
                sprite.draw(gfx, stroke.position_diff(), DRAGGING_ALPHA);
            }
        }
    }

    fn layout(&self,  _: [u32;2]) -> [u32;2] {
        SCREEN_SIZE
    }
}
