mod drag_and_drop;
pub mod images;
#[cfg(test)]
mod recorder;
mod sprite;
mod stroke;

pub use self::drag_and_drop::{DragAndDrop, NAME, INITIAL_SIZE, SCREEN_SIZE, COPIES_PER_IMAGE};
pub use self::sprite::{Sprite, SpriteId};
pub use self::stroke::{Stroke, StrokeSource};
