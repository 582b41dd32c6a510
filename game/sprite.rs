use interface::game::{Graphics, ImageId};

#[cfg(test)]
#[path = "sprite_test.rs"]
mod sprite_test;

/// Stays the same when the sprite is moved to the front,
/// unlike its index in the render order.
#[derive(Debug, Clone,Copy, PartialEq,Eq, Hash)]
pub struct SpriteId(pub u32);

/// An image at a position on the screen.
#[derive(Debug, Clone, PartialEq,Eq)]
pub struct Sprite {
    id: SpriteId,
    image: ImageId,
    size: [i32;2],
    position: [i32;2],
}

impl Sprite {
    pub fn new(id: SpriteId,  image: ImageId,  size: [i32;2],  position: [i32;2]) -> Self {
        Sprite { id, image, size, position }
    }

    pub fn id(&self) -> SpriteId {
        self.id
    }

    pub fn image(&self) -> ImageId {
        self.image
    }

    pub fn size(&self) -> [i32;2] {
        self.size
    }

    pub fn position(&self) -> [i32;2] {
        self.position
    }

    /// Whether the point is inside the image.
    /// The right and bottom edges are outside.
    pub fn hit_test(&self,  [x,y]: [i32;2]) -> bool {
        let [left, top] = self.position;
        let [w, h] = self.size;
        left <= x  &&  x < left+w  &&  top <= y  &&  y < top+h
    }

    /// Can move the sprite off screen.
    pub fn move_by(&mut self,  [dx,dy]: [i32;2]) {
        self.position = [self.position[0]+dx, self.position[1]+dy];
    }

    pub fn draw(&self,  gfx: &mut dyn Graphics,  [dx,dy]: [i32;2],  alpha: f32) {
        let position = [self.position[0]+dx, self.position[1]+dy];
        gfx.image(self.image, position, alpha);
    }
}
