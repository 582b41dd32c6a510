use interface::game::{Color, Graphics, ImageId};

/// Remembers what was drawn instead of drawing it.
#[derive(Default)]
pub struct Recorder {
    pub cleared: usize,
    pub drawn: Vec<(ImageId, [i32;2], f32)>,
}

impl Graphics for Recorder {
    fn clear(&mut self,  _: Color) {
        self.cleared += 1;
    }
    fn image(&mut self,  image: ImageId,  position: [i32;2],  alpha: f32) {
        self.drawn.push((image, position, alpha));
    }
}
