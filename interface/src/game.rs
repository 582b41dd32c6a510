use crate::input::Input;

pub type Color = [f32;4];

/// Parse a hex string of 6 or 8 bytes into a color.
/// Format is rrggbbaa, where the aa is optional.
#[track_caller]
pub fn hex(color: &str) -> Color {
    let a = match color.len() {
        8 => u8::from_str_radix(&color[6..], 16).unwrap(),
        6 => 255,
        _ => panic!("color string must be 6 or 8 characters")
    };
    let r = u8::from_str_radix(&color[..2], 16).unwrap();
    let g = u8::from_str_radix(&color[2..4], 16).unwrap();
    let b = u8::from_str_radix(&color[4..6], 16).unwrap();
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0]
}

/// Index of an image in the list the game was created from.
/// The engine owns the uploaded texture, the game only passes this around.
#[derive(Debug, Clone,Copy, PartialEq,Eq, Hash)]
pub struct ImageId(pub usize);

/// Drawing operations the engine provides, in logical screen coordinates.
pub trait Graphics {
    fn clear(&mut self,  color: Color);
    /// Draw the image with its top left corner at `position`.
    /// `alpha` is multiplied with the image's own opacity.
    fn image(&mut self,  image: ImageId,  position: [i32;2],  alpha: f32);
}

pub trait Game {
    /// Called once per frame before `render()`.
    fn update(&mut self,  input: &Input);
    fn render(&mut self,  gfx: &mut dyn Graphics);
    /// The logical screen size to use for a window of `outside_size` pixels.
    fn layout(&self,  outside_size: [u32;2]) -> [u32;2];
}
