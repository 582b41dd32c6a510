use crate::assets::DecodedImage;
use interface::game::*;
use interface::input::{InputTracker, MouseButton};

extern crate speedy2d;
use self::speedy2d::Graphics2D;
use self::speedy2d::color::Color as spColor;
use self::speedy2d::dimen::{UVec2, Vec2};
use self::speedy2d::image::{ImageDataType, ImageHandle, ImageSmoothingMode};
use self::speedy2d::shape::Rectangle;
use self::speedy2d::window::{
    MouseButton as spMouseButton,
    WindowCreationOptions,
    WindowHandler,
    WindowHelper,
    WindowSize,
    WindowStartupInfo,
};
use self::speedy2d::Window;

use log::{info, warn};

#[cfg(test)]
#[path = "speedy2d_test.rs"]
mod speedy2d_test;

fn map_button(b: spMouseButton) -> Option<MouseButton> {
    match b {
        spMouseButton::Left => Some(MouseButton::Left),
        spMouseButton::Right => Some(MouseButton::Right),
        spMouseButton::Middle => Some(MouseButton::Middle),
        _ => None
    }
}

fn map_color([r, g, b, a]: [f32; 4]) -> spColor {
    spColor::from_rgba(r, g, b, a)
}

/// Fits the logical screen inside the window without stretching it,
/// and returns where it starts and how many pixels a logical unit is.
fn letterbox_and_scale(window_size: [f32; 2],  screen: [u32; 2]) -> ([f32; 2], f32) {
    let screen = [screen[0].max(1) as f32, screen[1].max(1) as f32];
    let scale = f32::min(window_size[0]/screen[0], window_size[1]/screen[1]);
    let offset = [
        (window_size[0] - screen[0]*scale) / 2.0,
        (window_size[1] - screen[1]*scale) / 2.0,
    ];
    (offset, scale)
}

/// Window pixels to logical screen coordinates.
/// `None` while the window has no area, as when it is minimized.
fn to_logical(position: [f32; 2],  offset: [f32; 2],  scale: f32) -> Option<[i32; 2]> {
    if !(scale > 0.0) {
        return None;
    }
    Some([
        ((position[0] - offset[0]) / scale).floor() as i32,
        ((position[1] - offset[1]) / scale).floor() as i32,
    ])
}

/// Images can only be created while drawing,
/// so they start out as pixels and are uploaded on the first frame.
enum Textures {
    Pending(Vec<DecodedImage>),
    /// Indexed by `ImageId`; `None` if the upload failed.
    Uploaded(Vec<Option<(ImageHandle, [u32; 2])>>),
}

impl Textures {
    fn upload(&mut self,  g: &mut Graphics2D) {
        let Textures::Pending(images) = self else {
            return;
        };
        let mut uploaded = Vec::with_capacity(images.len());
        for image in images.drain(..) {
            let [w, h] = image.size;
            let handle = g.create_image_from_raw_pixels(
                ImageDataType::RGBA,
                ImageSmoothingMode::NearestNeighbor,
                UVec2::new(w, h),
                &image.rgba,
            );
            match handle {
                Ok(handle) => uploaded.push(Some((handle, image.size))),
                Err(e) => {
                    warn!("Cannot upload {}: {:?}", image.name, e);
                    uploaded.push(None);
                }
            }
        }
        info!("Uploaded {} images", uploaded.iter().flatten().count());
        *self = Textures::Uploaded(uploaded);
    }
}

/// Draws in logical coordinates onto a letterboxed area of the window.
struct Frame<'a> {
    g: &'a mut Graphics2D,
    textures: &'a [Option<(ImageHandle, [u32; 2])>],
    screen: [u32; 2],
    offset: [f32; 2],
    scale: f32,
}

impl<'a> Frame<'a> {
    fn rectangle(&self,  position: [f32; 2],  size: [f32; 2]) -> Rectangle {
        Rectangle::new(
            Vec2::new(position[0]*self.scale + self.offset[0],  position[1]*self.scale + self.offset[1]),
            Vec2::new(
                (position[0]+size[0])*self.scale + self.offset[0],
                (position[1]+size[1])*self.scale + self.offset[1],
            ),
        )
    }
}

impl<'a> Graphics for Frame<'a> {
    fn clear(&mut self,  color: Color) {
        let rect = self.rectangle([0.0, 0.0], [self.screen[0] as f32, self.screen[1] as f32]);
        self.g.draw_rectangle(rect, map_color(color));
    }

    fn image(&mut self,  image: ImageId,  position: [i32; 2],  alpha: f32) {
        if let Some(Some((handle, [w, h]))) = self.textures.get(image.0) {
            let rect = self.rectangle(
                [position[0] as f32, position[1] as f32],
                [*w as f32, *h as f32],
            );
            let tint = spColor::from_rgba(1.0, 1.0, 1.0, alpha);
            self.g.draw_rectangle_image_tinted(rect, tint, handle);
        }
    }
}

struct GameWrapper<G: Game> {
    game: G,
    window_size: [f32; 2], // changes if window is resized
    screen: [u32; 2],
    input: InputTracker,
    textures: Textures,
}

impl<G: Game> GameWrapper<G> {
    fn set_window_size(&mut self,  size: UVec2) {
        self.window_size = [size.x as f32, size.y as f32];
        self.screen = self.game.layout([size.x, size.y]);
    }
}

impl<G: Game> WindowHandler for GameWrapper<G> {
    fn on_start(&mut self,  h: &mut WindowHelper<()>,  info: WindowStartupInfo) {
        self.set_window_size(*info.viewport_size_pixels());
        h.set_cursor_visible(true);
    }

    fn on_draw(&mut self,  h: &mut WindowHelper<()>,  g: &mut Graphics2D) {
        let input = self.input.frame();
        self.game.update(&input);

        self.textures.upload(g);
        g.clear_screen(spColor::BLACK);
        if let Textures::Uploaded(textures) = &self.textures {
            let (offset, scale) = letterbox_and_scale(self.window_size, self.screen);
            let mut frame = Frame {
                g,
                textures,
                screen: self.screen,
                offset,
                scale,
            };
            self.game.render(&mut frame);
        }

        // Required to make the screen update.
        // Surprisingly doesn't cause 100% CPU usage.
        h.request_redraw();
    }

    fn on_resize(&mut self,  _: &mut WindowHelper<()>,  size: UVec2) {
        self.set_window_size(size);
    }

    fn on_mouse_move(&mut self,  _: &mut WindowHelper<()>,  pos: Vec2) {
        let (offset, scale) = letterbox_and_scale(self.window_size, self.screen);
        if let Some(position) = to_logical([pos.x, pos.y], offset, scale) {
            self.input.mouse_move(position);
        }
    }

    fn on_mouse_button_down(&mut self,  _: &mut WindowHelper<()>,  button: spMouseButton) {
        if let Some(button) = map_button(button) {
            self.input.mouse_press(button);
        }
    }

    fn on_mouse_button_up(&mut self,  _: &mut WindowHelper<()>,  button: spMouseButton) {
        if let Some(button) = map_button(button) {
            self.input.mouse_release(button);
        }
    }
}

/// Open a window and run the game until it is closed.
/// `images` are uploaded in order, so that `ImageId(i)` is `images[i]`.
#[inline(never)]
pub fn start<G:Game+'static>(
        game: G,  name: &'static str,  initial_size: [f32; 2],  images: Vec<DecodedImage>,
) -> ! {
    let screen = game.layout([initial_size[0] as u32, initial_size[1] as u32]);
    let wrapper = GameWrapper {
        game,
        window_size: initial_size,
        screen,
        input: InputTracker::new(),
        textures: Textures::Pending(images),
    };

    let window_size = Vec2::new(initial_size[0], initial_size[1]);
    let window_size = WindowSize::ScaledPixels(window_size);
    let options = WindowCreationOptions::new_windowed(window_size, None)
            .with_always_on_top(false)
            .with_decorations(true)
            .with_resizable(true)
            .with_transparent(false)
            .with_vsync(true);
    let window = Window::new_with_options(name, options).expect("create window");
    info!("Starting {:?} with a {}x{} screen", name, screen[0], screen[1]);
    window.run_loop(wrapper)
}
