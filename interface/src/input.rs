//! Polled input state.
//!
//! Backends deliver input as events, but the game wants to ask
//! "was this button pressed since the last frame?".
//! `InputTracker` collects the events between two frames,
//! and `InputTracker::frame()` turns them into an `Input` snapshot.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

#[derive(Debug, Clone,Copy, PartialEq,Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    const ALL: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

    fn index(self) -> usize {
        match self {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
            MouseButton::Middle => 2,
        }
    }
}

/// Identifies one finger for as long as it touches the screen.
/// Backends may reuse an id after the touch has ended.
#[derive(Debug, Clone,Copy, PartialEq,Eq, Hash, PartialOrd,Ord)]
pub struct TouchId(pub u64);

#[derive(Debug, Clone,Copy, Default, PartialEq,Eq)]
struct ButtonEdges {
    pressed: bool,
    just_pressed: bool,
    just_released: bool,
}

/// Input state for one frame.
#[derive(Debug, Clone, Default, PartialEq,Eq)]
pub struct Input {
    cursor: [i32;2],
    buttons: [ButtonEdges; 3],
    touches: Vec<(TouchId, [i32;2])>,
    touches_started: Vec<TouchId>,
    /// With their last known position.
    touches_ended: Vec<(TouchId, [i32;2])>,
}

impl Input {
    pub fn cursor_position(&self) -> [i32;2] {
        self.cursor
    }

    pub fn is_mouse_button_pressed(&self,  button: MouseButton) -> bool {
        self.buttons[button.index()].pressed
    }

    pub fn is_mouse_button_just_pressed(&self,  button: MouseButton) -> bool {
        self.buttons[button.index()].just_pressed
    }

    pub fn is_mouse_button_just_released(&self,  button: MouseButton) -> bool {
        self.buttons[button.index()].just_released
    }

    /// Touches currently on the screen.
    pub fn touch_ids(&self) -> impl Iterator<Item=TouchId> + '_ {
        self.touches.iter().map(|&(id, _)| id)
    }

    /// Touches that started since the previous frame,
    /// including ones that have already ended again.
    pub fn just_pressed_touch_ids(&self) -> &[TouchId] {
        &self.touches_started
    }

    pub fn is_touch_just_released(&self,  id: TouchId) -> bool {
        self.touches_ended.iter().any(|&(ended, _)| ended == id)
    }

    /// Where a touch was when it ended since the previous frame.
    /// An id that was reused afterwards still gives the old touch.
    pub fn touch_end_position(&self,  id: TouchId) -> Option<[i32;2]> {
        self.touches_ended.iter()
            .find(|&&(ended, _)| ended == id)
            .map(|&(_, position)| position)
    }

    /// Position of an active touch, or the last position of one that ended
    /// since the previous frame.
    pub fn touch_position(&self,  id: TouchId) -> Option<[i32;2]> {
        self.touches.iter()
            .chain(&self.touches_ended)
            .find(|&&(touch, _)| touch == id)
            .map(|&(_, position)| position)
    }
}

/// Collects input events between frames.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    cursor: [i32;2],
    held: [bool; 3],
    pressed_since_frame: [bool; 3],
    released_since_frame: [bool; 3],
    touches: Vec<(TouchId, [i32;2])>,
    touches_started: Vec<TouchId>,
    touches_ended: Vec<(TouchId, [i32;2])>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mouse_move(&mut self,  position: [i32;2]) {
        self.cursor = position;
    }

    pub fn mouse_press(&mut self,  button: MouseButton) {
        let i = button.index();
        // key repeat or a missed release shouldn't produce a second edge
        if !self.held[i] {
            self.held[i] = true;
            self.pressed_since_frame[i] = true;
        }
    }

    pub fn mouse_release(&mut self,  button: MouseButton) {
        let i = button.index();
        if self.held[i] {
            self.held[i] = false;
            self.released_since_frame[i] = true;
        }
    }

    pub fn touch_start(&mut self,  id: TouchId,  position: [i32;2]) {
        match self.touches.iter_mut().find(|(touch, _)| *touch == id) {
            Some((_, old)) => *old = position,
            None => {
                self.touches.push((id, position));
                self.touches_started.push(id);
            }
        }
    }

    pub fn touch_move(&mut self,  id: TouchId,  position: [i32;2]) {
        if let Some((_, old)) = self.touches.iter_mut().find(|(touch, _)| *touch == id) {
            *old = position;
        }
    }

    pub fn touch_end(&mut self,  id: TouchId) {
        if let Some(i) = self.touches.iter().position(|&(touch, _)| touch == id) {
            let ended = self.touches.remove(i);
            self.touches_ended.retain(|&(touch, _)| touch != id);
            self.touches_ended.push(ended);
        }
    }

    /// Create the snapshot for this frame and start collecting for the next.
    pub fn frame(&mut self) -> Input {
        let mut buttons = [ButtonEdges::default(); 3];
        for button in MouseButton::ALL {
            let i = button.index();
            buttons[i] = ButtonEdges {
                pressed: self.held[i],
                just_pressed: self.pressed_since_frame[i],
                just_released: self.released_since_frame[i],
            };
        }
        self.pressed_since_frame = [false; 3];
        self.released_since_frame = [false; 3];

        Input {
            cursor: self.cursor,
            buttons,
            touches: self.touches.clone(),
            touches_started: std::mem::take(&mut self.touches_started),
            touches_ended: std::mem::take(&mut self.touches_ended),
        }
    }
}
