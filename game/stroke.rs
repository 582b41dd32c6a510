use crate::sprite::SpriteId;
use interface::input::{Input, MouseButton, TouchId};

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

/// The pointer a stroke follows.
#[derive(Debug, Clone,Copy, PartialEq,Eq, Hash)]
pub enum StrokeSource {
    Mouse(MouseButton),
    Touch(TouchId),
}

impl StrokeSource {
    /// `None` if a touch is no longer known.
    pub fn position(self,  input: &Input) -> Option<[i32;2]> {
        match self {
            StrokeSource::Mouse(_) => Some(input.cursor_position()),
            StrokeSource::Touch(id) => input.touch_position(id),
        }
    }

    /// Where the source was when it was released this frame.
    /// The id of an ended touch might already belong to a new one.
    fn released_position(self,  input: &Input) -> Option<[i32;2]> {
        match self {
            StrokeSource::Mouse(_) => Some(input.cursor_position()),
            StrokeSource::Touch(id) => input.touch_end_position(id),
        }
    }

    /// Whether the button or touch is down at the end of the frame.
    pub fn is_pressed(self,  input: &Input) -> bool {
        match self {
            StrokeSource::Mouse(button) => input.is_mouse_button_pressed(button),
            StrokeSource::Touch(id) => input.touch_ids().any(|touch| touch == id),
        }
    }

    /// A touch that disappeared without a release is treated as released,
    /// so that its stroke doesn't hang around forever.
    pub fn is_just_released(self,  input: &Input) -> bool {
        match self {
            StrokeSource::Mouse(button) => input.is_mouse_button_just_released(button),
            StrokeSource::Touch(id) => {
                input.is_touch_just_released(id)  ||  input.touch_position(id).is_none()
            }
        }
    }
}

/// One press-drag-release gesture.
#[derive(Debug, Clone, PartialEq,Eq)]
pub struct Stroke {
    source: StrokeSource,
    initial: [i32;2],
    current: [i32;2],
    released: bool,
    /// Not owned, might not exist anymore.
    dragging: Option<SpriteId>,
}

impl Stroke {
    pub fn new(source: StrokeSource,  input: &Input) -> Self {
        let position = source.position(input).unwrap_or_default();
        Stroke {
            source,
            initial: position,
            current: position,
            released: false,
            dragging: None,
        }
    }

    pub fn update(&mut self,  input: &Input) {
        if self.released {
            return;
        }
        let released = self.source.is_just_released(input);
        let position = if released {
            self.source.released_position(input)
        } else {
            self.source.position(input)
        };
        if let Some(position) = position {
            self.current = position;
        }
        self.released = released;
    }

    pub fn source(&self) -> StrokeSource {
        self.source
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn initial_position(&self) -> [i32;2] {
        self.initial
    }

    pub fn current_position(&self) -> [i32;2] {
        self.current
    }

    /// How far the pointer has moved since the stroke started.
    pub fn position_diff(&self) -> [i32;2] {
        [self.current[0]-self.initial[0], self.current[1]-self.initial[1]]
    }

    pub fn set_dragging_object(&mut self,  sprite: Option<SpriteId>) {
        self.dragging = sprite;
    }

    pub fn dragging_object(&self) -> Option<SpriteId> {
        self.dragging
    }
}
