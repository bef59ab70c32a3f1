//! Presentation toggles shared by the front-ends.

/// How the board is shown. None of this touches the replay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Looking at the board from Blue's side.
    pub flipped: bool,
    /// Ambient light; the board is drawn dimmed when off.
    pub lights_on: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self { flipped: false, lights_on: true }
    }
}

impl ViewOptions {
    pub fn toggle_flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn toggle_lights(&mut self) {
        self.lights_on = !self.lights_on;
    }

    /// Screen cell `(column, row)` of a board coordinate, row 0 at the top.
    pub fn to_screen(&self, x: u8, y: u8) -> (u8, u8) {
        if self.flipped {
            (7 - x, y)
        } else {
            (x, 7 - y)
        }
    }

    /// Inverse of `to_screen`.
    pub fn from_screen(&self, column: u8, row: u8) -> (u8, u8) {
        if self.flipped {
            (7 - column, row)
        } else {
            (column, 7 - row)
        }
    }
}
