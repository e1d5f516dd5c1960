use crate::wave::WaveInput;

/// Pointer position in viewport pixels plus button state.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    /// False until the first move event; the pointer then reads as centred.
    pub seen: bool,
}

impl PointerState {
    /// Record a move. Returns the pixel delta when a drag is in progress.
    pub fn move_to(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        let delta = (self.down && self.seen).then(|| (x - self.x, y - self.y));
        self.x = x;
        self.y = y;
        self.seen = true;
        delta
    }

    /// Position used for wave and rotation input; the viewport centre until
    /// the pointer has been seen.
    pub fn effective(&self, width: u32, height: u32) -> (f32, f32) {
        if self.seen {
            (self.x, self.y)
        } else {
            (width as f32 * 0.5, height as f32 * 0.5)
        }
    }

    pub fn wave_input(&self, width: u32, height: u32) -> WaveInput {
        let (x, y) = self.effective(width, height);
        WaveInput::from_pointer(x, y, width as f32, height as f32)
    }
}

