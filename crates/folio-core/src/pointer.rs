/// Latest pointer coordinates and button flag.
///
/// Single writer (the pointer tracker), any number of best-effort readers;
/// last write wins. Coordinates are client pixels and are not clamped to
/// the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
}

/// The three input event classes the tracker subscribes to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerSample {
    Move { x: f32, y: f32 },
    Down,
    Up,
}

impl PointerState {
    pub fn apply(&mut self, sample: PointerSample) {
        match sample {
            PointerSample::Move { x, y } => {
                self.x = x;
                self.y = y;
            }
            PointerSample::Down => self.down = true,
            PointerSample::Up => self.down = false,
        }
    }
}
