use std::collections::VecDeque;

use glam::Vec3;

use crate::types::LineVertex;

/// Length of a fired shot in world units
pub const SHOT_RANGE: f32 = 20.0;
/// Oldest shots are dropped past this count
pub const MAX_SHOTS: usize = 32;
/// Colour the host should draw shots with
pub const SHOT_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

/// Ring of debug line segments handed to the renderer each frame
#[derive(Debug, Clone)]
pub struct DebugLines {
    lines: VecDeque<LineVertex>,
    capacity: usize,
}

impl DebugLines {
    pub fn new() -> Self {
        Self::with_capacity(MAX_SHOTS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a segment of `SHOT_RANGE` from `origin` along `direction`.
    /// A zero direction is ignored.
    pub fn fire(&mut self, origin: Vec3, direction: Vec3) -> Option<LineVertex> {
        let direction = direction.try_normalize()?;
        let line = LineVertex::new(origin, origin + direction * SHOT_RANGE);
        self.push(line);
        Some(line)
    }

    pub fn push(&mut self, line: LineVertex) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineVertex> {
        self.lines.iter()
    }

    /// Contiguous copy for upload
    pub fn to_vec(&self) -> Vec<LineVertex> {
        self.lines.iter().copied().collect()
    }
}

impl Default for DebugLines {
    fn default() -> Self {
        Self::new()
    }
}
