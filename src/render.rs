//! Draw-list bookkeeping for the render collaborator.
//!
//! The simulation hands over every sprite plus the "dirty" rectangles that
//! changed since the previous frame; compositing and presenting are the
//! front-end's job.

use std::collections::HashMap;

use crate::entities::Image;
use crate::geometry::Rect;
use crate::registry::{EntityId, Sprite};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderFrame {
    /// Everything visible, bottom layer first.
    pub sprites: Vec<Sprite>,
    /// Screen areas that must be redrawn this frame.
    pub dirty: Vec<Rect>,
    /// New score text, present only when the score changed.
    pub score_text: Option<String>,
}

/// Remembers what was drawn last frame.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    last: HashMap<EntityId, (Rect, Image)>,
}

impl DirtyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rectangles covering every sprite that appeared, moved, changed image
    /// or disappeared since the previous call.
    pub fn diff(&mut self, sprites: &[Sprite]) -> Vec<Rect> {
        let mut dirty = Vec::new();
        let mut current = HashMap::with_capacity(sprites.len());

        for sprite in sprites {
            match self.last.remove(&sprite.id) {
                Some((rect, image)) if rect == sprite.rect && image == sprite.image => {}
                Some((rect, _)) => {
                    dirty.push(rect);
                    if rect != sprite.rect {
                        dirty.push(sprite.rect);
                    }
                }
                None => dirty.push(sprite.rect),
            }
            current.insert(sprite.id, (sprite.rect, sprite.image));
        }

        // Whatever is left was removed since last frame.
        dirty.extend(self.last.values().map(|(rect, _)| *rect));
        self.last = current;
        dirty
    }

    pub fn reset(&mut self) {
        self.last.clear();
    }
}

/// Caches the score text so it is only rebuilt when the value changes.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    last: Option<u32>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh(&mut self, score: u32) -> Option<String> {
        if self.last == Some(score) {
            return None;
        }
        self.last = Some(score);
        Some(format!("Score: {score}"))
    }
}
