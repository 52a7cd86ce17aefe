//! Score text rasterised with ab_glyph
//!
//! Glyph coverage is sampled once per pixel and every covered pixel becomes
//! a 1x1 quad, so text goes through the same instanced pipeline as the
//! paddles and ball.

use std::path::Path;

use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use pong_core::platform::{Color, Rect};
use pong_core::RenderError;

use super::resources::InstanceData;
use crate::error::StartupError;

/// Coverage at or above this counts as an inked pixel
const COVERAGE_THRESHOLD: f32 = 0.5;

pub struct ScoreFont {
    font: FontVec,
    scale: PxScale,
}

impl ScoreFont {
    pub fn load(path: &Path, size: f32) -> Result<Self, StartupError> {
        let data = std::fs::read(path).map_err(|source| StartupError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(data, size).ok_or_else(|| StartupError::FontParse {
            path: path.to_path_buf(),
        })
    }

    pub fn from_bytes(data: Vec<u8>, size: f32) -> Option<Self> {
        let font = FontVec::try_from_vec(data).ok()?;
        Some(Self {
            font,
            scale: PxScale::from(size),
        })
    }

    fn glyph_ids(&self, text: &str) -> Result<Vec<GlyphId>, RenderError> {
        text.chars()
            .map(|c| {
                let id = self.font.glyph_id(c);
                // Id 0 is .notdef: the font has no glyph for this char
                if id.0 == 0 && !c.is_whitespace() {
                    Err(RenderError::Text(format!("no glyph for {c:?}")))
                } else {
                    Ok(id)
                }
            })
            .collect()
    }

    /// Width and line height of `text` at the loaded size
    pub fn measure(&self, text: &str) -> Result<(f32, f32), RenderError> {
        let scaled = self.font.as_scaled(self.scale);
        let width = self
            .glyph_ids(text)?
            .into_iter()
            .map(|id| scaled.h_advance(id))
            .sum();
        Ok((width, scaled.height()))
    }

    /// Quads for `text` with its top-left corner at (`x`, `y`)
    pub fn rasterize(
        &self,
        text: &str,
        x: f32,
        y: f32,
        color: Color,
    ) -> Result<Vec<InstanceData>, RenderError> {
        let scaled = self.font.as_scaled(self.scale);
        let baseline = y + scaled.ascent();
        let mut pen_x = x;
        let mut quads = Vec::new();

        for id in self.glyph_ids(text)? {
            let glyph = id.with_scale_and_position(self.scale, point(pen_x, baseline));
            pen_x += scaled.h_advance(id);

            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue; // blank glyph, e.g. a space
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                if coverage >= COVERAGE_THRESHOLD {
                    let rect = Rect::new(bounds.min.x + gx as f32, bounds.min.y + gy as f32, 1.0, 1.0);
                    quads.push(InstanceData::new(rect, color));
                }
            });
        }

        Ok(quads)
    }
}
