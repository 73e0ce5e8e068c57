use std::fmt;

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::resources::SurfaceConfig;

/// Font of a text command: family and pixel size.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasFont {
    pub family: String,
    pub size: f32,
}

impl fmt::Display for CanvasFont {
    /// CSS-style shorthand, e.g. `12px Arial`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.size, self.family)
    }
}

/// An immediate-mode 2D drawing target in canvas coordinates:
/// origin at the top-left corner, `y` growing downwards.
pub trait DrawSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Srgba);
    fn fill_text(&mut self, text: &str, origin: DVec2, font: &CanvasFont, color: Srgba);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    FillCircle {
        center: DVec2,
        radius: f64,
        color: Srgba,
    },
    FillText {
        text: String,
        origin: DVec2,
        font: CanvasFont,
        color: Srgba,
    },
}

/// Average glyph advance as a fraction of the font size.
const GLYPH_ADVANCE: f64 = 0.6;

impl DrawCommand {
    /// Axis-aligned extent `(min, max)` of a shape; `None` for clears.
    ///
    /// Text extent is estimated from the glyph count: one line above the baseline.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        match self {
            DrawCommand::ClearRect { .. } => None,
            DrawCommand::FillCircle { center, radius, .. } => {
                let half = DVec2::splat(*radius);
                Some((*center - half, *center + half))
            }
            DrawCommand::FillText {
                text, origin, font, ..
            } => {
                let size = font.size as f64;
                let width = text.chars().count() as f64 * size * GLYPH_ADVANCE;
                Some((
                    DVec2::new(origin.x, origin.y - size),
                    DVec2::new(origin.x + width, origin.y),
                ))
            }
        }
    }

    /// Whether any part of this shape falls inside the given rectangle.
    pub fn overlaps(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        match self {
            DrawCommand::FillCircle { center, radius, .. } => {
                let nearest = DVec2::new(
                    center.x.clamp(x, x + width),
                    center.y.clamp(y, y + height),
                );
                nearest.distance_squared(*center) < radius * radius
            }
            _ => self.bounds().is_some_and(|(min, max)| {
                min.x < x + width && max.x > x && min.y < y + height && max.y > y
            }),
        }
    }
}

/// Recording surface holding the display list of the current frame.
///
/// Clearing the whole surface drops everything recorded so far. Smaller clears are
/// kept in the list and resolved by [`FrameCanvas::visible`].
#[derive(Resource, Clone, Debug)]
pub struct FrameCanvas {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl FrameCanvas {
    pub fn new(surface: SurfaceConfig) -> Self {
        Self {
            width: surface.width as f64,
            height: surface.height as f64,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    fn covers_surface(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        x <= 0.0 && y <= 0.0 && x + width >= self.width && y + height >= self.height
    }

    /// Shapes still on screen, in paint order, after applying partial clears.
    pub fn visible(&self) -> Vec<&DrawCommand> {
        let mut shown: Vec<&DrawCommand> = Vec::with_capacity(self.commands.len());
        for command in &self.commands {
            match command {
                DrawCommand::ClearRect {
                    x,
                    y,
                    width,
                    height,
                } => shown.retain(|drawn| !drawn.overlaps(*x, *y, *width, *height)),
                _ => shown.push(command),
            }
        }
        shown
    }

    /// Maps a canvas point onto a centered, y-up world plane of the same size.
    pub fn to_world(&self, point: DVec2) -> Vec2 {
        Vec2::new(
            (point.x - self.width / 2.0) as f32,
            (self.height / 2.0 - point.y) as f32,
        )
    }
}

impl Default for FrameCanvas {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}

impl DrawSurface for FrameCanvas {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if self.covers_surface(x, y, width, height) {
            self.commands.clear();
        } else {
            self.commands.push(DrawCommand::ClearRect {
                x,
                y,
                width,
                height,
            });
        }
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Srgba) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, origin: DVec2, font: &CanvasFont, color: Srgba) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            origin,
            font: font.clone(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle_center(command: &DrawCommand) -> Option<DVec2> {
        match command {
            DrawCommand::FillCircle { center, .. } => Some(*center),
            _ => None,
        }
    }

    fn arial() -> CanvasFont {
        CanvasFont {
            family: "Arial".into(),
            size: 12.0,
        }
    }

    #[test]
    fn full_clear_drops_the_display_list() {
        let mut canvas = FrameCanvas::default();
        canvas.fill_circle(DVec2::new(10.0, 10.0), 3.0, Srgba::WHITE);
        canvas.fill_text("dot", DVec2::new(7.0, -3.0), &arial(), Srgba::WHITE);
        assert_eq!(canvas.commands().len(), 2);

        canvas.clear_rect(0.0, 0.0, 800.0, 600.0);
        assert!(canvas.commands().is_empty());
        assert!(canvas.visible().is_empty());
    }

    #[test]
    fn partial_clear_hides_only_shapes_inside_it() {
        let mut canvas = FrameCanvas::default();
        canvas.fill_circle(DVec2::new(10.0, 10.0), 3.0, Srgba::WHITE);
        canvas.fill_circle(DVec2::new(500.0, 300.0), 3.0, Srgba::BLACK);
        canvas.clear_rect(0.0, 0.0, 100.0, 100.0);
        canvas.fill_circle(DVec2::new(20.0, 20.0), 3.0, Srgba::rgb(0.0, 0.0, 1.0));

        let centers: Vec<DVec2> = canvas
            .visible()
            .into_iter()
            .filter_map(circle_center)
            .collect();
        assert_eq!(centers, [DVec2::new(500.0, 300.0), DVec2::new(20.0, 20.0)]);
    }

    #[test]
    fn partial_clear_removes_discs_that_reach_into_it() {
        let mut canvas = FrameCanvas::default();
        // Center outside the cleared area, rim inside it.
        canvas.fill_circle(DVec2::new(105.0, 50.0), 8.0, Srgba::WHITE);
        // Corner case: inside the bounding box but not the disc.
        canvas.fill_circle(DVec2::new(106.0, 106.0), 8.0, Srgba::WHITE);
        canvas.fill_circle(DVec2::new(300.0, 300.0), 8.0, Srgba::WHITE);
        canvas.clear_rect(0.0, 0.0, 100.0, 100.0);

        let centers: Vec<DVec2> = canvas
            .visible()
            .into_iter()
            .filter_map(circle_center)
            .collect();
        assert_eq!(centers, [DVec2::new(106.0, 106.0), DVec2::new(300.0, 300.0)]);
    }

    #[test]
    fn partial_clear_removes_labels_that_reach_into_it() {
        let mut canvas = FrameCanvas::default();
        // Baseline starts left of the area; "Neptune" runs ~50px to the right.
        canvas.fill_text("Neptune", DVec2::new(180.0, 50.0), &arial(), Srgba::WHITE);
        canvas.fill_text("Mars", DVec2::new(400.0, 50.0), &arial(), Srgba::WHITE);
        canvas.clear_rect(200.0, 0.0, 100.0, 100.0);

        let visible = canvas.visible();
        assert_eq!(visible.len(), 1);
        assert!(matches!(visible[0], DrawCommand::FillText { text, .. } if text == "Mars"));
    }

    #[test]
    fn canvas_points_map_to_centered_world() {
        let canvas = FrameCanvas::default();
        assert_eq!(canvas.to_world(DVec2::ZERO), Vec2::new(-400.0, 300.0));
        assert_eq!(canvas.to_world(DVec2::new(400.0, 300.0)), Vec2::ZERO);
        assert_eq!(canvas.to_world(DVec2::new(800.0, 600.0)), Vec2::new(400.0, -300.0));
    }
}
