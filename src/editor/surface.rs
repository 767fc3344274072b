//! Render and hit-test surface consumed by the interaction engine.
//!
//! The engine never paints directly. It pushes shape, handle and preview updates into a
//! [`RenderSurface`] and asks it what lies under the pointer. [`SceneSurface`] is the
//! retained display list used by the app; the canvas paints it with egui every frame.

use bevy::math::DVec2;

use crate::constants::HANDLE_SIZE;
use crate::drawing::{Drawing, Polyline, PolylineId};

use super::geometry::is_point_on_polyline;

/// Visual counterpart of the drawing model.
///
/// Shapes mirror the drawing in model order and are identified by [`PolylineId`], so
/// hit-tests hand back ids instead of positions in a parallel list.
pub trait RenderSurface: Send + Sync + 'static {
    /// Clear all shapes and recreate one per polyline, in model order
    fn redraw(&mut self, drawing: &Drawing);

    /// Refresh the geometry and style of one shape in place
    fn update_shape(&mut self, polyline: &Polyline);

    /// Replace the handles with one marker per point of `polyline`, in point order
    fn show_handles(&mut self, polyline: &Polyline);

    /// Move a single handle marker
    fn move_handle(&mut self, index: usize, position: DVec2);

    fn clear_handles(&mut self);

    /// Show the dashed preview of a polyline being drawn
    fn show_preview(&mut self, points: &[DVec2]);

    fn clear_preview(&mut self);

    /// First shape (in model order) passing within `tolerance` of `point`
    fn hit_test_shape(&self, point: DVec2, tolerance: f64) -> Option<PolylineId>;

    /// Index of the handle whose square contains `point`
    fn hit_test_handle(&self, point: DVec2) -> Option<usize>;
}

/// A painted polyline
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeVisual {
    pub id: PolylineId,
    pub points: Vec<DVec2>,
    pub color: String,
    pub thickness: f32,
}

impl ShapeVisual {
    fn from_polyline(polyline: &Polyline) -> Self {
        Self {
            id: polyline.id,
            points: polyline.points.clone(),
            color: polyline.color.clone(),
            thickness: polyline.thickness,
        }
    }
}

/// Retained display list: shapes, node handles and the draw preview
#[derive(Debug, Clone, Default)]
pub struct SceneSurface {
    pub shapes: Vec<ShapeVisual>,
    /// Handle centers, indexed like the selected polyline's points
    pub handles: Vec<DVec2>,
    pub preview: Option<Vec<DVec2>>,
}

impl SceneSurface {
    /// Square covered by the handle at `center`, as (min, max) corners
    pub fn handle_bounds(center: DVec2) -> (DVec2, DVec2) {
        let half = DVec2::splat(HANDLE_SIZE / 2.0);
        (center - half, center + half)
    }
}

impl RenderSurface for SceneSurface {
    fn redraw(&mut self, drawing: &Drawing) {
        self.shapes = drawing
            .polylines()
            .iter()
            .map(ShapeVisual::from_polyline)
            .collect();
        self.handles.clear();
    }

    fn update_shape(&mut self, polyline: &Polyline) {
        if let Some(shape) = self.shapes.iter_mut().find(|s| s.id == polyline.id) {
            *shape = ShapeVisual::from_polyline(polyline);
        }
    }

    fn show_handles(&mut self, polyline: &Polyline) {
        self.handles = polyline.points.clone();
    }

    fn move_handle(&mut self, index: usize, position: DVec2) {
        if let Some(handle) = self.handles.get_mut(index) {
            *handle = position;
        }
    }

    fn clear_handles(&mut self) {
        self.handles.clear();
    }

    fn show_preview(&mut self, points: &[DVec2]) {
        self.preview = Some(points.to_vec());
    }

    fn clear_preview(&mut self) {
        self.preview = None;
    }

    fn hit_test_shape(&self, point: DVec2, tolerance: f64) -> Option<PolylineId> {
        self.shapes
            .iter()
            .find(|shape| is_point_on_polyline(&shape.points, point, tolerance))
            .map(|shape| shape.id)
    }

    fn hit_test_handle(&self, point: DVec2) -> Option<usize> {
        self.handles.iter().position(|&center| {
            let (min, max) = Self::handle_bounds(center);
            point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HIT_TOLERANCE;

    fn sample_drawing() -> (Drawing, PolylineId, PolylineId) {
        let mut drawing = Drawing::default();
        let a = drawing.push(vec![DVec2::ZERO, DVec2::new(100.0, 0.0)], "Black", 2.0);
        let b = drawing.push(
            vec![DVec2::new(0.0, 50.0), DVec2::new(100.0, 50.0)],
            "Red",
            4.0,
        );
        (drawing, a, b)
    }

    #[test]
    fn test_redraw_mirrors_model_order() {
        let (drawing, a, b) = sample_drawing();
        let mut scene = SceneSurface::default();
        scene.redraw(&drawing);

        assert_eq!(scene.shapes.len(), 2);
        assert_eq!(scene.shapes[0].id, a);
        assert_eq!(scene.shapes[1].id, b);
        assert_eq!(scene.shapes[1].color, "Red");
    }

    #[test]
    fn test_hit_test_shape_returns_id() {
        let (drawing, a, b) = sample_drawing();
        let mut scene = SceneSurface::default();
        scene.redraw(&drawing);

        assert_eq!(scene.hit_test_shape(DVec2::new(50.0, 4.0), HIT_TOLERANCE), Some(a));
        assert_eq!(scene.hit_test_shape(DVec2::new(50.0, 47.0), HIT_TOLERANCE), Some(b));
        assert_eq!(scene.hit_test_shape(DVec2::new(50.0, 25.0), HIT_TOLERANCE), None);
    }

    #[test]
    fn test_handles_follow_point_order() {
        let (drawing, a, _) = sample_drawing();
        let mut scene = SceneSurface::default();
        scene.redraw(&drawing);
        scene.show_handles(drawing.get(a).unwrap());

        assert_eq!(scene.handles, vec![DVec2::ZERO, DVec2::new(100.0, 0.0)]);
        assert_eq!(scene.hit_test_handle(DVec2::new(3.0, -3.0)), Some(0));
        assert_eq!(scene.hit_test_handle(DVec2::new(98.0, 2.0)), Some(1));
        assert_eq!(scene.hit_test_handle(DVec2::new(50.0, 0.0)), None);
    }

    #[test]
    fn test_move_handle_out_of_range_is_ignored() {
        let mut scene = SceneSurface::default();
        scene.handles = vec![DVec2::ZERO];
        scene.move_handle(3, DVec2::ONE);
        assert_eq!(scene.handles, vec![DVec2::ZERO]);
        scene.move_handle(0, DVec2::ONE);
        assert_eq!(scene.handles, vec![DVec2::ONE]);
    }

    #[test]
    fn test_update_shape_replaces_geometry() {
        let (mut drawing, a, _) = sample_drawing();
        let mut scene = SceneSurface::default();
        scene.redraw(&drawing);

        let polyline = drawing.get_mut(a).unwrap();
        polyline.points[1] = DVec2::new(200.0, 0.0);
        scene.update_shape(polyline);

        assert_eq!(scene.shapes[0].points[1], DVec2::new(200.0, 0.0));
    }

    #[test]
    fn test_preview_lifecycle() {
        let mut scene = SceneSurface::default();
        scene.show_preview(&[DVec2::ZERO, DVec2::ONE]);
        assert_eq!(scene.preview.as_deref(), Some(&[DVec2::ZERO, DVec2::ONE][..]));
        scene.clear_preview();
        assert!(scene.preview.is_none());
    }
}
