//! On-disk representation of a drawing.
//!
//! Documents written by this app use lowercase field names and `[x, y]` point arrays.
//! Older documents with capitalised field names and `{ "X": .., "Y": .. }` points are
//! still accepted when reading.

use bevy::math::DVec2;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COLOR, DEFAULT_THICKNESS};

use super::model::Drawing;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedDrawing {
    #[serde(default, alias = "Polylines")]
    pub polylines: Vec<SavedPolyline>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPolyline {
    #[serde(alias = "Points", deserialize_with = "deserialize_points")]
    pub points: Vec<DVec2>,
    #[serde(default = "default_thickness", alias = "Thickness")]
    pub thickness: f32,
    #[serde(default = "default_color", alias = "Color")]
    pub color: String,
}

fn default_thickness() -> f32 {
    DEFAULT_THICKNESS
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// A point as it may appear in a document
#[derive(Deserialize)]
#[serde(untagged)]
enum SavedPoint {
    Pair([f64; 2]),
    Legacy {
        #[serde(rename = "X", alias = "x")]
        x: f64,
        #[serde(rename = "Y", alias = "y")]
        y: f64,
    },
}

impl From<SavedPoint> for DVec2 {
    fn from(point: SavedPoint) -> Self {
        match point {
            SavedPoint::Pair([x, y]) => DVec2::new(x, y),
            SavedPoint::Legacy { x, y } => DVec2::new(x, y),
        }
    }
}

fn deserialize_points<'de, D>(deserializer: D) -> Result<Vec<DVec2>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let points = Vec::<SavedPoint>::deserialize(deserializer)?;
    Ok(points.into_iter().map(DVec2::from).collect())
}

impl SavedDrawing {
    /// Snapshot a drawing for saving.
    pub fn from_drawing(drawing: &Drawing) -> Self {
        Self {
            polylines: drawing
                .polylines()
                .iter()
                .map(|p| SavedPolyline {
                    points: p.points.clone(),
                    thickness: p.thickness,
                    color: p.color.clone(),
                })
                .collect(),
        }
    }

    /// Build a drawing with fresh ids.
    ///
    /// Polylines with fewer than two points are dropped, since a finished polyline
    /// always has at least one segment. A non-finite or non-positive thickness is
    /// replaced by the default.
    pub fn into_drawing(self) -> Drawing {
        let mut drawing = Drawing::default();
        for polyline in self.polylines {
            if polyline.points.len() < 2 {
                warn!(
                    "Skipping polyline with {} point(s) in loaded drawing",
                    polyline.points.len()
                );
                continue;
            }
            let thickness = if polyline.thickness.is_finite() && polyline.thickness > 0.0 {
                polyline.thickness
            } else {
                warn!(
                    "Replacing invalid thickness {} with {} in loaded drawing",
                    polyline.thickness, DEFAULT_THICKNESS
                );
                DEFAULT_THICKNESS
            };
            drawing.push(polyline.points, polyline.color, thickness);
        }
        drawing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_drawing_copies_every_polyline() {
        let mut drawing = Drawing::default();
        drawing.push(vec![DVec2::ZERO, DVec2::new(5.0, 5.0)], "Red", 3.0);
        drawing.push(vec![DVec2::ONE, DVec2::X, DVec2::Y], "#00ff00", 1.5);

        let saved = SavedDrawing::from_drawing(&drawing);
        assert_eq!(saved.polylines.len(), 2);
        assert_eq!(saved.polylines[0].color, "Red");
        assert_eq!(saved.polylines[1].points, vec![DVec2::ONE, DVec2::X, DVec2::Y]);
        assert_eq!(saved.polylines[1].thickness, 1.5);
    }

    #[test]
    fn test_into_drawing_drops_short_polylines() {
        let saved = SavedDrawing {
            polylines: vec![
                SavedPolyline {
                    points: vec![DVec2::ZERO],
                    thickness: 2.0,
                    color: "Black".to_string(),
                },
                SavedPolyline {
                    points: vec![DVec2::ZERO, DVec2::ONE],
                    thickness: 2.0,
                    color: "Blue".to_string(),
                },
            ],
        };

        let drawing = saved.into_drawing();
        assert_eq!(drawing.len(), 1);
        assert_eq!(drawing.polylines()[0].color, "Blue");
    }

    #[test]
    fn test_into_drawing_replaces_invalid_thickness() {
        let polyline = |thickness: f32| SavedPolyline {
            points: vec![DVec2::ZERO, DVec2::ONE],
            thickness,
            color: "Black".to_string(),
        };
        let saved = SavedDrawing {
            polylines: vec![polyline(0.0), polyline(-3.0), polyline(f32::NAN), polyline(4.5)],
        };

        let drawing = saved.into_drawing();
        let thicknesses: Vec<f32> = drawing.polylines().iter().map(|p| p.thickness).collect();
        assert_eq!(thicknesses, vec![2.0, 2.0, 2.0, 4.5]);
    }

    #[test]
    fn test_json_uses_point_pairs() {
        let saved = SavedDrawing {
            polylines: vec![SavedPolyline {
                points: vec![DVec2::new(1.5, -2.0), DVec2::new(3.0, 4.0)],
                thickness: 2.0,
                color: "Black".to_string(),
            }],
        };

        let json = serde_json::to_value(&saved).unwrap();
        assert_eq!(json["polylines"][0]["points"][0], serde_json::json!([1.5, -2.0]));
        assert_eq!(json["polylines"][0]["color"], "Black");
    }

    #[test]
    fn test_reads_legacy_document() {
        let json = r#"{
            "Polylines": [
                {
                    "Points": [{ "X": 10.0, "Y": 20.0 }, { "X": 30.5, "Y": 40.0 }],
                    "Thickness": 4.0,
                    "Color": "Green"
                }
            ]
        }"#;

        let saved: SavedDrawing = serde_json::from_str(json).unwrap();
        assert_eq!(saved.polylines.len(), 1);
        assert_eq!(
            saved.polylines[0].points,
            vec![DVec2::new(10.0, 20.0), DVec2::new(30.5, 40.0)]
        );
        assert_eq!(saved.polylines[0].thickness, 4.0);
        assert_eq!(saved.polylines[0].color, "Green");
    }

    #[test]
    fn test_missing_style_fields_use_defaults() {
        let json = r#"{ "polylines": [ { "points": [[0, 0], [1, 1]] } ] }"#;
        let saved: SavedDrawing = serde_json::from_str(json).unwrap();
        assert_eq!(saved.polylines[0].thickness, 2.0);
        assert_eq!(saved.polylines[0].color, "Black");
    }

    #[test]
    fn test_empty_document() {
        let saved: SavedDrawing = serde_json::from_str("{}").unwrap();
        assert!(saved.polylines.is_empty());
    }
}
