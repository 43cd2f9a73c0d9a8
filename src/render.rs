//! SVG drawing of a triangulation.

use std::path::Path;

use rand::{rngs::StdRng, Rng, SeedableRng};
use svg::node::element::{Line, Polygon};
use svg::Document;

use crate::{Float, Point, Triangle};

/// Canvas width in pixels, the height follows the aspect ratio
pub const CANVAS_WIDTH: Float = 1600.;

const PALETTE: [&str; 10] = [
    "orange",
    "brown",
    "purple",
    "blue",
    "darksalmon",
    "yellow",
    "green",
    "red",
    "lime",
    "aqua",
];

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("IO error")]
    Io(#[from] std::io::Error),
    #[error("nothing to draw, the point set is empty")]
    Empty,
    #[error("triangle {triangle} refers to vertex {index} which does not exist")]
    MissingVertex { triangle: usize, index: usize },
}

/// maps input coordinates onto the canvas
#[derive(Debug, Clone, Copy)]
struct Map {
    x: Float,
    y: Float,
    scale: Float,
}

impl Map {
    fn new(points: &[Point]) -> Self {
        let mut min_x = Float::MAX;
        let mut max_x = Float::MIN;
        let mut min_y = Float::MAX;
        let mut max_y = Float::MIN;
        for p in points {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        let w = max_x - min_x;
        let scale = if w > 0. { CANVAS_WIDTH / w } else { 1. };
        Self {
            x: min_x,
            y: min_y,
            scale,
        }
    }

    fn map_point(&self, p: Point) -> (Float, Float) {
        ((p.x - self.x) * self.scale, (p.y - self.y) * self.scale)
    }
}

/// Draw every triangle filled with a palette colour, then the polygon boundary.
///
/// Colours come from a fixed-seed RNG so the same input always renders the
/// same document.
pub fn draw_svg(points: &[Point], triangles: &[Triangle]) -> Result<Document, RenderError> {
    if points.is_empty() {
        return Err(RenderError::Empty);
    }

    let map = Map::new(points);
    let height = points
        .iter()
        .map(|p| map.map_point(*p).1)
        .fold(0., Float::max)
        .ceil();

    let mut doc = Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("width", CANVAS_WIDTH)
        .set("height", height);

    let mut rng = StdRng::seed_from_u64(0);
    for (idx, t) in triangles.iter().enumerate() {
        let corners = t
            .points
            .iter()
            .map(|p| {
                points
                    .get(p.as_usize())
                    .map(|point| map.map_point(*point))
                    .ok_or(RenderError::MissingVertex {
                        triangle: idx,
                        index: p.as_usize(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let color = PALETTE[rng.gen_range(0..PALETTE.len())];
        doc = doc.add(polygon(&corners, color));
    }

    for i in 0..points.len() {
        let p = map.map_point(points[i]);
        let q = map.map_point(points[(i + 1) % points.len()]);
        doc = doc.add(line(p, q));
    }

    Ok(doc)
}

/// draw and write the document to `path`
pub fn save_svg(points: &[Point], triangles: &[Triangle], path: &Path) -> Result<(), RenderError> {
    let doc = draw_svg(points, triangles)?;
    svg::save(path, &doc)?;
    Ok(())
}

fn polygon(corners: &[(Float, Float)], fill_color: &str) -> Polygon {
    let points = corners
        .iter()
        .map(|(x, y)| format!("{x},{y}"))
        .collect::<Vec<_>>()
        .join(" ");

    Polygon::new()
        .set("points", points)
        .set("fill", fill_color)
        .set("stroke", "black")
        .set("stroke-width", 0.3)
}

fn line(p: (Float, Float), q: (Float, Float)) -> Line {
    Line::new()
        .set("x1", p.0)
        .set("y1", p.1)
        .set("x2", q.0)
        .set("y2", q.1)
        .set("stroke-width", 2)
        .set("stroke", "black")
}
