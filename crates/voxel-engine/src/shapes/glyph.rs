//! Numeral glyph outlines: built-in strokes, JSON assets, and triangulation.
//!
//! An outline is a set of simple polygons in the XY plane. Sampling
//! triangulates each polygon by ear clipping and hands the triangles to the
//! area-weighted surface sampler, so overlapping stroke quads simply add
//! density where they meet.

use std::path::Path;

use glam::{Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::sampler::{SurfaceSampler, Triangle};
use super::ShapeError;

/// Total width of the uniform Z jitter added to glyph samples.
pub const GLYPH_DEPTH_SPREAD: f32 = 4.0;
const BUILTIN_STROKE_WIDTH: f32 = 1.3;

/// Filled 2D outline, one polygon per closed contour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlyphOutline {
    pub polygons: Vec<Vec<Vec2>>,
}

/// On-disk asset formats.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GlyphAsset {
    Polygons { polygons: Vec<Vec<[f32; 2]>> },
    Strokes { strokes: Vec<Vec<[f32; 2]>>, width: f32 },
}

impl GlyphOutline {
    /// The numerals "36", about ten units tall, centered on the origin.
    pub fn builtin() -> Self {
        let three: &[[f32; 2]] = &[
            [0.0, 10.0],
            [4.0, 10.0],
            [5.0, 9.0],
            [5.0, 6.0],
            [4.0, 5.0],
            [1.5, 5.0],
        ];
        let three_lower: &[[f32; 2]] = &[
            [4.0, 5.0],
            [5.0, 4.0],
            [5.0, 1.0],
            [4.0, 0.0],
            [0.0, 0.0],
        ];
        let six: &[[f32; 2]] = &[
            [12.0, 10.0],
            [8.0, 10.0],
            [7.0, 9.0],
            [7.0, 1.0],
            [8.0, 0.0],
            [11.0, 0.0],
            [12.0, 1.0],
            [12.0, 4.0],
            [11.0, 5.0],
            [7.0, 5.0],
        ];
        Self::from_strokes(&[three, three_lower, six], BUILTIN_STROKE_WIDTH).centered()
    }

    /// Thicken polylines into quads, one per segment, with square caps so
    /// consecutive segments overlap at the joints.
    pub fn from_strokes<S: AsRef<[[f32; 2]]>>(strokes: &[S], width: f32) -> Self {
        let half = width.abs() * 0.5;
        let mut polygons = Vec::new();
        for stroke in strokes {
            for pair in stroke.as_ref().windows(2) {
                let (a, b) = (Vec2::from(pair[0]), Vec2::from(pair[1]));
                let Some(dir) = (b - a).try_normalize() else {
                    continue;
                };
                let normal = dir.perp() * half;
                let (a, b) = (a - dir * half, b + dir * half);
                polygons.push(vec![a - normal, b - normal, b + normal, a + normal]);
            }
        }
        Self { polygons }
    }

    /// Parse a JSON asset: `{"polygons": [[[x, y], ...], ...]}` or
    /// `{"strokes": [[[x, y], ...], ...], "width": w}`.
    ///
    /// The result is centered on its bounding-box midpoint.
    pub fn from_json(json: &str) -> Result<Self, ShapeError> {
        let asset: GlyphAsset =
            serde_json::from_str(json).map_err(|e| ShapeError::Parse(e.to_string()))?;
        let outline = match asset {
            GlyphAsset::Polygons { polygons } => Self {
                polygons: polygons
                    .into_iter()
                    .map(|poly| poly.into_iter().map(Vec2::from).collect())
                    .collect(),
            },
            GlyphAsset::Strokes { strokes, width } => Self::from_strokes(&strokes, width),
        };
        if outline.bounds().is_none() {
            return Err(ShapeError::EmptyOutline);
        }
        Ok(outline.centered())
    }

    /// Read and parse an asset file.
    pub fn load(path: &Path) -> Result<Self, ShapeError> {
        let json = std::fs::read_to_string(path).map_err(|source| ShapeError::Asset {
            path: path.to_path_buf(),
            source,
        })?;
        let outline = Self::from_json(&json)?;
        debug!(
            path = %path.display(),
            polygons = outline.polygons.len(),
            "loaded glyph outline"
        );
        Ok(outline)
    }

    /// Axis-aligned bounds of every vertex, or `None` for an empty outline.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut vertices = self.polygons.iter().flatten();
        let first = *vertices.next()?;
        Some(vertices.fold((first, first), |(lo, hi), v| (lo.min(*v), hi.max(*v))))
    }

    /// Translate so the bounding-box midpoint sits at the origin.
    pub fn centered(mut self) -> Self {
        if let Some((lo, hi)) = self.bounds() {
            let mid = (lo + hi) * 0.5;
            for v in self.polygons.iter_mut().flatten() {
                *v -= mid;
            }
        }
        self
    }

    /// Triangles covering the filled area, at z = 0.
    pub fn triangles(&self) -> Vec<Triangle> {
        self.polygons
            .iter()
            .flat_map(|poly| triangulate(poly))
            .map(|[a, b, c]| Triangle::new(a.extend(0.0), b.extend(0.0), c.extend(0.0)))
            .collect()
    }

    /// Build the area sampler for this outline.
    pub fn sampler(&self) -> Result<SurfaceSampler, ShapeError> {
        SurfaceSampler::new(self.triangles())
    }
}

/// Sample `count` points over a prepared glyph sampler with depth jitter.
pub(crate) fn glyph<R: Rng + ?Sized>(
    sampler: &SurfaceSampler,
    count: usize,
    rng: &mut R,
) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let p = sampler.sample(rng);
            Vec3::new(p.x, p.y, (rng.gen::<f32>() - 0.5) * GLYPH_DEPTH_SPREAD)
        })
        .collect()
}

fn signed_area(poly: &[Vec2]) -> f32 {
    let n = poly.len();
    (0..n)
        .map(|i| poly[i].perp_dot(poly[(i + 1) % n]))
        .sum::<f32>()
        * 0.5
}

fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = (b - a).perp_dot(p - a);
    let d2 = (c - b).perp_dot(p - b);
    let d3 = (a - c).perp_dot(p - c);
    d1 >= 0.0 && d2 >= 0.0 && d3 >= 0.0
}

/// Ear-clipping triangulation of a simple polygon of either winding.
///
/// A repeated closing vertex is ignored. Degenerate input that stops
/// yielding ears returns the triangles found so far.
pub fn triangulate(polygon: &[Vec2]) -> Vec<[Vec2; 3]> {
    let mut poly: Vec<Vec2> = polygon.to_vec();
    if poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }
    if poly.len() < 3 {
        return Vec::new();
    }
    if signed_area(&poly) < 0.0 {
        poly.reverse();
    }

    let mut remaining: Vec<usize> = (0..poly.len()).collect();
    let mut triangles = Vec::with_capacity(poly.len() - 2);

    while remaining.len() > 3 {
        let n = remaining.len();
        let ear = (0..n).find(|&i| {
            let (ia, ib, ic) = (remaining[(i + n - 1) % n], remaining[i], remaining[(i + 1) % n]);
            let (a, b, c) = (poly[ia], poly[ib], poly[ic]);
            if (b - a).perp_dot(c - b) <= f32::EPSILON {
                return false;
            }
            !remaining
                .iter()
                .filter(|&&j| j != ia && j != ib && j != ic)
                .any(|&j| point_in_triangle(poly[j], a, b, c))
        });

        let Some(i) = ear else {
            break;
        };
        let (ia, ib, ic) = (remaining[(i + n - 1) % n], remaining[i], remaining[(i + 1) % n]);
        triangles.push([poly[ia], poly[ib], poly[ic]]);
        remaining.remove(i);
    }

    if let [a, b, c] = remaining[..] {
        triangles.push([poly[a], poly[b], poly[c]]);
    }
    triangles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(tris: &[[Vec2; 3]]) -> f32 {
        tris.iter()
            .map(|[a, b, c]| 0.5 * (*b - *a).perp_dot(*c - *a).abs())
            .sum()
    }

    #[test]
    fn triangulates_square_either_winding() {
        let ccw = [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y];
        let mut cw = ccw;
        cw.reverse();
        for poly in [ccw, cw] {
            let tris = triangulate(&poly);
            assert_eq!(tris.len(), 2);
            assert!((area(&tris) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn triangulates_concave_l_shape() {
        let l = [
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(0.0, 2.0),
        ];
        let tris = triangulate(&l);
        assert_eq!(tris.len(), 4);
        assert!((area(&tris) - 3.0).abs() < 1e-5);
    }

    #[test]
    fn closing_vertex_is_ignored() {
        let closed = [Vec2::ZERO, Vec2::X, Vec2::Y, Vec2::ZERO];
        assert_eq!(triangulate(&closed).len(), 1);
    }

    #[test]
    fn builtin_is_centered_and_about_ten_tall() {
        let (lo, hi) = GlyphOutline::builtin().bounds().unwrap();
        let mid = (lo + hi) * 0.5;
        assert!(mid.length() < 1e-4);
        let height = hi.y - lo.y;
        assert!((10.0..12.0).contains(&height), "height = {height}");
    }

    #[test]
    fn builtin_has_fillable_area() {
        let sampler = GlyphOutline::builtin().sampler().unwrap();
        assert!(sampler.total_area() > 10.0);
    }

    #[test]
    fn parses_polygon_asset_and_centers_it() {
        let outline =
            GlyphOutline::from_json(r#"{"polygons": [[[10, 10], [14, 10], [14, 12], [10, 12]]]}"#)
                .unwrap();
        let (lo, hi) = outline.bounds().unwrap();
        assert_eq!(lo, Vec2::new(-2.0, -1.0));
        assert_eq!(hi, Vec2::new(2.0, 1.0));
    }

    #[test]
    fn parses_stroke_asset() {
        let outline =
            GlyphOutline::from_json(r#"{"strokes": [[[0, 0], [0, 10]]], "width": 2}"#).unwrap();
        assert_eq!(outline.polygons.len(), 1);
        let (lo, hi) = outline.bounds().unwrap();
        assert!((hi.y - lo.y - 12.0).abs() < 1e-5);
        assert!((hi.x - lo.x - 2.0).abs() < 1e-5);
    }

    #[test]
    fn malformed_asset_is_parse_error() {
        assert!(matches!(
            GlyphOutline::from_json("{\"shapes\": 1}"),
            Err(ShapeError::Parse(_))
        ));
    }

    #[test]
    fn empty_asset_is_empty_outline() {
        assert!(matches!(
            GlyphOutline::from_json(r#"{"polygons": []}"#),
            Err(ShapeError::EmptyOutline)
        ));
    }

    #[test]
    fn missing_file_is_asset_error() {
        let err = GlyphOutline::load(Path::new("/tmp/no_such_voxel_glyph.json")).unwrap_err();
        assert!(matches!(err, ShapeError::Asset { .. }));
    }

    #[test]
    fn load_reads_asset_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glyph.json");
        std::fs::write(&path, r#"{"polygons": [[[0, 0], [1, 0], [0, 1]]]}"#).unwrap();
        let outline = GlyphOutline::load(&path).unwrap();
        assert_eq!(outline.polygons.len(), 1);
    }
}
