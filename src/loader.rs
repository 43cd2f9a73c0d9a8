//! Binary problem and result files.
//!
//! Problem: little-endian `i32` vertex count `n`, then `n` pairs of `f32` `(x, y)`.
//! Result: little-endian `f32` cost, then `n - 2` triangles of three `i32` indices.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::{Float, Point, Triangle, Triangulation};

#[derive(thiserror::Error, Debug)]
pub enum LoaderError {
    #[error("IO error")]
    Io(#[from] std::io::Error),
    #[error("negative point count {0}")]
    NegativeCount(i32),
    #[error("triangle {triangle} has negative vertex index {index}")]
    NegativeIndex { triangle: usize, index: i32 },
    #[error("vertex index {0} does not fit in a 32-bit signed integer")]
    IndexOverflow(u32),
    #[error("{0} points do not fit in a 32-bit signed count")]
    TooManyPoints(usize),
}

/// Loader loads a point set from a source.
/// e.g: BinaryFileLoader reads the binary problem format from a file path
pub trait Loader {
    fn load(&mut self, source: &Path) -> Result<Vec<Point>, LoaderError>;
}

/// Loads problem files from disk
#[derive(Default)]
pub struct BinaryFileLoader {}

impl Loader for BinaryFileLoader {
    fn load(&mut self, path: &Path) -> Result<Vec<Point>, LoaderError> {
        let f = File::open(path)?;
        read_problem(BufReader::new(f))
    }
}

/// read a problem from `reader`; a short stream is an `UnexpectedEof` io error
pub fn read_problem(mut reader: impl Read) -> Result<Vec<Point>, LoaderError> {
    let n = read_i32(&mut reader)?;
    if n < 0 {
        return Err(LoaderError::NegativeCount(n));
    }

    // the count is untrusted, cap the up-front allocation
    let mut points = Vec::with_capacity((n as usize).min(1 << 16));
    for _ in 0..n {
        let x = read_f32(&mut reader)?;
        let y = read_f32(&mut reader)?;
        points.push(Point::new(Float::from(x), Float::from(y)));
    }

    Ok(points)
}

/// write `points` in the problem format, mostly useful to produce inputs
pub fn write_problem(mut writer: impl Write, points: &[Point]) -> Result<(), LoaderError> {
    let n = i32::try_from(points.len()).map_err(|_| LoaderError::TooManyPoints(points.len()))?;
    writer.write_all(&n.to_le_bytes())?;
    for p in points {
        writer.write_all(&(p.x as f32).to_le_bytes())?;
        writer.write_all(&(p.y as f32).to_le_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_result(
    mut writer: impl Write,
    triangulation: &Triangulation,
) -> Result<(), LoaderError> {
    writer.write_all(&(triangulation.cost() as f32).to_le_bytes())?;
    for t in triangulation {
        for index in t.indices() {
            let index = i32::try_from(index).map_err(|_| LoaderError::IndexOverflow(index))?;
            writer.write_all(&index.to_le_bytes())?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// write the result file at `path`, truncating it
pub fn save_result(path: &Path, triangulation: &Triangulation) -> Result<(), LoaderError> {
    let f = File::create(path)?;
    write_result(BufWriter::new(f), triangulation)
}

/// read back a result written for a polygon with `num_points` vertices
pub fn read_result(
    mut reader: impl Read,
    num_points: usize,
) -> Result<(f32, Vec<Triangle>), LoaderError> {
    let cost = read_f32(&mut reader)?;
    let count = num_points.saturating_sub(2);

    let mut triangles = Vec::with_capacity(count.min(1 << 16));
    for triangle in 0..count {
        let mut indices = [0u32; 3];
        for slot in indices.iter_mut() {
            let index = read_i32(&mut reader)?;
            *slot = u32::try_from(index)
                .map_err(|_| LoaderError::NegativeIndex { triangle, index })?;
        }
        triangles.push(Triangle::from_indices(indices));
    }

    Ok((cost, triangles))
}

fn read_i32(reader: &mut impl Read) -> std::io::Result<i32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

fn read_f32(reader: &mut impl Read) -> std::io::Result<f32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(f32::from_le_bytes(buf))
}
