/*
 * The $P Point-Cloud Recognizer (rust version)
 * 
 * Translated to rust from the original authors' C# code with an AI tool.
 * The translated code has been reviewed by Ferran Pujol Camins.
 *
 * Original authors:
 * 
 * 	    Radu-Daniel Vatavu, Ph.D.
 *	    University Stefan cel Mare of Suceava
 *	    Suceava 720229, Romania
 *	    vatavu@eed.usv.ro
 *
 *	    Lisa Anthony, Ph.D.
 *      UMBC
 *      Information Systems Department
 *      1000 Hilltop Circle
 *      Baltimore, MD 21250
 *      lanthony@umbc.edu
 *
 *	    Jacob O. Wobbrock, Ph.D.
 * 	    The Information School
 *	    University of Washington
 *	    Seattle, WA 98195-2840
 *	    wobbrock@uw.edu
 *
 * The academic publication for the $P recognizer, and what should be 
 * used to cite it, is:
 *
 *	Vatavu, R.-D., Anthony, L. and Wobbrock, J.O. (2012).  
 *	  Gestures as point clouds: A $P recognizer for user interface 
 *	  prototypes. Proceedings of the ACM Int'l Conference on  
 *	  Multimodal Interfaces (ICMI '12). Santa Monica, California  
 *	  (October 22-26, 2012). New York: ACM Press, pp. 273-280.
 *
 * This software is distributed under the "New BSD License" agreement:
 *
 * Copyright (c) 2012, Radu-Daniel Vatavu, Lisa Anthony, and 
 * Jacob O. Wobbrock. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions are met:
 *    * Redistributions of source code must retain the above copyright
 *      notice, this list of conditions and the following disclaimer.
 *    * Redistributions in binary form must reproduce the above copyright
 *      notice, this list of conditions and the following disclaimer in the
 *      documentation and/or other materials provided with the distribution.
 *    * Neither the names of the University Stefan cel Mare of Suceava, 
 *	    University of Washington, nor UMBC, nor the names of its contributors 
 *	    may be used to endorse or promote products derived from this software 
 *	    without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS
 * IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO,
 * THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR
 * PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL Radu-Daniel Vatavu OR Lisa Anthony
 * OR Jacob O. Wobbrock OR Ferran Pujol Camins BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, 
 * EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT 
 * OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS 
 * INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, 
 * STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY
 * OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF
 * SUCH DAMAGE.
**/

use crate::{
    config::{SAMPLING_RESOLUTION, SQUARE_SIZE},
    error::{RecognizerError, Result},
    geometry::{self, BoundingBox},
    point::Point,
};
use log::trace;
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// An axis whose extent falls below this fraction of the larger extent is treated as
/// collapsed and left unscaled. A straight stroke is flat after rotation, and its height
/// is only rounding noise.
const MIN_EXTENT_RATIO: f32 = 1e-4;

/// A labeled, normalized example stroke.
/// Several templates may share a name; each acts as an alternative way of drawing that class.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GestureTemplate {
    /// Gesture class
    pub name: String,
    /// Gesture points (normalized)
    pub points: Vec<Point>,
}

impl GestureTemplate {
    /// Constructs a new template from a raw stroke and a name, normalizing it with the
    /// default resolution and square size
    pub fn new(name: &str, raw: &[Point]) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            points: normalize(raw)?,
        })
    }

    /// Wraps points that are already normalized, e.g. records read back from storage
    pub fn from_normalized(name: &str, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Normalizes a raw stroke into 64 points, rotated to a zero indicative angle,
/// scaled to a 200x200 box and centered on the origin.
pub fn normalize(raw: &[Point]) -> Result<Vec<Point>> {
    normalize_with(raw, SAMPLING_RESOLUTION, SQUARE_SIZE)
}

/// Same as [`normalize`] with an explicit point count and reference size.
///
/// The raw slice is never modified; every stage returns a fresh vector.
/// Strokes with fewer than two points, non-finite coordinates or no measurable
/// length are rejected with [`RecognizerError::DegenerateInput`].
pub fn normalize_with(raw: &[Point], n: usize, size: f32) -> Result<Vec<Point>> {
    let degenerate = |reason| RecognizerError::DegenerateInput {
        points: raw.len(),
        reason,
    };
    if raw.len() < 2 {
        return Err(degenerate("at least two points are required"));
    }
    if !raw.iter().all(Point::is_finite) {
        return Err(degenerate("coordinates must be finite"));
    }
    let length = geometry::path_length(raw);
    if length == 0.0 {
        return Err(degenerate("path length is zero"));
    }
    if !length.is_finite() {
        return Err(degenerate("path length overflows"));
    }
    if n < 2 {
        return Err(RecognizerError::Config(format!(
            "cannot resample to {} points",
            n
        )));
    }

    let points = resample(raw, n);
    let points = rotate_to_zero(&points);
    let points = scale_to_square(&points, size);
    let points = translate_to_origin(&points);
    if !points.iter().all(Point::is_finite) {
        return Err(degenerate("normalization produced non-finite coordinates"));
    }
    trace!("normalized {} raw points into {}", raw.len(), points.len());
    Ok(points)
}

/// Resamples the path into n equally spaced points.
///
/// `previous` is the start of the segment being walked. When an interpolated point is
/// emitted it becomes the new segment start while the segment end stays pending, so one
/// long raw segment can yield several samples.
pub fn resample(points: &[Point], n: usize) -> Vec<Point> {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    let interval = geometry::path_length(points) / (n as f32 - 1.0);
    let mut resampled = Vec::with_capacity(n);
    resampled.push(first);

    let mut accumulated = 0.0;
    let mut previous = first;
    let mut i = 1;
    while i < points.len() && resampled.len() < n {
        let next = points[i];
        let dist = geometry::euclidean_distance(&previous, &next);
        if accumulated + dist >= interval && dist > 0.0 {
            let q = previous.lerp(&next, (interval - accumulated) / dist);
            resampled.push(q);
            previous = q;
            accumulated = 0.0;
        } else {
            accumulated += dist;
            previous = next;
            i += 1;
        }
    }

    // sometimes we fall a rounding-error short of adding the last point, so add it if so
    while resampled.len() < n {
        resampled.push(last);
    }
    resampled
}

/// Angle from the centroid to the first point
pub fn indicative_angle(points: &[Point]) -> f32 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    let c = geometry::centroid(points);
    (first.y - c.y).atan2(first.x - c.x)
}

/// Rotates the points around their centroid so the first point lies at angle zero
pub fn rotate_to_zero(points: &[Point]) -> Vec<Point> {
    let c = geometry::centroid(points);
    geometry::rotate_around(points, &c, -indicative_angle(points))
}

/// Non-uniform scaling: width and height are each stretched to `size`,
/// the aspect ratio is not preserved. Scales from the box corner, which only shifts the
/// result by a constant that [`translate_to_origin`] removes.
pub fn scale_to_square(points: &[Point], size: f32) -> Vec<Point> {
    let Some(bbox) = BoundingBox::of(points) else {
        return Vec::new();
    };
    let (width, height) = (bbox.width(), bbox.height());
    let floor = width.max(height) * MIN_EXTENT_RATIO;
    let sx = if width > floor { size / width } else { 1.0 };
    let sy = if height > floor { size / height } else { 1.0 };
    points
        .iter()
        .map(|p| Point::new((p.x - bbox.min_x) * sx, (p.y - bbox.min_y) * sy))
        .collect()
}

/// Moves the centroid of the points to the origin
pub fn translate_to_origin(points: &[Point]) -> Vec<Point> {
    let c = geometry::centroid(points);
    points
        .iter()
        .map(|p| Point::new(p.x - c.x, p.y - c.y))
        .collect()
}
