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

use crate::{config::GREEDY_EPSILON, geometry, gesture::GestureTemplate, point::Point};
use log::trace;

/// Distance between a candidate and one template
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Name of the template
    pub name: String,
    /// Greedy cloud distance, lower is closer
    pub distance: f32,
}

/// Classifies a normalized candidate against a set of templates.
/// Returns the closest template, or `None` when the set is empty or no distance is finite.
/// On ties the template seen first wins.
pub fn classify(candidate: &[Point], templates: &[GestureTemplate], eps: f32) -> Option<Match> {
    let mut best: Option<Match> = None;
    let mut min_distance = f32::INFINITY;
    for template in templates {
        let distance = greedy_cloud_match(candidate, &template.points, eps);
        trace!("distance to '{}': {}", template.name, distance);
        if distance < min_distance {
            min_distance = distance;
            best = Some(Match {
                name: template.name.clone(),
                distance,
            });
        }
    }
    best
}

/// Greedy cloud distance from the candidate to every template, in template order
pub fn distances(candidate: &[Point], templates: &[GestureTemplate], eps: f32) -> Vec<Match> {
    templates
        .iter()
        .map(|template| Match {
            name: template.name.clone(),
            distance: greedy_cloud_match(candidate, &template.points, eps),
        })
        .collect()
}

/// Number of points between two greedy search trials: `floor(n^(1 - eps))`, at least 1
pub fn trial_step(n: usize, eps: f32) -> usize {
    ((n as f32).powf(1.0 - eps).floor() as usize).max(1)
}

/// Implements greedy search for a minimum-distance matching between two point clouds.
/// Both clouds must be normalized to the same number of points; clouds of different
/// (or zero) size are infinitely far apart.
pub fn greedy_cloud_match(points1: &[Point], points2: &[Point], eps: f32) -> f32 {
    let n = points1.len();
    if n == 0 || n != points2.len() {
        return f32::INFINITY;
    }

    let step = trial_step(n, eps);
    let mut min_distance = f32::INFINITY;
    for i in (0..n).step_by(step) {
        // match points1 --> points2 starting with index point i
        let dist1 = cloud_distance(points1, points2, i);
        // match points2 --> points1 starting with index point i
        let dist2 = cloud_distance(points2, points1, i);
        min_distance = min_distance.min(dist1).min(dist2);
    }
    min_distance
}

/// [`greedy_cloud_match`] with the default epsilon
pub fn cloud_match(points1: &[Point], points2: &[Point]) -> f32 {
    greedy_cloud_match(points1, points2, GREEDY_EPSILON)
}

/// Computes the distance between two point clouds by performing a minimum-distance greedy matching
/// starting with point start_index. Never backtracks, so the assignment is not always optimal.
pub fn cloud_distance(points1: &[Point], points2: &[Point], start_index: usize) -> f32 {
    let n = points1.len();
    debug_assert_eq!(n, points2.len());
    debug_assert!(start_index < n);
    // matched[j] signals whether point j from the 2nd cloud has been already matched
    let mut matched = vec![false; n];
    let mut sum = 0.0;
    for step in 0..n {
        let i = (start_index + step) % n;
        let mut index = None;
        let mut min_dist = f32::INFINITY;
        for (j, candidate) in points2.iter().enumerate() {
            if matched[j] {
                continue;
            }
            let dist = geometry::euclidean_distance(&points1[i], candidate);
            if index.is_none() || dist < min_dist {
                min_dist = dist;
                index = Some(j);
            }
        }
        let Some(index) = index else { break };
        // point index from the 2nd cloud is matched to point i from the 1st cloud
        matched[index] = true;
        // weight each distance with a confidence coefficient that decreases from 1 towards 0
        let weight = 1.0 - step as f32 / n as f32;
        sum += weight * min_dist;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::normalize;
    use approx::assert_abs_diff_eq;

    fn cloud(coords: &[(f32, f32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn step_for_default_resolution() {
        assert_eq!(trial_step(64, 0.5), 8);
        assert_eq!(trial_step(64, 1.0), 1);
        assert_eq!(trial_step(64, 0.0), 64);
        assert_eq!(trial_step(2, 0.5), 1);
    }

    #[test]
    fn identical_clouds_are_zero_apart() {
        let points = normalize(&cloud(&[(0.0, 100.0), (0.0, 0.0), (100.0, 0.0)])).unwrap();
        assert_eq!(cloud_match(&points, &points), 0.0);
    }

    #[test]
    fn weights_decay_from_the_start_index() {
        let a = cloud(&[(0.0, 0.0), (10.0, 0.0)]);
        let b = cloud(&[(0.0, 1.0), (10.0, 0.0)]);
        // start 0: a[0] -> b[0] (1.0, weight 1), a[1] -> b[1] (0.0, weight 0.5)
        assert_abs_diff_eq!(cloud_distance(&a, &b, 0), 1.0);
        // start 1: a[1] -> b[1] (0.0, weight 1), a[0] -> b[0] (1.0, weight 0.5)
        assert_abs_diff_eq!(cloud_distance(&a, &b, 1), 0.5);
        assert_abs_diff_eq!(greedy_cloud_match(&a, &b, 1.0), 0.5);
    }

    #[test]
    fn greedy_match_never_backtracks() {
        // a[0] greedily takes b[0], leaving a[1] with the far point
        let a = cloud(&[(0.0, 0.0), (1.0, 0.0)]);
        let b = cloud(&[(0.5, 0.0), (-10.0, 0.0)]);
        assert_abs_diff_eq!(cloud_distance(&a, &b, 0), 0.5 + 0.5 * 11.0);
    }

    #[test]
    fn mismatched_sizes_are_infinitely_far() {
        let a = cloud(&[(0.0, 0.0), (1.0, 0.0)]);
        let b = cloud(&[(0.0, 0.0)]);
        assert_eq!(cloud_match(&a, &b), f32::INFINITY);
        assert_eq!(cloud_match(&[], &[]), f32::INFINITY);
    }

    #[test]
    fn classify_picks_closest_and_first_on_ties() {
        let l = normalize(&cloud(&[(0.0, 100.0), (0.0, 0.0), (100.0, 0.0)])).unwrap();
        let v = normalize(&cloud(&[(0.0, 100.0), (50.0, 0.0), (100.0, 100.0)])).unwrap();
        let templates = vec![
            GestureTemplate::from_normalized("V", v),
            GestureTemplate::from_normalized("L", l.clone()),
            GestureTemplate::from_normalized("L-again", l.clone()),
        ];
        let best = classify(&l, &templates, GREEDY_EPSILON).unwrap();
        assert_eq!(best.name, "L");
        assert_eq!(best.distance, 0.0);

        let all = distances(&l, &templates, GREEDY_EPSILON);
        assert_eq!(all.len(), 3);
        assert!(all[0].distance > 0.0);
        assert!(classify(&l, &[], GREEDY_EPSILON).is_none());
    }
}
