/*
 * The $P Point-Cloud Recognizer (rust version)
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

//! Minimal polyline strokes for the upper-case Latin letters, usable as a starter training set.
//! Coordinates are in a 100x100 box with y pointing up.

use crate::point::Point;

/// `(label, stroke)` pairs, one per letter
pub const LETTERS: [(&str, &[(f32, f32)]); 26] = [
    ("A", &[(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)]),
    ("B", &[(0.0, 0.0), (0.0, 100.0), (50.0, 75.0), (0.0, 50.0), (50.0, 25.0), (0.0, 0.0)]),
    ("C", &[(100.0, 100.0), (50.0, 100.0), (0.0, 50.0), (50.0, 0.0), (100.0, 0.0)]),
    ("D", &[(0.0, 0.0), (0.0, 100.0), (75.0, 75.0), (75.0, 25.0), (0.0, 0.0)]),
    ("E", &[(100.0, 100.0), (0.0, 100.0), (0.0, 50.0), (75.0, 50.0), (0.0, 50.0), (0.0, 0.0), (100.0, 0.0)]),
    ("F", &[(0.0, 0.0), (0.0, 100.0), (75.0, 100.0), (0.0, 100.0), (0.0, 50.0), (50.0, 50.0)]),
    ("G", &[(100.0, 100.0), (0.0, 100.0), (0.0, 0.0), (100.0, 0.0), (100.0, 50.0), (50.0, 50.0)]),
    ("H", &[(0.0, 0.0), (0.0, 100.0), (0.0, 50.0), (100.0, 50.0), (100.0, 100.0), (100.0, 0.0)]),
    ("I", &[(50.0, 0.0), (50.0, 100.0)]),
    ("J", &[(100.0, 100.0), (50.0, 100.0), (50.0, 0.0), (0.0, 0.0)]),
    ("K", &[(0.0, 0.0), (0.0, 100.0), (0.0, 50.0), (100.0, 100.0), (0.0, 50.0), (100.0, 0.0)]),
    ("L", &[(0.0, 100.0), (0.0, 0.0), (100.0, 0.0)]),
    ("M", &[(0.0, 0.0), (0.0, 100.0), (50.0, 50.0), (100.0, 100.0), (100.0, 0.0)]),
    ("N", &[(0.0, 0.0), (0.0, 100.0), (100.0, 0.0), (100.0, 100.0)]),
    ("O", &[(50.0, 0.0), (0.0, 50.0), (50.0, 100.0), (100.0, 50.0), (50.0, 0.0)]),
    ("P", &[(0.0, 0.0), (0.0, 100.0), (50.0, 100.0), (50.0, 50.0), (0.0, 50.0)]),
    ("Q", &[(50.0, 0.0), (0.0, 50.0), (50.0, 100.0), (100.0, 50.0), (50.0, 0.0), (75.0, 25.0), (100.0, 0.0)]),
    ("R", &[(0.0, 0.0), (0.0, 100.0), (50.0, 100.0), (50.0, 50.0), (0.0, 50.0), (100.0, 0.0)]),
    ("S", &[(100.0, 100.0), (0.0, 100.0), (0.0, 50.0), (100.0, 50.0), (100.0, 0.0), (0.0, 0.0)]),
    ("T", &[(0.0, 100.0), (100.0, 100.0), (50.0, 100.0), (50.0, 0.0)]),
    ("U", &[(0.0, 100.0), (0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]),
    ("V", &[(0.0, 100.0), (50.0, 0.0), (100.0, 100.0)]),
    ("W", &[(0.0, 100.0), (25.0, 0.0), (50.0, 100.0), (75.0, 0.0), (100.0, 100.0)]),
    ("X", &[(0.0, 0.0), (100.0, 100.0), (50.0, 50.0), (0.0, 100.0), (100.0, 0.0)]),
    ("Y", &[(0.0, 100.0), (50.0, 50.0), (100.0, 100.0), (50.0, 50.0), (50.0, 0.0)]),
    ("Z", &[(0.0, 100.0), (100.0, 100.0), (0.0, 0.0), (100.0, 0.0)]),
];

/// The stroke for `label`, if it is one of [`LETTERS`]
pub fn stroke(label: &str) -> Option<Vec<Point>> {
    LETTERS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, coords)| coords.iter().copied().map(Point::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::normalize;

    #[test]
    fn every_letter_normalizes() {
        for (name, _) in LETTERS {
            let points = normalize(&stroke(name).unwrap()).unwrap();
            assert_eq!(points.len(), 64, "{}", name);
            assert!(points.iter().all(Point::is_finite), "{}", name);
        }
    }

    #[test]
    fn unknown_label() {
        assert!(stroke("Ñ").is_none());
        assert_eq!(stroke("L").unwrap().len(), 3);
    }
}
