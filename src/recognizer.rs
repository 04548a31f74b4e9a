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

use crate::{
    alphabet,
    error::Result,
    gesture::normalize_with,
    point::Point,
    point_cloud_recognizer::{self, Match},
    template_store::{AddedTemplate, TemplateStore},
};
use log::debug;

/// What [`Recognizer::recognize`] concluded about a stroke
#[derive(Debug, Clone, PartialEq)]
pub enum Recognition {
    /// Closest template
    Match(Match),
    /// The store holds no templates
    NoTemplates,
    /// No template was close enough
    Unrecognized,
}

impl Recognition {
    /// Name of the matched template, if any
    pub fn label(&self) -> Option<&str> {
        match self {
            Recognition::Match(m) => Some(&m.name),
            _ => None,
        }
    }
}

/// Normalizes candidate strokes and finds the nearest stored template
pub struct Recognizer {
    store: TemplateStore,
}

impl Recognizer {
    pub fn new(store: TemplateStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TemplateStore {
        &mut self.store
    }

    /// Adds a raw stroke as a new template
    pub fn train(&mut self, name: &str, points: &[Point]) -> Result<AddedTemplate> {
        self.store.add_template(name, points)
    }

    /// Trains one template per letter of [`alphabet::LETTERS`]
    pub fn seed_alphabet(&mut self) -> Result<Vec<AddedTemplate>> {
        alphabet::LETTERS
            .iter()
            .map(|(name, coords)| {
                let points: Vec<Point> = coords.iter().copied().map(Point::from).collect();
                self.train(name, &points)
            })
            .collect()
    }

    /// Classifies a raw stroke. An empty store answers [`Recognition::NoTemplates`]
    /// without looking at the stroke; otherwise a degenerate stroke is an error.
    pub fn recognize(&self, raw: &[Point]) -> Result<Recognition> {
        if self.store.is_empty() {
            return Ok(Recognition::NoTemplates);
        }
        let config = self.store.config();
        let candidate = self.normalize(raw)?;
        let recognition = match point_cloud_recognizer::classify(
            &candidate,
            self.store.templates(),
            config.greedy_epsilon,
        ) {
            Some(best) if config.rejection_threshold.map_or(true, |t| best.distance <= t) => {
                Recognition::Match(best)
            }
            _ => Recognition::Unrecognized,
        };
        debug!("recognized {:?}", recognition);
        Ok(recognition)
    }

    /// Distance from a raw stroke to every template, closest first.
    /// Templates at equal distance keep their store order.
    pub fn rank(&self, raw: &[Point]) -> Result<Vec<Match>> {
        if self.store.is_empty() {
            return Ok(Vec::new());
        }
        let candidate = self.normalize(raw)?;
        let mut matches = point_cloud_recognizer::distances(
            &candidate,
            self.store.templates(),
            self.store.config().greedy_epsilon,
        );
        matches.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        Ok(matches)
    }

    fn normalize(&self, raw: &[Point]) -> Result<Vec<Point>> {
        let config = self.store.config();
        normalize_with(raw, config.sampling_resolution, config.square_size)
    }
}
