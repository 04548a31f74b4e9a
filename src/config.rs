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

//! Recognizer tuning parameters.

#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

use crate::error::{RecognizerError, Result};

/// Number of points every normalized gesture is resampled to
pub const SAMPLING_RESOLUTION: usize = 64;
/// Side of the reference square gestures are scaled to
pub const SQUARE_SIZE: f32 = 200.0;
/// Controls the number of greedy search trials (eps is in [0..1])
pub const GREEDY_EPSILON: f32 = 0.5;

/// Configuration shared by the template store and the recognizer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecognizerConfig {
    /// Points per normalized gesture (N).
    /// Templates stored with a different count are rejected at load time.
    /// Default: 64
    pub sampling_resolution: usize,

    /// Reference bounding box side after scaling.
    /// Default: 200.0
    pub square_size: f32,

    /// Greedy matching trials are started every `floor(N^(1 - eps))` points.
    /// Default: 0.5
    pub greedy_epsilon: f32,

    /// Best matches farther than this are reported as unrecognized.
    /// Default: None (always report the nearest template)
    pub rejection_threshold: Option<f32>,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            sampling_resolution: SAMPLING_RESOLUTION,
            square_size: SQUARE_SIZE,
            greedy_epsilon: GREEDY_EPSILON,
            rejection_threshold: None,
        }
    }
}

impl RecognizerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sampling_resolution < 2 {
            return Err(RecognizerError::Config(format!(
                "sampling_resolution must be at least 2, got {}",
                self.sampling_resolution
            )));
        }
        if !(self.square_size.is_finite() && self.square_size > 0.0) {
            return Err(RecognizerError::Config(format!(
                "square_size must be positive, got {}",
                self.square_size
            )));
        }
        if !(0.0..=1.0).contains(&self.greedy_epsilon) {
            return Err(RecognizerError::Config(format!(
                "greedy_epsilon must be in [0, 1], got {}",
                self.greedy_epsilon
            )));
        }
        if let Some(threshold) = self.rejection_threshold {
            if !(threshold.is_finite() && threshold >= 0.0) {
                return Err(RecognizerError::Config(format!(
                    "rejection_threshold must be a non-negative number, got {}",
                    threshold
                )));
            }
        }
        Ok(())
    }

    /// Parses and validates a RON document. Missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_ron_str(text: &str) -> Result<Self> {
        let config: Self =
            ron::from_str(text).map_err(|e| RecognizerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = RecognizerConfig::default();
        assert_eq!(config.sampling_resolution, 64);
        assert_eq!(config.square_size, 200.0);
        assert_eq!(config.greedy_epsilon, 0.5);
        assert_eq!(config.rejection_threshold, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let bad = [
            RecognizerConfig { sampling_resolution: 1, ..Default::default() },
            RecognizerConfig { square_size: 0.0, ..Default::default() },
            RecognizerConfig { square_size: f32::NAN, ..Default::default() },
            RecognizerConfig { greedy_epsilon: 1.5, ..Default::default() },
            RecognizerConfig { rejection_threshold: Some(-1.0), ..Default::default() },
        ];
        for config in bad {
            assert!(matches!(config.validate(), Err(RecognizerError::Config(_))));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_ron() {
        let config =
            RecognizerConfig::from_ron_str("(square_size: 100.0, rejection_threshold: Some(12.5))")
                .unwrap();
        assert_eq!(config.square_size, 100.0);
        assert_eq!(config.rejection_threshold, Some(12.5));
        assert_eq!(config.sampling_resolution, 64);

        assert!(RecognizerConfig::from_ron_str("(greedy_epsilon: 2.0)").is_err());
        assert!(RecognizerConfig::from_ron_str("not ron").is_err());
    }
}
