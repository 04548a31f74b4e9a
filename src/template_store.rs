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
    config::RecognizerConfig,
    error::{RecognizerError, Result},
    gesture::{normalize_with, GestureTemplate},
    point::Point,
    repository::{InMemoryRepository, TemplateRepository},
};
use log::{debug, info, warn};

/// Outcome of [`TemplateStore::add_template`]
#[derive(Debug)]
pub struct AddedTemplate {
    /// Position of the new template in the store
    pub index: usize,
    /// Storage key, or why the repository could not save it.
    /// The template stays in memory either way.
    pub persisted: Result<String>,
}

/// In-memory collection of normalized templates, backed by a repository
pub struct TemplateStore {
    config: RecognizerConfig,
    templates: Vec<GestureTemplate>,
    repository: Box<dyn TemplateRepository>,
}

impl TemplateStore {
    pub fn new(config: RecognizerConfig, repository: Box<dyn TemplateRepository>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            templates: Vec::new(),
            repository,
        })
    }

    /// Default configuration and a repository that keeps nothing past the process
    pub fn in_memory() -> Self {
        Self {
            config: RecognizerConfig::default(),
            templates: Vec::new(),
            repository: Box::new(InMemoryRepository::new()),
        }
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    pub fn templates(&self) -> &[GestureTemplate] {
        &self.templates
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Normalizes a raw stroke, appends it, then hands it to the repository.
    /// Only degenerate strokes fail; a failed save is reported in [`AddedTemplate::persisted`].
    pub fn add_template(&mut self, name: &str, points: &[Point]) -> Result<AddedTemplate> {
        let normalized = normalize_with(
            points,
            self.config.sampling_resolution,
            self.config.square_size,
        )?;
        let template = GestureTemplate::from_normalized(name, normalized);
        let persisted = self.repository.save(&template);
        match &persisted {
            Ok(key) => debug!("added template '{}' as {}", name, key),
            Err(e) => warn!("template '{}' kept in memory only: {}", name, e),
        }
        self.templates.push(template);
        Ok(AddedTemplate {
            index: self.templates.len() - 1,
            persisted,
        })
    }

    /// Replaces the collection with already normalized templates, skipping malformed ones.
    /// Returns how many were kept.
    pub fn load_all(&mut self, templates: Vec<GestureTemplate>) -> usize {
        let total = templates.len();
        self.templates = templates
            .into_iter()
            .filter(|t| match self.check(t) {
                Ok(()) => true,
                Err(e) => {
                    warn!("skipping {}", e);
                    false
                }
            })
            .collect();
        info!("loaded {} of {} templates", self.templates.len(), total);
        self.templates.len()
    }

    /// Loads every template the repository has. If the repository fails the store is
    /// left empty and the error returned.
    pub fn reload(&mut self) -> Result<usize> {
        match self.repository.load_all() {
            Ok(templates) => Ok(self.load_all(templates)),
            Err(e) => {
                warn!("could not load templates: {}", e);
                self.templates.clear();
                Err(e)
            }
        }
    }

    fn check(&self, template: &GestureTemplate) -> Result<()> {
        let malformed = |why: String| Err(RecognizerError::MalformedTemplate(why));
        if template.name.is_empty() {
            return malformed("template without a name".into());
        }
        if template.points.is_empty() {
            return malformed(format!("'{}' has no points", template.name));
        }
        if template.points.len() != self.config.sampling_resolution {
            return malformed(format!(
                "'{}' has {} points, expected {}",
                template.name,
                template.points.len(),
                self.config.sampling_resolution
            ));
        }
        if !template.points.iter().all(Point::is_finite) {
            return malformed(format!("'{}' has non-finite coordinates", template.name));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::normalize;

    /// Fails every save and remembers nothing
    struct BrokenRepository;

    impl TemplateRepository for BrokenRepository {
        fn save(&mut self, _template: &GestureTemplate) -> Result<String> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }

        fn load_all(&self) -> Result<Vec<GestureTemplate>> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into())
        }
    }

    fn l_stroke() -> Vec<Point> {
        vec![
            Point::new(0.0, 100.0),
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        ]
    }

    #[test]
    fn test_add_normalizes_and_persists() {
        let mut store = TemplateStore::in_memory();
        let added = store.add_template("L", &l_stroke()).unwrap();
        assert_eq!(added.index, 0);
        assert_eq!(added.persisted.unwrap(), "L_1");
        assert_eq!(store.template_count(), 1);
        assert_eq!(store.templates()[0].points, normalize(&l_stroke()).unwrap());

        let added = store.add_template("L", &l_stroke()).unwrap();
        assert_eq!(added.persisted.unwrap(), "L_2");
        assert_eq!(store.template_count(), 2);
    }

    #[test]
    fn test_add_rejects_degenerate_stroke() {
        let mut store = TemplateStore::in_memory();
        let err = store.add_template("dot", &[Point::new(1.0, 1.0)]).unwrap_err();
        assert!(matches!(err, RecognizerError::DegenerateInput { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_save_keeps_template() {
        let mut store =
            TemplateStore::new(RecognizerConfig::default(), Box::new(BrokenRepository)).unwrap();
        let added = store.add_template("L", &l_stroke()).unwrap();
        assert!(matches!(added.persisted, Err(RecognizerError::Persistence(_))));
        assert_eq!(store.template_count(), 1);
    }

    #[test]
    fn test_failed_reload_leaves_store_empty() {
        let mut store =
            TemplateStore::new(RecognizerConfig::default(), Box::new(BrokenRepository)).unwrap();
        store.add_template("L", &l_stroke()).unwrap();
        assert!(store.reload().is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_all_skips_malformed() {
        let good = GestureTemplate::new("L", &l_stroke()).unwrap();
        let mut store = TemplateStore::in_memory();
        store.add_template("old", &l_stroke()).unwrap();
        let kept = store.load_all(vec![
            good.clone(),
            GestureTemplate::from_normalized("", good.points.clone()),
            GestureTemplate::from_normalized("empty", Vec::new()),
            GestureTemplate::from_normalized("short", good.points[..10].to_vec()),
            GestureTemplate::from_normalized("nan", vec![Point::new(f32::NAN, 0.0); 64]),
        ]);
        assert_eq!(kept, 1);
        assert_eq!(store.templates(), &[good]);
    }

    #[test]
    fn test_reload_from_repository() {
        let repository = InMemoryRepository::with_templates(vec![
            GestureTemplate::new("A", &l_stroke()).unwrap(),
            GestureTemplate::new("B", &l_stroke()).unwrap(),
        ]);
        let mut store =
            TemplateStore::new(RecognizerConfig::default(), Box::new(repository)).unwrap();
        assert_eq!(store.reload().unwrap(), 2);
        assert_eq!(store.templates()[1].name, "B");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = RecognizerConfig {
            sampling_resolution: 0,
            ..Default::default()
        };
        assert!(TemplateStore::new(config, Box::new(InMemoryRepository::new())).is_err());
    }
}
