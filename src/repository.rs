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

//! Storage boundary for templates.
//!
//! The store keeps the authoritative in-memory collection and hands every newly trained
//! template to a [`TemplateRepository`]. Repositories assign a `NAME_k` key per save and
//! must enumerate templates in a stable order, because ties during recognition go to
//! whichever template was loaded first.

use crate::{error::Result, gesture::GestureTemplate};

/// Repositories are `Send + Sync` so a store can live behind a lock shared between a
/// training thread and recognizing threads.
pub trait TemplateRepository: Send + Sync {
    /// Durably stores a normalized template, returning the key it was stored under
    fn save(&mut self, template: &GestureTemplate) -> Result<String>;

    /// Returns every previously stored template
    fn load_all(&self) -> Result<Vec<GestureTemplate>>;
}

/// Keeps saved templates in a vector. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRepository {
    saved: Vec<(String, GestureTemplate)>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_templates(templates: impl IntoIterator<Item = GestureTemplate>) -> Self {
        let mut repository = Self::new();
        for template in templates {
            repository.push(template);
        }
        repository
    }

    /// Keys in save order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.saved.iter().map(|(key, _)| key.as_str())
    }

    fn push(&mut self, template: GestureTemplate) -> String {
        let index = self
            .saved
            .iter()
            .filter(|(_, t)| t.name == template.name)
            .count()
            + 1;
        let key = format!("{}_{}", template.name, index);
        self.saved.push((key.clone(), template));
        key
    }
}

impl TemplateRepository for InMemoryRepository {
    fn save(&mut self, template: &GestureTemplate) -> Result<String> {
        Ok(self.push(template.clone()))
    }

    fn load_all(&self) -> Result<Vec<GestureTemplate>> {
        Ok(self.saved.iter().map(|(_, t)| t.clone()).collect())
    }
}

#[cfg(feature = "serde")]
pub use ron_directory::RonDirectoryRepository;

#[cfg(feature = "serde")]
mod ron_directory {
    use std::{
        fs::{self, OpenOptions},
        io::{ErrorKind, Write},
        path::{Path, PathBuf},
    };

    use log::{debug, warn};
    use ron::ser::{to_string_pretty, PrettyConfig};

    use super::TemplateRepository;
    use crate::{
        error::{RecognizerError, Result},
        gesture::GestureTemplate,
    };

    const EXTENSION: &str = "ron";

    /// One `NAME_k.ron` file per template inside a directory
    #[derive(Debug, Clone)]
    pub struct RonDirectoryRepository {
        dir: PathBuf,
    }

    impl RonDirectoryRepository {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        /// `.ron` files in the directory, sorted by file name
        fn record_paths(&self) -> Result<Vec<PathBuf>> {
            let mut paths = Vec::new();
            for entry in fs::read_dir(&self.dir)? {
                let path = entry?.path();
                if path.is_file() && path.extension().is_some_and(|ext| ext == EXTENSION) {
                    paths.push(path);
                }
            }
            paths.sort();
            Ok(paths)
        }

        /// Stems compare case-insensitively so `a_1` and `A_1` never share a file on
        /// case-insensitive filesystems
        fn next_index(&self, stem: &str) -> Result<usize> {
            let prefix = format!("{}_", stem).to_ascii_lowercase();
            let mut max = 0;
            for path in self.record_paths()? {
                let index = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .map(|s| s.to_ascii_lowercase())
                    .and_then(|s| s.strip_prefix(&prefix).map(str::to_owned))
                    .and_then(|suffix| suffix.parse::<usize>().ok());
                if let Some(index) = index {
                    max = max.max(index);
                }
            }
            Ok(max + 1)
        }
    }

    /// File stems only allow `[A-Za-z0-9-_]`; the real name lives inside the record
    fn file_stem_for(name: &str) -> String {
        let stem: String = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        if stem.is_empty() {
            "gesture".into()
        } else {
            stem
        }
    }

    fn read_record(path: &Path) -> Result<GestureTemplate> {
        let text = fs::read_to_string(path)?;
        Ok(ron::from_str(&text)?)
    }

    impl TemplateRepository for RonDirectoryRepository {
        fn save(&mut self, template: &GestureTemplate) -> Result<String> {
            fs::create_dir_all(&self.dir)?;
            let stem = file_stem_for(&template.name);
            let data = to_string_pretty(template, PrettyConfig::default())?;
            let mut index = self.next_index(&stem)?;
            loop {
                let key = format!("{}_{}", stem, index);
                let path = self.dir.join(format!("{}.{}", key, EXTENSION));
                // never overwrite an existing record
                match OpenOptions::new().write(true).create_new(true).open(&path) {
                    Ok(mut file) => {
                        file.write_all(data.as_bytes())?;
                        debug!("saved template '{}' to {}", template.name, path.display());
                        return Ok(key);
                    }
                    Err(e) if e.kind() == ErrorKind::AlreadyExists => index += 1,
                    Err(e) => return Err(e.into()),
                }
            }
        }

        fn load_all(&self) -> Result<Vec<GestureTemplate>> {
            if !self.dir.is_dir() {
                debug!("template directory {} does not exist", self.dir.display());
                return Ok(Vec::new());
            }
            let mut templates = Vec::new();
            for path in self.record_paths()? {
                match read_record(&path) {
                    Ok(template) => templates.push(template),
                    Err(e) => {
                        let e = RecognizerError::MalformedTemplate(format!(
                            "{}: {}",
                            path.display(),
                            e
                        ));
                        warn!("skipping {}", e);
                    }
                }
            }
            Ok(templates)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    #[test]
    fn test_in_memory_keys() {
        let template = GestureTemplate::from_normalized("Z", vec![Point::ORIGIN; 4]);
        let mut repository = InMemoryRepository::new();
        assert_eq!(repository.save(&template).unwrap(), "Z_1");
        assert_eq!(repository.save(&template).unwrap(), "Z_2");
        assert_eq!(repository.keys().collect::<Vec<_>>(), ["Z_1", "Z_2"]);
        assert_eq!(repository.load_all().unwrap().len(), 2);
    }
}
