//! Seating data sources
//!
//! A source answers "give me the seating feed for this performance". The
//! network client lives outside this crate; these sources serve feeds from
//! disk or from memory so the rest of the pipeline can be driven and tested
//! without one.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::debug;
use seatplan_core::Result;

use crate::error::IoError;
use crate::feed::SeatingPlanDocument;

/// Anything that can produce the seating feed for a performance
pub trait SeatingDataSource {
    /// Fetch the feed document for a performance
    fn fetch(&self, performance_id: u64) -> Result<SeatingPlanDocument>;

    /// Short name used in log messages
    fn source_name(&self) -> &'static str;
}

/// Serves `<dir>/<performance_id>.json`
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    dir: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path the feed of a performance is expected at
    pub fn path_for(&self, performance_id: u64) -> PathBuf {
        self.dir.join(format!("{}.json", performance_id))
    }
}

impl SeatingDataSource for JsonFileSource {
    fn fetch(&self, performance_id: u64) -> Result<SeatingPlanDocument> {
        let path = self.path_for(performance_id);
        if !path.exists() {
            return Err(IoError::NotFound { performance_id }.into());
        }
        debug!("Reading seating feed {}", path.display());
        let file = File::open(&path)?;
        SeatingPlanDocument::from_reader(BufReader::new(file))
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}

/// Serves documents registered up front
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: HashMap<u64, SeatingPlanDocument>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
        }
    }

    /// Register (or replace) the feed for a performance
    pub fn insert(&mut self, performance_id: u64, document: SeatingPlanDocument) {
        self.documents.insert(performance_id, document);
    }

    pub fn with_document(mut self, performance_id: u64, document: SeatingPlanDocument) -> Self {
        self.insert(performance_id, document);
        self
    }
}

impl SeatingDataSource for StaticSource {
    fn fetch(&self, performance_id: u64) -> Result<SeatingPlanDocument> {
        self.documents
            .get(&performance_id)
            .cloned()
            .ok_or_else(|| IoError::NotFound { performance_id }.into())
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}
