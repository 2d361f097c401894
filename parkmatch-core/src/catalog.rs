use crate::models::{Park, Question};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct QuestionsFile {
    questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct ParksFile {
    parks: Vec<Park>,
}

/// The read-only quiz catalog: every question and every park archetype,
/// loaded once at startup and shared across requests without locking.
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
    parks: Vec<Park>,
}

impl Catalog {
    /// Load both catalog files. Any IO or parse failure is returned with the
    /// offending path; callers treat this as fatal at startup.
    pub fn load(questions_path: &Path, parks_path: &Path) -> Result<Self, CatalogError> {
        let questions_file: QuestionsFile = read_json(questions_path)?;
        let parks_file: ParksFile = read_json(parks_path)?;

        tracing::info!("Loaded {} questions", questions_file.questions.len());
        tracing::info!("Loaded {} parks", parks_file.parks.len());

        Ok(Self {
            questions: questions_file.questions,
            parks: parks_file.parks,
        })
    }

    /// Build a catalog directly from in-memory data.
    pub fn from_parts(questions: Vec<Question>, parks: Vec<Park>) -> Self {
        Self { questions, parks }
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Parks in catalog order; matching ties resolve to the earliest entry.
    pub fn parks(&self) -> &[Park] {
        &self.parks
    }

    /// Look up a question by 0-based position.
    pub fn question_by_index(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn question_by_id(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let data = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
