use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("tagger backend failure: {0}")]
    Backend(String),
}

/// The external sequence tagger, treated as an opaque oracle.
///
/// Input is the feature matrix (one `token<TAB>feature...` line per
/// token); output is the same shape with the predicted label appended as
/// the last column. Implementations are injected into parsers rather
/// than referenced as process-wide singletons, so tests can script label
/// streams. Reentrancy of a concrete tagger is its own concern: callers
/// pool or serialize instances, the reconstruction engine never shares
/// one mutably.
pub trait SequenceTagger: Send + Sync {
    fn tag(&self, features: &str) -> Result<String, TaggerError>;
}

/// Scripted tagger returning a fixed labeled output, for tests and
/// offline replay of recorded tagger runs.
#[derive(Debug, Clone)]
pub struct ScriptedTagger {
    output: String,
}

impl ScriptedTagger {
    pub fn new(output: impl Into<String>) -> Self {
        ScriptedTagger {
            output: output.into(),
        }
    }
}

impl SequenceTagger for ScriptedTagger {
    fn tag(&self, _features: &str) -> Result<String, TaggerError> {
        Ok(self.output.clone())
    }
}
