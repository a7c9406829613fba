use restitch_tagging::cursor::DEFAULT_LOOKAHEAD;

/// Configuration for the accumulation engine.
///
/// Defaults reproduce the contract behavior; the builder exists for
/// callers whose upstream tokenization needs a wider resync window or
/// whose feature set lacks line-start cues.
#[derive(Debug, Clone)]
pub struct ParsingConfig {
    /// Forward positions tried when the label stream and the
    /// tokenization desynchronize.
    pub(crate) resync_lookahead: usize,
    /// Whether a LINESTART cue on an unprefixed continuation of a
    /// multi-valued field promotes it to a segment boundary.
    pub(crate) linestart_promotes_segment: bool,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            resync_lookahead: DEFAULT_LOOKAHEAD,
            linestart_promotes_segment: true,
        }
    }
}

impl ParsingConfig {
    pub fn resync_lookahead(&self) -> usize {
        self.resync_lookahead
    }
}

/// Builder for [`ParsingConfig`].
#[derive(Debug, Clone, Default)]
pub struct ParsingConfigBuilder {
    resync_lookahead: Option<usize>,
    linestart_promotes_segment: Option<bool>,
}

impl ParsingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resync_lookahead(mut self, n: usize) -> Self {
        self.resync_lookahead = Some(n);
        self
    }

    pub fn linestart_promotes_segment(mut self, enabled: bool) -> Self {
        self.linestart_promotes_segment = Some(enabled);
        self
    }

    pub fn build(self) -> ParsingConfig {
        let defaults = ParsingConfig::default();
        ParsingConfig {
            resync_lookahead: self.resync_lookahead.unwrap_or(defaults.resync_lookahead),
            linestart_promotes_segment: self
                .linestart_promotes_segment
                .unwrap_or(defaults.linestart_promotes_segment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ParsingConfig::default();
        assert_eq!(config.resync_lookahead, 3);
        assert!(config.linestart_promotes_segment);
    }

    #[test]
    fn builder_overrides() {
        let config = ParsingConfigBuilder::new()
            .resync_lookahead(5)
            .linestart_promotes_segment(false)
            .build();
        assert_eq!(config.resync_lookahead, 5);
        assert!(!config.linestart_promotes_segment);
    }
}
