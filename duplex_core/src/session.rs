use duplex_api::{CompareRequest, CompareResponse, ComparisonResult};

use crate::{
    classify::LineClassifier, config::ComparisonConfig, engine::EngineService, render::Renderer,
    Result,
};

/// Request/response surface handed to the surrounding service.
///
/// Sessions hold no per-comparison state; one session may serve concurrent
/// requests from several threads.
#[derive(Debug, Clone)]
pub struct ComparisonSession {
    engines: EngineService,
    engine_id: String,
    classifier: LineClassifier,
    renderer: Renderer,
}

impl ComparisonSession {
    /// Construct a session over the builtin engines.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured engine is not a builtin engine.
    pub fn new(config: &ComparisonConfig) -> Result<Self> {
        Self::with_engines(EngineService::with_algorithm(config.algorithm), config)
    }

    /// Construct a session over an explicit engine service.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::EngineNotRegistered`] when the configured
    /// engine is missing from the service.
    pub fn with_engines(engines: EngineService, config: &ComparisonConfig) -> Result<Self> {
        engines.require(&config.engine)?;
        Ok(Self {
            engines,
            engine_id: config.engine.clone(),
            classifier: LineClassifier::new(),
            renderer: Renderer::new(config.render.clone()),
        })
    }

    /// Identifier of the engine used for comparisons.
    #[must_use]
    pub fn engine_id(&self) -> &str {
        &self.engine_id
    }

    /// Engines available to the session.
    #[must_use]
    pub const fn engines(&self) -> &EngineService {
        &self.engines
    }

    /// Renderer used for responses.
    #[must_use]
    pub const fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Compare two documents.
    ///
    /// # Errors
    ///
    /// Returns an error when the diff engine fails.
    pub fn compare(&self, text_a: &str, text_b: &str) -> Result<ComparisonResult> {
        let operations = self.engines.diff(&self.engine_id, text_a, text_b)?;
        let result = self.classifier.classify(&operations);
        log::debug!(
            "classified {} lines on side A and {} on side B, {} differences",
            result.lines_a.len(),
            result.lines_b.len(),
            result.difference_count
        );
        Ok(result)
    }

    /// Compare the documents of a request and render the response.
    ///
    /// # Errors
    ///
    /// Returns an error when the diff engine fails.
    pub fn respond(&self, request: &CompareRequest) -> Result<CompareResponse> {
        let result = self.compare(&request.text_a, &request.text_b)?;
        Ok(CompareResponse {
            engine: self.engine_id.clone(),
            html_a: self.renderer.render_side(&result.lines_a),
            html_b: self.renderer.render_side(&result.lines_b),
            blocks_a: self.renderer.blocks(&result.lines_a),
            blocks_b: self.renderer.blocks(&result.lines_b),
            stats: result.stats(),
            change_summary: result.change_summary,
        })
    }

    /// Parse a JSON request body and respond to it.
    ///
    /// A body that is not a JSON object compares two empty documents.
    ///
    /// # Errors
    ///
    /// Returns an error when the diff engine fails.
    pub fn respond_to_body(&self, body: &str) -> Result<CompareResponse> {
        let request = serde_json::from_str::<CompareRequest>(body).unwrap_or_else(|err| {
            log::warn!("unreadable comparison request, comparing empty documents: {err}");
            CompareRequest::default()
        });
        self.respond(&request)
    }
}

impl Default for ComparisonSession {
    fn default() -> Self {
        Self {
            engines: EngineService::default(),
            engine_id: duplex_engines::DEFAULT_ENGINE.to_owned(),
            classifier: LineClassifier::new(),
            renderer: Renderer::default(),
        }
    }
}
