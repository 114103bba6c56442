use std::sync::Arc;

use crate::config::ServerConfig;
use crate::pipeline::runner::Pipeline;
use crate::store::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub store: DocumentStore,
    pub pipeline: Arc<Pipeline>,
}

impl AppState {
    pub fn new(store: DocumentStore, pipeline: Pipeline) -> Self {
        Self {
            store,
            pipeline: Arc::new(pipeline),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        let pipeline = Pipeline::new(config.stopwords(), config.analysis_config());
        Self::new(DocumentStore::new(), pipeline)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DocumentStore::new(), Pipeline::default())
    }
}
