use std::sync::Arc;

use crate::config::Config;
use crate::sheets::RowSink;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub sheets: Option<Arc<dyn RowSink>>,
}
