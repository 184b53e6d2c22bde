use axum::extract::FromRef;
use wavefy_catalog::SharedCatalog;

#[derive(Clone, FromRef)]
pub struct ServerContext {
    pub catalog: SharedCatalog,
}
