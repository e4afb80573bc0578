use crate::service::AsteroidService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: AsteroidService,
}

impl AppState {
    pub fn new(service: AsteroidService) -> Self {
        Self { service }
    }
}
