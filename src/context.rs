//! Application Context
//!
//! Read-only state provided to every mounted component via the Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppContext {
    config: Arc<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config: Arc::new(config) }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Get the app context; every mount point provides one
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
