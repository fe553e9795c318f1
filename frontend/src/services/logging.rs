use gloo::net::http::Request;
use shared::LogRequest;

use crate::services::api::ApiClient;
use wasm_bindgen_futures::spawn_local;

/// Relays component-tagged log lines to the backend, which re-emits them
/// through its own subscriber. Delivery is fire-and-forget.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log("debug", message, Some(component.to_string()));
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log("info", message, Some(component.to_string()));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log("warn", message, Some(component.to_string()));
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log("error", message, Some(component.to_string()));
    }

    fn log(level: &str, message: &str, component: Option<String>) {
        let request = LogRequest {
            level: level.to_string(),
            message: message.to_string(),
            component,
        };

        let url = ApiClient::new().url("/api/logs");
        spawn_local(async move {
            let sent = match Request::post(&url).json(&request) {
                Ok(request) => request.send().await.map(|_| ()),
                Err(e) => Err(e),
            };
            if let Err(e) = sent {
                gloo::console::warn!("Log relay failed:", e.to_string());
            }
        });
    }
}
