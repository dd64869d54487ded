use thiserror::Error;
use wasm_bindgen::JsValue;

/// Browser plumbing failures. None of these are shown to the visitor; the
/// page keeps rendering and the failure is logged.
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("failed to {action} `{event}` listener: {message}")]
    Listener {
        action: &'static str,
        event: &'static str,
        message: String,
    },
}

impl PortfolioError {
    pub fn listener(action: &'static str, event: &'static str, err: &JsValue) -> Self {
        PortfolioError::Listener {
            action,
            event,
            message: err.as_string().unwrap_or_else(|| format!("{:?}", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listener_error_names_the_event() {
        let err = PortfolioError::Listener {
            action: "register",
            event: "mousemove",
            message: "denied".to_string(),
        };
        assert_eq!(err.to_string(), "failed to register `mousemove` listener: denied");
    }
}
