//! Structured logging helpers for the gallery server.
//!
//! Uses tracing structured fields with a typed `operation` discriminant,
//! so log lines from different areas stay greppable.

/// Log operation categories
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Startup,
    StoryView,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Startup => "startup",
            LogOperation::StoryView => "story_view",
        }
    }
}

/// Log gallery server startup
pub fn log_startup() {
    tracing::info!(
        operation = LogOperation::Startup.as_str(),
        version = env!("CARGO_PKG_VERSION"),
        "Starting button gallery server"
    );
}

/// Log a story view reported by the client
pub fn log_story_view(slug: &str, title: &str) {
    tracing::info!(
        operation = LogOperation::StoryView.as_str(),
        story = slug,
        title = title,
        "Story viewed"
    );
}

/// Log a story view request that named an unknown story
pub fn log_unknown_story(slug: &str) {
    tracing::warn!(
        operation = LogOperation::StoryView.as_str(),
        story = slug,
        "Unknown story requested"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names_are_stable() {
        assert_eq!(LogOperation::Startup.as_str(), "startup");
        assert_eq!(LogOperation::StoryView.as_str(), "story_view");
    }
}
