//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client

use dioxus::prelude::*;

/// Record a story view server-side. The gallery calls this on story
/// navigation so server logs show which stories get looked at, the same
/// way a hosted component catalog would.
#[server]
pub async fn record_story_view(slug: String) -> Result<(), ServerFnError> {
    use crate::app::pages::gallery::Story;
    use crate::shared::logging;

    match slug.parse::<Story>() {
        Ok(story) => logging::log_story_view(story.slug(), story.title()),
        Err(_) => logging::log_unknown_story(&slug),
    }

    Ok(())
}
