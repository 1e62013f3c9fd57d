//! Video embed region.

use leptos::prelude::*;

use vitrina_core::config::VideoEntry;
use vitrina_core::video;

/// Embedded video grid. Entries that derive no embed (missing URL or
/// unrecognized platform) render an empty wrapper, silently.
#[component]
pub fn VideoGrid(
    /// Video entries from the configuration.
    videos: Vec<VideoEntry>,
) -> impl IntoView {
    view! {
      <section class="videos">
        <h2>"Videos"</h2>
        <div class="video-embeds">
          {videos
              .iter()
              .map(|entry| {
                  let embed = video::embed(entry);
                  view! {
                    <div class="video">
                      {embed
                          .map(|e| {
                              view! {
                                <iframe
                                  {::leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                                  src=e.src
                                  title=e.title
                                  {::leptos::tachys::html::attribute::custom::custom_attribute("frameborder", "0")}
                                  allowfullscreen=e.allow_fullscreen
                                ></iframe>
                              }
                          })}
                    </div>
                  }
              })
              .collect_view()}
        </div>
      </section>
    }
}
