pub const MIXCLOUD_PROFILE: &str = "https://www.mixcloud.com/MMMilani/";
pub const SOUNDCLOUD_PROFILE: &str = "https://soundcloud.com/mixmastermilani";
pub const YOUTUBE_CHANNEL: &str = "https://www.youtube.com/channel/UCbitCJi02Q4RtNo1nzN-s-Q";
pub const INSTAGRAM_PROFILE: &str = "https://www.instagram.com/mixmastermilani/";

/// Embeddable player URL for a Mixcloud feed path (already percent-encoded,
/// e.g. "%2FMMMilani%2Fbubbly-beats%2F").
pub fn widget_link(feed: &str) -> String {
    format!("https://player-widget.mixcloud.com/widget/iframe/?hide_cover=1&feed={feed}")
}
