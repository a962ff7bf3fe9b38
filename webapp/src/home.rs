use dioxus::prelude::*;

use crate::common::links::{self, widget_link};
use crate::components::modal::{Modal, open_modal};
use crate::wave::WaveBackground;

const FEATURED_FEED: &str = "%2FMMMilani%2Fno-love-lost-summer-release-party-9-5-2024%2F";

const LONG_SETS: &[(&str, &str)] = &[
    (
        "No Love Lost Winery Full Set",
        "%2FMMMilani%2Fno-love-lost-winery-full-set-9-25-2024%2F",
    ),
    (
        "No Love Lost Summer Release Party",
        "%2FMMMilani%2Fno-love-lost-summer-release-party-9-5-2024%2F",
    ),
    (
        "International Yoga Day Set",
        "%2FMMMilani%2Finternational-yoga-day-set-6-21-24%2F",
    ),
    ("No Love Lost May Set", "%2FMMMilani%2Fno-love-lost-5-10-2024%2F"),
    (
        "December Sunset Organic House Mix",
        "%2FMMMilani%2Fdecember-sunset-organic-house-mix-office-session-003%2F",
    ),
    ("Bubbly Beats", "%2FMMMilani%2Fbubbly-beats%2F"),
];

const SHORT_MIXES: &[(&str, &str, Option<&str>)] = &[
    (
        "House Vibes at No Love Lost Winery",
        "%2FMMMilani%2Fhouse-vibes-at-no-love-lost-winery-9-22-24%2F",
        Some(
            "Highlighted segment from a 3 hour live set I recorded at No Love Lost on 9-22-2024. Full set available on this page.",
        ),
    ),
    (
        "MixMaster Theatre Highlights 003",
        "%2FMMMilani%2Fmixmaster-theatre-highlights-003%2F",
        Some(
            "Highlighted segment from a 3 hour live set I recorded at No Love Lost on 8-5-2024 for their Summer Release Party. Full set available on this page.",
        ),
    ),
    ("Know Ya Know", "%2FMMMilani%2Fknow-ya-know%2F", None),
    (
        "MasterMix Theatre Episode 001",
        "%2FMMMilani%2Fmastermix-theatre-episode-001-hip-hip-hop%2F",
        None,
    ),
];

const ABOUT_CARDS: &[(&str, &str)] = &[
    (
        "Genre Fusion",
        "Seamlessly blending house, electronic, and pop into sophisticated soundscapes",
    ),
    (
        "Refined Vibes",
        "Perfect for upscale events, from wine tastings to cocktail soirées",
    ),
    (
        "Flow Master",
        "Expertly reading the crowd to maintain the perfect energy",
    ),
    (
        "Custom Magic",
        "Every set tailored to your event's unique atmosphere",
    ),
];

#[derive(Clone, PartialEq, Props)]
struct SocialLinkProps {
    name: String,
    href: String,
}

#[component]
fn SocialLink(props: SocialLinkProps) -> Element {
    rsx! {
        a {
            class: "social-link",
            href: "{props.href}",
            target: "_blank",
            rel: "noopener noreferrer",
            title: "{props.name}",
            "{props.name}"
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home-container",
            WaveBackground {}

            div { class: "home-content",
                // hero
                section { class: "hero",
                    h1 { class: "hero-title", "MixMasterMilani" }
                    p { class: "hero-subtitle",
                        "Elevating Napa & Sonoma's cocktail hours with sophisticated house vibes"
                    }
                    div { class: "hero-actions",
                        button {
                            class: "btn btn-primary btn-lg",
                            onclick: move |_| {
                                open_modal(Modal::Player {
                                    title: String::from("No Love Lost Summer Release Party"),
                                    url: widget_link(FEATURED_FEED),
                                });
                            },
                            "▶ Listen Now"
                        }
                        button {
                            class: "btn btn-outline btn-lg",
                            onclick: move |_| open_modal(Modal::Booking),
                            "Book Me"
                        }
                    }
                    div { class: "social-links",
                        SocialLink { name: "Mixcloud".to_owned(), href: links::MIXCLOUD_PROFILE.to_owned() }
                        SocialLink { name: "Soundcloud".to_owned(), href: links::SOUNDCLOUD_PROFILE.to_owned() }
                        SocialLink { name: "YouTube".to_owned(), href: links::YOUTUBE_CHANNEL.to_owned() }
                        SocialLink { name: "Instagram".to_owned(), href: links::INSTAGRAM_PROFILE.to_owned() }
                    }
                }

                // about
                section { class: "about-section",
                    div { class: "about-grid",
                        div { class: "about-copy",
                            h2 { class: "section-title",
                                "Crafting Unforgettable Moments Through Music"
                            }
                            p {
                                "I specialize in creating immersive musical experiences that perfectly complement your event's atmosphere. From sun-kissed poolside sessions to elegant winery sunsets, each set is thoughtfully curated to enhance the moment."
                            }
                            div { class: "feature-grid",
                                for (title, copy) in ABOUT_CARDS {
                                    div { class: "feature-card",
                                        h3 { "{title}" }
                                        p { "{copy}" }
                                    }
                                }
                            }
                        }
                        div { class: "about-photo",
                            img {
                                src: "/images/mixmastermilani.jpg",
                                alt: "MixMasterMilani in action",
                            }
                        }
                    }
                }

                // mixes
                section { class: "mixes-section",
                    h2 { class: "section-title", "Latest Mixes" }
                    div { class: "mixes-grid",
                        div { class: "mix-column",
                            h3 { "Featured Long Sets" }
                            div { class: "mix-list",
                                for (title, feed) in LONG_SETS {
                                    iframe {
                                        class: "mix-frame",
                                        src: widget_link(feed),
                                        title: "{title}",
                                    }
                                }
                            }
                        }
                        div { class: "mix-column",
                            h3 { "Short Mixes" }
                            div { class: "mix-list",
                                for (title, feed, caption) in SHORT_MIXES {
                                    div { class: "mix-entry",
                                        iframe {
                                            class: "mix-frame",
                                            src: widget_link(feed),
                                            title: "{title}",
                                        }
                                        if let Some(caption) = caption {
                                            p { class: "mix-caption", "{caption}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
