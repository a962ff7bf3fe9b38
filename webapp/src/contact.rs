use dioxus::prelude::*;

use crate::common::links;
use crate::components::modal::{Modal, open_modal};

#[component]
pub fn Contact() -> Element {
    rsx! {
        div { class: "page-container",
            h1 { class: "page-title", "Contact" }

            p { class: "contact-copy",
                "Planning an event in Napa or Sonoma? Tell me about the venue, the date, and the vibe you're after and I'll get back to you with availability."
            }

            button {
                class: "btn btn-primary btn-lg",
                onclick: move |_| open_modal(Modal::Booking),
                "Send a Booking Inquiry"
            }

            div { class: "contact-socials",
                h2 { class: "section-title", "Elsewhere" }
                ul {
                    li {
                        a { href: links::MIXCLOUD_PROFILE, target: "_blank", rel: "noopener noreferrer", "Mixcloud" }
                    }
                    li {
                        a { href: links::SOUNDCLOUD_PROFILE, target: "_blank", rel: "noopener noreferrer", "Soundcloud" }
                    }
                    li {
                        a { href: links::YOUTUBE_CHANNEL, target: "_blank", rel: "noopener noreferrer", "YouTube" }
                    }
                    li {
                        a { href: links::INSTAGRAM_PROFILE, target: "_blank", rel: "noopener noreferrer", "Instagram" }
                    }
                }
            }
        }
    }
}
