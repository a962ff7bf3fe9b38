use dioxus::prelude::*;

use crate::components::modal::{Modal, open_modal};

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "page-container",
            h1 { class: "page-title", "About" }

            div { class: "about-grid",
                div { class: "about-copy",
                    p {
                        "MixMasterMilani is a Napa Valley house DJ focused on upscale daytime and sunset events: winery parklets, poolside sessions, cocktail hours, and private estates across Napa and Sonoma."
                    }
                    p {
                        "Every set is built live around the room — a foundation of house and disco, layered with funk, soul, and organic electronic textures, always tuned to where the crowd's energy actually is rather than where a playlist says it should be."
                    }
                    p {
                        "Recent residencies and one-offs include No Love Lost Winery in downtown Napa and the Napa Valley Yoga Center's community events."
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| open_modal(Modal::Booking),
                        "Book Me"
                    }
                }
                div { class: "about-photo",
                    img {
                        src: "/images/mixmastermilani.jpg",
                        alt: "MixMasterMilani behind the decks",
                    }
                }
            }
        }
    }
}
