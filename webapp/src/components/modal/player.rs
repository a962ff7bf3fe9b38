use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct PlayerBoxProps {
    title: String,
    url: String,
}

// embedded Mixcloud player inside the overlay shell
//
// the placeholder stays up until the frame fires onload; a frame that never
// loads leaves it there, since there is no error signal to act on
#[component]
pub fn PlayerBox(props: PlayerBoxProps) -> Element {
    let mut loading = use_signal(|| true);

    rsx! {
        div { class: "modal-body",
            h2 { class: "modal-title", "{props.title}" }

            if loading() {
                div { class: "player-loading", "Please wait while the content loads..." }
            }

            iframe {
                class: if loading() { "player-frame player-frame-hidden" } else { "player-frame" },
                src: "{props.url}",
                title: "{props.title}",
                onload: move |_| loading.set(false),
            }
        }
    }
}
