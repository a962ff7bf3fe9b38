use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::common::links;
use crate::components::modal::{Modal, ModalBox, open_modal};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;

    let current_path: Route = use_route();
    rsx! {
        Link {
            class: if current_path.is_child_of(&target) || current_path == (target) { "nav-link active" } else { "nav-link" },
            to: target,
            "{name}"
        }
    }
}

#[component]
fn WaveformLogo() -> Element {
    rsx! {
        svg {
            width: "32",
            height: "32",
            view_box: "0 0 32 32",
            fill: "none",
            xmlns: "http://www.w3.org/2000/svg",
            class: "logo-mark",
            path {
                d: "M4 16C4 16 6 10 8 10C10 10 12 22 14 22C16 22 18 6 20 6C22 6 24 18 26 18C28 18 30 16 30 16",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                div { class: "logo",
                    Link { to: Route::Home {}, class: "logo-link",
                        WaveformLogo {}
                        span { class: "logo-text", "MixMasterMilani" }
                    }
                }

                nav { class: "nav-links",
                    NavBarButton { name: "Home".to_owned(), target: Route::Home {} }
                    NavBarButton { name: "About".to_owned(), target: Route::About {} }
                    NavBarButton { name: "Blog".to_owned(), target: Route::Blog {} }
                    NavBarButton { name: "Contact".to_owned(), target: Route::Contact {} }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| open_modal(Modal::Booking),
                        "Book Me"
                    }
                }

                button {
                    class: "menu-toggle",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() { "✕" } else { "☰" }
                }
            }

            if menu_open() {
                nav { class: "mobile-menu",
                    Link {
                        to: Route::Home {},
                        class: "mobile-link",
                        onclick: move |_| menu_open.set(false),
                        "Home"
                    }
                    Link {
                        to: Route::About {},
                        class: "mobile-link",
                        onclick: move |_| menu_open.set(false),
                        "About"
                    }
                    Link {
                        to: Route::Blog {},
                        class: "mobile-link",
                        onclick: move |_| menu_open.set(false),
                        "Blog"
                    }
                    Link {
                        to: Route::Contact {},
                        class: "mobile-link",
                        onclick: move |_| menu_open.set(false),
                        "Contact"
                    }
                    button {
                        class: "btn btn-primary mobile-book",
                        onclick: move |_| {
                            menu_open.set(false);
                            open_modal(Modal::Booking);
                        },
                        "Book Me"
                    }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "app-footer",
            div { class: "footer-links",
                a { href: links::MIXCLOUD_PROFILE, target: "_blank", rel: "noopener noreferrer", "Mixcloud" }
                a { href: links::SOUNDCLOUD_PROFILE, target: "_blank", rel: "noopener noreferrer", "Soundcloud" }
                a { href: links::YOUTUBE_CHANNEL, target: "_blank", rel: "noopener noreferrer", "YouTube" }
                a { href: links::INSTAGRAM_PROFILE, target: "_blank", rel: "noopener noreferrer", "Instagram" }
            }
            span { class: "footer-note", "Napa Valley's premier house DJ" }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        main { class: "page-main", Outlet::<Route> {} }
        Footer {}
        ModalBox {}
    }
}
