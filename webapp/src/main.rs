#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navigation::NavBar;

mod booking;
mod wave;

mod home;
use home::Home;

mod about;
use about::About;

mod blog;
use blog::{Blog, BlogDetail};

mod contact;
use contact::Contact;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/blog")]
        Blog {},
        #[route("/blog/:slug")]
        BlogDetail { slug: String },
        #[route("/contact")]
        Contact {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::SITE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
