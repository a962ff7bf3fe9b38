use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

mod posts;
use posts::{BLOG_POSTS, BlogPost, find_post};

// upcoming events all run the same evening slot
const UPCOMING_HOURS: &str = "6:00 PM – 9:00 PM";

#[derive(Clone, PartialEq, Props)]
struct BlogCardProps {
    post: BlogPost,
}

#[component]
fn BlogCard(props: BlogCardProps) -> Element {
    let post = props.post;

    rsx! {
        Link {
            class: if post.upcoming { "blog-card blog-card-upcoming" } else { "blog-card" },
            to: Route::BlogDetail {
                slug: post.slug.to_owned(),
            },
            div { class: "blog-card-image",
                img { src: "{post.image}", alt: "{post.title}" }
                if post.upcoming {
                    span { class: "badge-upcoming", "Upcoming Event" }
                }
                div { class: "blog-card-overlay",
                    h2 { "{post.title}" }
                    div { class: "blog-card-meta",
                        span { "{post.date}" }
                        span { "{post.location}" }
                        if post.upcoming {
                            span { "{UPCOMING_HOURS}" }
                        }
                    }
                }
            }
            div { class: "blog-card-teaser",
                p { "{post.content[0]}" }
            }
        }
    }
}

#[component]
pub fn Blog() -> Element {
    rsx! {
        div { class: "page-container",
            h1 { class: "page-title", "Blog" }

            div { class: "blog-grid",
                for post in BLOG_POSTS {
                    BlogCard { key: "{post.slug}", post: post.clone() }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct BlogDetailProps {
    // this is a String because we get it from the Router
    slug: String,
}

#[component]
pub fn BlogDetail(props: BlogDetailProps) -> Element {
    let Some(post) = find_post(&props.slug) else {
        return rsx! {
            div { class: "page-container",
                h1 { class: "page-title", "Post not found" }
                p { "There is no event post at this address." }
                Link { class: "btn btn-primary", to: Route::Blog {}, "Back to the blog" }
            }
        };
    };

    rsx! {
        article { class: "page-container blog-post",
            img { class: "blog-post-image", src: "{post.image}", alt: "{post.title}" }

            h1 { class: "page-title", "{post.title}" }
            div { class: "blog-post-meta",
                span { "{post.date}" }
                span { "{post.location}" }
                if post.upcoming {
                    span { class: "badge-upcoming", "Upcoming Event" }
                    span { "{UPCOMING_HOURS}" }
                }
            }

            for paragraph in post.content {
                p { class: "blog-post-paragraph", "{paragraph}" }
            }

            if let Some(url) = post.mixcloud_url {
                iframe { class: "mix-frame", src: "{url}", title: "{post.title}" }
            }

            if let Some(tracklist) = post.tracklist {
                section { class: "blog-post-tracklist",
                    h2 { class: "section-title", "Tracklist" }
                    ol {
                        for track in tracklist {
                            li { "{track}" }
                        }
                    }
                }
            }
        }
    }
}
