use dioxus::prelude::*;

mod booking;
use booking::BookingBox;

mod player;
use player::PlayerBox;

pub static MODAL_STACK: GlobalSignal<Vec<Modal>> = Signal::global(|| Vec::new());

// Modal
//
// everything the overlay shell can host; pushing one of these onto the
// stack triggers the ModalBox below
#[derive(Clone, PartialEq)]
pub enum Modal {
    Booking,
    Player { title: String, url: String },
}

pub fn open_modal(modal: Modal) {
    MODAL_STACK.with_mut(|v| v.push(modal));
}

pub fn close_modal() {
    MODAL_STACK.with_mut(|v| {
        if !v.is_empty() {
            v.pop();
        }
    });
}

// ModalBox
//
// renders the top of the stack, or nothing at all while the stack is empty.
// clicking the backdrop closes the overlay; clicks inside the content are
// stopped so they cannot bubble up to the backdrop handler
#[component]
pub fn ModalBox() -> Element {
    let current = MODAL_STACK.read().last().cloned();

    let Some(modal) = current else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |evt| {
                evt.stop_propagation();
                close_modal();
            },
            div {
                class: "modal-content",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    button { class: "btn-close", onclick: move |_| close_modal(), "×" }
                }

                match modal {
                    Modal::Booking => rsx! {
                        BookingBox {}
                    },
                    Modal::Player { title, url } => rsx! {
                        // keyed so a different mix remounts the box and its
                        // loading placeholder starts over
                        PlayerBox {
                            key: "{url}",
                            title: title.clone(),
                            url: url.clone(),
                        }
                    },
                }
            }
        }
    }
}
