use dioxus::prelude::*;
use tracing::error;

use crate::booking::{BookingForm, SubmitStatus};
use crate::components::modal::close_modal;
use api::booking::send_booking;

const EVENT_TYPES: &[(&str, &str)] = &[
    ("sunset-winery", "Sunset Soirée at the Winery 🌅"),
    ("poolside", "Poolside Paradise Mix 🏊‍♂️"),
    ("cocktail", "Upscale Cocktail Hour 🍸"),
    ("garden-party", "Garden Party Grooves 🌿"),
    ("private-estate", "Private Estate Elegance 🏡"),
    ("rooftop", "Rooftop Lounge Vibes 🌆"),
    ("yacht", "Yacht Club Beats ⛵"),
    ("other", "Custom Vibe (describe below) ✨"),
];

// the booking inquiry form
//
// this instance lives only while the overlay is open; closing it discards
// the form, so reopening always starts from a blank Idle state
#[component]
pub fn BookingBox() -> Element {
    let mut form = use_signal(BookingForm::default);

    if *form.read().status() == SubmitStatus::Succeeded {
        return rsx! {
            div { class: "modal-body booking-confirmation",
                h2 { class: "modal-title", "Message Sent Successfully!" }
                p { "Thank you for your interest. I'll get back to you soon." }
                button { class: "btn btn-primary", onclick: move |_| close_modal(), "Close" }
            }
        };
    }

    let submitting = form.read().is_submitting();
    let error_message = match form.read().status() {
        SubmitStatus::Failed(msg) => Some(msg.clone()),
        _ => None,
    };

    let handle_submit = move |_: FormEvent| async move {
        // the submit button is disabled while in flight, but guard anyway so
        // a second request can never be issued
        if !form.write().begin_submit() {
            return;
        }

        let req = form.peek().fields.to_request();

        let result = send_booking(&req).await.map(|_| ());

        if let Err(err) = &result {
            error!("booking submission failed: {err}");
        }

        form.write().complete(result);
    };

    rsx! {
        div { class: "modal-body",
            h2 { class: "modal-title", "Book MixMasterMilani" }

            form { class: "booking-form", onsubmit: handle_submit,

                label { r#for: "name", "Name *" }
                input {
                    id: "name",
                    name: "name",
                    r#type: "text",
                    required: true,
                    value: "{form.read().fields.name}",
                    oninput: move |evt| form.write().fields.name = evt.value(),
                }

                label { r#for: "email", "Email *" }
                input {
                    id: "email",
                    name: "email",
                    r#type: "email",
                    required: true,
                    value: "{form.read().fields.email}",
                    oninput: move |evt| form.write().fields.email = evt.value(),
                }

                label { r#for: "eventType", "Vibe *" }
                select {
                    id: "eventType",
                    name: "eventType",
                    required: true,
                    value: "{form.read().fields.event_type}",
                    onchange: move |evt| form.write().fields.event_type = evt.value(),

                    option { value: "", "Select your vibe" }
                    for (value, label) in EVENT_TYPES {
                        option { value: "{value}", "{label}" }
                    }
                }

                div { class: "form-row",
                    div {
                        label { r#for: "date", "Event Date" }
                        input {
                            id: "date",
                            name: "date",
                            r#type: "date",
                            value: "{form.read().fields.date}",
                            oninput: move |evt| form.write().fields.date = evt.value(),
                        }
                    }
                    div {
                        label { r#for: "time", "Event Time" }
                        input {
                            id: "time",
                            name: "time",
                            r#type: "time",
                            value: "{form.read().fields.time}",
                            oninput: move |evt| form.write().fields.time = evt.value(),
                        }
                    }
                }

                label { r#for: "location", "Location *" }
                input {
                    id: "location",
                    name: "location",
                    r#type: "text",
                    required: true,
                    placeholder: "Venue name or address",
                    value: "{form.read().fields.location}",
                    oninput: move |evt| form.write().fields.location = evt.value(),
                }

                label { r#for: "message", "Tell me about your dream event" }
                textarea {
                    id: "message",
                    name: "message",
                    rows: "4",
                    placeholder: "Share your vision - what kind of atmosphere are you looking to create? Any specific music styles or special moments you want to highlight?",
                    value: "{form.read().fields.message}",
                    oninput: move |evt| form.write().fields.message = evt.value(),
                }

                if let Some(msg) = error_message {
                    div { class: "form-error", "{msg}" }
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-submit",
                    disabled: submitting,
                    if submitting { "Sending..." } else { "Send Booking Request" }
                }
            }
        }
    }
}
