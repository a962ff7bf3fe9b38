use api::booking::{BookingRequest, SubmitError};

// the seven inquiry fields, owned by one booking overlay instance
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingFields {
    pub name: String,
    pub email: String,
    pub event_type: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub message: String,
}

impl BookingFields {
    pub fn to_request(&self) -> BookingRequest {
        BookingRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            event_type: self.event_type.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            location: self.location.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

// BookingForm
//
// idle -> submitting -> {succeeded, failed}, with failed -> submitting on
// retry.  Succeeded is terminal for this instance; the overlay unmounts the
// form on close, so reopening starts over from a fresh Idle value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingForm {
    pub fields: BookingFields,
    status: SubmitStatus,
}

impl BookingForm {
    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Move into Submitting, discarding any prior error text.  Refuses while
    /// a submission is already in flight so at most one request is issued.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }

        self.status = SubmitStatus::Submitting;
        true
    }

    /// Record the outcome of the outbound request.  Success clears every
    /// field; failure keeps them so the user can retry without data loss.
    pub fn complete(&mut self, result: Result<(), SubmitError>) {
        match result {
            Ok(()) => {
                self.fields = BookingFields::default();
                self.status = SubmitStatus::Succeeded;
            }
            Err(err) => {
                self.status = SubmitStatus::Failed(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> BookingForm {
        BookingForm {
            fields: BookingFields {
                name: String::from("Ada Lovelace"),
                email: String::from("ada@example.com"),
                event_type: String::from("sunset-winery"),
                date: String::from("2024-10-26"),
                time: String::from("18:00"),
                location: String::from("No Love Lost Winery"),
                message: String::from("Three hour set, please"),
            },
            status: SubmitStatus::Idle,
        }
    }

    #[test]
    fn success_clears_every_field() {
        let mut form = filled_form();
        assert!(form.begin_submit());
        form.complete(Ok(()));

        assert_eq!(*form.status(), SubmitStatus::Succeeded);
        assert_eq!(form.fields, BookingFields::default());
    }

    #[test]
    fn failure_preserves_fields_for_retry() {
        let mut form = filled_form();
        let before = form.fields.clone();

        assert!(form.begin_submit());
        form.complete(Err(SubmitError::Relay(String::from(
            "Mail relay unavailable",
        ))));

        assert_eq!(
            *form.status(),
            SubmitStatus::Failed(String::from("Mail relay unavailable"))
        );
        assert_eq!(form.fields, before);
    }

    #[test]
    fn submit_refused_while_in_flight() {
        let mut form = filled_form();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
    }

    #[test]
    fn retry_permitted_after_failure() {
        let mut form = filled_form();
        assert!(form.begin_submit());
        form.complete(Err(SubmitError::Transport));
        assert_eq!(
            *form.status(),
            SubmitStatus::Failed(String::from("Failed to send message"))
        );

        // a new submit drops the old error text
        assert!(form.begin_submit());
        assert!(form.is_submitting());
    }

    #[test]
    fn field_edits_apply_regardless_of_status() {
        let mut form = filled_form();
        assert!(form.begin_submit());
        form.fields.location = String::from("Downtown Napa parklet");
        assert_eq!(form.fields.location, "Downtown Napa parklet");
    }
}
