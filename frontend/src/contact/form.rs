use std::rc::Rc;

use serde::Serialize;
use yew::Reducible;

use super::transport::{SubmissionError, Transport};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl ContactFields {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// JSON body the form endpoint receives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "_replyto")]
    pub reply_to: String,
    #[serde(rename = "_subject")]
    pub subject: String,
}

impl From<&ContactFields> for Submission {
    fn from(fields: &ContactFields) -> Self {
        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            message: fields.message.clone(),
            reply_to: fields.email.clone(),
            subject: format!("New Contact Form Submission from {}", fields.name),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub status: SubmitStatus,
}

impl ContactForm {
    pub fn edit(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
    }

    pub fn begin(&mut self) {
        self.status = SubmitStatus::Loading;
    }

    pub fn complete(&mut self, result: Result<(), SubmissionError>) {
        match result {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                self.fields.clear();
            }
            Err(e) => {
                log::error!("Contact form submission failed: {}", e);
                self.status = SubmitStatus::Error;
            }
        }
    }

    /// The success banner timed out. Only a `Success` status goes back to `Idle`.
    pub fn expire_success(&mut self) {
        if self.status == SubmitStatus::Success {
            self.status = SubmitStatus::Idle;
        }
    }
}

pub enum FormAction {
    Edit(Field, String),
    Begin,
    Complete(Result<(), SubmissionError>),
    ExpireSuccess,
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => next.edit(field, value),
            FormAction::Begin => next.begin(),
            FormAction::Complete(result) => next.complete(result),
            FormAction::ExpireSuccess => next.expire_success(),
        }
        Rc::new(next)
    }
}

/// Sends one submission built from `fields`, reporting `Begin` before the request
/// and `Complete` with its outcome through `dispatch`.
pub async fn submit<T, D>(
    fields: &ContactFields,
    transport: &T,
    dispatch: D,
) -> Result<(), SubmissionError>
where
    T: Transport,
    D: Fn(FormAction),
{
    let submission = Submission::from(fields);
    dispatch(FormAction::Begin);
    let result = transport.send(&submission).await;
    dispatch(FormAction::Complete(result.clone()));
    result
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;

    struct FakeTransport {
        reply: Result<(), SubmissionError>,
        seen: RefCell<Vec<Submission>>,
    }

    impl FakeTransport {
        fn replying(reply: Result<(), SubmissionError>) -> Self {
            Self {
                reply,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for FakeTransport {
        async fn send(&self, submission: &Submission) -> Result<(), SubmissionError> {
            self.seen.borrow_mut().push(submission.clone());
            self.reply.clone()
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "A".into());
        form.edit(Field::Email, "a@b.com".into());
        form.edit(Field::Message, "hi".into());
        form
    }

    #[test]
    fn body_matches_the_endpoint_contract() {
        let submission = Submission::from(&filled().fields);
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "A",
                "email": "a@b.com",
                "message": "hi",
                "_replyto": "a@b.com",
                "_subject": "New Contact Form Submission from A",
            })
        );
    }

    /// Runs `submit` against a reducer-held form, recording every status it passes through.
    fn run_submit(
        form: ContactForm,
        transport: &FakeTransport,
    ) -> (Result<(), SubmissionError>, Rc<ContactForm>, Vec<SubmitStatus>) {
        let state = RefCell::new(Rc::new(form));
        let seen = RefCell::new(vec![state.borrow().status]);
        let fields = state.borrow().fields.clone();

        let result = block_on(submit(&fields, transport, |action| {
            let current = Rc::clone(&state.borrow());
            let next = current.reduce(action);
            seen.borrow_mut().push(next.status);
            *state.borrow_mut() = next;
        }));

        (result, state.into_inner(), seen.into_inner())
    }

    #[test]
    fn success_clears_fields_then_expires_to_idle() {
        let transport = FakeTransport::replying(Ok(()));
        let (result, form, seen) = run_submit(filled(), &transport);

        assert_eq!(result, Ok(()));
        assert_eq!(
            seen,
            vec![SubmitStatus::Idle, SubmitStatus::Loading, SubmitStatus::Success]
        );
        assert_eq!(form.fields, ContactFields::default());
        assert_eq!(
            *transport.seen.borrow(),
            vec![Submission::from(&filled().fields)]
        );

        let form = form.reduce(FormAction::ExpireSuccess);
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn rejection_keeps_fields() {
        let transport = FakeTransport::replying(Err(SubmissionError::Rejected { status: 422 }));
        let (result, form, seen) = run_submit(filled(), &transport);

        assert_eq!(result, Err(SubmissionError::Rejected { status: 422 }));
        assert_eq!(
            seen,
            vec![SubmitStatus::Idle, SubmitStatus::Loading, SubmitStatus::Error]
        );
        assert_eq!(form.fields, filled().fields);
    }

    #[test]
    fn network_failure_is_an_error_too() {
        let transport = FakeTransport::replying(Err(SubmissionError::Network("offline".into())));
        let (result, form, _) = run_submit(filled(), &transport);
        assert!(result.is_err());
        assert_eq!(form.status, SubmitStatus::Error);
        assert_eq!(form.fields.message, "hi");
    }

    #[test]
    fn begin_enters_loading_and_keeps_fields() {
        let mut form = filled();
        form.begin();
        assert_eq!(form.status, SubmitStatus::Loading);
        assert_eq!(form.fields, filled().fields);
    }

    #[test]
    fn expiry_only_touches_success() {
        let mut form = filled();
        form.complete(Err(SubmissionError::Network("down".into())));
        form.expire_success();
        assert_eq!(form.status, SubmitStatus::Error);

        form.begin();
        form.expire_success();
        assert_eq!(form.status, SubmitStatus::Loading);
    }

    #[test]
    fn reducer_walks_the_same_states() {
        let mut state = Rc::new(ContactForm::default());
        let mut seen = vec![state.status];

        state = state.reduce(FormAction::Edit(Field::Name, "A".into()));
        state = state.reduce(FormAction::Begin);
        seen.push(state.status);
        state = state.reduce(FormAction::Complete(Ok(())));
        seen.push(state.status);
        state = state.reduce(FormAction::ExpireSuccess);
        seen.push(state.status);

        assert_eq!(
            seen,
            vec![
                SubmitStatus::Idle,
                SubmitStatus::Loading,
                SubmitStatus::Success,
                SubmitStatus::Idle
            ]
        );
        assert!(state.fields.name.is_empty());
    }
}
