// SPDX-License-Identifier: MPL-2.0
//! Contact form with per-field validation.
//!
//! Every keystroke updates the field's draft. A draft is validated when the
//! field loses focus, and it reaches the committed [`FormState`] only if that
//! validation passes; a rejected edit leaves the previous committed value in
//! place. Iced inputs have no blur event, so focus loss is modeled as:
//! pressing Enter in a single-line field, starting to edit another field, or
//! submitting the form. The message is a multi-line editor whose text is
//! mirrored into its draft on every edit.

use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::validation::{is_present, validate_email};
use iced::{
    widget::{button, text_editor, text_input, Column, Container, Text},
    Element, Length,
};
use std::fmt;

/// The three inputs of the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Message];

    /// Lowercase field name, as used in validation messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            Self::Name => "contact-name-label",
            Self::Email => "contact-email-label",
            Self::Message => "contact-message-label",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field value was rejected. The display text is what the form shows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Your email is invalid.")]
    InvalidEmail,
    #[error("{0} is required.")]
    Required(ContactField),
}

/// Checks one value against the rule of its field.
pub fn validate_field(field: ContactField, value: &str) -> std::result::Result<(), FieldError> {
    match field {
        ContactField::Email if !validate_email(value) => Err(FieldError::InvalidEmail),
        ContactField::Name | ContactField::Message if !is_present(value) => {
            Err(FieldError::Required(field))
        }
        _ => Ok(()),
    }
}

/// Committed form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }
}

/// Lifecycle of a single input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// Never edited.
    #[default]
    Clean,
    /// Edited since the last validation.
    Editing,
    Valid,
    Invalid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub draft: String,
    pub status: FieldStatus,
}

/// A message ready to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<&FormState> for ContactSubmission {
    fn from(form: &FormState) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            message: form.message.clone(),
        }
    }
}

/// Destination of submitted messages.
pub trait ContactSink {
    fn submit(&self, submission: &ContactSubmission) -> Result<()>;
}

/// Records submissions in the log and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ContactSink for LogSink {
    fn submit(&self, submission: &ContactSubmission) -> Result<()> {
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            message_len = submission.message.chars().count(),
            "contact form submitted"
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    committed: FormState,
    name: FieldState,
    email: FieldState,
    message: FieldState,
    message_editor: text_editor::Content,
    editing: Option<ContactField>,
    validation_error: String,
}

impl State {
    #[must_use]
    pub fn committed(&self) -> &FormState {
        &self.committed
    }

    #[must_use]
    pub fn field(&self, field: ContactField) -> &FieldState {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut FieldState {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Empty when the last validation passed.
    #[must_use]
    pub fn validation_error(&self) -> &str {
        &self.validation_error
    }

    #[must_use]
    pub fn editing(&self) -> Option<ContactField> {
        self.editing
    }

    /// Replaces the draft of `field`. Leaving another field blurs it first.
    pub fn edit(&mut self, field: ContactField, value: String) {
        if field == ContactField::Message {
            self.message_editor = text_editor::Content::with_text(&value);
        }
        self.set_draft(field, value);
    }

    /// Applies an editor action to the message box. Only actions that change
    /// the text count as editing.
    pub fn edit_message(&mut self, action: text_editor::Action) {
        let is_edit = action.is_edit();
        self.message_editor.perform(action);
        if is_edit {
            let text = self.message_editor.text();
            self.set_draft(ContactField::Message, text);
        }
    }

    #[must_use]
    pub fn message_editor(&self) -> &text_editor::Content {
        &self.message_editor
    }

    fn set_draft(&mut self, field: ContactField, value: String) {
        if let Some(previous) = self.editing.filter(|previous| *previous != field) {
            self.blur(previous);
        }
        let state = self.field_mut(field);
        state.draft = value;
        state.status = FieldStatus::Editing;
        self.editing = Some(field);
    }

    /// Validates the draft of `field` and commits it if valid.
    pub fn blur(&mut self, field: ContactField) {
        if self.editing == Some(field) {
            self.editing = None;
        }

        let draft = self.field(field).draft.clone();
        match validate_field(field, &draft) {
            Ok(()) => {
                self.field_mut(field).status = FieldStatus::Valid;
                self.validation_error.clear();
                self.committed.set(field, draft);
            }
            Err(error) => {
                self.field_mut(field).status = FieldStatus::Invalid;
                self.validation_error = error.to_string();
            }
        }
    }

    /// Blurs the active field, then validates every field.
    ///
    /// Returns the submission when all fields pass. Otherwise the first
    /// failure becomes the visible error.
    pub fn submit(&mut self) -> Option<ContactSubmission> {
        if let Some(field) = self.editing {
            self.blur(field);
        }

        let mut first_error = None;
        for field in ContactField::ALL {
            let draft = self.field(field).draft.clone();
            match validate_field(field, &draft) {
                Ok(()) => {
                    self.field_mut(field).status = FieldStatus::Valid;
                    self.committed.set(field, draft);
                }
                Err(error) => {
                    self.field_mut(field).status = FieldStatus::Invalid;
                    first_error.get_or_insert(error);
                }
            }
        }

        match first_error {
            Some(error) => {
                self.validation_error = error.to_string();
                None
            }
            None => {
                self.validation_error.clear();
                Some(ContactSubmission::from(&self.committed))
            }
        }
    }

    /// Back to an empty form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Edited(ContactField, String),
    MessageAction(text_editor::Action),
    /// Enter pressed in a field.
    Blurred(ContactField),
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Submitted(ContactSubmission),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Edited(field, value) => {
            state.edit(field, value);
            Event::None
        }
        Message::MessageAction(action) => {
            state.edit_message(action);
            Event::None
        }
        Message::Blurred(field) => {
            state.blur(field);
            Event::None
        }
        Message::Submit => match state.submit() {
            Some(submission) => Event::Submitted(submission),
            None => {
                tracing::debug!(error = state.validation_error(), "contact form rejected");
                Event::None
            }
        },
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut form = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(Text::new(ctx.i18n.tr("contact-heading")).size(typography::TITLE_LG));

    for field in ContactField::ALL {
        let input: Element<'_, Message> = match field {
            ContactField::Message => text_editor(ctx.state.message_editor())
                .on_action(Message::MessageAction)
                .padding(spacing::XS)
                .size(typography::BODY_LG)
                .height(sizing::MESSAGE_EDITOR_HEIGHT)
                .into(),
            _ => text_input("", &ctx.state.field(field).draft)
                .on_input(move |value| Message::Edited(field, value))
                .on_submit(Message::Blurred(field))
                .padding(spacing::XS)
                .size(typography::BODY_LG)
                .into(),
        };

        form = form.push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(ctx.i18n.tr(field.label_key())).size(typography::BODY))
                .push(input),
        );
    }

    if !ctx.state.validation_error().is_empty() {
        form = form.push(
            Container::new(Text::new(ctx.state.validation_error()).size(typography::BODY))
                .padding(spacing::XS)
                .width(Length::Fill)
                .style(styles::container::error_region),
        );
    }

    form = form.push(
        button(Text::new(ctx.i18n.tr("contact-submit")).size(typography::BODY_LG))
            .on_press(Message::Submit)
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary),
    );

    Container::new(form)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_and_blur(state: &mut State, field: ContactField, value: &str) {
        update(state, Message::Edited(field, value.to_string()));
        update(state, Message::Blurred(field));
    }

    #[test]
    fn email_rule() {
        assert!(validate_field(ContactField::Email, "a@b.com").is_ok());
        assert_eq!(
            validate_field(ContactField::Email, "not-an-email"),
            Err(FieldError::InvalidEmail)
        );
        assert_eq!(
            validate_field(ContactField::Email, ""),
            Err(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn error_messages_match_form_copy() {
        assert_eq!(FieldError::InvalidEmail.to_string(), "Your email is invalid.");
        assert_eq!(
            FieldError::Required(ContactField::Name).to_string(),
            "name is required."
        );
        assert_eq!(
            FieldError::Required(ContactField::Message).to_string(),
            "message is required."
        );
    }

    #[test]
    fn whitespace_only_is_missing() {
        assert!(validate_field(ContactField::Message, "   ").is_err());
    }

    #[test]
    fn valid_blur_commits_and_clears_error() {
        let mut state = State::default();
        type_and_blur(&mut state, ContactField::Name, "Jane");

        assert_eq!(state.committed().name, "Jane");
        assert_eq!(state.validation_error(), "");
        assert_eq!(state.field(ContactField::Name).status, FieldStatus::Valid);
    }

    #[test]
    fn invalid_blur_keeps_prior_committed_value() {
        let mut state = State::default();
        type_and_blur(&mut state, ContactField::Name, "Jane");
        type_and_blur(&mut state, ContactField::Name, "");

        assert_eq!(state.validation_error(), "name is required.");
        assert_eq!(state.committed().name, "Jane");
        assert_eq!(state.field(ContactField::Name).status, FieldStatus::Invalid);
        assert_eq!(state.field(ContactField::Name).draft, "");
    }

    #[test]
    fn invalid_email_is_reported_and_not_committed() {
        let mut state = State::default();
        type_and_blur(&mut state, ContactField::Email, "not-an-email");

        assert_eq!(state.validation_error(), "Your email is invalid.");
        assert_eq!(state.committed().email, "");
    }

    #[test]
    fn typing_marks_field_editing_without_validating() {
        let mut state = State::default();
        update(&mut state, Message::Edited(ContactField::Email, "x".into()));

        assert_eq!(state.field(ContactField::Email).status, FieldStatus::Editing);
        assert_eq!(state.editing(), Some(ContactField::Email));
        assert_eq!(state.validation_error(), "");
    }

    #[test]
    fn editing_another_field_blurs_the_previous_one() {
        let mut state = State::default();
        update(&mut state, Message::Edited(ContactField::Name, "Jane".into()));
        update(&mut state, Message::Edited(ContactField::Email, "j".into()));

        assert_eq!(state.committed().name, "Jane");
        assert_eq!(state.field(ContactField::Name).status, FieldStatus::Valid);
        assert_eq!(state.editing(), Some(ContactField::Email));
    }

    #[test]
    fn untouched_fields_are_clean() {
        let state = State::default();
        for field in ContactField::ALL {
            assert_eq!(state.field(field).status, FieldStatus::Clean);
        }
    }

    #[test]
    fn submit_with_missing_fields_reports_first_error() {
        let mut state = State::default();
        update(&mut state, Message::Edited(ContactField::Email, "jane@example.com".into()));

        assert_eq!(update(&mut state, Message::Submit), Event::None);
        assert_eq!(state.validation_error(), "name is required.");
        assert_eq!(state.committed().email, "jane@example.com");
    }

    #[test]
    fn submit_with_valid_fields_emits_submission() {
        let mut state = State::default();
        type_and_blur(&mut state, ContactField::Name, "Jane");
        type_and_blur(&mut state, ContactField::Email, "jane@example.com");
        update(&mut state, Message::Edited(ContactField::Message, "Hello".into()));

        let event = update(&mut state, Message::Submit);
        assert_eq!(
            event,
            Event::Submitted(ContactSubmission {
                name: "Jane".into(),
                email: "jane@example.com".into(),
                message: "Hello".into(),
            })
        );
        assert_eq!(state.validation_error(), "");
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = State::default();
        type_and_blur(&mut state, ContactField::Name, "Jane");
        update(&mut state, Message::Edited(ContactField::Email, "bad".into()));

        state.reset();
        assert_eq!(state.committed(), &FormState::default());
        assert_eq!(state.editing(), None);
        assert_eq!(state.validation_error(), "");
    }

    #[test]
    fn message_editor_keeps_line_breaks_in_draft() {
        let mut state = State::default();
        update(&mut state, Message::Edited(ContactField::Name, "Jane".into()));
        for action in [
            text_editor::Action::Edit(text_editor::Edit::Insert('H')),
            text_editor::Action::Edit(text_editor::Edit::Insert('i')),
            text_editor::Action::Edit(text_editor::Edit::Enter),
            text_editor::Action::Edit(text_editor::Edit::Insert('!')),
        ] {
            update(&mut state, Message::MessageAction(action));
        }

        assert_eq!(state.field(ContactField::Message).draft, "Hi\n!");
        assert_eq!(state.editing(), Some(ContactField::Message));
        assert_eq!(state.committed().name, "Jane");

        update(&mut state, Message::Edited(ContactField::Email, "jane@example.com".into()));
        assert_eq!(state.committed().message, "Hi\n!");
    }

    #[test]
    fn cursor_moves_do_not_touch_message_draft() {
        let mut state = State::default();
        update(&mut state, Message::Edited(ContactField::Message, "Hello".into()));
        update(
            &mut state,
            Message::MessageAction(text_editor::Action::Move(text_editor::Motion::Left)),
        );

        assert_eq!(state.field(ContactField::Message).draft, "Hello");
        assert_eq!(state.message_editor().text(), "Hello");
    }

    #[test]
    fn reset_empties_message_editor() {
        let mut state = State::default();
        update(&mut state, Message::Edited(ContactField::Message, "Hello".into()));
        state.reset();
        assert_eq!(state.message_editor().text(), "");
    }

    #[test]
    fn log_sink_accepts_submissions() {
        let submission = ContactSubmission {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            message: "Hi".into(),
        };
        assert!(LogSink.submit(&submission).is_ok());
    }

    #[test]
    fn contact_view_renders_with_error() {
        let i18n = I18n::default();
        let mut state = State::default();
        type_and_blur(&mut state, ContactField::Email, "nope");
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
