// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the root application.
//!
//! Child components report what happened through their `Event`s; the
//! handlers here turn those events into changes of the shared state.

use super::selection::Selection;
use super::view::PORTFOLIO_SCROLLABLE;
use super::Message;
use crate::catalog::Catalog;
use crate::ui::contact::{self, ContactSink, Event as ContactEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::photo_list;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;

pub const CONTACT_SENT_KEY: &str = "notification-contact-sent";
pub const CONTACT_FAILED_KEY: &str = "notification-contact-failed";

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub catalog: &'a Catalog,
    pub selection: &'a mut Selection,
    pub navbar: &'a mut navbar::State,
    pub photo_list: &'a mut photo_list::State,
    pub contact: &'a mut contact::State,
    pub sink: &'a dyn ContactSink,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(ctx.navbar, message) {
        NavbarEvent::CategorySelected(name) => {
            if ctx.selection.set_current_category(&name) {
                ctx.photo_list.close();
            }
            leave_contact(ctx);
            Task::none()
        }
        NavbarEvent::AboutSelected => {
            leave_contact(ctx);
            operation::snap_to(Id::new(PORTFOLIO_SCROLLABLE), RelativeOffset::END)
        }
        NavbarEvent::ContactSelected => {
            ctx.selection.set_contact_selected(true);
            // The photo list is off screen while the form is shown.
            ctx.photo_list.close();
            Task::none()
        }
    }
}

/// Form values only live while the form is on screen.
fn leave_contact(ctx: &mut UpdateContext<'_>) {
    if ctx.selection.contact_selected() {
        ctx.contact.reset();
    }
    ctx.selection.set_contact_selected(false);
}

pub fn handle_photo_list_message(
    ctx: &mut UpdateContext<'_>,
    message: photo_list::Message,
) -> Task<Message> {
    let category = ctx.selection.current_category().name.clone();
    let photos = ctx.catalog.photos_in(&category);
    photo_list::update(ctx.photo_list, message, &photos);
    Task::none()
}

pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact::Message,
) -> Task<Message> {
    if let ContactEvent::Submitted(submission) = contact::update(ctx.contact, message) {
        match ctx.sink.submit(&submission) {
            Ok(()) => {
                ctx.notifications.push(Notification::success(CONTACT_SENT_KEY));
                ctx.contact.reset();
            }
            Err(err) => {
                tracing::error!(error = %err, "contact submission failed");
                ctx.notifications.push(Notification::error(CONTACT_FAILED_KEY));
            }
        }
    }
    Task::none()
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}
