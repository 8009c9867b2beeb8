// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window file drag events go to the image picker; the close request goes to
//! the shell so the form is torn down before exit.

use super::Message;
use crate::ui::{image_picker, vqa_form};
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Spinner animation period.
pub const SPINNER_TICK: Duration = Duration::from_millis(50);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| route_window_event(event, window_id))
}

fn picker(message: image_picker::Message) -> Message {
    Message::Form(vqa_form::Message::Picker(message))
}

fn route_window_event(event: Event, window_id: window::Id) -> Option<Message> {
    let Event::Window(event) = event else {
        return None;
    };

    match event {
        window::Event::CloseRequested => Some(Message::WindowCloseRequested(window_id)),
        window::Event::FileHovered(_) => Some(picker(image_picker::Message::FileHovered)),
        window::Event::FilesHoveredLeft => Some(picker(image_picker::Message::HoverLeft)),
        window::Event::FileDropped(path) => Some(picker(image_picker::Message::FileDropped(path))),
        _ => None,
    }
}

/// Spinner ticks, only while a prediction is running.
pub fn create_spinner_subscription(submitting: bool) -> Subscription<Message> {
    if submitting {
        time::every(SPINNER_TICK).map(|_| Message::Form(vqa_form::Message::SpinnerTick))
    } else {
        Subscription::none()
    }
}
