// SPDX-License-Identifier: MPL-2.0
//! Picker state: dialog guard and drop gesture tracking.

use super::selection::{load_picked_image, IMAGE_EXTENSIONS};
use super::{Effect, Message};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use iced::Task;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Drops arriving this soon after an admitted drop, with no hover in between,
/// are treated as extra files of the same gesture.
pub const DROP_GESTURE_WINDOW: Duration = Duration::from_millis(250);

/// Tracks one OS drag-and-drop gesture so only its first file is used.
///
/// Platforms that report hovers arm the gesture before the drop; the next
/// hover or a leave starts over. Platforms that do not report hovers fall back
/// to [`DROP_GESTURE_WINDOW`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropGesture {
    #[default]
    Idle,
    Hovering,
    Dropped {
        at: Instant,
        armed: bool,
    },
}

impl DropGesture {
    pub fn hover(&mut self) {
        if !matches!(self, Self::Hovering) {
            *self = Self::Hovering;
        }
    }

    pub fn leave(&mut self) {
        *self = Self::Idle;
    }

    /// Whether a file dropped at `now` is the first of its gesture.
    pub fn admit(&mut self, now: Instant) -> bool {
        let armed = self.is_hovering();
        let admitted = match *self {
            Self::Idle | Self::Hovering => true,
            Self::Dropped { at, armed } => {
                !armed && now.saturating_duration_since(at) >= DROP_GESTURE_WINDOW
            }
        };

        if admitted {
            *self = Self::Dropped { at: now, armed };
        }
        admitted
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        matches!(self, Self::Hovering)
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    dialog_open: bool,
    gesture: DropGesture,
    /// Number of the most recent load; older completions are stale.
    load_seq: u64,
}

impl State {
    #[must_use]
    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// True while a file is dragged over the window.
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.gesture.is_hovering()
    }

    pub fn handle(&mut self, message: Message, i18n: &I18n) -> (Effect, Task<Message>) {
        match message {
            Message::OpenRequested => {
                if self.dialog_open {
                    log::debug!("file dialog already open");
                    return (Effect::None, Task::none());
                }
                self.dialog_open = true;
                (Effect::None, open_dialog(i18n))
            }
            Message::DialogClosed(path) => {
                self.dialog_open = false;
                match path {
                    Some(path) => (Effect::None, self.load(path)),
                    None => (Effect::None, Task::none()),
                }
            }
            Message::FileHovered => {
                self.gesture.hover();
                (Effect::None, Task::none())
            }
            Message::HoverLeft => {
                self.gesture.leave();
                (Effect::None, Task::none())
            }
            Message::FileDropped(path) => {
                if self.gesture.admit(Instant::now()) {
                    (Effect::None, self.load(path))
                } else {
                    log::debug!("ignoring extra dropped file {}", path.display());
                    (Effect::None, Task::none())
                }
            }
            Message::Loaded(seq, _) if seq != self.load_seq => {
                log::debug!("discarding stale load #{seq}");
                (Effect::None, Task::none())
            }
            Message::Loaded(_, Ok(picked)) => (Effect::Selected(picked), Task::none()),
            Message::Loaded(_, Err(err)) => {
                match &err {
                    Error::UnsupportedMedia(path) => log::debug!("ignoring non-image file {path}"),
                    _ => log::warn!("could not read picked file: {err}"),
                }
                (Effect::None, Task::none())
            }
        }
    }

    fn load(&mut self, path: PathBuf) -> Task<Message> {
        self.load_seq += 1;
        let seq = self.load_seq;
        Task::perform(load_picked_image(path), move |result| {
            Message::Loaded(seq, result)
        })
    }
}

fn open_dialog(i18n: &I18n) -> Task<Message> {
    let title = i18n.tr("image-dialog-title");
    let filter_name = i18n.tr("image-filter-name");

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter(&filter_name, IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::DialogClosed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::image_picker::PickedImage;
    use std::sync::Arc;

    fn i18n() -> I18n {
        I18n::default()
    }

    #[test]
    fn first_drop_without_hover_is_admitted() {
        let mut gesture = DropGesture::default();
        assert!(gesture.admit(Instant::now()));
    }

    #[test]
    fn extra_files_of_a_hovered_gesture_are_ignored() {
        let mut gesture = DropGesture::default();
        let start = Instant::now();
        gesture.hover();
        gesture.hover();
        assert!(gesture.admit(start));
        assert!(!gesture.admit(start + Duration::from_millis(5)));
        assert!(!gesture.admit(start + Duration::from_secs(5)));
    }

    #[test]
    fn next_hover_starts_a_new_gesture() {
        let mut gesture = DropGesture::default();
        let start = Instant::now();
        gesture.hover();
        assert!(gesture.admit(start));
        gesture.hover();
        assert!(gesture.admit(start + Duration::from_millis(10)));
    }

    #[test]
    fn unhovered_drops_group_by_time_window() {
        let mut gesture = DropGesture::default();
        let start = Instant::now();
        assert!(gesture.admit(start));
        assert!(!gesture.admit(start + Duration::from_millis(100)));
        assert!(gesture.admit(start + DROP_GESTURE_WINDOW));
    }

    #[test]
    fn hover_then_leave_changes_nothing_but_highlight() {
        let mut state = State::default();
        let (effect, _) = state.handle(Message::FileHovered, &i18n());
        assert!(matches!(effect, Effect::None));
        assert!(state.is_hovering());

        let (effect, _) = state.handle(Message::HoverLeft, &i18n());
        assert!(matches!(effect, Effect::None));
        assert!(!state.is_hovering());
    }

    #[test]
    fn drop_clears_hover_highlight() {
        let mut state = State::default();
        state.handle(Message::FileHovered, &i18n());
        state.handle(Message::FileDropped(PathBuf::from("/tmp/a.png")), &i18n());
        assert!(!state.is_hovering());
    }

    #[test]
    fn dialog_is_a_singleton() {
        let mut state = State::default();
        state.handle(Message::OpenRequested, &i18n());
        assert!(state.is_dialog_open());

        state.handle(Message::OpenRequested, &i18n());
        assert!(state.is_dialog_open());

        state.handle(Message::DialogClosed(None), &i18n());
        assert!(!state.is_dialog_open());
    }

    fn picked(name: &str) -> PickedImage {
        PickedImage {
            file_name: name.into(),
            mime: "image/png".into(),
            bytes: Arc::from(vec![0_u8; 4]),
        }
    }

    #[test]
    fn loaded_image_is_selected() {
        let mut state = State::default();
        state.handle(Message::DialogClosed(Some(PathBuf::from("/tmp/cat.png"))), &i18n());

        let (effect, _) = state.handle(Message::Loaded(1, Ok(picked("cat.png"))), &i18n());
        assert!(matches!(effect, Effect::Selected(p) if p == picked("cat.png")));
    }

    #[test]
    fn newest_load_wins_when_completions_arrive_out_of_order() {
        let mut state = State::default();
        state.handle(Message::FileDropped(PathBuf::from("/tmp/big.jpg")), &i18n());
        state.handle(Message::FileHovered, &i18n());
        state.handle(Message::FileDropped(PathBuf::from("/tmp/small.png")), &i18n());

        let (effect, _) = state.handle(Message::Loaded(2, Ok(picked("small.png"))), &i18n());
        assert!(matches!(effect, Effect::Selected(p) if p.file_name == "small.png"));

        let (effect, _) = state.handle(Message::Loaded(1, Ok(picked("big.jpg"))), &i18n());
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn dialog_pick_supersedes_pending_drop() {
        let mut state = State::default();
        state.handle(Message::FileDropped(PathBuf::from("/tmp/big.jpg")), &i18n());
        state.handle(Message::OpenRequested, &i18n());
        state.handle(Message::DialogClosed(Some(PathBuf::from("/tmp/cat.png"))), &i18n());

        let (effect, _) = state.handle(Message::Loaded(1, Ok(picked("big.jpg"))), &i18n());
        assert!(matches!(effect, Effect::None));
        let (effect, _) = state.handle(Message::Loaded(2, Ok(picked("cat.png"))), &i18n());
        assert!(matches!(effect, Effect::Selected(_)));
    }

    #[test]
    fn rejected_file_has_no_effect() {
        let mut state = State::default();
        state.handle(Message::FileDropped(PathBuf::from("/tmp/notes.txt")), &i18n());
        let err = Error::UnsupportedMedia("notes.txt".into());
        let (effect, _) = state.handle(Message::Loaded(1, Err(err)), &i18n());
        assert!(matches!(effect, Effect::None));

        let err = Error::Io("permission denied".into());
        let (effect, _) = state.handle(Message::Loaded(1, Err(err)), &i18n());
        assert!(matches!(effect, Effect::None));
    }
}
