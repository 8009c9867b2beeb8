// SPDX-License-Identifier: MPL-2.0
//! Drop region rendering.

use super::{ImageSelection, Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::{column, container, image, mouse_area, text};
use iced::{alignment, mouse, ContentFit, Element, Length};

/// Clickable drop region showing either the preview or the upload prompt.
pub fn view<'a>(
    state: &State,
    selection: Option<&'a ImageSelection>,
    i18n: &I18n,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match selection {
        Some(selection) => image(selection.preview().handle().clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PREVIEW_MAX_HEIGHT))
            .into(),
        None => column![
            icons::sized(icons::image(), sizing::ICON_XL).style(icons::muted),
            text(i18n.tr("image-drop-prompt"))
                .size(typography::BODY)
                .align_x(alignment::Horizontal::Center),
        ]
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .into(),
    };

    // The prompt keeps the region tall enough to be an obvious drop target.
    let height = if selection.is_some() {
        Length::Shrink
    } else {
        Length::Fixed(sizing::DROP_REGION_MIN_HEIGHT)
    };

    let region = container(content)
        .padding(spacing::MD)
        .height(height)
        .center_x(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::drop_region(state.is_hovering()));

    mouse_area(region)
        .on_press(Message::OpenRequested)
        .interaction(mouse::Interaction::Pointer)
        .into()
}
