// SPDX-License-Identifier: MPL-2.0
//! Root view: the form card plus any startup notice.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::vqa_form;
use iced::Element;

pub(super) struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a vqa_form::State,
    /// i18n key of a startup warning, if any.
    pub notice: Option<&'a str>,
}

pub(super) fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let notice = ctx.notice.map(|key| ctx.i18n.tr(key));
    vqa_form::view(ctx.form, ctx.i18n, notice).map(Message::Form)
}
