// SPDX-License-Identifier: MPL-2.0
//! Demo screen: a row of buttons with the toast layer on top.

use super::Message;
use crate::toast::{SurfaceProvider, Toasty};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

const SPACING: f32 = 12.0;

pub fn view<P: SurfaceProvider>(toasty: &Toasty<P>) -> Element<'_, Message> {
    let buttons = Row::new()
        .spacing(SPACING)
        .push(button(Text::new("Show")).on_press(Message::ShowPressed))
        .push(button(Text::new("Flash")).on_press(Message::FlashPressed))
        .push(button(Text::new("Long text")).on_press(Message::LongTextPressed))
        .push(button(Text::new("Hide")).on_press(Message::HidePressed));

    let status = if toasty.presenter().is_showing() {
        "A toast is showing"
    } else {
        "No toast showing"
    };

    let controls = Column::new()
        .spacing(SPACING)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Toasty").size(20.0))
        .push(buttons)
        .push(Text::new(status).size(13.0));

    let content = Container::new(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Stack::new()
        .push(content)
        .push(toasty.view().map(Message::Toast))
        .into()
}
