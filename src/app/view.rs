// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout: title label, black canvas, button row. The canvas is sized to
//! exactly the area the controller fits images into, so a zoomed image that
//! outgrows it is cropped around its center.

use super::{CanvasSurface, Message};
use crate::application::port::DisplaySurface;
use iced::alignment::Horizontal;
use iced::widget::{button, container, image, text, Column, Container, Row};
use iced::{Color, ContentFit, Element, Length};

const LABEL_SIZE: f32 = 20.0;
const SPACING: f32 = 6.0;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub surface: &'a CanvasSurface,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = text(ctx.surface.title()).size(LABEL_SIZE);

    Column::new()
        .push(title)
        .push(canvas(ctx.surface))
        .push(button_row())
        .spacing(SPACING)
        .padding(SPACING)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn canvas(surface: &CanvasSurface) -> Element<'_, Message> {
    let size = surface.canvas_size();

    let content: Element<'_, Message> = match surface.image() {
        Some((handle, _)) => image(handle.clone())
            .content_fit(ContentFit::None)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => text("").into(),
    };

    Container::new(content)
        .center_x(Length::Fixed(size.width as f32))
        .center_y(Length::Fixed(size.height as f32))
        .clip(true)
        .style(|_theme: &iced::Theme| container::Style {
            background: Some(Color::BLACK.into()),
            ..container::Style::default()
        })
        .into()
}

fn button_row<'a>() -> Element<'a, Message> {
    [
        ("Open Folder", Message::OpenFolder),
        ("Previous", Message::Previous),
        ("Next", Message::Next),
        ("Zoom In", Message::ZoomIn),
        ("Zoom Out", Message::ZoomOut),
        ("Start Slide", Message::StartSlideshow),
        ("Stop Slide", Message::StopSlideshow),
        ("Fullscreen", Message::ToggleFullscreen),
        ("Exit", Message::Exit),
    ]
    .into_iter()
    .fold(Row::new().spacing(SPACING), |row, (label, message)| {
        row.push(button(text(label)).on_press(message))
    })
    .into()
}
