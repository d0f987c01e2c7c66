//! Main render/view function (View in TEA pattern)


use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use mood_app::{AppState, HitBox};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure apart from one write-back: the card's on-screen area is stored in
/// `state.presentation.card_area` so clicks can be tested against it.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(state.backend), areas.header);
    frame.render_widget(
        widgets::SearchPanel::new(&state.search, state.tick),
        areas.panel,
    );
    frame.render_widget(widgets::KeyHints::for_state(state), areas.footer);

    if state.search.dropdown_open {
        let options = state.search.filtered(&state.catalog);
        let dropdown = widgets::MoodDropdown::new(&state.search, options);
        let dropdown_area = dropdown.area(widgets::trigger_rect(areas.panel), area);
        frame.render_widget(dropdown, dropdown_area);
    }

    if state.presentation.visible {
        render_card(frame.buffer_mut(), area, state);
    } else {
        state.presentation.card_area = None;
    }
}

fn render_card(buf: &mut Buffer, screen: Rect, state: &mut AppState) {
    widgets::modal_overlay::dim_background(buf, screen);

    let rect = widgets::card_rect(screen, &state.presentation);
    ratatui::widgets::Widget::render(
        widgets::FlashCard::new(state.result.as_ref(), &state.presentation),
        rect,
        buf,
    );

    state.presentation.card_area = Some(HitBox::new(rect.x, rect.y, rect.width, rect.height));
}
