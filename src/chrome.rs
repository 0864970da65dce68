use raylib::prelude::*;

use crate::constants::*;
use crate::input::NavCommand;
use crate::render::Viewport;

/// Where the navigation affordances sit for the current window size.
#[derive(Debug, Clone)]
pub struct ChromeLayout {
    pub prev: Rectangle,
    pub next: Rectangle,
    pub dots: Vec<Vector2>,
}

/// Bottom-center row of previous/next buttons around one dot per slide.
pub fn chrome_layout(slide_count: usize, viewport: Viewport) -> ChromeLayout {
    let center_x = viewport.width as f32 / 2.0;
    let row_y = viewport.height as f32 - CHROME_ROW_OFFSET;

    let dots_span = DOT_SPACING * slide_count.saturating_sub(1) as f32;
    let first_dot_x = center_x - dots_span / 2.0;
    let dots = (0..slide_count)
        .map(|i| Vector2::new(first_dot_x + DOT_SPACING * i as f32, row_y))
        .collect();

    let button_y = row_y - BUTTON_HEIGHT / 2.0;
    let prev = Rectangle::new(
        first_dot_x - DOT_HIT_RADIUS - GROUP_GAP - BUTTON_WIDTH,
        button_y,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    );
    let next = Rectangle::new(
        first_dot_x + dots_span + DOT_HIT_RADIUS + GROUP_GAP,
        button_y,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    );

    ChromeLayout { prev, next, dots }
}

/// Maps a pointer press position to the affordance under it, if any.
pub fn hit_test(layout: &ChromeLayout, point: Vector2) -> Option<NavCommand> {
    if layout.prev.check_collision_point_rec(point) {
        return Some(NavCommand::Prev);
    }
    if layout.next.check_collision_point_rec(point) {
        return Some(NavCommand::Next);
    }
    for (index, center) in layout.dots.iter().enumerate() {
        let hit_box = Rectangle::new(
            center.x - DOT_HIT_RADIUS,
            center.y - DOT_HIT_RADIUS,
            DOT_HIT_RADIUS * 2.0,
            DOT_HIT_RADIUS * 2.0,
        );
        if hit_box.check_collision_point_rec(point) {
            return Some(NavCommand::JumpTo(index));
        }
    }
    None
}

pub fn draw_chrome(
    d: &mut RaylibDrawHandle,
    current: usize,
    slide_count: usize,
    layout: &ChromeLayout,
    viewport: Viewport,
) {
    draw_button(d, layout.prev, "< Previous");
    draw_button(d, layout.next, "Next >");

    for (index, center) in layout.dots.iter().enumerate() {
        let color = if index == current { ACCENT } else { DOT_IDLE };
        d.draw_circle_v(*center, DOT_RADIUS, color);
    }

    let counter = format!("{} / {}", current + 1, slide_count);
    let counter_width = d.measure_text(&counter, UI_FONT_SIZE);
    d.draw_text(
        &counter,
        viewport.width - counter_width - SCREEN_MARGIN,
        SCREEN_MARGIN,
        UI_FONT_SIZE,
        MUTED,
    );

    d.draw_text(
        "Use left/right arrow keys to navigate",
        SCREEN_MARGIN,
        SCREEN_MARGIN,
        UI_FONT_SIZE,
        MUTED,
    );
}

fn draw_button(d: &mut RaylibDrawHandle, rect: Rectangle, label: &str) {
    d.draw_rectangle_lines_ex(rect, 2.0, ACCENT);
    let label_width = d.measure_text(label, UI_FONT_SIZE);
    d.draw_text(
        label,
        rect.x as i32 + (rect.width as i32 - label_width) / 2,
        rect.y as i32 + (rect.height as i32 - UI_FONT_SIZE) / 2,
        UI_FONT_SIZE,
        ACCENT,
    );
}
