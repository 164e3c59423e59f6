use raylib::prelude::*;

use crate::carousel::Carousel;
use crate::constants::*;
use crate::images::label;
use crate::inputs::InputPanel;
use crate::layout::{Bounds, Layout};

fn rect(b: &Bounds) -> Rectangle {
    Rectangle::new(b.x, b.y, b.width, b.height)
}

/// Draws the carousel row and the input panel.
///
/// `textures` is indexed like `Carousel::images`.
pub fn draw_carousel(
    d: &mut RaylibDrawHandle,
    carousel: &Carousel,
    textures: &[Texture2D],
    layout: &Layout,
    panel: &InputPanel,
) {
    draw_button(d, &layout.prev, "<");
    draw_button(d, &layout.next, ">");
    draw_strip(d, carousel, textures, &layout.list);
    draw_inputs(d, carousel, layout, panel);
}

fn draw_button(d: &mut RaylibDrawHandle, bounds: &Bounds, glyph: &str) {
    let (cx, cy) = bounds.center();
    let radius = bounds.width.min(bounds.height) * 0.5;
    d.draw_circle(cx as i32, cy as i32, radius, Color::LIGHTGRAY);
    d.draw_circle_lines(cx as i32, cy as i32, radius, Color::DARKGRAY);

    let size = (radius as i32).max(FONT_SIZE);
    d.draw_text(glyph, cx as i32 - size / 4, cy as i32 - size / 2, size, Color::DARKGRAY);
}

fn draw_strip(d: &mut RaylibDrawHandle, carousel: &Carousel, textures: &[Texture2D], list: &Bounds) {
    d.draw_rectangle_lines_ex(rect(list), 1.0, Color::GRAY);

    let Some(scroll_left) = carousel.scroll_left() else {
        return;
    };
    let item_width = carousel.config().item_width as f32;
    if item_width <= 0.0 {
        return;
    }

    let mut s = d.begin_scissor_mode(list.x as i32, list.y as i32, list.width as i32, list.height as i32);

    for (i, url) in carousel.visible_images().iter().enumerate() {
        let x = list.x + i as f32 * item_width - scroll_left as f32;
        // Only what intersects the frame
        if x + item_width < list.x || x > list.right() {
            continue;
        }
        let Some(texture) = carousel.source_index(i).and_then(|src| textures.get(src)) else {
            continue;
        };

        let tex_width = texture.width() as f32;
        let tex_height = texture.height() as f32;
        let scale = item_width / tex_width.max(1.0);
        let height = tex_height * scale;
        let y = list.y + (list.height - height) * 0.5;

        s.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(x, y, item_width, height),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
        s.draw_text(label(url), x as i32 + 4, list.bottom() as i32 - FONT_SIZE - 4, FONT_SIZE, Color::WHITE);
    }
}

fn draw_inputs(d: &mut RaylibDrawHandle, carousel: &Carousel, layout: &Layout, panel: &InputPanel) {
    let image_count = carousel.images().len();

    for (row, input) in layout.inputs.iter().zip(panel.inputs()) {
        let text_y = row.label.y as i32 + (row.label.height as i32 - FONT_SIZE) / 2;
        d.draw_text(row.field.label(), row.label.x as i32, text_y, FONT_SIZE, Color::DARKGRAY);

        let focused = panel.focused() == Some(input.field);
        d.draw_rectangle_rec(rect(&row.input), Color::WHITE);
        d.draw_rectangle_lines_ex(
            rect(&row.input),
            if focused { 2.0 } else { 1.0 },
            if focused { Color::SKYBLUE } else { Color::GRAY },
        );

        let text_x = row.input.x as i32 + 6;
        if input.buffer.is_empty() {
            let current = carousel.config().get(input.field);
            d.draw_text(&format!("{current}"), text_x, text_y, FONT_SIZE, Color::LIGHTGRAY);
        } else {
            d.draw_text(&input.buffer, text_x, text_y, FONT_SIZE, Color::BLACK);
        }

        let (min, max) = input.field.bounds(image_count);
        let hint = match max {
            Some(max) => format!("min {min}, max {max}"),
            None => format!("min {min}"),
        };
        d.draw_text(&hint, row.input.right() as i32 + 10, text_y, FONT_SIZE, Color::GRAY);
    }
}
