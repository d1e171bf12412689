use std::time::Instant;

use drawer::{
    Buffer, Component, Drawer, DrawerConfig, Event, Frame, Mount, Page, Theme,
};

fn page_with_drawer(width: u16, height: u16) -> Page {
    let mut page = Page::new(Box::new(Drawer::new()), Theme::default());
    page.mount(Mount::new(0, 0));
    page.resize(width, height);
    page
}

fn render_page(page: &Page) -> Buffer {
    let (width, height) = page.viewport();
    let mut buf = Buffer::new(width, height);
    page.render(&mut buf);
    buf
}

fn render_drawer(drawer: &Drawer, theme: &Theme) -> Buffer {
    let mut buf = Buffer::new(60, 20);
    let mut frame = Frame::new(&mut buf, theme, 0);
    drawer.render(&mut frame);
    buf
}

fn char_at(buf: &Buffer, x: i32, y: i32) -> char {
    buf.get(x, y).map(|c| c.char).unwrap_or('?')
}

// ============================================================================
// Buttons
// ============================================================================

#[test]
fn test_add_buttons_render_plus() {
    let page = page_with_drawer(60, 20);
    let buf = render_page(&page);

    // Glyph is centred in the three-wide button.
    assert_eq!(char_at(&buf, 43, 6), '+');
    assert_eq!(char_at(&buf, 22, 12), '+');
}

#[test]
fn test_hidden_delete_buttons_are_not_drawn() {
    let page = page_with_drawer(60, 20);
    let buf = render_page(&page);
    assert_eq!(char_at(&buf, 1, 2), ' ');
    assert_eq!(char_at(&buf, 5, 0), ' ');
}

#[test]
fn test_delete_buttons_follow_hover() {
    let mut page = page_with_drawer(60, 20);
    page.dispatch(&Event::PointerMove { x: 33, y: 7 }, Instant::now());
    let buf = render_page(&page);

    // Row 2 starts at y 7, column 3 at x 32.
    assert_eq!(char_at(&buf, 1, 7), '−');
    assert_eq!(char_at(&buf, 33, 0), '−');
}

#[test]
fn test_button_colors_come_from_classes() {
    let theme = Theme::default();
    let mut drawer = Drawer::new();
    drawer.attach(Mount::new(0, 0));
    let buf = render_drawer(&drawer, &theme);

    let add = theme
        .compute(&["app-drawer__button", "app-drawer__button--add"])
        .bg
        .unwrap();
    assert_eq!(buf.get(42, 6).unwrap().bg, add);
    assert!(buf.get(43, 6).unwrap().bold);
}

// ============================================================================
// Cells
// ============================================================================

#[test]
fn test_cell_text_is_drawn_and_truncated() {
    let theme = Theme::default();
    let mut drawer = Drawer::new();
    drawer.attach(Mount::new(0, 0));
    drawer.table_mut().set_cell_text(0, 0, "hello").unwrap();
    drawer.table_mut().set_cell_text(1, 0, "abcdefghijk").unwrap();

    let buf = render_drawer(&drawer, &theme);
    assert_eq!(char_at(&buf, 5, 3), 'h');
    assert_eq!(char_at(&buf, 9, 3), 'o');

    // Eight columns wide: seven characters and an ellipsis.
    assert_eq!(char_at(&buf, 11, 5), 'g');
    assert_eq!(char_at(&buf, 12, 5), '…');
    // Spacing after the cell is untouched.
    assert_eq!(char_at(&buf, 13, 5), ' ');

    assert_eq!(buf.row_text(3).trim_end(), "     hello");
    assert_eq!(buf.row_text(5).trim_end(), "     abcdefg…");
}

#[test]
fn test_hovered_cell_is_highlighted() {
    let theme = Theme::default();
    let mut drawer = Drawer::new();
    drawer.attach(Mount::new(0, 0));
    drawer.handle_event(
        &Event::PointerMove { x: 6, y: 3 },
        &drawer::EventContext::new(Instant::now(), 0),
    );
    let buf = render_drawer(&drawer, &theme);

    let plain = theme.compute(&["table__cell"]).bg.unwrap();
    let hovered = theme
        .compute(&["table__cell", "table__cell--hover"])
        .bg
        .unwrap();
    assert_ne!(plain, hovered);
    assert_eq!(buf.get(5, 3).unwrap().bg, hovered);
    assert_eq!(buf.get(14, 3).unwrap().bg, plain);
}

// ============================================================================
// Scrolling
// ============================================================================

#[test]
fn test_scroll_is_clamped_to_content() {
    let mut page = page_with_drawer(60, 8);
    let now = Instant::now();

    page.dispatch(&Event::Scroll { delta_y: 2 }, now);
    assert_eq!(page.scroll_y(), 2);

    // Content ends below the add-row button at y 12.
    page.dispatch(&Event::Scroll { delta_y: 10 }, now);
    assert_eq!(page.scroll_y(), 5);

    page.dispatch(&Event::Scroll { delta_y: -100 }, now);
    assert_eq!(page.scroll_y(), 0);
}

#[test]
fn test_scrolled_page_renders_shifted() {
    let mut page = page_with_drawer(60, 8);
    page.dispatch(&Event::Scroll { delta_y: 2 }, Instant::now());
    let buf = render_page(&page);
    assert_eq!(char_at(&buf, 43, 4), '+');
}

#[test]
fn test_custom_cell_size() {
    let theme = Theme::default();
    let mut drawer = Drawer::with_config(&DrawerConfig::new().cell_size(4, 1).cell_spacing(0));
    drawer.attach(Mount::new(0, 0));
    drawer.table_mut().set_cell_text(0, 1, "xy").unwrap();

    let buf = render_drawer(&drawer, &theme);
    // Table at x 4, no spacing: column 1 starts at 8.
    assert_eq!(char_at(&buf, 8, 2), 'x');
}
