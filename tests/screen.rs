use cairo::{Format, ImageSurface};
use screen_api::config::{Dimensions, DrawSettingsOverride, GlyphCellOverride};
use screen_api::draw::{HAlign, MapTerrain, Rgba, VAlign};
use screen_api::{Screen, ScreenError, ScreenOptions};
use tempfile::TempDir;

fn pixels(screen: Screen) -> (Vec<u8>, usize) {
    let mut surface = screen.into_surface();
    let stride = surface.stride() as usize;
    let data = surface.data().expect("surface is exclusively owned").to_vec();
    (data, stride)
}

fn alpha_at(data: &[u8], stride: usize, x: usize, y: usize) -> u8 {
    // ARGB32 is stored native-endian, alpha in the high byte
    let offset = y * stride + x * 4;
    let pixel = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    (pixel >> 24) as u8
}

fn has_pixels(data: &[u8]) -> bool {
    data.iter().any(|byte| *byte != 0)
}

/// Bounding box `(min_x, min_y, max_x, max_y)` of every pixel with ink.
fn ink_bounds(
    data: &[u8],
    stride: usize,
    width: usize,
    height: usize,
) -> Option<(usize, usize, usize, usize)> {
    let mut bounds: Option<(usize, usize, usize, usize)> = None;
    for y in 0..height {
        for x in 0..width {
            if alpha_at(data, stride, x, y) == 0 {
                continue;
            }
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
    }
    bounds
}

/// 16px font with a 16px square glyph cell, wide enough that real glyphs
/// never outgrow the estimated line width.
fn large_text_screen(width: i32, height: i32) -> Screen {
    let overrides = DrawSettingsOverride {
        font_size: Some(16.0),
        font_family: Some("Sans".into()),
        font_char_dimensions: GlyphCellOverride {
            width: Some(16.0),
            height: Some(16.0),
        },
        ..Default::default()
    };
    Screen::new(
        ScreenOptions::new()
            .dimensions(Dimensions::new(width, height))
            .draw_settings(overrides),
    )
    .unwrap()
}

#[test]
fn default_surface_is_380_by_240() {
    let screen = Screen::new(ScreenOptions::new()).unwrap();
    assert_eq!(screen.surface().width(), 380);
    assert_eq!(screen.surface().height(), 240);
    assert_eq!((screen.width(), screen.height()), (380, 240));
}

#[test]
fn dimensions_size_new_surface() {
    let screen = Screen::new(ScreenOptions::new().dimensions(Dimensions::new(64, 48))).unwrap();
    assert_eq!((screen.width(), screen.height()), (64, 48));
}

#[test]
fn existing_surface_is_used_as_is() {
    let surface = ImageSurface::create(Format::ARgb32, 50, 40).unwrap();
    let screen = Screen::new(
        ScreenOptions::new()
            .surface(surface)
            .dimensions(Dimensions::new(999, 999)),
    )
    .unwrap();
    assert_eq!((screen.width(), screen.height()), (50, 40));
}

#[test]
fn reported_dimensions_survive_clear() {
    let mut screen = Screen::new(
        ScreenOptions::new().report_dimensions(Dimensions::new(190, 120)),
    )
    .unwrap();
    assert_eq!((screen.width(), screen.height()), (190, 120));

    screen.draw_clear();
    assert_eq!((screen.width(), screen.height()), (190, 120));
    assert_eq!(screen.surface().width(), 380);
}

#[test]
fn set_color_then_line_draws_opaque_pixels() {
    let mut screen = Screen::new(ScreenOptions::new()).unwrap();
    screen.set_color(100, 100, 200, Some(255));
    screen.draw_line(0.0, 0.0, 200.0, 200.0);
    assert_eq!(screen.color_string(), "rgba(100, 100, 200, 1)");

    let (data, _) = pixels(screen);
    assert!(has_pixels(&data));
}

#[test]
fn clear_removes_everything_drawn() {
    let mut screen = Screen::new(ScreenOptions::new().dimensions(Dimensions::new(40, 40))).unwrap();
    screen.draw_rect_f(0.0, 0.0, 40.0, 40.0);
    screen.draw_clear();

    let (data, _) = pixels(screen);
    assert!(!has_pixels(&data));
}

#[test]
fn clear_only_covers_reported_area() {
    let mut screen = Screen::new(
        ScreenOptions::new()
            .dimensions(Dimensions::new(20, 20))
            .report_dimensions(Dimensions::new(10, 10)),
    )
    .unwrap();
    screen.draw_rect_f(0.0, 0.0, 20.0, 20.0);
    screen.draw_clear();

    let (data, stride) = pixels(screen);
    assert_eq!(alpha_at(&data, stride, 5, 5), 0);
    assert_eq!(alpha_at(&data, stride, 15, 15), 255);
}

#[test]
fn filled_shapes_cover_their_interior() {
    let mut screen =
        Screen::new(ScreenOptions::new().dimensions(Dimensions::new(100, 100))).unwrap();
    screen.set_color(0, 200, 0, None);
    screen.draw_circle_f(25.0, 25.0, 20.0);
    screen.draw_triangle_f(60.0, 60.0, 95.0, 60.0, 60.0, 95.0);

    let (data, stride) = pixels(screen);
    assert_eq!(alpha_at(&data, stride, 25, 25), 255);
    assert_eq!(alpha_at(&data, stride, 65, 65), 255);
    assert_eq!(alpha_at(&data, stride, 90, 90), 0);
    assert_eq!(alpha_at(&data, stride, 2, 98), 0);
}

#[test]
fn stroked_circle_leaves_center_empty() {
    let mut screen =
        Screen::new(ScreenOptions::new().dimensions(Dimensions::new(100, 100))).unwrap();
    screen.draw_circle(50.0, 50.0, 30.0);

    let (data, stride) = pixels(screen);
    assert_eq!(alpha_at(&data, stride, 50, 50), 0);
    assert!(alpha_at(&data, stride, 80, 50) > 0);
}

#[test]
fn transparent_color_draws_nothing() {
    let mut screen = Screen::new(ScreenOptions::new().dimensions(Dimensions::new(30, 30))).unwrap();
    screen.set_color(255, 0, 0, Some(0));
    screen.draw_rect_f(0.0, 0.0, 30.0, 30.0);

    let (data, _) = pixels(screen);
    assert!(!has_pixels(&data));
}

#[test]
fn draw_map_changes_no_pixels() {
    fn render(with_map: bool) -> Vec<u8> {
        let mut screen =
            Screen::new(ScreenOptions::new().dimensions(Dimensions::new(60, 60))).unwrap();
        screen.set_map_color_ocean(0, 0, 255, None);
        screen.draw_rect_f(10.0, 10.0, 20.0, 20.0);
        if with_map {
            screen.draw_map(0.0, 0.0, 1.0);
            screen.draw_map(-100.0, 1e9, 0.0);
        }
        pixels(screen).0
    }

    assert_eq!(render(true), render(false));
}

#[test]
fn empty_text_draws_nothing() {
    let mut screen = Screen::new(ScreenOptions::new()).unwrap();
    screen.draw_text(0.0, 0.0, "");
    screen.draw_text_box(10.0, 10.0, 100.0, 50.0, "", HAlign::Center, VAlign::Center);

    let (data, _) = pixels(screen);
    assert!(!has_pixels(&data));
}

#[test]
fn default_font_text_leaves_ink_above_baseline() {
    let mut screen = Screen::new(ScreenOptions::new().dimensions(Dimensions::new(60, 20))).unwrap();
    screen.draw_text(1.0, 1.0, "HELLO");

    // first baseline sits at y + font_size = 6
    let (data, stride) = pixels(screen);
    let (_, min_y, _, _) = ink_bounds(&data, stride, 60, 20).expect("text leaves ink");
    assert!(min_y < 6, "ink starts at row {min_y}");
}

#[test]
fn text_sits_on_its_baseline() {
    let mut screen = large_text_screen(200, 60);
    screen.draw_text(1.0, 1.0, "HELLO");

    // baseline = 1 + 16; capitals have no descenders
    let (data, stride) = pixels(screen);
    let (min_x, min_y, _, max_y) = ink_bounds(&data, stride, 200, 60).expect("text leaves ink");
    assert!(min_y < 17, "ink starts at row {min_y}");
    assert!(max_y <= 19, "ink reaches row {max_y}, below the baseline");
    assert!(min_x <= 4);
}

#[test]
fn right_aligned_text_box_inks_near_right_edge() {
    let mut screen = large_text_screen(320, 100);
    screen.draw_text_box(100.0, 20.0, 200.0, 60.0, "hello", HAlign::Right, VAlign::Center);

    let (data, stride) = pixels(screen);
    let (min_x, min_y, max_x, max_y) =
        ink_bounds(&data, stride, 320, 100).expect("text box leaves ink");
    assert!(min_x >= 100, "ink starts left of the box at column {min_x}");
    assert!(max_x <= 301, "ink passes the right edge at column {max_x}");
    assert!(max_x >= 270, "right-aligned ink ends at column {max_x}");
    assert!(min_y >= 20 && max_y <= 80, "ink rows {min_y}..{max_y} leave the box");
}

#[test]
fn finished_surface_has_no_context() {
    let surface = ImageSurface::create(Format::ARgb32, 10, 10).unwrap();
    surface.finish();

    match Screen::new(ScreenOptions::new().surface(surface)) {
        Err(ScreenError::ContextUnavailable(_)) => {}
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("finished surface must not yield a context"),
    }
}

#[test]
fn ocean_palette_round_trips() {
    let mut screen = Screen::new(ScreenOptions::new()).unwrap();
    screen.set_map_color_ocean(10, 20, 30, None);
    assert_eq!(screen.map_color(MapTerrain::Ocean), Some(Rgba::new(10, 20, 30, 255)));

    screen.set_color(1, 2, 3, Some(4));
    screen.set_map_color_ocean(10, 20, 30, Some(40));
    assert_eq!(screen.map_color(MapTerrain::Ocean), Some(Rgba::new(10, 20, 30, 40)));
}

#[test]
fn draw_settings_override_reaches_screen() {
    let overrides = DrawSettingsOverride {
        line_width: Some(3.0),
        font_size: Some(9.0),
        ..Default::default()
    };
    let screen = Screen::new(ScreenOptions::new().draw_settings(overrides)).unwrap();
    assert_eq!(screen.settings().line_width, 3.0);
    assert_eq!(screen.settings().font_size, 9.0);
    assert_eq!(screen.cairo().line_width(), 3.0);
}

#[test]
fn open_png_reports_missing_target() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.png");
    match Screen::open_png(&missing, ScreenOptions::new()) {
        Err(ScreenError::MissingTarget(path)) => assert_eq!(path, missing),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("missing target must not bind"),
    }
}

#[test]
fn written_png_can_be_reopened_as_target() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("frame.png");

    let mut screen = Screen::new(ScreenOptions::new().dimensions(Dimensions::new(32, 16))).unwrap();
    screen.draw_rect_f(0.0, 0.0, 8.0, 8.0);
    screen.write_png(&path).unwrap();

    let reopened = Screen::open_png(&path, ScreenOptions::new()).unwrap();
    assert_eq!((reopened.width(), reopened.height()), (32, 16));
    let (data, stride) = pixels(reopened);
    assert_eq!(alpha_at(&data, stride, 4, 4), 255);
    assert_eq!(alpha_at(&data, stride, 20, 4), 0);
}
