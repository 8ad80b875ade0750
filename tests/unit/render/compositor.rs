use super::*;
use crate::design::context::DesignInput;

fn design() -> DesignContext {
    crate::design::resolve(&DesignInput::default())
}

fn transparent_layer(canvas: Canvas) -> RgbaImage {
    RgbaImage::from_pixel(canvas.width, canvas.height, image::Rgba([0, 0, 0, 0]))
}

fn png_bytes(width: u32, height: u32, px: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, image::Rgba(px));
    encode_png(&img).unwrap()
}

#[test]
fn fallback_fill_equals_background_color_exactly() {
    let d = design();
    let canvas = Canvas::carousel();
    let out = composite_slide(None, &transparent_layer(canvas), &d, canvas).unwrap();
    let expected = d.background_color.to_rgba8();
    assert_eq!(out.get_pixel(0, 0).0, expected);
    assert_eq!(out.get_pixel(1079, 1349).0, expected);
    assert_eq!(out.get_pixel(540, 675).0, expected);
}

#[test]
fn cover_fit_outputs_exact_canvas_dimensions() {
    let canvas = Canvas::carousel();
    // Landscape source forces scale-by-height plus horizontal crop.
    let wide = png_bytes(2000, 1000, [10, 20, 30, 255]);
    let fitted = cover_fit(&wide, canvas).unwrap();
    assert_eq!(fitted.dimensions(), (canvas.width, canvas.height));

    // Tall source forces scale-by-width plus vertical crop.
    let tall = png_bytes(500, 2000, [10, 20, 30, 255]);
    let fitted = cover_fit(&tall, canvas).unwrap();
    assert_eq!(fitted.dimensions(), (canvas.width, canvas.height));
}

#[test]
fn background_shows_through_transparent_text_layer() {
    let d = design();
    let canvas = Canvas::carousel();
    let bg = png_bytes(1080, 1350, [200, 100, 50, 255]);
    let out = composite_slide(Some(&bg), &transparent_layer(canvas), &d, canvas).unwrap();
    assert_eq!(out.get_pixel(540, 675).0, [200, 100, 50, 255]);
}

#[test]
fn opaque_text_layer_pixels_replace_the_base() {
    let d = design();
    let canvas = Canvas::carousel();
    let mut layer = transparent_layer(canvas);
    layer.put_pixel(10, 10, image::Rgba([255, 255, 255, 255]));
    let out = composite_slide(None, &layer, &d, canvas).unwrap();
    assert_eq!(out.get_pixel(10, 10).0, [255, 255, 255, 255]);
    assert_eq!(out.get_pixel(11, 10).0, d.background_color.to_rgba8());
}

#[test]
fn mismatched_text_layer_is_rejected() {
    let d = design();
    let canvas = Canvas::carousel();
    let wrong = RgbaImage::from_pixel(100, 100, image::Rgba([0, 0, 0, 0]));
    assert!(composite_slide(None, &wrong, &d, canvas).is_err());
}

#[test]
fn corrupt_background_bytes_error() {
    let canvas = Canvas::carousel();
    assert!(cover_fit(b"definitely not an image", canvas).is_err());
}

#[test]
fn encode_png_round_trips() {
    let img = RgbaImage::from_pixel(4, 4, image::Rgba([1, 2, 3, 255]));
    let png = encode_png(&img).unwrap();
    let back = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (4, 4));
    assert_eq!(back.get_pixel(2, 2).0, [1, 2, 3, 255]);
}
