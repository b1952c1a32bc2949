use quizlens_types::{CaptureRegion, DisplaySize, SelectionRect};

/// Selections narrower than this in either axis are treated as cancellation
pub const MIN_SELECTION_PX: u32 = 5;

/// Convert a display-point selection into pixel coordinates of the captured
/// raster.
///
/// The capture may be taken at a different pixel density than the logical
/// coordinate system the selection overlay operates in, so each corner is
/// scaled by `image / display` per axis and floored to an integer pixel
/// index. With equal densities this is exact.
pub fn pixel_region(
    sel: SelectionRect,
    display: DisplaySize,
    image_width: u32,
    image_height: u32,
) -> CaptureRegion {
    let scale_x = image_width as f64 / display.width;
    let scale_y = image_height as f64 / display.height;

    let (left, right) = if sel.x1 <= sel.x2 {
        (sel.x1, sel.x2)
    } else {
        (sel.x2, sel.x1)
    };
    let (top, bottom) = if sel.y1 <= sel.y2 {
        (sel.y1, sel.y2)
    } else {
        (sel.y2, sel.y1)
    };

    let x1 = (left * scale_x).floor().clamp(0.0, image_width as f64) as u32;
    let x2 = (right * scale_x).floor().clamp(0.0, image_width as f64) as u32;
    let y1 = (top * scale_y).floor().clamp(0.0, image_height as f64) as u32;
    let y2 = (bottom * scale_y).floor().clamp(0.0, image_height as f64) as u32;

    CaptureRegion {
        x: x1,
        y: y1,
        width: x2.saturating_sub(x1),
        height: y2.saturating_sub(y1),
    }
}

pub fn is_too_small(region: &CaptureRegion) -> bool {
    region.width < MIN_SELECTION_PX || region.height < MIN_SELECTION_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(x1: f64, y1: f64, x2: f64, y2: f64) -> SelectionRect {
        SelectionRect { x1, y1, x2, y2 }
    }

    #[test]
    fn unit_scale_is_exact() {
        let display = DisplaySize {
            width: 1920.0,
            height: 1080.0,
        };
        let region = pixel_region(sel(10.0, 20.0, 110.0, 220.0), display, 1920, 1080);
        assert_eq!(
            region,
            CaptureRegion {
                x: 10,
                y: 20,
                width: 100,
                height: 200
            }
        );
    }

    #[test]
    fn retina_scale_doubles_coordinates() {
        let display = DisplaySize {
            width: 1440.0,
            height: 900.0,
        };
        let region = pixel_region(sel(100.0, 50.0, 300.0, 150.0), display, 2880, 1800);
        assert_eq!(
            region,
            CaptureRegion {
                x: 200,
                y: 100,
                width: 400,
                height: 200
            }
        );
    }

    #[test]
    fn fractional_scale_floors_corners() {
        let display = DisplaySize {
            width: 1000.0,
            height: 1000.0,
        };
        // scale 1.5: 7 -> 10.5 -> 10, 33 -> 49.5 -> 49
        let region = pixel_region(sel(7.0, 7.0, 33.0, 33.0), display, 1500, 1500);
        assert_eq!(region.x, 10);
        assert_eq!(region.width, 39);
    }

    #[test]
    fn swapped_corners_are_normalized() {
        let display = DisplaySize {
            width: 800.0,
            height: 600.0,
        };
        let region = pixel_region(sel(110.0, 220.0, 10.0, 20.0), display, 800, 600);
        assert_eq!(
            region,
            CaptureRegion {
                x: 10,
                y: 20,
                width: 100,
                height: 200
            }
        );
    }

    #[test]
    fn narrow_selection_is_too_small() {
        let display = DisplaySize {
            width: 800.0,
            height: 600.0,
        };
        let region = pixel_region(sel(0.0, 0.0, 4.0, 100.0), display, 800, 600);
        assert!(is_too_small(&region));
    }

    #[test]
    fn selection_clamped_to_image_bounds() {
        let display = DisplaySize {
            width: 800.0,
            height: 600.0,
        };
        let region = pixel_region(sel(700.0, 500.0, 900.0, 700.0), display, 800, 600);
        assert_eq!(region.x + region.width, 800);
        assert_eq!(region.y + region.height, 600);
    }
}
