mod capture;
mod engine;
mod normalize;
mod region;

pub use capture::{RawImage, capture_primary_screen_raw, crop_to_png};
pub use engine::{EngineError, TesseractEngine, find_tesseract};
pub use normalize::canonical_question;
pub use region::{MIN_SELECTION_PX, is_too_small, pixel_region};
