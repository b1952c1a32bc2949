use serde::{Deserialize, Serialize};

/// Tutoring mode active for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Solve,
    Hint,
}

impl Mode {
    pub fn toggle(self) -> Self {
        match self {
            Mode::Solve => Mode::Hint,
            Mode::Hint => Mode::Solve,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Solve => "solve",
            Mode::Hint => "hint",
        }
    }

    /// Label used in the formatted output block
    pub fn label(self) -> &'static str {
        match self {
            Mode::Solve => "SOLVE",
            Mode::Hint => "HINT",
        }
    }
}

/// Selection rectangle in display-point coordinates, as reported by the
/// snipping overlay. Not necessarily pixel coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SelectionRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Logical size of the display the selection overlay operated in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
}

/// Rectangle in pixel coordinates of the captured image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    // UI -> app
    TriggerCapture(Mode),
    SelectionMade {
        rect: SelectionRect,
        display: DisplaySize,
    },
    SelectionCancelled,
    SwitchMode,
    AskFromHistory {
        question: String,
        mode: Mode,
    },
    GeneratePractice,
    ExportPractice,
    // app -> UI
    SelectRegion {
        image_width: u32,
        image_height: u32,
    },
    ShowOutput(String),
    StatusUpdate {
        status: String,
        busy: bool,
    },
}
