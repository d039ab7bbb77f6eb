use std::path::{Path, PathBuf};

/// Pipeline stages that produce an output image, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Negative,
    Greyscale,
    BlackAndWhite,
    Hsv,
    Histogram,
    GrayReduction,
    FloydSteinberg,
}

impl Stage {
    pub const ALL: [Stage; 7] = [
        Stage::Negative,
        Stage::Greyscale,
        Stage::BlackAndWhite,
        Stage::Hsv,
        Stage::Histogram,
        Stage::GrayReduction,
        Stage::FloydSteinberg,
    ];

    /// Suffix appended to the input file stem.
    pub fn suffix(self) -> &'static str {
        match self {
            Stage::Negative => "Negative",
            Stage::Greyscale => "Greyscale",
            Stage::BlackAndWhite => "BlackAndWhite",
            Stage::Hsv => "HSVImage",
            Stage::Histogram => "Histogram",
            Stage::GrayReduction => "GrayscaleReducedImage",
            Stage::FloydSteinberg => "Floyd",
        }
    }

    /// `<out_dir>/<input stem><suffix>.png`
    pub fn output_path(self, input: &Path, out_dir: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        out_dir.join(format!("{stem}{}.png", self.suffix()))
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}
