use crate::error::{ChartError, Result};
use std::path::Path;

/// Image formats the renderer can write, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Svg,
    Pdf,
}

impl ImageFormat {
    pub fn from_extension(extension: &str) -> Result<ImageFormat> {
        match extension.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "svg" => Ok(ImageFormat::Svg),
            "pdf" => Ok(ImageFormat::Pdf),
            other => Err(ChartError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn from_path(path: &Path) -> Result<ImageFormat> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        ImageFormat::from_extension(extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(ImageFormat::from_path(Path::new("a/b.png")).unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path(Path::new("b.JPG")).unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_path(Path::new("b.jpeg")).unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_path(Path::new("b.svg")).unwrap(), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path(Path::new("b.Pdf")).unwrap(), ImageFormat::Pdf);
    }

    #[test]
    fn test_unsupported() {
        match ImageFormat::from_path(Path::new("plot.eps")) {
            Err(ChartError::UnsupportedFormat(ext)) => assert_eq!(ext, "eps"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(ImageFormat::from_path(Path::new("plot")).is_err());
    }
}
