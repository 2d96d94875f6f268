//! Card export: rasterize the rendered card and save it as a download.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use resvg::{tiny_skia, usvg};

use crate::card::CardView;
use crate::content::Rgb;
use crate::error::{CardError, CardResult};

/// A finished image file waiting to be saved.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub png: Vec<u8>,
}

/// Result of an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The PNG was written here
    Saved { path: PathBuf },
    /// Rasterizing or saving failed; already logged
    Failed,
}

/// Rasterizer capability: rendered card in, PNG bytes out.
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, view: &CardView, background: Rgb) -> CardResult<Vec<u8>>;
}

/// Download capability: persist an artifact where the user will find it.
pub trait DownloadSink: Send + Sync {
    /// Returns the path the artifact was written to.
    fn save(&self, artifact: &ExportArtifact) -> CardResult<PathBuf>;
}

/// [`Rasterizer`] backed by `resvg`.
///
/// Fonts are loaded once, when the rasterizer is built.
pub struct SvgRasterizer {
    options: usvg::Options<'static>,
    scale: f32,
}

impl SvgRasterizer {
    /// Rasterizer using the system's installed fonts.
    pub fn with_system_fonts() -> Self {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        tracing::debug!(faces = fontdb.len(), "Loaded system fonts for rasterizer");
        Self::with_fontdb(fontdb)
    }

    /// Rasterizer using an explicit font database (tests, bundled fonts).
    pub fn with_fontdb(fontdb: usvg::fontdb::Database) -> Self {
        let mut options = usvg::Options::default();
        options.fontdb = Arc::new(fontdb);
        Self {
            options,
            scale: 1.0,
        }
    }

    /// Output scale factor; 2.0 doubles the pixel size.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        self
    }
}

impl Rasterizer for SvgRasterizer {
    fn rasterize(&self, view: &CardView, background: Rgb) -> CardResult<Vec<u8>> {
        let tree = usvg::Tree::from_str(view.svg(), &self.options)
            .map_err(|e| CardError::capability("rasterizer", format!("SVG parse error: {}", e)))?;

        let width = (view.width() as f32 * self.scale).round() as u32;
        let height = (view.height() as f32 * self.scale).round() as u32;
        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| CardError::capability("rasterizer", "pixmap alloc failed"))?;
        pixmap.fill(tiny_skia::Color::from_rgba8(background.r, background.g, background.b, 255));

        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(self.scale, self.scale),
            &mut pixmap.as_mut(),
        );

        pixmap
            .encode_png()
            .map_err(|e| CardError::capability("rasterizer", format!("encode: {}", e)))
    }
}

/// [`DownloadSink`] writing into a directory, browser style: an existing
/// `Natal-Budi.png` makes the next save `Natal-Budi (1).png`.
#[derive(Debug, Clone)]
pub struct DownloadFolder {
    dir: PathBuf,
}

impl DownloadFolder {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The user's downloads directory, or the working directory.
    pub fn user_default() -> Self {
        Self::new(dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DownloadFolder {
    fn save(&self, artifact: &ExportArtifact) -> CardResult<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;

        let name = Path::new(&artifact.file_name);
        let stem = name
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("card")
            .to_string();
        let ext = name.extension().and_then(|s| s.to_str()).unwrap_or("png");

        let mut attempt = 0u32;
        loop {
            let candidate = if attempt == 0 {
                self.dir.join(format!("{}.{}", stem, ext))
            } else {
                self.dir.join(format!("{} ({}).{}", stem, attempt, ext))
            };

            // create_new fails with AlreadyExists when the name is taken
            match OpenOptions::new().write(true).create_new(true).open(&candidate) {
                Ok(file) => {
                    write_or_remove(file, &candidate, &artifact.png)?;
                    return Ok(candidate);
                }
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Write `bytes` through `out`; on failure delete `path` so a retry can
/// reuse the name.
fn write_or_remove<W: Write>(mut out: W, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let written = out.write_all(bytes).and_then(|_| out.flush());
    if written.is_err() {
        drop(out);
        let _ = std::fs::remove_file(path);
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CardContent;
    use tempfile::TempDir;

    fn artifact(name: &str) -> ExportArtifact {
        ExportArtifact {
            file_name: name.to_string(),
            png: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_download_folder_writes_file() {
        let temp = TempDir::new().unwrap();
        let folder = DownloadFolder::new(temp.path().join("downloads"));

        let path = folder.save(&artifact("Natal-Budi.png")).unwrap();
        assert_eq!(path, temp.path().join("downloads").join("Natal-Budi.png"));
        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_download_folder_never_overwrites() {
        let temp = TempDir::new().unwrap();
        let folder = DownloadFolder::new(temp.path());

        let first = folder.save(&artifact("Natal-Budi.png")).unwrap();
        let second = folder.save(&artifact("Natal-Budi.png")).unwrap();
        let third = folder.save(&artifact("Natal-Budi.png")).unwrap();

        assert_eq!(first.file_name().unwrap(), "Natal-Budi.png");
        assert_eq!(second.file_name().unwrap(), "Natal-Budi (1).png");
        assert_eq!(third.file_name().unwrap(), "Natal-Budi (2).png");
    }

    /// Accepts a few bytes, then reports a full disk.
    struct FullDisk {
        accepted: usize,
    }

    impl Write for FullDisk {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.accepted >= 4 {
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "no space left"));
            }
            let n = buf.len().min(4 - self.accepted);
            self.accepted += n;
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_leaves_no_partial_file() {
        let temp = TempDir::new().unwrap();
        let partial = temp.path().join("Natal-Budi.png");
        std::fs::write(&partial, b"part").unwrap();

        let err = write_or_remove(FullDisk { accepted: 0 }, &partial, b"png bytes").unwrap_err();
        assert_eq!(err.to_string(), "no space left");
        assert!(!partial.exists());

        // The retry gets the plain name back
        let folder = DownloadFolder::new(temp.path());
        let path = folder.save(&artifact("Natal-Budi.png")).unwrap();
        assert_eq!(path.file_name().unwrap(), "Natal-Budi.png");
    }

    #[test]
    fn test_rasterizer_produces_png_of_card_size() {
        let rasterizer = SvgRasterizer::with_fontdb(usvg::fontdb::Database::new());
        let content = CardContent::default();
        let view = CardView::render(&content, "Budi", None);

        let png = rasterizer.rasterize(&view, content.background).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), view.width());
        assert_eq!(decoded.height(), view.height());
    }

    #[test]
    fn test_rasterizer_scale() {
        let rasterizer =
            SvgRasterizer::with_fontdb(usvg::fontdb::Database::new()).with_scale(0.5);
        let content = CardContent::default();
        let view = CardView::render(&content, "Budi", None);

        let png = rasterizer.rasterize(&view, content.background).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), view.width() / 2);
    }
}
