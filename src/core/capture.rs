//! Evidence capture providers.
//!
//! Each provider is a one-shot request that either yields a value or reports
//! `CaptureUnavailable`. A failed capture only drops the optional field; it
//! never blocks the clock action.

use crate::core::attendance::Evidence;
use crate::errors::{AppError, AppResult};
use crate::models::GeoPoint;
use base64::{Engine, engine::general_purpose::STANDARD};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub trait CaptureProvider {
    type Output;

    fn request(&self) -> AppResult<Self::Output>;
}

/// Still image read from a file and encoded as a data URL.
pub struct PhotoFile {
    path: PathBuf,
}

impl PhotoFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

impl CaptureProvider for PhotoFile {
    type Output = String;

    fn request(&self) -> AppResult<String> {
        let mime = mime_for(&self.path).ok_or_else(|| {
            AppError::CaptureUnavailable(format!(
                "unsupported image type: {}",
                self.path.display()
            ))
        })?;

        let bytes = fs::read(&self.path).map_err(|e| {
            AppError::CaptureUnavailable(format!("camera image {}: {e}", self.path.display()))
        })?;

        if bytes.is_empty() {
            return Err(AppError::CaptureUnavailable(format!(
                "empty image: {}",
                self.path.display()
            )));
        }

        Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
    }
}

/// Position supplied up front (e.g. from the command line).
pub struct FixedPosition {
    latitude: f64,
    longitude: f64,
}

impl FixedPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl CaptureProvider for FixedPosition {
    type Output = GeoPoint;

    fn request(&self) -> AppResult<GeoPoint> {
        GeoPoint::new(self.latitude, self.longitude).ok_or_else(|| {
            AppError::CaptureUnavailable(format!(
                "invalid position {}, {}",
                self.latitude, self.longitude
            ))
        })
    }
}

/// A device that is never there. Stands in when nothing was configured.
pub struct Unavailable<T> {
    reason: &'static str,
    _marker: std::marker::PhantomData<T>,
}

impl<T> Unavailable<T> {
    pub fn new(reason: &'static str) -> Self {
        Self {
            reason,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T> CaptureProvider for Unavailable<T> {
    type Output = T;

    fn request(&self) -> AppResult<T> {
        Err(AppError::CaptureUnavailable(self.reason.to_string()))
    }
}

/// Ask each configured provider once. Failures come back as warnings.
pub fn collect_evidence(
    camera: Option<&dyn CaptureProvider<Output = String>>,
    position: Option<&dyn CaptureProvider<Output = GeoPoint>>,
) -> (Evidence, Vec<AppError>) {
    let mut warnings = Vec::new();

    let photo = camera.and_then(|c| match c.request() {
        Ok(p) => Some(p),
        Err(e) => {
            warn!(error = %e, "photo capture failed");
            warnings.push(e);
            None
        }
    });

    let geo = position.and_then(|p| match p.request() {
        Ok(g) => Some(g),
        Err(e) => {
            warn!(error = %e, "position capture failed");
            warnings.push(e);
            None
        }
    });

    (Evidence { photo, geo }, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_file_becomes_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snap.png");
        fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let photo = PhotoFile::new(&path).request().unwrap();
        assert_eq!(photo, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn missing_photo_is_unavailable() {
        let err = PhotoFile::new("/nonexistent/snap.jpg").request().unwrap_err();
        assert!(matches!(err, AppError::CaptureUnavailable(_)));
    }

    #[test]
    fn failures_only_drop_the_field() {
        let camera = Unavailable::<String>::new("camera access denied");
        let position = FixedPosition::new(40.4168, -3.7038);

        let (evidence, warnings) = collect_evidence(Some(&camera), Some(&position));

        assert_eq!(evidence.photo, None);
        assert_eq!(evidence.geo, GeoPoint::new(40.4168, -3.7038));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn nothing_requested_means_nothing_collected() {
        let (evidence, warnings) = collect_evidence(None, None);
        assert_eq!(evidence, Evidence::default());
        assert!(warnings.is_empty());
    }
}
