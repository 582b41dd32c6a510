//! Finding and decoding the images a game is started with.
//!
//! Only failing to list a directory is an error;
//! files that cannot be read or decoded are logged and skipped,
//! so a game might start with fewer images than it has files, or none.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

extern crate image;
use log::warn;

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("cannot list images in {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The bytes of an image file.
#[derive(Debug, Clone, PartialEq,Eq)]
pub struct EncodedImage {
    pub name: Cow<'static,str>,
    pub bytes: Cow<'static,[u8]>,
}

/// An image ready to be uploaded, as 8-bit RGBA rows.
#[derive(Debug, Clone, PartialEq,Eq)]
pub struct DecodedImage {
    pub name: Cow<'static,str>,
    pub size: [u32;2],
    pub rgba: Vec<u8>,
}

/// Wrap images that were compiled into the executable.
pub fn embedded(images: &'static [(&'static str, &'static [u8])]) -> Vec<EncodedImage> {
    images.iter()
        .map(|&(name, bytes)| EncodedImage { name: name.into(), bytes: bytes.into() })
        .collect()
}

/// Read every file in `dir` (but not in subdirectories), sorted by name.
pub fn read_dir(dir: &Path) -> Result<Vec<EncodedImage>, AssetError> {
    let entries = fs::read_dir(dir).map_err(|source| AssetError::ReadDir {
        path: dir.to_owned(),
        source,
    })?;

    let mut images = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Cannot read entry in {:?}: {}", dir, e);
                continue;
            }
        };
        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => continue,
            Ok(_) => {},
            Err(e) => {
                warn!("Cannot get file type of {:?}: {}", entry.path(), e);
                continue;
            }
        }
        let path = entry.path();
        match fs::read(&path) {
            Ok(bytes) => images.push(EncodedImage {
                name: entry.file_name().to_string_lossy().into_owned().into(),
                bytes: bytes.into(),
            }),
            Err(e) => warn!("Cannot read {:?}, skipping it: {}", path, e),
        }
    }
    images.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(images)
}

/// Decode what can be decoded, in the same order.
pub fn decode(images: &[EncodedImage]) -> Vec<DecodedImage> {
    let mut decoded = Vec::with_capacity(images.len());
    for encoded in images {
        match image::load_from_memory(&encoded.bytes) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let (width, height) = rgba.dimensions();
                decoded.push(DecodedImage {
                    name: encoded.name.clone(),
                    size: [width, height],
                    rgba: rgba.into_raw(),
                });
            }
            Err(e) => warn!("Cannot decode {}, skipping it: {}", encoded.name, e),
        }
    }
    decoded
}

/// The sizes of decoded images, which are what the game needs to know about them.
pub fn sizes(images: &[DecodedImage]) -> Vec<[u32;2]> {
    images.iter().map(|image| image.size).collect()
}
