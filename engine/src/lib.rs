pub mod assets;
#[cfg(feature="speedy2d")]
mod speedy2d;

#[cfg(feature="speedy2d")]
pub use self::speedy2d::start;
