//! Frame sources for fourcolor: still images and a procedural animation.

pub mod image;
pub mod plasma;

use fc_core::traits::Source;

/// Build the procedural source named by the user.
///
/// # Errors
/// Returns an error if the name is not recognized.
pub fn create_procedural_source(
    name: &str,
    width: u32,
    height: u32,
) -> anyhow::Result<Box<dyn Source>> {
    match name.to_lowercase().as_str() {
        "plasma" => Ok(Box::new(plasma::PlasmaSource::new(width, height))),
        _ => anyhow::bail!("Unknown procedural generator: {name}. Supported: plasma"),
    }
}
