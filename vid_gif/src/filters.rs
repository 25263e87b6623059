//! Filter-chain composition shared by both encoder passes.
//!
//! The palette pass and the encode pass must see pixel-identical frame
//! geometry, so both expressions are derived from one base chain: a lanczos
//! scale (height auto-computed) followed by the output frame rate.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChain {
    base: String,
}

impl FilterChain {
    /// Build the base chain. `width` of None keeps the source dimensions.
    pub fn new(width: Option<u32>, fps: u32) -> Self {
        let scale = match width {
            Some(width) => format!("scale={}:-1:flags=lanczos", width),
            None => "scale=-1:-1:flags=lanczos".to_string(),
        };
        Self {
            base: format!("{},fps={}", scale, fps),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Filter expression for the palette-generation pass.
    pub fn palette_pass(&self) -> String {
        format!("{},palettegen", self.base)
    }

    /// Filter expression for the final pass; `[1:v]` binds the palette image
    /// supplied as the second input stream.
    pub fn encode_pass(&self) -> String {
        format!("{}[x];[x][1:v]paletteuse", self.base)
    }
}
