mod color;
mod curve;

pub use color::{Color, ParseColorError};
pub use curve::CatmullRomCurve;
