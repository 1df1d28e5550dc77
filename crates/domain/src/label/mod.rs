mod job;
mod number;
pub mod template;

pub use job::{ControlType, LabelFields, LabelJob};
pub use number::LabelNumber;
pub use template::{RenderedDocument, render};
