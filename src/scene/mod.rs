mod assembler;
mod html;

#[cfg(test)]
mod tests;

pub use assembler::assemble;
pub use html::{HtmlRenderer, Renderer};
