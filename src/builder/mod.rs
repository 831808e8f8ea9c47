//! Builder engine.
//!
//! Every builder here is a non-consuming accumulator: setters take `&mut self`
//! and return `&mut Self` so calls chain in any order, and the last write to a
//! field wins. [`Build::build`] borrows the builder, so calling it again after
//! more mutation yields a product reflecting the current state.

pub mod computer;
pub mod query;
pub mod template;

use crate::error::Result;

pub use computer::{Computer, ComputerBuilder};
pub use query::{Direction, QueryBuilder};
pub use template::{HtmlTemplate, HtmlTemplateBuilder};

/// Finalizes a builder into its product.
pub trait Build {
    type Output;

    fn build(&self) -> Result<Self::Output>;
}

/// Renders a finished product to text.
pub trait Render {
    fn render(&self) -> String;
}

/// Builds and renders in one step.
pub fn build_and_render<B>(builder: &B) -> Result<String>
where
    B: Build,
    B::Output: Render,
{
    Ok(builder.build()?.render())
}
