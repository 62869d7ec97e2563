//! pixport Relocate - Block model and texture export
//!
//! This crate moves block models and the textures they reference out of
//! per-mod source checkouts and the vanilla asset tree into a flat folder
//! that Blockbench can import from.

mod export;
mod layout;
mod model;
mod resource;

pub use export::{CopiedTexture, ExportReport, ExportedModel, ModelExport, RenderableBlock};
pub use layout::{AssetLayout, ExportRoots, NamingConvention};
pub use model::ModelDocument;
pub use resource::{ResourceLocation, VANILLA_NAMESPACE};
