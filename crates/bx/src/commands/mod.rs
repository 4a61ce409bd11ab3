//! CLI command implementations.

pub(crate) mod components;
pub(crate) mod render;
pub(crate) mod serve;

pub(crate) use components::ComponentsArgs;
pub(crate) use render::RenderArgs;
pub(crate) use serve::ServeArgs;
