// Adapters around the core: catalog sources (file, http) and renderers (text, html, csv).

pub mod render;
pub mod sources;
