//! Rendering module for converting documents to output formats.

mod json;
mod options;
mod result;
mod text;
mod wiki;

pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use result::{ConvertStats, RenderResult};
pub use text::to_text;
pub use wiki::{to_wiki, to_wiki_with_stats, WikiRenderer};
