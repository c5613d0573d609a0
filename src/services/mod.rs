pub mod html_entities;
pub mod markup;

pub use html_entities::decode_html_text;
pub use markup::{NoticeLevel, ResultCard};
