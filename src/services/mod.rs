pub mod answer_cache;
pub mod answer_engine;
pub mod field_extractor;
pub mod openai_client;
pub mod page_fetcher;

pub use answer_cache::*;
pub use answer_engine::*;
pub use field_extractor::*;
pub use openai_client::*;
pub use page_fetcher::*;
