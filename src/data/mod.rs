pub mod candidate;
pub mod map_config;
pub mod position;
pub mod preview;
pub mod search_sequence;
pub mod selector;
