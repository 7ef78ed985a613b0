// Distant reading: corpus-level sentiment, style and topic analysis
//
// This is the library root. Each module corresponds to a stage of the
// analysis pipeline, plus the ambient pieces (config, errors, output).

pub mod config;
pub mod corpus;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod sentiment;
pub mod status;
pub mod style;
pub mod text;
pub mod topics;
