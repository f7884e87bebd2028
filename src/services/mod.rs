pub mod chatbot;
pub mod description;
pub mod normalizer;
