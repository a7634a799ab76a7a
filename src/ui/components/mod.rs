mod cards;
mod prompt;

pub use cards::{card_text, render_cards, render_empty};
pub use prompt::{BusyState, PromptContext, render_prompt};
