//! Card display and its actions

mod card_actions;
mod greeting_card;

pub use card_actions::CardActions;
pub use greeting_card::GreetingCard;
