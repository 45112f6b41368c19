mod accuracy;
mod gender;
mod noun;
mod plural_category;

pub use accuracy::Accuracy;
pub use gender::Gender;
pub use noun::{Currency, Noun};
pub use plural_category::PluralCategory;
