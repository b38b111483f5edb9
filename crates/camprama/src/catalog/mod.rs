//! Static reference data: campsites, wildlife, packlist templates and the
//! safety quiz.

pub mod locations;
pub mod quiz;
pub mod templates;
pub mod wildlife;

pub use locations::{
    filter_locations, find_location, order_by_favorites, Category, Favorites, Location, LOCATIONS,
};
pub use quiz::{option_index, Answer, Question, QuizPhase, QuizSession, LETTERS, QUESTIONS};
pub use templates::{find_template, PacklistTemplate, TemplateItem, TEMPLATES};
pub use wildlife::{find_wildlife, DangerLevel, Wildlife, WILDLIFE};
