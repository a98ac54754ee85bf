//! Categories module - domain models and resource traits.

mod categories_model;
mod categories_traits;

pub use categories_model::{
    category_display_name, find_category, Category, CategoryType, NewCategory,
};
pub use categories_traits::CategoryClientTrait;
