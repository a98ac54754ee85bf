//! Goals module - domain models, progress aggregation, and resource traits.

mod goals_model;
mod goals_progress;
mod goals_traits;

pub use goals_model::{Goal, GoalContribution, GoalProgressUpdate, GoalStatus, NewGoal};
pub use goals_progress::{
    contributed_amount, is_completion_eligible, progress_percentage, remaining_amount,
    GoalProgress, GoalProgressBand,
};
pub use goals_traits::GoalClientTrait;
