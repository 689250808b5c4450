pub mod distance;
pub mod energy;
pub mod error;
pub mod fuel;
pub mod location;
pub mod planner;
pub mod recommender;
pub mod travel_time;
