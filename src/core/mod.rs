pub mod admin;
pub mod advisory;
pub mod attendance;
pub mod backup;
pub mod capture;
pub mod export;
pub mod logbook;
pub mod roster;
pub mod station;
pub mod summary;
pub mod time;
