/// UI module exports

pub mod app;
mod cancel;
mod components;
mod home;
mod results;
mod trending;
mod user_details;
