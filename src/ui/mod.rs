//! Reusable widgets shared by the controller views

pub mod components;
