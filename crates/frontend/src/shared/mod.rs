pub mod api_utils;
pub mod chart;
pub mod components;
pub mod config;
pub mod icons;
pub mod page_frame;
