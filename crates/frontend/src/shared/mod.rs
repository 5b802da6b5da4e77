pub mod analysis_view;
pub mod api_utils;
pub mod config;
pub mod csrf;
pub mod dom;
pub mod export;
pub mod icons;
pub mod notification;
