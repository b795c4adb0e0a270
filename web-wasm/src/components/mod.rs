pub mod app_summary;
pub mod header;
pub mod phone_frame;
pub mod results_panel;
pub mod screenshot_display;
pub mod screenshot_slots;
pub mod search_bar;
pub mod upload_form;
