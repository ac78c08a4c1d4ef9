pub mod app;
pub mod event_details;
pub mod event_list;
pub mod event_list_item;
