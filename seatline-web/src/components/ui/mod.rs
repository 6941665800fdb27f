pub mod confirmation_modal;
pub mod seat_grid;
pub mod stats_strip;
pub mod summary_panel;
pub mod trip_form;
