pub mod dismiss;
pub mod page_timer;
pub mod scroll;
