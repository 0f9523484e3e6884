pub mod anchor_link;
pub mod banner;
pub mod counter;
pub mod demo_form;
pub mod faq;
pub mod header;
pub mod reveal;
