pub mod carousel;
pub mod lead_form;
pub mod media_slot;
pub mod nav;
pub mod reveal;
