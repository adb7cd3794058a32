// Browser surface: the form page, its submission handler, and the source download.

pub mod handlers;
pub mod page;
pub mod source;
