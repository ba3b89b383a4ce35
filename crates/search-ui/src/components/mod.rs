pub mod header;
pub mod home_page;
pub mod icon;
pub mod not_found;
