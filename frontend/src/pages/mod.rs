pub mod access_denied;
pub mod not_found;
