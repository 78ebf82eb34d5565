pub mod errors_list;
pub mod file_upload_list;
pub mod form;
pub mod upload_progress;
pub mod user_info;
