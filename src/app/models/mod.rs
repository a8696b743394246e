pub mod api_error;
pub mod json_response;
