pub mod function_dto;
pub mod function_list_response;
pub mod functions;
