use crate::FunctionDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FunctionListResponse {
    pub functions: Vec<FunctionDto>,
}
