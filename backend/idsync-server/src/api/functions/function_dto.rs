use idsync_reconciler::FunctionDefinition;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FunctionDto {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Event-type name that triggers the function
    pub event: String,
}

impl From<&FunctionDefinition> for FunctionDto {
    fn from(function: &FunctionDefinition) -> Self {
        Self {
            id: function.id.to_string(),
            name: function.name.to_string(),
            description: function.description.to_string(),
            event: function.event.as_str().to_string(),
        }
    }
}
