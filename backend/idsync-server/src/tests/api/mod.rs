mod error;
mod functions;
