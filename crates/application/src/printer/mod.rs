pub mod dispatcher;
pub mod orchestrator;

pub use dispatcher::TransportDispatcher;
pub use orchestrator::{
    AccessDenied, CopyReport, PrintOrchestrator, PrintReport, PrintRequest, parse_copy_count,
};
