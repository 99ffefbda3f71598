pub mod bootstrap;
pub mod service;
pub mod telemetry;

pub use bootstrap::configure_postgres;
pub use service::{InMemoryRecruitmentService, PostgresRecruitmentService, RecruitmentService};
pub use telemetry::init_tracing;
