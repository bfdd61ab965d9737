pub mod dispatch;
pub mod errors;
pub mod ports;
pub mod reduce;
pub mod render_options;
pub mod render_parallel;
pub mod render_parallel_in_place;
pub mod render_report;
pub mod render_serial;
pub mod render_stage;
pub mod worker_task;
