pub mod min_time;
pub mod partition_rows;
pub mod thread_limit;
