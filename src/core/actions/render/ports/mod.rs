pub mod row_computer;
pub mod timing_sink;
