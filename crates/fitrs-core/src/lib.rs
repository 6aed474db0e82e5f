pub mod cmd;
pub mod csv_parse;
pub mod fit;
pub mod pipeline;
pub mod processevent;
pub mod report;
pub mod samples;
pub mod stats;
