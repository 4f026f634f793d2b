pub mod poll_policy;
pub mod report_writer;

pub use poll_policy::{PollDecision, PollPolicy, Sleeper, TokioSleeper};
pub use report_writer::ReportWriter;
