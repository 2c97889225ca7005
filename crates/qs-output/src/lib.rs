//! `qs-output`: simulation output writers for the qsim checkout simulator.
//!
//! Two backends are provided:
//!
//! | Backend         | Destination                 | Contents                              |
//! |-----------------|-----------------------------|---------------------------------------|
//! | `TraceWriter`   | any `io::Write`             | one text line per event + stats line  |
//! | `CsvWriter`     | `events.csv`, `summary.csv` | one row per event + one summary row   |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `qs_sim::SimObserver`.  A pair `(A, B)` of writers is
//! itself a writer, and so is `Option<W>`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use qs_output::{CsvWriter, SimOutputObserver, TraceWriter};
//!
//! let trace = TraceWriter::new(std::io::stdout().lock());
//! let csv = CsvWriter::new(Path::new("./output")).ok();
//! let mut obs = SimOutputObserver::new((trace, csv));
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod trace;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EventRow, SummaryRow};
pub use trace::TraceWriter;
pub use writer::OutputWriter;
