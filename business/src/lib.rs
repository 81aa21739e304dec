//! Business layer for the Workers employee viewer.
//!
//! Everything a presentation layer needs lives here:
//! - `Employee` records and the "missing field reads as empty" accessor
//! - `ListViewEngine`, the filter -> sort -> paginate pipeline over held records
//! - `RecordSource` implementations that load the records once at start-up
//!
//! Presentation code (the CLI) should only call the engine mutators and render
//! `VisiblePage`; it should not re-implement filtering or paging.

pub mod collate;
pub mod config;
pub mod employee;
pub mod http;
pub mod list_view;
pub mod record_source;

pub use config::BusinessConfig;
pub use employee::Employee;
pub use list_view::{
    ListViewEngine, PAGE_SIZE, PageStep, SortKey, SortOrder, ViewState, VisiblePage,
};
pub use record_source::{
    FileRecordSource, HttpRecordSource, RecordSource, SourceError, StaticRecordSource,
    load_records,
};
