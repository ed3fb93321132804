//! Data model for the year/month grid.

mod month;
mod notification;
mod year_row;

pub use month::Month;
pub use notification::Notification;
pub use year_row::YearRow;
