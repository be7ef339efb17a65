use chrono::NaiveDateTime;

/// the timestamp stored on created and updated rows
pub fn now() -> NaiveDateTime {
    chrono::offset::Local::now().naive_local()
}
