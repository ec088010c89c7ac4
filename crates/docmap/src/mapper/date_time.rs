use super::FieldMapper;
use crate::{Document, DocumentExt, Result, Value};
use chrono::{NaiveDateTime, NaiveTime};
use std::sync::Arc;

/// Maps a date/time attribute split over a date item and a time item.
///
/// Reading combines the date part of the date item with the time part of the
/// time item; a missing date clears the attribute and a missing time means
/// midnight. Writing stores the date at midnight and the time on the epoch
/// date. A cleared attribute leaves both items untouched.
pub struct DateTimeMapper<T> {
    date_item: String,
    time_item: String,
    get: Arc<dyn Fn(&T) -> Option<NaiveDateTime> + Send + Sync>,
    set: Arc<dyn Fn(&mut T, Option<NaiveDateTime>) + Send + Sync>,
}

impl<T> DateTimeMapper<T> {
    pub fn new<G, S>(
        date_item: impl Into<String>,
        time_item: impl Into<String>,
        get: G,
        set: S,
    ) -> Self
    where
        G: Fn(&T) -> Option<NaiveDateTime> + Send + Sync + 'static,
        S: Fn(&mut T, Option<NaiveDateTime>) + Send + Sync + 'static,
    {
        Self {
            date_item: date_item.into(),
            time_item: time_item.into(),
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }
}

impl<T> FieldMapper<T> for DateTimeMapper<T> {
    fn item_names(&self) -> Vec<&str> {
        vec![&self.date_item, &self.time_item]
    }

    fn map_to_object(&self, doc: &dyn Document, target: &mut T) -> Result<()> {
        let Some(date) = doc.read_date_time(&self.date_item)? else {
            (self.set)(target, None);
            return Ok(());
        };

        let time = doc
            .read_date_time(&self.time_item)?
            .map(|time| time.time())
            .unwrap_or_default();

        (self.set)(target, Some(date.date().and_time(time)));
        Ok(())
    }

    fn map_to_document(&self, source: &T, doc: &mut dyn Document) -> Result<()> {
        let Some(value) = (self.get)(source) else {
            return Ok(());
        };

        let date = value.date().and_time(NaiveTime::default());
        let time = NaiveDateTime::default().date().and_time(value.time());

        doc.write_item(&self.date_item, Value::DateTime(date))?;
        doc.write_item(&self.time_item, Value::DateTime(time))
    }
}

impl<T> core::fmt::Debug for DateTimeMapper<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("DateTimeMapper")
            .field("date_item", &self.date_item)
            .field("time_item", &self.time_item)
            .finish()
    }
}
