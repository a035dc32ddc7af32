use super::record::Record;

/// The record currently expanded for detail display.
///
/// One slot per view. Selecting a record replaces whatever was held before;
/// there is no clear operation, the slot lives as long as its view.
#[derive(Debug, Clone)]
pub struct Selection<R> {
    current: Option<R>,
}

impl<R: Record> Selection<R> {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Holds `record`, returning the previously selected one.
    pub fn select(&mut self, record: R) -> Option<R> {
        self.current.replace(record)
    }

    /// Selects the record with the given identifier, if present.
    pub fn select_by_id(&mut self, records: &[R], id: &str) -> Option<&R> {
        let id = id.trim();
        let record = records.iter().find(|record| record.id().eq_ignore_ascii_case(id))?.clone();
        self.current = Some(record);
        self.current.as_ref()
    }

    pub fn current(&self) -> Option<&R> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

impl<R: Record> Default for Selection<R> {
    fn default() -> Self {
        Self::new()
    }
}
