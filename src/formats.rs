/// One stolen-bike listing as rendered on a results page.
///
/// All fields are opaque display strings. An empty string means the page
/// did not report that field, not that extraction failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bike {
    pub title: String,
    pub serial: String,
    pub colors: String,
    pub date_stolen: String,
    pub location: String,
}

pub const CSV_HEADER: [&str; 5] = ["Title", "Serial", "Colors", "Date", "Location"];

impl Bike {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.serial.clone(),
            self.colors.clone(),
            self.date_stolen.clone(),
            self.location.clone(),
        ]
    }
}
