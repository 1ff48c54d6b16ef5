use crate::types::season::Season;
use chrono::NaiveDate;

#[derive(Debug, PartialEq, Clone)]
pub struct DailyRecord {
    pub date: NaiveDate,  // dteday
    pub season: Season,   // season
    pub holiday: bool,    // holiday (0/1)
    pub temperature: f64, // temp (normalized)
    pub count: i64,       // cnt (total rentals)
}

#[derive(Debug, PartialEq, Clone)]
pub struct HourlyRecord {
    pub date: NaiveDate, // dteday
    pub hour: u32,       // hr
    pub count: i64,      // cnt
}
