//! Static copy shown on the dashboard page.

pub const PAGE_TITLE: &str = "Bike Rentals Dashboard";

pub const DEFAULT_SIDEBAR_IMAGE: &str = "https://png.pngtree.com/png-clipart/20230807/original/pngtree-vector-illustration-of-a-bicycle-rental-logo-on-a-white-backdrop-vector-picture-image_10130391.png";

pub const SIDEBAR_TEXT: &str = "This dashboard summarises bike rental trends for 2011-2012: \
how rentals change with the seasons, how holidays compare with working days, \
how temperature affects demand, and the month-by-month rental pattern.";

pub const EXPLANATION_SUMMARY: &str = "Read the chart explanation";

pub const SEASON_HEADER: &str = "Bike Rentals by Season";
pub const SEASON_EXPLANATION: &str = "Summer and fall show noticeably more rentals than spring \
and winter. Milder weather makes outdoor riding more attractive in those months, while \
winter rentals are sustained mostly by people who still need an alternative way to get around.";

pub const MONTHLY_HEADER: &str = "Monthly Bike Rental Pattern";
pub const MONTHLY_EXPLANATION: &str = "Across 2011-2012 rentals tend to climb from April and \
drop again from October. Knowing which months surge helps keep enough bikes available during \
peak periods and improves service when demand is highest.";

pub const HOLIDAY_HEADER: &str = "Rental Distribution on Holidays and Working Days";
pub const HOLIDAY_CHART_TITLE: &str = "Effect of Holidays on Bike Rentals";
pub const HOLIDAY_AXIS: &str = "Day type";
pub const HOLIDAY_EXPLANATION: &str = "The box for holidays sits higher than the box for \
working days, showing that on average more bikes are rented on holidays than on working days. \
The holiday box is also more spread out, so rental counts vary more from one holiday to the \
next than they do across ordinary working days.";

pub const TEMPERATURE_HEADER: &str = "Rental Distribution by Temperature";
pub const TEMPERATURE_CHART_TITLE: &str = "Bike Rentals by Temperature Category";
pub const TEMPERATURE_AXIS: &str = "Temperature category";
pub const TEMPERATURE_EXPLANATION: &str = "Days are split into low, medium and high temperature \
using the 25th and 75th percentiles of the daily temperatures. Rentals rise with temperature: \
warm days have the highest typical counts, while cold days stay well below the others.";

pub const COUNT_AXIS: &str = "Number of Bike Rentals";
