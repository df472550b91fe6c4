//! Month Table Rendering
//!
//! Text rendering of a [`MonthGrid`] for admin tooling and test output.
//! Occupied cells show the day number and a status marker: `#` booked,
//! `x` excluded, `+` available, `.` past, nothing for unmarked days.

use tabled::{builder::Builder, settings::Style};

use crate::{
    availability::DateStatus,
    calendar::grid::{MonthCell, MonthGrid},
};

const WEEKDAY_HEADER: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Renders month grids as terminal tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthRenderer;

impl MonthRenderer {
    /// Render the grid as a titled weekday table.
    #[must_use]
    pub fn render(grid: &MonthGrid) -> String {
        let mut builder = Builder::default();

        builder.push_record(WEEKDAY_HEADER);

        for week in grid.weeks() {
            let row: Vec<String> = week.iter().map(|slot| Self::slot_text(*slot)).collect();

            builder.push_record(row);
        }

        let mut table = builder.build();

        table.with(Style::modern());

        format!(
            "{} {:04}\n{table}",
            month_name(grid.cursor().month()),
            grid.cursor().year()
        )
    }

    fn slot_text(slot: Option<MonthCell>) -> String {
        let Some(cell) = slot else {
            return String::new();
        };

        match marker(cell.status) {
            Some(mark) => format!("{:>2}{mark}", cell.date.day()),
            None => format!("{:>2}", cell.date.day()),
        }
    }
}

fn marker(status: DateStatus) -> Option<char> {
    match status {
        DateStatus::Booked => Some('#'),
        DateStatus::Excluded => Some('x'),
        DateStatus::Available => Some('+'),
        DateStatus::Past => Some('.'),
        DateStatus::Unmarked => None,
    }
}

fn month_name(month: i8) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
