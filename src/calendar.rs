// SPDX-License-Identifier: MPL-2.0
//! Month-grid availability calendar.
//!
//! [`MonthView`] owns the displayed `(year, month)` pair and the booked-date
//! set for one listing. The grid layout is a pure function of that state:
//! a 7-column week-start-Sunday month with one leading blank cell per
//! day-of-week offset of the 1st, then one cell per day marked booked or
//! available. Month navigation normalizes over `year * 12 + month` so any
//! delta magnitude rolls the year correctly.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// Weekday header abbreviations, week starting Sunday.
///
/// These deliberately stay English in every locale while the month label is
/// localized, matching the site this app accompanies.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Availability of one day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    Available,
    Booked,
}

/// One day cell of the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Day number within the month, starting at 1.
    pub day: u32,
    pub state: DayState,
}

/// Pure snapshot of one month's grid layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    /// Zero-based month, `0 = January`.
    pub month0: u32,
    /// Number of leading blank cells before day 1, in `[0, 6]`.
    pub first_day_offset: u32,
    pub days: Vec<DayCell>,
}

/// View state of one calendar instance: the displayed year/month plus the
/// booked-date set it renders against.
#[derive(Debug, Clone)]
pub struct MonthView {
    year: i32,
    month0: u32,
    booked: BTreeSet<NaiveDate>,
}

impl MonthView {
    /// Creates a view showing the current real-world month.
    ///
    /// Duplicate booked dates collapse; entries that are not valid ISO dates
    /// are skipped with a warning rather than failing construction.
    pub fn new(booked_dates: &[&str]) -> Self {
        let today = chrono::Local::now().date_naive();
        Self::starting_at(today.year(), today.month0(), booked_dates)
    }

    /// Creates a view showing a specific month. Months outside `[0, 11]`
    /// are normalized with year rollover.
    pub fn starting_at(year: i32, month0: u32, booked_dates: &[&str]) -> Self {
        let booked = booked_dates
            .iter()
            .filter_map(|raw| match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(err) => {
                    log::warn!("skipping malformed booked date {raw:?}: {err}");
                    None
                }
            })
            .collect();

        let mut view = Self {
            year,
            month0: 0,
            booked,
        };
        view.change_month(month0 as i32);
        view
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// Moves the displayed month by `delta` months, any magnitude. The
    /// target is computed over `year * 12 + month` with floor division, so
    /// overflow and underflow both roll the year.
    pub fn change_month(&mut self, delta: i32) {
        let total = i64::from(self.year) * 12 + i64::from(self.month0) + i64::from(delta);
        self.year = total.div_euclid(12) as i32;
        self.month0 = total.rem_euclid(12) as u32;
    }

    /// Whether a specific day of the displayed month is booked.
    pub fn is_booked(&self, day: u32) -> bool {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, day)
            .is_some_and(|date| self.booked.contains(&date))
    }

    /// Builds the grid snapshot for the displayed month.
    ///
    /// Pure: repeated calls with unchanged state produce identical grids.
    /// For years outside chrono's representable range the grid is empty
    /// rather than a panic.
    pub fn month_grid(&self) -> MonthGrid {
        let Some(first) = NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1) else {
            return MonthGrid {
                year: self.year,
                month0: self.month0,
                first_day_offset: 0,
                days: Vec::new(),
            };
        };

        let first_day_offset = first.weekday().num_days_from_sunday();
        let days = (1..=days_in_month(self.year, self.month0))
            .map(|day| DayCell {
                day,
                state: if self.is_booked(day) {
                    DayState::Booked
                } else {
                    DayState::Available
                },
            })
            .collect();

        MonthGrid {
            year: self.year,
            month0: self.month0,
            first_day_offset,
            days,
        }
    }
}

impl MonthGrid {
    /// Total number of non-header cells: leading blanks plus day cells.
    pub fn cell_count(&self) -> usize {
        self.first_day_offset as usize + self.days.len()
    }
}

/// Number of days in the given zero-based month.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1);
    let next_first = if month0 == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month0 + 2, 1)
    };
    match (first, next_first) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn november_2025() -> MonthView {
        MonthView::starting_at(
            2025,
            10,
            &["2025-11-12", "2025-11-13", "2025-11-20", "2025-12-05"],
        )
    }

    #[test]
    fn twelve_single_steps_return_to_start() {
        for (year, month0) in [(2025, 0), (2025, 10), (2000, 11), (1999, 5)] {
            let mut view = MonthView::starting_at(year, month0, &[]);
            for _ in 0..12 {
                view.change_month(1);
            }
            assert_eq!((view.year(), view.month0()), (year + 1, month0));
            for _ in 0..12 {
                view.change_month(-1);
            }
            assert_eq!((view.year(), view.month0()), (year, month0));
        }
    }

    #[test]
    fn large_deltas_normalize_with_year_rollover() {
        let mut view = MonthView::starting_at(2025, 10, &[]);
        view.change_month(14);
        assert_eq!((view.year(), view.month0()), (2027, 0));
        view.change_month(-25);
        assert_eq!((view.year(), view.month0()), (2024, 11));
    }

    #[test]
    fn single_step_overflow_and_underflow_roll_the_year() {
        let mut view = MonthView::starting_at(2025, 11, &[]);
        view.change_month(1);
        assert_eq!((view.year(), view.month0()), (2026, 0));

        let mut view = MonthView::starting_at(2025, 0, &[]);
        view.change_month(-1);
        assert_eq!((view.year(), view.month0()), (2024, 11));
    }

    #[test]
    fn grid_contains_each_day_exactly_once() {
        let grid = november_2025().month_grid();
        assert_eq!(grid.days.len(), 30);
        for day in 1..=30 {
            assert_eq!(grid.days.iter().filter(|cell| cell.day == day).count(), 1);
        }
    }

    #[test]
    fn cell_count_is_offset_plus_days_and_offset_in_range() {
        for month0 in 0..12 {
            let grid = MonthView::starting_at(2025, month0, &[]).month_grid();
            assert!(grid.first_day_offset <= 6);
            assert_eq!(
                grid.cell_count(),
                grid.first_day_offset as usize + days_in_month(2025, month0) as usize
            );
        }
    }

    #[test]
    fn november_2025_starts_on_saturday() {
        // 2025-11-01 is a Saturday, so six leading blanks with a Sunday start.
        let grid = november_2025().month_grid();
        assert_eq!(grid.first_day_offset, 6);
    }

    #[test]
    fn booked_dates_mark_their_cells() {
        let grid = november_2025().month_grid();
        let state_of = |day: u32| {
            grid.days
                .iter()
                .find(|cell| cell.day == day)
                .map(|cell| cell.state)
        };
        assert_eq!(state_of(12), Some(DayState::Booked));
        assert_eq!(state_of(13), Some(DayState::Booked));
        assert_eq!(state_of(20), Some(DayState::Booked));
        assert_eq!(state_of(11), Some(DayState::Available));
    }

    #[test]
    fn booked_dates_in_other_months_do_not_leak() {
        let mut view = november_2025();
        view.change_month(1);
        let grid = view.month_grid();
        // 2025-12-05 is booked, November's day 5 is not.
        assert_eq!(
            grid.days.iter().find(|cell| cell.day == 5).map(|c| c.state),
            Some(DayState::Booked)
        );
        view.change_month(-1);
        let grid = view.month_grid();
        assert_eq!(
            grid.days.iter().find(|cell| cell.day == 5).map(|c| c.state),
            Some(DayState::Available)
        );
    }

    #[test]
    fn render_is_idempotent() {
        let view = november_2025();
        assert_eq!(view.month_grid(), view.month_grid());
    }

    #[test]
    fn duplicate_and_malformed_dates_are_tolerated() {
        let view = MonthView::starting_at(
            2025,
            10,
            &["2025-11-12", "2025-11-12", "not-a-date", "2025-13-40"],
        );
        assert!(view.is_booked(12));
        assert_eq!(
            view.month_grid()
                .days
                .iter()
                .filter(|cell| cell.state == DayState::Booked)
                .count(),
            1
        );
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2025, 1), 28);
        assert_eq!(days_in_month(2025, 10), 30);
        assert_eq!(days_in_month(2025, 11), 31);
    }

    #[test]
    fn starting_at_normalizes_out_of_range_month() {
        let view = MonthView::starting_at(2025, 12, &[]);
        assert_eq!((view.year(), view.month0()), (2026, 0));
    }
}
