use chrono::{DateTime, Datelike, Duration, Utc};

/// due dates for a run of monthly payments, one month apart starting one
/// month after `start_date`
pub fn payment_dates(start_date: DateTime<Utc>, periods: u32) -> Vec<DateTime<Utc>> {
    let mut dates = Vec::with_capacity(periods as usize);
    let mut current = start_date;
    for _ in 0..periods {
        current = add_months(current, 1);
        dates.push(current);
    }
    dates
}

/// add months to date
pub fn add_months(date: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    let mut result = date;
    for _ in 0..months {
        let days = days_in_month(result.year(), result.month());
        result = result + Duration::days(days as i64);
    }
    result
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

/// check if year is a leap year
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_add_months_steps_month_boundaries() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let one = add_months(start, 1);
        assert_eq!((one.year(), one.month(), one.day()), (2024, 2, 1));

        let two = add_months(start, 2);
        assert_eq!((two.year(), two.month(), two.day()), (2024, 3, 1)); // leap february

        let twelve = add_months(start, 12);
        assert_eq!((twelve.year(), twelve.month(), twelve.day()), (2025, 1, 1));
    }

    #[test]
    fn test_payment_dates_count_and_order() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let dates = payment_dates(start, 12);

        assert_eq!(dates.len(), 12);
        assert_eq!(dates[0], add_months(start, 1));
        for pair in dates.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(dates[11].year(), 2025);
    }

    #[test]
    fn test_leap_year() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }
}
