pub mod add;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;

use crate::cli::parser::{PeriodArgs, PeriodKind};
use crate::config::Config;
use crate::core::period::{Period, week_start_for};
use crate::errors::{AppError, AppResult};
use crate::utils::date::{parse_date_arg, today};
use chrono::Datelike;

/// Turn the period flags into a [`Period`].
///
/// An explicit `--period` wins but must agree with the other flags; without
/// it the kind is inferred from them. Missing year, month or day fall back
/// to today and the week starts on the configured weekday.
pub(crate) fn resolve_period(args: &PeriodArgs, cfg: &Config) -> AppResult<Period> {
    let month_flags = args.year.is_some() || args.month.is_some();
    let kind = match args.period {
        Some(kind) => kind,
        None if args.week_of.is_some() => PeriodKind::Week,
        None if month_flags => PeriodKind::Month,
        None => PeriodKind::All,
    };

    if args.week_of.is_some() && kind != PeriodKind::Week {
        return Err(AppError::InvalidPeriod(
            "--week-of only applies to a week period".into(),
        ));
    }
    if month_flags && kind != PeriodKind::Month {
        return Err(AppError::InvalidPeriod(
            "--year and --month only apply to a month period".into(),
        ));
    }

    let now = today();
    match kind {
        PeriodKind::All => Ok(Period::All),
        PeriodKind::Week => {
            let day = match &args.week_of {
                Some(s) => parse_date_arg(s)?,
                None => now,
            };
            Ok(Period::Week(week_start_for(day, cfg.week_start)))
        }
        PeriodKind::Month => Period::month(
            args.year.unwrap_or(now.year()),
            args.month.unwrap_or(now.month()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::period::WeekStart;
    use chrono::NaiveDate;

    fn args(period: Option<PeriodKind>) -> PeriodArgs {
        PeriodArgs {
            period,
            year: None,
            month: None,
            week_of: None,
        }
    }

    #[test]
    fn week_of_uses_configured_start() {
        let mut a = args(Some(PeriodKind::Week));
        a.week_of = Some("2025-03-12".into());

        let mut cfg = Config::default();
        assert_eq!(
            resolve_period(&a, &cfg).unwrap(),
            Period::Week(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap())
        );

        cfg.week_start = WeekStart::Monday;
        assert_eq!(
            resolve_period(&a, &cfg).unwrap(),
            Period::Week(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
        );
    }

    #[test]
    fn month_is_one_based() {
        let mut a = args(Some(PeriodKind::Month));
        a.year = Some(2025);
        a.month = Some(9);
        assert_eq!(
            resolve_period(&a, &Config::default()).unwrap(),
            Period::Month {
                year: 2025,
                month_index: 8
            }
        );

        a.month = Some(13);
        assert!(resolve_period(&a, &Config::default()).is_err());
    }

    #[test]
    fn kind_follows_flags_without_period() {
        let cfg = Config::default();
        assert_eq!(resolve_period(&args(None), &cfg).unwrap(), Period::All);

        let mut week = args(None);
        week.week_of = Some("2025-03-12".into());
        assert_eq!(
            resolve_period(&week, &cfg).unwrap(),
            Period::Week(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap())
        );

        let mut month = args(None);
        month.year = Some(2025);
        month.month = Some(9);
        assert_eq!(
            resolve_period(&month, &cfg).unwrap(),
            Period::Month {
                year: 2025,
                month_index: 8
            }
        );
    }

    #[test]
    fn flags_contradicting_period_are_rejected() {
        let cfg = Config::default();

        let mut a = args(Some(PeriodKind::All));
        a.week_of = Some("2025-03-12".into());
        assert!(matches!(
            resolve_period(&a, &cfg),
            Err(AppError::InvalidPeriod(_))
        ));

        let mut b = args(Some(PeriodKind::Week));
        b.month = Some(3);
        assert!(matches!(
            resolve_period(&b, &cfg),
            Err(AppError::InvalidPeriod(_))
        ));
    }
}
