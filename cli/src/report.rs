//! Text renderings of a sweep report
//!
//! The table view stands in for a chart grid: one block per scenario,
//! titled by its bed counts, with the cumulative "Surgery" and "Wasted"
//! curves sampled once a week.

use bed_flow_core_rs::sweep::{ScenarioReport, SweepReport};
use std::fmt::{self, Write};

/// Days between samples of the cumulative curves
const SAMPLE_EVERY_DAYS: usize = 7;

/// Summary table plus weekly cumulative curves
pub fn render_table(report: &SweepReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_table(&mut out, report)?;
    Ok(out)
}

fn write_table(out: &mut impl Write, report: &SweepReport) -> fmt::Result {
    writeln!(
        out,
        "Sweep: {} scenarios, {} days, seed {}",
        report.scenarios.len(),
        report.horizon_days,
        report.rng_seed
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "{:>5} {:>5} {:>10} {:>10} {:>9}",
        "ICU", "Ward", "Surgery", "Wasted", "Blocked%"
    )?;
    for scenario in &report.scenarios {
        writeln!(
            out,
            "{:>5} {:>5} {:>10} {:>10} {:>8.1}%",
            scenario.icu_beds,
            scenario.ward_beds,
            scenario.total_surgeries,
            scenario.total_blocked,
            scenario.blocked_ratio * 100.0
        )?;
    }
    if let Some(best) = report.best_throughput() {
        writeln!(out)?;
        writeln!(out, "Most surgeries: {}", best.title())?;
    }

    for scenario in &report.scenarios {
        writeln!(out)?;
        write_curves(out, scenario)?;
    }
    Ok(())
}

fn write_curves(out: &mut impl Write, scenario: &ScenarioReport) -> fmt::Result {
    writeln!(out, "{}", scenario.title())?;
    writeln!(out, "{:>6} {:>10} {:>10}", "Day", "Surgery", "Wasted")?;
    for day in sample_days(scenario.horizon_days) {
        writeln!(
            out,
            "{:>6} {:>10} {:>10}",
            day + 1,
            scenario.cumulative_surgeries[day],
            scenario.cumulative_blocked[day]
        )?;
    }
    Ok(())
}

/// Weekly sample points, always including the final day
fn sample_days(horizon_days: usize) -> Vec<usize> {
    if horizon_days == 0 {
        return Vec::new();
    }
    let last = horizon_days - 1;
    let mut days: Vec<usize> = (SAMPLE_EVERY_DAYS - 1..horizon_days)
        .step_by(SAMPLE_EVERY_DAYS)
        .collect();
    if days.last() != Some(&last) {
        days.push(last);
    }
    days
}

/// One CSV row per scenario and day
pub fn render_csv(report: &SweepReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "day,ward_beds,icu_beds,surgeries,blocked,cum_surgeries,cum_blocked"
    )?;
    for scenario in &report.scenarios {
        for day in 0..scenario.horizon_days {
            writeln!(
                out,
                "{},{},{},{},{},{},{}",
                day,
                scenario.ward_beds,
                scenario.icu_beds,
                scenario.surgeries_performed[day],
                scenario.patients_blocked[day],
                scenario.cumulative_surgeries[day],
                scenario.cumulative_blocked[day]
            )?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bed_flow_core_rs::sweep::{run_sweep, BedConfig, SweepConfig};
    use bed_flow_core_rs::{StayRange, StayRanges};

    fn one_day_stays(horizon_days: usize) -> SweepReport {
        let config = SweepConfig {
            scenarios: vec![BedConfig::new(1, 2)],
            horizon_days,
            stay_ranges: StayRanges::uniform(StayRange::new(1, 1)),
            ..SweepConfig::default()
        }
        .with_seed(1);
        run_sweep(&config).unwrap()
    }

    #[test]
    fn test_sample_days_weekly_with_last_day() {
        assert_eq!(sample_days(15), vec![6, 13, 14]);
        assert_eq!(sample_days(14), vec![6, 13]);
        assert_eq!(sample_days(3), vec![2]);
        assert!(sample_days(0).is_empty());
    }

    #[test]
    fn test_csv_has_row_per_day() {
        let csv = render_csv(&one_day_stays(4)).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "0,1,2,1,1,1,1");
        assert_eq!(lines[4], "3,1,2,1,1,4,4");
    }

    #[test]
    fn test_table_lists_titles_and_totals() {
        let table = render_table(&one_day_stays(7)).unwrap();

        assert!(table.contains("ICU Beds = 2 | Ward Beds = 1"));
        assert!(table.contains("Most surgeries: ICU Beds = 2 | Ward Beds = 1"));
        assert!(table.contains("50.0%"));
    }
}
