//! Property tests for bed-flow invariants
//!
//! For arbitrary bed counts, horizons and seeds:
//! - Pools never exceed their size; ward occupancy equals promotions minus
//!   discharges
//! - After admission no ICU bed is free, so end-of-day ICU vacancies equal
//!   that day's promotions
//! - Surgeries + blocked equals the ICU occupants on their final day when
//!   processing starts
//! - Identical seeds give identical output

use bed_flow_core_rs::{
    run_scenario_seeded, BedFlowEngine, Event, FixedStaySampler, RngManager, ScenarioConfig,
    StayRanges, UniformStaySampler,
};
use proptest::prelude::*;

fn uniform_engine(
    ward_beds: usize,
    icu_beds: usize,
    horizon: usize,
    seed: u64,
) -> BedFlowEngine<UniformStaySampler> {
    let config = ScenarioConfig::new(ward_beds, icu_beds).with_horizon(horizon);
    let sampler = UniformStaySampler::new(RngManager::new(seed), StayRanges::default());
    BedFlowEngine::new(config, sampler).unwrap()
}

proptest! {
    #[test]
    fn prop_capacity_and_ward_accounting(
        ward_beds in 1usize..12,
        icu_beds in 1usize..12,
        horizon in 1usize..60,
        seed in any::<u64>(),
    ) {
        let mut engine = uniform_engine(ward_beds, icu_beds, horizon, seed);
        let mut promotions = 0usize;
        let mut discharges = 0usize;

        while !engine.is_finished() {
            let result = engine.step_day().unwrap();
            promotions += result.surgeries_performed as usize;
            discharges += result.ward_discharges as usize;

            prop_assert_eq!(engine.icu().len(), icu_beds);
            prop_assert_eq!(engine.ward().len(), ward_beds);
            prop_assert!(engine.ward().occupied() <= ward_beds);
            prop_assert_eq!(engine.ward().occupied(), promotions - discharges);
            prop_assert!(engine.icu().slots().iter().all(|&s| s <= 7));
        }
    }

    #[test]
    fn prop_admission_completeness(
        ward_beds in 1usize..10,
        icu_beds in 1usize..10,
        horizon in 1usize..50,
        seed in any::<u64>(),
    ) {
        let mut engine = uniform_engine(ward_beds, icu_beds, horizon, seed);
        let mut free_before = engine.icu().free();

        while !engine.is_finished() {
            let result = engine.step_day().unwrap();

            // Every free bed refilled, and only promotions free a bed again
            prop_assert_eq!(result.icu_admissions as usize, free_before);
            prop_assert_eq!(engine.icu().free(), result.surgeries_performed as usize);
            free_before = engine.icu().free();
        }
    }

    #[test]
    fn prop_conservation_of_ready_patients(
        ward_beds in 1usize..10,
        icu_beds in 1usize..10,
        horizon in 1usize..50,
        seed in any::<u64>(),
    ) {
        let mut engine = uniform_engine(ward_beds, icu_beds, horizon, seed);

        while !engine.is_finished() {
            let day = engine.current_day();
            let final_day_before = engine.icu().count_final_day() as u32;
            let result = engine.step_day().unwrap();

            let one_day_admissions = engine
                .event_log()
                .events_on_day(day)
                .iter()
                .filter(|e| matches!(e, Event::IcuAdmission { stay: 1, .. }))
                .count() as u32;

            prop_assert_eq!(
                result.surgeries_performed + result.patients_blocked,
                final_day_before + one_day_admissions
            );
        }
    }

    #[test]
    fn prop_fixed_stay_conservation(
        ward_beds in 1usize..8,
        icu_beds in 1usize..8,
        stay in 1u32..8,
        horizon in 1usize..40,
    ) {
        let config = ScenarioConfig::new(ward_beds, icu_beds).with_horizon(horizon);
        let mut engine = BedFlowEngine::new(config, FixedStaySampler::new(stay)).unwrap();

        while !engine.is_finished() {
            let ones = engine.icu().count_final_day() as u32;
            let free = engine.icu().free() as u32;
            let ready = ones + if stay == 1 { free } else { 0 };

            let result = engine.step_day().unwrap();
            prop_assert_eq!(result.ready_for_promotion, ready);
            prop_assert_eq!(result.surgeries_performed + result.patients_blocked, ready);
        }
    }

    #[test]
    fn prop_seeded_runs_are_identical(
        ward_beds in 1usize..12,
        icu_beds in 1usize..12,
        seed in any::<u64>(),
    ) {
        let config = ScenarioConfig::new(ward_beds, icu_beds).with_horizon(30);
        let a = run_scenario_seeded(&config, seed).unwrap();
        let b = run_scenario_seeded(&config, seed).unwrap();
        prop_assert_eq!(a.surgeries_performed(), b.surgeries_performed());
        prop_assert_eq!(a.patients_blocked(), b.patients_blocked());
    }
}
