use std::sync::Arc;

use chrono::NaiveDate;
use proptest::prelude::*;
use sentinela_core::config::RouteConfig;
use sentinela_core::models::{TripRecord, VehicleFlags, VehicleHistory};
use sentinela_core::traits::IRouteScorer;
use sentinela_lexicon::{builtin, LexiconSet};
use sentinela_route::RouteScorer;

fn scorer() -> RouteScorer {
    RouteScorer::new(Arc::new(LexiconSet::builtin().unwrap()), RouteConfig::default())
}

fn phrase() -> impl Strategy<Value = &'static str> {
    let mut pool: Vec<&'static str> = Vec::new();
    for list in [
        builtin::ROUND_TRIP_PHRASES,
        builtin::ILLICIT_TRAVEL_PHRASES,
        builtin::HIGH_RISK_AREA_PHRASES,
        builtin::CORROBORATING_FREQUENCY,
    ] {
        pool.extend_from_slice(builtin::terms(list).unwrap_or_default());
    }
    pool.extend(["rodovia", "posto", "carga", "família", "trabalho"]);
    // Keep corroborating behavior phrases out so the prior-crime flag stays uncorroborated.
    let behavior = builtin::terms(builtin::CORROBORATING_BEHAVIOR).unwrap_or_default();
    pool.retain(|p| !p.split(' ').any(|w| behavior.contains(&w)));
    prop::sample::select(pool)
}

fn location() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec![
        "Corumbá",
        "Fronteira Paraguai",
        "Campo Grande",
        "Dourados",
        "",
    ]))
    .prop_map(|l| l.map(str::to_string))
}

fn trip() -> impl Strategy<Value = TripRecord> {
    (
        location(),
        prop::option::of(0u32..24),
        prop::collection::vec(phrase(), 0..8),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(location, hour, words, prior_stop, recent_transfer)| TripRecord {
            vehicle_id: "AAA0A00".to_string(),
            location,
            timestamp: hour.and_then(|h| {
                NaiveDate::from_ymd_opt(2024, 1, 1).and_then(|d| d.and_hms_opt(h, 0, 0))
            }),
            narrative: words.join(" "),
            vehicle_flags: VehicleFlags {
                prior_crime: false,
                prior_stop,
                recent_transfer,
            },
        })
}

fn history() -> impl Strategy<Value = VehicleHistory> {
    prop::collection::vec(location(), 0..10).prop_map(|locations| {
        VehicleHistory::new(
            "AAA0A00",
            locations
                .into_iter()
                .map(|l| TripRecord {
                    vehicle_id: "AAA0A00".to_string(),
                    location: l,
                    ..Default::default()
                })
                .collect(),
        )
    })
}

proptest! {
    #[test]
    fn score_is_always_in_unit_interval(trip in trip(), history in history()) {
        let result = scorer().score(&trip, &history).unwrap();
        prop_assert!((0.0..=1.0).contains(&result.score()));
    }

    #[test]
    fn prior_crime_flag_alone_never_amplifies(trip in trip(), history in history()) {
        let s = scorer();
        let mut flagged = trip.clone();
        flagged.vehicle_flags.prior_crime = true;
        prop_assert_eq!(
            s.score(&trip, &history).unwrap().score(),
            s.score(&flagged, &history).unwrap().score()
        );
    }

    #[test]
    fn each_rule_stays_within_its_cap(trip in trip(), history in history()) {
        let config = RouteConfig::default();
        let result = scorer().score(&trip, &history).unwrap();
        let caps = [
            ("location", config.location_weight),
            ("time", config.time_weight),
            ("round_trip", config.round_trip_weight),
            ("illicit_travel", config.illicit_travel_weight),
            ("high_risk_area", config.high_risk_area_weight),
            ("history", config.history_count_weight + config.history_repetition_weight),
            (
                "vehicle_flags",
                config.prior_crime_weight + config.prior_stop_weight + config.recent_transfer_weight,
            ),
        ];
        for (rule, cap) in caps {
            prop_assert!(result.contribution(rule) <= cap + 1e-12, "{rule}");
        }
    }
}
