use pace_calculator::config::DEFAULT_LOG_LEVEL;
use pace_calculator::gauge::map_pace_to_gauge_percent;
use pace_calculator::parse::{parse_distance, parse_duration};
use pace_calculator::{
    calculate, logger, CalcError, CalculatorConfig, Field, Inputs, ShareState, Solved, UnitPolicy,
};

fn solve(distance: &str, time: &str, pace: &str) -> Result<String, CalcError> {
    let _ = logger::init(DEFAULT_LOG_LEVEL);
    calculate(&Inputs::new(distance, time, pace), &CalculatorConfig::default())
        .map(|calc| calc.summary())
}

#[test]
fn test_ten_k_in_fifty_minutes() {
    assert_eq!(solve("10km", "50:00", "").unwrap(), "Pace: 5:00 min/km");
}

#[test]
fn test_marathon_time_at_six_minute_pace() {
    assert_eq!(solve("42.195", "", "6:00").unwrap(), "Time: 4h 13m 10s");
}

#[test]
fn test_distance_covered_in_an_hour() {
    assert_eq!(solve("", "1h", "4m").unwrap(), "Distance: 15.00 km");
    assert_eq!(solve("", "45:00", "5:24").unwrap(), "Distance: 8.33 km");
}

#[test]
fn test_meters_and_seconds_mix() {
    assert_eq!(solve("400m", "90", "").unwrap(), "Pace: 3:45 min/km");
}

#[test]
fn test_one_or_three_values_never_compute() {
    let cases = [
        ("10", "", ""),
        ("", "50:00", ""),
        ("", "", "5:00"),
        ("10", "50:00", "5:00"),
    ];
    for (d, t, p) in cases {
        assert!(matches!(
            solve(d, t, p),
            Err(CalcError::NeedExactlyTwo { .. })
        ));
    }
}

#[test]
fn test_race_distances_in_other_spellings() {
    assert_eq!(solve("1500 meter", "6:00", "").unwrap(), "Pace: 4:00 min/km");
    assert_eq!(solve(".5", "", "5:00").unwrap(), "Time: 2m 30s");
}

#[test]
fn test_oversized_inputs_never_print_a_result() {
    let huge_hours = format!("{}h", "9".repeat(306));
    assert!(matches!(
        solve("10", &huge_hours, ""),
        Err(CalcError::InvalidFields(fields)) if fields[0].0 == Field::Time
    ));
    assert_eq!(
        solve(&"9".repeat(300), "", "5:00"),
        Err(CalcError::OutOfRange(Field::Time))
    );
}

#[test]
fn test_shared_link_round_trip() {
    let inputs = Inputs::new("10km", "50:00", "");
    let calc = calculate(&inputs, &CalculatorConfig::default()).unwrap();
    let pairs: Vec<(String, String)> = calc
        .share
        .pairs()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let reloaded = ShareState::from_lookup(|key| {
        pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    });
    assert!(reloaded.should_autorun());
    let again = calculate(&reloaded.to_inputs(), &CalculatorConfig::default()).unwrap();
    assert_eq!(again.solved, Solved::Pace(300.0));
}

#[test]
fn test_documented_parser_examples() {
    let lenient = UnitPolicy::Lenient;
    assert_eq!(parse_distance("10 kilometers", lenient), Ok(10.0));
    assert!(parse_distance("abc", lenient).is_err());
    assert_eq!(parse_duration("1h30m45s", lenient), Ok(5445.0));
    assert!(parse_duration("1:2:3:4", lenient).is_err());
}

#[test]
fn test_gauge_reference_points() {
    assert_eq!(map_pace_to_gauge_percent(100.0), 0.0);
    assert_eq!(map_pace_to_gauge_percent(375.0), 50.0);
    assert_eq!(map_pace_to_gauge_percent(700.0), 100.0);
}
