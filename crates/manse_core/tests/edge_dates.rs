//! Boundary and reform-gap behavior through the converter façade.

use manse_core::LunarSolarConverter;

#[test]
fn solar_span_boundaries() {
    let mut conv = LunarSolarConverter::new();
    assert!(conv.set_solar_date(1000, 2, 13));
    assert!(!conv.set_solar_date(1000, 2, 12));
    assert!(conv.set_solar_date(2050, 12, 31));
    assert!(!conv.set_solar_date(2051, 1, 1));
}

#[test]
fn lunar_span_boundaries() {
    let mut conv = LunarSolarConverter::new();
    assert!(conv.set_lunar_date(1000, 1, 1, false));
    assert_eq!(conv.solar_iso_format(), "1000-02-13");
    assert!(conv.set_lunar_date(2050, 11, 18, false));
    assert_eq!(conv.solar_iso_format(), "2050-12-31");
    assert!(!conv.set_lunar_date(2050, 11, 19, false));
    assert!(!conv.set_lunar_date(999, 12, 1, false));
}

#[test]
fn reform_gap_days_rejected() {
    let mut conv = LunarSolarConverter::new();
    for day in 5..=14 {
        assert!(!conv.set_solar_date(1582, 10, day), "1582-10-{day:02}");
    }
    assert!(conv.set_solar_date(1582, 10, 4));
    assert_eq!(conv.lunar_iso_format(), "1582-09-08");
    assert!(conv.set_solar_date(1582, 10, 15));
    assert_eq!(conv.lunar_iso_format(), "1582-09-19");
}

#[test]
fn reform_gap_is_eleven_lunar_days_wide() {
    let mut before = LunarSolarConverter::new();
    let mut after = LunarSolarConverter::new();
    assert!(before.set_solar_date(1582, 10, 4));
    assert!(after.set_solar_date(1582, 10, 15));
    let diff = after.lunar_date().unwrap().absolute_days() - before.lunar_date().unwrap().absolute_days();
    assert_eq!(diff, 11);
}

#[test]
fn intercalary_request_for_wrong_month_is_normalized() {
    // 2020's leap month is 4; a leap request for month 7 succeeds but is
    // stored as the ordinary occurrence.
    let mut conv = LunarSolarConverter::new();
    assert!(conv.set_lunar_date(2020, 7, 10, true));
    assert!(!conv.intercalation());

    let mut plain = LunarSolarConverter::new();
    assert!(plain.set_lunar_date(2020, 7, 10, false));
    assert_eq!(conv.solar_iso_format(), plain.solar_iso_format());
}

#[test]
fn intercalary_occurrences_stay_distinct() {
    let mut common = LunarSolarConverter::new();
    let mut leap = LunarSolarConverter::new();
    for day in [1, 15, 29] {
        assert!(common.set_lunar_date(2020, 4, day, false));
        assert!(!common.intercalation());
        assert!(leap.set_lunar_date(2020, 4, day, true));
        assert!(leap.intercalation());
        // The two occurrences sit exactly one ordinary month apart.
        let gap = leap.lunar_date().unwrap().absolute_days()
            - common.lunar_date().unwrap().absolute_days();
        assert_eq!(gap, 30, "day {day}");
    }
}
