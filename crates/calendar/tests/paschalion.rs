use octoechos_calendar::{
    EARLIEST_PASCHA, GregorianDate, LATEST_PASCHA, julian_offset, julian_pascha,
    julian_pascha_month_day, pascha,
};

#[test]
fn published_dates() {
    // Orthodox Pascha, Gregorian calendar.
    let cases: &[(i32, u32, u32)] = &[
        (2000, 4, 30),
        (2010, 4, 4),
        (2020, 4, 19),
        (2021, 5, 2),
        (2022, 4, 24),
        (2023, 4, 16),
        (2024, 5, 5),
        (2025, 4, 20),
        (2026, 4, 12),
    ];
    for &(year, month, day) in cases {
        assert_eq!(
            pascha(year).unwrap(),
            GregorianDate::new(year, month, day).unwrap(),
            "Pascha {year}"
        );
    }
}

#[test]
fn julian_month_day_within_canonical_bounds() {
    for year in -5000..=5000 {
        let md = julian_pascha_month_day(year);
        assert!(
            md >= EARLIEST_PASCHA && md <= LATEST_PASCHA,
            "Pascha {year} at Julian {md:?} is out of bounds"
        );
    }
}

#[test]
fn bounds_are_reached() {
    let all: Vec<(u8, u8)> = (1900..=2500).map(julian_pascha_month_day).collect();
    assert!(all.contains(&EARLIEST_PASCHA));
    assert!(all.contains(&LATEST_PASCHA));
}

#[test]
fn paschal_cycle_repeats_every_532_years() {
    for year in 1500..2100 {
        assert_eq!(
            julian_pascha_month_day(year),
            julian_pascha_month_day(year + 532),
            "cycle broken at {year}"
        );
    }
}

#[test]
fn gregorian_is_julian_plus_offset() {
    for year in 1583..=2400 {
        let j = julian_pascha(year).unwrap();
        let g = pascha(year).unwrap();
        assert_eq!(g.days_since(GregorianDate::new(year, j.month(), j.day()).unwrap()), julian_offset(year));
        assert_eq!(j.year(), year);
    }
}

#[test]
fn always_a_sunday() {
    for year in 1583..=2400 {
        let g = pascha(year).unwrap();
        assert_eq!(g.weekday_from_sunday(), 0, "Pascha {year} = {g} is not a Sunday");
    }
}
