//! Month and weekday names.

/// Month names in the genitive case, as used in "the Nth of <month>".
///
/// Index 0 is January.
pub const MONTH_NAMES: [&str; 12] = [
    "і҆аннꙋа́рїа", // January
    "феврꙋа́рїа", // February
    "ма́рта", // March
    "а҆прі́ллїа", // April
    "ма́їа", // May
    "і҆ꙋ́нїа", // June
    "і҆ꙋ́лїа", // July
    "а҆́ѵгꙋста", // August
    "септе́мврїа", // September
    "ѻ҆ктѡ́врїа", // October
    "ное́мврїа", // November
    "деке́мврїа", // December
];

/// Weekday names. Index 0 is Sunday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Недѣ́лѧ", // Sunday
    "Понедѣ́льникъ", // Monday
    "Вто́рникъ", // Tuesday
    "Среда̀", // Wednesday
    "Четверто́къ", // Thursday
    "Пѧто́къ", // Friday
    "Сꙋббѡ́та", // Saturday
];

/// Returns the genitive month name for a 0-based month (0 = January).
///
/// Returns `None` for `month0 >= 12`.
pub fn month_name(month0: usize) -> Option<&'static str> {
    MONTH_NAMES.get(month0).copied()
}

/// Returns the weekday name for a Sunday-based weekday (0 = Sunday).
///
/// Returns `None` for `weekday >= 7`.
pub fn day_of_week_name(weekday: usize) -> Option<&'static str> {
    WEEKDAY_NAMES.get(weekday).copied()
}
