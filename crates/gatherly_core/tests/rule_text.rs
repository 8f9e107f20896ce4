use chrono::NaiveDate;
use gatherly_core::{format_rule, Frequency, RecurrenceRule, WeekDay, LAST_WEEK_DAY_OCCURRENCE};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

#[test]
fn daily_unbounded_rule_has_no_termination_clause() {
    let rule = RecurrenceRule::new(date(2024, 1, 1), Frequency::Daily);
    assert_eq!(format_rule(&rule), "every day");
}

#[test]
fn weekly_rule_enumerates_weekdays_monday_first() {
    let mut rule = RecurrenceRule::new(date(2024, 1, 1), Frequency::Weekly);
    rule.interval = 2;
    rule.week_days.insert(WeekDay::Wednesday);
    rule.week_days.insert(WeekDay::Monday);

    assert_eq!(format_rule(&rule), "every 2 weeks on Mon, Wed");
}

#[test]
fn monthly_rule_phrases_weekday_occurrence() {
    let mut rule = RecurrenceRule::new(date(2024, 1, 9), Frequency::Monthly);
    rule.week_days.insert(WeekDay::Tuesday);
    rule.week_day_occurrence_in_month = Some(2);

    assert_eq!(format_rule(&rule), "every month on the 2nd Tuesday");
}

#[test]
fn monthly_rule_phrases_last_weekday_occurrence() {
    let mut rule = RecurrenceRule::new(date(2024, 1, 26), Frequency::Monthly);
    rule.week_days.insert(WeekDay::Friday);
    rule.week_day_occurrence_in_month = Some(LAST_WEEK_DAY_OCCURRENCE);

    assert_eq!(format_rule(&rule), "every month on the last Friday");
}

#[test]
fn end_date_clause_is_appended() {
    let mut rule = RecurrenceRule::new(date(2024, 1, 1), Frequency::Daily);
    rule.recurrence_end_date = Some(date(2024, 1, 31));

    assert_eq!(format_rule(&rule), "every day until January 31, 2024");
}

#[test]
fn count_clause_is_appended_when_no_end_date() {
    let mut rule = RecurrenceRule::new(date(2024, 1, 1), Frequency::Yearly);
    rule.count = Some(10);

    assert_eq!(format_rule(&rule), "every year for 10 times");
}

#[test]
fn count_of_one_uses_singular_form() {
    let mut rule = RecurrenceRule::new(date(2024, 1, 1), Frequency::Monthly);
    rule.count = Some(1);

    assert_eq!(format_rule(&rule), "every month for 1 time");
}

#[test]
fn end_date_wins_over_count_when_both_are_set() {
    let mut rule = RecurrenceRule::new(date(2024, 1, 1), Frequency::Daily);
    rule.recurrence_end_date = Some(date(2024, 3, 1));
    rule.count = Some(5);

    assert_eq!(format_rule(&rule), "every day until March 1, 2024");
}

#[test]
fn format_rule_is_deterministic() {
    let mut rule = RecurrenceRule::new(date(2024, 1, 1), Frequency::Weekly);
    rule.week_days.insert(WeekDay::Saturday);
    rule.count = Some(4);

    assert_eq!(format_rule(&rule), format_rule(&rule.clone()));
}
