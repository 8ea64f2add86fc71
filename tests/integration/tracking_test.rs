//! End-to-end goal tracking through the public API: records roll up into
//! daily progress, goals follow the records, rollovers reset by period.

use chrono::NaiveDate;
use fittrack::commands::{self, Command};
use fittrack::{Category, FitCenter, Goal, PeriodType, Record, RecordData};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn exercise(d: NaiveDate, activity: &str, energy: f64) -> Record {
    Record::new(
        d,
        RecordData::Exercise {
            activity: activity.to_string(),
            energy_kcal: energy,
        },
    )
}

#[test]
fn test_daily_aggregate_drives_goal_progress() {
    let today = date(2024, 1, 1);
    let mut center = FitCenter::new();

    center.log_record(exercise(today, "running", 200.0), today);
    center.log_record(exercise(today, "swimming", 300.0), today);
    assert_eq!(center.daily_progress(Category::Exercise, today), 500.0);

    // A goal set the same day starts at the existing aggregate
    let goal = center.add_goal(Goal::new(
        Category::Exercise,
        PeriodType::Daily,
        600.0,
        today,
    ));
    assert_eq!(goal.progress, 500.0);

    // Another record pushes the goal over its target
    center.log_record(exercise(today, "cycling", 150.0), today);
    let goal = &center.goals(Category::Exercise)[0];
    assert_eq!(goal.progress, 650.0);
    assert!(goal.is_achieved());
}

#[test]
fn test_rollover_resets_daily_goals_across_categories() {
    let monday = date(2024, 1, 1);
    let mut center = FitCenter::new();

    for category in Category::ALL {
        center.add_goal(Goal::new(category, PeriodType::Daily, 100.0, monday));
    }
    center.add_goal(Goal::new(
        Category::Sleep,
        PeriodType::Weekly,
        56.0,
        monday,
    ));
    center.log_record(
        Record::new(monday, RecordData::Sleep { hours: 8.0 }),
        monday,
    );

    // New day: daily goals reset, the weekly goal persists
    center.reset_goal_progress(PeriodType::Daily);
    for category in Category::ALL {
        assert_eq!(center.goals(category)[0].progress, 0.0);
    }
    assert_eq!(center.goals(Category::Sleep)[1].progress, 8.0);

    // Refreshing against the new day rederives everything from that day's
    // records, of which there are none yet
    let tuesday = date(2024, 1, 2);
    center.refresh_daily_progress(tuesday);
    assert_eq!(center.goals(Category::Sleep)[1].progress, 0.0);

    let hours = Record::new(tuesday, RecordData::Sleep { hours: 6.0 });
    center.log_record(hours, tuesday);
    assert_eq!(center.goals(Category::Sleep)[0].progress, 6.0);
    assert_eq!(center.goals(Category::Sleep)[1].progress, 6.0);
}

#[test]
fn test_commands_drive_the_tracker() {
    let today = date(2024, 1, 1);
    let mut center = FitCenter::new();

    let add = commands::parse("add diet today 650 chicken rice", today).unwrap();
    let Command::AddRecord { record } = add else {
        panic!("expected AddRecord");
    };
    center.log_record(record, today);

    let goal = commands::parse("goal diet daily 2000", today).unwrap();
    let Command::SetGoal { goal } = goal else {
        panic!("expected SetGoal");
    };
    assert_eq!(center.add_goal(goal).progress, 650.0);

    let view = center.record_list_string(Category::Diet, Some(today), Some("chicken rice"));
    assert!(view.contains("650"));

    // Delete through a parsed 1-based index
    let delete = commands::parse("delete diet 1", today).unwrap();
    let Command::DeleteRecord { category, index } = delete else {
        panic!("expected DeleteRecord");
    };
    let summary = center.remove_record(category, index).unwrap();
    assert!(summary.contains("chicken rice"));
    assert_eq!(center.record_count(Category::Diet), 0);
}

#[test]
fn test_invalid_removals_keep_state_intact() {
    let today = date(2024, 1, 1);
    let mut center = FitCenter::new();
    center.log_record(exercise(today, "running", 200.0), today);

    assert!(center.remove_record(Category::Exercise, 5).is_err());
    assert!(center.cancel_goal(Category::Exercise, 0).is_err());
    assert_eq!(center.record_count(Category::Exercise), 1);
}
