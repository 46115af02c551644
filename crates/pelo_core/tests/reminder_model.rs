use chrono::{DateTime, Duration, TimeZone, Utc};
use pelo_core::{ModelValidationError, ReminderItem, ReminderList};
use uuid::Uuid;

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 20, hour, 0, 0).unwrap()
}

fn item(title: &str, created: DateTime<Utc>, due: Option<DateTime<Utc>>) -> ReminderItem {
    let mut item = ReminderItem::with_id(Uuid::new_v4(), title, created).unwrap();
    item.due_date = due;
    item
}

fn titles(list: &ReminderList) -> Vec<&str> {
    list.sorted_reminders()
        .into_iter()
        .map(|item| item.title.as_str())
        .collect()
}

#[test]
fn sorted_reminders_orders_open_dated_then_undated_then_completed() {
    let now = Utc::now();
    let mut list = ReminderList::new("errands");

    let a = item("A", now, Some(now + Duration::days(1)));
    let b = item("B", now, None);
    let mut c = item("C", now, Some(now - Duration::days(1)));
    c.is_completed = true;
    let d = item("D", now, Some(now - Duration::days(1)));
    list.reminders = vec![a, b, c, d];

    assert_eq!(titles(&list), vec!["D", "A", "B", "C"]);
}

#[test]
fn undated_reminders_fall_back_to_creation_order() {
    let mut list = ReminderList::new("ideas");
    list.reminders = vec![
        item("late", at(11), None),
        item("early", at(8), None),
        item("middle", at(9), None),
    ];

    assert_eq!(titles(&list), vec!["early", "middle", "late"]);
}

#[test]
fn completed_reminders_follow_the_same_rules_among_themselves() {
    let mut list = ReminderList::new("done");
    let mut undated = item("undated", at(7), None);
    let mut later = item("later", at(7), Some(at(18)));
    let mut sooner = item("sooner", at(7), Some(at(10)));
    for entry in [&mut undated, &mut later, &mut sooner] {
        entry.is_completed = true;
    }
    let open = item("open", at(12), None);
    list.reminders = vec![undated, later, open, sooner];

    assert_eq!(titles(&list), vec!["open", "sooner", "later", "undated"]);
}

#[test]
fn sorted_reminders_reflects_latest_state_and_keeps_storage_order() {
    let mut list = ReminderList::new("live");
    list.reminders = vec![item("first", at(8), None), item("second", at(9), None)];
    assert_eq!(titles(&list), vec!["first", "second"]);

    list.reminders[0].is_completed = true;
    assert_eq!(titles(&list), vec!["second", "first"]);
    assert_eq!(list.reminders[0].title, "first");
}

#[test]
fn past_due_flags_depend_on_completion() {
    let now = Utc::now();
    let mut reminder = item("call back", now, Some(now - Duration::days(2)));

    assert!(reminder.is_overdue_at(now));
    assert!(!reminder.is_due_today_at(&now));

    reminder.is_completed = true;
    assert!(!reminder.is_overdue_at(now));
    assert!(!reminder.is_due_today_at(&now));
}

#[test]
fn future_due_date_is_not_overdue() {
    let now = at(12);
    let reminder = item("pay rent", at(6), Some(now + Duration::days(3)));

    assert!(!reminder.is_overdue_at(now));
    assert!(!reminder.is_due_today_at(&now));
}

#[test]
fn with_id_rejects_nil_ids() {
    assert_eq!(
        ReminderItem::with_id(Uuid::nil(), "x", at(1)).unwrap_err(),
        ModelValidationError::NilReminderId
    );
    assert_eq!(
        ReminderList::with_id(Uuid::nil(), "x").unwrap_err(),
        ModelValidationError::NilListId
    );
}

#[test]
fn serialization_uses_camel_case_wire_fields() {
    let list_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let item_id = Uuid::parse_str("aaaaaaaa-bbbb-4ccc-8ddd-eeeeeeeeeeee").unwrap();
    let mut list = ReminderList::with_id(list_id, "Work").unwrap();
    let mut dated = ReminderItem::with_id(item_id, "ship release", at(9)).unwrap();
    dated.due_date = Some(at(17));
    list.reminders.push(dated);

    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(json["id"], list_id.to_string());
    assert_eq!(json["name"], "Work");
    assert_eq!(json["isDefault"], false);

    let reminder = &json["reminders"][0];
    assert_eq!(reminder["id"], item_id.to_string());
    assert_eq!(reminder["title"], "ship release");
    assert_eq!(reminder["isCompleted"], false);
    assert_eq!(reminder["createdDate"], "2026-05-20T09:00:00Z");
    assert_eq!(reminder["dueDate"], "2026-05-20T17:00:00Z");
}

#[test]
fn undated_reminder_omits_due_date_field() {
    let reminder = item("no rush", at(9), None);
    let json = serde_json::to_value(&reminder).unwrap();

    assert!(json.get("dueDate").is_none());
}
