use projtrack_core::{
    App, DataTransfer, DropOutcome, InputField, ProjectStatus, RecordedAlerts, SubmitOutcome,
    INVALID_INPUT_MESSAGE, PLAIN_TEXT_MEDIA_TYPE,
};
use std::rc::Rc;
use uuid::Uuid;

fn setup() -> (App, Rc<RecordedAlerts>) {
    let alerts = Rc::new(RecordedAlerts::new());
    let app = App::new(alerts.clone()).unwrap();
    (app, alerts)
}

fn created(outcome: SubmitOutcome) -> Uuid {
    match outcome {
        SubmitOutcome::Created(id) => id,
        SubmitOutcome::Rejected => panic!("expected submit to create a project"),
    }
}

#[test]
fn build_api_scenario() {
    let (app, alerts) = setup();
    let id = created(
        app.submit("Build API", "Design the REST API", "3")
            .unwrap(),
    );

    let snapshot = app.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].status, ProjectStatus::Active);
    assert_eq!(snapshot[0].people_label(), "3 people assigned");
    assert_eq!(app.list(ProjectStatus::Active).item_count(), 1);
    assert!(alerts.is_empty());

    let outcome = app.drag_project(id, ProjectStatus::Finished).unwrap();
    assert_eq!(outcome, DropOutcome::Dropped);
    assert_eq!(
        app.store().get(id).unwrap().status,
        ProjectStatus::Finished
    );
    assert_eq!(app.list(ProjectStatus::Active).item_count(), 0);
    assert_eq!(app.list(ProjectStatus::Finished).item_count(), 1);

    let rendered = app.render_text();
    assert!(rendered.contains("\"3 people assigned\""));
    assert!(rendered.contains(&format!("li#{id}")));
}

#[test]
fn description_min_length_is_inclusive() {
    let (app, alerts) = setup();
    created(app.submit("X", "short", "2").unwrap());
    assert_eq!(app.submit("X", "shor", "2").unwrap(), SubmitOutcome::Rejected);

    assert_eq!(app.snapshot().len(), 1);
    assert_eq!(alerts.messages(), vec![INVALID_INPUT_MESSAGE.to_string()]);
}

#[test]
fn people_bounds_are_inclusive() {
    let (app, _alerts) = setup();
    for people in ["1", "5"] {
        created(app.submit("X", "valid description", people).unwrap());
    }
    for people in ["0", "6"] {
        assert_eq!(
            app.submit("X", "valid description", people).unwrap(),
            SubmitOutcome::Rejected
        );
    }
    assert_eq!(app.snapshot().len(), 2);
}

#[test]
fn invalid_submit_keeps_fields_and_fires_no_listener() {
    let (app, alerts) = setup();
    let notified = Rc::new(std::cell::Cell::new(0));
    let counter = Rc::clone(&notified);
    app.store().add_listener(move |_| {
        counter.set(counter.get() + 1);
        Ok(())
    });

    for (title, description, people) in [
        ("", "valid description", "2"),
        ("   ", "valid description", "2"),
        ("Title", "abc", "2"),
        ("Title", "valid description", "0"),
        ("Title", "valid description", "9"),
    ] {
        let outcome = app.submit(title, description, people).unwrap();
        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(app.input().field(InputField::Title).unwrap(), title);
        assert_eq!(app.input().field(InputField::People).unwrap(), people);
    }

    assert!(app.snapshot().is_empty());
    assert_eq!(notified.get(), 0);
    assert_eq!(alerts.len(), 5);
}

#[test]
fn valid_submit_clears_fields() {
    let (app, _alerts) = setup();
    created(app.submit("Title", "valid description", "2").unwrap());

    for field in [InputField::Title, InputField::Description, InputField::People] {
        assert_eq!(app.input().field(field).unwrap(), "");
    }
}

#[test]
fn drop_onto_same_list_is_a_no_op() {
    let (app, _alerts) = setup();
    let id = created(app.submit("Stay", "stays active", "2").unwrap());
    let before = app.snapshot();

    let outcome = app.drag_project(id, ProjectStatus::Active).unwrap();

    assert_eq!(outcome, DropOutcome::Dropped);
    assert_eq!(app.snapshot(), before);
    assert_eq!(app.list(ProjectStatus::Active).item_count(), 1);
}

#[test]
fn stale_payload_is_ignored() {
    let (app, _alerts) = setup();
    created(app.submit("Keep", "stays active", "2").unwrap());
    let before = app.snapshot();

    let mut transfer = DataTransfer::new();
    transfer.set_data(PLAIN_TEXT_MEDIA_TYPE, Uuid::new_v4().to_string());
    let outcome = app.drop_on(ProjectStatus::Finished, transfer).unwrap();

    assert_eq!(outcome, DropOutcome::Dropped);
    assert_eq!(app.snapshot(), before);
    assert_eq!(app.list(ProjectStatus::Finished).item_count(), 0);
    assert!(!app
        .list(ProjectStatus::Finished)
        .is_drop_candidate()
        .unwrap());
}

#[test]
fn foreign_payload_is_rejected_without_drop() {
    let (app, _alerts) = setup();
    let id = created(app.submit("Keep", "stays active", "2").unwrap());

    let mut transfer = DataTransfer::new();
    transfer.set_data("application/json", "{}");
    transfer.set_data(PLAIN_TEXT_MEDIA_TYPE, id.to_string());
    let outcome = app.drop_on(ProjectStatus::Finished, transfer).unwrap();

    assert_eq!(outcome, DropOutcome::Rejected);
    assert_eq!(app.store().get(id).unwrap().status, ProjectStatus::Active);
}

#[test]
fn list_rows_follow_snapshot_order_after_moves() {
    let (app, _alerts) = setup();
    let a = created(app.submit("A", "first project", "1").unwrap());
    let b = created(app.submit("B", "second project", "2").unwrap());
    let c = created(app.submit("C", "third project", "3").unwrap());

    app.drag_project(c, ProjectStatus::Finished).unwrap();
    app.drag_project(a, ProjectStatus::Finished).unwrap();

    let finished = app
        .list(ProjectStatus::Finished)
        .assigned_projects()
        .iter()
        .map(|project| project.id)
        .collect::<Vec<_>>();
    assert_eq!(finished, vec![a, c]);
    let active = app
        .list(ProjectStatus::Active)
        .assigned_projects()
        .iter()
        .map(|project| project.id)
        .collect::<Vec<_>>();
    assert_eq!(active, vec![b]);
}

#[test]
fn rerender_does_not_grow_the_document() {
    let (app, _alerts) = setup();
    let id = created(app.submit("A", "first project", "1").unwrap());
    let baseline = app.document().borrow().live_nodes();

    for _ in 0..10 {
        app.drag_project(id, ProjectStatus::Finished).unwrap();
        app.drag_project(id, ProjectStatus::Active).unwrap();
    }

    assert_eq!(app.document().borrow().live_nodes(), baseline);
}
