use super::prelude::*;

#[test]
fn submit_approve_and_check() {
    let fixture = BackendFixture::new();
    let admin = fixture.create_user("admin@campus.edu", Role::User);
    let staff = fixture.create_user("staff@campus.edu", Role::Staff);
    let org_id = fixture.create_org_with_images(admin, "Chess Club");

    flows::submit_for_official(&fixture.db_connections, admin, Some(org_id.clone()), None)
        .unwrap();
    assert!(fixture.is_pending(&org_id));
    assert!(!fixture.is_official(&org_id));

    flows::approve_official(&fixture.db_connections, staff, Some(org_id.clone()), None).unwrap();
    assert!(!fixture.is_pending(&org_id));
    assert!(fixture.is_official(&org_id));
}

#[test]
fn duplicate_submission_is_rejected() {
    let fixture = BackendFixture::new();
    let admin = fixture.create_user("admin@campus.edu", Role::User);
    let org_id = fixture.create_org_with_images(admin, "Chess Club");

    flows::submit_for_official(&fixture.db_connections, admin, Some(org_id.clone()), None)
        .unwrap();
    let err = flows::submit_for_official(&fixture.db_connections, admin, Some(org_id), None)
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::AlreadyPending))
    ));
}

#[test]
fn failed_approval_leaves_pending_submission_untouched() {
    let fixture = BackendFixture::new();
    let admin = fixture.create_user("admin@campus.edu", Role::User);
    let org_id = fixture.create_org_with_images(admin, "Chess Club");

    flows::submit_for_official(&fixture.db_connections, admin, Some(org_id.clone()), None)
        .unwrap();
    // The submitter lacks the staff role.
    let err = flows::approve_official(&fixture.db_connections, admin, Some(org_id.clone()), None)
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::Forbidden))
    ));
    assert!(fixture.is_pending(&org_id));
    assert!(!fixture.is_official(&org_id));
}

#[test]
fn reject_allows_a_fresh_submission() {
    let fixture = BackendFixture::new();
    let admin = fixture.create_user("admin@campus.edu", Role::User);
    let staff = fixture.create_user("staff@campus.edu", Role::Staff);
    let org_id = fixture.create_org_with_images(admin, "Chess Club");

    flows::submit_for_official(&fixture.db_connections, admin, Some(org_id.clone()), None)
        .unwrap();
    flows::reject_official(&fixture.db_connections, staff, Some(org_id.clone()), None).unwrap();
    assert!(!fixture.is_pending(&org_id));
    assert!(!fixture.is_official(&org_id));

    flows::submit_for_official(&fixture.db_connections, admin, Some(org_id.clone()), None)
        .unwrap();
    assert!(fixture.is_pending(&org_id));
}

#[test]
fn approve_event_submission() {
    let fixture = BackendFixture::new();
    let admin = fixture.create_user("admin@campus.edu", Role::User);
    let staff = fixture.create_user("staff@campus.edu", Role::Staff);
    let org_id = fixture.create_org_with_images(admin, "Chess Club");
    let event_id = flows::create_event(
        &fixture.db_connections,
        admin,
        usecases::NewEvent {
            org_id,
            title: "Blitz night".into(),
            description: None,
            start: Timestamp::from_secs(1_760_000_000),
            end: None,
            thumbnail_url: Some("https://img.campus.edu/t.png".into()),
            banner_url: Some("https://img.campus.edu/b.png".into()),
            visibility: EventVisibility::Public,
            location: None,
        },
    )
    .unwrap();

    flows::submit_for_official(&fixture.db_connections, admin, None, Some(event_id.clone()))
        .unwrap();
    flows::approve_official(&fixture.db_connections, staff, None, Some(event_id.clone()))
        .unwrap();
    let db = fixture.db_connections.shared().unwrap();
    assert!(usecases::check_official(&db, None, Some(event_id)).unwrap());
}
