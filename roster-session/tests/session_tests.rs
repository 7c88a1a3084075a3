use pretty_assertions::assert_eq;
use roster_model::RecordSchema;
use roster_session::{EditSession, Labels, SessionState, SubmitError, SubmitOutcome};
use roster_store::{RecordStore, StoreError};
use roster_types::{Field, Record, RecordKey, RecordPatch};

fn an() -> Record {
    Record::new("111111", "An Nguyen", "0911111111", "an@x.com")
}

fn binh() -> Record {
    Record::new("222222", "Binh Tran", "0922222222", "binh@x.com")
}

fn setup() -> (EditSession, RecordSchema, RecordStore) {
    (EditSession::new(), RecordSchema::student(), RecordStore::new())
}

// ── State transitions ────────────────────────────────────────────

#[test]
fn new_session_is_creating() {
    let session = EditSession::new();
    assert_eq!(session.state(), &SessionState::Creating);
    assert!(!session.is_editing());
    assert!(session.target().is_none());
}

#[test]
fn begin_edit_targets_key_and_returns_seed() {
    let mut session = EditSession::new();
    let seed = session.begin_edit(&an());
    assert_eq!(session.state(), &SessionState::Editing(RecordKey::new("111111")));
    assert_eq!(seed, RecordPatch::from(an()));
}

#[test]
fn cancel_returns_to_creating() {
    let mut session = EditSession::new();
    session.begin_edit(&an());
    session.cancel();
    assert_eq!(session.state(), &SessionState::Creating);
}

#[test]
fn submit_label_follows_state() {
    let labels = Labels::default();
    let mut session = EditSession::new();
    assert_eq!(session.submit_label(&labels), "Thêm sinh viên");
    session.begin_edit(&an());
    assert_eq!(session.submit_label(&labels), "Cập nhật sinh viên");
}

// ── Submit while creating ────────────────────────────────────────

#[test]
fn invalid_submit_writes_nothing() {
    let (mut session, schema, mut store) = setup();
    let values = RecordPatch::from(an()).with(Field::Email, "bad");

    let err = session.submit(&schema, &mut store, &values).unwrap_err();

    let SubmitError::Invalid(result) = err else {
        panic!("expected validation failure");
    };
    assert_eq!(result.error(Field::Email), Some("Email không hợp lệ"));
    assert!(store.is_empty());
}

#[test]
fn valid_submit_inserts() {
    let (mut session, schema, mut store) = setup();
    let outcome = session
        .submit(&schema, &mut store, &RecordPatch::from(an()))
        .unwrap();
    assert_eq!(outcome, SubmitOutcome::Inserted(an()));
    assert_eq!(outcome.record(), &an());
    assert_eq!(store.records(), &[an()]);
    assert_eq!(session.state(), &SessionState::Creating);
}

#[test]
fn duplicate_insert_is_reported_and_keeps_form() {
    let (mut session, schema, mut store) = setup();
    store.insert(an()).unwrap();

    let values = RecordPatch::from(an()).with(Field::FullName, "Other Name");
    let err = session.submit(&schema, &mut store, &values).unwrap_err();

    assert_eq!(err, SubmitError::Store(StoreError::DuplicateKey(an().key())));
    assert!(!err.resets_form());
    assert_eq!(store.records(), &[an()]);
}

// ── Submit while editing ─────────────────────────────────────────

#[test]
fn edit_submit_replaces_and_returns_to_creating() {
    let (mut session, schema, mut store) = setup();
    store.insert(an()).unwrap();

    let values = session
        .begin_edit(&an())
        .with(Field::PhoneNumber, "0999999999");
    let outcome = session.submit(&schema, &mut store, &values).unwrap();

    let expected = Record::new("111111", "An Nguyen", "0999999999", "an@x.com");
    assert_eq!(
        outcome,
        SubmitOutcome::Updated {
            key: an().key(),
            record: expected.clone()
        }
    );
    assert_eq!(store.records(), &[expected]);
    assert_eq!(session.state(), &SessionState::Creating);
}

#[test]
fn edit_round_trip_with_same_values_keeps_content() {
    let (mut session, schema, mut store) = setup();
    store.insert(an()).unwrap();
    store.insert(binh()).unwrap();
    let before = store.records().to_vec();

    let values = session.begin_edit(&binh());
    session.submit(&schema, &mut store, &values).unwrap();

    assert_eq!(store.records(), before.as_slice());
    assert_eq!(store.revision(), 3);
}

#[test]
fn invalid_edit_submit_stays_editing() {
    let (mut session, schema, mut store) = setup();
    store.insert(an()).unwrap();
    let values = session.begin_edit(&an()).with(Field::StudentId, "12");

    assert!(matches!(
        session.submit(&schema, &mut store, &values),
        Err(SubmitError::Invalid(_))
    ));
    assert!(session.is_editing());
    assert_eq!(store.records(), &[an()]);
}

#[test]
fn key_change_onto_existing_record_blocks_and_stays_editing() {
    let (mut session, schema, mut store) = setup();
    store.insert(an()).unwrap();
    store.insert(binh()).unwrap();

    let values = session.begin_edit(&an()).with(Field::StudentId, "222222");
    let err = session.submit(&schema, &mut store, &values).unwrap_err();

    assert_eq!(
        err,
        SubmitError::Store(StoreError::DuplicateKey(RecordKey::new("222222")))
    );
    assert!(!err.resets_form());
    assert_eq!(session.target(), Some(&an().key()));
    assert_eq!(store.records(), &[an(), binh()]);
}

#[test]
fn missing_target_is_surfaced_and_resets() {
    let (mut session, schema, mut store) = setup();
    let values = session.begin_edit(&an());

    let err = session.submit(&schema, &mut store, &values).unwrap_err();

    assert_eq!(err, SubmitError::Store(StoreError::NotFound(an().key())));
    assert!(err.resets_form());
    assert_eq!(session.state(), &SessionState::Creating);
    assert!(store.is_empty());
}

#[test]
fn submit_error_messages() {
    let invalid = RecordSchema::student().validate(&RecordPatch::new());
    assert_eq!(
        SubmitError::Invalid(invalid).to_string(),
        "4 field(s) failed validation"
    );
    assert_eq!(
        SubmitError::from(StoreError::NotFound(RecordKey::new("1"))).to_string(),
        "record not found: 1"
    );
}
