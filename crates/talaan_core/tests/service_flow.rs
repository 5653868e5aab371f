use chrono::{NaiveDate, Utc};
use talaan_core::{
    calculate_age, CivilStatus, Gender, MemoryBackend, ResidentInput, ResidentService,
    ResidentStore, ServiceError, ValidationError, VoterStatus,
};
use uuid::Uuid;

fn service() -> ResidentService<MemoryBackend> {
    ResidentService::new(ResidentStore::new(MemoryBackend::new()))
}

fn input(first_name: &str) -> ResidentInput {
    ResidentInput {
        profile_picture: None,
        first_name: first_name.to_string(),
        middle_name: "Reyes".to_string(),
        last_name: "Santos".to_string(),
        suffix: None,
        birth_date: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
        gender: Gender::Female,
        civil_status: CivilStatus::Single,
        contact_number: "09171234567".to_string(),
        email: None,
        address: "12 Mabini St".to_string(),
        purok: "Purok 1".to_string(),
        occupation: None,
        monthly_income: None,
        household_head: false,
        household_id: None,
        voter_status: VoterStatus::default(),
        pwd_status: false,
        senior_citizen: false,
        indigent: false,
        remarks: None,
    }
}

#[test]
fn create_assigns_id_age_and_registration_timestamp() {
    let service = service();

    let id = service.create(input("Maria")).unwrap();
    let created = service.get(id).unwrap();

    assert!(!created.id.is_nil());
    assert_eq!(created.age, calculate_age(created.birth_date));
    let elapsed = Utc::now() - created.date_registered;
    assert!(elapsed.num_seconds() >= 0);
    assert!(elapsed.num_seconds() < 60);
}

#[test]
fn create_rejects_blank_required_fields() {
    let service = service();

    let mut blank_first = input("Maria");
    blank_first.first_name = "   ".to_string();
    let err = service.create(blank_first).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::MissingField("firstName"))
    ));

    let mut blank_purok = input("Maria");
    blank_purok.purok = String::new();
    let err = service.create(blank_purok).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::MissingField("purok"))
    ));

    assert!(service.list_all().is_empty());
}

#[test]
fn create_accepts_a_small_data_url_photo() {
    let service = service();

    let mut with_photo = input("Maria");
    with_photo.profile_picture = Some("data:image/png;base64,aGVsbG8=".to_string());
    let id = service.create(with_photo).unwrap();

    assert!(service.get(id).unwrap().profile_picture.is_some());
}

#[test]
fn create_rejects_photo_that_is_not_a_data_url() {
    let service = service();

    let mut bad_photo = input("Maria");
    bad_photo.profile_picture = Some("https://example.com/avatar.png".to_string());
    let err = service.create(bad_photo).unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::InvalidPhotoEncoding)
    ));
}

#[test]
fn create_rejects_oversized_photo() {
    let service = service();

    // ~7.5 MiB of decoded source, well past the 5 MiB gate.
    let mut big_photo = input("Maria");
    big_photo.profile_picture = Some(format!("data:image/png;base64,{}", "A".repeat(10_485_760)));
    let err = service.create(big_photo).unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::PhotoTooLarge { .. })
    ));
}

#[test]
fn update_recomputes_age_and_preserves_registration() {
    let service = service();

    let id = service.create(input("Maria")).unwrap();
    let created = service.get(id).unwrap();

    let mut revised = input("Maria");
    revised.birth_date = NaiveDate::from_ymd_opt(1955, 3, 2).unwrap();
    revised.senior_citizen = true;
    service.update(id, revised).unwrap();

    let updated = service.get(id).unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.date_registered, created.date_registered);
    assert_eq!(updated.age, calculate_age(updated.birth_date));
    assert!(updated.senior_citizen);
}

#[test]
fn update_keeps_the_record_position() {
    let service = service();

    let first = service.create(input("Maria")).unwrap();
    let second = service.create(input("Juan")).unwrap();
    let third = service.create(input("Pedro")).unwrap();

    let mut revised = input("Juanito");
    revised.civil_status = CivilStatus::Married;
    service.update(second, revised).unwrap();

    let all = service.list_all();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id, first);
    assert_eq!(all[1].id, second);
    assert_eq!(all[1].first_name, "Juanito");
    assert_eq!(all[2].id, third);
}

#[test]
fn update_missing_id_is_silent_success() {
    let service = service();

    let id = service.create(input("Maria")).unwrap();
    service.update(Uuid::new_v4(), input("Ghost")).unwrap();

    let all = service.list_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);
    assert_eq!(all[0].first_name, "Maria");
}

#[test]
fn remove_deletes_and_tolerates_repeats() {
    let service = service();

    let id = service.create(input("Maria")).unwrap();
    service.remove(id).unwrap();
    service.remove(id).unwrap();

    assert!(service.get(id).is_none());
    assert!(service.list_all().is_empty());
}

#[test]
fn read_paths_cover_search_filter_and_stats() {
    let service = service();

    let mut head = input("Maria");
    head.household_head = true;
    head.household_id = Some("H-001".to_string());
    head.voter_status = VoterStatus::Registered;
    service.create(head).unwrap();
    service.create(input("Juan")).unwrap();

    assert_eq!(service.search("mar").len(), 1);
    assert_eq!(service.distinct_puroks(), vec!["Purok 1".to_string()]);

    let stats = service.stats();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.voters_registered, 1);
    assert_eq!(stats.household_count, 1);

    let latest = service.recent(1);
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].first_name, "Juan");
}
